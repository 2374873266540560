use serde::{Deserialize, Serialize};

// Статус места. Ровно один вариант в любой момент времени.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Occupied,
    Selected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: String,
    pub row: i32,
    pub number: i32,
    pub status: SeatStatus,
}

impl Seat {
    /// Идентификатор вида `"3-4"`: ряд, затем номер места в ряду.
    pub fn seat_id(row: i32, number: i32) -> String {
        format!("{}-{}", row, number)
    }
}
