use serde::{Deserialize, Serialize};

use super::Seat;

/// Тело запроса на покупку билетов.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRequest {
    #[serde(rename = "movieName")]
    pub movie_name: String,
    pub cinema: String,
    pub seats: Vec<Seat>,
}
