//! grid.rs
//!
//! Ядро зала: решетка мест фиксированного размера и логика выбора.
//!
//! Решетка строится заново при каждой загрузке занятости — частичных
//! обновлений нет, загрузка всегда полный сброс. Все изменения статусов
//! проходят через `toggle`, поэтому список выбранных мест и статусы мест
//! не могут разойтись.

use std::collections::HashMap;

use crate::error::GridError;
use crate::models::{Seat, SeatStatus};

/// Количество рядов в зале.
pub const ROWS: i32 = 15;
/// Количество мест в ряду.
pub const COLUMNS: i32 = 10;

#[derive(Debug, Clone)]
pub struct SeatGrid {
    // Места в порядке ряд-за-рядом (ряд 1..=15, место 1..=10).
    seats: Vec<Seat>,
    // id -> позиция в `seats`.
    index: HashMap<String, usize>,
    // Порядок выбора: последнее выбранное место — в конце.
    selection: Vec<String>,
}

impl SeatGrid {
    // Зал без занятых мест.
    fn empty() -> Self {
        let capacity = (ROWS * COLUMNS) as usize;
        let mut seats = Vec::with_capacity(capacity);
        let mut index = HashMap::with_capacity(capacity);

        for row in 1..=ROWS {
            for number in 1..=COLUMNS {
                let id = Seat::seat_id(row, number);
                index.insert(id.clone(), seats.len());
                seats.push(Seat {
                    id,
                    row,
                    number,
                    status: SeatStatus::Available,
                });
            }
        }

        SeatGrid {
            seats,
            index,
            selection: Vec::new(),
        }
    }

    /// Строит зал, помечая перечисленные места занятыми.
    ///
    /// Идентификатор, не совпадающий ни с одним местом зала (кривой формат
    /// или ряд/номер вне диапазона), считается битыми данными занятости и
    /// отклоняется целиком.
    pub fn new(occupied_ids: &[String]) -> Result<Self, GridError> {
        let mut grid = Self::empty();

        for id in occupied_ids {
            match grid.index.get(id.as_str()) {
                Some(&pos) => grid.seats[pos].status = SeatStatus::Occupied,
                None => return Err(GridError::InvalidOccupancyId(id.clone())),
            }
        }

        Ok(grid)
    }

    /// Зал, в котором все места свободны.
    pub fn all_available() -> Self {
        Self::empty()
    }

    /// Полный сброс: решетка строится заново по новым данным занятости,
    /// прежний выбор пропадает. При битых данных текущее состояние
    /// не меняется.
    pub fn reset(&mut self, occupied_ids: &[String]) -> Result<(), GridError> {
        *self = Self::new(occupied_ids)?;
        Ok(())
    }

    /// Переключает место: свободное становится выбранным, выбранное —
    /// свободным. Занятые места не интерактивны — вызов ничего не меняет.
    pub fn toggle(&mut self, seat_id: &str) -> Result<SeatStatus, GridError> {
        let pos = *self
            .index
            .get(seat_id)
            .ok_or_else(|| GridError::UnknownSeatId(seat_id.to_string()))?;

        match self.seats[pos].status {
            SeatStatus::Available => {
                self.seats[pos].status = SeatStatus::Selected;
                self.selection.push(self.seats[pos].id.clone());
                Ok(SeatStatus::Selected)
            }
            SeatStatus::Selected => {
                self.seats[pos].status = SeatStatus::Available;
                self.selection.retain(|id| id != seat_id);
                Ok(SeatStatus::Available)
            }
            SeatStatus::Occupied => Ok(SeatStatus::Occupied),
        }
    }

    /// Место по идентификатору.
    pub fn seat(&self, seat_id: &str) -> Option<&Seat> {
        self.index.get(seat_id).map(|&pos| &self.seats[pos])
    }

    /// Все места в порядке ряд-за-рядом.
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter()
    }

    /// Выбранные места в порядке выбора: снятое и заново выбранное место
    /// уходит в конец списка.
    pub fn selected_seats(&self) -> Vec<&Seat> {
        self.selection
            .iter()
            .filter_map(|id| self.seat(id))
            .collect()
    }

    pub fn total_seats(&self) -> usize {
        self.seats.len()
    }

    pub fn rows(&self) -> i32 {
        ROWS
    }

    pub fn columns(&self) -> i32 {
        COLUMNS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn creates_full_hall_in_row_major_order() {
        let grid = SeatGrid::all_available();
        assert_eq!(grid.total_seats(), 150);

        let seats: Vec<&Seat> = grid.seats().collect();
        assert_eq!(seats[0].id, "1-1");
        assert_eq!(seats[9].id, "1-10");
        assert_eq!(seats[10].id, "2-1");
        assert_eq!(seats[149].id, "15-10");

        // у каждой пары (ряд, номер) ровно одно место с уникальным id
        let mut seen = std::collections::HashSet::new();
        for seat in grid.seats() {
            assert!((1..=ROWS).contains(&seat.row));
            assert!((1..=COLUMNS).contains(&seat.number));
            assert_eq!(seat.id, Seat::seat_id(seat.row, seat.number));
            assert!(seen.insert(seat.id.clone()));
        }
        assert_eq!(seen.len(), 150);
    }

    #[test]
    fn marks_listed_seats_occupied_and_rest_available() {
        let grid = SeatGrid::new(&ids(&["3-4", "7-1"])).unwrap();

        for seat in grid.seats() {
            let expected = if seat.id == "3-4" || seat.id == "7-1" {
                SeatStatus::Occupied
            } else {
                SeatStatus::Available
            };
            assert_eq!(seat.status, expected, "seat {}", seat.id);
        }
    }

    #[test]
    fn rejects_malformed_occupancy_id() {
        let err = SeatGrid::new(&ids(&["3-4", "banana"])).unwrap_err();
        assert_eq!(err, GridError::InvalidOccupancyId("banana".to_string()));
    }

    #[test]
    fn rejects_out_of_range_occupancy_id() {
        let err = SeatGrid::new(&ids(&["16-1"])).unwrap_err();
        assert_eq!(err, GridError::InvalidOccupancyId("16-1".to_string()));

        let err = SeatGrid::new(&ids(&["1-11"])).unwrap_err();
        assert_eq!(err, GridError::InvalidOccupancyId("1-11".to_string()));

        let err = SeatGrid::new(&ids(&["0-5"])).unwrap_err();
        assert_eq!(err, GridError::InvalidOccupancyId("0-5".to_string()));
    }

    #[test]
    fn toggle_selects_and_deselects() {
        let mut grid = SeatGrid::all_available();

        assert_eq!(grid.toggle("1-1").unwrap(), SeatStatus::Selected);
        assert_eq!(grid.seat("1-1").unwrap().status, SeatStatus::Selected);

        assert_eq!(grid.toggle("1-1").unwrap(), SeatStatus::Available);
        assert_eq!(grid.seat("1-1").unwrap().status, SeatStatus::Available);
        assert!(grid.selected_seats().is_empty());
    }

    #[test]
    fn toggle_on_occupied_seat_changes_nothing() {
        let mut grid = SeatGrid::new(&ids(&["3-4"])).unwrap();
        let before: Vec<Seat> = grid.seats().cloned().collect();

        assert_eq!(grid.toggle("3-4").unwrap(), SeatStatus::Occupied);

        let after: Vec<Seat> = grid.seats().cloned().collect();
        assert_eq!(before, after);
        assert!(grid.selected_seats().is_empty());
    }

    #[test]
    fn toggle_on_unknown_seat_fails() {
        let mut grid = SeatGrid::all_available();
        let err = grid.toggle("99-99").unwrap_err();
        assert_eq!(err, GridError::UnknownSeatId("99-99".to_string()));
    }

    #[test]
    fn reselected_seat_moves_to_end_of_selection() {
        let mut grid = SeatGrid::all_available();
        grid.toggle("1-1").unwrap(); // A
        grid.toggle("2-2").unwrap(); // B
        grid.toggle("3-3").unwrap(); // C
        grid.toggle("2-2").unwrap(); // снять B
        grid.toggle("2-2").unwrap(); // выбрать B заново

        let order: Vec<&str> = grid
            .selected_seats()
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(order, vec!["1-1", "3-3", "2-2"]);
    }

    #[test]
    fn reset_discards_selection_and_applies_new_occupancy() {
        let mut grid = SeatGrid::all_available();
        grid.toggle("1-1").unwrap();
        grid.toggle("2-2").unwrap();

        grid.reset(&ids(&["5-5"])).unwrap();
        assert!(grid.selected_seats().is_empty());
        assert_eq!(grid.seat("5-5").unwrap().status, SeatStatus::Occupied);
        assert_eq!(grid.seat("1-1").unwrap().status, SeatStatus::Available);

        // битые данные не трогают текущее состояние
        grid.toggle("1-1").unwrap();
        grid.reset(&ids(&["nope"])).unwrap_err();
        assert_eq!(grid.seat("1-1").unwrap().status, SeatStatus::Selected);
    }

    #[test]
    fn end_to_end_scenario() {
        let mut grid = SeatGrid::new(&ids(&["3-4", "7-1"])).unwrap();
        assert_eq!(grid.total_seats(), 150);
        assert_eq!(grid.seat("3-4").unwrap().status, SeatStatus::Occupied);
        assert_eq!(grid.seat("7-1").unwrap().status, SeatStatus::Occupied);

        assert_eq!(grid.toggle("3-4").unwrap(), SeatStatus::Occupied);
        assert_eq!(grid.seat("3-4").unwrap().status, SeatStatus::Occupied);

        assert_eq!(grid.toggle("1-1").unwrap(), SeatStatus::Selected);
        let selected = grid.selected_seats();
        assert_eq!(selected.len(), 1);
        assert_eq!((selected[0].row, selected[0].number), (1, 1));

        assert_eq!(grid.toggle("1-1").unwrap(), SeatStatus::Available);
        assert!(grid.selected_seats().is_empty());
    }

    proptest! {
        // Двойное переключение возвращает незанятое место в исходный статус.
        #[test]
        fn toggle_is_idempotent_for_free_seats(row in 1..=ROWS, number in 1..=COLUMNS) {
            let mut grid = SeatGrid::all_available();
            let id = Seat::seat_id(row, number);

            let before = grid.seat(&id).unwrap().status;
            grid.toggle(&id).unwrap();
            grid.toggle(&id).unwrap();
            prop_assert_eq!(grid.seat(&id).unwrap().status, before);
        }

        // После любой последовательности переключений список выбранных мест
        // совпадает с множеством мест в статусе Selected.
        #[test]
        fn selection_matches_selected_statuses(
            toggles in proptest::collection::vec((1..=ROWS, 1..=COLUMNS), 0..40),
            occupied_row in 1..=ROWS,
        ) {
            let occupied = vec![Seat::seat_id(occupied_row, 1)];
            let mut grid = SeatGrid::new(&occupied).unwrap();

            for (row, number) in toggles {
                grid.toggle(&Seat::seat_id(row, number)).unwrap();
            }

            let from_order: std::collections::HashSet<String> = grid
                .selected_seats()
                .iter()
                .map(|s| s.id.clone())
                .collect();
            let from_status: std::collections::HashSet<String> = grid
                .seats()
                .filter(|s| s.status == SeatStatus::Selected)
                .map(|s| s.id.clone())
                .collect();

            prop_assert_eq!(&from_order, &from_status);
            prop_assert_eq!(grid.selected_seats().len(), from_status.len());
        }
    }
}
