//! display.rs
//!
//! Тонкий слой отображения: рисует зал в терминале. Ядро (`SeatGrid`) про
//! отображение ничего не знает.

use std::fmt::Write as _;

use crate::grid::SeatGrid;
use crate::models::{Seat, SeatStatus};

/// Размер места в пикселях по ширине области просмотра.
pub fn seat_size_for_width(width: u32) -> u32 {
    if width < 480 {
        20
    } else if width < 768 {
        25
    } else if width < 1024 {
        30
    } else {
        35
    }
}

fn seat_symbol(status: SeatStatus) -> char {
    match status {
        SeatStatus::Available => '.',
        SeatStatus::Occupied => 'x',
        SeatStatus::Selected => '*',
    }
}

/// Рисует зал: экран, номера рядов и мест. При размере места от 30px
/// клетки раздвигаются пробелами.
pub fn render_grid(grid: &SeatGrid, seat_size: u32) -> String {
    let gap = if seat_size >= 30 { " " } else { "" };
    let mut out = String::new();

    let width = (grid.columns() as usize) * (1 + gap.len());
    writeln!(out, "     {:^width$}", "[ ЭКРАН ]", width = width).ok();

    // номера мест
    out.push_str("     ");
    for number in 1..=grid.columns() {
        write!(out, "{}{}", number % 10, gap).ok();
    }
    out.push('\n');

    let mut row = 0;
    for seat in grid.seats() {
        if seat.row != row {
            if row != 0 {
                out.push('\n');
            }
            row = seat.row;
            write!(out, "{:>3}  ", row).ok();
        }
        write!(out, "{}{}", seat_symbol(seat.status), gap).ok();
    }
    out.push('\n');

    out
}

pub fn render_legend() -> &'static str {
    ". свободно   x занято   * выбрано"
}

/// Список выбранных мест в порядке выбора.
pub fn render_selection(seats: &[&Seat]) -> String {
    if seats.is_empty() {
        return "Места не выбраны".to_string();
    }

    let mut out = String::from("Выбранные места:\n");
    for seat in seats {
        writeln!(out, "  ряд {}, место {}", seat.row, seat.number).ok();
    }
    out
}
