pub mod purchase;
pub mod seat;

pub use purchase::PurchaseRequest;
pub use seat::{Seat, SeatStatus};
