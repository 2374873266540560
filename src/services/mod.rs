pub mod box_office;

pub use box_office::{BoxOfficeClient, Credentials};
