pub mod config;
pub mod day;
pub mod store;

pub use day::{DayEntry, FoodItem};
pub use store::Store;
