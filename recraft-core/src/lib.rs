pub mod calculations;
pub mod models;

pub use calculations::{calculate, is_special_combination, select_return_rate};
pub use models::*;
