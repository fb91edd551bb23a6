//! Application state module

mod app_state;
mod forms;
mod splash_state;
pub mod toppings;

pub use app_state::*;
pub use forms::*;
pub use splash_state::*;
