//! Form state management

mod field;
mod form_state;
mod validation;

pub use field::*;
pub use form_state::*;
pub use validation::*;
