//! Core domain - pure unit algebra, no I/O
//! Contains: Dimension, Unit, Quantity

pub mod dimension;
pub mod quantity;
pub mod unit;

pub use dimension::Dimension;
pub use quantity::{convert_value, Quantity};
pub use unit::Unit;
