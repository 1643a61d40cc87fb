#[macro_use]
mod macros;

pub mod cost;
pub mod discount;
pub mod usage;
