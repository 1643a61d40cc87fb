pub mod bill;
pub mod calculator;
pub mod line_item;
pub mod utility;
