pub mod calculations;
pub mod calculator;
pub mod models;
pub mod parse;

pub use calculator::TipCalculator;
pub use models::*;
