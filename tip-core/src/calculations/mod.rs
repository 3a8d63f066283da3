//! Tip calculation modules.
//!
//! The arithmetic here works on already-parsed values; turning raw user input
//! into those values is the job of [`crate::parse`].

pub mod common;
pub mod tip;

pub use tip::{TipCalculationError, TipCalculationInput, calculate};
