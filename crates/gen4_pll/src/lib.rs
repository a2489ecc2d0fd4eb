//! PLL clock and millisecond-counter drift calculator.
//!
//! Given an input clock and the three integer dividers of a PLL, derives the
//! primary (`CLKOP`) and secondary (`CLKOK`) output clocks and works out how
//! far a millisecond counter clocked from `CLKOK` drifts once its ideal,
//! fractional tick count is rounded to an integer.

#![warn(missing_docs)]

pub mod error;
pub mod params;
pub mod report;

pub use error::PllError;
pub use params::PllParams;
pub use report::{compute, ClockReport, DriftDirection};
