//! Shared value types for the gen4 HDL workflow utilities.

#![warn(missing_docs)]

pub mod frequency;

pub use frequency::{Frequency, ParseFrequencyError};
