//! PLL input parameters.

use gen4_common::Frequency;
use gen4_config::PllSection;
use serde::Serialize;

use crate::error::PllError;

/// Input clock of the reference board, in Hz.
pub const DEFAULT_INPUT_HZ: f64 = 33_333_333.0;
/// Reference divider of the reference board.
pub const DEFAULT_INPUT_DIV: u32 = 1;
/// Feedback divider of the reference board.
pub const DEFAULT_FEEDBACK_DIV: u32 = 3;
/// `CLKOK` output divider of the reference board.
pub const DEFAULT_OUTPUT_DIV: u32 = 100;

/// The inputs of a PLL configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PllParams {
    /// Input clock frequency.
    pub input: Frequency,
    /// Input (reference) divider.
    pub input_div: u32,
    /// Feedback divider.
    pub feedback_div: u32,
    /// Secondary output divider.
    pub output_div: u32,
}

impl Default for PllParams {
    fn default() -> Self {
        Self {
            input: Frequency::new(DEFAULT_INPUT_HZ),
            input_div: DEFAULT_INPUT_DIV,
            feedback_div: DEFAULT_FEEDBACK_DIV,
            output_div: DEFAULT_OUTPUT_DIV,
        }
    }
}

impl PllParams {
    /// Builds parameters from a config section, falling back to the defaults
    /// for anything left unset.
    pub fn from_section(section: &PllSection) -> Self {
        let defaults = Self::default();
        Self {
            input: section.input.unwrap_or(defaults.input),
            input_div: section.input_div.unwrap_or(defaults.input_div),
            feedback_div: section.feedback_div.unwrap_or(defaults.feedback_div),
            output_div: section.output_div.unwrap_or(defaults.output_div),
        }
    }

    /// Checks that every divisor used by the computation is non-zero.
    pub fn validate(&self) -> Result<(), PllError> {
        if !self.input.is_valid() {
            return Err(PllError::InvalidInputFrequency(self.input.hz()));
        }
        for (name, value) in [
            ("input_div", self.input_div),
            ("feedback_div", self.feedback_div),
            ("output_div", self.output_div),
        ] {
            if value == 0 {
                return Err(PllError::ZeroDivider { name });
            }
        }
        Ok(())
    }
}
