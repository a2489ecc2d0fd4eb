//! Errors produced while computing a clock report.

/// Parameter combinations the closed-form computation cannot handle.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PllError {
    /// One of the PLL dividers is zero.
    #[error("{name} must be non-zero")]
    ZeroDivider {
        /// The divider's parameter name.
        name: &'static str,
    },

    /// The input clock is zero, negative, or not a finite number.
    #[error("input frequency must be positive and finite, got {0} Hz")]
    InvalidInputFrequency(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_zero_divider() {
        let err = PllError::ZeroDivider { name: "output_div" };
        assert_eq!(format!("{err}"), "output_div must be non-zero");
    }

    #[test]
    fn display_invalid_input() {
        let err = PllError::InvalidInputFrequency(-1.0);
        assert_eq!(
            format!("{err}"),
            "input frequency must be positive and finite, got -1 Hz"
        );
    }
}
