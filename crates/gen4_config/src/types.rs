//! Configuration types deserialized from `gen4.toml`.

use gen4_common::Frequency;
use serde::Deserialize;

/// The top-level tool configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolsConfig {
    /// PLL parameters for the frequency calculator.
    #[serde(default)]
    pub pll: PllSection,
}

/// The `[pll]` table. Every field is optional.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PllSection {
    /// Input clock frequency, e.g. `"33.333333MHz"` or `33333333`.
    pub input: Option<Frequency>,
    /// Input (reference) divider.
    pub input_div: Option<u32>,
    /// Feedback divider, i.e. the VCO multiplication ratio.
    pub feedback_div: Option<u32>,
    /// Output divider for the secondary (`CLKOK`) clock.
    pub output_div: Option<u32>,
}

impl PllSection {
    /// Overlays `other` on top of `self`: fields set in `other` win.
    pub fn merged_with(&self, other: &PllSection) -> PllSection {
        PllSection {
            input: other.input.or(self.input),
            input_div: other.input_div.or(self.input_div),
            feedback_div: other.feedback_div.or(self.feedback_div),
            output_div: other.output_div.or(self.output_div),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_other() {
        let file = PllSection {
            input: Some(Frequency::new(25_000_000.0)),
            input_div: Some(1),
            feedback_div: Some(4),
            output_div: None,
        };
        let cli = PllSection {
            feedback_div: Some(8),
            output_div: Some(50),
            ..Default::default()
        };
        let merged = file.merged_with(&cli);
        assert_eq!(merged.input, Some(Frequency::new(25_000_000.0)));
        assert_eq!(merged.input_div, Some(1));
        assert_eq!(merged.feedback_div, Some(8));
        assert_eq!(merged.output_div, Some(50));
    }

    #[test]
    fn merge_with_empty_is_identity() {
        let file = PllSection {
            output_div: Some(100),
            ..Default::default()
        };
        assert_eq!(file.merged_with(&PllSection::default()), file);
    }
}
