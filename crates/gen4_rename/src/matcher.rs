//! The ordered declaration matchers and the name conversions they apply.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

use crate::direction::{ParseDirectionError, PortDirection};
use crate::error::RenameError;
use crate::scan::RenameCandidate;

/// The kind of declaration a line was recognised as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    /// `NAME : in|out|inout ...`
    Port,
    /// `signal NAME ...` or `constant NAME ...`
    Signal,
}

type Convert = fn(&str, &Captures<'_>) -> Result<String, ParseDirectionError>;

struct Matcher {
    kind: DeclarationKind,
    regex: Regex,
    /// Capture group holding the declared name.
    group: usize,
    convert: Convert,
}

/// Tried in order; the first matcher that hits a line wins.
static MATCHERS: Lazy<[Matcher; 2]> = Lazy::new(|| {
    [
        Matcher {
            kind: DeclarationKind::Port,
            // `\b` stops `: integer` or `: input_t` from reading as a direction.
            regex: Regex::new(r"(\w+)\s*:\s*(in|out|inout)\b").expect("port pattern is valid"),
            group: 1,
            convert: |name, caps| convert_port_name(name, &caps[2]),
        },
        Matcher {
            kind: DeclarationKind::Signal,
            regex: Regex::new(r"(signal|constant)\s+(\w+)").expect("signal pattern is valid"),
            group: 2,
            convert: |name, _| Ok(convert_signal_name(name)),
        },
    ]
});

static DIRECTION_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+)_[IO]+$").expect("suffix pattern is valid"));

/// Converts a port name for the given direction token.
///
/// A trailing old-style direction suffix (`_I`, `_O`, `_IO`, ...) is dropped
/// before lower-casing and prefixing: `CLK_I` + `in` becomes `i_clk`.
pub fn convert_port_name(name: &str, direction: &str) -> Result<String, ParseDirectionError> {
    let direction: PortDirection = direction.parse()?;
    let stem = match DIRECTION_SUFFIX.captures(name) {
        Some(caps) => caps.get(1).map_or(name, |m| m.as_str()),
        None => name,
    };
    Ok(format!("{}{}", direction.prefix(), stem.to_lowercase()))
}

/// Converts a signal or constant name: `n_` plus the lower-cased name.
pub fn convert_signal_name(name: &str) -> String {
    format!("n_{}", name.to_lowercase())
}

/// Matches one line of HDL against the declaration patterns.
///
/// Returns `Ok(None)` when no pattern matches. `line_no` is only used for
/// the returned candidate and for error reporting.
pub fn convert_line(line: &str, line_no: usize) -> Result<Option<RenameCandidate>, RenameError> {
    for matcher in MATCHERS.iter() {
        let Some(caps) = matcher.regex.captures(line) else {
            continue;
        };
        let name = &caps[matcher.group];
        let converted = (matcher.convert)(name, &caps).map_err(|e| {
            RenameError::UnrecognizedDirection {
                token: e.token,
                line: line_no,
            }
        })?;
        log::debug!(
            "line {line_no}: {:?} {name} -> {converted}",
            matcher.kind
        );
        return Ok(Some(RenameCandidate {
            original_name: name.to_string(),
            converted_name: converted,
            kind: matcher.kind,
            line: line_no,
        }));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(line: &str) -> Option<(String, String)> {
        convert_line(line, 1)
            .unwrap()
            .map(|c| (c.original_name, c.converted_name))
    }

    fn pair(a: &str, b: &str) -> Option<(String, String)> {
        Some((a.to_string(), b.to_string()))
    }

    #[test]
    fn port_suffix_is_stripped() {
        assert_eq!(convert("    CLK_I : in std_logic;"), pair("CLK_I", "i_clk"));
    }

    #[test]
    fn port_without_suffix() {
        assert_eq!(convert("RESET : out std_logic"), pair("RESET", "o_reset"));
    }

    #[test]
    fn inout_port() {
        assert_eq!(
            convert("SDA_IO : inout std_logic;"),
            pair("SDA_IO", "io_sda")
        );
    }

    #[test]
    fn colon_whitespace_is_optional() {
        assert_eq!(convert("Data_O:out std_logic_vector"), pair("Data_O", "o_data"));
    }

    #[test]
    fn lowercase_suffix_is_kept() {
        assert_eq!(convert("clk_i : in std_logic"), pair("clk_i", "i_clk_i"));
    }

    #[test]
    fn suffix_must_be_trailing() {
        assert_eq!(
            convert("DATA_IN_BUS : in std_logic"),
            pair("DATA_IN_BUS", "i_data_in_bus")
        );
    }

    #[test]
    fn signal_declaration() {
        assert_eq!(
            convert("signal my_Counter : integer"),
            pair("my_Counter", "n_my_counter")
        );
    }

    #[test]
    fn constant_declaration() {
        assert_eq!(
            convert("  constant MAX_COUNT : natural := 1000;"),
            pair("MAX_COUNT", "n_max_count")
        );
    }

    #[test]
    fn integer_type_is_not_a_direction() {
        let c = convert_line("signal cnt : integer range 0 to 7;", 3)
            .unwrap()
            .unwrap();
        assert_eq!(c.kind, DeclarationKind::Signal);
        assert_eq!(c.converted_name, "n_cnt");
    }

    #[test]
    fn port_pattern_wins_over_signal() {
        let c = convert_line("signal LED_O : out std_logic", 1)
            .unwrap()
            .unwrap();
        assert_eq!(c.kind, DeclarationKind::Port);
        assert_eq!(c.original_name, "LED_O");
        assert_eq!(c.converted_name, "o_led");
    }

    #[test]
    fn unmatched_line() {
        assert_eq!(convert("architecture rtl of top is"), None);
        assert_eq!(convert(""), None);
    }

    #[test]
    fn unrecognized_direction_is_an_error() {
        let err = convert_port_name("X", "buffer").unwrap_err();
        assert_eq!(err.token, "buffer");
    }

    #[test]
    fn convert_port_name_direct() {
        assert_eq!(convert_port_name("IRQ_I", "in").unwrap(), "i_irq");
        assert_eq!(convert_port_name("Bus_IO", "inout").unwrap(), "io_bus");
        assert_eq!(convert_port_name("TX", "out").unwrap(), "o_tx");
    }
}
