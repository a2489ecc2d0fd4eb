//! Port directions and their name prefixes.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The direction of an HDL port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    /// `in`
    In,
    /// `out`
    Out,
    /// `inout`
    InOut,
}

impl PortDirection {
    /// The prefix a port of this direction receives.
    pub fn prefix(self) -> &'static str {
        match self {
            PortDirection::In => "i_",
            PortDirection::Out => "o_",
            PortDirection::InOut => "io_",
        }
    }

    /// The direction keyword as written in HDL source.
    pub fn keyword(self) -> &'static str {
        match self {
            PortDirection::In => "in",
            PortDirection::Out => "out",
            PortDirection::InOut => "inout",
        }
    }
}

impl fmt::Display for PortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A direction token that is not `in`, `out` or `inout`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized port direction '{token}'")]
pub struct ParseDirectionError {
    /// The offending token.
    pub token: String,
}

impl FromStr for PortDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(PortDirection::In),
            "out" => Ok(PortDirection::Out),
            "inout" => Ok(PortDirection::InOut),
            other => Err(ParseDirectionError {
                token: other.to_string(),
            }),
        }
    }
}
