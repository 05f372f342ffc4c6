//! Sharps-or-flats preference for random key selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BiasParseError;
use crate::models::AccidentalKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bias {
    Sharps,
    Flats,
}

impl Bias {
    pub const ALL: [Bias; 2] = [Bias::Sharps, Bias::Flats];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bias::Sharps => "sharps",
            Bias::Flats => "flats",
        }
    }

    /// Accidental kind that roots picked with this bias carry
    pub fn kind(&self) -> AccidentalKind {
        match self {
            Bias::Sharps => AccidentalKind::Sharp,
            Bias::Flats => AccidentalKind::Flat,
        }
    }
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Bias {
    type Err = BiasParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sharps" | "sharp" => Ok(Bias::Sharps),
            "flats" | "flat" => Ok(Bias::Flats),
            _ => Err(BiasParseError(s.to_string())),
        }
    }
}
