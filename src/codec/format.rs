//! Prompt data formats.

use serde::{Deserialize, Serialize};

/// Encoding used to embed the benchmark data in a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Format {
    /// Pretty-printed JSON (2-space indent)
    Json,
    /// Token-Oriented Object Notation
    Toon,
}

impl Format {
    /// Display label
    pub fn name(&self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Toon => "TOON",
        }
    }

    /// Long name used when describing the format to the model
    pub fn description(&self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Toon => "TOON (Token-Oriented Object Notation)",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "toon" => Ok(Format::Toon),
            _ => Err(format!("Unknown format: {s}. Use: json, toon")),
        }
    }
}
