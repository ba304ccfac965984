//! TOON (Token-Oriented Object Notation) rendering.
//!
//! Encoding is done by the `toon-format` crate; this module maps the
//! benchmark's options onto it and its errors onto [`BenchError`].
//!
//! ```text
//! buyer_profile:
//!   budget_min: 600000
//!   target_areas[2]: Coral Gables,Coconut Grove
//! listings[2]{mls_id,price,baths}:
//!   A11861233,439900,2
//!   A11800001,910000,2.5
//! ```

use serde_json::Value;

use crate::error::Result;

/// Separator between inline array values and table cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Delimiter {
    /// `,` (default, not announced in headers)
    #[default]
    Comma,
    /// `\t`
    Tab,
    /// `|`
    Pipe,
}

impl From<Delimiter> for toon_format::Delimiter {
    fn from(delimiter: Delimiter) -> Self {
        match delimiter {
            Delimiter::Comma => toon_format::Delimiter::Comma,
            Delimiter::Tab => toon_format::Delimiter::Tab,
            Delimiter::Pipe => toon_format::Delimiter::Pipe,
        }
    }
}

impl std::str::FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "comma" | "," => Ok(Delimiter::Comma),
            "tab" | "\t" => Ok(Delimiter::Tab),
            "pipe" | "|" => Ok(Delimiter::Pipe),
            _ => Err(format!("Unknown delimiter: {s}. Use: comma, tab, pipe")),
        }
    }
}

/// Encoder options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Spaces per nesting level (at least 1)
    pub indent: usize,
    /// Separator for inline arrays and table rows
    pub delimiter: Delimiter,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            delimiter: Delimiter::Comma,
        }
    }
}

impl From<EncodeOptions> for toon_format::EncodeOptions {
    fn from(options: EncodeOptions) -> Self {
        toon_format::EncodeOptions::new()
            .with_delimiter(options.delimiter.into())
            .with_spaces(options.indent)
    }
}

/// Encode with default options.
pub fn encode(value: &Value) -> Result<String> {
    ToonEncoder::default().encode(value)
}

/// TOON encoder
#[derive(Debug, Clone, Default)]
pub struct ToonEncoder {
    options: EncodeOptions,
}

impl ToonEncoder {
    /// Create an encoder with the given options
    pub fn with_options(options: EncodeOptions) -> Self {
        Self { options }
    }

    /// Encode a value. The output has no trailing newline.
    pub fn encode(&self, value: &Value) -> Result<String> {
        let options = toon_format::EncodeOptions::from(self.options);
        Ok(toon_format::encode(value, &options)?)
    }
}
