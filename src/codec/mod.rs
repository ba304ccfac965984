//! Data encodings compared by the benchmark.
//!
//! | Format | Shape                                  | Strength                  |
//! |--------|----------------------------------------|---------------------------|
//! | JSON   | Braces, quoted keys, 2-space indent    | Universally understood    |
//! | TOON   | Indented `key: value`, tabular arrays  | Repeated keys stated once |
//!
//! # Usage
//!
//! ```
//! use serde_json::json;
//! use toon_bench::codec::{render, Format};
//!
//! let data = json!({"rows": [{"id": 1, "ok": true}, {"id": 2, "ok": false}]});
//! assert_eq!(render(&data, Format::Toon).unwrap(), "rows[2]{id,ok}:\n  1,true\n  2,false");
//! ```

mod format;
pub mod toon;

pub use format::Format;
pub use toon::{Delimiter, EncodeOptions, ToonEncoder};

use serde_json::Value;

use crate::error::Result;

/// Render `value` in the given format with default options.
pub fn render(value: &Value, format: Format) -> Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(value)?),
        Format::Toon => toon::encode(value),
    }
}

/// Render `value`, using `encoder` for TOON output.
pub fn render_with(value: &Value, format: Format, encoder: &ToonEncoder) -> Result<String> {
    match format {
        Format::Json => render(value, format),
        Format::Toon => encoder.encode(value),
    }
}
