//! Prompt templates.
//!
//! Both formats get the same task text so that any difference in token
//! usage comes from the data block. The TOON prompt adds a short primer,
//! since models have seen far less TOON than JSON; its tokens are counted
//! against TOON.

use serde_json::Value;

use crate::client::ChatMessage;
use crate::codec::{render_with, Format, ToonEncoder};
use crate::error::Result;

/// Default system message
pub const SYSTEM_PROMPT: &str = "You are a concise, expert real estate analyst.";

const INTRO: &str =
    "You are an AI assistant helping a real estate team evaluate condo listings for a buyer.";

const TASK: &str = "\
1. Identify the top 2 listings for this buyer.
2. For each, explain briefly why it is a strong match.
3. Briefly mention any listings to avoid and why.

Respond in 3-5 bullet points, concise and professional.";

const TOON_PRIMER: &str = "\
TOON basics:
- Indentation indicates nesting (like YAML).
- Lines like `listings[4]{field1,field2,...}:` declare an array of objects.
- Each subsequent indented line is a row with comma-separated values in that field order.";

/// Wrap an already-encoded data block in the prompt for `format`.
pub fn build_prompt(format: Format, block: &str) -> String {
    let lead = format!(
        "You will receive property and buyer data in {} format.",
        format.description()
    );

    let body = match format {
        Format::Json => format!("{INTRO}\n\n{lead}\n{TASK}"),
        Format::Toon => format!("{INTRO}\n\n{lead}\n\n{TOON_PRIMER}\n\n{TASK}"),
    };

    format!("{body}\n\n{} DATA:\n{block}", format.name())
        .trim()
        .to_string()
}

/// Encode `data` and build the prompt around it.
pub fn render_prompt(data: &Value, format: Format) -> Result<String> {
    render_prompt_with(data, format, &ToonEncoder::default())
}

/// Like [`render_prompt`], with explicit TOON encoder options.
pub fn render_prompt_with(data: &Value, format: Format, encoder: &ToonEncoder) -> Result<String> {
    let block = render_with(data, format, encoder)?;
    Ok(build_prompt(format, &block))
}

/// System + user message pair for one run.
pub fn messages(system: &str, prompt: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(system), ChatMessage::user(prompt)]
}
