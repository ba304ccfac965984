//! Token counting implementation.
//!
//! Uses tiktoken-rs for BPE token counting with lazy-loaded encoders.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tiktoken_rs::{cl100k_base, o200k_base, CoreBPE};

// Lazy-loaded tokenizer instances; `None` when the encoder failed to load
static CL100K: OnceLock<Option<CoreBPE>> = OnceLock::new();
static O200K: OnceLock<Option<CoreBPE>> = OnceLock::new();

fn get_cl100k() -> Option<&'static CoreBPE> {
    CL100K
        .get_or_init(|| {
            cl100k_base()
                .map_err(|e| tracing::warn!("Failed to load cl100k_base tokenizer: {e}"))
                .ok()
        })
        .as_ref()
}

fn get_o200k() -> Option<&'static CoreBPE> {
    O200K
        .get_or_init(|| {
            o200k_base()
                .map_err(|e| tracing::warn!("Failed to load o200k_base tokenizer: {e}"))
                .ok()
        })
        .as_ref()
}

/// Tokenizer encoding family
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// OpenAI cl100k_base (GPT-3.5, GPT-4)
    Cl100kBase,
    /// OpenAI o200k_base (GPT-4o, GPT-4.1, o-series)
    #[default]
    O200kBase,
    /// ~4 characters per token
    Heuristic,
}

impl Encoding {
    /// Infer the encoding from a model or Azure deployment name.
    ///
    /// Deployment names are user-chosen, so this only recognises names that
    /// contain the underlying model id.
    pub fn infer_from_model(model: &str) -> Self {
        let model = model.to_lowercase();

        if model.contains("gpt-4o")
            || model.contains("gpt-4.1")
            || model.contains("gpt-5")
            || model.starts_with("o1")
            || model.starts_with("o3")
            || model.starts_with("o4")
            || model.contains("/o1")
            || model.contains("/o3")
        {
            return Encoding::O200kBase;
        }

        // Azure spells GPT-3.5 as "gpt-35"
        if model.contains("gpt-3") || model.contains("gpt-4") {
            return Encoding::Cl100kBase;
        }

        Encoding::Heuristic
    }

    /// Encoding name
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Cl100kBase => "cl100k_base",
            Encoding::O200kBase => "o200k_base",
            Encoding::Heuristic => "heuristic",
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cl100k" | "cl100k_base" => Ok(Encoding::Cl100kBase),
            "o200k" | "o200k_base" => Ok(Encoding::O200kBase),
            "heuristic" => Ok(Encoding::Heuristic),
            _ => Err(format!(
                "Unknown encoding: {s}. Use: cl100k_base, o200k_base, heuristic"
            )),
        }
    }
}

/// Count tokens using the default encoding (o200k_base)
pub fn count_tokens(text: &str) -> usize {
    count_tokens_with_encoding(text, Encoding::default())
}

/// Count tokens with a specific encoding.
///
/// Falls back to the heuristic if a BPE encoder cannot be loaded.
pub fn count_tokens_with_encoding(text: &str, encoding: Encoding) -> usize {
    let bpe = match encoding {
        Encoding::Cl100kBase => get_cl100k(),
        Encoding::O200kBase => get_o200k(),
        Encoding::Heuristic => None,
    };

    match bpe {
        Some(bpe) => bpe.encode_with_special_tokens(text).len(),
        None => heuristic_count(text),
    }
}

/// Heuristic token count (~4 characters per token), rounded up
fn heuristic_count(text: &str) -> usize {
    text.len().div_ceil(4)
}

/// Token counter bound to one encoding
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenCounter {
    encoding: Encoding,
}

impl TokenCounter {
    /// Create a new token counter with the specified encoding
    pub fn new(encoding: Encoding) -> Self {
        Self { encoding }
    }

    /// Create a token counter for a model or deployment name
    pub fn for_model(model: &str) -> Self {
        Self::new(Encoding::infer_from_model(model))
    }

    /// Count tokens in text
    pub fn count(&self, text: &str) -> usize {
        count_tokens_with_encoding(text, self.encoding)
    }

    /// Count tokens across several texts
    pub fn count_many(&self, texts: &[&str]) -> usize {
        texts.iter().map(|t| self.count(t)).sum()
    }

    /// Get the encoding used by this counter
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }
}
