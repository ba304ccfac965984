//! Offline token counting.
//!
//! Live runs take token counts from the API. This module gives a local
//! estimate for the `estimate` command and for sanity checks, using
//! tiktoken encodings for OpenAI-family deployments and a heuristic
//! fallback for everything else.
//!
//! # Supported Encodings
//!
//! - **cl100k_base**: GPT-3.5, GPT-4
//! - **o200k_base**: GPT-4o, GPT-4.1, o1, o3
//! - **heuristic**: ~4 characters per token fallback
//!
//! # Example
//!
//! ```
//! use toon_bench::tokenizer::{count_tokens_with_encoding, Encoding, TokenCounter};
//!
//! let tokens = count_tokens_with_encoding("Hello, world!", Encoding::O200kBase);
//! assert!(tokens > 0);
//!
//! let counter = TokenCounter::for_model("gpt-4o");
//! assert_eq!(counter.encoding(), Encoding::O200kBase);
//! ```

mod counter;

pub use counter::{count_tokens, count_tokens_with_encoding, Encoding, TokenCounter};
