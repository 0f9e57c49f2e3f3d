//! Streaming word tokenization and glyph metrics for fixed-metric writable
//! books.
//!
//! This crate is the input side of the `quill-stream` workspace: it turns a
//! text source into a lazy sequence of separator-preserving [`WordToken`]s
//! and measures each token in pixels against a fixed per-character width
//! table ([`GlyphMetrics`]). Pagination itself lives in the
//! `quill-stream-layout` crate.
//!
//! ```rust
//! use quill_stream::{tokenize, GlyphMetrics};
//!
//! let metrics = GlyphMetrics::default();
//! let words: Vec<_> = tokenize("It was a dark and stormy night.\n").collect();
//! assert_eq!(words.len(), 7);
//! assert_eq!(metrics.measure(words[0].as_str()), 8);
//! ```

#![cfg_attr(
    not(test),
    deny(
        clippy::disallowed_methods,
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::panic_in_result_fn,
        clippy::todo,
        clippy::unimplemented
    )
)]

pub mod metrics;
pub mod token;

pub use metrics::{GlyphMetrics, DEFAULT_GLYPH_PX, DEFAULT_SPACE_PX};
pub use token::{tokenize, FileWordSource, StrWordSource, WordSource, WordToken, WordTokens};
