//! Word tokenization for streaming text sources.
//!
//! A word token is a maximal run of non-separator characters plus its
//! terminating separator (space or newline) when one exists. Keeping the
//! separator inside the token lets downstream consumers account for
//! inter-word gaps and forced row breaks without re-scanning the source.
//! Consecutive separators yield separator-only tokens.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One word from a text source, including its trailing separator if any.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WordToken {
    text: String,
}

impl WordToken {
    /// Wrap raw token text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Raw token text, separator included.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True when the token carries a literal space separator.
    pub fn has_space_separator(&self) -> bool {
        self.text.contains(' ')
    }

    /// True when the token carries an embedded newline marker.
    pub fn has_newline(&self) -> bool {
        self.text.contains('\n')
    }

    /// True for tokens with no characters at all.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for WordToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for WordToken {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Streaming tokenizer over a character iterator.
///
/// Yields tokens terminated by space, newline, or end of input. The final
/// run is yielded without a separator; no empty trailing token is produced.
#[derive(Clone, Debug)]
pub struct WordTokens<I> {
    chars: I,
}

impl<I: Iterator<Item = char>> WordTokens<I> {
    /// Tokenize the given character stream.
    pub fn new(chars: I) -> Self {
        Self { chars }
    }
}

impl<I: Iterator<Item = char>> Iterator for WordTokens<I> {
    type Item = WordToken;

    fn next(&mut self) -> Option<Self::Item> {
        let mut word = String::new();
        for ch in self.chars.by_ref() {
            word.push(ch);
            if ch == ' ' || ch == '\n' {
                return Some(WordToken::new(word));
            }
        }
        if word.is_empty() {
            None
        } else {
            Some(WordToken::new(word))
        }
    }
}

/// Tokenize in-memory text.
pub fn tokenize(text: &str) -> WordTokens<std::str::Chars<'_>> {
    WordTokens::new(text.chars())
}

/// A lazy, finite word producer that restarts from the beginning on every
/// [`stream`](WordSource::stream) call.
///
/// Pagination runs the source twice: a dry pass to learn total counts and
/// feasibility, then a live pass that actuates. Both passes must see the
/// identical token sequence, so sources restart from scratch rather than
/// resuming mid-stream.
pub trait WordSource {
    /// Start a fresh pass over the source from the beginning.
    fn stream(&self) -> io::Result<Box<dyn Iterator<Item = WordToken> + Send + '_>>;
}

/// In-memory word source for fixtures and small inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrWordSource {
    text: String,
}

impl StrWordSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl WordSource for StrWordSource {
    fn stream(&self) -> io::Result<Box<dyn Iterator<Item = WordToken> + Send + '_>> {
        Ok(Box::new(tokenize(&self.text)))
    }
}

/// Word source backed by a UTF-8 text file.
///
/// Each pass re-reads the file, so edits between the dry and live pass
/// break the identical-sequence requirement; callers own that discipline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileWordSource {
    fn stream(&self) -> io::Result<Box<dyn Iterator<Item = WordToken> + Send + '_>> {
        log::debug!("word source pass start: {}", self.path.display());
        let text = fs::read_to_string(&self.path)?;
        Ok(Box::new(WordTokens::new(OwnedChars::new(text))))
    }
}

/// Char iterator that owns its backing string.
#[derive(Clone, Debug)]
struct OwnedChars {
    text: String,
    pos: usize,
}

impl OwnedChars {
    fn new(text: String) -> Self {
        Self { text, pos: 0 }
    }
}

impl Iterator for OwnedChars {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let ch = self.text[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }
}
