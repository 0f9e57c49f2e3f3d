use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use quill_stream::{tokenize, FileWordSource, GlyphMetrics, StrWordSource, WordSource, WordToken};

static FIXTURE_NONCE: AtomicUsize = AtomicUsize::new(0);

fn temp_fixture(label: &str, contents: &str) -> PathBuf {
    let nonce = FIXTURE_NONCE.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!(
        "quill-stream-{label}-{}-{nonce}.txt",
        std::process::id()
    ));
    fs::write(&path, contents).expect("fixture write should succeed");
    path
}

fn token_texts(source: &dyn WordSource) -> Vec<String> {
    source
        .stream()
        .expect("stream should start")
        .map(|t| t.as_str().to_string())
        .collect()
}

#[test]
fn tokenizer_splits_on_spaces_newlines_and_end_of_input() {
    let tokens: Vec<WordToken> = tokenize("Call me Ishmael.\nSome years ago").collect();
    let texts: Vec<&str> = tokens.iter().map(WordToken::as_str).collect();
    assert_eq!(
        texts,
        vec!["Call ", "me ", "Ishmael.\n", "Some ", "years ", "ago"]
    );
    assert!(tokens[2].has_newline());
    assert!(tokens[0].has_space_separator());
    assert!(!tokens[5].has_space_separator());
    assert!(!tokens[5].has_newline());
}

#[test]
fn file_source_matches_in_memory_source() {
    let text = "one two\nthree  four\n";
    let path = temp_fixture("file-vs-str", text);
    let file = FileWordSource::new(&path);
    let mem = StrWordSource::new(text);

    assert_eq!(token_texts(&file), token_texts(&mem));

    fs::remove_file(&path).expect("fixture cleanup should succeed");
}

#[test]
fn file_source_restarts_identically_per_pass() {
    let path = temp_fixture("restart", "pass after pass after pass");
    let source = FileWordSource::new(&path);

    let first = token_texts(&source);
    let second = token_texts(&source);
    assert_eq!(first, second);
    assert_eq!(first.len(), 5);

    fs::remove_file(&path).expect("fixture cleanup should succeed");
}

#[test]
fn missing_file_surfaces_io_error() {
    let source = FileWordSource::new("/nonexistent/quill-stream/input.txt");
    assert!(source.stream().is_err());
}

#[test]
fn measured_tokens_cover_narrow_and_default_glyphs() {
    let metrics = GlyphMetrics::default();
    // i(1)+1  l(2)+1  l(2)+1  space skipped, last index is the space
    assert_eq!(metrics.measure("ill "), 8);
    // i(1)+1  l(2)+1  l(2): bare token, final glyph gets no gap
    assert_eq!(metrics.measure("ill"), 7);
}
