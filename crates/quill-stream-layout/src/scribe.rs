//! Dry-run/live-run orchestration over a word source and an actuator.
//!
//! A [`Scribe`] always runs the source twice. The dry pass (act predicate
//! forced false) learns the total book count, which decides title numbering,
//! and surfaces feasibility diagnostics before anything touches the UI. The
//! live pass replays the identical token sequence and realizes
//! the directive stream against an [`Actuator`]. Both passes are
//! deterministic and produce identical counts.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use quill_stream::{GlyphMetrics, WordSource, WordToken};

use crate::layout_engine::{
    build_title, LayoutConfig, LayoutEngine, LayoutError, LayoutSession, SessionOptions,
    StartPosition, TitlePolicy,
};
use crate::layout_ir::{Directive, LayoutEvent, Position, RunSummary};

/// Cancellation hook for long-running live passes.
pub trait CancelToken {
    fn is_cancelled(&self) -> bool;
}

/// Never-cancel token for default call paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Word width measurement hook.
pub trait WordMeasurer {
    /// Measure one raw token in pixels.
    fn word_px(&self, word: &WordToken) -> u32;
}

impl WordMeasurer for GlyphMetrics {
    fn word_px(&self, word: &WordToken) -> u32 {
        self.measure(word.as_str())
    }
}

/// Capability set the driver realizes directives against.
///
/// Implementations own every UI concern: keystroke simulation, shift
/// handling, pointer movement, pacing. [`Actuator::request_operator_ack`]
/// blocks until a human confirms; the rest of the pipeline has no useful
/// work to do meanwhile, so it is a synchronous pause by design of the
/// surrounding flow.
pub trait Actuator {
    fn type_word(&mut self, word: &str) -> Result<(), ActuatorError>;
    fn click_next_page(&mut self) -> Result<(), ActuatorError>;
    fn sign_book(&mut self, title: &str) -> Result<(), ActuatorError>;
    fn select_toolbar_book(&mut self, slot: u32) -> Result<(), ActuatorError>;
    fn request_operator_ack(&mut self) -> Result<(), ActuatorError>;
}

/// Actuator failure surfaced to the driver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActuatorError {
    message: String,
}

impl ActuatorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ActuatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actuator failed: {}", self.message)
    }
}

impl std::error::Error for ActuatorError {}

/// Records the realized directive stream instead of driving a UI.
#[derive(Clone, Debug, Default)]
pub struct RecordingActuator {
    pub directives: Vec<Directive>,
    pub acks: usize,
}

impl Actuator for RecordingActuator {
    fn type_word(&mut self, word: &str) -> Result<(), ActuatorError> {
        self.directives.push(Directive::TypeWord(word.to_string()));
        Ok(())
    }

    fn click_next_page(&mut self) -> Result<(), ActuatorError> {
        self.directives.push(Directive::ClickNextPage);
        Ok(())
    }

    fn sign_book(&mut self, title: &str) -> Result<(), ActuatorError> {
        self.directives.push(Directive::SignBook {
            title: title.to_string(),
        });
        Ok(())
    }

    fn select_toolbar_book(&mut self, slot: u32) -> Result<(), ActuatorError> {
        self.directives.push(Directive::SelectToolbarBook { slot });
        Ok(())
    }

    fn request_operator_ack(&mut self) -> Result<(), ActuatorError> {
        self.directives.push(Directive::RequestOperatorAck);
        self.acks += 1;
        Ok(())
    }
}

/// Runtime diagnostics from scribe passes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScribeDiagnostic {
    DryRunComplete { books: u32, pages: u32 },
    WordTooWide { word: String, width_px: u32 },
    RestockPause { signed_book: u32 },
    LiveRunComplete { books: u32, pages: u32 },
}

type DiagnosticCallback = Arc<Mutex<Box<dyn FnMut(ScribeDiagnostic) + Send + 'static>>>;
type DiagnosticSink = Option<DiagnosticCallback>;

/// Title numbering policy for signed books.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NumberingMode {
    /// Number titles only when the dry pass reports more than one book.
    #[default]
    Auto,
    Always,
    Never,
}

/// Options for a scribe run.
#[derive(Clone, Debug, PartialEq)]
pub struct ScribeOptions {
    pub layout: LayoutConfig,
    /// Base name for signed titles.
    pub base_name: String,
    pub numbering: NumberingMode,
    /// Position actuation resumes at; counts always start from 1/1.
    pub start: StartPosition,
}

impl ScribeOptions {
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            layout: LayoutConfig::default(),
            base_name: base_name.into(),
            numbering: NumberingMode::default(),
            start: StartPosition::default(),
        }
    }
}

/// A word flagged wider than a full row during the dry pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooWideWord {
    pub word: String,
    pub width_px: u32,
    /// Where the word landed after its forced row break.
    pub position: Position,
}

/// Feasibility report from the mandatory dry pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DryRunReport {
    pub books: u32,
    pub pages: u32,
    /// Resolved numbering decision for signed titles.
    pub numbered: bool,
    pub too_wide: Vec<TooWideWord>,
}

/// Dry-then-live orchestrator.
pub struct Scribe {
    engine: LayoutEngine,
    opts: ScribeOptions,
    diagnostics: DiagnosticSink,
}

impl Scribe {
    /// Create a scribe, validating the layout configuration and the
    /// 1-based start position.
    pub fn new(opts: ScribeOptions) -> Result<Self, LayoutError> {
        let engine = LayoutEngine::new(opts.layout)?;
        if opts.start.book == 0 {
            return Err(LayoutError::InvalidConfig {
                field: "start.book",
            });
        }
        if opts.start.page == 0 {
            return Err(LayoutError::InvalidConfig {
                field: "start.page",
            });
        }
        Ok(Self {
            engine,
            opts,
            diagnostics: None,
        })
    }

    /// Register or replace the diagnostics sink.
    pub fn with_diagnostics<F>(mut self, sink: F) -> Self
    where
        F: FnMut(ScribeDiagnostic) + Send + 'static,
    {
        self.diagnostics = Some(Arc::new(Mutex::new(Box::new(sink))));
        self
    }

    fn emit(&self, diagnostic: ScribeDiagnostic) {
        let Some(sink) = &self.diagnostics else {
            return;
        };
        if let Ok(mut sink) = sink.lock() {
            sink(diagnostic);
        }
    }

    fn session_options(&self, live: bool, numbered: bool) -> SessionOptions {
        SessionOptions {
            start: self.opts.start,
            live,
            title: TitlePolicy {
                base_name: self.opts.base_name.clone(),
                numbered,
            },
        }
    }

    /// Run the full dry pass: total counts plus feasibility diagnostics.
    ///
    /// Mandatory before any live pass; the report's `numbered` field
    /// resolves [`NumberingMode::Auto`] against the total book count.
    pub fn dry_run(
        &self,
        source: &dyn WordSource,
        measurer: &dyn WordMeasurer,
    ) -> Result<DryRunReport, ScribeError> {
        let mut session = self.engine.start_session(self.session_options(false, false));
        let mut too_wide = Vec::new();
        for word in source.stream()? {
            let width_px = measurer.word_px(&word);
            let placement = session.place(&word, width_px)?;
            if placement
                .events
                .iter()
                .any(|e| matches!(e, LayoutEvent::WordTooWide { .. }))
            {
                too_wide.push(TooWideWord {
                    word: word.as_str().to_string(),
                    width_px,
                    position: placement.state.position(),
                });
            }
        }
        let fin = session.finish()?;
        let numbered = match self.opts.numbering {
            NumberingMode::Auto => fin.summary.books > 1,
            NumberingMode::Always => true,
            NumberingMode::Never => false,
        };
        self.emit(ScribeDiagnostic::DryRunComplete {
            books: fin.summary.books,
            pages: fin.summary.pages,
        });
        Ok(DryRunReport {
            books: fin.summary.books,
            pages: fin.summary.pages,
            numbered,
            too_wide,
        })
    }

    /// Run the whole pipeline: dry pass, title feasibility check, then the
    /// live pass driving `actuator`.
    pub fn write_book(
        &self,
        source: &dyn WordSource,
        measurer: &dyn WordMeasurer,
        actuator: &mut dyn Actuator,
        cancel: &dyn CancelToken,
    ) -> Result<RunSummary, ScribeError> {
        let report = self.dry_run(source, measurer)?;

        // Surface the title configuration error before any actuation.
        let final_number = report.numbered.then_some(report.books);
        build_title(&self.opts.base_name, final_number, self.opts.layout.max_title_chars)?;

        for flagged in &report.too_wide {
            log::warn!(
                "word wider than a full row at book {} page {} row {}: {:?} ({}px > {}px)",
                flagged.position.book,
                flagged.position.page,
                flagged.position.row,
                flagged.word,
                flagged.width_px,
                self.opts.layout.max_row_px
            );
            self.emit(ScribeDiagnostic::WordTooWide {
                word: flagged.word.clone(),
                width_px: flagged.width_px,
            });
        }

        let mut session = self
            .engine
            .start_session(self.session_options(true, report.numbered));
        for word in source.stream()? {
            if cancel.is_cancelled() {
                return Err(ScribeError::Cancelled);
            }
            let width_px = measurer.word_px(&word);
            let placement = session.place(&word, width_px)?;
            self.apply(&placement.directives, placement.state.book, actuator, &mut session)?;
        }
        let fin = session.finish()?;
        for directive in &fin.directives {
            realize(directive, actuator)?;
        }
        self.emit(ScribeDiagnostic::LiveRunComplete {
            books: fin.summary.books,
            pages: fin.summary.pages,
        });
        Ok(fin.summary)
    }

    fn apply(
        &self,
        directives: &[Directive],
        current_book: u32,
        actuator: &mut dyn Actuator,
        session: &mut LayoutSession,
    ) -> Result<(), ScribeError> {
        for directive in directives {
            if matches!(directive, Directive::RequestOperatorAck) {
                // current_book already points past the book just signed.
                self.emit(ScribeDiagnostic::RestockPause {
                    signed_book: current_book.saturating_sub(1),
                });
            }
            realize(directive, actuator)?;
            if matches!(directive, Directive::RequestOperatorAck) {
                session.acknowledge_restock();
            }
        }
        Ok(())
    }
}

fn realize(directive: &Directive, actuator: &mut dyn Actuator) -> Result<(), ActuatorError> {
    match directive {
        Directive::TypeWord(word) => actuator.type_word(word),
        Directive::ClickNextPage => actuator.click_next_page(),
        Directive::SignBook { title } => actuator.sign_book(title),
        Directive::SelectToolbarBook { slot } => actuator.select_toolbar_book(*slot),
        Directive::RequestOperatorAck => actuator.request_operator_ack(),
    }
}

/// Scribe pipeline error.
#[derive(Debug)]
pub enum ScribeError {
    /// Layout configuration or accounting failed.
    Layout(LayoutError),
    /// The word source failed to stream.
    Source(io::Error),
    /// The actuator failed to realize a directive.
    Actuator(ActuatorError),
    /// The live pass was cancelled.
    Cancelled,
}

impl fmt::Display for ScribeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(err) => write!(f, "layout failed: {}", err),
            Self::Source(err) => write!(f, "word source failed: {}", err),
            Self::Actuator(err) => write!(f, "{}", err),
            Self::Cancelled => write!(f, "live pass cancelled"),
        }
    }
}

impl std::error::Error for ScribeError {}

impl From<LayoutError> for ScribeError {
    fn from(value: LayoutError) -> Self {
        Self::Layout(value)
    }
}

impl From<io::Error> for ScribeError {
    fn from(value: io::Error) -> Self {
        Self::Source(value)
    }
}

impl From<ActuatorError> for ScribeError {
    fn from(value: ActuatorError) -> Self {
        Self::Actuator(value)
    }
}

const PLAN_SCHEMA_VERSION: u8 = 1;
const DEFAULT_MAX_PLAN_BYTES: usize = 256 * 1024;
static PLAN_WRITE_NONCE: AtomicUsize = AtomicUsize::new(0);

/// File-backed store for dry-run reports.
///
/// Plan paths are deterministic per job name: `<root>/<name>.plan.json`.
/// Payloads use a JSON envelope with a schema version and are size-capped
/// on both reads and writes. When I/O, decode, or size checks fail,
/// operations return `None`/no-op instead of bubbling errors: a stale or
/// missing plan only costs a repeated dry pass.
#[derive(Clone, Debug)]
pub struct FilePlanStore {
    root: PathBuf,
    max_file_bytes: usize,
}

impl FilePlanStore {
    /// Create a plan store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_file_bytes: DEFAULT_MAX_PLAN_BYTES,
        }
    }

    /// Set the maximum allowed plan file size in bytes.
    ///
    /// Values of `0` are treated as `1` to keep the cap explicit.
    pub fn with_max_file_bytes(mut self, max_file_bytes: usize) -> Self {
        self.max_file_bytes = max_file_bytes.max(1);
        self
    }

    /// Root directory for plan files.
    pub fn plan_root(&self) -> &Path {
        &self.root
    }

    /// Deterministic plan path for a job name (treated as a file stem).
    pub fn plan_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.plan.json", name))
    }

    /// Load the stored report for `name`, if a valid one exists.
    pub fn load(&self, name: &str) -> Option<DryRunReport> {
        let path = self.plan_path(name);
        let max_file_bytes = self.max_file_bytes as u64;
        if fs::metadata(&path).ok()?.len() > max_file_bytes {
            return None;
        }

        let file = File::open(path).ok()?;
        let mut reader = file.take(max_file_bytes.saturating_add(1));
        let mut payload = Vec::with_capacity(64);
        if reader.read_to_end(&mut payload).is_err() {
            return None;
        }
        if payload.len() > self.max_file_bytes {
            return None;
        }
        let envelope: PersistedPlanEnvelope = serde_json::from_slice(&payload).ok()?;
        if envelope.version != PLAN_SCHEMA_VERSION {
            return None;
        }
        Some(envelope.report)
    }

    /// Persist `report` for `name`, atomically replacing any prior plan.
    pub fn store(&self, name: &str, report: &DryRunReport) {
        let final_path = self.plan_path(name);
        let Some(parent) = final_path.parent() else {
            return;
        };
        if fs::create_dir_all(parent).is_err() {
            return;
        }

        let envelope = PersistedPlanEnvelope {
            version: PLAN_SCHEMA_VERSION,
            report: report.clone(),
        };
        let Ok(payload) = serde_json::to_vec(&envelope) else {
            return;
        };
        if payload.len() > self.max_file_bytes {
            log::warn!(
                "plan for {:?} exceeds max_file_bytes ({} > {}), not stored",
                name,
                payload.len(),
                self.max_file_bytes
            );
            return;
        }

        let nonce = PLAN_WRITE_NONCE.fetch_add(1, Ordering::Relaxed);
        let temp_path = parent.join(format!(
            "{}.plan.json.tmp-{}-{}",
            name,
            std::process::id(),
            nonce
        ));
        let file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)
        {
            Ok(file) => file,
            Err(_) => return,
        };
        let mut file = file;
        if file.write_all(&payload).is_err() {
            remove_file_quiet(&temp_path);
            return;
        }
        if file.sync_all().is_err() {
            remove_file_quiet(&temp_path);
            return;
        }
        drop(file);
        if fs::rename(&temp_path, &final_path).is_err() {
            remove_file_quiet(&temp_path);
            return;
        }
        sync_directory(parent);
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct PersistedPlanEnvelope {
    version: u8,
    report: DryRunReport,
}

fn remove_file_quiet(path: &Path) {
    let _ = fs::remove_file(path);
}

fn sync_directory(path: &Path) {
    if let Ok(dir) = File::open(path) {
        let _ = dir.sync_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_stream::StrWordSource;

    /// Every non-separator char is 10px; separators measure 0. Keeps the
    /// geometry decoupled from glyph tables.
    struct FlatMeasurer;

    impl WordMeasurer for FlatMeasurer {
        fn word_px(&self, word: &WordToken) -> u32 {
            word.as_str()
                .chars()
                .filter(|c| *c != ' ' && *c != '\n')
                .count() as u32
                * 10
        }
    }

    fn tiny_opts(base_name: &str) -> ScribeOptions {
        ScribeOptions {
            layout: LayoutConfig {
                max_row_px: 20,
                rows_per_page: 2,
                pages_per_book: 2,
                max_title_chars: 15,
                toolbar_slots: 9,
                space_px: 3,
            },
            base_name: base_name.to_string(),
            numbering: NumberingMode::Auto,
            start: StartPosition::default(),
        }
    }

    fn temp_plan_root(label: &str) -> PathBuf {
        let nonce = PLAN_WRITE_NONCE.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "quill-stream-layout-{label}-{}-{nonce}",
            std::process::id()
        ))
    }

    fn sample_report() -> DryRunReport {
        DryRunReport {
            books: 3,
            pages: 41,
            numbered: true,
            too_wide: vec![TooWideWord {
                word: "antidisestablishmentarianism".to_string(),
                width_px: 170,
                position: Position {
                    book: 2,
                    page: 7,
                    row: 3,
                },
            }],
        }
    }

    #[test]
    fn zero_based_start_positions_are_rejected() {
        let mut opts = tiny_opts("Journal");
        opts.start = StartPosition { book: 0, page: 1 };
        assert!(matches!(
            Scribe::new(opts),
            Err(LayoutError::InvalidConfig { field: "start.book" })
        ));

        let mut opts = tiny_opts("Journal");
        opts.start = StartPosition { book: 1, page: 0 };
        assert!(matches!(
            Scribe::new(opts),
            Err(LayoutError::InvalidConfig { field: "start.page" })
        ));
    }

    #[test]
    fn dry_run_reports_counts_and_numbering() {
        let scribe = Scribe::new(tiny_opts("Journal")).expect("options should validate");
        // Each spaced word fills its row (10px word + 4px gap leaves 6px),
        // so a book holds 2 rows x 2 pages = 4 words; the fifth word opens
        // book 2.
        let source = StrWordSource::new("a a a a a");
        let report = scribe
            .dry_run(&source, &FlatMeasurer)
            .expect("dry run should pass");
        assert_eq!(report.books, 2);
        assert_eq!(report.pages, 1);
        assert!(report.numbered);
        assert!(report.too_wide.is_empty());
    }

    #[test]
    fn dry_run_flags_over_wide_words_with_their_position() {
        let scribe = Scribe::new(tiny_opts("Journal")).expect("options should validate");
        let source = StrWordSource::new("aaa b");
        let report = scribe
            .dry_run(&source, &FlatMeasurer)
            .expect("dry run should pass");
        assert_eq!(report.too_wide.len(), 1);
        assert_eq!(report.too_wide[0].word, "aaa ");
        assert_eq!(report.too_wide[0].width_px, 30);
        assert_eq!(
            report.too_wide[0].position,
            Position {
                book: 1,
                page: 1,
                row: 2
            }
        );
    }

    #[test]
    fn write_book_realizes_the_full_directive_stream() {
        let scribe = Scribe::new(tiny_opts("Journal")).expect("options should validate");
        let source = StrWordSource::new("a a a a a");
        let mut actuator = RecordingActuator::default();
        let summary = scribe
            .write_book(&source, &FlatMeasurer, &mut actuator, &NeverCancel)
            .expect("write should pass");

        assert_eq!(summary.books, 2);
        let typed = actuator
            .directives
            .iter()
            .filter(|d| matches!(d, Directive::TypeWord(_)))
            .count();
        assert_eq!(typed, 5);
        assert!(actuator.directives.contains(&Directive::SignBook {
            title: "Journal 1".to_string()
        }));
        assert_eq!(
            actuator.directives.last(),
            Some(&Directive::SignBook {
                title: "Journal 2".to_string()
            })
        );
    }

    #[test]
    fn single_book_runs_sign_unnumbered() {
        let scribe = Scribe::new(tiny_opts("Journal")).expect("options should validate");
        let source = StrWordSource::new("a a");
        let mut actuator = RecordingActuator::default();
        scribe
            .write_book(&source, &FlatMeasurer, &mut actuator, &NeverCancel)
            .expect("write should pass");
        assert_eq!(
            actuator.directives.last(),
            Some(&Directive::SignBook {
                title: "Journal".to_string()
            })
        );
    }

    #[test]
    fn infeasible_title_fails_before_any_actuation() {
        let mut opts = tiny_opts("Journal");
        opts.layout.max_title_chars = 3;
        opts.numbering = NumberingMode::Always;
        let scribe = Scribe::new(opts).expect("options should validate");
        let source = StrWordSource::new("a a a a a a a a a");
        let mut actuator = RecordingActuator::default();
        let err = scribe
            .write_book(&source, &FlatMeasurer, &mut actuator, &NeverCancel)
            .expect_err("write should fail");
        assert!(matches!(
            err,
            ScribeError::Layout(LayoutError::TitleOverflow { .. })
        ));
        assert!(actuator.directives.is_empty());
    }

    struct CancelAfter {
        remaining: std::cell::Cell<u32>,
    }

    impl CancelToken for CancelAfter {
        fn is_cancelled(&self) -> bool {
            let left = self.remaining.get();
            if left == 0 {
                return true;
            }
            self.remaining.set(left - 1);
            false
        }
    }

    #[test]
    fn cancellation_stops_the_live_pass() {
        let scribe = Scribe::new(tiny_opts("Journal")).expect("options should validate");
        let source = StrWordSource::new("a a a a a a a a a");
        let mut actuator = RecordingActuator::default();
        let cancel = CancelAfter {
            remaining: std::cell::Cell::new(3),
        };
        let err = scribe
            .write_book(&source, &FlatMeasurer, &mut actuator, &cancel)
            .expect_err("write should cancel");
        assert!(matches!(err, ScribeError::Cancelled));
        let typed = actuator
            .directives
            .iter()
            .filter(|d| matches!(d, Directive::TypeWord(_)))
            .count();
        assert_eq!(typed, 3);
    }

    #[test]
    fn plan_store_round_trips_reports() {
        let root = temp_plan_root("round-trip");
        let store = FilePlanStore::new(&root);
        let report = sample_report();

        assert!(store.load("saga").is_none());
        store.store("saga", &report);
        assert_eq!(store.load("saga"), Some(report));

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn plan_store_misses_on_size_cap_and_corrupt_payloads() {
        let root = temp_plan_root("miss");
        let capped = FilePlanStore::new(&root).with_max_file_bytes(8);
        capped.store("saga", &sample_report());
        assert!(capped.load("saga").is_none());

        let store = FilePlanStore::new(&root);
        fs::create_dir_all(&root).expect("root should create");
        fs::write(store.plan_path("broken"), b"{not json").expect("write should pass");
        assert!(store.load("broken").is_none());

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn plan_store_rejects_mismatched_schema_versions() {
        let root = temp_plan_root("version");
        let store = FilePlanStore::new(&root);
        store.store("saga", &sample_report());

        let path = store.plan_path("saga");
        let payload = fs::read_to_string(&path).expect("plan should read");
        let bumped = payload.replacen("\"version\":1", "\"version\":9", 1);
        assert_ne!(payload, bumped, "version field should rewrite");
        fs::write(&path, bumped).expect("write should pass");
        assert!(store.load("saga").is_none());

        let _ = fs::remove_dir_all(&root);
    }
}
