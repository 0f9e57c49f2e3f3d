//! Deterministic word-wrap, page-break, and book-break engine.
//!
//! One [`LayoutSession`] owns the pagination state for one pass over a word
//! stream. [`LayoutSession::place`] is the single mutation point: it takes a
//! measured word, applies the row/page/book checks in a fixed order, and
//! returns the resulting events and directives. The engine performs no I/O
//! and never calls the actuator; drivers interpret the directive stream.

use core::fmt;

use quill_stream::WordToken;

use crate::layout_ir::{Directive, LayoutEvent, LayoutState, Placement, RunSummary};

/// Layout limits for book construction.
///
/// Defaults match the writable-book UI: 114 usable pixels per row, 14 rows
/// per page, 100 pages per book, 15 title characters, 9 toolbar slots, and
/// a 3-pixel space glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Usable row width in pixels.
    pub max_row_px: u32,
    /// Rows per page.
    pub rows_per_page: u32,
    /// Pages per book.
    pub pages_per_book: u32,
    /// Maximum characters in a signed title.
    pub max_title_chars: usize,
    /// Toolbar slots holding blank books.
    pub toolbar_slots: u32,
    /// Width of the space glyph. The engine adds `space_px + 1` to the row
    /// for every token carrying a space separator; word measurement itself
    /// never includes spaces.
    pub space_px: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_row_px: 114,
            rows_per_page: 14,
            pages_per_book: 100,
            max_title_chars: 15,
            toolbar_slots: 9,
            space_px: 3,
        }
    }
}

impl LayoutConfig {
    fn validate(self) -> Result<(), LayoutError> {
        if self.max_row_px == 0 {
            return Err(LayoutError::InvalidConfig { field: "max_row_px" });
        }
        if self.rows_per_page == 0 {
            return Err(LayoutError::InvalidConfig {
                field: "rows_per_page",
            });
        }
        if self.pages_per_book == 0 {
            return Err(LayoutError::InvalidConfig {
                field: "pages_per_book",
            });
        }
        if self.toolbar_slots == 0 {
            return Err(LayoutError::InvalidConfig {
                field: "toolbar_slots",
            });
        }
        Ok(())
    }
}

/// Where a resumed run starts acting.
///
/// Counters always start from book 1, page 1; the start position only gates
/// actuation. The gate is `start.book <= book && start.page <= page`, so a
/// non-default `page` suppresses early pages of *every* book, not only the
/// starting one. Resuming mid-book therefore pairs a concrete `book` with
/// the page to resume at inside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StartPosition {
    pub book: u32,
    pub page: u32,
}

impl Default for StartPosition {
    fn default() -> Self {
        Self { book: 1, page: 1 }
    }
}

/// Book title construction policy for sign directives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitlePolicy {
    /// Caller-supplied base name.
    pub base_name: String,
    /// Append the book ordinal to every signed title.
    pub numbered: bool,
}

/// Per-run session options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOptions {
    pub start: StartPosition,
    /// When false the session only updates counts and never emits
    /// directives (dry run).
    pub live: bool,
    pub title: TitlePolicy,
}

/// Validated engine configuration; sessions are cheap per-run values.
#[derive(Clone, Copy, Debug)]
pub struct LayoutEngine {
    cfg: LayoutConfig,
}

impl LayoutEngine {
    /// Create an engine, rejecting zero limits before any word is processed.
    pub fn new(cfg: LayoutConfig) -> Result<Self, LayoutError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    /// The validated configuration.
    pub fn config(&self) -> LayoutConfig {
        self.cfg
    }

    /// Start a pagination pass.
    pub fn start_session(&self, opts: SessionOptions) -> LayoutSession {
        LayoutSession {
            cfg: self.cfg,
            opts,
            st: LayoutState {
                book: 1,
                page: 1,
                row: 1,
                row_px: 0,
                toolbar_slot: 1,
            },
            restock_pending: false,
        }
    }
}

/// Result of finalizing a session at stream exhaustion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finalization {
    /// Closing directives (the final sign, when acting).
    pub directives: Vec<Directive>,
    pub summary: RunSummary,
}

/// One pagination pass over a word stream.
pub struct LayoutSession {
    cfg: LayoutConfig,
    opts: SessionOptions,
    st: LayoutState,
    restock_pending: bool,
}

impl LayoutSession {
    /// Snapshot of the current state.
    pub fn state(&self) -> LayoutState {
        self.st
    }

    /// True while a restock acknowledgment is outstanding.
    pub fn restock_pending(&self) -> bool {
        self.restock_pending
    }

    /// Confirm the operator restocked the toolbar; resets the slot cursor.
    pub fn acknowledge_restock(&mut self) {
        if self.restock_pending {
            self.restock_pending = false;
            self.st.toolbar_slot = 1;
        }
    }

    fn acting(&self) -> bool {
        self.opts.live
            && self.opts.start.book <= self.st.book
            && self.opts.start.page <= self.st.page
    }

    /// Place one measured word.
    ///
    /// Checks run in a fixed order: over-wide flagging, row fit, page
    /// overflow, book overflow, trailing-space accounting, then embedded
    /// newline (which always wins last). Directives are appended in the
    /// order the actuator must execute them.
    pub fn place(&mut self, word: &WordToken, width_px: u32) -> Result<Placement, LayoutError> {
        if self.restock_pending {
            return Err(LayoutError::RestockPending);
        }

        let cfg = self.cfg;
        let mut events = Vec::new();
        let mut directives = Vec::new();

        let available = i64::from(cfg.max_row_px) - i64::from(self.st.row_px);
        self.st.row_px = self.st.row_px.saturating_add(width_px);

        if width_px > cfg.max_row_px {
            events.push(LayoutEvent::WordTooWide { width_px });
            events.push(LayoutEvent::RowBreak);
            self.st.row += 1;
            self.st.row_px = width_px;
        } else if i64::from(width_px) > available {
            events.push(LayoutEvent::RowBreak);
            self.st.row += 1;
            self.st.row_px = width_px;
        }

        if self.st.row > cfg.rows_per_page {
            events.push(LayoutEvent::PageBreak);
            if self.acting() {
                directives.push(Directive::ClickNextPage);
            }
            self.st.page += 1;
            self.st.row = 1;
            self.st.row_px = width_px;
        }

        if self.st.page > cfg.pages_per_book {
            events.push(LayoutEvent::BookBreak);
            if self.acting() {
                let title = self.current_title()?;
                directives.push(Directive::SignBook { title });
                if self.st.toolbar_slot > cfg.toolbar_slots {
                    events.push(LayoutEvent::RestockRequired);
                    directives.push(Directive::RequestOperatorAck);
                    self.restock_pending = true;
                } else {
                    directives.push(Directive::SelectToolbarBook {
                        slot: self.st.toolbar_slot,
                    });
                    self.st.toolbar_slot += 1;
                }
            }
            self.st.book += 1;
            self.st.page = 1;
        }

        if word.has_space_separator() {
            self.st.row_px = self.st.row_px.saturating_add(cfg.space_px + 1);
        }
        if word.has_newline() {
            events.push(LayoutEvent::RowBreak);
            self.st.row += 1;
            self.st.row_px = 0;
        }

        events.push(LayoutEvent::Placed { width_px });
        if self.acting() {
            directives.push(Directive::TypeWord(word.as_str().to_string()));
        }

        Ok(Placement {
            events,
            directives,
            state: self.st,
        })
    }

    /// Finalize at stream exhaustion: sign the in-progress book when acting
    /// and return the final counts.
    pub fn finish(self) -> Result<Finalization, LayoutError> {
        if self.restock_pending {
            return Err(LayoutError::RestockPending);
        }
        let mut directives = Vec::new();
        if self.acting() {
            let title = self.current_title()?;
            directives.push(Directive::SignBook { title });
        }
        Ok(Finalization {
            directives,
            summary: RunSummary {
                books: self.st.book,
                pages: self.st.page,
            },
        })
    }

    fn current_title(&self) -> Result<String, LayoutError> {
        let number = self.opts.title.numbered.then_some(self.st.book);
        build_title(&self.opts.title.base_name, number, self.cfg.max_title_chars)
    }
}

/// Build a sign title from the base name and an optional book ordinal.
///
/// Over-long titles keep the full `".."` ellipsis and numeric suffix and
/// truncate the base name (by characters) to fit `max_title_chars` exactly.
/// A suffix that alone exceeds the budget is a configuration error, never
/// silently shortened.
pub fn build_title(
    base_name: &str,
    number: Option<u32>,
    max_title_chars: usize,
) -> Result<String, LayoutError> {
    let mut title = base_name.to_string();
    if let Some(n) = number {
        title.push(' ');
        title.push_str(&n.to_string());
    }
    if title.chars().count() <= max_title_chars {
        return Ok(title);
    }

    let mut suffix = String::from("..");
    if let Some(n) = number {
        suffix.push(' ');
        suffix.push_str(&n.to_string());
    }
    let suffix_chars = suffix.chars().count();
    let Some(keep) = max_title_chars.checked_sub(suffix_chars) else {
        return Err(LayoutError::TitleOverflow {
            suffix_chars,
            max_title_chars,
        });
    };

    let mut truncated: String = base_name.chars().take(keep).collect();
    truncated.push_str(&suffix);
    Ok(truncated)
}

/// Layout engine error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// A layout limit was zero at construction time.
    InvalidConfig { field: &'static str },
    /// The ellipsis/numbering suffix alone cannot fit the title budget.
    TitleOverflow {
        suffix_chars: usize,
        max_title_chars: usize,
    },
    /// A placement was attempted while a restock acknowledgment is
    /// outstanding.
    RestockPending,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { field } => {
                write!(f, "layout config rejected: {} must be positive", field)
            }
            Self::TitleOverflow {
                suffix_chars,
                max_title_chars,
            } => write!(
                f,
                "title suffix does not fit: {} chars with a {} char budget",
                suffix_chars, max_title_chars
            ),
            Self::RestockPending => write!(f, "restock acknowledgment outstanding"),
        }
    }
}

impl std::error::Error for LayoutError {}
