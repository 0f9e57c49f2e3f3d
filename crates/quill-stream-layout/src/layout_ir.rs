//! Backend-agnostic layout events and actuator directives.
//!
//! The engine never touches a UI. Each placed word yields a list of
//! [`LayoutEvent`]s (state transitions and diagnostics, emitted in dry and
//! live passes alike) plus a list of [`Directive`]s (capability calls a
//! driver realizes against an actuator, emitted only when the act predicate
//! holds). Dry-run/live-run equivalence is defined over the event stream
//! with directives stripped.

use serde::{Deserialize, Serialize};

/// A book/page/row coordinate. All components are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub book: u32,
    pub page: u32,
    pub row: u32,
}

/// Snapshot of the mutable pagination state.
///
/// `row` may transiently read `rows_per_page + 1` after an embedded newline
/// at the bottom of a page; the next placement resolves it into a page
/// break. The same holds for `page` against `pages_per_book` within a
/// single placement, and for `toolbar_slot` against the toolbar capacity
/// while a restock acknowledgment is outstanding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutState {
    /// Current book ordinal.
    pub book: u32,
    /// Current page within the book.
    pub page: u32,
    /// Current row within the page.
    pub row: u32,
    /// Accumulated width of the current row in pixels.
    pub row_px: u32,
    /// Next toolbar slot a signed book hands over to.
    pub toolbar_slot: u32,
}

impl LayoutState {
    /// Book/page/row coordinate of this snapshot.
    pub fn position(&self) -> Position {
        Position {
            book: self.book,
            page: self.page,
            row: self.row,
        }
    }
}

/// State transitions and diagnostics for one placed word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutEvent {
    /// The word landed on the current row.
    Placed { width_px: u32 },
    /// The word (or its embedded newline) opened a new row.
    RowBreak,
    /// Row overflow rolled the layout onto a new page.
    PageBreak,
    /// Page overflow rolled the layout onto a new book.
    BookBreak,
    /// A single word exceeds the full row width. Row splitting is
    /// unsupported; the word is flagged and placed on a row of its own.
    WordTooWide { width_px: u32 },
    /// Every toolbar slot is exhausted. Blocking: the session refuses
    /// further placements until the restock is acknowledged.
    RestockRequired,
}

/// Capability calls for the external actuator, in execution order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Directive {
    /// Realize the token's characters as typed input.
    TypeWord(String),
    /// Advance the book UI to the next page.
    ClickNextPage,
    /// Open the sign UI, enter `title`, confirm.
    SignBook { title: String },
    /// Switch to the blank book in the given toolbar slot.
    SelectToolbarBook { slot: u32 },
    /// Block until a human operator confirms.
    RequestOperatorAck,
}

/// Outcome of placing one word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub events: Vec<LayoutEvent>,
    pub directives: Vec<Directive>,
    /// State after the placement.
    pub state: LayoutState,
}

/// Final counts returned at stream exhaustion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Books produced, including the in-progress one.
    pub books: u32,
    /// Pages used in the final book.
    pub pages: u32,
}
