//! Layout IR, pagination engine, and scribe orchestration for
//! `quill-stream`.
//!
//! The [`LayoutEngine`] converts a measured word stream into deterministic
//! row/page/book breaks and an actuator directive stream; the [`Scribe`]
//! wraps it in the mandatory dry-then-live pipeline.

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

mod layout_engine;
mod layout_ir;
mod scribe;

pub use layout_engine::{
    build_title, Finalization, LayoutConfig, LayoutEngine, LayoutError, LayoutSession,
    SessionOptions, StartPosition, TitlePolicy,
};
pub use layout_ir::{Directive, LayoutEvent, LayoutState, Placement, Position, RunSummary};
pub use scribe::{
    Actuator, ActuatorError, CancelToken, DryRunReport, FilePlanStore, NeverCancel, NumberingMode,
    RecordingActuator, Scribe, ScribeDiagnostic, ScribeError, ScribeOptions, TooWideWord,
    WordMeasurer,
};
