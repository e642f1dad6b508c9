//! Terminal output for scored games.
//!
//! The view layer turns a [`ScoreCard`](crate::core::ScoreCard) into lines of
//! toned spans; the renderer encodes those spans with crossterm styling (or as
//! plain text) and writes them out. A JSON report is available for scripts.
//!
//! Goals:
//! - Keep `core` free of any output concerns
//! - Make the text layout testable without a terminal
//! - Respect `NO_COLOR` and friends (see [`config`])

pub mod config;
pub mod renderer;
pub mod report;
pub mod view;

pub use bowling_core as core;
pub use bowling_types as types;

pub use config::{OutputConfig, OutputFormat};
pub use renderer::{encode_lines_into, ReportPrinter};
pub use report::{ErrorReport, FrameKindLower, FrameReport, ScoreReport};
pub use view::{card_lines, error_lines, to_plain_text, Line, Span, Tone};
