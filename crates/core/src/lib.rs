//! Core scoring logic - pure, deterministic, and testable
//!
//! This crate turns a ten-pin bowling notation into a score. It has **zero
//! dependencies** on terminal output, argument parsing, or I/O, making it:
//!
//! - **Deterministic**: the same notation always produces the same card
//! - **Testable**: every classification step is a plain function
//! - **Allocation-free**: throws and frames live in fixed-capacity vectors
//!
//! # Module Structure
//!
//! - [`tokenizer`]: one [`Throw`] per notation character
//! - [`resolver`]: symbol lookup and pin counts, including contextual spares
//! - [`frame`]: strike / spare / open classification for a single frame
//! - [`scoring`]: the frame walk that sums frames into a [`ScoreCard`]
//! - [`error`]: [`ScoreError`] taxonomy
//!
//! # Example
//!
//! ```
//! use bowling_core::{score, score_card, ScoreError};
//! use bowling_types::FrameKind;
//!
//! assert_eq!(score("X5-"), Ok(20));
//! assert_eq!(score("1/"), Err(ScoreError::IncompleteBonus { frame: 1 }));
//!
//! let card = score_card("XXXXXXXXX9/X").unwrap();
//! assert!(card.is_complete());
//! assert_eq!(card.frames()[9].kind, FrameKind::Spare);
//! assert_eq!(card.total(), 279);
//! ```

pub mod error;
pub mod frame;
pub mod resolver;
pub mod scoring;
pub mod tokenizer;

pub use bowling_types as types;

// Re-export commonly used types for convenience
pub use error::ScoreError;
pub use frame::{classify_frame, classify_tenth_frame, Frame};
pub use resolver::{pins_at, resolve, symbol_for};
pub use scoring::{score, score_card, score_throws, ScoreCard};
pub use tokenizer::{tokenize, Throw, Throws};
