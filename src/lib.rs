//! Bowling score calculator (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `bowling::{args,core,term,types}` and hosts the
//! command-line front end.

pub mod cli;

pub use bowling_args as args;
pub use bowling_core as core;
pub use bowling_term as term;
pub use bowling_types as types;

pub use bowling_core::{score, score_card, ScoreCard, ScoreError};
