//! Tokenizer - one throw per notation character

use arrayvec::ArrayVec;

use crate::error::ScoreError;
use crate::resolver::symbol_for;
use crate::types::{Symbol, MAX_THROWS};

/// A tokenized delivery and where it came from in the notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throw {
    pub symbol: Symbol,
    /// 0-based character index in the notation
    pub index: usize,
}

impl Throw {
    pub fn new(symbol: Symbol, index: usize) -> Self {
        Self { symbol, index }
    }
}

/// Every throw of one game, in order.
pub type Throws = ArrayVec<Throw, MAX_THROWS>;

/// Split a notation into throws.
///
/// An empty notation is a valid game with no throws. Symbols are validated as
/// they are read, so the first bad character is the one reported.
pub fn tokenize(notation: &str) -> Result<Throws, ScoreError> {
    let mut throws = Throws::new();
    for (index, c) in notation.chars().enumerate() {
        let symbol = symbol_for(c, index)?;
        throws
            .try_push(Throw::new(symbol, index))
            .map_err(|_| ScoreError::TooManyThrows { max: MAX_THROWS })?;
    }
    Ok(throws)
}
