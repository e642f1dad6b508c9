//! Throw value resolver - symbols to pin counts

use crate::error::ScoreError;
use crate::tokenizer::Throw;
use crate::types::{Symbol, PINS};

/// Look up the symbol for a notation character at `index`.
pub fn symbol_for(c: char, index: usize) -> Result<Symbol, ScoreError> {
    Symbol::from_char(c).ok_or(ScoreError::InvalidSymbol { symbol: c, index })
}

/// Pins for a throw read on its own.
///
/// A spare marker has no standalone value and is rejected; use [`pins_at`]
/// when the previous throw of the frame is known.
pub fn resolve(throw: &Throw) -> Result<u8, ScoreError> {
    throw
        .symbol
        .pin_count()
        .ok_or(ScoreError::MalformedSpare { index: throw.index })
}

/// Pins for the throw at `index`, resolving a spare marker against the throw
/// before it.
///
/// Returns `None` when `index` is past the end of `throws`. A spare is only
/// valid directly after a first throw that left pins standing (a digit or a
/// miss).
pub fn pins_at(throws: &[Throw], index: usize) -> Option<Result<u8, ScoreError>> {
    let throw = throws.get(index)?;
    if !throw.symbol.is_spare() {
        return Some(resolve(throw));
    }

    let malformed = ScoreError::MalformedSpare { index: throw.index };
    let previous = index.checked_sub(1).and_then(|i| throws.get(i));
    Some(match previous.map(|p| p.symbol) {
        Some(Symbol::Pins(n)) if n < PINS => Ok(PINS - n),
        Some(Symbol::Miss) => Ok(PINS),
        _ => Err(malformed),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    #[test]
    fn test_symbol_lookup() {
        assert_eq!(symbol_for('X', 0), Ok(Symbol::Strike));
        assert_eq!(symbol_for('-', 4), Ok(Symbol::Miss));
        assert_eq!(
            symbol_for('?', 4),
            Err(ScoreError::InvalidSymbol {
                symbol: '?',
                index: 4
            })
        );
    }

    #[test]
    fn test_resolve_standalone_throws() {
        assert_eq!(resolve(&Throw::new(Symbol::Pins(1), 0)), Ok(1));
        assert_eq!(resolve(&Throw::new(Symbol::Miss, 0)), Ok(0));
        assert_eq!(resolve(&Throw::new(Symbol::Strike, 0)), Ok(10));
        assert_eq!(
            resolve(&Throw::new(Symbol::Spare, 7)),
            Err(ScoreError::MalformedSpare { index: 7 })
        );
    }

    #[test]
    fn test_spare_takes_remaining_pins() {
        let throws = tokenize("3/-/").unwrap();
        assert_eq!(pins_at(&throws, 0), Some(Ok(3)));
        assert_eq!(pins_at(&throws, 1), Some(Ok(7)));
        assert_eq!(pins_at(&throws, 3), Some(Ok(10)));
        assert_eq!(pins_at(&throws, 4), None);
    }

    #[test]
    fn test_spare_needs_a_first_throw() {
        let throws = tokenize("/").unwrap();
        assert_eq!(
            pins_at(&throws, 0),
            Some(Err(ScoreError::MalformedSpare { index: 0 }))
        );

        let throws = tokenize("X/").unwrap();
        assert_eq!(
            pins_at(&throws, 1),
            Some(Err(ScoreError::MalformedSpare { index: 1 }))
        );

        let throws = tokenize("5//").unwrap();
        assert_eq!(
            pins_at(&throws, 2),
            Some(Err(ScoreError::MalformedSpare { index: 2 }))
        );
    }
}
