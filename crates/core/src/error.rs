use thiserror::Error;

/// Reasons a notation cannot be scored.
///
/// Frames are 1-based ordinals; indices are 0-based character positions in the
/// notation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    /// A character outside `0-9`, `-`, `/`, `X`
    #[error("invalid symbol {symbol:?} at index {index}")]
    InvalidSymbol { symbol: char, index: usize },

    /// A strike or spare whose bonus throws run past the end of the notation
    #[error("frame {frame} is missing its bonus throws")]
    IncompleteBonus { frame: u8 },

    /// A spare marker with no first throw to pair with
    #[error("spare marker at index {index} does not follow a first throw")]
    MalformedSpare { index: usize },

    /// A frame that starts with a non-strike but has no second throw
    #[error("frame {frame} is missing its second throw")]
    IncompleteFrame { frame: u8 },

    /// Two throws of one frame adding up to more than ten pins
    #[error("frame {frame} knocks down more than ten pins")]
    PinOverflow { frame: u8 },

    /// Throws left over once the tenth frame is complete
    #[error("{count} throw(s) after the tenth frame")]
    ExtraThrows { count: usize },

    /// More characters than a game can ever hold
    #[error("notation is longer than {max} throws")]
    TooManyThrows { max: usize },
}

impl ScoreError {
    pub fn code(self) -> &'static str {
        match self {
            ScoreError::InvalidSymbol { .. } => "invalid_symbol",
            ScoreError::IncompleteBonus { .. } => "incomplete_bonus",
            ScoreError::MalformedSpare { .. } => "malformed_spare",
            ScoreError::IncompleteFrame { .. } => "incomplete_frame",
            ScoreError::PinOverflow { .. } => "pin_overflow",
            ScoreError::ExtraThrows { .. } => "extra_throws",
            ScoreError::TooManyThrows { .. } => "too_many_throws",
        }
    }

    /// Character index the error points at, when it points at one
    pub fn index(self) -> Option<usize> {
        match self {
            ScoreError::InvalidSymbol { index, .. } | ScoreError::MalformedSpare { index } => {
                Some(index)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_position() {
        let err = ScoreError::InvalidSymbol {
            symbol: 'Z',
            index: 3,
        };
        assert_eq!(err.to_string(), "invalid symbol 'Z' at index 3");
        assert_eq!(err.code(), "invalid_symbol");
        assert_eq!(err.index(), Some(3));

        let err = ScoreError::IncompleteBonus { frame: 10 };
        assert_eq!(err.to_string(), "frame 10 is missing its bonus throws");
        assert_eq!(err.index(), None);
    }
}
