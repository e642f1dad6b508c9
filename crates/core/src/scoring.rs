//! Scoring module - ten-pin frame walk with bonus look-ahead
//!
//! Rules:
//! - Frames 1-9: a strike scores 10 plus the next two throws, a spare scores 10
//!   plus the next throw, an open frame scores its pins.
//! - Frame 10: fill balls earned by a strike or spare belong to the frame and
//!   never start an eleventh frame.
//! - A game may stop before the tenth frame, but never inside a frame or before
//!   the bonus throws it owes.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::error::ScoreError;
use crate::frame::{classify_frame, classify_tenth_frame, Frame};
use crate::tokenizer::{tokenize, Throw};
use crate::types::FRAMES_PER_GAME;

/// Frames produced by one scoring pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreCard {
    frames: ArrayVec<Frame, { FRAMES_PER_GAME as usize }>,
    total: u16,
}

impl ScoreCard {
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn total(&self) -> u16 {
        self.total
    }

    /// Whether all ten frames have been bowled
    pub fn is_complete(&self) -> bool {
        self.frames.len() == FRAMES_PER_GAME as usize
    }
}

/// Score a notation, e.g. `"X7/9-X-88/-6XXX81"`.
///
/// # Examples
///
/// ```
/// use bowling_core::score;
///
/// assert_eq!(score("XXXXXXXXXXXX"), Ok(300));
/// assert_eq!(score("9-9-9-9-9-9-9-9-9-9-"), Ok(90));
/// assert!(score("X").is_err());
/// ```
pub fn score(notation: &str) -> Result<u16, ScoreError> {
    score_card(notation).map(|card| card.total())
}

/// Score a notation and keep the per-frame breakdown.
pub fn score_card(notation: &str) -> Result<ScoreCard, ScoreError> {
    let throws = tokenize(notation)?;
    score_throws(&throws)
}

/// Walk tokenized throws frame by frame.
pub fn score_throws(throws: &[Throw]) -> Result<ScoreCard, ScoreError> {
    let mut card = ScoreCard::default();
    let mut cursor = 0usize;

    for ordinal in 1..=FRAMES_PER_GAME {
        if cursor >= throws.len() {
            break;
        }

        let frame = if ordinal < FRAMES_PER_GAME {
            classify_frame(throws, cursor, ordinal)?
        } else {
            classify_tenth_frame(throws, cursor)?
        };

        cursor += frame.len();
        card.total += frame.score;
        card.frames.push(frame);
    }

    if cursor < throws.len() {
        return Err(ScoreError::ExtraThrows {
            count: throws.len() - cursor,
        });
    }

    debug!(
        frames = card.frames.len(),
        total = card.total,
        complete = card.is_complete(),
        "scored game"
    );
    Ok(card)
}
