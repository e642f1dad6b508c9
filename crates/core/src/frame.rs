//! Frame classification - one step of the frame walk
//!
//! Each step looks at the throw under the cursor, decides whether the frame is
//! a strike, spare or open frame, and returns a [`Frame`] whose [`Frame::len`]
//! is the number of throws the walk must advance by.
//!
//! Bonus throws are read but not consumed in frames 1-9. In the tenth frame the
//! bonus throws belong to the frame itself.

use arrayvec::ArrayVec;
use tracing::trace;

use crate::error::ScoreError;
use crate::resolver::{pins_at, resolve};
use crate::tokenizer::Throw;
use crate::types::{FrameKind, Symbol, FRAMES_PER_GAME, MAX_TENTH_FRAME_THROWS, PINS};

/// A scored frame, derived from the throw sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// 1-based frame number
    pub ordinal: u8,
    pub kind: FrameKind,
    /// Throws that belong to this frame (bonus throws of frames 1-9 excluded)
    pub marks: ArrayVec<Symbol, MAX_TENTH_FRAME_THROWS>,
    /// Frame score including bonus pins
    pub score: u16,
}

impl Frame {
    fn new(ordinal: u8, kind: FrameKind, throws: &[Throw], score: u16) -> Self {
        let frame = Self {
            ordinal,
            kind,
            marks: throws.iter().map(|t| t.symbol).collect(),
            score,
        };
        trace!(
            frame = ordinal,
            kind = kind.as_str(),
            throws = frame.len(),
            score,
            "classified frame"
        );
        frame
    }

    /// Throws consumed from the sequence
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn is_tenth(&self) -> bool {
        self.ordinal == FRAMES_PER_GAME
    }

    /// Marks as they appear in the notation, e.g. `"9/"` or `"XX5"`
    pub fn notation(&self) -> String {
        self.marks.iter().map(Symbol::as_char).collect()
    }
}

/// Classify frame `ordinal` (1-9) starting at `cursor`.
///
/// Strikes consume one throw, everything else consumes two.
pub fn classify_frame(
    throws: &[Throw],
    cursor: usize,
    ordinal: u8,
) -> Result<Frame, ScoreError> {
    debug_assert!(ordinal < FRAMES_PER_GAME);

    let first = throws
        .get(cursor)
        .ok_or(ScoreError::IncompleteFrame { frame: ordinal })?;

    if first.symbol.is_strike() {
        let bonus =
            bonus_pins(throws, cursor + 1, ordinal)? + bonus_pins(throws, cursor + 2, ordinal)?;
        return Ok(Frame::new(
            ordinal,
            FrameKind::Strike,
            &throws[cursor..cursor + 1],
            u16::from(PINS) + bonus,
        ));
    }

    let (kind, pins) = pair(throws, cursor, ordinal)?;
    let score = match kind {
        FrameKind::Spare => u16::from(PINS) + bonus_pins(throws, cursor + 2, ordinal)?,
        _ => pins,
    };
    Ok(Frame::new(ordinal, kind, &throws[cursor..cursor + 2], score))
}

/// Classify the tenth frame starting at `cursor`.
///
/// A strike or spare pulls the following throws into the frame (three throws
/// total), so the walk ends here.
pub fn classify_tenth_frame(throws: &[Throw], cursor: usize) -> Result<Frame, ScoreError> {
    let frame = FRAMES_PER_GAME;
    let first = throws
        .get(cursor)
        .ok_or(ScoreError::IncompleteFrame { frame })?;

    if first.symbol.is_strike() {
        let fill = bonus_pins(throws, cursor + 1, frame)?;
        let last = bonus_pins(throws, cursor + 2, frame)?;
        // After a strike fill ball the pins are reset; otherwise the two fill
        // balls share one rack.
        let fresh_rack = throws[cursor + 1].symbol.is_strike();
        if !fresh_rack && fill + last > u16::from(PINS) {
            return Err(ScoreError::PinOverflow { frame });
        }
        return Ok(Frame::new(
            frame,
            FrameKind::Strike,
            &throws[cursor..cursor + 3],
            u16::from(PINS) + fill + last,
        ));
    }

    match pair(throws, cursor, frame)? {
        (FrameKind::Spare, _) => {
            let fill = bonus_pins(throws, cursor + 2, frame)?;
            Ok(Frame::new(
                frame,
                FrameKind::Spare,
                &throws[cursor..cursor + 3],
                u16::from(PINS) + fill,
            ))
        }
        (kind, pins) => Ok(Frame::new(frame, kind, &throws[cursor..cursor + 2], pins)),
    }
}

/// Score the two-throw frame at `cursor`: spare if the pins add up to ten
/// (written `/` or as two counts), open otherwise.
fn pair(throws: &[Throw], cursor: usize, frame: u8) -> Result<(FrameKind, u16), ScoreError> {
    let first = throws
        .get(cursor)
        .ok_or(ScoreError::IncompleteFrame { frame })?;
    let first = u16::from(resolve(first)?);
    let second = pins_at(throws, cursor + 1).ok_or(ScoreError::IncompleteFrame { frame })??;
    let second = u16::from(second);

    let pins = first + second;
    match pins.cmp(&u16::from(PINS)) {
        std::cmp::Ordering::Greater => Err(ScoreError::PinOverflow { frame }),
        std::cmp::Ordering::Equal => Ok((FrameKind::Spare, pins)),
        std::cmp::Ordering::Less => Ok((FrameKind::Open, pins)),
    }
}

/// Pins of a bonus throw; running off the end is an error, never zero.
fn bonus_pins(throws: &[Throw], index: usize, frame: u8) -> Result<u16, ScoreError> {
    let pins = pins_at(throws, index).ok_or(ScoreError::IncompleteBonus { frame })??;
    Ok(u16::from(pins))
}
