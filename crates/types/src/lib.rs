//! Core types module - shared constants and symbol definitions
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (scoring engine, terminal output, JSON reports).
//!
//! # Notation
//!
//! A game is written one character per delivery:
//!
//! | Symbol | Meaning | Pins |
//! |--------|---------|------|
//! | `0`-`9` | Pins knocked down | 0-9 |
//! | `-` | Miss (gutter) | 0 |
//! | `/` | Spare, second throw of a frame only | 10 minus the first throw |
//! | `X` | Strike | 10 |
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PINS` | 10 | Pins standing at the start of a frame |
//! | `FRAMES_PER_GAME` | 10 | Frames in a full game |
//! | `MAX_THROWS` | 21 | Nine open frames plus a three-throw tenth |
//! | `MAX_TENTH_FRAME_THROWS` | 3 | Strike or spare in the tenth earns bonus throws |
//! | `MAX_SCORE` | 300 | Twelve strikes |
//!
//! # Examples
//!
//! ```
//! use bowling_types::{FrameKind, Symbol, PINS};
//!
//! assert_eq!(Symbol::from_char('X'), Some(Symbol::Strike));
//! assert_eq!(Symbol::from_char('7'), Some(Symbol::Pins(7)));
//! assert_eq!(Symbol::from_char('?'), None);
//!
//! assert_eq!(Symbol::Miss.pin_count(), Some(0));
//! assert_eq!(Symbol::Strike.pin_count(), Some(PINS));
//! assert_eq!(Symbol::Spare.pin_count(), None);
//!
//! assert_eq!(FrameKind::Spare.as_str(), "spare");
//! ```

/// Pins standing at the start of every frame
pub const PINS: u8 = 10;

/// Frames in a full game
pub const FRAMES_PER_GAME: u8 = 10;

/// Upper bound on deliveries in one game (9 open frames + 3 throws in the tenth)
pub const MAX_THROWS: usize = 21;

/// Most throws the tenth frame can hold
pub const MAX_TENTH_FRAME_THROWS: usize = 3;

/// Perfect game score
pub const MAX_SCORE: u16 = 300;

/// Strike marker
pub const STRIKE_CHAR: char = 'X';

/// Spare marker
pub const SPARE_CHAR: char = '/';

/// Miss (gutter) marker
pub const MISS_CHAR: char = '-';

/// A single delivery as written in the notation
///
/// - **Pins**: a digit, 0-9 pins
/// - **Miss**: `-`, no pins
/// - **Spare**: `/`, clears the pins left by the first throw of the frame
/// - **Strike**: `X`, all ten pins on the first throw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Pins(u8),
    Miss,
    Spare,
    Strike,
}

impl Symbol {
    /// Parse a notation character
    ///
    /// # Examples
    ///
    /// ```
    /// use bowling_types::Symbol;
    ///
    /// assert_eq!(Symbol::from_char('0'), Some(Symbol::Pins(0)));
    /// assert_eq!(Symbol::from_char('-'), Some(Symbol::Miss));
    /// assert_eq!(Symbol::from_char('/'), Some(Symbol::Spare));
    /// assert_eq!(Symbol::from_char('x'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Symbol::Pins(c as u8 - b'0')),
            MISS_CHAR => Some(Symbol::Miss),
            SPARE_CHAR => Some(Symbol::Spare),
            STRIKE_CHAR => Some(Symbol::Strike),
            _ => None,
        }
    }

    /// Convert back to the notation character
    pub fn as_char(&self) -> char {
        match self {
            Symbol::Pins(n) => (b'0' + n) as char,
            Symbol::Miss => MISS_CHAR,
            Symbol::Spare => SPARE_CHAR,
            Symbol::Strike => STRIKE_CHAR,
        }
    }

    /// Pins knocked down when the symbol is read on its own.
    ///
    /// Returns `None` for [`Symbol::Spare`], whose value depends on the
    /// previous throw of the frame.
    pub fn pin_count(&self) -> Option<u8> {
        match self {
            Symbol::Pins(n) => Some(*n),
            Symbol::Miss => Some(0),
            Symbol::Strike => Some(PINS),
            Symbol::Spare => None,
        }
    }

    pub fn is_strike(&self) -> bool {
        matches!(self, Symbol::Strike)
    }

    pub fn is_spare(&self) -> bool {
        matches!(self, Symbol::Spare)
    }
}

/// Frame classification
///
/// - **Strike**: ten pins on the first throw, bonus is the next two throws
/// - **Spare**: ten pins across two throws, bonus is the next throw
/// - **Open**: fewer than ten pins, no bonus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    Strike,
    Spare,
    Open,
}

impl FrameKind {
    /// Bonus throws this frame borrows from the throws that follow it
    ///
    /// # Examples
    ///
    /// ```
    /// use bowling_types::FrameKind;
    ///
    /// assert_eq!(FrameKind::Strike.bonus_throws(), 2);
    /// assert_eq!(FrameKind::Spare.bonus_throws(), 1);
    /// assert_eq!(FrameKind::Open.bonus_throws(), 0);
    /// ```
    pub fn bonus_throws(&self) -> usize {
        match self {
            FrameKind::Strike => 2,
            FrameKind::Spare => 1,
            FrameKind::Open => 0,
        }
    }

    /// Convert to lowercase string (used in reports)
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameKind::Strike => "strike",
            FrameKind::Spare => "spare",
            FrameKind::Open => "open",
        }
    }
}
