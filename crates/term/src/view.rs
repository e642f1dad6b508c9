//! Scorecard view - lines of styled spans, independent of any terminal.

use crate::core::{Frame, ScoreCard, ScoreError};
use crate::types::FrameKind;

const LABEL_WIDTH: usize = 6;
const CELL_WIDTH: usize = 4;

/// Semantic style of a span; the renderer decides the colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Plain,
    Label,
    Strike,
    Spare,
    Total,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

pub type Line = Vec<Span>;

/// Final scorecard: frame numbers, marks, frame scores and the total.
///
/// ```text
/// frame    1   2   3
/// marks    X  7/  9-
/// score   20  19   9
/// total 48
/// ```
pub fn card_lines(card: &ScoreCard) -> Vec<Line> {
    let mut ordinals = vec![label("frame")];
    let mut marks = vec![label("marks")];
    let mut scores = vec![label("score")];

    for frame in card.frames() {
        ordinals.push(cell(frame.ordinal, Tone::Label));
        marks.push(cell(frame.notation(), mark_tone(frame)));
        scores.push(cell(frame.score, Tone::Plain));
    }

    let mut total = vec![label("total"), Span::new(card.total().to_string(), Tone::Total)];
    if !card.is_complete() {
        total.push(Span::new(
            format!(" ({} of 10 frames)", card.frames().len()),
            Tone::Label,
        ));
    }

    vec![ordinals, marks, scores, total]
}

/// Error message, with a caret under the offending character when the error
/// points at one.
pub fn error_lines(notation: &str, err: &ScoreError) -> Vec<Line> {
    let mut lines = vec![vec![
        Span::new("error: ", Tone::Error),
        Span::new(err.to_string(), Tone::Plain),
        Span::new(format!(" [{}]", err.code()), Tone::Label),
    ]];

    if let Some(index) = err.index() {
        lines.push(vec![Span::new(format!("  {}", notation), Tone::Plain)]);
        lines.push(vec![Span::new(
            format!("  {}^", " ".repeat(index)),
            Tone::Error,
        )]);
    }
    lines
}

/// Lines without styling, joined by newlines.
pub fn to_plain_text(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|line| line.iter().map(|span| span.text.as_str()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn label(text: &str) -> Span {
    Span::new(format!("{:<width$}", text, width = LABEL_WIDTH), Tone::Label)
}

fn cell(value: impl ToString, tone: Tone) -> Span {
    Span::new(
        format!("{:>width$}", value.to_string(), width = CELL_WIDTH),
        tone,
    )
}

fn mark_tone(frame: &Frame) -> Tone {
    match frame.kind {
        FrameKind::Strike => Tone::Strike,
        FrameKind::Spare => Tone::Spare,
        FrameKind::Open => Tone::Plain,
    }
}
