use std::io::{self, Write};

use anyhow::Result;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::QueueableCommand;

use crate::config::{OutputConfig, OutputFormat};
use crate::core::{ScoreCard, ScoreError};
use crate::report::{ErrorReport, ScoreReport};
use crate::view::{card_lines, error_lines, Line, Tone};

/// Writes scorecards to stdout and errors to stderr in the configured format.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportPrinter {
    config: OutputConfig,
}

impl ReportPrinter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> OutputConfig {
        self.config
    }

    pub fn print_card(&self, notation: &str, card: &ScoreCard) -> Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_card(&mut stdout, notation, card)?;
        stdout.flush()?;
        Ok(())
    }

    pub fn print_error(&self, notation: &str, err: &ScoreError) -> Result<()> {
        let mut stderr = io::stderr().lock();
        self.write_error(&mut stderr, notation, err)?;
        stderr.flush()?;
        Ok(())
    }

    pub fn write_card<W: Write>(
        &self,
        out: &mut W,
        notation: &str,
        card: &ScoreCard,
    ) -> Result<()> {
        match self.config.format {
            OutputFormat::Json => {
                writeln!(out, "{}", ScoreReport::new(notation, card).to_json()?)?
            }
            OutputFormat::Text => self.write_lines(out, &card_lines(card))?,
        }
        Ok(())
    }

    pub fn write_error<W: Write>(
        &self,
        out: &mut W,
        notation: &str,
        err: &ScoreError,
    ) -> Result<()> {
        match self.config.format {
            OutputFormat::Json => {
                writeln!(out, "{}", ErrorReport::new(notation, err).to_json()?)?
            }
            OutputFormat::Text => self.write_lines(out, &error_lines(notation, err))?,
        }
        Ok(())
    }

    fn write_lines<W: Write>(&self, out: &mut W, lines: &[Line]) -> Result<()> {
        let mut buf = Vec::new();
        encode_lines_into(lines, self.config.color, &mut buf)?;
        out.write_all(&buf)?;
        Ok(())
    }
}

/// Encode styled lines into `out`, one terminal line each.
///
/// This builds a sequence of crossterm commands without writing to stdout.
/// With `color` off only the text is written.
pub fn encode_lines_into(lines: &[Line], color: bool, out: &mut Vec<u8>) -> Result<()> {
    for line in lines {
        for span in line {
            if color {
                apply_tone_into(out, span.tone)?;
            }
            out.queue(Print(&span.text))?;
        }
        if color {
            out.queue(ResetColor)?;
            out.queue(SetAttribute(Attribute::Reset))?;
        }
        out.queue(Print("\n"))?;
    }
    Ok(())
}

fn apply_tone_into(out: &mut Vec<u8>, tone: Tone) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    match tone_color(tone) {
        Some(color) => out.queue(SetForegroundColor(color))?,
        None => out.queue(ResetColor)?,
    };
    if matches!(tone, Tone::Total | Tone::Error) {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if tone == Tone::Label {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn tone_color(tone: Tone) -> Option<Color> {
    match tone {
        Tone::Plain | Tone::Label => None,
        Tone::Strike => Some(Color::Yellow),
        Tone::Spare => Some(Color::Cyan),
        Tone::Total => Some(Color::Green),
        Tone::Error => Some(Color::Red),
    }
}
