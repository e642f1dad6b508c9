//! JSON report of a scored (or rejected) game.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::{ScoreCard, ScoreError};
use crate::types::FrameKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameKindLower {
    Strike,
    Spare,
    Open,
}

impl From<FrameKind> for FrameKindLower {
    fn from(kind: FrameKind) -> Self {
        match kind {
            FrameKind::Strike => FrameKindLower::Strike,
            FrameKind::Spare => FrameKindLower::Spare,
            FrameKind::Open => FrameKindLower::Open,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameReport {
    pub frame: u8,
    pub kind: FrameKindLower,
    pub marks: String,
    pub score: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub notation: String,
    pub total: u16,
    pub complete: bool,
    pub frames: Vec<FrameReport>,
}

impl ScoreReport {
    pub fn new(notation: &str, card: &ScoreCard) -> Self {
        Self {
            notation: notation.to_string(),
            total: card.total(),
            complete: card.is_complete(),
            frames: card
                .frames()
                .iter()
                .map(|f| FrameReport {
                    frame: f.ordinal,
                    kind: f.kind.into(),
                    marks: f.notation(),
                    score: f.score,
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub notation: String,
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl ErrorReport {
    pub fn new(notation: &str, err: &ScoreError) -> Self {
        Self {
            notation: notation.to_string(),
            code: err.code().to_string(),
            message: err.to_string(),
            index: err.index(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
