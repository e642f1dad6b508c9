//! Output configuration
//!
//! Environment variables:
//! - `BOWLING_FORMAT`: `text` (default) or `json`
//! - `NO_COLOR`: any non-empty value disables colors
//! - `BOWLING_NO_COLOR`: `1` or `true` disables colors

/// Output format for a scored game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Parse format name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any variable source; unknown or malformed values fall back to
    /// the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let format = lookup("BOWLING_FORMAT")
            .and_then(|s| OutputFormat::from_str(&s))
            .unwrap_or_default();

        let no_color = lookup("NO_COLOR").is_some_and(|v| !v.is_empty())
            || lookup("BOWLING_NO_COLOR")
                .map(|v| v == "1" || v.to_lowercase() == "true")
                .unwrap_or(false);

        Self {
            format,
            color: !no_color,
        }
    }
}
