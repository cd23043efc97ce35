use std::fmt;

use tracing::trace;

use crate::error::{FrameError, Result};
use crate::noise::{strip_noise, DEFAULT_NOISE_PREFIXES};

/// Opening marker: `[msg:`.
pub const MSG_OPEN: &str = "[msg:";

/// Closing marker.
pub const MSG_CLOSE: char = ']';

/// Number of lines in an informative status block.
pub const STATUS_LINES: usize = 3;

/// Zero-based index of the line carrying the frame.
pub const PAYLOAD_LINE: usize = 2;

/// A payload addressed from one tagged endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Label of the sending endpoint.
    pub tag: String,
    /// The message text.
    pub payload: String,
}

impl Frame {
    /// Create a new frame.
    pub fn new(tag: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            payload: payload.into(),
        }
    }

    /// The text written into the name field.
    pub fn encode(&self) -> String {
        encode_frame(&self.tag, &self.payload)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {MSG_OPEN}{}{MSG_CLOSE}", self.tag, self.payload)
    }
}

/// Encode a payload into the name-field wire format.
///
/// Wire format:
/// ```text
/// <tag> [msg:<payload>]
/// ```
/// One space before the bracket. The payload is not escaped.
pub fn encode_frame(tag: &str, payload: &str) -> String {
    format!("{tag} {MSG_OPEN}{payload}{MSG_CLOSE}")
}

/// Extract the payload from a raw status block.
///
/// The block must have exactly [`STATUS_LINES`] lines. The payload line has
/// noise prefixes removed, then the text between the last [`MSG_OPEN`] and the
/// last [`MSG_CLOSE`] is returned. An empty span is a valid empty payload.
pub fn decode_status(raw: &str, config: &FrameConfig) -> Result<String> {
    let lines: Vec<&str> = raw.split('\n').collect();
    if lines.len() != STATUS_LINES {
        return Err(FrameError::LineCount {
            found: lines.len(),
            expected: STATUS_LINES,
        });
    }

    let line = strip_noise(lines[PAYLOAD_LINE], &config.noise_prefixes);
    trace!(line, "candidate payload line");

    let start = line
        .rfind(MSG_OPEN)
        .ok_or(FrameError::MissingMarker)?
        + MSG_OPEN.len();
    let end = line.rfind(MSG_CLOSE).ok_or(FrameError::MissingClose)?;
    if end < start {
        return Err(FrameError::InvertedSpan);
    }

    Ok(line[start..end].to_string())
}

/// Like [`decode_status`], collapsing every rejection into `None`.
pub fn decode_frame(raw: &str, config: &FrameConfig) -> Option<String> {
    decode_status(raw, config).ok()
}

/// Configuration for the frame codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameConfig {
    /// Prefixes removed from the payload line, checked in order.
    pub noise_prefixes: Vec<String>,
}

impl FrameConfig {
    /// Add a prefix to check after the existing ones.
    pub fn with_noise_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.noise_prefixes.push(prefix.into());
        self
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            noise_prefixes: DEFAULT_NOISE_PREFIXES
                .iter()
                .map(|prefix| prefix.to_string())
                .collect(),
        }
    }
}
