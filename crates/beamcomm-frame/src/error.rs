/// Reasons a status block does not yield a payload.
///
/// None of these are fatal: a channel treats every variant as "no message
/// this tick".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// The status text does not have the fixed line count.
    #[error("status has {found} lines (expected {expected})")]
    LineCount { found: usize, expected: usize },

    /// The payload line has no `[msg:` marker.
    #[error("no message marker in status line")]
    MissingMarker,

    /// The payload line has no closing bracket.
    #[error("no closing bracket in status line")]
    MissingClose,

    /// The last closing bracket sits before the end of the last marker.
    #[error("closing bracket precedes message marker")]
    InvertedSpan,
}

pub type Result<T> = std::result::Result<T, FrameError>;
