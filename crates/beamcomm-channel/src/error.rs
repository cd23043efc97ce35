/// Errors that can occur in channel operations.
///
/// Only construction can fail. Decode problems during a tick are reported
/// through [`TickOutcome`](crate::TickOutcome), never as errors.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    /// Link-level error.
    #[error("link error: {0}")]
    Link(#[from] beamcomm_link::LinkError),
}

pub type Result<T> = std::result::Result<T, ChannelError>;
