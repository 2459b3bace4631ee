use thiserror::Error;

/// Why an encode attempt failed, by stage.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported precision: {0} (must be 2 bytes per sample for 16-bit PCM)")]
    Precision(u16),

    #[error("unsupported number of channels: {0} (must be 1 or 2)")]
    Channels(u16),

    #[error("failed to create encoder")]
    Create(#[source] anyhow::Error),

    /// The sink may hold a partial, unusable prefix of output.
    #[error("failed to encode audio")]
    Encode(#[source] anyhow::Error),

    /// Output written so far remains in the sink but is incomplete.
    #[error("failed to close encoder")]
    Close(#[source] anyhow::Error),
}

impl Error {
    /// True for errors raised before any encoder was constructed.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Precision(_) | Error::Channels(_))
    }
}
