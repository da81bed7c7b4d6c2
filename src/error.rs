//! Error Types
//!
//! Display strings are shown to the user as-is.

/// Failures detectable while saving an outfit from the builder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    #[error("Please add at least one item to your outfit")]
    NoItems,
    #[error("Please enter a name for your outfit")]
    MissingName,
    #[error("Not connected to server. Please try again.")]
    NotConnected,
    #[error("Failed to send outfit creation request. Please check connection.")]
    SendFailed(#[from] SendError),
}

/// A request could not be handed to the socket.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    #[error("socket is not open")]
    NotOpen,
    #[error("outgoing channel closed")]
    ChannelClosed,
    #[error("failed to encode request: {0}")]
    Encode(String),
}

/// An incoming frame could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("malformed message: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The page bootstrap data could not be read.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid bootstrap data: {0}")]
    InvalidBootstrap(#[from] serde_json::Error),
}
