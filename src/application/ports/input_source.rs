//! Piped input port interface

use async_trait::async_trait;
use thiserror::Error;

/// Input errors
#[derive(Debug, Clone, Error)]
pub enum InputError {
    #[error("Failed to read piped input: {0}")]
    ReadFailed(String),
}

/// Port for ambient piped input (standard input of the hook runner)
#[async_trait]
pub trait InputSource: Send + Sync {
    /// Whether an input stream is attached at all.
    ///
    /// Must not block. Returns false for an interactive terminal.
    fn is_attached(&self) -> bool;

    /// Read the attached stream to end of input.
    ///
    /// Only called after [`InputSource::is_attached`] returned true.
    async fn read_to_end(&self) -> Result<String, InputError>;
}
