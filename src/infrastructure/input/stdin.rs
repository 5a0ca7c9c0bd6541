//! Standard input adapter

use std::io::IsTerminal;

use async_trait::async_trait;
use tokio::io::AsyncReadExt;

use crate::application::ports::{InputError, InputSource};

/// Reads the hook payload piped on standard input
pub struct StdinInput;

impl StdinInput {
    /// Create a new stdin input source
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InputSource for StdinInput {
    fn is_attached(&self) -> bool {
        // An interactive terminal has nothing piped into it
        !std::io::stdin().is_terminal()
    }

    async fn read_to_end(&self) -> Result<String, InputError> {
        let mut buf = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut buf)
            .await
            .map_err(|e| InputError::ReadFailed(e.to_string()))?;

        String::from_utf8(buf).map_err(|e| InputError::ReadFailed(e.to_string()))
    }
}
