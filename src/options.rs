use thiserror::Error;

use crate::strategy::DeliveryStrategy;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NegotiationOptions {
    /// Redirect the client or rewrite on the server side.
    pub strategy: DeliveryStrategy,
    /// Status code for redirect decisions. Must be a 3xx code.
    pub redirect_status: u16,
    /// File name appended to the request path, `index.md` by default.
    pub index_file: String,
}

impl Default for NegotiationOptions {
    fn default() -> Self {
        Self {
            strategy: DeliveryStrategy::Redirect,
            redirect_status: 302,
            index_file: "index.md".into(),
        }
    }
}

impl NegotiationOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(300..=399).contains(&self.redirect_status) {
            return Err(ValidationError::InvalidRedirectStatus(self.redirect_status));
        }
        if self.index_file.trim().is_empty() {
            return Err(ValidationError::EmptyIndexFile);
        }
        if self.index_file.contains('/') {
            return Err(ValidationError::IndexFileContainsSlash(
                self.index_file.clone(),
            ));
        }
        Ok(())
    }
}

/// Errors reported when an option combination cannot be honored.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("redirect status {0} is not a 3xx status code")]
    InvalidRedirectStatus(u16),
    #[error("markdown index file name cannot be empty")]
    EmptyIndexFile,
    #[error("markdown index file name '{0}' cannot contain a path separator")]
    IndexFileContainsSlash(String),
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
