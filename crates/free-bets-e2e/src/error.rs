// Error types for the Free Bets page-object suite

use thiserror::Error;

/// Result type alias for page-object operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving or verifying the Free Bets page
#[derive(Debug, Error)]
pub enum Error {
    /// Assertion timeout (expect API)
    ///
    /// The expected condition did not hold before the retry window elapsed.
    #[error("Assertion timeout: {0}")]
    AssertionTimeout(String),

    /// A label did not contain a parenthesised count such as `(12)`
    ///
    /// Raised on the first read; counts are never retried.
    #[error("Count not found in button text: '{0}'")]
    CountNotFound(String),

    /// A card position that is neither an index nor a known ordinal
    #[error("Invalid card position '{0}'. Expected 'first', 'last', 'eq:<n>' or an index")]
    InvalidPosition(String),

    /// No offer profile is registered for the bookmaker identifier
    #[error("No offer profile registered for bookmaker '{0}'")]
    UnknownBookie(String),

    /// Page navigation produced no document response or a non-200 status
    #[error("Navigation to '{url}' failed: {}", describe_status(.status))]
    Navigation { url: String, status: Option<u16> },

    /// Invalid suite configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Driver-level failure that is not an assertion
    ///
    /// Includes the selector or command that failed.
    #[error("Driver error: {0}")]
    Driver(String),

    /// Error reported by the Playwright bindings
    #[error("Playwright error: {0}")]
    Playwright(#[from] playwright_rs::Error),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }

    /// Returns the innermost error, skipping any context layers
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Context(_, inner) => inner.root_cause(),
            other => other,
        }
    }
}

fn describe_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!("status {}", code),
        None => "no response".to_string(),
    }
}
