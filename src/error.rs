//! Centralized error handling for the biography page.
//!
//! ## One Error Kind for Images
//!
//! Every way an image download can go wrong (unreachable host, HTTP error
//! status, truncated body, undecodable bytes) collapses into
//! [`PageError::ImageUnavailable`]. The page never branches on the cause;
//! it only cares whether an image came back:
//!
//! ```
//! use bio_page::error::PageError;
//!
//! let err = PageError::ImageUnavailable {
//!     url: "https://example.com/missing.png".to_owned(),
//!     reason: "HTTP status 404 Not Found".to_owned(),
//! };
//! assert!(err.to_string().contains("404"));
//! ```
//!
//! ## Context Extension Trait
//!
//! [`ResultExt`] adds `.context()` to any `Result` whose error converts into
//! [`PageError`]:
//!
//! ```no_run
//! use bio_page::error::ResultExt as _;
//!
//! fn read_settings() -> bio_page::error::Result<String> {
//!     std::fs::read_to_string("config.json").context("Failed to read settings")
//! }
//! ```

use std::fmt;

/// Main error type for page operations.
#[derive(Debug)]
pub enum PageError {
    /// I/O errors (config files, log directory)
    Io(std::io::Error),

    /// Configuration could not be parsed or is invalid
    Config(String),

    /// A remote image could not be fetched or decoded
    ImageUnavailable { url: String, reason: String },

    /// The native window failed to start
    Gui(String),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::ImageUnavailable { url, reason } => write!(f, "{reason} ({url})"),
            Self::Gui(msg) => write!(f, "Window error: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PageError {}

impl From<std::io::Error> for PageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for PageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<eframe::Error> for PageError {
    fn from(err: eframe::Error) -> Self {
        Self::Gui(err.to_string())
    }
}

/// Result type alias for page operations.
pub type Result<T> = std::result::Result<T, PageError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<PageError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: PageError = e.into();
            PageError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: PageError = e.into();
            PageError::Other(format!("{}: {}", f(), err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PageError::Config("banner_url is empty".to_owned());
        assert_eq!(err.to_string(), "Configuration error: banner_url is empty");
    }

    #[test]
    fn test_image_unavailable_mentions_url() {
        let err = PageError::ImageUnavailable {
            url: "https://example.com/a.png".to_owned(),
            reason: "connection refused".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "connection refused (https://example.com/a.png)"
        );
    }

    #[test]
    fn test_result_context() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "config.json",
        ));

        let result: Result<()> = result.context("Failed to read config");
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config")
        );
    }
}
