use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SmokeError>;

/// Failures the smoke check can hit before producing a verdict.
///
/// Everything here is fatal to the run: the caller tears the session down
/// and exits with an error status. A wrong post-login URL is not an
/// error; that is a [`crate::Verdict::Failed`].
#[derive(Debug, Error)]
pub enum SmokeError {
    /// The driver binary could not be spawned (missing, not executable,
    /// or it exited before serving its status endpoint).
    #[error("driver failed to start: {path}")]
    Driver {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("driver did not report ready within {ms}ms")]
    DriverUnready { ms: u64 },

    #[error("webdriver session failed: {0}")]
    Session(String),

    #[error("navigation failed: {url}")]
    Navigation {
        url: String,
        #[source]
        source: fantoccini::error::CmdError,
    },

    /// The page markup does not match the login contract
    /// (`#email`, `#password`, `button[type='submit']`).
    #[error("element not found: {selector}")]
    ElementNotFound { selector: String },

    #[error(transparent)]
    WebDriver(#[from] fantoccini::error::CmdError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
