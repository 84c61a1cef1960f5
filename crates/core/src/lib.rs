//! smoke: end-to-end login smoke check for the Luneverse web app.
//!
//! Drives a real browser through the login form at `/login`, waits for the
//! post-login redirect, and reports whether the app landed on `/dashboard`.
//! The browser is reached over WebDriver via a locally spawned driver
//! binary (chromedriver); everything above that is expressed against the
//! [`PageSession`] trait so the flow can be exercised without a browser.
//!
//! ```ignore
//! use smoke::{CheckConfig, LoginCheck, WebDriverSession};
//!
//! #[tokio::main]
//! async fn main() -> smoke::Result<()> {
//!     let config = CheckConfig::new("/usr/local/bin/chromedriver");
//!     let session = WebDriverSession::open(&config).await?;
//!     let verdict = LoginCheck::new(config).run(Box::new(session)).await?;
//!     println!("{}", verdict.report());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod login;
pub mod session;
pub mod testing;
pub mod wait;

pub use config::CheckConfig;
pub use error::{Result, SmokeError};
pub use login::{LoginCheck, Verdict};
pub use session::{PageSession, Target, WebDriverSession};
pub use wait::{UrlWait, await_url};
