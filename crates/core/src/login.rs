use tracing::{info, warn};

use crate::config::CheckConfig;
use crate::error::Result;
use crate::session::{PageSession, Target};
use crate::wait::{self, UrlWait};

/// Outcome of one smoke-check run. Landing on the wrong URL is a reported
/// result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed { actual_url: String },
}

impl Verdict {
    /// The human-readable report line printed to stdout.
    pub fn report(&self) -> String {
        match self {
            Verdict::Passed => "✅ Test passed: Login redirected correctly!".to_string(),
            Verdict::Failed { actual_url } => {
                format!("❌ Test failed. Actual URL: {actual_url}")
            }
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self, Verdict::Passed)
    }
}

/// The fixed login interaction sequence: navigate, fill credentials,
/// submit, wait for the redirect, compare.
pub struct LoginCheck {
    config: CheckConfig,
}

impl LoginCheck {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    /// Runs the flow. The session is closed exactly once on every path
    /// (pass, fail, and step error) before any error propagates.
    pub async fn run(&self, mut session: Box<dyn PageSession>) -> Result<Verdict> {
        let flow = self.drive(session.as_mut()).await;
        let closed = session.close().await;
        match flow {
            Ok(verdict) => {
                closed?;
                Ok(verdict)
            }
            Err(err) => {
                if let Err(close_err) = closed {
                    warn!(target = "smoke", error = %close_err, "session close failed after flow error");
                }
                Err(err)
            }
        }
    }

    async fn drive(&self, session: &mut dyn PageSession) -> Result<Verdict> {
        let login_url = self.config.login_url();
        let expected = self.config.expected_url();
        info!(target = "smoke", url = %login_url, "starting login flow");

        session.goto(&login_url).await?;
        session.fill(&Target::id("email"), &self.config.email).await?;
        session
            .fill(&Target::id("password"), &self.config.password)
            .await?;
        session.click(&Target::css("button[type='submit']")).await?;

        // The URL is only read after the submit click has returned.
        let outcome = wait::await_url(
            session,
            |url| url.eq_ignore_ascii_case(&expected),
            self.config.redirect_timeout,
            self.config.poll_interval,
        )
        .await?;

        Ok(match outcome {
            UrlWait::Matched(url) => {
                info!(target = "smoke", %url, "redirect landed");
                Verdict::Passed
            }
            UrlWait::TimedOut(actual_url) => Verdict::Failed { actual_url },
        })
    }
}
