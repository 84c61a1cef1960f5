use std::time::Duration;

use tokio::time::{Instant, sleep};
use tracing::debug;

use crate::error::Result;
use crate::session::PageSession;

/// How a bounded URL wait ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlWait {
    Matched(String),
    /// The deadline passed; carries the last URL observed so the caller
    /// can report what the page actually showed.
    TimedOut(String),
}

/// Polls the session's URL until `matches` accepts it or `timeout` elapses.
///
/// Returns as soon as the redirect lands instead of always burning the
/// full interval. The URL is read at least once even with a zero timeout,
/// and a timeout is not an error; only a failed URL read is.
pub async fn await_url(
    session: &mut dyn PageSession,
    matches: impl Fn(&str) -> bool,
    timeout: Duration,
    poll_interval: Duration,
) -> Result<UrlWait> {
    let deadline = Instant::now() + timeout;
    loop {
        let url = session.current_url().await?;
        if matches(&url) {
            return Ok(UrlWait::Matched(url));
        }
        if Instant::now() >= deadline {
            debug!(target = "smoke", %url, "url wait timed out");
            return Ok(UrlWait::TimedOut(url));
        }
        sleep(poll_interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockSession;

    #[tokio::test]
    async fn returns_as_soon_as_the_url_matches() {
        let mut session = MockSession::with_urls([
            "http://localhost:5173/login",
            "http://localhost:5173/dashboard",
        ]);
        let outcome = await_url(
            &mut session,
            |url| url.ends_with("/dashboard"),
            Duration::from_secs(2),
            Duration::from_millis(5),
        )
        .await
        .unwrap();
        assert_eq!(
            outcome,
            UrlWait::Matched("http://localhost:5173/dashboard".to_string())
        );
    }

    #[tokio::test]
    async fn reports_the_last_url_on_timeout() {
        let mut session = MockSession::with_urls(["http://localhost:5173/login"]);
        let outcome = await_url(
            &mut session,
            |url| url.ends_with("/dashboard"),
            Duration::from_millis(20),
            Duration::from_millis(5),
        )
        .await
        .unwrap();
        assert_eq!(
            outcome,
            UrlWait::TimedOut("http://localhost:5173/login".to_string())
        );
    }

    #[tokio::test]
    async fn polls_at_least_once_with_a_zero_timeout() {
        let mut session = MockSession::with_urls(["http://localhost:5173/dashboard"]);
        let outcome = await_url(
            &mut session,
            |url| url.ends_with("/dashboard"),
            Duration::ZERO,
            Duration::from_millis(5),
        )
        .await
        .unwrap();
        assert!(matches!(outcome, UrlWait::Matched(_)));
    }
}
