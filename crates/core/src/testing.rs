//! Test doubles for exercising the login flow without a browser.
//!
//! [`MockSession`] implements [`PageSession`] with a scripted URL
//! timeline and records every operation. A [`MockProbe`] cloned from the
//! session outlives it, so tests can assert on the recorded actions and
//! the close count after `close` has consumed the session.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{Result, SmokeError};
use crate::session::{PageSession, Target};

/// One operation recorded by [`MockSession`], in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockAction {
    Goto { url: String },
    Fill { target: String, text: String },
    Click { target: String },
    UrlRead,
    Close,
}

#[derive(Default)]
struct MockState {
    actions: Vec<MockAction>,
    close_count: usize,
    urls: Vec<String>,
    url_reads: usize,
    missing: Vec<String>,
}

/// Shared view into a [`MockSession`]'s recorded state.
#[derive(Clone)]
pub struct MockProbe {
    state: Arc<Mutex<MockState>>,
}

impl MockProbe {
    pub fn actions(&self) -> Vec<MockAction> {
        self.state.lock().unwrap().actions.clone()
    }

    /// How many times `close` ran. The flow must make this exactly 1.
    pub fn close_count(&self) -> usize {
        self.state.lock().unwrap().close_count
    }
}

pub struct MockSession {
    state: Arc<Mutex<MockState>>,
}

impl MockSession {
    /// Session whose observed URL steps through `timeline`, one entry per
    /// `current_url` call; the final entry repeats once exhausted.
    pub fn with_urls<I, S>(timeline: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let urls: Vec<String> = timeline.into_iter().map(Into::into).collect();
        assert!(!urls.is_empty(), "mock session needs at least one URL");
        Self {
            state: Arc::new(Mutex::new(MockState {
                urls,
                ..MockState::default()
            })),
        }
    }

    /// Makes lookups of `target` (display form, e.g. `#password`) fail
    /// with [`SmokeError::ElementNotFound`].
    pub fn missing_element(self, target: impl Into<String>) -> Self {
        self.state.lock().unwrap().missing.push(target.into());
        self
    }

    pub fn probe(&self) -> MockProbe {
        MockProbe {
            state: Arc::clone(&self.state),
        }
    }

    fn check_present(&self, target: &Target) -> Result<()> {
        let shown = target.to_string();
        if self.state.lock().unwrap().missing.contains(&shown) {
            return Err(SmokeError::ElementNotFound { selector: shown });
        }
        Ok(())
    }

    fn record(&self, action: MockAction) {
        self.state.lock().unwrap().actions.push(action);
    }
}

#[async_trait]
impl PageSession for MockSession {
    async fn goto(&mut self, url: &str) -> Result<()> {
        self.record(MockAction::Goto {
            url: url.to_string(),
        });
        Ok(())
    }

    async fn fill(&mut self, target: &Target, text: &str) -> Result<()> {
        self.check_present(target)?;
        self.record(MockAction::Fill {
            target: target.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn click(&mut self, target: &Target) -> Result<()> {
        self.check_present(target)?;
        self.record(MockAction::Click {
            target: target.to_string(),
        });
        Ok(())
    }

    async fn current_url(&mut self) -> Result<String> {
        let mut state = self.state.lock().unwrap();
        state.actions.push(MockAction::UrlRead);
        let index = state.url_reads.min(state.urls.len() - 1);
        state.url_reads += 1;
        Ok(state.urls[index].clone())
    }

    async fn close(self: Box<Self>) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.actions.push(MockAction::Close);
        state.close_count += 1;
        Ok(())
    }
}
