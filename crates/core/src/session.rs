use std::fmt;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder, Locator};
use tokio::process::{Child, Command};
use tokio::time::{Instant, sleep};
use tracing::debug;

use crate::config::CheckConfig;
use crate::error::{Result, SmokeError};

/// How long a freshly spawned driver gets to start serving `/status`.
const DRIVER_STARTUP: Duration = Duration::from_secs(10);
const DRIVER_STARTUP_POLL: Duration = Duration::from_millis(100);

/// Element locator used by the login flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Id(String),
    Css(String),
}

impl Target {
    pub fn id(id: impl Into<String>) -> Self {
        Target::Id(id.into())
    }

    pub fn css(selector: impl Into<String>) -> Self {
        Target::Css(selector.into())
    }

    fn as_locator(&self) -> Locator<'_> {
        match self {
            Target::Id(id) => Locator::Id(id),
            Target::Css(css) => Locator::Css(css),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Id(id) => write!(f, "#{id}"),
            Target::Css(css) => write!(f, "{css}"),
        }
    }
}

/// The subset of browser operations the login flow needs.
///
/// `close` consumes the session, so release happens at most once by
/// construction; [`crate::LoginCheck::run`] guarantees it happens at
/// least once.
#[async_trait]
pub trait PageSession: Send {
    async fn goto(&mut self, url: &str) -> Result<()>;

    /// Types `text` into the element at `target`, replacing its value.
    async fn fill(&mut self, target: &Target, text: &str) -> Result<()>;

    async fn click(&mut self, target: &Target) -> Result<()>;

    /// Current top-level URL as the browser reports it.
    async fn current_url(&mut self) -> Result<String>;

    /// Ends the browser session and releases every resource behind it.
    async fn close(self: Box<Self>) -> Result<()>;
}

/// Real session: a spawned driver binary plus a fantoccini client talking
/// WebDriver to it.
pub struct WebDriverSession {
    client: Client,
    driver: DriverProcess,
}

impl WebDriverSession {
    /// Spawns the configured driver and opens a fresh browser session.
    pub async fn open(config: &CheckConfig) -> Result<Self> {
        let driver = DriverProcess::spawn(config).await?;

        let mut args = vec!["--disable-gpu".to_string()];
        if config.headless {
            args.push("--headless=new".to_string());
        }
        let mut caps = serde_json::Map::new();
        caps.insert("browserName".to_string(), serde_json::json!("chrome"));
        caps.insert(
            "goog:chromeOptions".to_string(),
            serde_json::json!({ "args": args }),
        );

        debug!(target = "smoke", endpoint = %driver.endpoint(), "connecting webdriver session");
        let client = ClientBuilder::rustls()
            .map_err(|e| SmokeError::Session(format!("tls setup failed: {e}")))?
            .capabilities(caps)
            .connect(&driver.endpoint())
            .await
            .map_err(|e| SmokeError::Session(e.to_string()))?;

        Ok(Self { client, driver })
    }
}

#[async_trait]
impl PageSession for WebDriverSession {
    async fn goto(&mut self, url: &str) -> Result<()> {
        self.client
            .goto(url)
            .await
            .map_err(|source| SmokeError::Navigation {
                url: url.to_string(),
                source,
            })
    }

    async fn fill(&mut self, target: &Target, text: &str) -> Result<()> {
        let element = self
            .client
            .find(target.as_locator())
            .await
            .map_err(|e| not_found_or(e, target))?;
        element.send_keys(text).await?;
        Ok(())
    }

    async fn click(&mut self, target: &Target) -> Result<()> {
        let element = self
            .client
            .find(target.as_locator())
            .await
            .map_err(|e| not_found_or(e, target))?;
        element.click().await?;
        Ok(())
    }

    async fn current_url(&mut self) -> Result<String> {
        let url = self.client.current_url().await?;
        Ok(url.to_string())
    }

    async fn close(self: Box<Self>) -> Result<()> {
        let WebDriverSession { client, driver } = *self;
        let closed = client.close().await;
        driver.shutdown().await;
        closed.map_err(SmokeError::from)
    }
}

fn not_found_or(err: CmdError, target: &Target) -> SmokeError {
    if err.is_no_such_element() {
        SmokeError::ElementNotFound {
            selector: target.to_string(),
        }
    } else {
        SmokeError::WebDriver(err)
    }
}

/// A spawned WebDriver binary. `kill_on_drop` backstops the explicit
/// [`DriverProcess::shutdown`] so an early `?` cannot leak the child.
pub struct DriverProcess {
    child: Child,
    path: PathBuf,
    port: u16,
}

impl DriverProcess {
    pub async fn spawn(config: &CheckConfig) -> Result<Self> {
        debug!(
            target = "smoke",
            path = %config.driver_path.display(),
            port = config.driver_port,
            "spawning driver"
        );
        let child = Command::new(&config.driver_path)
            .arg(format!("--port={}", config.driver_port))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| SmokeError::Driver {
                path: config.driver_path.clone(),
                source,
            })?;

        let mut driver = Self {
            child,
            path: config.driver_path.clone(),
            port: config.driver_port,
        };
        driver.wait_until_ready(DRIVER_STARTUP).await?;
        Ok(driver)
    }

    pub fn endpoint(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    pub async fn shutdown(mut self) {
        let _ = self.child.kill().await;
    }

    /// Polls the WebDriver `/status` endpoint until it reports ready.
    async fn wait_until_ready(&mut self, timeout: Duration) -> Result<()> {
        let status_url = format!("{}/status", self.endpoint());
        let http = reqwest::Client::new();
        let deadline = Instant::now() + timeout;

        loop {
            if let Some(status) = self.child.try_wait()? {
                return Err(SmokeError::Driver {
                    path: self.path.clone(),
                    source: std::io::Error::other(format!(
                        "driver exited during startup: {status}"
                    )),
                });
            }

            if let Ok(resp) = http.get(&status_url).send().await {
                let ready = resp
                    .json::<serde_json::Value>()
                    .await
                    .map(|body| body["value"]["ready"].as_bool().unwrap_or(false))
                    .unwrap_or(false);
                if ready {
                    debug!(target = "smoke", "driver ready");
                    return Ok(());
                }
            }

            if Instant::now() >= deadline {
                return Err(SmokeError::DriverUnready {
                    ms: timeout.as_millis() as u64,
                });
            }
            sleep(DRIVER_STARTUP_POLL).await;
        }
    }
}
