use std::path::PathBuf;
use std::time::Duration;

/// Dev-server origin the Luneverse frontend runs on by default.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5173";

/// Default account used against local seed data.
pub const DEFAULT_EMAIL: &str = "test@example.com";
pub const DEFAULT_PASSWORD: &str = "yourPassword";

/// Everything one smoke-check run needs. The driver path is always an
/// explicit value (flag or `CHROMEDRIVER` env at the CLI layer), never
/// ambient process-global state.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Path to the WebDriver binary (chromedriver) to spawn.
    pub driver_path: PathBuf,
    /// Port the spawned driver listens on.
    pub driver_port: u16,
    /// Origin of the running Luneverse instance.
    pub base_url: String,
    pub email: String,
    pub password: String,
    /// Upper bound on the post-login redirect wait. The wait polls and
    /// ends as soon as the URL matches, so this is a ceiling, not a
    /// fixed delay.
    pub redirect_timeout: Duration,
    pub poll_interval: Duration,
    pub headless: bool,
}

impl CheckConfig {
    pub fn new(driver_path: impl Into<PathBuf>) -> Self {
        Self {
            driver_path: driver_path.into(),
            driver_port: 9515,
            base_url: DEFAULT_BASE_URL.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            redirect_timeout: Duration::from_millis(5000),
            poll_interval: Duration::from_millis(250),
            headless: true,
        }
    }

    /// URL of the login form.
    pub fn login_url(&self) -> String {
        format!("{}/login", self.origin())
    }

    /// URL the app must land on after a successful login.
    pub fn expected_url(&self) -> String {
        format!("{}/dashboard", self.origin())
    }

    fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_login_and_dashboard_urls() {
        let config = CheckConfig::new("/usr/bin/chromedriver");
        assert_eq!(config.login_url(), "http://localhost:5173/login");
        assert_eq!(config.expected_url(), "http://localhost:5173/dashboard");
    }

    #[test]
    fn trailing_slash_on_base_url_is_tolerated() {
        let mut config = CheckConfig::new("/usr/bin/chromedriver");
        config.base_url = "http://localhost:4000/".to_string();
        assert_eq!(config.login_url(), "http://localhost:4000/login");
        assert_eq!(config.expected_url(), "http://localhost:4000/dashboard");
    }
}
