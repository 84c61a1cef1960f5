use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use smoke::CheckConfig;

use crate::styles::cli_styles;

#[derive(Parser, Debug)]
#[command(name = "lv-smoke")]
#[command(about = "Smoke-check the Luneverse login flow end to end")]
#[command(version)]
#[command(styles = cli_styles())]
pub struct Cli {
    /// Path to the chromedriver executable
    #[arg(long, env = "CHROMEDRIVER", value_name = "PATH")]
    pub driver: PathBuf,

    /// Port the spawned driver listens on
    #[arg(long, default_value_t = 9515)]
    pub port: u16,

    /// Origin of the running Luneverse instance
    #[arg(long, default_value = "http://localhost:5173", value_name = "URL")]
    pub base_url: String,

    /// Login email to submit
    #[arg(long, default_value = "test@example.com")]
    pub email: String,

    /// Login password to submit
    #[arg(
        long,
        env = "LUNEVERSE_PASSWORD",
        default_value = "yourPassword",
        hide_env_values = true
    )]
    pub password: String,

    /// Upper bound on the post-login redirect wait (ms)
    #[arg(long, default_value_t = 5000, value_name = "MS")]
    pub timeout_ms: u64,

    /// Interval between redirect polls (ms)
    #[arg(long, default_value_t = 250, value_name = "MS")]
    pub poll_ms: u64,

    /// Run the browser with a visible window
    #[arg(long)]
    pub headed: bool,

    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn into_config(self) -> CheckConfig {
        let mut config = CheckConfig::new(self.driver);
        config.driver_port = self.port;
        config.base_url = self.base_url;
        config.email = self.email;
        config.password = self.password;
        config.redirect_timeout = Duration::from_millis(self.timeout_ms);
        config.poll_interval = Duration::from_millis(self.poll_ms);
        config.headless = !self.headed;
        config
    }
}
