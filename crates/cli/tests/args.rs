//! Argument parsing and config derivation for the lv-smoke binary.

use std::time::Duration;

use clap::Parser;
use smoke_cli::cli::Cli;

fn parse(args: &[&str]) -> Cli {
    let mut full = vec!["lv-smoke", "--driver", "/usr/bin/chromedriver"];
    full.extend_from_slice(args);
    Cli::try_parse_from(full).expect("args must parse")
}

#[test]
fn defaults_match_the_dev_server() {
    let cli = parse(&[]);
    assert_eq!(cli.base_url, "http://localhost:5173");
    assert_eq!(cli.email, "test@example.com");
    assert_eq!(cli.port, 9515);
    assert_eq!(cli.timeout_ms, 5000);
    assert_eq!(cli.poll_ms, 250);
    assert!(!cli.headed);
}

#[test]
fn overrides_are_honored() {
    let cli = parse(&[
        "--base-url",
        "http://localhost:4000",
        "--timeout-ms",
        "8000",
        "--headed",
        "-vv",
    ]);
    assert_eq!(cli.base_url, "http://localhost:4000");
    assert_eq!(cli.timeout_ms, 8000);
    assert!(cli.headed);
    assert_eq!(cli.verbose, 2);
}

#[test]
fn config_derives_urls_and_timings() {
    let cli = parse(&["--base-url", "http://localhost:4000/", "--poll-ms", "100"]);
    let config = cli.into_config();
    assert_eq!(config.login_url(), "http://localhost:4000/login");
    assert_eq!(config.expected_url(), "http://localhost:4000/dashboard");
    assert_eq!(config.poll_interval, Duration::from_millis(100));
    assert!(config.headless);
}
