//! Environment-error behavior of the real WebDriver session. No browser
//! or driver binary is required: the only path exercised is the one that
//! must fail before anything network-facing happens.

use smoke::{CheckConfig, SmokeError, WebDriverSession};

#[tokio::test]
async fn invalid_driver_path_is_an_environment_error() {
    let mut config = CheckConfig::new("/nonexistent/chromedriver-for-smoke-tests");
    config.driver_port = 19515;

    let err = WebDriverSession::open(&config)
        .await
        .err()
        .expect("open must fail without a driver binary");

    match err {
        SmokeError::Driver { path, .. } => {
            assert_eq!(path, std::path::Path::new("/nonexistent/chromedriver-for-smoke-tests"));
        }
        other => panic!("expected SmokeError::Driver, got: {other}"),
    }
}
