use clap::Parser;
use smoke::{LoginCheck, Verdict, WebDriverSession};
use smoke_cli::{cli::Cli, logging};
use tracing::error;

/// Exit codes: 0 pass, 1 fail (wrong URL), 2 environment or markup error.
const EXIT_FAILED: i32 = 1;
const EXIT_ERROR: i32 = 2;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(cli).await {
        Ok(verdict) => {
            println!("{}", verdict.report());
            if !verdict.passed() {
                std::process::exit(EXIT_FAILED);
            }
        }
        Err(err) => {
            let chain = format!("{err:#}");
            error!(target = "smoke", error = %chain, "smoke check aborted");
            std::process::exit(EXIT_ERROR);
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<Verdict> {
    let config = cli.into_config();
    let session = WebDriverSession::open(&config).await?;
    let verdict = LoginCheck::new(config).run(Box::new(session)).await?;
    Ok(verdict)
}
