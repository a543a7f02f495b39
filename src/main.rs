// src/main.rs

use anismoke::{TestOutcome, cli, logging, run};

#[tokio::main]
async fn main() {
    match run_main().await {
        Ok(TestOutcome::Passed) => {}
        Ok(TestOutcome::Failed) => std::process::exit(1),
        Err(err) => {
            eprintln!("anismoke error: {err:?}");
            std::process::exit(2);
        }
    }
}

async fn run_main() -> anyhow::Result<TestOutcome> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await
}
