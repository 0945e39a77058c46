use std::process::ExitCode;

use tracing::error;

use fiscal_extract::config::ExtractConfig;
use fiscal_extract::logging::init_tracing;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let config = ExtractConfig::default();
    match fiscal_extract::run(&config).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "extraction aborted");
            ExitCode::FAILURE
        }
    }
}
