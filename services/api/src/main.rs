use std::process::ExitCode;

use deduction_ai_api::run;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("deduction-ai-api: {err}");
            ExitCode::FAILURE
        }
    }
}
