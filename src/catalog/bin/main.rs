use std::process::ExitCode;
use tracing::error;
use lms_console::catalog::domain::model::Library;
use lms_console::catalog::shell;
use lms_console::core::controller::AppState;
use lms_console::core::domain::Configuration;
use lms_console::gateway::console::StdConsole;
use lms_console::utils::logs::setup_tracing;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = Configuration::from_env();
    setup_tracing(config.tracing_level());

    let state = AppState::new(config, Library::new());
    let mut console = StdConsole::new();
    match shell::run(&state, &mut console).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("catalog console stopped: {}", err.message());
            ExitCode::FAILURE
        }
    }
}
