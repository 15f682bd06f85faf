use std::io;
use std::process::ExitCode;
use tracing::{error, info};
use lms::catalog::controller::ConsoleApp;
use lms::catalog::factory::create_catalog_service;
use lms::core::controller::AppState;
use lms::core::domain::Configuration;
use lms::core::repository::RepositoryStore;
use lms::utils::logs::setup_tracing;

fn main() -> ExitCode {
    let state = AppState::new(Configuration::from_env(), RepositoryStore::from_env());
    setup_tracing(&state.config);
    info!("starting catalog with {:?} store at {}", state.store, state.config.books_file.display());

    let svc = match create_catalog_service(&state.config, state.store) {
        Ok(svc) => svc,
        Err(err) => {
            error!("failed to open catalog: {}", err);
            eprintln!("Failed to open catalog {}: {}", state.config.books_file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let mut app = ConsoleApp::new(svc, state.config.display, stdin.lock(), io::stdout());
    match app.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("console failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
