use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Configuration,
    pub store: RepositoryStore,
}

impl AppState {
    pub fn new(config: Configuration, store: RepositoryStore) -> AppState {
        AppState {
            config,
            store,
        }
    }
}

// ConsoleError is what the console shows for a failed command. Recoverable errors are
// the user's fault (bad input); the rest are reported as unexpected.
#[derive(Debug, PartialEq)]
pub struct ConsoleError {
    pub recoverable: bool,
    pub message: String,
}

impl From<CommandError> for ConsoleError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Validation { .. } => {
                ConsoleError { recoverable: true, message: err.to_string() }
            }
            CommandError::Storage { .. } |
            CommandError::Serialization { .. } |
            CommandError::Runtime { .. } => {
                ConsoleError { recoverable: false, message: err.to_string() }
            }
        }
    }
}
