use std::fmt;
use std::fmt::{Display, Formatter};
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    Validation {
        message: String,
    },
    Storage {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::InvalidInput { message } => {
                CommandError::Validation { message }
            }
            LibraryError::Storage { message, reason_code } => {
                CommandError::Storage { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Validation { message } => write!(f, "{}", message),
            CommandError::Storage { message, .. } => write!(f, "storage failure: {}", message),
            CommandError::Serialization { message } => write!(f, "serialization failure: {}", message),
            CommandError::Runtime { message, .. } => write!(f, "{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_build_command_error() {
        let _ = CommandError::Storage { message: "test".to_string(), reason_code: None };
        let _ = CommandError::Runtime { message: "test".to_string(), reason_code: None };
        let _ = CommandError::Serialization { message: "test".to_string() };
        let _ = CommandError::Validation { message: "test".to_string() };
    }

    #[test]
    fn test_should_map_library_error() {
        assert!(matches!(CommandError::from(LibraryError::invalid_input("bad")), CommandError::Validation{ message: _ }));
        assert!(matches!(CommandError::from(LibraryError::storage("disk", None)), CommandError::Storage{ message: _, reason_code: _ }));
        assert!(matches!(CommandError::from(LibraryError::serialization("json")), CommandError::Serialization{ message: _ }));
        assert!(matches!(CommandError::from(LibraryError::runtime("boom", None)), CommandError::Runtime{ message: _, reason_code: _ }));
    }

    #[test]
    fn test_should_display_validation_message_verbatim() {
        let err = CommandError::from(LibraryError::invalid_input("Book title cannot be empty"));
        assert_eq!("Book title cannot be empty", err.to_string());
    }
}
