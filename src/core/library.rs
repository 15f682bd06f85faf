use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    // Malformed or policy-violating input: bad id, bad status, bad title/author/year or
    // a duplicate book. Always raised before any state is mutated.
    InvalidInput {
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

impl LibraryError {
    pub fn invalid_input(message: &str) -> LibraryError {
        LibraryError::InvalidInput { message: message.to_string() }
    }

    pub fn storage(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Storage { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, LibraryError::InvalidInput { .. })
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::storage(
            format!("io failure {}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::InvalidInput { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Storage { message, reason_code } => {
                match reason_code {
                    Some(code) => write!(f, "{} ({})", message, code),
                    None => write!(f, "{}", message),
                }
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                match reason_code {
                    Some(code) => write!(f, "{} ({})", message, code),
                    None => write!(f, "{}", message),
                }
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;

// BookStatus is the lending state of a book. The string form is used both on disk and
// in the console, so it must stay stable.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum BookStatus {
    #[default]
    #[serde(rename = "available")]
    Available,
    #[serde(rename = "borrowed")]
    Borrowed,
}

lazy_static! {
    static ref VALID_STATUSES: Vec<&'static str> =
        BookStatus::ALL.iter().map(|s| s.as_str()).collect();
}

impl BookStatus {
    pub const ALL: [BookStatus; 2] = [BookStatus::Available, BookStatus::Borrowed];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::Borrowed => "borrowed",
        }
    }

    pub fn valid_statuses() -> &'static [&'static str] {
        VALID_STATUSES.as_slice()
    }

    pub fn is_valid(status: &str) -> bool {
        VALID_STATUSES.iter().any(|valid| *valid == status)
    }
}

impl FromStr for BookStatus {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookStatus::ALL.iter()
            .find(|status| status.as_str() == s)
            .copied()
            .ok_or_else(|| LibraryError::serialization(
                format!("unknown book status {:?}", s).as_str()))
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
