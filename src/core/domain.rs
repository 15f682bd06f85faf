use std::env;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable {
    fn id(&self) -> Option<i64>;
}

pub const DEFAULT_DATA_DIR: &str = "data";
pub const BOOKS_FILE_NAME: &str = "books.json";

// DisplaySettings defines column widths of the book table printed by the console
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct DisplaySettings {
    pub id_width: usize,
    pub title_width: usize,
    pub author_width: usize,
    pub year_width: usize,
    pub status_width: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            id_width: 5,
            title_width: 30,
            author_width: 30,
            year_width: 6,
            status_width: 15,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum LogFormat {
    Text,
    Json,
}

// Configuration abstracts config options for the catalog application
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub books_file: PathBuf,
    pub log_level: String,
    pub log_format: LogFormat,
    pub display: DisplaySettings,
}

impl Configuration {
    pub fn new(data_dir: &Path) -> Self {
        Configuration {
            books_file: data_dir.join(BOOKS_FILE_NAME),
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
            display: DisplaySettings::default(),
        }
    }

    // from_env reads LMS_DATA_DIR, LMS_LOG_LEVEL and LMS_LOG_FORMAT, falling back to defaults
    pub fn from_env() -> Self {
        let data_dir = env::var("LMS_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        let mut config = Configuration::new(Path::new(&data_dir));
        if let Ok(level) = env::var("LMS_LOG_LEVEL") {
            config.log_level = level;
        }
        if let Ok(format) = env::var("LMS_LOG_FORMAT") {
            config.log_format = if format.eq_ignore_ascii_case("json") { LogFormat::Json } else { LogFormat::Text };
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use crate::core::domain::{Configuration, LogFormat};

    #[test]
    fn test_should_build_config() {
        let config = Configuration::new(Path::new("/tmp/lms"));
        assert_eq!(Path::new("/tmp/lms/books.json"), config.books_file.as_path());
        assert_eq!("warn", config.log_level.as_str());
        assert_eq!(LogFormat::Text, config.log_format);
        assert_eq!(5, config.display.id_width);
        assert_eq!(30, config.display.title_width);
        assert_eq!(30, config.display.author_width);
        assert_eq!(6, config.display.year_width);
        assert_eq!(15, config.display.status_width);
    }
}
