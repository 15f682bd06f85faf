use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::books::domain::model::BookRecord;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};

// CatalogDocument is the on-disk shape of the catalog
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    books: Vec<BookRecord>,
    #[serde(default)]
    last_id: i64,
}

#[derive(Debug)]
pub struct JsonBookRepository {
    path: PathBuf,
}

impl JsonBookRepository {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    // init writes an empty catalog when the file does not exist yet
    pub fn init(&self) -> LibraryResult<()> {
        if !self.path.exists() {
            self.save(&[], 0)?;
        }
        Ok(())
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl BookRepository for JsonBookRepository {
    fn load(&self) -> (Vec<BookRecord>, i64) {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no catalog at {}, starting empty", self.path.display());
                return (vec![], 0);
            }
            Err(err) => {
                warn!("failed to read catalog {}: {}", self.path.display(), err);
                return (vec![], 0);
            }
        };
        if contents.trim().is_empty() {
            return (vec![], 0);
        }
        match serde_json::from_str::<CatalogDocument>(&contents) {
            Ok(doc) => (doc.books, doc.last_id),
            Err(err) => {
                warn!("ignoring malformed catalog {}: {}", self.path.display(), err);
                (vec![], 0)
            }
        }
    }

    fn save(&self, books: &[BookRecord], last_id: i64) -> LibraryResult<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir)?;

        let doc = CatalogDocument { books: books.to_vec(), last_id };
        let json = serde_json::to_string_pretty(&doc)?;

        // write next to the target and rename over it, a crash never leaves half a document
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        file.persist(&self.path).map_err(|err| LibraryError::from(err.error))?;
        debug!("saved {} books to {}", books.len(), self.path.display());
        Ok(())
    }
}
