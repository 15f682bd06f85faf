pub mod json_book_repository;
pub mod memory_book_repository;

use crate::books::domain::model::BookRecord;
use crate::core::library::LibraryResult;

// BookRepository persists the whole catalog as one document: the book records plus the
// last assigned id. It knows nothing about validation rules.
pub trait BookRepository {
    // load never fails: a missing, empty or malformed store reads as (vec![], 0)
    fn load(&self) -> (Vec<BookRecord>, i64);

    // save overwrites the store with exactly these records and counter
    fn save(&self, books: &[BookRecord], last_id: i64) -> LibraryResult<()>;
}
