pub mod service;

use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;

// CatalogService owns the books of the library and the id counter. Every call that
// changes the catalog persists the full state before returning.
pub trait CatalogService {
    fn add_book(&mut self, title: &str, author: &str, year: i32) -> LibraryResult<BookEntity>;
    fn remove_book(&mut self, id: i64) -> LibraryResult<bool>;
    fn search_books(&self, query: &str) -> Vec<BookEntity>;
    fn get_all_books(&self) -> Vec<BookEntity>;
    fn find_book_by_id(&self, id: i64) -> LibraryResult<Option<BookEntity>>;
    fn change_status(&mut self, id: i64, new_status: &str) -> LibraryResult<Option<BookEntity>>;
}
