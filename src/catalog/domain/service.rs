use std::str::FromStr;
use tracing::{debug, error, info};
use crate::books::domain::model::{BookEntity, BookRecord};
use crate::books::repository::BookRepository;
use crate::books::validator;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};

pub struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    books: Vec<BookEntity>,
    // records that could not be read as books, written back untouched on every save
    unreadable: Vec<BookRecord>,
    last_id: i64,
}

impl CatalogServiceImpl {
    pub fn new(book_repository: Box<dyn BookRepository>) -> Self {
        let (records, stored_last_id) = book_repository.load();
        let mut books = Vec::with_capacity(records.len());
        let mut unreadable = vec![];
        for record in records {
            match BookEntity::from_record(&record) {
                Ok(book) => books.push(book),
                Err(err) => {
                    error!("keeping unreadable book record {:?} aside: {}", record, err);
                    unreadable.push(record);
                }
            }
        }
        // ids must never be reused, even if the stored counter lags behind the records
        let max_id = books.iter().filter_map(|b| b.id).max().unwrap_or(0);
        let last_id = stored_last_id.max(max_id);
        info!("loaded {} books, last id {}", books.len(), last_id);
        Self {
            book_repository,
            books,
            unreadable,
            last_id,
        }
    }

    pub fn last_id(&self) -> i64 {
        self.last_id
    }

    fn save_books(&self) -> LibraryResult<()> {
        let records: Vec<BookRecord> = self.books.iter()
            .map(BookEntity::to_record)
            .chain(self.unreadable.iter().cloned())
            .collect();
        self.book_repository.save(&records, self.last_id)
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, title: &str, author: &str, year: i32) -> LibraryResult<BookEntity> {
        validator::validate_book_data(title, author, year, &self.books)?;

        let id = self.last_id.checked_add(1)
            .ok_or_else(|| LibraryError::runtime("book id counter exhausted", None))?;
        let book = BookEntity::new(id, title, author, year);
        let previous_last_id = self.last_id;
        self.last_id = id;
        self.books.push(book.clone());
        if let Err(err) = self.save_books() {
            self.books.pop();
            self.last_id = previous_last_id;
            return Err(err);
        }
        debug!("added book {:?}", book);
        Ok(book)
    }

    fn remove_book(&mut self, id: i64) -> LibraryResult<bool> {
        validator::validate_id(id)?;

        let before = self.books.clone();
        self.books.retain(|book| book.id() != Some(id));
        if self.books.len() == before.len() {
            return Ok(false);
        }
        if let Err(err) = self.save_books() {
            self.books = before;
            return Err(err);
        }
        debug!("removed book {}", id);
        Ok(true)
    }

    fn search_books(&self, query: &str) -> Vec<BookEntity> {
        if query.is_empty() {
            return vec![];
        }
        let query = query.to_lowercase();
        self.books.iter().filter(|book| book.matches(&query)).cloned().collect()
    }

    fn get_all_books(&self) -> Vec<BookEntity> {
        self.books.clone()
    }

    fn find_book_by_id(&self, id: i64) -> LibraryResult<Option<BookEntity>> {
        validator::validate_id(id)?;
        Ok(self.books.iter().find(|book| book.id() == Some(id)).cloned())
    }

    fn change_status(&mut self, id: i64, new_status: &str) -> LibraryResult<Option<BookEntity>> {
        validator::validate_id(id)?;
        validator::validate_status(new_status)?;
        let status = BookStatus::from_str(new_status)?;

        let Some(index) = self.books.iter().position(|book| book.id() == Some(id)) else {
            return Ok(None);
        };
        let updated = self.books[index].with_status(status);
        let previous = std::mem::replace(&mut self.books[index], updated.clone());
        if let Err(err) = self.save_books() {
            self.books[index] = previous;
            return Err(err);
        }
        debug!("book {} is now {}", id, status);
        Ok(Some(updated))
    }
}
