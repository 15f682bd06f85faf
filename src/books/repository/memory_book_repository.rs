use std::cell::RefCell;

use crate::books::domain::model::BookRecord;
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;

// MemoryBookRepository keeps the last saved document in process memory
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    state: RefCell<(Vec<BookRecord>, i64)>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(books: Vec<BookRecord>, last_id: i64) -> Self {
        Self {
            state: RefCell::new((books, last_id)),
        }
    }
}

impl BookRepository for MemoryBookRepository {
    fn load(&self) -> (Vec<BookRecord>, i64) {
        self.state.borrow().clone()
    }

    fn save(&self, books: &[BookRecord], last_id: i64) -> LibraryResult<()> {
        *self.state.borrow_mut() = (books.to_vec(), last_id);
        Ok(())
    }
}
