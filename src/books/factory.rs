use crate::books::repository::BookRepository;
use crate::books::repository::json_book_repository::JsonBookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;

pub fn create_book_repository(config: &Configuration, store: RepositoryStore) -> LibraryResult<Box<dyn BookRepository>> {
    match store {
        RepositoryStore::JsonFile => {
            let repo = JsonBookRepository::new(config.books_file.as_path());
            repo.init()?;
            Ok(Box::new(repo))
        }
        RepositoryStore::InMemory => {
            Ok(Box::new(MemoryBookRepository::new()))
        }
    }
}
