use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> ListBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookEntity>,
}

impl Command<(), ListBooksCommandResponse> for ListBooksCommand<'_> {
    fn execute(&mut self, _req: ()) -> Result<ListBooksCommandResponse, CommandError> {
        Ok(ListBooksCommandResponse { books: self.catalog_service.get_all_books() })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::catalog::command::list_books_cmd::ListBooksCommand;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::command::Command;

    #[test]
    fn test_should_run_list_books() {
        let mut svc = CatalogServiceImpl::new(Box::new(MemoryBookRepository::new()));
        let _ = svc.add_book("b", "Author", 2000).expect("should add book");
        let _ = svc.add_book("a", "Author", 2000).expect("should add book");

        let res = ListBooksCommand::new(&svc).execute(()).expect("should list");
        let titles: Vec<&str> = res.books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(vec!["b", "a"], titles);
    }
}
