use crate::books::domain::model::BookEntity;
use crate::books::validator::parse_year;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    // raw year as typed by the user
    pub year: String,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, year: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year: year.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct AddBookCommandResponse {
    pub book: BookEntity,
}

impl AddBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'_> {
    fn execute(&mut self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let year = parse_year(req.year.as_str())?;
        self.catalog_service.add_book(req.title.as_str(), req.author.as_str(), year)
            .map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::command::{Command, CommandError};

    #[test]
    fn test_should_run_add_book() {
        let mut svc = CatalogServiceImpl::new(Box::new(MemoryBookRepository::new()));
        let res = AddBookCommand::new(&mut svc)
            .execute(AddBookCommandRequest::new("1984", "Orwell", "1949"))
            .expect("should add book");
        assert_eq!(Some(1), res.book.id);
        assert_eq!(1949, res.book.year);
    }

    #[test]
    fn test_should_reject_non_numeric_year() {
        let mut svc = CatalogServiceImpl::new(Box::new(MemoryBookRepository::new()));
        let err = AddBookCommand::new(&mut svc)
            .execute(AddBookCommandRequest::new("1984", "Orwell", "soon"))
            .expect_err("should fail");
        assert!(matches!(err, CommandError::Validation { .. }));
        assert_eq!("Year must be an integer", err.to_string());
    }
}
