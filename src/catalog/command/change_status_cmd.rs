use crate::books::domain::model::BookEntity;
use crate::books::validator::parse_book_id;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ChangeStatusCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> ChangeStatusCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct ChangeStatusCommandRequest {
    pub book_id: String,
    pub status: String,
}

impl ChangeStatusCommandRequest {
    pub fn new(book_id: &str, status: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
            status: status.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct ChangeStatusCommandResponse {
    pub book: Option<BookEntity>,
}

impl Command<ChangeStatusCommandRequest, ChangeStatusCommandResponse> for ChangeStatusCommand<'_> {
    fn execute(&mut self, req: ChangeStatusCommandRequest) -> Result<ChangeStatusCommandResponse, CommandError> {
        let id = parse_book_id(req.book_id.as_str())?;
        self.catalog_service.change_status(id, req.status.as_str())
            .map_err(CommandError::from).map(|book| ChangeStatusCommandResponse { book })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::catalog::command::change_status_cmd::{ChangeStatusCommand, ChangeStatusCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::command::{Command, CommandError};
    use crate::core::library::BookStatus;

    #[test]
    fn test_should_run_change_status() {
        let mut svc = CatalogServiceImpl::new(Box::new(MemoryBookRepository::new()));
        let _ = svc.add_book("Title", "Author", 2000).expect("should add book");

        let res = ChangeStatusCommand::new(&mut svc)
            .execute(ChangeStatusCommandRequest::new("1", "borrowed")).expect("should change");
        assert_eq!(Some(BookStatus::Borrowed), res.book.map(|b| b.status));
    }

    #[test]
    fn test_should_reject_unknown_status() {
        let mut svc = CatalogServiceImpl::new(Box::new(MemoryBookRepository::new()));
        let _ = svc.add_book("Title", "Author", 2000).expect("should add book");

        let err = ChangeStatusCommand::new(&mut svc)
            .execute(ChangeStatusCommandRequest::new("1", "lost")).expect_err("should fail");
        assert!(matches!(err, CommandError::Validation { .. }));
    }
}
