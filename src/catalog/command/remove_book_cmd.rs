use crate::books::validator::parse_book_id;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> RemoveBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct RemoveBookCommandRequest {
    pub book_id: String,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct RemoveBookCommandResponse {
    pub removed: bool,
}

impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand<'_> {
    fn execute(&mut self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        let id = parse_book_id(req.book_id.as_str())?;
        self.catalog_service.remove_book(id)
            .map_err(CommandError::from).map(|removed| RemoveBookCommandResponse { removed })
    }
}
