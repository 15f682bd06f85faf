use crate::books::domain::model::BookEntity;
use crate::books::validator::parse_book_id;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GetBookCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> GetBookCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct GetBookCommandRequest {
    pub book_id: String,
}

#[derive(Debug)]
pub struct GetBookCommandResponse {
    // None when no book has the id
    pub book: Option<BookEntity>,
}

impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand<'_> {
    fn execute(&mut self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        let id = parse_book_id(req.book_id.as_str())?;
        self.catalog_service.find_book_by_id(id)
            .map_err(CommandError::from).map(|book| GetBookCommandResponse { book })
    }
}
