use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SearchBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct SearchBooksCommandRequest {
    pub query: String,
}

#[derive(Debug)]
pub struct SearchBooksCommandResponse {
    pub books: Vec<BookEntity>,
}

impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand<'_> {
    fn execute(&mut self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        Ok(SearchBooksCommandResponse { books: self.catalog_service.search_books(req.query.as_str()) })
    }
}
