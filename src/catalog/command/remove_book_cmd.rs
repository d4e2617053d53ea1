use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
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

#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {
    pub book: BookEntity,
}

impl RemoveBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.remove_book(req.book_id.as_str()).await
            .map_err(CommandError::from).map(RemoveBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::model::Library;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let svc: Arc<dyn CatalogService> = Arc::from(factory::create_catalog_service(&Configuration::new(), Library::new()));
        let add_cmd = AddBookCommand::new(Arc::clone(&svc));
        let remove_cmd = RemoveBookCommand::new(Arc::clone(&svc));

        let added = add_cmd.execute(AddBookCommandRequest::new("Dune", "Herbert", "1965"))
            .await.expect("should add book");
        let removed = remove_cmd.execute(RemoveBookCommandRequest::new(added.book.id.as_str()))
            .await.expect("should remove book");
        assert_eq!(added.book, removed.book);
        assert!(svc.list_books().await.expect("should list").is_empty());
    }

    #[tokio::test]
    async fn test_should_not_remove_missing_book() {
        let svc: Arc<dyn CatalogService> = Arc::from(factory::create_catalog_service(&Configuration::new(), Library::new()));
        let remove_cmd = RemoveBookCommand::new(svc);

        let res = remove_cmd.execute(RemoveBookCommandRequest::new("missing")).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
