use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::BookStatus;

pub struct UpdateStatusCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateStatusCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusCommandRequest {
    pub book_id: String,
    pub status_code: String,
}

impl UpdateStatusCommandRequest {
    pub fn new(book_id: &str, status_code: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
            status_code: status_code.to_string(),
        }
    }

    pub fn validate(&self) -> Result<BookStatus, CommandError> {
        BookStatus::from_code(self.status_code.as_str()).ok_or_else(|| CommandError::Validation {
            message: format!("unknown status code {:?}", self.status_code),
            reason_code: Some(self.book_id.to_string()),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateStatusCommandResponse {
    pub book: BookEntity,
}

impl UpdateStatusCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateStatusCommandRequest, UpdateStatusCommandResponse> for UpdateStatusCommand {
    async fn execute(&self, req: UpdateStatusCommandRequest) -> Result<UpdateStatusCommandResponse, CommandError> {
        let _ = req.validate()?;
        self.catalog_service.update_status(req.book_id.as_str(), req.status_code.as_str()).await
            .map_err(CommandError::from).map(UpdateStatusCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::domain::model::BookEntity;
    use crate::catalog::command::update_status_cmd::{UpdateStatusCommand, UpdateStatusCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::model::Library;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::BookStatus;

    fn sut() -> UpdateStatusCommand {
        let mut library = Library::new();
        library.add_book(BookEntity::build("A", "X", "2000", Some("1"), None).expect("book"));
        let svc: Arc<dyn CatalogService> = Arc::from(factory::create_catalog_service(&Configuration::new(), library));
        UpdateStatusCommand::new(svc)
    }

    #[tokio::test]
    async fn test_should_run_update_status() {
        let cmd = sut();
        let res = cmd.execute(UpdateStatusCommandRequest::new("1", "0")).await.expect("should update");
        assert_eq!(BookStatus::CheckedOut, res.book.status);
        let res = cmd.execute(UpdateStatusCommandRequest::new("1", "1")).await.expect("should update");
        assert_eq!(BookStatus::InStock, res.book.status);
    }

    #[tokio::test]
    async fn test_should_reject_bad_status_code() {
        let cmd = sut();
        assert!(UpdateStatusCommandRequest::new("1", "2").validate().is_err());
        let res = cmd.execute(UpdateStatusCommandRequest::new("1", "Выдана")).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_should_report_missing_book() {
        let cmd = sut();
        let res = cmd.execute(UpdateStatusCommandRequest::new("9", "1")).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
