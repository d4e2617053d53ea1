use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SaveCatalogCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl SaveCatalogCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SaveCatalogCommandRequest {
    pub path: String,
}

impl SaveCatalogCommandRequest {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SaveCatalogCommandResponse {
    pub saved: usize,
}

impl SaveCatalogCommandResponse {
    pub fn new(saved: usize) -> Self {
        Self {
            saved,
        }
    }
}

#[async_trait]
impl Command<SaveCatalogCommandRequest, SaveCatalogCommandResponse> for SaveCatalogCommand {
    async fn execute(&self, req: SaveCatalogCommandRequest) -> Result<SaveCatalogCommandResponse, CommandError> {
        self.catalog_service.save_to(req.path.as_str()).await
            .map_err(CommandError::from).map(SaveCatalogCommandResponse::new)
    }
}
