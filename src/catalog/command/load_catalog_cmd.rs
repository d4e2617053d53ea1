use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct LoadCatalogCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl LoadCatalogCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoadCatalogCommandRequest {
    pub path: String,
}

impl LoadCatalogCommandRequest {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoadCatalogCommandResponse {
    pub loaded: usize,
}

impl LoadCatalogCommandResponse {
    pub fn new(loaded: usize) -> Self {
        Self {
            loaded,
        }
    }
}

#[async_trait]
impl Command<LoadCatalogCommandRequest, LoadCatalogCommandResponse> for LoadCatalogCommand {
    async fn execute(&self, req: LoadCatalogCommandRequest) -> Result<LoadCatalogCommandResponse, CommandError> {
        self.catalog_service.load_from(req.path.as_str()).await
            .map_err(CommandError::from).map(LoadCatalogCommandResponse::new)
    }
}
