use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // loads an entity from its location
    async fn load(&self, location: &str) -> LibraryResult<Entity>;

    // saves an entity, replacing whatever is stored at the location
    async fn save(&self, location: &str, entity: &Entity) -> LibraryResult<usize>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    JsonFile,
}
