pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::model::SearchCriteria;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookEntity) -> LibraryResult<BookEntity>;
    async fn remove_book(&self, id: &str) -> LibraryResult<BookEntity>;
    async fn list_books(&self) -> LibraryResult<Vec<BookEntity>>;
    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookEntity>;
    async fn search_books(&self, criteria: &SearchCriteria) -> LibraryResult<Vec<BookEntity>>;
    async fn update_status(&self, id: &str, code: &str) -> LibraryResult<BookEntity>;
    async fn save_to(&self, path: &str) -> LibraryResult<usize>;
    async fn load_from(&self, path: &str) -> LibraryResult<usize>;
}
