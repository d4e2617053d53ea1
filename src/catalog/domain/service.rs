use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::{Library, SearchCriteria, SearchOutcome};
use crate::catalog::repository::LibraryRepository;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

pub struct CatalogServiceImpl {
    library: Mutex<Library>,
    library_repository: Box<dyn LibraryRepository>,
}

impl CatalogServiceImpl {
    pub fn new(_config: &Configuration, library: Library,
               library_repository: Box<dyn LibraryRepository>) -> Self {
        Self {
            library: Mutex::new(library),
            library_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookEntity) -> LibraryResult<BookEntity> {
        self.library.lock().await.add_book(book.clone());
        info!("added book {}", book.id);
        Ok(book.clone())
    }

    async fn remove_book(&self, id: &str) -> LibraryResult<BookEntity> {
        let mut library = self.library.lock().await;
        let book = library.find_by_id(id)?.clone();
        let removed = library.remove(&book)?;
        info!("removed book {}", id);
        Ok(removed)
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.library.lock().await.list().to_vec())
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookEntity> {
        self.library.lock().await.find_by_id(id).cloned()
    }

    async fn search_books(&self, criteria: &SearchCriteria) -> LibraryResult<Vec<BookEntity>> {
        let library = self.library.lock().await;
        let res = match library.search(criteria) {
            SearchOutcome::ById(Some(book)) => vec![book.clone()],
            SearchOutcome::ById(None) => {
                return Err(LibraryError::not_found(
                    format!("book {} not found", criteria.id().unwrap_or_default()).as_str()));
            }
            SearchOutcome::Matches(books) => books.into_iter().cloned().collect(),
        };
        debug!("search {:?} matched {} books", criteria, res.len());
        Ok(res)
    }

    async fn update_status(&self, id: &str, code: &str) -> LibraryResult<BookEntity> {
        let mut library = self.library.lock().await;
        let book = library.find_by_id_mut(id)?;
        book.set_status(code)?;
        info!("book {} status set to {}", id, book.status);
        Ok(book.clone())
    }

    async fn save_to(&self, path: &str) -> LibraryResult<usize> {
        let library = self.library.lock().await;
        self.library_repository.save(path, &library).await
    }

    async fn load_from(&self, path: &str) -> LibraryResult<usize> {
        let loaded = self.library_repository.load(path).await?;
        let mut library = self.library.lock().await;
        let count = loaded.len();
        for book in loaded.list() {
            library.add_book(book.clone());
        }
        Ok(count)
    }
}
