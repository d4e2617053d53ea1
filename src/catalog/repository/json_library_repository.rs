use async_trait::async_trait;
use tracing::{debug, info};

use crate::catalog::domain::model::Library;
use crate::catalog::repository::LibraryRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

// Stores a whole catalog as one JSON file, read or written in a single pass.
#[derive(Debug, Default)]
pub struct JsonLibraryRepository {}

impl JsonLibraryRepository {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Repository<Library> for JsonLibraryRepository {
    async fn load(&self, location: &str) -> LibraryResult<Library> {
        let data = tokio::fs::read(location).await?;
        debug!("read {} bytes from {}", data.len(), location);
        let mut library = Library::new();
        library.load_from(data.as_slice())?;
        info!("loaded {} books from {}", library.len(), location);
        Ok(library)
    }

    async fn save(&self, location: &str, entity: &Library) -> LibraryResult<usize> {
        let mut data = vec![];
        entity.save_to(&mut data)?;
        tokio::fs::write(location, &data).await?;
        info!("saved {} books to {}", entity.len(), location);
        Ok(entity.len())
    }
}

impl LibraryRepository for JsonLibraryRepository {}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::catalog::domain::model::Library;
    use crate::catalog::repository::json_library_repository::JsonLibraryRepository;
    use crate::core::library::LibraryError;
    use crate::core::repository::Repository;

    #[tokio::test]
    async fn test_should_save_and_load_library() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("books.json");
        let path = path.to_str().expect("utf8 path");
        let repo = JsonLibraryRepository::new();

        let mut library = Library::new();
        library.add_book(BookEntity::new("Dune", "Herbert", "1965"));
        library.add_book(BookEntity::new("Мастер и Маргарита", "Булгаков", "1967"));
        assert_eq!(2, repo.save(path, &library).await.expect("should save"));

        let loaded = repo.load(path).await.expect("should load");
        assert_eq!(library, loaded);
    }

    #[tokio::test]
    async fn test_should_fail_loading_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing.json");
        let res = JsonLibraryRepository::new().load(path.to_str().expect("utf8 path")).await;
        assert!(matches!(res, Err(LibraryError::Io { kind: std::io::ErrorKind::NotFound, .. })));
    }

    #[tokio::test]
    async fn test_should_fail_loading_malformed_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{\"books\": [").expect("write");
        let res = JsonLibraryRepository::new().load(path.to_str().expect("utf8 path")).await;
        assert!(matches!(res, Err(LibraryError::Serialization { .. })));
    }

    #[tokio::test]
    async fn test_should_fail_saving_into_missing_dir() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("no").join("such").join("books.json");
        let res = JsonLibraryRepository::new().save(path.to_str().expect("utf8 path"), &Library::new()).await;
        assert!(matches!(res, Err(LibraryError::Io { .. })));
    }
}
