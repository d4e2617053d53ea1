use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::Library;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::catalog::repository::LibraryRepository;
use crate::catalog::repository::json_library_repository::JsonLibraryRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

pub fn create_library_repository(store: RepositoryStore) -> Box<dyn LibraryRepository> {
    match store {
        RepositoryStore::JsonFile => {
            Box::new(JsonLibraryRepository::new())
        }
    }
}

pub fn create_catalog_service(config: &Configuration, library: Library) -> Box<dyn CatalogService> {
    let library_repo = create_library_repository(config.store);
    Box::new(CatalogServiceImpl::new(config, library, library_repo))
}
