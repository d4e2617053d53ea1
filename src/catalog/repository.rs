pub mod json_library_repository;

use crate::catalog::domain::model::Library;
use crate::core::repository::Repository;

pub trait LibraryRepository: Repository<Library> {}
