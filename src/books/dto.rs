use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryError;

// BookDto is the stored shape of a book; every field is required when reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub year: String,
    pub status: String,
}

// LibraryDto is the stored shape of a whole catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryDto {
    pub books: Vec<BookDto>,
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year.to_string(),
            status: other.status.label().to_string(),
        }
    }
}

impl TryFrom<&BookDto> for BookEntity {
    type Error = LibraryError;

    fn try_from(other: &BookDto) -> Result<Self, Self::Error> {
        BookEntity::build(other.title.as_str(), other.author.as_str(), other.year.as_str(),
                          Some(other.id.as_str()), Some(other.status.as_str()))
    }
}
