use std::fmt;
use std::fmt::{Display, Formatter};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::library::{BookStatus, LibraryError, LibraryResult};

// BookEntity abstracts a single catalog entry. Only the status changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntity {
    pub id: String,
    pub title: String,
    pub author: String,
    pub year: String,
    pub status: BookStatus,
}

impl BookEntity {
    /// Builds an in-stock book with a freshly generated id.
    pub fn new(title: &str, author: &str, year: &str) -> Self {
        Self {
            id: generate_id(),
            title: title.to_string(),
            author: author.to_string(),
            year: year.to_string(),
            status: BookStatus::InStock,
        }
    }

    /// Builds a book from stored fields. A missing id is generated, a missing status
    /// defaults to in stock and a status that is not one of the display labels is rejected.
    pub fn build(title: &str, author: &str, year: &str,
                 id: Option<&str>, status: Option<&str>) -> LibraryResult<Self> {
        let status = match status {
            Some(label) => BookStatus::try_from(label)?,
            None => BookStatus::default(),
        };
        Ok(Self {
            id: id.map(str::to_string).unwrap_or_else(generate_id),
            title: title.to_string(),
            author: author.to_string(),
            year: year.to_string(),
            status,
        })
    }

    /// Applies a status code typed at the console ("0" checked out, "1" in stock).
    pub fn set_status(&mut self, code: &str) -> LibraryResult<()> {
        let status = BookStatus::from_code(code).ok_or_else(|| {
            LibraryError::validation(format!("unknown status code {:?}", code).as_str(),
                                     Some(self.id.to_string()))
        })?;
        self.status = status;
        Ok(())
    }
}

// 128 random bits of a v4 uuid rendered as a decimal integer.
fn generate_id() -> String {
    Uuid::new_v4().as_u128().to_string()
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} - {} - {} - {}", self.id, self.title, self.author, self.year, self.status)
    }
}
