use std::collections::HashSet;
use std::io::{Read, Write};
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDto, LibraryDto};
use crate::core::library::{LibraryError, LibraryResult};

// SearchCriteria names the fields a search may filter on. Empty strings count as absent.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub id: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<String>,
}

impl SearchCriteria {
    pub fn by_id(id: &str) -> Self {
        Self { id: Some(id.to_string()), ..Default::default() }
    }

    pub fn new(title: &str, author: &str, year: &str) -> Self {
        Self {
            id: None,
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            year: Some(year.to_string()),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_author(mut self, author: &str) -> Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn with_year(mut self, year: &str) -> Self {
        self.year = Some(year.to_string());
        self
    }

    pub fn id(&self) -> Option<&str> {
        supplied(&self.id)
    }

    /// True when no field would filter anything.
    pub fn is_empty(&self) -> bool {
        self.id().is_none() && supplied(&self.title).is_none() &&
            supplied(&self.author).is_none() && supplied(&self.year).is_none()
    }

    // Conjunction over the supplied fields; with none supplied every book matches.
    fn matches(&self, book: &BookEntity) -> bool {
        [
            (supplied(&self.title), book.title.as_str()),
            (supplied(&self.author), book.author.as_str()),
            (supplied(&self.year), book.year.as_str()),
        ].into_iter().all(|(wanted, actual)| wanted.map_or(true, |w| w == actual))
    }
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[derive(Debug, PartialEq)]
pub enum SearchOutcome<'a> {
    // id lookups yield at most one book
    ById(Option<&'a BookEntity>),
    Matches(Vec<&'a BookEntity>),
}

impl<'a> SearchOutcome<'a> {
    pub fn into_vec(self) -> Vec<&'a BookEntity> {
        match self {
            SearchOutcome::ById(book) => book.into_iter().collect(),
            SearchOutcome::Matches(books) => books,
        }
    }
}

/// In-memory catalog. Books keep their insertion order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Library {
    books: Vec<BookEntity>,
}

impl Library {
    pub fn new() -> Self {
        Self { books: vec![] }
    }

    /// Appends a book. Ids are not checked for uniqueness here.
    pub fn add_book(&mut self, book: BookEntity) {
        self.books.push(book);
    }

    /// Removes the first book equal to `book` and returns it.
    pub fn remove(&mut self, book: &BookEntity) -> LibraryResult<BookEntity> {
        match self.books.iter().position(|b| b == book) {
            Some(ndx) => Ok(self.books.remove(ndx)),
            None => Err(LibraryError::not_found(format!("book {} not found", book.id).as_str())),
        }
    }

    pub fn list(&self) -> &[BookEntity] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// An id in the criteria switches to id lookup and every other field is ignored.
    pub fn search(&self, criteria: &SearchCriteria) -> SearchOutcome<'_> {
        if let Some(id) = criteria.id() {
            return SearchOutcome::ById(self.books.iter().find(|b| b.id == id));
        }
        SearchOutcome::Matches(self.books.iter().filter(|b| criteria.matches(b)).collect())
    }

    pub fn find_by_id(&self, id: &str) -> LibraryResult<&BookEntity> {
        self.books.iter().find(|b| b.id == id)
            .ok_or_else(|| LibraryError::not_found(format!("book {} not found", id).as_str()))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> LibraryResult<&mut BookEntity> {
        self.books.iter_mut().find(|b| b.id == id)
            .ok_or_else(|| LibraryError::not_found(format!("book {} not found", id).as_str()))
    }

    /// Reads `{"books": [...]}` and appends every book. Nothing is appended unless the
    /// whole source is valid and its ids are pairwise distinct.
    pub fn load_from<R: Read>(&mut self, reader: R) -> LibraryResult<usize> {
        let data: LibraryDto = serde_json::from_reader(reader)?;
        let mut ids = HashSet::new();
        let mut loaded = Vec::with_capacity(data.books.len());
        for dto in data.books.iter() {
            if !ids.insert(dto.id.as_str()) {
                return Err(LibraryError::duplicate_key(
                    format!("repeated book id {}", dto.id).as_str()));
            }
            loaded.push(BookEntity::try_from(dto)?);
        }
        let count = loaded.len();
        self.books.extend(loaded);
        debug!("loaded {} books, library now holds {}", count, self.books.len());
        Ok(count)
    }

    /// Writes the catalog as `{"books": [...]}`. Non-ASCII text is written unescaped.
    pub fn save_to<W: Write>(&self, writer: W) -> LibraryResult<()> {
        let data = LibraryDto { books: self.books.iter().map(BookDto::from).collect() };
        serde_json::to_writer(writer, &data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::catalog::domain::model::{Library, SearchCriteria, SearchOutcome};
    use crate::core::library::{BookStatus, LibraryError};

    fn book(id: &str, title: &str, author: &str, year: &str) -> BookEntity {
        BookEntity::build(title, author, year, Some(id), None).expect("valid book")
    }

    fn ids(books: Vec<&BookEntity>) -> Vec<&str> {
        books.iter().map(|b| b.id.as_str()).collect()
    }

    fn sample_library() -> Library {
        let mut library = Library::new();
        library.add_book(book("1", "A", "X", "2000"));
        library.add_book(book("2", "B", "X", "2001"));
        library.add_book(book("3", "A", "Y", "2000"));
        library
    }

    #[test]
    fn test_should_add_and_list_in_order() {
        let library = sample_library();
        let ids: Vec<&str> = library.list().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(vec!["1", "2", "3"], ids);
        assert_eq!(3, library.len());
        assert!(!library.is_empty());
    }

    #[test]
    fn test_should_allow_duplicate_ids_on_add() {
        let mut library = Library::new();
        library.add_book(book("1", "A", "X", "2000"));
        library.add_book(book("1", "B", "X", "2000"));
        assert_eq!(2, library.len());
    }

    #[test]
    fn test_should_remove_first_equal_book() {
        let mut library = sample_library();
        let target = library.list()[1].clone();
        let removed = library.remove(&target).expect("should remove");
        assert_eq!(target, removed);
        assert_eq!(2, library.len());
        assert!(library.find_by_id("2").is_err());
    }

    #[test]
    fn test_should_fail_removing_absent_book() {
        let mut library = sample_library();
        let res = library.remove(&book("9", "Z", "Z", "Z"));
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
        assert_eq!(3, library.len());
    }

    #[test]
    fn test_should_search_by_title_preserving_order() {
        let library = sample_library();
        let found = library.search(&SearchCriteria::default().with_title("A")).into_vec();
        assert_eq!(vec!["1", "3"], ids(found));
    }

    #[test]
    fn test_should_search_with_all_supplied_fields() {
        let library = sample_library();
        let found = library.search(&SearchCriteria::new("A", "", "2000")).into_vec();
        assert_eq!(vec!["1", "3"], ids(found));
        let found = library.search(&SearchCriteria::new("A", "Y", "2000")).into_vec();
        assert_eq!(vec!["3"], ids(found));
        let found = library.search(&SearchCriteria::default().with_author("X").with_year("1999")).into_vec();
        assert!(found.is_empty());
    }

    #[test]
    fn test_should_match_every_book_without_criteria() {
        let library = sample_library();
        let criteria = SearchCriteria::new("", "", "");
        assert!(criteria.is_empty());
        assert_eq!(3, library.search(&criteria).into_vec().len());
    }

    #[test]
    fn test_should_search_by_id_ignoring_other_fields() {
        let library = sample_library();
        let criteria = SearchCriteria::by_id("2").with_title("A");
        match library.search(&criteria) {
            SearchOutcome::ById(Some(found)) => assert_eq!("B", found.title.as_str()),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(SearchOutcome::ById(None), library.search(&SearchCriteria::by_id("9").with_title("A")));
    }

    #[test]
    fn test_should_change_status_through_mut_lookup() {
        let mut library = sample_library();
        library.find_by_id_mut("3").expect("book").set_status("0").expect("status");
        assert_eq!(BookStatus::CheckedOut, library.find_by_id("3").expect("book").status);
    }

    #[test]
    fn test_should_round_trip_through_json() {
        let mut library = sample_library();
        library.find_by_id_mut("2").expect("book").set_status("0").expect("status");
        let mut buf = vec![];
        library.save_to(&mut buf).expect("save");
        let mut loaded = Library::new();
        assert_eq!(3, loaded.load_from(buf.as_slice()).expect("load"));
        assert_eq!(library, loaded);
    }

    #[test]
    fn test_should_write_unescaped_text() {
        let mut library = Library::new();
        library.add_book(book("1", "Война и мир", "Толстой", "1869"));
        let mut buf = vec![];
        library.save_to(&mut buf).expect("save");
        let json = String::from_utf8(buf).expect("utf8");
        assert!(json.contains("Война и мир"));
        assert!(json.contains("В наличии"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_should_reject_duplicate_ids_on_load() {
        let json = r#"{"books": [
            {"id": "1", "title": "a", "author": "b", "year": "c", "status": "В наличии"},
            {"id": "1", "title": "d", "author": "e", "year": "f", "status": "Выдана"}]}"#;
        let mut library = Library::new();
        let res = library.load_from(json.as_bytes());
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));
        assert!(library.is_empty());
    }

    #[test]
    fn test_should_reject_malformed_sources() {
        let sources = [
            "not json",
            r#"{"books": [{"id": "1", "title": "a", "author": "b", "year": "c"}]}"#,
            r#"{"items": []}"#,
        ];
        for source in sources {
            let mut library = Library::new();
            let res = library.load_from(source.as_bytes());
            assert!(matches!(res, Err(LibraryError::Serialization { .. })), "{}", source);
        }
    }

    #[test]
    fn test_should_reject_invalid_status_on_load() {
        let json = r#"{"books": [
            {"id": "1", "title": "a", "author": "b", "year": "c", "status": "В наличии"},
            {"id": "2", "title": "d", "author": "e", "year": "f", "status": "1"}]}"#;
        let mut library = Library::new();
        let res = library.load_from(json.as_bytes());
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
        assert!(library.is_empty());
    }

    #[test]
    fn test_should_append_loaded_books() {
        let mut library = Library::new();
        library.add_book(book("1", "A", "X", "2000"));
        let json = r#"{"books": [{"id": "2", "title": "d", "author": "e", "year": "f", "status": "Выдана"}]}"#;
        assert_eq!(1, library.load_from(json.as_bytes()).expect("load"));
        assert_eq!(2, library.len());
        assert_eq!(BookStatus::CheckedOut, library.find_by_id("2").expect("book").status);
    }

    #[test]
    fn test_should_find_saved_dune() {
        let mut library = Library::new();
        let dune = BookEntity::new("Dune", "Herbert", "1965");
        library.add_book(dune.clone());
        let found = library.search(&SearchCriteria::default().with_title("Dune")).into_vec();
        assert_eq!(vec![&dune], found);

        let mut buf = vec![];
        library.save_to(&mut buf).expect("save");
        let mut loaded = Library::new();
        loaded.load_from(buf.as_slice()).expect("load");
        assert_eq!(dune.id, loaded.find_by_id(dune.id.as_str()).expect("dune").id);
    }
}
