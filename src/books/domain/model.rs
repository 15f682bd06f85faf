use std::str::FromStr;
use serde_json::{Map, Value};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, LibraryResult};

pub type BookRecord = Map<String, Value>;

// BookEntity is a single book of the catalog. It is a plain value: the catalog service
// owns the only live copy and hands out clones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookEntity {
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub status: BookStatus,
}

impl BookEntity {
    pub fn new(id: i64, title: &str, author: &str, year: i32) -> Self {
        Self {
            id: Some(id),
            title: title.to_string(),
            author: author.to_string(),
            year,
            status: BookStatus::Available,
        }
    }

    // with_status returns a copy of this book carrying another status
    pub fn with_status(&self, status: BookStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    pub fn to_record(&self) -> BookRecord {
        let mut record = Map::new();
        record.insert("id".to_string(), self.id.map(Value::from).unwrap_or(Value::Null));
        record.insert("title".to_string(), Value::from(self.title.as_str()));
        record.insert("author".to_string(), Value::from(self.author.as_str()));
        record.insert("year".to_string(), Value::from(self.year));
        record.insert("status".to_string(), Value::from(self.status.as_str()));
        record
    }

    // from_record fills missing fields with defaults; only an unknown status fails.
    pub fn from_record(record: &BookRecord) -> LibraryResult<Self> {
        let status = match record.get("status").and_then(Value::as_str) {
            Some(status) => BookStatus::from_str(status)?,
            None => BookStatus::default(),
        };
        Ok(Self {
            id: record.get("id").and_then(Value::as_i64),
            title: string_field(record, "title"),
            author: string_field(record, "author"),
            year: record.get("year")
                .and_then(Value::as_i64)
                .and_then(|year| i32::try_from(year).ok())
                .unwrap_or(0),
            status,
        })
    }

    // matches is the case-insensitive substring search over title, author and year.
    // The query must already be lowercased.
    pub fn matches(&self, lowered_query: &str) -> bool {
        self.title.to_lowercase().contains(lowered_query)
            || self.author.to_lowercase().contains(lowered_query)
            || self.year.to_string().contains(lowered_query)
    }
}

fn string_field(record: &BookRecord, key: &str) -> String {
    record.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
}

impl Identifiable for BookEntity {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl Book for BookEntity {
    fn status(&self) -> BookStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use crate::books::domain::Book;
    use crate::books::domain::model::{BookEntity, BookRecord};
    use crate::core::library::BookStatus;

    fn record(value: Value) -> BookRecord {
        value.as_object().cloned().expect("json object")
    }

    #[test]
    fn test_should_build_books() {
        let book = BookEntity::new(7, "1984", "Orwell", 1949);
        assert_eq!(Some(7), book.id);
        assert_eq!("1984", book.title.as_str());
        assert_eq!("Orwell", book.author.as_str());
        assert_eq!(BookStatus::Available, book.status());
    }

    #[test]
    fn test_should_convert_to_record() {
        let book = BookEntity::new(1, "1984", "Orwell", 1949).with_status(BookStatus::Borrowed);
        let expected = record(json!({
            "id": 1, "title": "1984", "author": "Orwell", "year": 1949, "status": "borrowed"
        }));
        assert_eq!(expected, book.to_record());
        assert_eq!(book, BookEntity::from_record(&book.to_record()).expect("should convert"));
    }

    #[test]
    fn test_should_default_missing_fields() {
        let book = BookEntity::from_record(&record(json!({}))).expect("should convert");
        assert_eq!(None, book.id);
        assert_eq!("", book.title.as_str());
        assert_eq!("", book.author.as_str());
        assert_eq!(0, book.year);
        assert_eq!(BookStatus::Available, book.status);
        assert_eq!(Value::Null, book.to_record()["id"]);
    }

    #[test]
    fn test_should_reject_unknown_status() {
        let res = BookEntity::from_record(&record(json!({"id": 1, "status": "lost"})));
        assert!(res.is_err());
    }

    #[test]
    fn test_should_match_title_author_or_year() {
        let book = BookEntity::new(1, "War and Peace", "Leo Tolstoy", 1869);
        assert!(book.matches("peace"));
        assert!(book.matches("tolstoy"));
        assert!(book.matches("186"));
        assert!(!book.matches("karenina"));
    }
}
