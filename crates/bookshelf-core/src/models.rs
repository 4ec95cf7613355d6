//! Data models for Bookshelf
//!
//! Defines the book record and the insert payload, plus the coercion rules
//! used to read them out of loosely-typed JSON request bodies.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::BookError;

/// Store-assigned book identifier
pub type BookId = i64;

/// A book record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Unique identifier, assigned by the store on insert
    pub id: BookId,
    pub title: Option<String>,
    pub author: Option<String>,
    pub rating: Option<i64>,
}

impl Book {
    /// Set the rating
    pub fn set_rating(&mut self, rating: i64) {
        self.rating = Some(rating);
    }
}

/// Fields of a book that does not exist yet
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub rating: Option<i64>,
}

impl NewBook {
    /// Create an empty payload
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_rating(mut self, rating: i64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Read a payload from a create request body
    ///
    /// Every field is optional and `null` counts as absent. Any `id` key
    /// in the body is ignored: ids come from the store.
    pub fn from_json(body: &Value) -> Result<Self, BookError> {
        let fields = as_object(body)?;

        Ok(Self {
            title: optional_text(fields, "title")?,
            author: optional_text(fields, "author")?,
            rating: match fields.get("rating") {
                None | Some(Value::Null) => None,
                Some(value) => Some(coerce_rating(value)?),
            },
        })
    }
}

/// Parse a raw request body as JSON
pub fn parse_body(raw: &[u8]) -> Result<Value, BookError> {
    Ok(serde_json::from_slice(raw)?)
}

/// Require a request body to be a JSON object
pub fn as_object(body: &Value) -> Result<&Map<String, Value>, BookError> {
    body.as_object().ok_or(BookError::InvalidBody)
}

/// Coerce a JSON value to an integer rating
///
/// Accepts integers, floats (truncated toward zero), booleans (0/1) and
/// strings holding an integer. Anything else, `null` included, is rejected.
pub fn coerce_rating(value: &Value) -> Result<i64, BookError> {
    let invalid = |reason: &str| BookError::InvalidField {
        field: "rating",
        reason: reason.to_string(),
    };

    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(f) = n.as_f64() {
                let truncated = f.trunc();
                if truncated.is_finite()
                    && truncated >= i64::MIN as f64
                    && truncated <= i64::MAX as f64
                {
                    Ok(truncated as i64)
                } else {
                    Err(invalid("number out of range"))
                }
            } else {
                Err(invalid("number out of range"))
            }
        }
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| invalid(&format!("'{}' is not an integer", s))),
        Value::Null => Err(invalid("must not be null")),
        _ => Err(invalid("expected an integer")),
    }
}

fn optional_text(fields: &Map<String, Value>, field: &'static str) -> Result<Option<String>, BookError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(BookError::InvalidField {
            field,
            reason: "expected a string".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_book_serialization_shape() {
        let book = Book {
            id: 7,
            title: Some("Dune".to_string()),
            author: None,
            rating: Some(5),
        };
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(
            json,
            json!({"id": 7, "title": "Dune", "author": null, "rating": 5})
        );
    }

    #[test]
    fn test_set_rating() {
        let mut book = Book {
            id: 1,
            title: Some("Emma".to_string()),
            author: Some("Jane Austen".to_string()),
            rating: None,
        };
        book.set_rating(3);
        assert_eq!(book.rating, Some(3));
        assert_eq!(book.title.as_deref(), Some("Emma"));
    }

    #[test]
    fn test_coerce_rating() {
        assert_eq!(coerce_rating(&json!(4)).unwrap(), 4);
        assert_eq!(coerce_rating(&json!(-2)).unwrap(), -2);
        assert_eq!(coerce_rating(&json!(3.9)).unwrap(), 3);
        assert_eq!(coerce_rating(&json!(-3.9)).unwrap(), -3);
        assert_eq!(coerce_rating(&json!(" 5 ")).unwrap(), 5);
        assert_eq!(coerce_rating(&json!(true)).unwrap(), 1);
    }

    #[test]
    fn test_coerce_rating_rejects() {
        for value in [json!(null), json!("3.5"), json!("five"), json!([1]), json!({"v": 1})] {
            let err = coerce_rating(&value).unwrap_err();
            assert!(matches!(err, BookError::InvalidField { field: "rating", .. }));
        }
    }

    #[test]
    fn test_new_book_from_json() {
        let book = NewBook::from_json(&json!({
            "title": "X",
            "author": "Y",
            "rating": "4",
            "id": 99
        }))
        .unwrap();
        assert_eq!(book, NewBook::new().with_title("X").with_author("Y").with_rating(4));
    }

    #[test]
    fn test_new_book_all_fields_optional() {
        assert_eq!(NewBook::from_json(&json!({})).unwrap(), NewBook::new());
        assert_eq!(
            NewBook::from_json(&json!({"title": null, "rating": null})).unwrap(),
            NewBook::new()
        );
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(br#"{"rating": 2}"#).unwrap(), json!({"rating": 2}));
        assert!(matches!(parse_body(b""), Err(BookError::MalformedBody(_))));
        assert!(matches!(parse_body(b"{rating"), Err(BookError::MalformedBody(_))));
    }

    #[test]
    fn test_new_book_rejects_bad_input() {
        assert!(matches!(
            NewBook::from_json(&json!([])),
            Err(BookError::InvalidBody)
        ));
        assert!(matches!(
            NewBook::from_json(&json!({"title": 12})),
            Err(BookError::InvalidField { field: "title", .. })
        ));
        assert!(matches!(
            NewBook::from_json(&json!({"rating": "high"})),
            Err(BookError::InvalidField { field: "rating", .. })
        ));
    }
}
