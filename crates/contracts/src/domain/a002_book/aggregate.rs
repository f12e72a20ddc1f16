use crate::domain::a001_publisher::aggregate::PublisherId;
use crate::domain::common::{AggregateId, AggregateRoot};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Book id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(pub i64);

impl BookId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

impl AggregateId for BookId {
    fn value(&self) -> i64 {
        self.0
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(BookId::new)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Book (libro) of the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "ISBN")]
    pub isbn: String,

    #[serde(rename = "precio")]
    pub price: f64,

    #[serde(rename = "idEditorial")]
    pub publisher_id: PublisherId,

    #[serde(rename = "activo")]
    pub active: bool,

    /// Units reserved by students and not yet part of any order.
    /// Computed by the backend.
    #[serde(rename = "unidadesPendientes", default)]
    pub pending_units: u32,
}

impl Book {
    pub fn to_dto(&self) -> BookDto {
        BookDto {
            id: Some(self.id.value()),
            name: self.name.clone(),
            isbn: self.isbn.clone(),
            price: self.price,
            publisher_id: Some(self.publisher_id.value()),
            active: self.active,
        }
    }

    pub fn has_pending_units(&self) -> bool {
        self.pending_units > 0
    }
}

impl AggregateRoot for Book {
    type Id = BookId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "book"
    }

    fn element_name() -> &'static str {
        "Libro"
    }

    fn list_name() -> &'static str {
        "Libros"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating a book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: Option<i64>,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "ISBN")]
    pub isbn: String,

    #[serde(rename = "precio")]
    pub price: f64,

    #[serde(rename = "idEditorial")]
    pub publisher_id: Option<i64>,

    #[serde(rename = "activo", default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Default for BookDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            isbn: String::new(),
            price: 0.0,
            publisher_id: None,
            active: true,
        }
    }
}

impl BookDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("El nombre del libro es obligatorio".into());
        }
        let digits = isbn_digits(&self.isbn);
        if digits.len() != 10 && digits.len() != 13 {
            return Err("El ISBN debe tener 10 o 13 dígitos".into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("El precio no puede ser negativo".into());
        }
        if self.publisher_id.is_none() {
            return Err("Seleccione una editorial".into());
        }
        Ok(())
    }
}

/// ISBN with separators removed. The check digit of ISBN-10 may be 'X'.
pub fn isbn_digits(isbn: &str) -> String {
    isbn.chars()
        .filter(|c| c.is_ascii_digit() || *c == 'X' || *c == 'x')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> BookDto {
        BookDto {
            id: None,
            name: "Matemáticas 1º ESO".into(),
            isbn: "978-84-678-7132-5".into(),
            price: 42.5,
            publisher_id: Some(1),
            active: true,
        }
    }

    #[test]
    fn test_validate_book() {
        assert!(valid().validate().is_ok());

        let mut bad_isbn = valid();
        bad_isbn.isbn = "12345".into();
        assert!(bad_isbn.validate().is_err());

        let mut negative = valid();
        negative.price = -1.0;
        assert!(negative.validate().is_err());

        let mut orphan = valid();
        orphan.publisher_id = None;
        assert!(orphan.validate().is_err());
    }

    #[test]
    fn test_isbn10_with_check_x() {
        assert_eq!(isbn_digits("0-306-40615-x"), "030640615X");
    }

    #[test]
    fn test_book_deserializes_from_backend_shape() {
        let json = r#"{"id":7,"nombre":"Lengua","ISBN":"9788467871325","precio":30.0,
            "idEditorial":2,"activo":true,"unidadesPendientes":5}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.id, BookId(7));
        assert_eq!(book.publisher_id, PublisherId(2));
        assert_eq!(book.pending_units, 5);
    }
}
