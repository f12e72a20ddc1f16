use crate::domain::a002_book::aggregate::BookId;
use crate::domain::common::{AggregateId, AggregateRoot};
use serde::{Deserialize, Serialize};

/// Course id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(pub i64);

impl CourseId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

impl AggregateId for CourseId {
    fn value(&self) -> i64 {
        self.0
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(CourseId::new)
    }
}

/// School course (e.g. "1º ESO A") whose students reserve the assigned books
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "nivel")]
    pub level: String,

    #[serde(rename = "activo")]
    pub active: bool,
}

impl Course {
    pub fn to_dto(&self) -> CourseDto {
        CourseDto {
            id: Some(self.id.value()),
            name: self.name.clone(),
            level: self.level.clone(),
            active: self.active,
        }
    }
}

impl AggregateRoot for Course {
    type Id = CourseId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "course"
    }

    fn element_name() -> &'static str {
        "Curso"
    }

    fn list_name() -> &'static str {
        "Cursos"
    }
}

/// DTO for creating/updating a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDto {
    pub id: Option<i64>,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "nivel")]
    pub level: String,

    #[serde(rename = "activo")]
    pub active: bool,
}

impl Default for CourseDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            level: String::new(),
            active: true,
        }
    }
}

impl CourseDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("El nombre del curso es obligatorio".into());
        }
        Ok(())
    }
}

/// Assignment of a book to a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseBookAssignment {
    #[serde(rename = "idCurso")]
    pub course_id: CourseId,

    #[serde(rename = "idLibro")]
    pub book_id: BookId,
}
