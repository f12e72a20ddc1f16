use crate::domain::a002_book::aggregate::BookId;
use crate::domain::a003_course::aggregate::CourseId;
use crate::domain::common::{AggregateId, AggregateRoot};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Reservation id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationId(pub i64);

impl ReservationId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

impl AggregateId for ReservationId {
    fn value(&self) -> i64 {
        self.0
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(ReservationId::new)
    }
}

/// Reserved book and whether it was already handed out to the student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationLine {
    #[serde(rename = "idLibro")]
    pub book_id: BookId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "entregado")]
    pub delivered: bool,
}

/// Student reservation (reserva) of the books of a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,

    #[serde(rename = "nombreAlumno")]
    pub student_name: String,

    #[serde(rename = "emailAlumno")]
    pub student_email: String,

    #[serde(rename = "idCurso")]
    pub course_id: CourseId,

    /// Creation date ("YYYY-MM-DD")
    #[serde(rename = "fecha")]
    pub date: String,

    #[serde(rename = "activa")]
    pub active: bool,

    #[serde(rename = "libros")]
    pub lines: Vec<ReservationLine>,

    #[serde(rename = "tieneJustificante", default)]
    pub has_proof: bool,
}

impl Reservation {
    pub fn delivered_count(&self) -> usize {
        self.lines.iter().filter(|l| l.delivered).count()
    }

    pub fn is_fully_delivered(&self) -> bool {
        !self.lines.is_empty() && self.lines.iter().all(|l| l.delivered)
    }
}

impl AggregateRoot for Reservation {
    type Id = ReservationId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.student_name
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "reservation"
    }

    fn element_name() -> &'static str {
        "Reserva"
    }

    fn list_name() -> &'static str {
        "Reservas"
    }
}

/// Body of `POST /reservas`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateReservationDto {
    #[serde(rename = "nombreAlumno")]
    pub student_name: String,

    #[serde(rename = "emailAlumno")]
    pub student_email: String,

    #[serde(rename = "idCurso")]
    pub course_id: Option<i64>,

    #[serde(rename = "libros")]
    pub book_ids: Vec<BookId>,

    /// Scanned payment receipt as a base64 data URL
    #[serde(rename = "justificante", default, skip_serializing_if = "Option::is_none")]
    pub proof: Option<String>,
}

impl CreateReservationDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.student_name.trim().is_empty() {
            return Err("El nombre del alumno es obligatorio".into());
        }
        if !self.student_email.contains('@') {
            return Err("El email del alumno no es válido".into());
        }
        if self.course_id.is_none() {
            return Err("Seleccione un curso".into());
        }
        if self.book_ids.is_empty() {
            return Err("Seleccione al menos un libro".into());
        }
        let unique: HashSet<_> = self.book_ids.iter().collect();
        if unique.len() != self.book_ids.len() {
            return Err("Hay libros repetidos en la reserva".into());
        }
        if let Some(proof) = &self.proof {
            if !proof.starts_with("data:") || !proof.contains(";base64,") {
                return Err("El justificante no tiene un formato válido".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> CreateReservationDto {
        CreateReservationDto {
            student_name: "Lucía Pérez".into(),
            student_email: "lucia@example.com".into(),
            course_id: Some(1),
            book_ids: vec![BookId(1), BookId(2)],
            proof: None,
        }
    }

    #[test]
    fn test_validate_reservation() {
        assert!(dto().validate().is_ok());

        let mut no_books = dto();
        no_books.book_ids.clear();
        assert!(no_books.validate().is_err());

        let mut dup = dto();
        dup.book_ids.push(BookId(1));
        assert!(dup.validate().is_err());

        let mut no_course = dto();
        no_course.course_id = None;
        assert!(no_course.validate().is_err());
    }

    #[test]
    fn test_delivery_progress() {
        let line = |id, delivered| ReservationLine {
            book_id: BookId(id),
            name: format!("Libro {}", id),
            delivered,
        };
        let mut r = Reservation {
            id: ReservationId(1),
            student_name: "Lucía".into(),
            student_email: "lucia@example.com".into(),
            course_id: CourseId(1),
            date: "2024-09-02".into(),
            active: true,
            lines: vec![line(1, true), line(2, false)],
            has_proof: false,
        };
        assert_eq!(r.delivered_count(), 1);
        assert!(!r.is_fully_delivered());
        r.lines[1].delivered = true;
        assert!(r.is_fully_delivered());
    }
}
