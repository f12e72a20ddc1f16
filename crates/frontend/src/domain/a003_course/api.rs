use contracts::domain::a002_book::aggregate::{Book, BookId};
use contracts::domain::a003_course::aggregate::{Course, CourseBookAssignment, CourseDto, CourseId};
use contracts::shared::envelope::{ApiError, CreatedId};
use contracts::usecases::common::BatchOutcome;

use crate::shared::api_utils;

pub async fn fetch_all() -> Result<Vec<Course>, ApiError> {
    api_utils::get("/crud/cursos").await
}

pub async fn save(dto: &CourseDto) -> Result<CreatedId, ApiError> {
    dto.validate().map_err(ApiError::Validation)?;
    api_utils::post("/crud/cursos", dto).await
}

pub async fn fetch_books(course_id: i64) -> Result<Vec<Book>, ApiError> {
    api_utils::get(&format!("/crud/cursos/{}/libros", course_id)).await
}

pub async fn assign(course_id: i64, book_id: i64) -> Result<(), ApiError> {
    let body = CourseBookAssignment {
        course_id: CourseId(course_id),
        book_id: BookId(book_id),
    };
    api_utils::post_unit("/crud/cursos/libros", &body).await
}

/// One request per book; every book is attempted and the outcome tallied.
/// Assignments that succeeded stay in place when others fail.
pub async fn assign_many(course_id: i64, book_ids: &[i64]) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for &book_id in book_ids {
        let result = assign(course_id, book_id).await;
        if let Err(e) = &result {
            log::warn!("assign book {} to course {}: {}", book_id, course_id, e);
        }
        outcome.record(result.is_ok());
    }
    outcome
}

pub async fn unassign(course_id: i64, book_id: i64) -> Result<(), ApiError> {
    api_utils::delete_unit(&format!("/crud/cursos/{}/libros/{}", course_id, book_id)).await
}
