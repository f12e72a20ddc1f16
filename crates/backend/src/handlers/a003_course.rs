use axum::extract::{Json, Path};
use contracts::domain::a002_book::aggregate::Book;
use contracts::domain::a003_course::aggregate::{Course, CourseBookAssignment, CourseDto};
use contracts::shared::envelope::CreatedId;

use crate::domain::a003_course;
use crate::shared::api_response::{ok, ok_with_message, ApiResult};

/// GET /crud/cursos
pub async fn list_all() -> ApiResult<Vec<Course>> {
    ok(a003_course::service::list_all().await?)
}

/// POST /crud/cursos
pub async fn upsert(Json(dto): Json<CourseDto>) -> ApiResult<CreatedId> {
    let is_new = dto.id.is_none();
    let id = a003_course::service::upsert(dto).await?;
    ok_with_message(
        CreatedId { id },
        if is_new { "Curso creado" } else { "Curso actualizado" },
    )
}

/// GET /crud/cursos/:id/libros
pub async fn books(Path(id): Path<i64>) -> ApiResult<Vec<Book>> {
    ok(a003_course::service::books(id).await?)
}

/// POST /crud/cursos/libros
pub async fn assign(Json(assignment): Json<CourseBookAssignment>) -> ApiResult<()> {
    a003_course::service::assign(assignment).await?;
    ok_with_message((), "Libro asignado al curso")
}

/// DELETE /crud/cursos/:course_id/libros/:book_id
pub async fn unassign(Path((course_id, book_id)): Path<(i64, i64)>) -> ApiResult<()> {
    a003_course::service::unassign(course_id, book_id).await?;
    ok_with_message((), "Libro retirado del curso")
}
