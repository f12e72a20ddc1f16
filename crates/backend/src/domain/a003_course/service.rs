use contracts::domain::a002_book::aggregate::Book;
use contracts::domain::a003_course::aggregate::{Course, CourseBookAssignment, CourseDto};
use contracts::domain::common::AggregateId;

use super::repository;
use crate::domain::a002_book;
use crate::shared::api_response::{AppError, AppResult};

pub async fn list_all() -> AppResult<Vec<Course>> {
    Ok(repository::list_all().await?)
}

pub async fn get_by_id(id: i64) -> AppResult<Course> {
    repository::get_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Curso {} no encontrado", id)))
}

pub async fn upsert(dto: CourseDto) -> AppResult<i64> {
    dto.validate().map_err(AppError::Validation)?;
    match dto.id {
        Some(id) => {
            get_by_id(id).await?;
            repository::update(id, &dto).await?;
            tracing::info!("Course {} updated", id);
            Ok(id)
        }
        None => {
            let id = repository::insert(&dto).await?;
            tracing::info!("Course {} created: {}", id, dto.name.trim());
            Ok(id)
        }
    }
}

pub async fn books(course_id: i64) -> AppResult<Vec<Book>> {
    get_by_id(course_id).await?;
    let ids = repository::assigned_book_ids(course_id).await?;
    Ok(a002_book::repository::list_by_ids(&ids).await?)
}

/// Assign one book; each book of a batch is a separate request
pub async fn assign(assignment: CourseBookAssignment) -> AppResult<()> {
    let course_id = assignment.course_id.value();
    let book_id = assignment.book_id.value();
    get_by_id(course_id).await?;
    a002_book::service::get_by_id(book_id).await?;

    if repository::is_assigned(course_id, book_id).await? {
        return Err(AppError::Conflict(format!(
            "El libro {} ya está asignado al curso {}",
            book_id, course_id
        )));
    }
    repository::assign(course_id, book_id).await?;
    tracing::info!("Book {} assigned to course {}", book_id, course_id);
    Ok(())
}

pub async fn unassign(course_id: i64, book_id: i64) -> AppResult<()> {
    if !repository::unassign(course_id, book_id).await? {
        return Err(AppError::not_found(format!(
            "El libro {} no está asignado al curso {}",
            book_id, course_id
        )));
    }
    tracing::info!("Book {} removed from course {}", book_id, course_id);
    Ok(())
}
