use contracts::domain::a002_book::aggregate::{Book, BookDto};

use super::repository;
use crate::domain::a001_publisher;
use crate::shared::api_response::{AppError, AppResult};

pub async fn list_all() -> AppResult<Vec<Book>> {
    Ok(repository::list_all().await?)
}

pub async fn get_by_id(id: i64) -> AppResult<Book> {
    repository::get_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Libro {} no encontrado", id)))
}

pub async fn upsert(dto: BookDto) -> AppResult<i64> {
    dto.validate().map_err(AppError::Validation)?;
    let publisher_id = dto
        .publisher_id
        .ok_or_else(|| AppError::validation("Seleccione una editorial"))?;
    // Unknown publisher is a client error here, not a missing resource
    a001_publisher::service::get_by_id(publisher_id)
        .await
        .map_err(|e| match e {
            AppError::EntityNotFound(msg) => AppError::Validation(msg),
            other => other,
        })?;

    match dto.id {
        Some(id) => {
            get_by_id(id).await?;
            repository::update(id, &dto, publisher_id).await?;
            tracing::info!("Book {} updated", id);
            Ok(id)
        }
        None => {
            let id = repository::insert(&dto, publisher_id).await?;
            tracing::info!("Book {} created: {}", id, dto.name.trim());
            Ok(id)
        }
    }
}

pub async fn toggle_active(id: i64) -> AppResult<Book> {
    let current = get_by_id(id).await?;
    repository::set_active(id, !current.active).await?;
    get_by_id(id).await
}
