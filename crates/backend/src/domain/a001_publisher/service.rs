use contracts::domain::a001_publisher::aggregate::{
    Publisher, PublisherDto, PublisherWithOrders, PublisherWithPending,
};
use contracts::domain::a002_book::aggregate::Book;

use super::repository;
use crate::domain::a002_book;
use crate::shared::api_response::{AppError, AppResult};

pub async fn list_all() -> AppResult<Vec<Publisher>> {
    Ok(repository::list_all().await?)
}

pub async fn get_by_id(id: i64) -> AppResult<Publisher> {
    repository::get_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Editorial {} no encontrada", id)))
}

/// Create or update; contact lists are stored without blank entries
pub async fn upsert(dto: PublisherDto) -> AppResult<i64> {
    let dto = dto.normalized();
    dto.validate().map_err(AppError::Validation)?;

    match dto.id {
        Some(id) => {
            get_by_id(id).await?;
            repository::update(id, &dto).await?;
            tracing::info!("Publisher {} updated", id);
            Ok(id)
        }
        None => {
            let id = repository::insert(&dto).await?;
            tracing::info!("Publisher {} created: {}", id, dto.name);
            Ok(id)
        }
    }
}

/// Flip the active flag and return the updated row
pub async fn toggle_active(id: i64) -> AppResult<Publisher> {
    let current = get_by_id(id).await?;
    repository::set_active(id, !current.active).await?;
    get_by_id(id).await
}

pub async fn list_with_orders() -> AppResult<Vec<PublisherWithOrders>> {
    Ok(repository::list_with_orders().await?)
}

pub async fn list_with_pending() -> AppResult<Vec<PublisherWithPending>> {
    Ok(repository::list_with_pending().await?)
}

/// Books of the publisher that still have units pending order
pub async fn pending_books(id: i64) -> AppResult<Vec<Book>> {
    get_by_id(id).await?;
    Ok(a002_book::repository::list_pending_by_publisher(id).await?)
}
