use contracts::domain::a001_publisher::aggregate::{Publisher, PublisherWithPending};
use contracts::domain::a002_book::aggregate::Book;
use contracts::domain::a004_order::aggregate::CreateOrderRequest;
use contracts::shared::envelope::{ApiError, CreatedId};

use crate::shared::api_utils;

pub async fn fetch_publishers_with_pending() -> Result<Vec<PublisherWithPending>, ApiError> {
    api_utils::get("/crud/editoriales-con-pendientes").await
}

/// Publisher plus its books that still have units waiting for an order
pub async fn fetch_publisher_pending(id: i64) -> Result<(Publisher, Vec<Book>), ApiError> {
    let publisher: Publisher = api_utils::get(&format!("/crud/editoriales/{}", id)).await?;
    let books: Vec<Book> =
        api_utils::get(&format!("/crud/editoriales/{}/libros-pendientes", id)).await?;
    Ok((publisher, books))
}

pub async fn place_order(request: &CreateOrderRequest) -> Result<CreatedId, ApiError> {
    request.validate().map_err(ApiError::Validation)?;
    api_utils::post("/pedidos/add", request).await
}
