use contracts::domain::a002_book::aggregate::{Book, BookDto};
use contracts::shared::envelope::{ApiError, CreatedId};

use crate::shared::api_utils;

pub async fn fetch_all() -> Result<Vec<Book>, ApiError> {
    api_utils::get("/crud/libros").await
}

pub async fn save(dto: &BookDto) -> Result<CreatedId, ApiError> {
    dto.validate().map_err(ApiError::Validation)?;
    api_utils::post("/crud/libros", dto).await
}

pub async fn toggle_active(id: i64) -> Result<Book, ApiError> {
    api_utils::put_empty(&format!("/crud/libros/{}/estado", id)).await
}
