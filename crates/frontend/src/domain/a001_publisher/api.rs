use contracts::domain::a001_publisher::aggregate::{Publisher, PublisherDto};
use contracts::shared::envelope::{ApiError, CreatedId};

use crate::shared::api_utils;

pub async fn fetch_all() -> Result<Vec<Publisher>, ApiError> {
    api_utils::get("/crud/editoriales").await
}

pub async fn fetch_by_id(id: i64) -> Result<Publisher, ApiError> {
    api_utils::get(&format!("/crud/editoriales/{}", id)).await
}

/// Create or update; blank contacts are dropped before sending
pub async fn save(dto: &PublisherDto) -> Result<CreatedId, ApiError> {
    let normalized = dto.normalized();
    normalized.validate().map_err(ApiError::Validation)?;
    api_utils::post("/crud/editoriales", &normalized).await
}

/// Flip the active flag; returns the updated row
pub async fn toggle_active(id: i64) -> Result<Publisher, ApiError> {
    api_utils::put_empty(&format!("/crud/editoriales/{}/estado", id)).await
}
