use contracts::domain::a005_reservation::aggregate::{CreateReservationDto, Reservation};
use contracts::shared::envelope::{ApiError, CreatedId};

use crate::shared::api_utils;

pub async fn fetch_all() -> Result<Vec<Reservation>, ApiError> {
    api_utils::get("/reservas").await
}

pub async fn create(dto: &CreateReservationDto) -> Result<CreatedId, ApiError> {
    dto.validate().map_err(ApiError::Validation)?;
    api_utils::post("/reservas", dto).await
}

pub async fn toggle_active(id: i64) -> Result<Reservation, ApiError> {
    api_utils::put_empty(&format!("/reservas/{}/estado", id)).await
}

/// Mark one reserved book as handed out
pub async fn deliver(id: i64, book_id: i64) -> Result<Reservation, ApiError> {
    api_utils::put_empty(&format!("/reservas/{}/entregar/{}", id, book_id)).await
}
