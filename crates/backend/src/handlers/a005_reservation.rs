use axum::extract::{Json, Path};
use contracts::domain::a005_reservation::aggregate::{CreateReservationDto, Reservation};
use contracts::shared::envelope::CreatedId;

use crate::domain::a005_reservation;
use crate::shared::api_response::{ok, ok_with_message, ApiResult};

/// GET /reservas
pub async fn list_all() -> ApiResult<Vec<Reservation>> {
    ok(a005_reservation::service::list_all().await?)
}

/// POST /reservas
pub async fn create(Json(dto): Json<CreateReservationDto>) -> ApiResult<CreatedId> {
    let id = a005_reservation::service::create(dto).await?;
    ok_with_message(CreatedId { id }, "Reserva registrada")
}

/// PUT /reservas/:id/estado
pub async fn toggle_active(Path(id): Path<i64>) -> ApiResult<Reservation> {
    ok(a005_reservation::service::toggle_active(id).await?)
}

/// PUT /reservas/:id/entregar/:book_id
pub async fn deliver(Path((id, book_id)): Path<(i64, i64)>) -> ApiResult<Reservation> {
    ok(a005_reservation::service::deliver(id, book_id).await?)
}
