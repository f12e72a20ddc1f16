use axum::extract::Json;
use contracts::domain::a006_reservation_period::aggregate::ReservationPeriod;

use crate::domain::a006_reservation_period;
use crate::shared::api_response::{ok, ok_with_message, ApiResult};

/// GET /periodo-reservas
pub async fn get() -> ApiResult<ReservationPeriod> {
    ok(a006_reservation_period::service::get().await?)
}

/// PUT /periodo-reservas
pub async fn set(Json(period): Json<ReservationPeriod>) -> ApiResult<ReservationPeriod> {
    let saved = a006_reservation_period::service::set(period).await?;
    ok_with_message(saved, "Periodo de reservas actualizado")
}
