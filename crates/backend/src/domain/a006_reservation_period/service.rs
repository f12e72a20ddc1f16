use contracts::domain::a006_reservation_period::aggregate::ReservationPeriod;

use super::repository;
use crate::shared::api_response::{AppError, AppResult};

pub async fn get() -> AppResult<ReservationPeriod> {
    repository::get()
        .await?
        .ok_or_else(|| AppError::not_found("No hay ningún periodo de reservas configurado"))
}

pub async fn find() -> AppResult<Option<ReservationPeriod>> {
    Ok(repository::get().await?)
}

pub async fn set(period: ReservationPeriod) -> AppResult<ReservationPeriod> {
    period.validate().map_err(AppError::Validation)?;
    repository::save(&period).await?;
    tracing::info!("Reservation period set to {} .. {}", period.start, period.end);
    Ok(period)
}
