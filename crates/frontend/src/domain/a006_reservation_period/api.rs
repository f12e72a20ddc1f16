use contracts::domain::a006_reservation_period::aggregate::ReservationPeriod;
use contracts::shared::envelope::ApiError;

use crate::shared::api_utils;

/// `None` until an administrator sets the first period
pub async fn fetch() -> Result<Option<ReservationPeriod>, ApiError> {
    api_utils::get_optional("/periodo-reservas").await
}

pub async fn save(period: &ReservationPeriod) -> Result<ReservationPeriod, ApiError> {
    period.validate().map_err(ApiError::Validation)?;
    api_utils::put("/periodo-reservas", period).await
}
