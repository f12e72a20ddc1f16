use chrono::NaiveDate;
use contracts::domain::a006_reservation_period::aggregate::{PeriodPhase, ReservationPeriod};

use crate::shared::api_response::{AppError, AppResult};

/// New reservations are only accepted while the period is open
pub fn check_open(period: Option<&ReservationPeriod>, today: NaiveDate) -> AppResult<()> {
    let period = period.ok_or_else(|| {
        AppError::validation("No hay ningún periodo de reservas configurado")
    })?;
    match period.phase_on(today) {
        PeriodPhase::Open => Ok(()),
        PeriodPhase::Upcoming => Err(AppError::validation(format!(
            "El periodo de reservas comienza el {}",
            period.start.format("%d/%m/%Y")
        ))),
        PeriodPhase::Closed => Err(AppError::validation(format!(
            "El periodo de reservas finalizó el {}",
            period.end.format("%d/%m/%Y")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, day).unwrap()
    }

    #[test]
    fn test_check_open() {
        let p = ReservationPeriod::new(d(9, 1), d(9, 30));
        assert!(check_open(Some(&p), d(9, 15)).is_ok());
        assert!(check_open(Some(&p), d(9, 30)).is_ok());

        let closed = check_open(Some(&p), d(10, 1)).unwrap_err();
        assert_eq!(closed.to_string(), "El periodo de reservas finalizó el 30/09/2024");
        let upcoming = check_open(Some(&p), d(8, 1)).unwrap_err();
        assert_eq!(upcoming.to_string(), "El periodo de reservas comienza el 01/09/2024");

        assert!(check_open(None, d(9, 15)).is_err());
    }
}
