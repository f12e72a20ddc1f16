use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Global window during which students may reserve books.
/// Both ends are inclusive; the end date counts until the end of that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationPeriod {
    #[serde(rename = "fechaInicio")]
    pub start: NaiveDate,

    #[serde(rename = "fechaFin")]
    pub end: NaiveDate,
}

/// Where a given day falls relative to the reservation period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodPhase {
    /// Before the start date
    Upcoming,
    /// Inside the window
    Open,
    /// After the end date
    Closed,
}

impl PeriodPhase {
    pub fn label(&self) -> &'static str {
        match self {
            PeriodPhase::Upcoming => "Próximamente",
            PeriodPhase::Open => "Abierto",
            PeriodPhase::Closed => "Finalizado",
        }
    }
}

impl ReservationPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.end < self.start {
            return Err("La fecha de fin es anterior a la de inicio".into());
        }
        Ok(())
    }

    /// Phase of the period on a calendar day
    pub fn phase_on(&self, today: NaiveDate) -> PeriodPhase {
        if today < self.start {
            PeriodPhase::Upcoming
        } else if today > self.end {
            PeriodPhase::Closed
        } else {
            PeriodPhase::Open
        }
    }

    /// Phase at a moment; the time of day is ignored
    pub fn phase_at(&self, now: NaiveDateTime) -> PeriodPhase {
        self.phase_on(now.date())
    }

    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.phase_on(today) == PeriodPhase::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn september() -> ReservationPeriod {
        ReservationPeriod::new(d(2024, 9, 1), d(2024, 9, 30))
    }

    #[test]
    fn test_phase_on_days() {
        let p = september();
        assert!(p.is_active(d(2024, 9, 15)));
        assert_eq!(p.phase_on(d(2024, 10, 1)), PeriodPhase::Closed);
        assert_eq!(p.phase_on(d(2024, 8, 1)), PeriodPhase::Upcoming);
        assert!(p.is_active(d(2024, 9, 1)));
        assert!(p.is_active(d(2024, 9, 30)));
    }

    #[test]
    fn test_end_day_counts_until_midnight() {
        let late = d(2024, 9, 30).and_hms_opt(23, 59, 59).unwrap();
        assert_eq!(september().phase_at(late), PeriodPhase::Open);
        let early = d(2024, 9, 1).and_hms_opt(0, 0, 1).unwrap();
        assert_eq!(september().phase_at(early), PeriodPhase::Open);
    }

    #[test]
    fn test_validate_order_of_dates() {
        assert!(september().validate().is_ok());
        assert!(ReservationPeriod::new(d(2024, 9, 30), d(2024, 9, 1))
            .validate()
            .is_err());
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(september()).unwrap();
        assert_eq!(json["fechaInicio"], "2024-09-01");
        assert_eq!(json["fechaFin"], "2024-09-30");
    }
}
