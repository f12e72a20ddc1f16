/// Date helpers for the console (dates travel as "YYYY-MM-DD")
use chrono::NaiveDate;

/// "2024-09-15" or "2024-09-15T10:00:00Z" -> "15/09/2024"; anything else is returned as is
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(d) => d.format("%d/%m/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Value of an `<input type="date">`
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn to_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Local calendar day of the browser
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-09-15"), "15/09/2024");
        assert_eq!(format_date("2024-03-01T14:02:26Z"), "01/03/2024");
        assert_eq!(format_date("ayer"), "ayer");
    }

    #[test]
    fn test_input_date() {
        let d = parse_input_date(" 2024-09-30 ").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 9, 30).unwrap());
        assert_eq!(to_input_date(d), "2024-09-30");
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("30/09/2024"), None);
    }
}
