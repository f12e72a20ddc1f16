/// Search and formatting helpers for the list pages

/// Rows that can be found through the search box
pub trait Searchable {
    /// Text fields searched by the box
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match on any field; blank query matches everything
    fn matches_filter(&self, filter: &str) -> bool {
        let q = filter.trim().to_lowercase();
        q.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|f| f.to_lowercase().contains(&q))
    }
}

pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    items
        .iter()
        .filter(|i| i.matches_filter(filter))
        .cloned()
        .collect()
}

/// Replace the row with the same key, keeping its position
pub fn replace_by<T, K: PartialEq>(items: &mut [T], updated: T, key: impl Fn(&T) -> K) -> bool {
    let k = key(&updated);
    match items.iter_mut().find(|i| key(&**i) == k) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Price as shown in tables: "1.234,50 €"
pub fn format_price(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let (sign, cents) = if cents < 0 { ("-", -cents) } else { ("", cents) };
    let units = (cents / 100).to_string();
    let mut grouped = String::new();
    for (i, ch) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("{}{},{:02} €", sign, grouped, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: u32,
        name: String,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![&self.name]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, name: "Anaya".into() },
            Row { id: 2, name: "Santillana".into() },
        ]
    }

    #[test]
    fn test_filter_list() {
        assert_eq!(filter_list(&rows(), "").len(), 2);
        assert_eq!(filter_list(&rows(), "  SANTI ")[0].id, 2);
        assert!(filter_list(&rows(), "sm").is_empty());
    }

    #[test]
    fn test_replace_by_keeps_position() {
        let mut items = rows();
        let updated = Row { id: 1, name: "Anaya ELE".into() };
        assert!(replace_by(&mut items, updated, |r| r.id));
        assert_eq!(items[0].name, "Anaya ELE");
        assert!(!replace_by(&mut items, Row { id: 9, name: "x".into() }, |r| r.id));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(12.5), "12,50 €");
        assert_eq!(format_price(1234.0), "1.234,00 €");
        assert_eq!(format_price(0.0), "0,00 €");
        assert_eq!(format_price(1_000_000.99), "1.000.000,99 €");
    }
}
