use crate::domain::a001_publisher::aggregate::Publisher;
use crate::domain::a002_book::aggregate::{Book, BookId};
use crate::domain::a004_order::aggregate::{CreateOrderRequest, OrderLineRequest};
use crate::shared::envelope::ApiError;
use std::collections::HashMap;
use std::num::IntErrorKind;

/// Quantity typed by the operator, bounded by the units pending for the book.
///
/// Input that is not an integer, or is negative, becomes 1 (0 when nothing is
/// pending). Everything else is clamped into `[0, max]`, including numbers too
/// large for an `i64`.
pub fn clamp_quantity(raw: &str, max: u32) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(v) if v >= 0 => v.min(max as i64) as u32,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => max,
        _ => max.min(1),
    }
}

/// Book passes the free-text filter of the aggregator (name or ISBN)
pub fn matches_query(book: &Book, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    book.name.to_lowercase().contains(&q) || book.isbn.to_lowercase().contains(&q)
}

/// Working set of the pending-order screen: one publisher, the books it has
/// pending and the quantity picked for each.
///
/// Only books with pending units are kept, so a book with nothing pending can
/// never get a positive quantity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingOrderSelection {
    publisher: Option<Publisher>,
    books: Vec<Book>,
    selection: HashMap<BookId, u32>,
}

impl PendingOrderSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the publisher and its pending books; resets the selection
    pub fn select_publisher(&mut self, publisher: Publisher, books: Vec<Book>) {
        self.publisher = Some(publisher);
        self.books = books.into_iter().filter(|b| b.has_pending_units()).collect();
        self.selection.clear();
    }

    pub fn publisher(&self) -> Option<&Publisher> {
        self.publisher.as_ref()
    }

    /// Selectable books in backend order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn visible_books(&self, query: &str) -> Vec<&Book> {
        self.books.iter().filter(|b| matches_query(b, query)).collect()
    }

    fn max_for(&self, book_id: BookId) -> Option<u32> {
        self.books
            .iter()
            .find(|b| b.id == book_id)
            .map(|b| b.pending_units)
    }

    fn put(&mut self, book_id: BookId, quantity: u32) {
        if quantity == 0 {
            self.selection.remove(&book_id);
        } else {
            self.selection.insert(book_id, quantity);
        }
    }

    pub fn quantity(&self, book_id: BookId) -> u32 {
        self.selection.get(&book_id).copied().unwrap_or(0)
    }

    pub fn is_selected(&self, book_id: BookId) -> bool {
        self.selection.contains_key(&book_id)
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub fn total_units(&self) -> u32 {
        self.selection.values().sum()
    }

    /// Absent: add with quantity 1. Present: remove.
    pub fn toggle_book(&mut self, book_id: BookId) {
        if self.selection.remove(&book_id).is_some() {
            return;
        }
        if let Some(max) = self.max_for(book_id) {
            self.put(book_id, max.min(1));
        }
    }

    /// Every book passing the filter gets its full pending amount
    pub fn select_all(&mut self, query: &str) {
        let picks: Vec<(BookId, u32)> = self
            .books
            .iter()
            .filter(|b| matches_query(b, query))
            .map(|b| (b.id, b.pending_units))
            .collect();
        for (id, qty) in picks {
            self.put(id, qty);
        }
    }

    pub fn deselect_all(&mut self) {
        self.selection.clear();
    }

    /// Apply typed input; returns the quantity actually kept
    pub fn set_quantity(&mut self, book_id: BookId, raw: &str) -> u32 {
        let Some(max) = self.max_for(book_id) else {
            return 0;
        };
        let qty = clamp_quantity(raw, max);
        self.put(book_id, qty);
        qty
    }

    pub fn increment(&mut self, book_id: BookId) {
        if let Some(max) = self.max_for(book_id) {
            let current = self.quantity(book_id);
            if current < max {
                self.put(book_id, current + 1);
            }
        }
    }

    pub fn decrement(&mut self, book_id: BookId) {
        let current = self.quantity(book_id);
        if current > 0 {
            self.put(book_id, current - 1);
        }
    }

    /// Order payload, lines in the order the books are listed
    pub fn build_request(&self) -> Result<CreateOrderRequest, ApiError> {
        let publisher = self
            .publisher
            .as_ref()
            .ok_or_else(|| ApiError::Validation("Seleccione una editorial".into()))?;
        let lines: Vec<OrderLineRequest> = self
            .books
            .iter()
            .filter_map(|b| {
                self.selection
                    .get(&b.id)
                    .filter(|q| **q > 0)
                    .map(|q| OrderLineRequest {
                        book_id: b.id,
                        quantity: *q,
                    })
            })
            .collect();
        if lines.is_empty() {
            return Err(ApiError::Validation(
                "Seleccione al menos un libro para el pedido".into(),
            ));
        }
        Ok(CreateOrderRequest {
            publisher_id: publisher.id,
            lines,
        })
    }

    /// Forget publisher and selection (after a successful submit)
    pub fn clear(&mut self) {
        self.publisher = None;
        self.books.clear();
        self.selection.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_publisher::aggregate::PublisherId;

    fn publisher(id: i64) -> Publisher {
        Publisher {
            id: PublisherId(id),
            name: "Santillana".into(),
            emails: vec![],
            phones: vec![],
            active: true,
        }
    }

    fn book(id: i64, name: &str, pending: u32) -> Book {
        Book {
            id: BookId(id),
            name: name.into(),
            isbn: format!("978000000000{}", id),
            price: 20.0,
            publisher_id: PublisherId(1),
            active: true,
            pending_units: pending,
        }
    }

    fn loaded() -> PendingOrderSelection {
        let mut s = PendingOrderSelection::new();
        s.select_publisher(
            publisher(1),
            vec![book(1, "Matemáticas", 5), book(2, "Lengua", 0), book(3, "Inglés", 2)],
        );
        s
    }

    #[test]
    fn test_clamp_quantity() {
        assert_eq!(clamp_quantity("3", 5), 3);
        assert_eq!(clamp_quantity(" 100 ", 5), 5);
        assert_eq!(clamp_quantity("0", 5), 0);
        assert_eq!(clamp_quantity("-4", 5), 1);
        assert_eq!(clamp_quantity("abc", 5), 1);
        assert_eq!(clamp_quantity("2.5", 5), 1);
        assert_eq!(clamp_quantity("abc", 0), 0);
        assert_eq!(clamp_quantity("7", 0), 0);
        assert_eq!(clamp_quantity("99999999999999999999", 5), 5);
        assert_eq!(clamp_quantity("+99999999999999999999", 5), 5);
        assert_eq!(clamp_quantity("-99999999999999999999", 5), 1);
    }

    #[test]
    fn test_clamp_always_in_range() {
        for max in 0..6u32 {
            for raw in [
                "-10",
                "-1",
                "0",
                "1",
                "3",
                "5",
                "6",
                "99999999999",
                "99999999999999999999",
                "x",
                "",
            ] {
                let q = clamp_quantity(raw, max);
                assert!(q <= max, "clamp({raw}, {max}) = {q}");
            }
            if max > 0 {
                assert_eq!(clamp_quantity("no", max), 1);
            }
        }
    }

    #[test]
    fn test_only_pending_books_are_selectable() {
        let mut s = loaded();
        let ids: Vec<BookId> = s.books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![BookId(1), BookId(3)]);

        s.toggle_book(BookId(2));
        assert!(!s.is_selected(BookId(2)));
        s.increment(BookId(2));
        assert_eq!(s.quantity(BookId(2)), 0);
        assert_eq!(s.set_quantity(BookId(2), "4"), 0);
    }

    #[test]
    fn test_toggle_adds_one_and_removes() {
        let mut s = loaded();
        s.toggle_book(BookId(1));
        assert_eq!(s.quantity(BookId(1)), 1);
        s.toggle_book(BookId(1));
        assert!(!s.is_selected(BookId(1)));
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut s = loaded();
        s.toggle_book(BookId(1));
        assert_eq!(s.set_quantity(BookId(1), "0"), 0);
        assert!(!s.is_selected(BookId(1)));
        assert_eq!(s.set_quantity(BookId(1), "9"), 5);
        assert_eq!(s.quantity(BookId(1)), 5);
    }

    #[test]
    fn test_increment_stops_at_max() {
        let mut s = loaded();
        s.increment(BookId(3));
        s.increment(BookId(3));
        s.increment(BookId(3));
        assert_eq!(s.quantity(BookId(3)), 2);
        s.decrement(BookId(3));
        s.decrement(BookId(3));
        assert!(!s.is_selected(BookId(3)));
        s.decrement(BookId(3));
        assert_eq!(s.quantity(BookId(3)), 0);
    }

    #[test]
    fn test_select_all_overwrites_partial_picks() {
        let mut s = loaded();
        s.set_quantity(BookId(1), "2");
        s.select_all("");
        let req = s.build_request().unwrap();
        assert_eq!(
            req.lines,
            vec![
                OrderLineRequest { book_id: BookId(1), quantity: 5 },
                OrderLineRequest { book_id: BookId(3), quantity: 2 },
            ]
        );
    }

    #[test]
    fn test_select_all_respects_filter() {
        let mut s = loaded();
        s.select_all("ingl");
        assert!(!s.is_selected(BookId(1)));
        assert_eq!(s.quantity(BookId(3)), 2);
        assert_eq!(s.visible_books("MATE").len(), 1);
    }

    #[test]
    fn test_scenario_single_line_order() {
        let mut s = PendingOrderSelection::new();
        s.select_publisher(publisher(7), vec![book(10, "A", 5), book(11, "B", 0)]);
        assert_eq!(s.books().len(), 1);
        s.toggle_book(BookId(10));
        s.set_quantity(BookId(10), "3");
        let req = s.build_request().unwrap();
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"idEditorial": 7, "libros": [{"idLibro": 10, "cantidad": 3}]})
        );
    }

    #[test]
    fn test_build_request_needs_publisher_and_lines() {
        let empty = PendingOrderSelection::new();
        assert!(matches!(empty.build_request(), Err(ApiError::Validation(_))));
        let s = loaded();
        assert!(matches!(s.build_request(), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_new_publisher_resets_selection() {
        let mut s = loaded();
        s.toggle_book(BookId(1));
        s.select_publisher(publisher(2), vec![book(1, "Matemáticas", 5)]);
        assert_eq!(s.selected_count(), 0);
        s.toggle_book(BookId(1));
        s.clear();
        assert!(s.publisher().is_none());
        assert!(s.books().is_empty());
        assert_eq!(s.total_units(), 0);
    }
}
