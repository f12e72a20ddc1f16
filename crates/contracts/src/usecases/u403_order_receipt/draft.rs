use crate::domain::a002_book::aggregate::BookId;
use crate::domain::a004_order::aggregate::{
    OrderDetail, OrderLineDetail, OrderStatus, ReceiptRequest, ReceivedLine,
};
use crate::shared::envelope::ApiError;
use std::collections::HashMap;
use std::num::IntErrorKind;

/// Newly received units typed by the operator.
/// Anything that is not a non-negative integer counts as 0; numbers too large
/// for an `i64` are still clamped to `remaining`.
pub fn clamp_received(raw: &str, remaining: u32) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(v) if v > 0 => v.min(remaining as i64) as u32,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => remaining,
        _ => 0,
    }
}

/// Working copy of an order being reconciled against a delivery
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReceiptDraft {
    detail: Option<OrderDetail>,
    increments: HashMap<BookId, u32>,
}

impl ReceiptDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the working copy; typed increments are discarded
    pub fn load_detail(&mut self, detail: OrderDetail) {
        self.detail = Some(detail);
        self.increments.clear();
    }

    pub fn detail(&self) -> Option<&OrderDetail> {
        self.detail.as_ref()
    }

    pub fn lines(&self) -> &[OrderLineDetail] {
        self.detail.as_ref().map(|d| d.lines.as_slice()).unwrap_or(&[])
    }

    fn line(&self, book_id: BookId) -> Option<&OrderLineDetail> {
        self.lines().iter().find(|l| l.book_id == book_id)
    }

    pub fn increment(&self, book_id: BookId) -> u32 {
        self.increments.get(&book_id).copied().unwrap_or(0)
    }

    /// Apply typed input for one line; returns the value kept
    pub fn set_received_increment(&mut self, book_id: BookId, raw: &str) -> u32 {
        let Some(remaining) = self.line(book_id).map(|l| l.outstanding()) else {
            return 0;
        };
        let qty = clamp_received(raw, remaining);
        self.increments.insert(book_id, qty);
        qty
    }

    /// Mark every line as fully delivered
    pub fn receive_all(&mut self) {
        let all: Vec<(BookId, u32)> = self
            .lines()
            .iter()
            .map(|l| (l.book_id, l.outstanding()))
            .collect();
        self.increments.extend(all);
    }

    /// Units still expected before this pass
    pub fn outstanding_total(&self) -> u32 {
        self.lines().iter().map(|l| l.outstanding()).sum()
    }

    /// Units entered in this pass
    pub fn increment_total(&self) -> u32 {
        self.increments.values().sum()
    }

    pub fn is_fully_received(&self) -> bool {
        self.detail.is_some() && self.outstanding_total() == 0
    }

    /// Status the order would have once this pass is stored
    pub fn projected_status(&self) -> OrderStatus {
        OrderStatus::from_lines(
            self.lines()
                .iter()
                .map(|l| (l.ordered, l.received + self.increment(l.book_id))),
        )
    }

    /// One entry per line, zero increments included
    pub fn build_request(&self) -> Result<ReceiptRequest, ApiError> {
        let detail = self
            .detail
            .as_ref()
            .ok_or_else(|| ApiError::Validation("Seleccione un pedido".into()))?;
        Ok(ReceiptRequest {
            publisher_id: detail.publisher_id,
            order_id: detail.id,
            lines: detail
                .lines
                .iter()
                .map(|l| ReceivedLine {
                    book_id: l.book_id,
                    quantity: self.increment(l.book_id),
                })
                .collect(),
        })
    }

    pub fn clear(&mut self) {
        self.detail = None;
        self.increments.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_publisher::aggregate::PublisherId;
    use crate::domain::a004_order::aggregate::OrderId;

    fn line(book: i64, ordered: u32, received: u32) -> OrderLineDetail {
        OrderLineDetail {
            book_id: BookId(book),
            ordered,
            received,
            name: format!("Libro {}", book),
            isbn: "9788467871325".into(),
            price: 25.0,
        }
    }

    fn detail(lines: Vec<OrderLineDetail>) -> OrderDetail {
        let status = OrderStatus::from_lines(lines.iter().map(|l| (l.ordered, l.received)));
        OrderDetail {
            id: OrderId(5),
            publisher_id: PublisherId(2),
            date: "2024-09-10".into(),
            status,
            lines,
        }
    }

    #[test]
    fn test_clamp_received() {
        assert_eq!(clamp_received("3", 6), 3);
        assert_eq!(clamp_received("100", 6), 6);
        assert_eq!(clamp_received("-2", 6), 0);
        assert_eq!(clamp_received("tres", 6), 0);
        assert_eq!(clamp_received("", 6), 0);
        assert_eq!(clamp_received("5", 0), 0);
        assert_eq!(clamp_received("99999999999999999999", 6), 6);
        assert_eq!(clamp_received("-99999999999999999999", 6), 0);
        assert_eq!(clamp_received("99999999999999999999", 0), 0);
    }

    #[test]
    fn test_scenario_clamp_then_complete() {
        let mut draft = ReceiptDraft::new();
        draft.load_detail(detail(vec![line(1, 10, 4)]));
        assert_eq!(draft.set_received_increment(BookId(1), "100"), 6);

        let req = draft.build_request().unwrap();
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({
                "idEditorial": 2,
                "idPedido": 5,
                "librosRecibidos": [{"idLibro": 1, "cantidadRecibida": 6}]
            })
        );
        assert_eq!(draft.projected_status(), OrderStatus::Completed);
    }

    #[test]
    fn test_request_includes_untouched_lines() {
        let mut draft = ReceiptDraft::new();
        draft.load_detail(detail(vec![line(1, 10, 0), line(2, 4, 1), line(3, 2, 2)]));
        draft.set_received_increment(BookId(2), "1");
        let req = draft.build_request().unwrap();
        let qty: Vec<u32> = req.lines.iter().map(|l| l.quantity).collect();
        assert_eq!(qty, vec![0, 1, 0]);
        assert_eq!(draft.projected_status(), OrderStatus::PartiallyReceived);
        assert_eq!(draft.outstanding_total(), 13);
        assert_eq!(draft.increment_total(), 1);
    }

    #[test]
    fn test_reload_discards_increments() {
        let mut draft = ReceiptDraft::new();
        draft.load_detail(detail(vec![line(1, 10, 0)]));
        draft.set_received_increment(BookId(1), "4");
        draft.load_detail(detail(vec![line(1, 10, 4)]));
        assert_eq!(draft.increment(BookId(1)), 0);
        assert_eq!(draft.set_received_increment(BookId(99), "4"), 0);
    }

    #[test]
    fn test_receive_all() {
        let mut draft = ReceiptDraft::new();
        draft.load_detail(detail(vec![line(1, 10, 4), line(2, 3, 0)]));
        draft.receive_all();
        assert_eq!(draft.increment(BookId(1)), 6);
        assert_eq!(draft.increment(BookId(2)), 3);
        assert_eq!(draft.projected_status(), OrderStatus::Completed);
        assert!(!draft.is_fully_received());
    }

    #[test]
    fn test_empty_draft() {
        let mut draft = ReceiptDraft::new();
        assert!(matches!(draft.build_request(), Err(ApiError::Validation(_))));
        assert!(!draft.is_fully_received());
        draft.load_detail(detail(vec![line(1, 2, 2)]));
        assert!(draft.is_fully_received());
        draft.clear();
        assert!(draft.detail().is_none());
    }
}
