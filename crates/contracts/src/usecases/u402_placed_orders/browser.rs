use crate::domain::a001_publisher::aggregate::PublisherWithOrders;
use crate::domain::a004_order::aggregate::{OrderId, OrderStatus, OrderSummary};
use crate::domain::common::AggregateId;

/// Colour family of a status badge; the console maps it to its widget palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Warning,
    Informative,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub tone: BadgeTone,
}

pub fn status_badge(status: OrderStatus) -> StatusBadge {
    let tone = match status {
        OrderStatus::Pending => BadgeTone::Warning,
        OrderStatus::PartiallyReceived => BadgeTone::Informative,
        OrderStatus::Completed => BadgeTone::Success,
    };
    StatusBadge {
        label: status.label(),
        tone,
    }
}

/// Order matches the free-text filter: id substring or literal date substring
pub fn matches_filter(order: &OrderSummary, filter: &str) -> bool {
    let q = filter.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    order.id.as_string().contains(&q) || order.date.to_lowercase().contains(&q)
}

/// Placed orders of one publisher, as listed on the browser screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderBrowser {
    publisher: Option<PublisherWithOrders>,
    orders: Vec<OrderSummary>,
    filter: String,
    selected: Option<OrderId>,
}

impl OrderBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch publisher together with its freshly fetched orders.
    /// Called only once the fetch succeeded, so a failure keeps the previous view.
    pub fn select_publisher(&mut self, publisher: PublisherWithOrders, orders: Vec<OrderSummary>) {
        self.publisher = Some(publisher);
        self.orders = orders;
        self.selected = None;
    }

    pub fn publisher(&self) -> Option<&PublisherWithOrders> {
        self.publisher.as_ref()
    }

    /// Replace the orders with a fresh server copy
    pub fn load_orders(&mut self, orders: Vec<OrderSummary>) {
        self.orders = orders;
        if let Some(id) = self.selected {
            if !self.orders.iter().any(|o| o.id == id) {
                self.selected = None;
            }
        }
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn select_order(&mut self, id: OrderId) {
        self.selected = Some(id);
    }

    pub fn selected_order(&self) -> Option<OrderId> {
        self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// A receipt was stored for the selected order: close it; the caller reloads the list
    pub fn receipt_saved(&mut self) {
        self.selected = None;
    }

    pub fn total(&self) -> usize {
        self.orders.len()
    }

    /// Filtered orders, completed ones last, otherwise in server order
    pub fn visible(&self) -> Vec<&OrderSummary> {
        let mut rows: Vec<&OrderSummary> = self
            .orders
            .iter()
            .filter(|o| matches_filter(o, &self.filter))
            .collect();
        rows.sort_by_key(|o| o.status.sort_rank());
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_publisher::aggregate::PublisherId;

    fn order(id: i64, date: &str, status: OrderStatus) -> OrderSummary {
        OrderSummary {
            id: OrderId(id),
            date: date.into(),
            line_count: 2,
            status,
        }
    }

    fn publisher(id: i64, name: &str) -> PublisherWithOrders {
        PublisherWithOrders {
            id: PublisherId(id),
            name: name.into(),
            order_count: 4,
        }
    }

    fn browser() -> OrderBrowser {
        let mut b = OrderBrowser::new();
        b.select_publisher(
            publisher(1, "SM"),
            vec![
                order(11, "2024-09-02", OrderStatus::Completed),
                order(12, "2024-09-05", OrderStatus::Pending),
                order(13, "2024-10-01", OrderStatus::Completed),
                order(21, "2024-10-03", OrderStatus::PartiallyReceived),
            ],
        );
        b
    }

    fn ids(rows: Vec<&OrderSummary>) -> Vec<i64> {
        rows.into_iter().map(|o| o.id.0).collect()
    }

    #[test]
    fn test_completed_sink_stably() {
        assert_eq!(ids(browser().visible()), vec![12, 21, 11, 13]);
    }

    #[test]
    fn test_filter_by_id_or_date_substring() {
        let mut b = browser();
        b.set_filter("2");
        assert_eq!(ids(b.visible()), vec![12, 21, 11, 13]);
        b.set_filter("09-0");
        assert_eq!(ids(b.visible()), vec![12, 11]);
        b.set_filter(" 13 ");
        assert_eq!(ids(b.visible()), vec![13]);
        b.set_filter("septiembre");
        assert!(b.visible().is_empty());
    }

    #[test]
    fn test_badges() {
        assert_eq!(status_badge(OrderStatus::Pending).tone, BadgeTone::Warning);
        assert_eq!(status_badge(OrderStatus::Completed).label, "Completado");
        assert_eq!(
            status_badge(OrderStatus::PartiallyReceived).tone,
            BadgeTone::Informative
        );
    }

    #[test]
    fn test_reload_drops_vanished_selection() {
        let mut b = browser();
        b.select_order(OrderId(12));
        b.load_orders(vec![order(12, "2024-09-05", OrderStatus::PartiallyReceived)]);
        assert_eq!(b.selected_order(), Some(OrderId(12)));
        b.load_orders(vec![]);
        assert_eq!(b.selected_order(), None);
    }

    #[test]
    fn test_saved_receipt_closes_the_order() {
        let mut b = browser();
        b.select_order(OrderId(12));
        b.receipt_saved();
        assert_eq!(b.selected_order(), None);

        // the reloaded list still holds the order; it stays closed
        b.load_orders(vec![order(12, "2024-09-05", OrderStatus::PartiallyReceived)]);
        assert_eq!(b.selected_order(), None);
        assert_eq!(b.total(), 1);
    }

    #[test]
    fn test_switching_publisher_replaces_orders_and_selection() {
        let mut b = browser();
        b.select_order(OrderId(12));
        b.select_publisher(publisher(2, "Anaya"), vec![order(30, "2024-11-02", OrderStatus::Pending)]);
        assert_eq!(b.publisher().map(|p| p.id), Some(PublisherId(2)));
        assert_eq!(ids(b.visible()), vec![30]);
        assert_eq!(b.selected_order(), None);
    }
}
