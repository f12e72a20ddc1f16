use crate::domain::a001_publisher::aggregate::PublisherId;
use crate::domain::a002_book::aggregate::BookId;
use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// ID Type
// ============================================================================

/// Order id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub i64);

impl OrderId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

impl AggregateId for OrderId {
    fn value(&self) -> i64 {
        self.0
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(OrderId::new)
    }
}

// ============================================================================
// Status
// ============================================================================

/// Receipt status of a placed order.
///
/// Moves only forward: pendiente -> medioPendiente -> completado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// No unit received yet
    #[serde(rename = "pendiente")]
    Pending,
    /// Some units received, not all
    #[serde(rename = "medioPendiente")]
    PartiallyReceived,
    /// Every line fully received
    #[serde(rename = "completado")]
    Completed,
}

impl OrderStatus {
    /// Status from `(ordered, received)` pairs of the order lines
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let mut any = false;
        let mut all_complete = true;
        let mut none_received = true;
        for (ordered, received) in lines {
            any = true;
            if received < ordered {
                all_complete = false;
            }
            if received > 0 {
                none_received = false;
            }
        }
        if !any || (none_received && !all_complete) {
            OrderStatus::Pending
        } else if all_complete {
            OrderStatus::Completed
        } else {
            OrderStatus::PartiallyReceived
        }
    }

    /// Wire / storage code
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pendiente",
            OrderStatus::PartiallyReceived => "medioPendiente",
            OrderStatus::Completed => "completado",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "pendiente" => Some(OrderStatus::Pending),
            "medioPendiente" => Some(OrderStatus::PartiallyReceived),
            "completado" => Some(OrderStatus::Completed),
            _ => None,
        }
    }

    /// Badge label
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendiente",
            OrderStatus::PartiallyReceived => "Recibido parcialmente",
            OrderStatus::Completed => "Completado",
        }
    }

    /// Completed orders sink to the end of lists
    pub fn sort_rank(&self) -> u8 {
        match self {
            OrderStatus::Completed => 1,
            _ => 0,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Order creation
// ============================================================================

/// One book of a new order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineRequest {
    #[serde(rename = "idLibro")]
    pub book_id: BookId,

    #[serde(rename = "cantidad")]
    pub quantity: u32,
}

/// Body of `POST /pedidos/add`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(rename = "idEditorial")]
    pub publisher_id: PublisherId,

    #[serde(rename = "libros")]
    pub lines: Vec<OrderLineRequest>,
}

impl CreateOrderRequest {
    /// Shape checks that need no catalog data
    pub fn validate(&self) -> Result<(), String> {
        if self.lines.is_empty() {
            return Err("El pedido no contiene libros".into());
        }
        let mut seen = HashSet::new();
        for line in &self.lines {
            if line.quantity == 0 {
                return Err(format!("Cantidad 0 para el libro {}", line.book_id.value()));
            }
            if !seen.insert(line.book_id) {
                return Err(format!("Libro {} repetido en el pedido", line.book_id.value()));
            }
        }
        Ok(())
    }

    pub fn total_units(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

// ============================================================================
// Placed orders
// ============================================================================

/// Row of the placed-order list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: OrderId,

    /// Creation date as sent by the backend ("YYYY-MM-DD")
    #[serde(rename = "fecha")]
    pub date: String,

    #[serde(rename = "numeroLibros")]
    pub line_count: u32,

    #[serde(rename = "estado")]
    pub status: OrderStatus,
}

/// Order line with ordered vs already received units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineDetail {
    #[serde(rename = "idLibro")]
    pub book_id: BookId,

    #[serde(rename = "cantidad")]
    pub ordered: u32,

    #[serde(rename = "unidadesRecibidas")]
    pub received: u32,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "ISBN")]
    pub isbn: String,

    #[serde(rename = "precio")]
    pub price: f64,
}

impl OrderLineDetail {
    /// Units still expected from the publisher
    pub fn outstanding(&self) -> u32 {
        self.ordered.saturating_sub(self.received)
    }
}

/// Order with its lines, used by the receipt screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub id: OrderId,

    #[serde(rename = "idEditorial")]
    pub publisher_id: PublisherId,

    #[serde(rename = "fecha")]
    pub date: String,

    #[serde(rename = "estado")]
    pub status: OrderStatus,

    #[serde(rename = "libros")]
    pub lines: Vec<OrderLineDetail>,
}

impl OrderDetail {
    pub fn derived_status(&self) -> OrderStatus {
        OrderStatus::from_lines(self.lines.iter().map(|l| (l.ordered, l.received)))
    }
}

// ============================================================================
// Receipt
// ============================================================================

/// Newly received units of one book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivedLine {
    #[serde(rename = "idLibro")]
    pub book_id: BookId,

    #[serde(rename = "cantidadRecibida")]
    pub quantity: u32,
}

/// Body of `PUT /pedidos/unidades-recibidas`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptRequest {
    #[serde(rename = "idEditorial")]
    pub publisher_id: PublisherId,

    #[serde(rename = "idPedido")]
    pub order_id: OrderId,

    #[serde(rename = "librosRecibidos")]
    pub lines: Vec<ReceivedLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_lines() {
        assert_eq!(OrderStatus::from_lines([(10, 0), (5, 0)]), OrderStatus::Pending);
        assert_eq!(
            OrderStatus::from_lines([(10, 4), (5, 0)]),
            OrderStatus::PartiallyReceived
        );
        assert_eq!(
            OrderStatus::from_lines([(10, 10), (5, 0)]),
            OrderStatus::PartiallyReceived
        );
        assert_eq!(OrderStatus::from_lines([(10, 10), (5, 5)]), OrderStatus::Completed);
        assert_eq!(OrderStatus::from_lines(Vec::<(u32, u32)>::new()), OrderStatus::Pending);
    }

    #[test]
    fn test_status_wire_codes() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::PartiallyReceived,
            OrderStatus::Completed,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse("cancelado"), None);
    }

    #[test]
    fn test_create_request_validation() {
        let ok = CreateOrderRequest {
            publisher_id: PublisherId(1),
            lines: vec![OrderLineRequest {
                book_id: BookId(3),
                quantity: 2,
            }],
        };
        assert!(ok.validate().is_ok());

        let empty = CreateOrderRequest {
            publisher_id: PublisherId(1),
            lines: vec![],
        };
        assert!(empty.validate().is_err());

        let zero = CreateOrderRequest {
            publisher_id: PublisherId(1),
            lines: vec![OrderLineRequest {
                book_id: BookId(3),
                quantity: 0,
            }],
        };
        assert!(zero.validate().is_err());

        let dup = CreateOrderRequest {
            publisher_id: PublisherId(1),
            lines: vec![
                OrderLineRequest { book_id: BookId(3), quantity: 1 },
                OrderLineRequest { book_id: BookId(3), quantity: 2 },
            ],
        };
        assert!(dup.validate().is_err());
    }

    #[test]
    fn test_create_request_wire_shape() {
        let req = CreateOrderRequest {
            publisher_id: PublisherId(4),
            lines: vec![OrderLineRequest {
                book_id: BookId(9),
                quantity: 3,
            }],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"idEditorial": 4, "libros": [{"idLibro": 9, "cantidad": 3}]})
        );
    }
}
