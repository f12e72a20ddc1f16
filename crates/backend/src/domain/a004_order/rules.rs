//! Server-side checks of order creation and receipt, free of I/O

use contracts::domain::a002_book::aggregate::Book;
use contracts::domain::a004_order::aggregate::{CreateOrderRequest, OrderDetail, ReceiptRequest};
use contracts::domain::common::AggregateId;
use std::collections::HashSet;

use crate::shared::api_response::{AppError, AppResult};

/// Every line names a book of the publisher with enough pending units.
/// `books` are the catalog rows of the requested book ids.
/// Malformed requests are `Validation` (400); requests that clash with the
/// stored pending units or publisher are `Conflict` (409).
pub fn check_order(request: &CreateOrderRequest, books: &[Book]) -> AppResult<()> {
    request.validate().map_err(AppError::Validation)?;

    for line in &request.lines {
        let book = books
            .iter()
            .find(|b| b.id == line.book_id)
            .ok_or_else(|| {
                AppError::validation(format!("Libro {} no encontrado", line.book_id.value()))
            })?;
        if book.publisher_id != request.publisher_id {
            return Err(AppError::Conflict(format!(
                "El libro \"{}\" no pertenece a la editorial del pedido",
                book.name
            )));
        }
        if line.quantity > book.pending_units {
            return Err(AppError::Conflict(format!(
                "El libro \"{}\" solo tiene {} unidades pendientes",
                book.name, book.pending_units
            )));
        }
    }
    Ok(())
}

/// Receipt targets this order of this publisher and no line goes past its ordered units
pub fn check_receipt(request: &ReceiptRequest, order: &OrderDetail) -> AppResult<()> {
    if request.publisher_id != order.publisher_id {
        return Err(AppError::Conflict(format!(
            "El pedido {} no pertenece a la editorial {}",
            order.id.value(),
            request.publisher_id.value()
        )));
    }

    let mut seen = HashSet::new();
    for line in &request.lines {
        if !seen.insert(line.book_id) {
            return Err(AppError::validation(format!(
                "Libro {} repetido en la recepción",
                line.book_id.value()
            )));
        }
        let ordered = order
            .lines
            .iter()
            .find(|l| l.book_id == line.book_id)
            .ok_or_else(|| {
                AppError::validation(format!(
                    "El libro {} no forma parte del pedido",
                    line.book_id.value()
                ))
            })?;
        if line.quantity > ordered.outstanding() {
            return Err(AppError::Conflict(format!(
                "\"{}\": se reciben {} unidades pero solo faltan {}",
                ordered.name,
                line.quantity,
                ordered.outstanding()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use contracts::domain::a001_publisher::aggregate::PublisherId;
    use contracts::domain::a002_book::aggregate::BookId;
    use contracts::domain::a004_order::aggregate::{
        OrderId, OrderLineDetail, OrderLineRequest, OrderStatus, ReceivedLine,
    };

    fn book(id: i64, publisher: i64, pending: u32) -> Book {
        Book {
            id: BookId(id),
            name: format!("Libro {}", id),
            isbn: "9788467871325".into(),
            price: 10.0,
            publisher_id: PublisherId(publisher),
            active: true,
            pending_units: pending,
        }
    }

    fn order_request(lines: &[(i64, u32)]) -> CreateOrderRequest {
        CreateOrderRequest {
            publisher_id: PublisherId(1),
            lines: lines
                .iter()
                .map(|(id, q)| OrderLineRequest {
                    book_id: BookId(*id),
                    quantity: *q,
                })
                .collect(),
        }
    }

    #[test]
    fn test_order_within_pending_is_accepted() {
        let books = vec![book(1, 1, 5), book(2, 1, 2)];
        assert!(check_order(&order_request(&[(1, 5), (2, 1)]), &books).is_ok());
    }

    #[test]
    fn test_order_rejections() {
        let books = vec![book(1, 1, 5), book(3, 2, 4)];
        assert!(check_order(&order_request(&[(1, 6)]), &books).is_err());
        assert!(check_order(&order_request(&[(3, 1)]), &books).is_err());
        assert!(check_order(&order_request(&[(9, 1)]), &books).is_err());
        assert!(check_order(&order_request(&[(1, 0)]), &books).is_err());
        assert!(check_order(&order_request(&[]), &books).is_err());
    }

    fn detail() -> OrderDetail {
        OrderDetail {
            id: OrderId(8),
            publisher_id: PublisherId(1),
            date: "2024-09-10".into(),
            status: OrderStatus::PartiallyReceived,
            lines: vec![OrderLineDetail {
                book_id: BookId(1),
                ordered: 10,
                received: 4,
                name: "Libro 1".into(),
                isbn: "9788467871325".into(),
                price: 10.0,
            }],
        }
    }

    fn receipt(publisher: i64, lines: &[(i64, u32)]) -> ReceiptRequest {
        ReceiptRequest {
            publisher_id: PublisherId(publisher),
            order_id: OrderId(8),
            lines: lines
                .iter()
                .map(|(id, q)| ReceivedLine {
                    book_id: BookId(*id),
                    quantity: *q,
                })
                .collect(),
        }
    }

    #[test]
    fn test_receipt_bounded_by_outstanding() {
        assert!(check_receipt(&receipt(1, &[(1, 6)]), &detail()).is_ok());
        assert!(check_receipt(&receipt(1, &[(1, 0)]), &detail()).is_ok());
        assert!(check_receipt(&receipt(1, &[(1, 7)]), &detail()).is_err());
    }

    #[test]
    fn test_rule_violations_are_conflicts() {
        let books = vec![book(1, 1, 5), book(3, 2, 4)];
        let too_many = check_order(&order_request(&[(1, 6)]), &books).unwrap_err();
        assert_eq!(too_many.status_code(), StatusCode::CONFLICT);
        let other_publisher = check_order(&order_request(&[(3, 1)]), &books).unwrap_err();
        assert_eq!(other_publisher.status_code(), StatusCode::CONFLICT);
        let empty = check_order(&order_request(&[]), &books).unwrap_err();
        assert_eq!(empty.status_code(), StatusCode::BAD_REQUEST);

        let past_outstanding = check_receipt(&receipt(1, &[(1, 7)]), &detail()).unwrap_err();
        assert_eq!(past_outstanding.status_code(), StatusCode::CONFLICT);
        let wrong_publisher = check_receipt(&receipt(2, &[(1, 1)]), &detail()).unwrap_err();
        assert_eq!(wrong_publisher.status_code(), StatusCode::CONFLICT);
        let unknown_book = check_receipt(&receipt(1, &[(5, 1)]), &detail()).unwrap_err();
        assert_eq!(unknown_book.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_receipt_rejections() {
        assert!(check_receipt(&receipt(2, &[(1, 1)]), &detail()).is_err());
        assert!(check_receipt(&receipt(1, &[(5, 1)]), &detail()).is_err());
        assert!(check_receipt(&receipt(1, &[(1, 1), (1, 1)]), &detail()).is_err());
    }
}
