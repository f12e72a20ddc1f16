use contracts::domain::a002_book::aggregate::Book;
use contracts::domain::a004_order::aggregate::{
    CreateOrderRequest, OrderDetail, OrderStatus, OrderSummary, ReceiptRequest,
};
use contracts::domain::common::AggregateId;

use super::{repository, rules};
use crate::domain::{a001_publisher, a002_book};
use crate::shared::api_response::{AppError, AppResult};
use crate::shared::format::today_iso;

pub async fn list_by_publisher(publisher_id: i64) -> AppResult<Vec<OrderSummary>> {
    a001_publisher::service::get_by_id(publisher_id).await?;
    Ok(repository::list_by_publisher(publisher_id).await?)
}

pub async fn get_detail(order_id: i64) -> AppResult<OrderDetail> {
    repository::get_detail(order_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Pedido {} no encontrado", order_id)))
}

/// Place an order with units pending for the publisher
pub async fn create(request: CreateOrderRequest) -> AppResult<i64> {
    a001_publisher::service::get_by_id(request.publisher_id.value()).await?;

    let ids: Vec<i64> = request.lines.iter().map(|l| l.book_id.value()).collect();
    let books: Vec<Book> = a002_book::repository::list_by_ids(&ids).await?;
    rules::check_order(&request, &books)?;

    match repository::create(&request, &today_iso()).await? {
        Ok(id) => {
            tracing::info!(
                "Order {} placed for publisher {}: {} lines, {} units",
                id,
                request.publisher_id.value(),
                request.lines.len(),
                request.total_units()
            );
            Ok(id)
        }
        Err(book_id) => Err(AppError::Conflict(format!(
            "Las unidades pendientes del libro {} han cambiado, recargue la lista",
            book_id.value()
        ))),
    }
}

/// Record received units; returns the new order status
pub async fn register_receipt(request: ReceiptRequest) -> AppResult<OrderStatus> {
    let order = get_detail(request.order_id.value()).await?;
    rules::check_receipt(&request, &order)?;

    match repository::apply_receipt(&request).await? {
        Ok(status) => {
            tracing::info!(
                "Receipt registered for order {}: {} -> {}",
                order.id.value(),
                order.status,
                status
            );
            Ok(status)
        }
        Err(book_id) => Err(AppError::Conflict(format!(
            "Las unidades recibidas del libro {} han cambiado, recargue el pedido",
            book_id.value()
        ))),
    }
}
