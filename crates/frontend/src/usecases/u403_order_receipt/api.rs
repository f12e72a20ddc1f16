use contracts::domain::a004_order::aggregate::{OrderDetail, OrderStatus, ReceiptRequest};
use contracts::shared::envelope::ApiError;

use crate::shared::api_utils;

pub async fn fetch_detail(order_id: i64) -> Result<OrderDetail, ApiError> {
    api_utils::get(&format!("/pedidos/{}", order_id)).await
}

/// Store the units received in this pass; returns the new status of the order
pub async fn register_receipt(request: &ReceiptRequest) -> Result<OrderStatus, ApiError> {
    api_utils::put("/pedidos/unidades-recibidas", request).await
}
