use axum::extract::{Json, Path};
use contracts::domain::a004_order::aggregate::{
    CreateOrderRequest, OrderDetail, OrderStatus, OrderSummary, ReceiptRequest,
};
use contracts::shared::envelope::CreatedId;

use crate::domain::a004_order;
use crate::shared::api_response::{ok, ok_with_message, ApiResult};

/// GET /pedidos/editoriales/:id/pedidos
pub async fn list_by_publisher(Path(publisher_id): Path<i64>) -> ApiResult<Vec<OrderSummary>> {
    ok(a004_order::service::list_by_publisher(publisher_id).await?)
}

/// GET /pedidos/:id
pub async fn get_detail(Path(id): Path<i64>) -> ApiResult<OrderDetail> {
    ok(a004_order::service::get_detail(id).await?)
}

/// POST /pedidos/add
pub async fn create(Json(request): Json<CreateOrderRequest>) -> ApiResult<CreatedId> {
    let id = a004_order::service::create(request).await?;
    ok_with_message(CreatedId { id }, "Pedido realizado")
}

/// PUT /pedidos/unidades-recibidas
pub async fn register_receipt(Json(request): Json<ReceiptRequest>) -> ApiResult<OrderStatus> {
    let status = a004_order::service::register_receipt(request).await?;
    ok_with_message(status, format!("Pedido {}", status.label().to_lowercase()))
}
