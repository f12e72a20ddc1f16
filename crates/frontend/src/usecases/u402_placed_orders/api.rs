use contracts::domain::a001_publisher::aggregate::PublisherWithOrders;
use contracts::domain::a004_order::aggregate::OrderSummary;
use contracts::shared::envelope::ApiError;

use crate::shared::api_utils;

pub async fn fetch_publishers_with_orders() -> Result<Vec<PublisherWithOrders>, ApiError> {
    api_utils::get("/crud/editoriales-con-pedidos").await
}

pub async fn fetch_orders(publisher_id: i64) -> Result<Vec<OrderSummary>, ApiError> {
    api_utils::get(&format!("/pedidos/editoriales/{}/pedidos", publisher_id)).await
}
