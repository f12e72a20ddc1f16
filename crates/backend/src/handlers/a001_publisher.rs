use axum::extract::{Json, Path};
use contracts::domain::a001_publisher::aggregate::{
    Publisher, PublisherDto, PublisherWithOrders, PublisherWithPending,
};
use contracts::domain::a002_book::aggregate::Book;
use contracts::shared::envelope::CreatedId;

use crate::domain::a001_publisher;
use crate::shared::api_response::{ok, ok_with_message, ApiResult};

/// GET /crud/editoriales
pub async fn list_all() -> ApiResult<Vec<Publisher>> {
    ok(a001_publisher::service::list_all().await?)
}

/// GET /crud/editoriales/:id
pub async fn get_by_id(Path(id): Path<i64>) -> ApiResult<Publisher> {
    ok(a001_publisher::service::get_by_id(id).await?)
}

/// POST /crud/editoriales
pub async fn upsert(Json(dto): Json<PublisherDto>) -> ApiResult<CreatedId> {
    let is_new = dto.id.is_none();
    let id = a001_publisher::service::upsert(dto).await?;
    let message = if is_new {
        "Editorial creada"
    } else {
        "Editorial actualizada"
    };
    ok_with_message(CreatedId { id }, message)
}

/// PUT /crud/editoriales/:id/estado
pub async fn toggle_active(Path(id): Path<i64>) -> ApiResult<Publisher> {
    ok(a001_publisher::service::toggle_active(id).await?)
}

/// GET /crud/editoriales-con-pedidos
pub async fn list_with_orders() -> ApiResult<Vec<PublisherWithOrders>> {
    ok(a001_publisher::service::list_with_orders().await?)
}

/// GET /crud/editoriales-con-pendientes
pub async fn list_with_pending() -> ApiResult<Vec<PublisherWithPending>> {
    ok(a001_publisher::service::list_with_pending().await?)
}

/// GET /crud/editoriales/:id/libros-pendientes
pub async fn pending_books(Path(id): Path<i64>) -> ApiResult<Vec<Book>> {
    ok(a001_publisher::service::pending_books(id).await?)
}
