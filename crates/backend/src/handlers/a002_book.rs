use axum::extract::{Json, Path};
use contracts::domain::a002_book::aggregate::{Book, BookDto};
use contracts::shared::envelope::CreatedId;

use crate::domain::a002_book;
use crate::shared::api_response::{ok, ok_with_message, ApiResult};

/// GET /crud/libros
pub async fn list_all() -> ApiResult<Vec<Book>> {
    ok(a002_book::service::list_all().await?)
}

/// POST /crud/libros
pub async fn upsert(Json(dto): Json<BookDto>) -> ApiResult<CreatedId> {
    let is_new = dto.id.is_none();
    let id = a002_book::service::upsert(dto).await?;
    ok_with_message(
        CreatedId { id },
        if is_new { "Libro creado" } else { "Libro actualizado" },
    )
}

/// PUT /crud/libros/:id/estado
pub async fn toggle_active(Path(id): Path<i64>) -> ApiResult<Book> {
    ok(a002_book::service::toggle_active(id).await?)
}
