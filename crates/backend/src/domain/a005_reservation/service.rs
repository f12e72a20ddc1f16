use contracts::domain::a005_reservation::aggregate::{CreateReservationDto, Reservation};
use contracts::domain::common::AggregateId;

use super::{repository, rules};
use crate::domain::{a003_course, a006_reservation_period};
use crate::shared::api_response::{AppError, AppResult};
use crate::shared::format::today_iso;

pub async fn list_all() -> AppResult<Vec<Reservation>> {
    Ok(repository::list_all().await?)
}

pub async fn get_by_id(id: i64) -> AppResult<Reservation> {
    repository::get_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Reserva {} no encontrada", id)))
}

/// Accepted only while the reservation period is open
pub async fn create(dto: CreateReservationDto) -> AppResult<i64> {
    let period = a006_reservation_period::service::find().await?;
    let today = chrono::Local::now().date_naive();
    a006_reservation_period::rules::check_open(period.as_ref(), today)?;

    dto.validate().map_err(AppError::Validation)?;
    if let Some(proof) = &dto.proof {
        let size = rules::check_proof(proof)?;
        tracing::debug!("Reservation proof of {} bytes", size);
    }

    let course_id = dto
        .course_id
        .ok_or_else(|| AppError::validation("Seleccione un curso"))?;
    a003_course::service::get_by_id(course_id)
        .await
        .map_err(|e| match e {
            AppError::EntityNotFound(msg) => AppError::Validation(msg),
            other => other,
        })?;
    let course_books = a003_course::repository::assigned_book_ids(course_id).await?;
    rules::check_books_in_course(&dto.book_ids, &course_books)?;

    let id = repository::create(&dto, course_id, &today_iso()).await?;
    tracing::info!(
        "Reservation {} created for {} ({} books)",
        id,
        dto.student_name.trim(),
        dto.book_ids.len()
    );
    Ok(id)
}

/// Flip the active flag; pending units are left as they are
pub async fn toggle_active(id: i64) -> AppResult<Reservation> {
    let current = get_by_id(id).await?;
    repository::set_active(id, !current.active).await?;
    get_by_id(id).await
}

/// Hand a reserved book out to the student
pub async fn deliver(id: i64, book_id: i64) -> AppResult<Reservation> {
    let current = get_by_id(id).await?;
    let line = current
        .lines
        .iter()
        .find(|l| l.book_id.value() == book_id)
        .ok_or_else(|| {
            AppError::not_found(format!("El libro {} no forma parte de la reserva {}", book_id, id))
        })?;
    if line.delivered {
        return Err(AppError::Conflict(format!(
            "\"{}\" ya fue entregado",
            line.name
        )));
    }
    if !repository::mark_delivered(id, book_id).await? {
        return Err(AppError::Conflict(format!("\"{}\" ya fue entregado", line.name)));
    }
    tracing::info!("Reservation {}: book {} delivered", id, book_id);
    get_by_id(id).await
}
