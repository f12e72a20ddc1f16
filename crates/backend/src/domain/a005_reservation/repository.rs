use contracts::domain::a002_book::aggregate::BookId;
use contracts::domain::a003_course::aggregate::CourseId;
use contracts::domain::a005_reservation::aggregate::{
    CreateReservationDto, Reservation, ReservationId, ReservationLine,
};
use contracts::domain::common::AggregateId;
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveValue::NotSet, DatabaseBackend, FromQueryResult, QueryOrder, Set, Statement,
    TransactionTrait,
};
use std::collections::HashMap;

use super::reservation_line;
use crate::domain::a002_book;
use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a005_reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_name: String,
    pub student_email: String,
    pub course_id: i64,
    pub date: String,
    pub active: bool,
    /// Payment receipt as a data URL
    pub proof: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

#[derive(Debug, FromQueryResult)]
struct LineRow {
    reservation_id: i64,
    book_id: i64,
    name: String,
    delivered: bool,
}

async fn load_lines(reservation_id: Option<i64>) -> anyhow::Result<HashMap<i64, Vec<ReservationLine>>> {
    let base = r#"
        SELECT l.reservation_id AS reservation_id, l.book_id AS book_id,
               b.name AS name, l.delivered AS delivered
        FROM a005_reservation_line l
        JOIN a002_book b ON b.id = l.book_id
    "#;
    let stmt = match reservation_id {
        Some(id) => Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            &format!("{} WHERE l.reservation_id = ? ORDER BY l.id", base),
            [id.into()],
        ),
        None => Statement::from_string(DatabaseBackend::Sqlite, format!("{} ORDER BY l.id", base)),
    };
    let rows = LineRow::find_by_statement(stmt).all(conn()).await?;

    let mut grouped: HashMap<i64, Vec<ReservationLine>> = HashMap::new();
    for r in rows {
        grouped.entry(r.reservation_id).or_default().push(ReservationLine {
            book_id: BookId(r.book_id),
            name: r.name,
            delivered: r.delivered,
        });
    }
    Ok(grouped)
}

fn to_aggregate(m: Model, lines: Vec<ReservationLine>) -> Reservation {
    Reservation {
        id: ReservationId(m.id),
        student_name: m.student_name,
        student_email: m.student_email,
        course_id: CourseId(m.course_id),
        date: m.date,
        active: m.active,
        lines,
        has_proof: m.proof.is_some(),
    }
}

/// All reservations, newest first
pub async fn list_all() -> anyhow::Result<Vec<Reservation>> {
    let models = Entity::find().order_by_desc(Column::Id).all(conn()).await?;
    let mut lines = load_lines(None).await?;
    Ok(models
        .into_iter()
        .map(|m| {
            let l = lines.remove(&m.id).unwrap_or_default();
            to_aggregate(m, l)
        })
        .collect())
}

pub async fn get_by_id(id: i64) -> anyhow::Result<Option<Reservation>> {
    let Some(model) = Entity::find_by_id(id).one(conn()).await? else {
        return Ok(None);
    };
    let mut lines = load_lines(Some(id)).await?;
    Ok(Some(to_aggregate(model, lines.remove(&id).unwrap_or_default())))
}

/// Store the reservation and add one pending unit to each reserved book
pub async fn create(dto: &CreateReservationDto, course_id: i64, date: &str) -> anyhow::Result<i64> {
    let txn = conn().begin().await?;

    let reservation = ActiveModel {
        id: NotSet,
        student_name: Set(dto.student_name.trim().to_string()),
        student_email: Set(dto.student_email.trim().to_string()),
        course_id: Set(course_id),
        date: Set(date.to_string()),
        active: Set(true),
        proof: Set(dto.proof.clone()),
    }
    .insert(&txn)
    .await?;

    for book_id in &dto.book_ids {
        reservation_line::ActiveModel {
            id: NotSet,
            reservation_id: Set(reservation.id),
            book_id: Set(book_id.value()),
            delivered: Set(false),
        }
        .insert(&txn)
        .await?;
        a002_book::repository::add_pending_unit(&txn, book_id.value()).await?;
    }

    txn.commit().await?;
    Ok(reservation.id)
}

pub async fn set_active(id: i64, value: bool) -> anyhow::Result<()> {
    ActiveModel {
        id: Set(id),
        active: Set(value),
        ..Default::default()
    }
    .update(conn())
    .await?;
    Ok(())
}

/// Mark the line delivered; false when it does not exist or was already delivered
pub async fn mark_delivered(reservation_id: i64, book_id: i64) -> anyhow::Result<bool> {
    let result = conn()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "UPDATE a005_reservation_line SET delivered = 1
             WHERE reservation_id = ? AND book_id = ? AND delivered = 0",
            [reservation_id.into(), book_id.into()],
        ))
        .await?;
    Ok(result.rows_affected() == 1)
}
