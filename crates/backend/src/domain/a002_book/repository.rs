use contracts::domain::a001_publisher::aggregate::PublisherId;
use contracts::domain::a002_book::aggregate::{Book, BookDto, BookId};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ConnectionTrait, DatabaseBackend, QueryOrder, Set, Statement};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a002_book")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub isbn: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub publisher_id: i64,
    pub active: bool,
    pub pending_units: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Book {
    fn from(m: Model) -> Self {
        Book {
            id: BookId(m.id),
            name: m.name,
            isbn: m.isbn,
            price: m.price,
            publisher_id: PublisherId(m.publisher_id),
            active: m.active,
            pending_units: m.pending_units.max(0) as u32,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Book>> {
    let items = Entity::find()
        .order_by_asc(Column::Name)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: i64) -> anyhow::Result<Option<Book>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn list_by_ids(ids: &[i64]) -> anyhow::Result<Vec<Book>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let items = Entity::find()
        .filter(Column::Id.is_in(ids.iter().copied()))
        .order_by_asc(Column::Name)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn list_pending_by_publisher(publisher_id: i64) -> anyhow::Result<Vec<Book>> {
    let items = Entity::find()
        .filter(Column::PublisherId.eq(publisher_id))
        .filter(Column::PendingUnits.gt(0))
        .order_by_asc(Column::Name)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn insert(dto: &BookDto, publisher_id: i64) -> anyhow::Result<i64> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(dto.name.trim().to_string()),
        isbn: Set(dto.isbn.trim().to_string()),
        price: Set(dto.price),
        publisher_id: Set(publisher_id),
        active: Set(dto.active),
        pending_units: Set(0),
    };
    let model = active.insert(conn()).await?;
    Ok(model.id)
}

/// Catalog fields only; pending units are driven by reservations and orders
pub async fn update(id: i64, dto: &BookDto, publisher_id: i64) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(id),
        name: Set(dto.name.trim().to_string()),
        isbn: Set(dto.isbn.trim().to_string()),
        price: Set(dto.price),
        publisher_id: Set(publisher_id),
        active: Set(dto.active),
        pending_units: NotSet,
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn set_active(id: i64, value: bool) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(id),
        active: Set(value),
        ..Default::default()
    };
    active.update(conn()).await?;
    Ok(())
}

/// One more unit reserved by a student
pub async fn add_pending_unit<C: ConnectionTrait>(db: &C, book_id: i64) -> anyhow::Result<()> {
    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "UPDATE a002_book SET pending_units = pending_units + 1 WHERE id = ?",
        [book_id.into()],
    ))
    .await?;
    Ok(())
}

/// Units moved into an order. Returns false when fewer than `units` were pending.
pub async fn take_pending_units<C: ConnectionTrait>(
    db: &C,
    book_id: i64,
    units: u32,
) -> anyhow::Result<bool> {
    let result = db
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "UPDATE a002_book SET pending_units = pending_units - ?
             WHERE id = ? AND pending_units >= ?",
            [(units as i64).into(), book_id.into(), (units as i64).into()],
        ))
        .await?;
    Ok(result.rows_affected() == 1)
}
