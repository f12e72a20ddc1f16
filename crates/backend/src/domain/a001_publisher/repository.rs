use contracts::domain::a001_publisher::aggregate::{
    Publisher, PublisherDto, PublisherId, PublisherWithOrders, PublisherWithPending,
};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseBackend, FromQueryResult, QueryOrder, Set, Statement};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a001_publisher")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    /// JSON array
    pub emails: String,
    /// JSON array
    pub phones: String,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn decode_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

fn encode_list(list: &[String]) -> String {
    serde_json::to_string(list).unwrap_or_else(|_| "[]".to_string())
}

impl From<Model> for Publisher {
    fn from(m: Model) -> Self {
        Publisher {
            id: PublisherId(m.id),
            name: m.name,
            emails: decode_list(&m.emails),
            phones: decode_list(&m.phones),
            active: m.active,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Publisher>> {
    let items = Entity::find()
        .order_by_asc(Column::Name)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: i64) -> anyhow::Result<Option<Publisher>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

/// Insert a normalized DTO, returns the new id
pub async fn insert(dto: &PublisherDto) -> anyhow::Result<i64> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(dto.name.clone()),
        emails: Set(encode_list(&dto.emails)),
        phones: Set(encode_list(&dto.phones)),
        active: Set(dto.active),
    };
    let model = active.insert(conn()).await?;
    Ok(model.id)
}

pub async fn update(id: i64, dto: &PublisherDto) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(id),
        name: Set(dto.name.clone()),
        emails: Set(encode_list(&dto.emails)),
        phones: Set(encode_list(&dto.phones)),
        active: Set(dto.active),
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

#[derive(Debug, FromQueryResult)]
struct CountRow {
    id: i64,
    name: String,
    total: i64,
}

async fn counted(sql: &str) -> anyhow::Result<Vec<CountRow>> {
    let rows = CountRow::find_by_statement(Statement::from_string(
        DatabaseBackend::Sqlite,
        sql.to_string(),
    ))
    .all(conn())
    .await?;
    Ok(rows)
}

/// Publishers with at least one placed order
pub async fn list_with_orders() -> anyhow::Result<Vec<PublisherWithOrders>> {
    let rows = counted(
        r#"
        SELECT p.id AS id, p.name AS name, COUNT(o.id) AS total
        FROM a001_publisher p
        JOIN a004_order o ON o.publisher_id = p.id
        GROUP BY p.id, p.name
        ORDER BY p.name
        "#,
    )
    .await?;
    Ok(rows
        .into_iter()
        .map(|r| PublisherWithOrders {
            id: PublisherId(r.id),
            name: r.name,
            order_count: r.total as u32,
        })
        .collect())
}

/// Publishers with at least one book whose units are pending order
pub async fn list_with_pending() -> anyhow::Result<Vec<PublisherWithPending>> {
    let rows = counted(
        r#"
        SELECT p.id AS id, p.name AS name, COUNT(b.id) AS total
        FROM a001_publisher p
        JOIN a002_book b ON b.publisher_id = p.id
        WHERE b.pending_units > 0
        GROUP BY p.id, p.name
        ORDER BY p.name
        "#,
    )
    .await?;
    Ok(rows
        .into_iter()
        .map(|r| PublisherWithPending {
            id: PublisherId(r.id),
            name: r.name,
            pending_books: r.total as u32,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_lists_roundtrip_through_json_column() {
        let list = vec!["a@b.es".to_string(), "c@d.es".to_string()];
        assert_eq!(decode_list(&encode_list(&list)), list);
        assert!(decode_list("not json").is_empty());
    }
}
