use contracts::domain::a001_publisher::aggregate::PublisherId;
use contracts::domain::a002_book::aggregate::BookId;
use contracts::domain::a004_order::aggregate::{
    CreateOrderRequest, OrderDetail, OrderId, OrderLineDetail, OrderStatus, OrderSummary,
    ReceiptRequest,
};
use contracts::domain::common::AggregateId;
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveValue::NotSet, ConnectionTrait, DatabaseBackend, FromQueryResult, Set, Statement,
    TransactionTrait,
};

use super::order_line;
use crate::domain::a002_book;
use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a004_order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub publisher_id: i64,
    /// "YYYY-MM-DD"
    pub date: String,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn parse_status(code: &str) -> OrderStatus {
    OrderStatus::parse(code).unwrap_or_else(|| {
        tracing::warn!("Unknown order status '{}' in database", code);
        OrderStatus::Pending
    })
}

#[derive(Debug, FromQueryResult)]
struct SummaryRow {
    id: i64,
    date: String,
    status: String,
    line_count: i64,
}

/// Orders of a publisher, newest first
pub async fn list_by_publisher(publisher_id: i64) -> anyhow::Result<Vec<OrderSummary>> {
    let rows = SummaryRow::find_by_statement(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        r#"
        SELECT o.id AS id, o.date AS date, o.status AS status, COUNT(l.id) AS line_count
        FROM a004_order o
        LEFT JOIN a004_order_line l ON l.order_id = o.id
        WHERE o.publisher_id = ?
        GROUP BY o.id, o.date, o.status
        ORDER BY o.date DESC, o.id DESC
        "#,
        [publisher_id.into()],
    ))
    .all(conn())
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| OrderSummary {
            id: OrderId(r.id),
            date: r.date,
            line_count: r.line_count as u32,
            status: parse_status(&r.status),
        })
        .collect())
}

#[derive(Debug, FromQueryResult)]
struct LineRow {
    book_id: i64,
    quantity: i32,
    received: i32,
    name: String,
    isbn: String,
    price: f64,
}

async fn load_lines<C: ConnectionTrait>(db: &C, order_id: i64) -> anyhow::Result<Vec<OrderLineDetail>> {
    let rows = LineRow::find_by_statement(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        r#"
        SELECT l.book_id AS book_id, l.quantity AS quantity, l.received AS received,
               b.name AS name, b.isbn AS isbn, b.price AS price
        FROM a004_order_line l
        JOIN a002_book b ON b.id = l.book_id
        WHERE l.order_id = ?
        ORDER BY l.id
        "#,
        [order_id.into()],
    ))
    .all(db)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| OrderLineDetail {
            book_id: BookId(r.book_id),
            ordered: r.quantity.max(0) as u32,
            received: r.received.max(0) as u32,
            name: r.name,
            isbn: r.isbn,
            price: r.price,
        })
        .collect())
}

pub async fn get_detail(order_id: i64) -> anyhow::Result<Option<OrderDetail>> {
    let Some(order) = Entity::find_by_id(order_id).one(conn()).await? else {
        return Ok(None);
    };
    let lines = load_lines(conn(), order_id).await?;
    Ok(Some(OrderDetail {
        id: OrderId(order.id),
        publisher_id: PublisherId(order.publisher_id),
        date: order.date,
        status: parse_status(&order.status),
        lines,
    }))
}

/// Store the order and move its units out of the books' pending counts.
/// All or nothing: a book without enough pending units aborts the whole order.
pub async fn create(request: &CreateOrderRequest, date: &str) -> anyhow::Result<Result<i64, BookId>> {
    create_with(conn(), request, date).await
}

async fn create_with<C>(
    db: &C,
    request: &CreateOrderRequest,
    date: &str,
) -> anyhow::Result<Result<i64, BookId>>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await?;

    let order = ActiveModel {
        id: NotSet,
        publisher_id: Set(request.publisher_id.value()),
        date: Set(date.to_string()),
        status: Set(OrderStatus::Pending.as_str().to_string()),
    }
    .insert(&txn)
    .await?;

    for line in &request.lines {
        if !a002_book::repository::take_pending_units(&txn, line.book_id.value(), line.quantity)
            .await?
        {
            txn.rollback().await?;
            return Ok(Err(line.book_id));
        }
        order_line::ActiveModel {
            id: NotSet,
            order_id: Set(order.id),
            book_id: Set(line.book_id.value()),
            quantity: Set(line.quantity as i32),
            received: Set(0),
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;
    Ok(Ok(order.id))
}

/// Add the received units to every line and store the recomputed status.
/// All or nothing: a line that would exceed its ordered quantity aborts the receipt.
pub async fn apply_receipt(request: &ReceiptRequest) -> anyhow::Result<Result<OrderStatus, BookId>> {
    apply_receipt_with(conn(), request).await
}

async fn apply_receipt_with<C>(
    db: &C,
    request: &ReceiptRequest,
) -> anyhow::Result<Result<OrderStatus, BookId>>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await?;
    let order_id = request.order_id.value();

    for line in request.lines.iter().filter(|l| l.quantity > 0) {
        let units = line.quantity as i64;
        let result = txn
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                "UPDATE a004_order_line SET received = received + ?
                 WHERE order_id = ? AND book_id = ? AND received + ? <= quantity",
                [
                    units.into(),
                    order_id.into(),
                    line.book_id.value().into(),
                    units.into(),
                ],
            ))
            .await?;
        if result.rows_affected() != 1 {
            txn.rollback().await?;
            return Ok(Err(line.book_id));
        }
    }

    let lines = load_lines(&txn, order_id).await?;
    let status = OrderStatus::from_lines(lines.iter().map(|l| (l.ordered, l.received)));
    ActiveModel {
        id: Set(order_id),
        status: Set(status.as_str().to_string()),
        ..Default::default()
    }
    .update(&txn)
    .await?;

    txn.commit().await?;
    Ok(Ok(status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::open_in_memory;
    use contracts::domain::a004_order::aggregate::{OrderLineRequest, ReceivedLine};
    use sea_orm::PaginatorTrait;

    async fn seed(db: &DatabaseConnection, books: &[(i64, i32)]) {
        db.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            "INSERT INTO a001_publisher (id, name) VALUES (1, 'Anaya')".to_string(),
        ))
        .await
        .unwrap();
        for (id, pending) in books {
            db.execute(Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                "INSERT INTO a002_book (id, name, isbn, price, publisher_id, pending_units)
                 VALUES (?, ?, '9788467871325', 12.5, 1, ?)",
                [(*id).into(), format!("Libro {}", id).into(), (*pending).into()],
            ))
            .await
            .unwrap();
        }
    }

    async fn pending_of(db: &DatabaseConnection, id: i64) -> i32 {
        a002_book::repository::Entity::find_by_id(id)
            .one(db)
            .await
            .unwrap()
            .unwrap()
            .pending_units
    }

    async fn stored_status(db: &DatabaseConnection, order_id: i64) -> String {
        Entity::find_by_id(order_id).one(db).await.unwrap().unwrap().status
    }

    fn order(lines: &[(i64, u32)]) -> CreateOrderRequest {
        CreateOrderRequest {
            publisher_id: PublisherId(1),
            lines: lines
                .iter()
                .map(|(id, q)| OrderLineRequest {
                    book_id: BookId(*id),
                    quantity: *q,
                })
                .collect(),
        }
    }

    fn receipt(order_id: i64, lines: &[(i64, u32)]) -> ReceiptRequest {
        ReceiptRequest {
            publisher_id: PublisherId(1),
            order_id: OrderId(order_id),
            lines: lines
                .iter()
                .map(|(id, q)| ReceivedLine {
                    book_id: BookId(*id),
                    quantity: *q,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_create_rolls_back_when_a_line_lacks_pending_units() {
        let db = open_in_memory().await.unwrap();
        seed(&db, &[(1, 5), (2, 1)]).await;

        let result = create_with(&db, &order(&[(1, 3), (2, 2)]), "2024-09-10")
            .await
            .unwrap();

        assert_eq!(result, Err(BookId(2)));
        assert_eq!(pending_of(&db, 1).await, 5);
        assert_eq!(pending_of(&db, 2).await, 1);
        assert_eq!(Entity::find().count(&db).await.unwrap(), 0);
        assert_eq!(order_line::Entity::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_moves_units_out_of_pending() {
        let db = open_in_memory().await.unwrap();
        seed(&db, &[(1, 5), (2, 2)]).await;

        let id = create_with(&db, &order(&[(1, 3), (2, 2)]), "2024-09-10")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(pending_of(&db, 1).await, 2);
        assert_eq!(pending_of(&db, 2).await, 0);
        assert_eq!(stored_status(&db, id).await, "pendiente");
        let lines = load_lines(&db, id).await.unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.received == 0));
    }

    #[tokio::test]
    async fn test_receipt_past_outstanding_changes_nothing() {
        let db = open_in_memory().await.unwrap();
        seed(&db, &[(1, 10), (2, 5)]).await;
        let id = create_with(&db, &order(&[(1, 10), (2, 5)]), "2024-09-10")
            .await
            .unwrap()
            .unwrap();

        let result = apply_receipt_with(&db, &receipt(id, &[(1, 4), (2, 6)]))
            .await
            .unwrap();

        assert_eq!(result, Err(BookId(2)));
        let lines = load_lines(&db, id).await.unwrap();
        assert!(lines.iter().all(|l| l.received == 0));
        assert_eq!(stored_status(&db, id).await, "pendiente");
    }

    #[tokio::test]
    async fn test_receipts_move_status_forward() {
        let db = open_in_memory().await.unwrap();
        seed(&db, &[(1, 10), (2, 5)]).await;
        let id = create_with(&db, &order(&[(1, 10), (2, 5)]), "2024-09-10")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored_status(&db, id).await, "pendiente");

        let first = apply_receipt_with(&db, &receipt(id, &[(1, 4), (2, 0)]))
            .await
            .unwrap();
        assert_eq!(first, Ok(OrderStatus::PartiallyReceived));
        assert_eq!(stored_status(&db, id).await, "medioPendiente");

        let second = apply_receipt_with(&db, &receipt(id, &[(1, 6), (2, 5)]))
            .await
            .unwrap();
        assert_eq!(second, Ok(OrderStatus::Completed));
        assert_eq!(stored_status(&db, id).await, "completado");

        let lines = load_lines(&db, id).await.unwrap();
        assert_eq!(lines[0].received, 10);
        assert_eq!(lines[1].received, 5);
    }
}
