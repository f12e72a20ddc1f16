use chrono::NaiveDate;
use contracts::domain::a006_reservation_period::aggregate::ReservationPeriod;
use sea_orm::entity::prelude::*;
use sea_orm::{DatabaseBackend, Statement};

use crate::shared::data::db::get_connection;

/// Single row (id = 1)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a006_reservation_period")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

const PERIOD_ROW: i64 = 1;
const DATE_FORMAT: &str = "%Y-%m-%d";

pub async fn get() -> anyhow::Result<Option<ReservationPeriod>> {
    let Some(row) = Entity::find_by_id(PERIOD_ROW).one(get_connection()).await? else {
        return Ok(None);
    };
    let start = NaiveDate::parse_from_str(&row.start_date, DATE_FORMAT)?;
    let end = NaiveDate::parse_from_str(&row.end_date, DATE_FORMAT)?;
    Ok(Some(ReservationPeriod::new(start, end)))
}

pub async fn save(period: &ReservationPeriod) -> anyhow::Result<()> {
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT OR REPLACE INTO a006_reservation_period (id, start_date, end_date) VALUES (?, ?, ?)",
            [
                PERIOD_ROW.into(),
                period.start.format(DATE_FORMAT).to_string().into(),
                period.end.format(DATE_FORMAT).to_string().into(),
            ],
        ))
        .await?;
    Ok(())
}
