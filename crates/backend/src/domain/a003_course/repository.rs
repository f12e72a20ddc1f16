use contracts::domain::a003_course::aggregate::{Course, CourseDto, CourseId};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, QueryOrder, QuerySelect, Set};

use super::course_book;
use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a003_course")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub level: String,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Course {
    fn from(m: Model) -> Self {
        Course {
            id: CourseId(m.id),
            name: m.name,
            level: m.level,
            active: m.active,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Course>> {
    let items = Entity::find()
        .order_by_asc(Column::Level)
        .order_by_asc(Column::Name)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: i64) -> anyhow::Result<Option<Course>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(dto: &CourseDto) -> anyhow::Result<i64> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(dto.name.trim().to_string()),
        level: Set(dto.level.trim().to_string()),
        active: Set(dto.active),
    };
    let model = active.insert(conn()).await?;
    Ok(model.id)
}

pub async fn update(id: i64, dto: &CourseDto) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(id),
        name: Set(dto.name.trim().to_string()),
        level: Set(dto.level.trim().to_string()),
        active: Set(dto.active),
    };
    active.update(conn()).await?;
    Ok(())
}

/// Ids of the books assigned to the course
pub async fn assigned_book_ids(course_id: i64) -> anyhow::Result<Vec<i64>> {
    let ids = course_book::Entity::find()
        .select_only()
        .column(course_book::Column::BookId)
        .filter(course_book::Column::CourseId.eq(course_id))
        .into_tuple::<i64>()
        .all(conn())
        .await?;
    Ok(ids)
}

pub async fn is_assigned(course_id: i64, book_id: i64) -> anyhow::Result<bool> {
    let found = course_book::Entity::find_by_id((course_id, book_id))
        .one(conn())
        .await?;
    Ok(found.is_some())
}

pub async fn assign(course_id: i64, book_id: i64) -> anyhow::Result<()> {
    let active = course_book::ActiveModel {
        course_id: Set(course_id),
        book_id: Set(book_id),
    };
    course_book::Entity::insert(active).exec(conn()).await?;
    Ok(())
}

/// Returns false when the book was not assigned
pub async fn unassign(course_id: i64, book_id: i64) -> anyhow::Result<bool> {
    let result = course_book::Entity::delete_many()
        .filter(course_book::Column::CourseId.eq(course_id))
        .filter(course_book::Column::BookId.eq(book_id))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
