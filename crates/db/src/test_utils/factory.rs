//! Row factories for seeding test data.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::entity::{author, book};

pub async fn create_author(db: &DatabaseConnection, name: &str) -> Result<author::Model, DbErr> {
    author::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_book(
    db: &DatabaseConnection,
    author_id: i32,
    name: &str,
) -> Result<book::Model, DbErr> {
    book::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        author_id: ActiveValue::Set(author_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
