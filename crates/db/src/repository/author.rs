use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryOrder,
};

use crate::entity::{self, author, book};
use crate::model::AuthorWithBooks;

pub struct AuthorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets an author by ID with their books loaded
    pub async fn get_by_id(&self, id: i32) -> Result<Option<AuthorWithBooks>, DbErr> {
        let Some(author) = entity::prelude::Author::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let books = author
            .find_related(entity::prelude::Book)
            .order_by_asc(book::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(AuthorWithBooks { author, books }))
    }

    /// Gets every author with their books loaded, ordered by ID
    pub async fn get_all(&self) -> Result<Vec<AuthorWithBooks>, DbErr> {
        let rows = entity::prelude::Author::find()
            .find_with_related(entity::prelude::Book)
            .order_by_asc(author::Column::Id)
            .order_by_asc(book::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(author, books)| AuthorWithBooks { author, books })
            .collect())
    }

    /// Inserts a new author and returns the stored row
    pub async fn create(&self, name: String) -> Result<author::Model, DbErr> {
        author::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Overwrites the name of an existing author
    pub async fn update(
        &self,
        author: author::Model,
        name: String,
    ) -> Result<author::Model, DbErr> {
        let mut active: author::ActiveModel = author.into();
        active.name = ActiveValue::Set(name);
        active.update(self.db).await
    }

    /// Deletes an author by ID, returning the number of rows removed
    ///
    /// Fails with a foreign key error while the author still owns books.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Author::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
