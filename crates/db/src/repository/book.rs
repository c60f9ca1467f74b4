use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::entity::{self, book};
use crate::model::{BookWithAuthor, CreateBookParams};

pub struct BookRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a book by ID with its author loaded
    pub async fn get_by_id(&self, id: i32) -> Result<Option<BookWithAuthor>, DbErr> {
        let result = entity::prelude::Book::find_by_id(id)
            .find_also_related(entity::prelude::Author)
            .one(self.db)
            .await?;

        Ok(result.map(|(book, author)| BookWithAuthor { book, author }))
    }

    /// Gets every book with its author loaded, ordered by ID
    pub async fn get_all(&self) -> Result<Vec<BookWithAuthor>, DbErr> {
        let rows = entity::prelude::Book::find()
            .find_also_related(entity::prelude::Author)
            .order_by_asc(book::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(book, author)| BookWithAuthor { book, author })
            .collect())
    }

    /// Inserts a new book and returns the stored row
    pub async fn create(&self, params: CreateBookParams) -> Result<book::Model, DbErr> {
        book::ActiveModel {
            name: ActiveValue::Set(params.name),
            author_id: ActiveValue::Set(params.author_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Overwrites the name of an existing book; ID and author are left untouched
    pub async fn update(&self, book: book::Model, name: String) -> Result<book::Model, DbErr> {
        let mut active: book::ActiveModel = book.into();
        active.name = ActiveValue::Set(name);
        active.update(self.db).await
    }

    /// Deletes a book by ID, returning the number of rows removed
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Book::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected)
    }
}
