use sea_orm::DbErr;

use crate::model::CreateBookParams;
use crate::repository::{AuthorRepository, BookRepository};
use crate::test_utils::{factory, TestBuilder};

mod author;
mod book;
