use super::*;

/// Tests fetching a book loads its author alongside it.
///
/// Expected: Ok(Some(BookWithAuthor)) with the author populated
#[tokio::test]
async fn gets_book_with_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await?;
    let author = factory::create_author(&test.db, "Frank Herbert").await?;
    let book = factory::create_book(&test.db, author.id, "Dune").await?;

    let repo = BookRepository::new(&test.db);
    let found = repo.get_by_id(book.id).await?.expect("book should exist");

    assert_eq!(found.book, book);
    assert_eq!(found.author, Some(author));

    Ok(())
}

/// Tests looking up an ID with no row behind it.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await?;

    let repo = BookRepository::new(&test.db);
    assert!(repo.get_by_id(999).await?.is_none());

    Ok(())
}

/// Tests listing returns every book in ID order, each with its author.
///
/// Expected: Ok(Vec) of length 3 ordered by ID
#[tokio::test]
async fn lists_all_books_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await?;
    let herbert = factory::create_author(&test.db, "Frank Herbert").await?;
    let le_guin = factory::create_author(&test.db, "Ursula K. Le Guin").await?;
    factory::create_book(&test.db, herbert.id, "Dune").await?;
    factory::create_book(&test.db, le_guin.id, "The Dispossessed").await?;
    factory::create_book(&test.db, herbert.id, "Dune Messiah").await?;

    let repo = BookRepository::new(&test.db);
    let books = repo.get_all().await?;

    let names: Vec<_> = books.iter().map(|b| b.book.name.as_str()).collect();
    assert_eq!(names, vec!["Dune", "The Dispossessed", "Dune Messiah"]);
    assert_eq!(books[1].author.as_ref().map(|a| a.id), Some(le_guin.id));
    assert!(books.windows(2).all(|w| w[0].book.id < w[1].book.id));

    Ok(())
}

/// Tests listing an empty table.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn lists_no_books_when_table_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await?;

    let repo = BookRepository::new(&test.db);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

/// Tests creating a book assigns a positive ID and persists the row.
///
/// Expected: Ok(Model) retrievable by the returned ID
#[tokio::test]
async fn creates_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await?;
    let author = factory::create_author(&test.db, "Frank Herbert").await?;

    let repo = BookRepository::new(&test.db);
    let created = repo
        .create(CreateBookParams {
            name: "Dune".to_string(),
            author_id: author.id,
        })
        .await?;

    assert!(created.id > 0);
    assert_eq!(created.name, "Dune");
    assert_eq!(created.author_id, author.id);

    let stored = repo.get_by_id(created.id).await?.expect("book should exist");
    assert_eq!(stored.book, created);

    Ok(())
}

/// Tests the foreign key rejects a book whose author does not exist.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_book_for_missing_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await?;

    let repo = BookRepository::new(&test.db);
    let result = repo
        .create(CreateBookParams {
            name: "Orphan".to_string(),
            author_id: 42,
        })
        .await;

    assert!(result.is_err());
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

/// Tests updating only overwrites the name.
///
/// Expected: Ok(Model) with new name, same ID and author
#[tokio::test]
async fn updates_book_name_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await?;
    let author = factory::create_author(&test.db, "Frank Herbert").await?;
    let book = factory::create_book(&test.db, author.id, "Dune").await?;

    let repo = BookRepository::new(&test.db);
    let updated = repo.update(book.clone(), "Children of Dune".to_string()).await?;

    assert_eq!(updated.id, book.id);
    assert_eq!(updated.author_id, author.id);
    assert_eq!(updated.name, "Children of Dune");

    let stored = repo.get_by_id(book.id).await?.expect("book should exist");
    assert_eq!(stored.book.name, "Children of Dune");

    Ok(())
}

/// Tests deleting removes the row and a second delete affects nothing.
///
/// Expected: Ok(1) then Ok(0)
#[tokio::test]
async fn deletes_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await?;
    let author = factory::create_author(&test.db, "Frank Herbert").await?;
    let book = factory::create_book(&test.db, author.id, "Dune").await?;

    let repo = BookRepository::new(&test.db);
    assert_eq!(repo.delete(book.id).await?, 1);
    assert!(repo.get_by_id(book.id).await?.is_none());
    assert_eq!(repo.delete(book.id).await?, 0);

    Ok(())
}
