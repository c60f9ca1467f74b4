use super::*;

/// Tests fetching an author loads the books they own.
///
/// Expected: Ok(Some(AuthorWithBooks)) with books in ID order
#[tokio::test]
async fn gets_author_with_books() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await?;
    let herbert = factory::create_author(&test.db, "Frank Herbert").await?;
    let other = factory::create_author(&test.db, "Ursula K. Le Guin").await?;
    let dune = factory::create_book(&test.db, herbert.id, "Dune").await?;
    factory::create_book(&test.db, other.id, "The Lathe of Heaven").await?;
    let messiah = factory::create_book(&test.db, herbert.id, "Dune Messiah").await?;

    let repo = AuthorRepository::new(&test.db);
    let found = repo.get_by_id(herbert.id).await?.expect("author should exist");

    assert_eq!(found.author, herbert);
    assert_eq!(found.books, vec![dune, messiah]);

    Ok(())
}

/// Tests looking up an ID with no row behind it.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await?;

    let repo = AuthorRepository::new(&test.db);
    assert!(repo.get_by_id(7).await?.is_none());

    Ok(())
}

/// Tests listing includes authors without books.
///
/// Expected: Ok(Vec) where the second author has an empty book list
#[tokio::test]
async fn lists_authors_with_their_books() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await?;
    let herbert = factory::create_author(&test.db, "Frank Herbert").await?;
    let le_guin = factory::create_author(&test.db, "Ursula K. Le Guin").await?;
    factory::create_book(&test.db, herbert.id, "Dune").await?;

    let repo = AuthorRepository::new(&test.db);
    let authors = repo.get_all().await?;

    assert_eq!(authors.len(), 2);
    assert_eq!(authors[0].author, herbert);
    assert_eq!(authors[0].books.len(), 1);
    assert_eq!(authors[1].author, le_guin);
    assert!(authors[1].books.is_empty());

    Ok(())
}

/// Tests creating and renaming an author.
///
/// Expected: Ok(Model) with positive ID, then the new name persisted
#[tokio::test]
async fn creates_and_updates_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await?;

    let repo = AuthorRepository::new(&test.db);
    let created = repo.create("Herbert".to_string()).await?;
    assert!(created.id > 0);

    let updated = repo.update(created.clone(), "Frank Herbert".to_string()).await?;
    assert_eq!(updated.id, created.id);

    let stored = repo.get_by_id(created.id).await?.expect("author should exist");
    assert_eq!(stored.author.name, "Frank Herbert");

    Ok(())
}

/// Tests an author who still owns books cannot be deleted.
///
/// Expected: Err(DbErr) and the author row is kept
#[tokio::test]
async fn refuses_to_delete_author_with_books() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await?;
    let author = factory::create_author(&test.db, "Frank Herbert").await?;
    factory::create_book(&test.db, author.id, "Dune").await?;

    let repo = AuthorRepository::new(&test.db);
    assert!(repo.delete(author.id).await.is_err());
    assert!(repo.get_by_id(author.id).await?.is_some());

    Ok(())
}

/// Tests deleting an author without books.
///
/// Expected: Ok(1) then Ok(0)
#[tokio::test]
async fn deletes_author_without_books() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await?;
    let author = factory::create_author(&test.db, "Frank Herbert").await?;

    let repo = AuthorRepository::new(&test.db);
    assert_eq!(repo.delete(author.id).await?, 1);
    assert_eq!(repo.delete(author.id).await?, 0);

    Ok(())
}
