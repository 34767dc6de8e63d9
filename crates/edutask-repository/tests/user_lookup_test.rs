//! Integration tests for `UserLookup` over the `user` collection.
//!
//! Requires Docker to be available on the system.

mod common;

use bson::doc;
use common::TestDatabase;
use edutask_core::EdutaskError;
use edutask_repository::UserLookup;

#[tokio::test]
async fn test_find_by_email() {
    let db = TestDatabase::new().await;
    let dao = db.dao("user");

    dao.create(doc! { "firstName": "Jane", "lastName": "Doe", "email": "jane.doe@gmail.com" })
        .await
        .expect("Failed to create user");
    dao.create(doc! { "firstName": "John", "lastName": "Doe", "email": "john.doe@gmail.com" })
        .await
        .expect("Failed to create user");

    let users = UserLookup::find(&dao, &doc! { "email": "jane.doe@gmail.com" })
        .await
        .expect("Lookup failed");

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].first_name, "Jane");
    assert!(users[0].id.is_some());
}

#[tokio::test]
async fn test_find_is_exact_match() {
    let db = TestDatabase::new().await;
    let dao = db.dao("user");

    dao.create(doc! { "email": "Jane.Doe@gmail.com" }).await.unwrap();

    let users = UserLookup::find(&dao, &doc! { "email": "jane.doe@gmail.com" })
        .await
        .unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_find_returns_every_duplicate() {
    let db = TestDatabase::new().await;
    let dao = db.dao("user");

    dao.create(doc! { "firstName": "First", "email": "dup@example.com" }).await.unwrap();
    dao.create(doc! { "firstName": "Second", "email": "dup@example.com" }).await.unwrap();

    let users = UserLookup::find(&dao, &doc! { "email": "dup@example.com" })
        .await
        .unwrap();
    assert_eq!(users.len(), 2);
}

#[tokio::test]
async fn test_user_without_email_is_rejected() {
    let db = TestDatabase::new().await;
    let dao = db.dao("user");

    let err = dao.create(doc! { "firstName": "Nobody" }).await.unwrap_err();
    assert!(matches!(err, EdutaskError::WriteRejected { .. }));
}
