//! PostgreSQL link store tests.
//!
//! Run with a reachable `DATABASE_URL`:
//!
//! ```bash
//! cargo test --test repository_link -- --ignored
//! ```

mod common;

use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use short_links::domain::StoreError;
use short_links::domain::entities::NewLink;
use short_links::domain::repositories::LinkRepository;
use short_links::infrastructure::persistence::PgLinkRepository;
use short_links::routes::router;

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_create_link(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo
        .create(NewLink::new("test123", "https://example.com"))
        .await;

    assert!(result.is_ok());
    let link = result.unwrap();
    assert!(link.id > 0);
    assert_eq!(link.code, "test123");
    assert_eq!(link.original_url, "https://example.com");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_create_duplicate_is_conflict(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    repo.create(NewLink::new("dup", "https://example.com/a"))
        .await
        .unwrap();
    let result = repo
        .create(NewLink::new("dup", "https://example.com/b"))
        .await;

    match result {
        Err(StoreError::Conflict { constraint }) => {
            assert_eq!(constraint, "short_links_code_key");
        }
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_find_by_code(pool: PgPool) {
    sqlx::query("INSERT INTO short_links (code, original_url) VALUES ($1, $2)")
        .bind("abc123")
        .bind("https://example.com")
        .execute(&pool)
        .await
        .unwrap();

    let repo = PgLinkRepository::new(Arc::new(pool));
    let result = repo.find_by_code("abc123").await;

    assert!(result.is_ok());
    let link = result.unwrap();
    assert!(link.is_some());
    assert_eq!(link.unwrap().original_url, "https://example.com");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_find_by_code_not_found(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.find_by_code("notfound").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_list_newest_first(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    repo.create(NewLink::new("abc", "https://example.com/a"))
        .await
        .unwrap();
    repo.create(NewLink::new("xyz", "https://example.com/b"))
        .await
        .unwrap();

    let links = repo.list_newest_first().await.unwrap();

    let codes: Vec<&str> = links.iter().map(|l| l.code.as_str()).collect();
    assert_eq!(codes, vec!["xyz", "abc"]);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_health_check(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.health_check().await);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_redirect_through_postgres(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(router(state)).unwrap();

    sqlx::query("INSERT INTO short_links (code, original_url) VALUES ($1, $2)")
        .bind("pgcode")
        .bind("https://example.com/pg")
        .execute(&pool)
        .await
        .unwrap();

    let response = server.get("/pgcode").await;

    assert_eq!(response.status_code(), 301);
    assert_eq!(response.header("location"), "https://example.com/pg");
}
