//! Integration tests for the `PostgreSQL` record store.
//!
//! These tests require a live `PostgreSQL` instance. Point
//! `TEST_DATABASE_URL` at a scratch database and run:
//!
//! ```bash
//! cargo test -p baseserver-db -- --ignored
//! ```
//!
//! All tests are marked `#[ignore]` so they are skipped during normal
//! `cargo test` runs. Tests only assert on records they created themselves,
//! so they can run concurrently against a shared table.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::missing_panics_doc)]

use baseserver_db::{BaseStore, PgBaseStore, PostgresPool};
use baseserver_types::{BaseId, BasePatch, NewBase};

/// Fallback when `TEST_DATABASE_URL` is not set.
const DEFAULT_TEST_DATABASE_URL: &str = "postgresql://localhost/test-baseServerDb";

async fn setup_store() -> (PostgresPool, PgBaseStore) {
    let url = std::env::var("TEST_DATABASE_URL")
        .unwrap_or_else(|_| DEFAULT_TEST_DATABASE_URL.to_owned());
    let pool = PostgresPool::connect_url(&url)
        .await
        .expect("Failed to connect to PostgreSQL -- is TEST_DATABASE_URL reachable?");
    pool.run_migrations()
        .await
        .expect("Failed to run migrations");
    let store = PgBaseStore::new(pool.pool().clone());
    (pool, store)
}

fn new_base(name: &str, comment: &str) -> NewBase {
    NewBase {
        name: name.to_owned(),
        comment: comment.to_owned(),
    }
}

#[tokio::test]
#[ignore = "requires live PostgreSQL (TEST_DATABASE_URL)"]
async fn postgres_ping() {
    let (pool, store) = setup_store().await;
    store.ping().await.expect("ping failed");
    pool.close().await;
}

#[tokio::test]
#[ignore = "requires live PostgreSQL (TEST_DATABASE_URL)"]
async fn postgres_record_lifecycle() {
    let (pool, store) = setup_store().await;

    let created = store.insert(new_base("Ada", "hello")).await.unwrap();
    let fetched = store.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);

    let patch = BasePatch {
        name: None,
        comment: Some(String::from("updated")),
    };
    let updated = store.update(created.id, patch).await.unwrap().unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Ada");
    assert_eq!(updated.comment, "updated");

    // Empty patch reports existence without changing anything.
    let unchanged = store
        .update(created.id, BasePatch::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged, updated);

    assert!(store.delete(created.id).await.unwrap());
    assert!(!store.delete(created.id).await.unwrap());
    assert!(store.get(created.id).await.unwrap().is_none());

    pool.close().await;
}

#[tokio::test]
#[ignore = "requires live PostgreSQL (TEST_DATABASE_URL)"]
async fn postgres_list_reflects_creates_and_deletes_in_order() {
    let (pool, store) = setup_store().await;

    let a = store.insert(new_base("list-a", "1")).await.unwrap();
    let b = store.insert(new_base("list-b", "2")).await.unwrap();
    let c = store.insert(new_base("list-c", "3")).await.unwrap();
    assert!(store.delete(b.id).await.unwrap());

    let listed: Vec<BaseId> = store.list().await.unwrap().iter().map(|r| r.id).collect();
    let pos_a = listed.iter().position(|id| *id == a.id).unwrap();
    let pos_c = listed.iter().position(|id| *id == c.id).unwrap();
    assert!(pos_a < pos_c);
    assert!(!listed.contains(&b.id));

    store.delete(a.id).await.unwrap();
    store.delete(c.id).await.unwrap();
    pool.close().await;
}

#[tokio::test]
#[ignore = "requires live PostgreSQL (TEST_DATABASE_URL)"]
async fn postgres_update_unknown_id_returns_none() {
    let (pool, store) = setup_store().await;
    let patch = BasePatch {
        name: Some(String::from("ghost")),
        comment: None,
    };
    assert!(store.update(BaseId::new(), patch).await.unwrap().is_none());
    pool.close().await;
}
