//! Integration tests for the JSON file store

use prdgen_catalog::builtin_catalog;
use prdgen_core::{AnswerValue, Complexity, PrdError, ProductContext, ProductType, SessionId};
use prdgen_engine::Session;
use prdgen_storage::{JsonFileStore, SessionStore};

fn session(seq: u32, name: &str) -> Session {
    let context =
        ProductContext::new(ProductType::MobileApp, Complexity::Moderate);
    Session::new(SessionId(seq), name, context).unwrap()
}

#[tokio::test]
async fn test_save_then_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("sessions"));

    let catalog = builtin_catalog().unwrap();
    let mut s = session(1, "Mobile Thing");
    s.record_answer(
        &catalog,
        "project_name",
        AnswerValue::Text("Mobile Thing".to_string()),
    )
    .unwrap();
    store.save(&s).await.unwrap();

    let loaded = store.load(SessionId(1)).await.unwrap();
    assert_eq!(loaded.id, SessionId(1));
    assert_eq!(loaded.name, "Mobile Thing");
    assert_eq!(loaded.answers().len(), 1);
    assert_eq!(loaded.tasks().len(), s.tasks().len());
    assert_eq!(loaded.status, s.status);
}

#[tokio::test]
async fn test_load_missing_session() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("sessions"));

    let err = store.load(SessionId(42)).await.unwrap_err();
    assert!(matches!(err, PrdError::SessionNotFound(_)));
}

#[tokio::test]
async fn test_list_skips_corrupt_files() {
    let dir = tempfile::tempdir().unwrap();
    let sessions_dir = dir.path().join("sessions");
    let store = JsonFileStore::new(&sessions_dir);

    store.save(&session(1, "Good")).await.unwrap();
    std::fs::write(sessions_dir.join("PRD-002.json"), "{ not json").unwrap();

    let summaries = store.list().await.unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].id, SessionId(1));
}

#[tokio::test]
async fn test_list_orders_by_most_recent() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("sessions"));

    store.save(&session(1, "Older")).await.unwrap();
    store.save(&session(2, "Newer")).await.unwrap();

    let summaries = store.list().await.unwrap();
    assert_eq!(summaries.len(), 2);
    assert!(summaries[0].updated_at >= summaries[1].updated_at);
}

#[tokio::test]
async fn test_delete_removes_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("sessions"));

    store.save(&session(1, "Doomed")).await.unwrap();
    store.delete(SessionId(1)).await.unwrap();

    assert!(matches!(
        store.load(SessionId(1)).await.unwrap_err(),
        PrdError::SessionNotFound(_)
    ));
    assert!(matches!(
        store.delete(SessionId(1)).await.unwrap_err(),
        PrdError::SessionNotFound(_)
    ));
}

#[tokio::test]
async fn test_next_id_skips_existing() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("sessions"));

    assert_eq!(store.next_id().await.unwrap(), SessionId(1));
    store.save(&session(5, "Gap")).await.unwrap();
    assert_eq!(store.next_id().await.unwrap(), SessionId(6));
}
