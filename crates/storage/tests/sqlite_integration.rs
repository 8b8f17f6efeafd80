use storage::KeyValueStore;
use storage::repository::Storage;
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_roundtrip_overwrites_values() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.get("malaab.points").await.unwrap(), None);

    repo.set("malaab.points", "10").await.unwrap();
    repo.set("malaab.points", "20").await.unwrap();
    repo.set("malaab.history", "{\"fill_blank\":[]}").await.unwrap();

    assert_eq!(
        repo.get("malaab.points").await.unwrap().as_deref(),
        Some("20")
    );
    assert_eq!(
        repo.get("malaab.history").await.unwrap().as_deref(),
        Some("{\"fill_blank\":[]}")
    );
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.set("key", "value").await.unwrap();
    repo.migrate().await.expect("second migrate");
    assert_eq!(repo.get("key").await.unwrap().as_deref(), Some("value"));
}

#[tokio::test]
async fn storage_builder_exposes_kv() {
    let storage = Storage::sqlite("sqlite:file:memdb_kv_storage?mode=memory&cache=shared")
        .await
        .expect("storage");
    storage.kv.set("k", "v").await.unwrap();
    assert_eq!(storage.kv.get("k").await.unwrap().as_deref(), Some("v"));
}
