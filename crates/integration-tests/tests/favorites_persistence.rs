//! Favorites written to disk and restored by a later process.

#![allow(clippy::unwrap_used)]

use sneaker_shelf::{FAVORITES_KEY, FavoritesStore, FileStore, KeyValueStore, ToggleOutcome};
use sneaker_shelf_core::ProductId;
use sneaker_shelf_integration_tests::{data_dir, file_shelf, ids};

#[tokio::test]
async fn test_favorites_survive_restart() {
    let dir = data_dir().unwrap();

    {
        let mut shelf = file_shelf(dir.path()).await.unwrap();
        assert_eq!(shelf.toggle_favorite(&"3".into()), ToggleOutcome::Added);
        assert_eq!(shelf.toggle_favorite(&"1".into()), ToggleOutcome::Added);
        assert_eq!(shelf.toggle_favorite(&"7".into()), ToggleOutcome::Added);
        shelf.flush().await;
    }

    let shelf = file_shelf(dir.path()).await.unwrap();
    assert_eq!(shelf.favorites().ids(), ids(&["3", "1", "7"]).as_slice());
    assert!(shelf.is_favorite(&"1".into()));
    assert!(!shelf.is_favorite(&"2".into()));
}

#[tokio::test]
async fn test_persisted_value_is_json_array() {
    let dir = data_dir().unwrap();

    let mut store = FavoritesStore::open(FileStore::new(dir.path())).await;
    store.toggle(&"5".into());
    store.toggle(&"12".into());
    store.flush().await;

    let raw = std::fs::read_to_string(dir.path().join("favorites.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value, serde_json::json!(["5", "12"]));
}

#[tokio::test]
async fn test_double_toggle_persists_empty_set() {
    let dir = data_dir().unwrap();

    {
        let mut store = FavoritesStore::open(FileStore::new(dir.path())).await;
        store.toggle(&"4".into());
        store.toggle(&"4".into());
        store.flush().await;
    }

    let store = FavoritesStore::open(FileStore::new(dir.path())).await;
    assert!(store.is_empty());
    let raw = FileStore::new(dir.path()).get(FAVORITES_KEY).await.unwrap();
    assert_eq!(raw.as_deref(), Some("[]"));
}

#[tokio::test]
async fn test_numeric_ids_on_disk_are_accepted() {
    let dir = data_dir().unwrap();
    let files = FileStore::new(dir.path());
    files.set(FAVORITES_KEY, "[2, \"9\", 2]".to_string()).await.unwrap();

    let store = FavoritesStore::open(files).await;
    assert_eq!(store.ids(), ids(&["2", "9"]).as_slice());
}

#[tokio::test]
async fn test_malformed_file_starts_empty_and_recovers() {
    let dir = data_dir().unwrap();
    std::fs::write(dir.path().join("favorites.json"), "{not json").unwrap();

    let mut shelf = file_shelf(dir.path()).await.unwrap();
    assert!(shelf.favorites().is_empty());

    shelf.toggle_favorite(&"8".into());
    shelf.flush().await;

    let restored = file_shelf(dir.path()).await.unwrap();
    assert_eq!(restored.favorites().ids(), ids(&["8"]).as_slice());
}

#[tokio::test]
async fn test_stale_favorites_are_hidden_not_purged() {
    let dir = data_dir().unwrap();
    std::fs::write(dir.path().join("favorites.json"), r#"["404","6"]"#).unwrap();

    let mut shelf = file_shelf(dir.path()).await.unwrap();
    let view: Vec<&ProductId> = shelf
        .favorites_view(&Default::default())
        .into_iter()
        .map(|product| &product.id)
        .collect();
    assert_eq!(view, vec![&ProductId::from("6")]);
    assert_eq!(shelf.favorites().len(), 2);

    // Adding another favorite keeps the stale one on disk
    shelf.toggle_favorite(&"10".into());
    shelf.flush().await;
    let restored = file_shelf(dir.path()).await.unwrap();
    assert_eq!(restored.favorites().ids(), ids(&["404", "6", "10"]).as_slice());
}

#[tokio::test]
async fn test_last_toggle_wins_on_disk() {
    let dir = data_dir().unwrap();

    let mut store = FavoritesStore::open(FileStore::new(dir.path())).await;
    for _ in 0..5 {
        store.toggle(&"1".into());
    }
    store.toggle(&"2".into());
    store.flush().await;

    let restored = FavoritesStore::open(FileStore::new(dir.path())).await;
    assert_eq!(restored.ids(), ids(&["1", "2"]).as_slice());
}
