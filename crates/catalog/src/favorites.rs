//! Favorite product IDs with asynchronous persistence.
//!
//! The store keeps the set in memory, in insertion order, and mirrors every
//! change to a [`KeyValueStore`] under [`FAVORITES_KEY`] as a JSON array.
//!
//! # Lifecycle
//!
//! 1. [`FavoritesStore::new`] creates an empty, unloaded store
//! 2. [`FavoritesStore::load`] reads the persisted list once and spawns the
//!    background writer
//! 3. Each [`FavoritesStore::toggle`] updates memory immediately and queues a
//!    full rewrite of the persisted list
//!
//! Storage failures never reach the caller: a failed load starts from an
//! empty set, a failed write is logged and dropped.

use std::collections::HashSet;
use std::sync::Arc;

use sneaker_shelf_core::ProductId;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

use crate::storage::KeyValueStore;

/// Storage key holding the serialized favorites list.
pub const FAVORITES_KEY: &str = "favorites";

/// Messages handled by the background writer, in order.
#[derive(Debug)]
enum PersistCommand {
    Write(Vec<ProductId>),
    Flush(oneshot::Sender<()>),
}

/// The set of favorite product IDs.
///
/// Owned by the front end and passed explicitly to whatever needs favorite
/// state. Requires a Tokio runtime from [`load`](Self::load) onwards.
#[derive(Debug)]
pub struct FavoritesStore<S> {
    ids: Vec<ProductId>,
    storage: Arc<S>,
    writer: Option<mpsc::UnboundedSender<PersistCommand>>,
    loaded: bool,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Create an empty store that has not read from `storage` yet.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self {
            ids: Vec::new(),
            storage: Arc::new(storage),
            writer: None,
            loaded: false,
        }
    }

    /// Create a store and load it in one step.
    pub async fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.load().await;
        store
    }

    /// Read the persisted list, replacing the in-memory set.
    ///
    /// A missing value yields an empty set. Read and parse failures are
    /// logged and also yield an empty set. Duplicate IDs keep their first
    /// position.
    #[instrument(skip(self))]
    pub async fn load(&mut self) {
        self.ids = match self.storage.get(FAVORITES_KEY).await {
            Ok(Some(raw)) if raw.trim().is_empty() => Vec::new(),
            Ok(Some(raw)) => match serde_json::from_str::<Vec<ProductId>>(&raw) {
                Ok(ids) => dedup_in_order(ids),
                Err(e) => {
                    warn!(error = %e, "Stored favorites are malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!("No stored favorites");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "Failed to read favorites, starting empty");
                Vec::new()
            }
        };

        if self.writer.is_none() {
            self.writer = Some(spawn_writer(Arc::clone(&self.storage)));
        }
        self.loaded = true;
        info!(count = self.ids.len(), "Favorites loaded");
    }

    /// Whether [`load`](Self::load) has completed.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Flip membership of `id` and queue a persist of the whole set.
    ///
    /// Returns `true` if `id` is a favorite afterwards. Before the store is
    /// loaded only memory changes, and the pending load will overwrite it.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        let now_favorite = if let Some(pos) = self.ids.iter().position(|fav| fav == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.clone());
            true
        };
        debug!(%id, now_favorite, "Toggled favorite");

        self.persist();
        now_favorite
    }

    /// Whether `id` is currently a favorite.
    #[must_use]
    pub fn is_favorite(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    /// Favorite IDs in the order they were added.
    #[must_use]
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Wait until every persist queued so far has been attempted.
    pub async fn flush(&self) {
        let Some(writer) = &self.writer else {
            return;
        };
        let (ack, done) = oneshot::channel();
        if writer.send(PersistCommand::Flush(ack)).is_err() {
            warn!("Favorites writer is gone, nothing to flush");
            return;
        }
        let _ = done.await;
    }

    fn persist(&self) {
        if !self.loaded {
            debug!("Favorites not loaded yet, skipping persist");
            return;
        }
        let Some(writer) = &self.writer else {
            return;
        };
        if writer.send(PersistCommand::Write(self.ids.clone())).is_err() {
            warn!("Favorites writer is gone, change not persisted");
        }
    }
}

/// Spawn the task that applies persists one at a time, in the order queued.
fn spawn_writer<S: KeyValueStore>(storage: Arc<S>) -> mpsc::UnboundedSender<PersistCommand> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        while let Some(command) = rx.recv().await {
            match command {
                PersistCommand::Write(ids) => write_favorites(storage.as_ref(), &ids).await,
                PersistCommand::Flush(ack) => {
                    let _ = ack.send(());
                }
            }
        }
        debug!("Favorites writer stopped");
    });
    tx
}

async fn write_favorites<S: KeyValueStore>(storage: &S, ids: &[ProductId]) {
    let json = match serde_json::to_string(ids) {
        Ok(json) => json,
        Err(e) => {
            warn!(error = %e, "Failed to serialize favorites");
            return;
        }
    };
    match storage.set(FAVORITES_KEY, json).await {
        Ok(()) => debug!(count = ids.len(), "Favorites persisted"),
        Err(e) => warn!(error = %e, "Failed to persist favorites"),
    }
}

fn dedup_in_order(ids: Vec<ProductId>) -> Vec<ProductId> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.into_iter()
        .filter(|id| seen.insert(id.clone()))
        .collect()
}
