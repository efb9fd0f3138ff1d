//! Per-client watchlist persistence.
//!
//! Two stores with different contracts live side by side:
//!
//! - the flat list (`my-watchlist`): unique by movie title, newest first,
//!   append-only until cleared wholesale;
//! - named watchlists (`cine-genie-watchlists`): titled snapshots with no
//!   uniqueness check at all.
//!
//! Every mutation is announced on a broadcast channel so open views can re-read.

use std::sync::Arc;

use futures::{stream, Stream};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{Movie, NamedWatchlist};

pub mod handlers;
pub mod share;
pub mod store;

pub use share::share_as_text;
pub use store::{KeyValueStore, MemoryStore, RedisStore, StorageError};

pub const FLAT_WATCHLIST_KEY: &str = "my-watchlist";
pub const NAMED_WATCHLISTS_KEY: &str = "cine-genie-watchlists";

const EVENT_CHANNEL_CAPACITY: usize = 64;
/// Each failed attempt means another writer committed, so this bounds
/// contention rather than latency.
const MAX_WRITE_ATTEMPTS: u32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    Added,
    AlreadyExists,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WatchlistChange {
    Added { title: String },
    Cleared,
    Saved { id: Uuid, title: String },
}

impl WatchlistChange {
    pub fn name(&self) -> &'static str {
        match self {
            WatchlistChange::Added { .. } => "added",
            WatchlistChange::Cleared => "cleared",
            WatchlistChange::Saved { .. } => "saved",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct WatchlistEvent {
    pub client_id: Uuid,
    #[serde(flatten)]
    pub change: WatchlistChange,
}

/// What an open view is told.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Change(WatchlistEvent),
    /// `skipped` events were dropped; re-read everything.
    Resync { skipped: u64 },
}

/// One client's notifications from a broadcast subscription. Ends when the
/// store is dropped.
pub fn notifications(
    receiver: broadcast::Receiver<WatchlistEvent>,
    client_id: Uuid,
) -> impl Stream<Item = Notification> + Send + 'static {
    stream::unfold(receiver, move |mut receiver| async move {
        loop {
            match receiver.recv().await {
                Ok(event) if event.client_id == client_id => {
                    return Some((Notification::Change(event), receiver));
                }
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    warn!(%client_id, skipped, "Watchlist event subscriber lagged");
                    return Some((Notification::Resync { skipped }, receiver));
                }
                Err(RecvError::Closed) => return None,
            }
        }
    })
}

/// Result of one read-modify-write step.
enum Update<T, R> {
    Write(Vec<T>, R),
    Keep(R),
}

#[derive(Clone)]
pub struct WatchlistStore {
    backend: Arc<dyn KeyValueStore>,
    events: broadcast::Sender<WatchlistEvent>,
}

impl WatchlistStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { backend, events }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<WatchlistEvent> {
        self.events.subscribe()
    }

    /// Flat watchlist, newest first. Missing or unreadable data reads as empty.
    pub async fn movies(&self, client_id: Uuid) -> Result<Vec<Movie>, StorageError> {
        let key = key(client_id, FLAT_WATCHLIST_KEY);
        let raw = self.backend.get(&key).await?;
        Ok(decode_list(&key, raw.as_deref()))
    }

    /// Prepends `movie` unless a movie with the same title is already saved.
    pub async fn add_movie(
        &self,
        client_id: Uuid,
        movie: Movie,
    ) -> Result<(AddOutcome, usize), StorageError> {
        let key = key(client_id, FLAT_WATCHLIST_KEY);
        let title = movie.title.clone();

        let (outcome, count) = self
            .update(&key, |movies: &[Movie]| {
                if movies.iter().any(|m| m.title == movie.title) {
                    return Update::Keep((AddOutcome::AlreadyExists, movies.len()));
                }
                let mut updated = Vec::with_capacity(movies.len() + 1);
                updated.push(movie.clone());
                updated.extend_from_slice(movies);
                let count = updated.len();
                Update::Write(updated, (AddOutcome::Added, count))
            })
            .await?;

        match outcome {
            AddOutcome::Added => {
                info!(%client_id, %title, count, "Movie added to watchlist");
                self.notify(client_id, WatchlistChange::Added { title });
            }
            AddOutcome::AlreadyExists => {
                info!(%client_id, %title, "Movie already in watchlist");
            }
        }
        Ok((outcome, count))
    }

    /// Removes the flat watchlist entirely.
    pub async fn clear_all(&self, client_id: Uuid) -> Result<(), StorageError> {
        self.backend
            .remove(&key(client_id, FLAT_WATCHLIST_KEY))
            .await?;
        info!(%client_id, "Watchlist cleared");

        self.notify(client_id, WatchlistChange::Cleared);
        Ok(())
    }

    /// Saved named watchlists in save order.
    pub async fn named(&self, client_id: Uuid) -> Result<Vec<NamedWatchlist>, StorageError> {
        let key = key(client_id, NAMED_WATCHLISTS_KEY);
        let raw = self.backend.get(&key).await?;
        Ok(decode_list(&key, raw.as_deref()))
    }

    /// Appends a new named watchlist. Duplicate titles are kept.
    pub async fn save_named(
        &self,
        client_id: Uuid,
        title: &str,
        movies: Vec<Movie>,
    ) -> Result<NamedWatchlist, StorageError> {
        let key = key(client_id, NAMED_WATCHLISTS_KEY);
        let watchlist = NamedWatchlist::new(title, movies);

        self.update(&key, |saved: &[NamedWatchlist]| {
            let mut updated = saved.to_vec();
            updated.push(watchlist.clone());
            Update::Write(updated, ())
        })
        .await?;
        info!(%client_id, id = %watchlist.id, %title, "Named watchlist saved");

        self.notify(
            client_id,
            WatchlistChange::Saved {
                id: watchlist.id,
                title: watchlist.title.clone(),
            },
        );
        Ok(watchlist)
    }

    /// Optimistic read-modify-write on one key. `apply` may run more than once.
    async fn update<T, R, F>(&self, key: &str, mut apply: F) -> Result<R, StorageError>
    where
        T: Serialize + DeserializeOwned,
        F: FnMut(&[T]) -> Update<T, R>,
    {
        for attempt in 1..=MAX_WRITE_ATTEMPTS {
            let raw = self.backend.get(key).await?;
            let current: Vec<T> = decode_list(key, raw.as_deref());

            let (updated, result) = match apply(&current) {
                Update::Keep(result) => return Ok(result),
                Update::Write(updated, result) => (updated, result),
            };

            let encoded = serde_json::to_string(&updated)?;
            if self
                .backend
                .compare_and_swap(key, raw.as_deref(), Some(encoded))
                .await?
            {
                return Ok(result);
            }
            warn!(key, attempt, "Concurrent watchlist write, retrying");
        }

        Err(StorageError::Contended {
            key: key.to_string(),
            attempts: MAX_WRITE_ATTEMPTS,
        })
    }

    fn notify(&self, client_id: Uuid, change: WatchlistChange) {
        // No subscribers is the normal case when no view is open.
        let _ = self.events.send(WatchlistEvent { client_id, change });
    }
}

fn decode_list<T: DeserializeOwned>(key: &str, raw: Option<&str>) -> Vec<T> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    serde_json::from_str(raw).unwrap_or_else(|e| {
        warn!(key, "Stored watchlist is unreadable, treating as empty: {e}");
        Vec::new()
    })
}

fn key(client_id: Uuid, name: &str) -> String {
    format!("client:{client_id}:{name}")
}
