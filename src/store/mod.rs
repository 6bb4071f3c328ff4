//! Persistence gateway
//!
//! Each directory/manager receives its store handles at construction as
//! `Arc<dyn …>` trait objects; nothing reaches for ambient state. The
//! contracts below also carry the two atomic primitives the watchlist
//! invariants depend on: `find_or_create` and `toggle_item` must not be
//! observable in a half-applied state by concurrent callers.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Genre, Movie, MovieId, NewMovie, User, UserId, UserRecord, Watchlist, WatchlistItem},
};

mod memory;

pub use memory::{seed_default_genres, MemoryStore, DEFAULT_GENRES};

/// Storage contract for movie records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Persists a new movie and assigns its id
    async fn insert(&self, movie: NewMovie) -> AppResult<Movie>;

    /// Replaces the stored record; false if the id is unknown
    async fn update(&self, movie: Movie) -> AppResult<bool>;

    /// Removes the record; false if the id is unknown
    async fn delete(&self, id: MovieId) -> AppResult<bool>;

    async fn find(&self, id: MovieId) -> AppResult<Option<Movie>>;

    async fn all(&self) -> AppResult<Vec<Movie>>;

    /// All movies whose genre string is byte-equal to `genre`
    async fn find_by_genre(&self, genre: &str) -> AppResult<Vec<Movie>>;
}

/// Storage contract for the genre catalog
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenreStore: Send + Sync {
    /// Persists a genre; the name must be unused
    async fn insert(&self, name: &str) -> AppResult<Genre>;

    async fn all(&self) -> AppResult<Vec<Genre>>;
}

/// Storage contract for user accounts
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persists a new account and assigns its id; the username must be
    /// unused (checked under the same lock as the insert)
    async fn insert(&self, record: UserRecord) -> AppResult<User>;

    async fn find(&self, id: UserId) -> AppResult<Option<User>>;

    /// Exact, case-sensitive username lookup
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
}

/// Storage contract for watchlists and their items
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WatchlistStore: Send + Sync {
    /// Returns the user's watchlist, creating it atomically if absent.
    /// Repeated calls for the same user observe a single watchlist.
    async fn find_or_create(&self, user_id: UserId) -> AppResult<Watchlist>;

    async fn find_for_user(&self, user_id: UserId) -> AppResult<Option<Watchlist>>;

    /// Atomically flips membership of (watchlist, movie): removes the item
    /// if present, inserts it otherwise. Returns true when the item was
    /// added.
    async fn toggle_item(&self, watchlist_id: Uuid, movie_id: MovieId) -> AppResult<bool>;

    /// Items of a watchlist in insertion order
    async fn items(&self, watchlist_id: Uuid) -> AppResult<Vec<WatchlistItem>>;

    /// Removes every item of the watchlist, leaving the watchlist record
    /// itself in place. Returns the number of removed items.
    async fn clear(&self, watchlist_id: Uuid) -> AppResult<usize>;
}
