use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{MovieId, UserId};

/// A user's watchlist
///
/// At most one exists per user; it is created on first access and survives
/// a clear.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Watchlist {
    /// Opaque identifier
    pub id: Uuid,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Watchlist {
    pub fn new(user_id: UserId) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            created_at: Utc::now(),
        }
    }
}

/// A single movie reference on a watchlist
///
/// No (watchlist_id, movie_id) pair appears twice; insertion order is
/// preserved when listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WatchlistItem {
    pub id: i64,
    pub watchlist_id: Uuid,
    pub movie_id: MovieId,
}
