use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Movie, MovieId, UserId},
    services::{movies::MovieDirectory, users::UserDirectory},
    store::WatchlistStore,
};

/// Watchlist manager
///
/// Owns the lazily created per-user watchlist and its membership. Every
/// operation verifies the user id at the boundary and resolves the movie
/// list through the Movie Directory.
pub struct WatchlistManager {
    watchlists: Arc<dyn WatchlistStore>,
    movies: Arc<MovieDirectory>,
    users: Arc<UserDirectory>,
}

impl WatchlistManager {
    pub fn new(
        watchlists: Arc<dyn WatchlistStore>,
        movies: Arc<MovieDirectory>,
        users: Arc<UserDirectory>,
    ) -> Self {
        Self {
            watchlists,
            movies,
            users,
        }
    }

    /// Flips membership of the movie on the user's watchlist (creating the
    /// watchlist on first use) and returns the resulting movie list.
    pub async fn toggle(&self, user_id: UserId, movie_id: MovieId) -> AppResult<Vec<Movie>> {
        self.ensure_user(user_id).await?;
        // Reject unknown movie ids up front rather than storing a dangling
        // reference.
        self.movies.get(movie_id).await?;

        let watchlist = self.watchlists.find_or_create(user_id).await?;
        let added = self.watchlists.toggle_item(watchlist.id, movie_id).await?;
        tracing::info!(user_id, movie_id, added, "Watchlist item toggled");

        self.movies_on(watchlist.id).await
    }

    /// The user's watchlist as movies, in item insertion order. Items whose
    /// movie no longer exists are skipped.
    pub async fn movies(&self, user_id: UserId) -> AppResult<Vec<Movie>> {
        self.ensure_user(user_id).await?;
        let watchlist = self.watchlists.find_or_create(user_id).await?;
        self.movies_on(watchlist.id).await
    }

    /// Removes every item while keeping the watchlist record; returns the
    /// now-empty movie list.
    pub async fn clear(&self, user_id: UserId) -> AppResult<Vec<Movie>> {
        self.ensure_user(user_id).await?;
        let watchlist = self.watchlists.find_or_create(user_id).await?;
        let removed = self.watchlists.clear(watchlist.id).await?;
        tracing::info!(user_id, removed, "Watchlist cleared");
        Ok(Vec::new())
    }

    async fn movies_on(&self, watchlist_id: uuid::Uuid) -> AppResult<Vec<Movie>> {
        let ids: Vec<MovieId> = self
            .watchlists
            .items(watchlist_id)
            .await?
            .into_iter()
            .map(|item| item.movie_id)
            .collect();
        self.movies.resolve(&ids).await
    }

    async fn ensure_user(&self, user_id: UserId) -> AppResult<()> {
        if !self.users.exists(user_id).await? {
            return Err(AppError::NotFound(format!("user {user_id}")));
        }
        Ok(())
    }
}
