use std::sync::Arc;

use crate::services::{
    FsPosterStore, MovieDirectory, PosterStore, TokenIssuer, UserDirectory, WatchlistManager,
};
use crate::store::{
    seed_default_genres, GenreStore, MemoryStore, MovieStore, UserStore, WatchlistStore,
};
use crate::error::AppResult;

/// Shared application state: the three directories plus the session issuer
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserDirectory>,
    pub movies: Arc<MovieDirectory>,
    pub watchlists: Arc<WatchlistManager>,
    pub tokens: TokenIssuer,
}

impl AppState {
    /// Wires the directories from explicitly injected store handles
    pub fn new(
        movie_store: Arc<dyn MovieStore>,
        genre_store: Arc<dyn GenreStore>,
        user_store: Arc<dyn UserStore>,
        watchlist_store: Arc<dyn WatchlistStore>,
        posters: Arc<dyn PosterStore>,
        tokens: TokenIssuer,
    ) -> Self {
        let users = Arc::new(UserDirectory::new(user_store));
        let movies = Arc::new(MovieDirectory::new(movie_store, genre_store, posters));
        let watchlists = Arc::new(WatchlistManager::new(
            watchlist_store,
            Arc::clone(&movies),
            Arc::clone(&users),
        ));

        Self {
            users,
            movies,
            watchlists,
            tokens,
        }
    }

    /// Builds a state over a fresh in-memory store with the default genre
    /// catalog seeded
    pub async fn in_memory(jwt_secret: &str, poster_dir: &str) -> AppResult<Self> {
        let store = MemoryStore::new();
        seed_default_genres(&store).await?;

        Ok(Self::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store),
            Arc::new(FsPosterStore::new(poster_dir)),
            TokenIssuer::new(jwt_secret),
        ))
    }
}
