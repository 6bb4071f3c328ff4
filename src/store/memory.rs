use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Genre, Movie, MovieId, NewMovie, User, UserId, UserRecord, Watchlist, WatchlistItem},
};

use super::{GenreStore, MovieStore, UserStore, WatchlistStore};

/// In-memory persistence gateway
///
/// One `RwLock` guards all collections; the conditional operations
/// (`find_or_create`, `toggle_item`, username-checked insert) hold the
/// write lock across their whole check-and-write section, which is what
/// makes them atomic with respect to concurrent callers.
#[derive(Clone)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    movies: HashMap<MovieId, Movie>,
    genres: Vec<Genre>,
    users: HashMap<UserId, User>,
    watchlists: HashMap<UserId, Watchlist>,
    items: Vec<WatchlistItem>,
    next_movie_id: MovieId,
    next_genre_id: i64,
    next_user_id: UserId,
    next_item_id: i64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
        }
    }
}

#[async_trait]
impl MovieStore for MemoryStore {
    async fn insert(&self, movie: NewMovie) -> AppResult<Movie> {
        let mut inner = self.inner.write().await;
        inner.next_movie_id += 1;
        let movie = movie.into_movie(inner.next_movie_id);
        inner.movies.insert(movie.id, movie.clone());
        Ok(movie)
    }

    async fn update(&self, movie: Movie) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        if !inner.movies.contains_key(&movie.id) {
            return Ok(false);
        }
        inner.movies.insert(movie.id, movie);
        Ok(true)
    }

    async fn delete(&self, id: MovieId) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.movies.remove(&id).is_some())
    }

    async fn find(&self, id: MovieId) -> AppResult<Option<Movie>> {
        let inner = self.inner.read().await;
        Ok(inner.movies.get(&id).cloned())
    }

    async fn all(&self) -> AppResult<Vec<Movie>> {
        let inner = self.inner.read().await;
        let mut movies: Vec<Movie> = inner.movies.values().cloned().collect();
        movies.sort_by_key(|m| m.id);
        Ok(movies)
    }

    async fn find_by_genre(&self, genre: &str) -> AppResult<Vec<Movie>> {
        let inner = self.inner.read().await;
        let mut movies: Vec<Movie> = inner
            .movies
            .values()
            .filter(|m| m.genre == genre)
            .cloned()
            .collect();
        movies.sort_by_key(|m| m.id);
        Ok(movies)
    }
}

#[async_trait]
impl GenreStore for MemoryStore {
    async fn insert(&self, name: &str) -> AppResult<Genre> {
        let mut inner = self.inner.write().await;
        if inner.genres.iter().any(|g| g.name == name) {
            return Err(AppError::Conflict(format!("genre {name} already exists")));
        }
        inner.next_genre_id += 1;
        let genre = Genre {
            id: inner.next_genre_id,
            name: name.to_string(),
        };
        inner.genres.push(genre.clone());
        Ok(genre)
    }

    async fn all(&self) -> AppResult<Vec<Genre>> {
        let inner = self.inner.read().await;
        Ok(inner.genres.clone())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert(&self, record: UserRecord) -> AppResult<User> {
        let mut inner = self.inner.write().await;
        if inner.users.values().any(|u| u.username == record.username) {
            return Err(AppError::Conflict(format!(
                "username {} is already taken",
                record.username
            )));
        }
        inner.next_user_id += 1;
        let user = record.into_user(inner.next_user_id);
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find(&self, id: UserId) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }
}

#[async_trait]
impl WatchlistStore for MemoryStore {
    async fn find_or_create(&self, user_id: UserId) -> AppResult<Watchlist> {
        let mut inner = self.inner.write().await;
        if let Some(watchlist) = inner.watchlists.get(&user_id) {
            return Ok(watchlist.clone());
        }
        let watchlist = Watchlist::new(user_id);
        inner.watchlists.insert(user_id, watchlist.clone());
        Ok(watchlist)
    }

    async fn find_for_user(&self, user_id: UserId) -> AppResult<Option<Watchlist>> {
        let inner = self.inner.read().await;
        Ok(inner.watchlists.get(&user_id).cloned())
    }

    async fn toggle_item(&self, watchlist_id: Uuid, movie_id: MovieId) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        let existing = inner
            .items
            .iter()
            .position(|i| i.watchlist_id == watchlist_id && i.movie_id == movie_id);

        match existing {
            Some(index) => {
                inner.items.remove(index);
                Ok(false)
            }
            None => {
                inner.next_item_id += 1;
                let item = WatchlistItem {
                    id: inner.next_item_id,
                    watchlist_id,
                    movie_id,
                };
                inner.items.push(item);
                Ok(true)
            }
        }
    }

    async fn items(&self, watchlist_id: Uuid) -> AppResult<Vec<WatchlistItem>> {
        let inner = self.inner.read().await;
        Ok(inner
            .items
            .iter()
            .filter(|i| i.watchlist_id == watchlist_id)
            .cloned()
            .collect())
    }

    async fn clear(&self, watchlist_id: Uuid) -> AppResult<usize> {
        let mut inner = self.inner.write().await;
        let before = inner.items.len();
        inner.items.retain(|i| i.watchlist_id != watchlist_id);
        Ok(before - inner.items.len())
    }
}

/// Genre names shipped with the catalog, inserted at startup
pub const DEFAULT_GENRES: [&str; 6] = [
    "Action",
    "Animation",
    "Comedy",
    "Drama",
    "Mystery",
    "Science Fiction",
];

/// Seeds the default genre catalog into an empty store
pub async fn seed_default_genres(store: &dyn GenreStore) -> AppResult<()> {
    for name in DEFAULT_GENRES {
        store.insert(name).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, genre: &str) -> NewMovie {
        NewMovie {
            title: title.to_string(),
            overview: format!("{title} overview"),
            genre: genre.to_string(),
            language: "English".to_string(),
            duration: 120,
            rating: 7.5,
            poster_path: None,
        }
    }

    fn user_record(username: &str) -> UserRecord {
        UserRecord {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            username: username.to_string(),
            password_hash: "hash".to_string(),
            gender: "Other".to_string(),
            role: "User".to_string(),
        }
    }

    #[tokio::test]
    async fn test_movie_ids_are_assigned_in_order() {
        let store = MemoryStore::new();
        let first = MovieStore::insert(&store, movie("First", "Drama")).await.unwrap();
        let second = MovieStore::insert(&store, movie("Second", "Drama")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_update_unknown_movie_returns_false() {
        let store = MemoryStore::new();
        let missing = movie("Ghost", "Drama").into_movie(999);
        assert!(!store.update(missing).await.unwrap());
    }

    #[tokio::test]
    async fn test_find_by_genre_is_exact() {
        let store = MemoryStore::new();
        MovieStore::insert(&store, movie("A", "Science Fiction")).await.unwrap();
        MovieStore::insert(&store, movie("B", "science fiction")).await.unwrap();

        let found = store.find_by_genre("Science Fiction").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "A");
    }

    #[tokio::test]
    async fn test_duplicate_username_is_conflict() {
        let store = MemoryStore::new();
        UserStore::insert(&store, user_record("ada")).await.unwrap();

        let result = UserStore::insert(&store, user_record("ada")).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));

        let other = UserStore::insert(&store, user_record("grace")).await;
        assert!(other.is_ok());
    }

    #[tokio::test]
    async fn test_find_or_create_is_idempotent() {
        let store = MemoryStore::new();
        let first = store.find_or_create(1).await.unwrap();
        let second = store.find_or_create(1).await.unwrap();
        assert_eq!(first.id, second.id);

        let other = store.find_or_create(2).await.unwrap();
        assert_ne!(first.id, other.id);
    }

    #[tokio::test]
    async fn test_concurrent_find_or_create_yields_one_watchlist() {
        let store = MemoryStore::new();
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(
                async move { store.find_or_create(7).await },
            ));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.dedup();
        assert_eq!(ids.len(), 1);
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_membership() {
        let store = MemoryStore::new();
        let watchlist = store.find_or_create(1).await.unwrap();

        assert!(store.toggle_item(watchlist.id, 10).await.unwrap());
        assert_eq!(store.items(watchlist.id).await.unwrap().len(), 1);

        assert!(!store.toggle_item(watchlist.id, 10).await.unwrap());
        assert!(store.items(watchlist.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_items_keep_insertion_order() {
        let store = MemoryStore::new();
        let watchlist = store.find_or_create(1).await.unwrap();

        for movie_id in [30, 10, 20] {
            store.toggle_item(watchlist.id, movie_id).await.unwrap();
        }

        let ids: Vec<MovieId> = store
            .items(watchlist.id)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.movie_id)
            .collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }

    #[tokio::test]
    async fn test_clear_keeps_watchlist_record() {
        let store = MemoryStore::new();
        let watchlist = store.find_or_create(1).await.unwrap();
        store.toggle_item(watchlist.id, 10).await.unwrap();
        store.toggle_item(watchlist.id, 20).await.unwrap();

        let removed = store.clear(watchlist.id).await.unwrap();
        assert_eq!(removed, 2);
        assert!(store.items(watchlist.id).await.unwrap().is_empty());

        let survivor = store.find_for_user(1).await.unwrap().unwrap();
        assert_eq!(survivor.id, watchlist.id);
    }

    #[tokio::test]
    async fn test_clear_leaves_other_watchlists_alone() {
        let store = MemoryStore::new();
        let mine = store.find_or_create(1).await.unwrap();
        let theirs = store.find_or_create(2).await.unwrap();
        store.toggle_item(mine.id, 10).await.unwrap();
        store.toggle_item(theirs.id, 10).await.unwrap();

        store.clear(mine.id).await.unwrap();
        assert_eq!(store.items(theirs.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_seed_default_genres() {
        let store = MemoryStore::new();
        seed_default_genres(&store).await.unwrap();

        let genres = GenreStore::all(&store).await.unwrap();
        assert_eq!(genres.len(), DEFAULT_GENRES.len());
        assert!(genres.iter().any(|g| g.name == "Science Fiction"));

        // Seeding again trips the uniqueness check
        assert!(seed_default_genres(&store).await.is_err());
    }
}
