use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Genre, Movie, MovieId, NewMovie},
    services::posters::PosterStore,
    store::{GenreStore, MovieStore},
};

/// Movie directory: catalog CRUD, the genre listing, and similar-movie
/// lookup over the persistence gateway
pub struct MovieDirectory {
    movies: Arc<dyn MovieStore>,
    genres: Arc<dyn GenreStore>,
    posters: Arc<dyn PosterStore>,
}

impl MovieDirectory {
    pub fn new(
        movies: Arc<dyn MovieStore>,
        genres: Arc<dyn GenreStore>,
        posters: Arc<dyn PosterStore>,
    ) -> Self {
        Self {
            movies,
            genres,
            posters,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Movie>> {
        self.movies.all().await
    }

    pub async fn get(&self, id: MovieId) -> AppResult<Movie> {
        self.movies
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("movie {id}")))
    }

    pub async fn create(&self, movie: NewMovie) -> AppResult<Movie> {
        movie.validate()?;
        let movie = self.movies.insert(movie).await?;
        tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");
        Ok(movie)
    }

    /// Replaces all mutable fields of an existing movie; the id is immutable
    pub async fn update(&self, id: MovieId, movie: NewMovie) -> AppResult<Movie> {
        movie.validate()?;
        let movie = movie.into_movie(id);
        if !self.movies.update(movie.clone()).await? {
            return Err(AppError::NotFound(format!("movie {id}")));
        }
        Ok(movie)
    }

    /// Deletes a movie and discards its poster asset, if any
    pub async fn delete(&self, id: MovieId) -> AppResult<()> {
        let movie = self.get(id).await?;
        self.movies.delete(id).await?;

        if let Some(poster_path) = movie.poster_path {
            // The record is already gone; a failed asset cleanup is logged,
            // not surfaced.
            if let Err(e) = self.posters.remove(&poster_path).await {
                tracing::warn!(movie_id = id, error = %e, "Poster cleanup failed");
            }
        }

        tracing::info!(movie_id = id, "Movie deleted");
        Ok(())
    }

    /// All movies sharing the target's exact genre string, the target
    /// itself excluded. An empty result is valid.
    pub async fn similar(&self, id: MovieId) -> AppResult<Vec<Movie>> {
        let target = self.get(id).await?;
        let mut movies = self.movies.find_by_genre(&target.genre).await?;
        movies.retain(|m| m.id != target.id);
        Ok(movies)
    }

    pub async fn genres(&self) -> AppResult<Vec<Genre>> {
        self.genres.all().await
    }

    /// Resolves movie ids to records, preserving the order in which the ids
    /// were supplied; ids with no matching movie are omitted.
    pub async fn resolve(&self, ids: &[MovieId]) -> AppResult<Vec<Movie>> {
        let mut movies = Vec::with_capacity(ids.len());
        for &id in ids {
            if let Some(movie) = self.movies.find(id).await? {
                movies.push(movie);
            }
        }
        Ok(movies)
    }
}
