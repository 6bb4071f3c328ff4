use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::models::{Genre, Identity, Movie, MovieId, NewMovie, NewUser, UserId};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: Identity,
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub available: bool,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Register a new user account
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<NewUser>,
) -> AppResult<(StatusCode, Json<Identity>)> {
    let user = state.users.register(request).await?;
    Ok((StatusCode::CREATED, Json(user.identity())))
}

/// Check whether a username is still free
pub async fn username_available(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<Json<AvailabilityResponse>> {
    let available = state.users.is_username_available(&query.username).await?;
    Ok(Json(AvailabilityResponse { available }))
}

/// Exchange credentials for a session token
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = state
        .users
        .authenticate(&request.username, &request.password)
        .await?;
    let token = state.tokens.issue(&user)?;
    Ok(Json(LoginResponse { token, user }))
}

/// Get all movies
pub async fn list_movies(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(state.movies.list().await?))
}

/// Get a single movie
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
) -> AppResult<Json<Movie>> {
    Ok(Json(state.movies.get(id).await?))
}

/// Create a new movie
pub async fn create_movie(
    State(state): State<AppState>,
    Json(request): Json<NewMovie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let movie = state.movies.create(request).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// Replace a movie's fields
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
    Json(request): Json<NewMovie>,
) -> AppResult<Json<Movie>> {
    Ok(Json(state.movies.update(id, request).await?))
}

/// Delete a movie (and its poster asset)
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
) -> AppResult<StatusCode> {
    state.movies.delete(id).await?;
    Ok(StatusCode::OK)
}

/// Movies sharing the target's genre, the target excluded
pub async fn similar_movies(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(state.movies.similar(id).await?))
}

/// The genre catalog
pub async fn list_genres(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    Ok(Json(state.movies.genres().await?))
}

/// A user's watchlist as movies, in insertion order
pub async fn get_watchlist(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(state.watchlists.movies(user_id).await?))
}

/// Toggle a movie on a user's watchlist, returning the updated list
pub async fn toggle_watchlist_item(
    State(state): State<AppState>,
    Path((user_id, movie_id)): Path<(UserId, MovieId)>,
) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(state.watchlists.toggle(user_id, movie_id).await?))
}

/// Remove every item from a user's watchlist
pub async fn clear_watchlist(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(state.watchlists.clear(user_id).await?))
}
