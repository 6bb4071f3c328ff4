use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        // Accounts
        .route("/users", post(handlers::register))
        .route("/users/available", get(handlers::username_available))
        .route("/login", post(handlers::login))
        // Catalog
        .route("/movies", get(handlers::list_movies).post(handlers::create_movie))
        .route(
            "/movies/:id",
            get(handlers::get_movie)
                .put(handlers::update_movie)
                .delete(handlers::delete_movie),
        )
        .route("/movies/:id/similar", get(handlers::similar_movies))
        .route("/genres", get(handlers::list_genres))
        // Watchlist
        .route(
            "/watchlist/:user_id",
            get(handlers::get_watchlist).delete(handlers::clear_watchlist),
        )
        .route(
            "/watchlist/:user_id/toggle/:movie_id",
            post(handlers::toggle_watchlist_item),
        )
}
