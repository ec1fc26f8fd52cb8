//! API handlers for the book shop REST endpoints

pub mod auth;
pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    extract::FromRequest,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON body extractor whose rejections render as `{"error": ...}`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/books", get(books::list_books))
        .route("/books/all", get(books::list_books))
        .route("/books/isbn/:isbn", get(books::books_by_isbn))
        .route("/books/author/:author", get(books::books_by_author))
        .route("/books/title/:title", get(books::books_by_title))
        .route("/books/search/isbn/:isbn", get(books::books_by_isbn))
        .route("/books/search/author/:author", get(books::books_by_author))
        .route("/books/search/title/:title", get(books::books_by_title))
        // Reviews
        .route(
            "/books/:id/review",
            get(books::get_review)
                .put(books::update_review)
                .delete(books::delete_review),
        )
        // Accounts
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
