//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Book Shop API",
        version = "0.1.0",
        description = "Book catalog, reviews and user accounts"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::books_by_isbn,
        books::books_by_author,
        books::books_by_title,
        // Reviews
        books::get_review,
        books::update_review,
        books::delete_review,
        // Auth
        auth::register,
        auth::login,
    ),
    components(
        schemas(
            crate::models::BookResponse,
            crate::models::ReviewRequest,
            crate::models::RegisterRequest,
            crate::models::LoginRequest,
            crate::models::MessageResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Catalog lookups"),
        (name = "reviews", description = "Book reviews"),
        (name = "auth", description = "Registration and login")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
