//! Book catalog and review endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{BookFilter, BookResponse, MessageResponse, ReviewRequest},
    AppState,
};

use super::ApiJson;

async fn search(state: &AppState, filter: BookFilter) -> AppResult<Json<Vec<BookResponse>>> {
    let books = state.services.catalog.search_books(filter).await?;
    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// List every book in the shop
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<BookResponse>),
        (status = 500, description = "Datastore failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<BookResponse>>> {
    search(&state, BookFilter::All).await
}

/// Books with exactly this ISBN
#[utoipa::path(
    get,
    path = "/books/isbn/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "ISBN")
    ),
    responses(
        (status = 200, description = "Matching books", body = Vec<BookResponse>),
        (status = 500, description = "Datastore failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn books_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<Vec<BookResponse>>> {
    search(&state, BookFilter::Isbn(isbn)).await
}

/// Books with exactly this author
#[utoipa::path(
    get,
    path = "/books/author/{author}",
    tag = "books",
    params(
        ("author" = String, Path, description = "Author name")
    ),
    responses(
        (status = 200, description = "Matching books", body = Vec<BookResponse>),
        (status = 500, description = "Datastore failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn books_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> AppResult<Json<Vec<BookResponse>>> {
    search(&state, BookFilter::Author(author)).await
}

/// Books with exactly this title
#[utoipa::path(
    get,
    path = "/books/title/{title}",
    tag = "books",
    params(
        ("title" = String, Path, description = "Title")
    ),
    responses(
        (status = 200, description = "Matching books", body = Vec<BookResponse>),
        (status = 500, description = "Datastore failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn books_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<Json<Vec<BookResponse>>> {
    search(&state, BookFilter::Title(title)).await
}

/// Get the review of a book
#[utoipa::path(
    get,
    path = "/books/{id}/review",
    tag = "reviews",
    params(
        ("id" = String, Path, description = "Book ObjectId")
    ),
    responses(
        (status = 200, description = "Review text", body = String),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Datastore failure or malformed id", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<String>> {
    let review = state.services.catalog.get_review(&id).await?;
    Ok(Json(review))
}

/// Add or replace the review of a book
#[utoipa::path(
    put,
    path = "/books/{id}/review",
    tag = "reviews",
    params(
        ("id" = String, Path, description = "Book ObjectId")
    ),
    request_body = ReviewRequest,
    responses(
        (status = 200, description = "Review updated", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Datastore failure or malformed id", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<ReviewRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .catalog
        .update_review(&id, &request.review)
        .await?;
    Ok(Json(MessageResponse::new("Book review updated successfully")))
}

/// Clear the review of a book
#[utoipa::path(
    delete,
    path = "/books/{id}/review",
    tag = "reviews",
    params(
        ("id" = String, Path, description = "Book ObjectId")
    ),
    responses(
        (status = 200, description = "Review cleared", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Datastore failure or malformed id", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.clear_review(&id).await?;
    Ok(Json(MessageResponse::new("Book review deleted successfully")))
}
