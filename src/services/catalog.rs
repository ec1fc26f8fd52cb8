//! Catalog service: book lookups and review maintenance

use mongodb::bson::oid::ObjectId;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookFilter},
    repository::Repository,
};

pub const BOOK_NOT_FOUND: &str = "Book not found";

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Books matching the filter; an empty list when nothing matches
    pub async fn search_books(&self, filter: BookFilter) -> AppResult<Vec<Book>> {
        self.repository.books.find(filter).await
    }

    /// Review text of a book, `""` when none was ever written
    pub async fn get_review(&self, id: &str) -> AppResult<String> {
        let id = parse_book_id(id)?;
        let book = self
            .repository
            .books
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))?;

        Ok(book.review.unwrap_or_default())
    }

    /// Replace the review of a book
    pub async fn update_review(&self, id: &str, review: &str) -> AppResult<()> {
        let id = parse_book_id(id)?;
        if !self.repository.books.set_review(id, review).await? {
            return Err(AppError::NotFound(BOOK_NOT_FOUND.to_string()));
        }

        tracing::info!("Review updated for book {}", id);
        Ok(())
    }

    /// Clear the review of a book. The field is kept and set to `""`.
    pub async fn clear_review(&self, id: &str) -> AppResult<()> {
        let id = parse_book_id(id)?;
        if !self.repository.books.set_review(id, "").await? {
            return Err(AppError::NotFound(BOOK_NOT_FOUND.to_string()));
        }

        tracing::info!("Review cleared for book {}", id);
        Ok(())
    }

    /// Check that the datastore answers
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.books.ping().await
    }
}

/// A path id that is not an ObjectId is a datastore cast failure, not a 404
fn parse_book_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|e| AppError::Internal(format!("Invalid book id {}: {}", id, e)))
}
