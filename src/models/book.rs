//! Book (catalog entry) model and related types

use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::lenient::{optional_string, string_or_default};

/// Book document as stored in the `books` collection.
///
/// Records are seeded outside of this API; only `review` is ever written.
/// Text fields tolerate `null` and non-string scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, deserialize_with = "optional_string", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "optional_string", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "optional_string", skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, deserialize_with = "optional_string", skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
}

/// Book as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookResponse {
    /// Hex representation of the document id
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id.to_hex(),
            title: book.title,
            author: book.author,
            isbn: book.isbn,
            review: book.review,
        }
    }
}

/// Exact-match filter applied to the book collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookFilter {
    All,
    Isbn(String),
    Author(String),
    Title(String),
}

impl BookFilter {
    /// MongoDB query document for this filter
    pub fn to_document(&self) -> Document {
        match self {
            BookFilter::All => doc! {},
            BookFilter::Isbn(isbn) => doc! { "isbn": isbn.as_str() },
            BookFilter::Author(author) => doc! { "author": author.as_str() },
            BookFilter::Title(title) => doc! { "title": title.as_str() },
        }
    }

    /// Case-sensitive match, same semantics as the query document
    pub fn matches(&self, book: &Book) -> bool {
        match self {
            BookFilter::All => true,
            BookFilter::Isbn(isbn) => book.isbn.as_deref() == Some(isbn.as_str()),
            BookFilter::Author(author) => book.author.as_deref() == Some(author.as_str()),
            BookFilter::Title(title) => book.title.as_deref() == Some(title.as_str()),
        }
    }
}

/// Review update request; a missing `review` writes `""`
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReviewRequest {
    #[serde(default, deserialize_with = "string_or_default")]
    pub review: String,
}
