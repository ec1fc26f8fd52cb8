//! Data models for the book shop

pub mod book;
pub mod lenient;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookFilter, BookResponse, ReviewRequest};
pub use user::{LoginRequest, MessageResponse, RegisterRequest, User};
