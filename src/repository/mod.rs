//! Repository layer for database operations

pub mod books;
pub mod users;

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{
    bson::oid::ObjectId,
    options::ClientOptions,
    Client, Database,
};

use crate::{
    config::DatabaseConfig,
    error::AppResult,
    models::{Book, BookFilter, User},
};

/// Access to the `books` collection
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All books matching the filter, in natural order
    async fn find(&self, filter: BookFilter) -> AppResult<Vec<Book>>;

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Book>>;

    /// Overwrite the review field; returns `false` when no book has this id
    async fn set_review(&self, id: ObjectId, review: &str) -> AppResult<bool>;

    /// Round-trip to the backing store
    async fn ping(&self) -> AppResult<()>;
}

/// Access to the `users` collection
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user and return the id generated by the store
    async fn insert(&self, user: &User) -> AppResult<ObjectId>;
}

/// Main repository struct holding the collection handles
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<dyn BookRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl Repository {
    pub fn new(books: Arc<dyn BookRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { books, users }
    }
}

/// Owner of the MongoDB client for the lifetime of the process
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    /// Open a client for the configured deployment.
    ///
    /// The driver connects lazily, so an unreachable server surfaces on the
    /// first query rather than here.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let mut options = ClientOptions::parse(&config.url).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(options)?;
        let database = client.database(&config.name);

        Ok(Self { client, database })
    }

    /// Repository backed by this store's collections
    pub fn repository(&self) -> Repository {
        Repository::new(
            Arc::new(books::MongoBooksRepository::new(&self.database)),
            Arc::new(users::MongoUsersRepository::new(&self.database)),
        )
    }

    /// Close all pooled connections
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}
