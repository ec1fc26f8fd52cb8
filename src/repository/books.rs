//! Books repository backed by MongoDB

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, Database,
};

use super::BookRepository;
use crate::{
    error::AppResult,
    models::{Book, BookFilter},
};

pub const COLLECTION: &str = "books";

#[derive(Clone)]
pub struct MongoBooksRepository {
    database: Database,
    collection: Collection<Book>,
}

impl MongoBooksRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            database: database.clone(),
            collection: database.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl BookRepository for MongoBooksRepository {
    async fn find(&self, filter: BookFilter) -> AppResult<Vec<Book>> {
        let cursor = self.collection.find(filter.to_document(), None).await?;
        let books = cursor.try_collect().await?;
        Ok(books)
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Book>> {
        let book = self.collection.find_one(doc! { "_id": id }, None).await?;
        Ok(book)
    }

    async fn set_review(&self, id: ObjectId, review: &str) -> AppResult<bool> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": { "review": review } }, None)
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn ping(&self) -> AppResult<()> {
        self.database.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }
}
