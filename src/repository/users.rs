//! Users repository backed by MongoDB

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, Database,
};

use super::UserRepository;
use crate::{
    error::{AppError, AppResult},
    models::User,
};

pub const COLLECTION: &str = "users";

#[derive(Clone)]
pub struct MongoUsersRepository {
    collection: Collection<User>,
}

impl MongoUsersRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUsersRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = self.collection.find_one(doc! { "email": email }, None).await?;
        Ok(user)
    }

    async fn insert(&self, user: &User) -> AppResult<ObjectId> {
        let result = self.collection.insert_one(user, None).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Internal("Inserted user id is not an ObjectId".to_string()))
    }
}
