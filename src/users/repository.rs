//! Users Repository

use async_trait::async_trait;
use futures::TryStreamExt;
use mockall::automock;
use mongodb::{
    Collection,
    bson::{Document, doc, oid::ObjectId},
};

use crate::{
    database::{StoreError, UpsertOutcome},
    users::models::{NewUser, User, UserUpdate},
};

#[derive(Debug, Clone)]
pub(crate) struct MongoUsersRepository {
    collection: Collection<User>,
}

impl MongoUsersRepository {
    #[must_use]
    pub(crate) fn new(collection: Collection<User>) -> Self {
        Self { collection }
    }
}

/// Builds the `$set` document for a profile update.
///
/// Fields the caller left as `None` are written as nulls so that an update
/// always lands the full profile field set.
fn update_document(update: UserUpdate) -> Document {
    doc! {
        "$set": {
            "displayName": update.display_name,
            "email": update.email,
            "phone": update.phone,
            "photoUrl": update.photo_url,
            "address": update.address,
            "isAdmin": update.is_admin,
            "isBlocked": update.is_blocked,
        }
    }
}

#[async_trait]
impl UsersRepository for MongoUsersRepository {
    async fn create_user(&self, user: NewUser) -> Result<ObjectId, StoreError> {
        let mut document = User::from(user);
        let id = ObjectId::new();

        document.id = Some(id);

        self.collection.insert_one(&document).await?;

        Ok(id)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let users = self.collection.find(doc! {}).await?.try_collect().await?;

        Ok(users)
    }

    async fn find_user_by_uid(&self, uid: &str) -> Result<Option<User>, StoreError> {
        let user = self.collection.find_one(doc! { "uid": uid }).await?;

        Ok(user)
    }

    async fn upsert_user(
        &self,
        uid: &str,
        update: UserUpdate,
    ) -> Result<UpsertOutcome, StoreError> {
        let result = self
            .collection
            .update_one(doc! { "uid": uid }, update_document(update))
            .upsert(true)
            .await?;

        Ok(result.into())
    }

    async fn delete_user(&self, uid: &str) -> Result<u64, StoreError> {
        let result = self.collection.delete_one(doc! { "uid": uid }).await?;

        Ok(result.deleted_count)
    }
}


#[automock]
#[async_trait]
pub(crate) trait UsersRepository: Send + Sync {
    /// Stores a new user and returns its document id.
    async fn create_user(&self, user: NewUser) -> Result<ObjectId, StoreError>;

    /// Retrieves all users.
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    /// Retrieves a single user by external id.
    async fn find_user_by_uid(&self, uid: &str) -> Result<Option<User>, StoreError>;

    /// Replaces the profile field set of the user with the given external id,
    /// creating the document when none matches.
    async fn upsert_user(&self, uid: &str, update: UserUpdate)
    -> Result<UpsertOutcome, StoreError>;

    /// Deletes the user with the given external id.
    async fn delete_user(&self, uid: &str) -> Result<u64, StoreError>;
}
