//! Categories Repository

use async_trait::async_trait;
use futures::TryStreamExt;
use mockall::automock;
use mongodb::{
    Collection,
    bson::{doc, oid::ObjectId},
};

use crate::{
    categories::models::{Category, CategoryUpdate, NewCategory},
    database::{StoreError, UpsertOutcome},
};

#[derive(Debug, Clone)]
pub(crate) struct MongoCategoriesRepository {
    collection: Collection<Category>,
}

impl MongoCategoriesRepository {
    #[must_use]
    pub(crate) fn new(collection: Collection<Category>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl CategoriesRepository for MongoCategoriesRepository {
    async fn create_category(&self, category: NewCategory) -> Result<ObjectId, StoreError> {
        let mut document = Category::from(category);
        let id = ObjectId::new();

        document.id = Some(id);

        self.collection.insert_one(&document).await?;

        Ok(id)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let categories = self.collection.find(doc! {}).await?.try_collect().await?;

        Ok(categories)
    }

    async fn find_category(&self, id: ObjectId) -> Result<Option<Category>, StoreError> {
        let category = self.collection.find_one(doc! { "_id": id }).await?;

        Ok(category)
    }

    async fn upsert_category(
        &self,
        id: ObjectId,
        update: CategoryUpdate,
    ) -> Result<UpsertOutcome, StoreError> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$set": {
                        "title": update.title,
                        "thumbnailUrl": update.thumbnail_url,
                    }
                },
            )
            .upsert(true)
            .await?;

        Ok(result.into())
    }

    async fn delete_category(&self, id: ObjectId) -> Result<u64, StoreError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        Ok(result.deleted_count)
    }
}

#[automock]
#[async_trait]
pub(crate) trait CategoriesRepository: Send + Sync {
    /// Stores a new category and returns its document id.
    async fn create_category(&self, category: NewCategory) -> Result<ObjectId, StoreError>;

    /// Retrieves all categories.
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    /// Retrieves a single category by document id.
    async fn find_category(&self, id: ObjectId) -> Result<Option<Category>, StoreError>;

    /// Replaces the title and thumbnail of a category, creating the document
    /// when the id matches nothing.
    async fn upsert_category(
        &self,
        id: ObjectId,
        update: CategoryUpdate,
    ) -> Result<UpsertOutcome, StoreError>;

    /// Deletes a category by document id.
    async fn delete_category(&self, id: ObjectId) -> Result<u64, StoreError>;
}
