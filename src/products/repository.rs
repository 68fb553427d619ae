//! Products Repository

use async_trait::async_trait;
use futures::TryStreamExt;
use mockall::automock;
use mongodb::{
    Collection,
    bson::{Document, doc, oid::ObjectId},
};

use crate::{
    database::{StoreError, UpsertOutcome},
    products::models::{NewProduct, Product, ProductSummary, ProductUpdate},
};

#[derive(Debug, Clone)]
pub(crate) struct MongoProductsRepository {
    collection: Collection<Product>,
}

impl MongoProductsRepository {
    #[must_use]
    pub(crate) fn new(collection: Collection<Product>) -> Self {
        Self { collection }
    }
}

/// Builds the `$set` document for a product update.
fn update_document(update: ProductUpdate) -> Document {
    doc! {
        "$set": {
            "title": update.title,
            "thumbnailUrl": update.thumbnail_url,
            "details": update.details,
            "ratings": update.ratings,
            "price": update.price,
            "category": update.category,
        }
    }
}

#[async_trait]
impl ProductsRepository for MongoProductsRepository {
    async fn create_product(&self, product: NewProduct) -> Result<ObjectId, StoreError> {
        let mut document = Product::from(product);
        let id = ObjectId::new();

        document.id = Some(id);

        self.collection.insert_one(&document).await?;

        Ok(id)
    }

    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let products = self.collection.find(doc! {}).await?.try_collect().await?;

        Ok(products)
    }

    async fn list_products_by_category(&self, category: &str) -> Result<Vec<Product>, StoreError> {
        let products = self
            .collection
            .find(doc! { "category": category })
            .await?
            .try_collect()
            .await?;

        Ok(products)
    }

    async fn find_product(&self, id: ObjectId) -> Result<Option<Product>, StoreError> {
        let product = self.collection.find_one(doc! { "_id": id }).await?;

        Ok(product)
    }

    async fn find_product_summary(
        &self,
        id: ObjectId,
    ) -> Result<Option<ProductSummary>, StoreError> {
        let summary = self
            .collection
            .clone_with_type::<ProductSummary>()
            .find_one(doc! { "_id": id })
            .projection(doc! { "title": 1, "price": 1 })
            .await?;

        Ok(summary)
    }

    async fn upsert_product(
        &self,
        id: ObjectId,
        update: ProductUpdate,
    ) -> Result<UpsertOutcome, StoreError> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, update_document(update))
            .upsert(true)
            .await?;

        Ok(result.into())
    }

    async fn delete_product(&self, id: ObjectId) -> Result<u64, StoreError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        Ok(result.deleted_count)
    }
}


#[automock]
#[async_trait]
pub(crate) trait ProductsRepository: Send + Sync {
    /// Stores a new product and returns its document id.
    async fn create_product(&self, product: NewProduct) -> Result<ObjectId, StoreError>;

    /// Retrieves all products.
    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;

    /// Retrieves the products whose `category` field matches exactly.
    async fn list_products_by_category(&self, category: &str) -> Result<Vec<Product>, StoreError>;

    /// Retrieves a single product by document id.
    async fn find_product(&self, id: ObjectId) -> Result<Option<Product>, StoreError>;

    /// Retrieves only the title and price of a product, projected for
    /// order enrichment.
    async fn find_product_summary(
        &self,
        id: ObjectId,
    ) -> Result<Option<ProductSummary>, StoreError>;

    /// Replaces the catalogue field set of a product, creating the document
    /// when the id matches nothing.
    async fn upsert_product(
        &self,
        id: ObjectId,
        update: ProductUpdate,
    ) -> Result<UpsertOutcome, StoreError>;

    /// Deletes a product by document id.
    async fn delete_product(&self, id: ObjectId) -> Result<u64, StoreError>;
}
