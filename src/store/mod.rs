//! Document store seam.
//!
//! Every API operation is exactly one call on a [`DocumentStore`]. The process holds a
//! single `Arc<dyn DocumentStore>` for its whole lifetime and hands it to handlers through
//! `web::Data`, so the same handlers run against MongoDB in production and against
//! [`MemoryStore`] in tests.

pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;

use crate::utils::{serialize_bson, serialize_optional_bson, AppError};
use async_trait::async_trait;
use mongodb::bson::{Bson, Document};
use serde::Serialize;

/// Acknowledgment of an insert.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    #[serde(serialize_with = "serialize_bson")]
    #[schema(value_type = String)]
    pub inserted_id: Bson,
}

/// Acknowledgment of an upsert.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    #[serde(serialize_with = "serialize_optional_bson")]
    #[schema(value_type = Option<String>)]
    pub upserted_id: Option<Bson>,
    pub upserted_count: u64,
}

/// Acknowledgment of a delete.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents of `collection`, in natural order.
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, AppError>;

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, AppError>;

    async fn insert_one(&self, collection: &str, document: Document)
        -> Result<InsertAck, AppError>;

    /// `$set`s `fields` on the first document matching `filter`, inserting
    /// `filter + fields` when nothing matches.
    async fn upsert_one(
        &self,
        collection: &str,
        filter: Document,
        fields: Document,
    ) -> Result<UpdateAck, AppError>;

    async fn delete_one(&self, collection: &str, filter: Document)
        -> Result<DeleteAck, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}
