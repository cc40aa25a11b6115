use super::{DeleteAck, DocumentStore, InsertAck, UpdateAck};
use crate::utils::AppError;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-process document store with MongoDB-like equality filters and upsert semantics.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

/// Puts `_id` first, generating one when the document has none.
fn with_id(mut document: Document) -> (Bson, Document) {
    let id = document
        .remove("_id")
        .unwrap_or_else(|| Bson::ObjectId(ObjectId::new()));
    let mut stored = Document::new();
    stored.insert("_id", id.clone());
    for (key, value) in document {
        stored.insert(key, value);
    }
    (id, stored)
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, AppError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, AppError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| matches(doc, &filter)))
            .cloned())
    }

    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<InsertAck, AppError> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();

        let (inserted_id, stored) = with_id(document);
        if docs.iter().any(|doc| doc.get("_id") == Some(&inserted_id)) {
            return Err(AppError::DatabaseError(format!(
                "duplicate key in {}: _id {}",
                collection, inserted_id
            )));
        }
        docs.push(stored);

        Ok(InsertAck {
            acknowledged: true,
            inserted_id,
        })
    }

    async fn upsert_one(
        &self,
        collection: &str,
        filter: Document,
        fields: Document,
    ) -> Result<UpdateAck, AppError> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();

        if let Some(existing) = docs.iter_mut().find(|doc| matches(doc, &filter)) {
            let mut modified = false;
            for (key, value) in fields {
                if existing.get(&key) != Some(&value) {
                    existing.insert(key, value);
                    modified = true;
                }
            }
            return Ok(UpdateAck {
                acknowledged: true,
                matched_count: 1,
                modified_count: u64::from(modified),
                upserted_id: None,
                upserted_count: 0,
            });
        }

        let mut created = filter;
        for (key, value) in fields {
            created.insert(key, value);
        }
        let (upserted_id, stored) = with_id(created);
        docs.push(stored);

        Ok(UpdateAck {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
            upserted_id: Some(upserted_id),
            upserted_count: 1,
        })
    }

    async fn delete_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<DeleteAck, AppError> {
        let mut collections = self.collections.write().await;
        let deleted_count = match collections.get_mut(collection) {
            Some(docs) => match docs.iter().position(|doc| matches(doc, &filter)) {
                Some(index) => {
                    docs.remove(index);
                    1
                }
                None => 0,
            },
            None => 0,
        };

        Ok(DeleteAck {
            acknowledged: true,
            deleted_count,
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
