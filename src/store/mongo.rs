use super::{DeleteAck, DocumentStore, InsertAck, UpdateAck};
use crate::database::MongoDB;
use crate::utils::AppError;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};

#[async_trait]
impl DocumentStore for MongoDB {
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, AppError> {
        let cursor = self
            .collection::<Document>(collection)
            .find(doc! {})
            .await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, AppError> {
        let document = self
            .collection::<Document>(collection)
            .find_one(filter)
            .await?;
        Ok(document)
    }

    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<InsertAck, AppError> {
        let result = self
            .collection::<Document>(collection)
            .insert_one(document)
            .await?;
        Ok(InsertAck {
            acknowledged: true,
            inserted_id: result.inserted_id,
        })
    }

    async fn upsert_one(
        &self,
        collection: &str,
        filter: Document,
        fields: Document,
    ) -> Result<UpdateAck, AppError> {
        let result = self
            .collection::<Document>(collection)
            .update_one(filter, doc! { "$set": fields })
            .upsert(true)
            .await?;
        let upserted_count = if result.upserted_id.is_some() { 1 } else { 0 };
        Ok(UpdateAck {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id,
            upserted_count,
        })
    }

    async fn delete_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<DeleteAck, AppError> {
        let result = self
            .collection::<Document>(collection)
            .delete_one(filter)
            .await?;
        Ok(DeleteAck {
            acknowledged: true,
            deleted_count: result.deleted_count,
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        MongoDB::ping(self).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    async fn connect() -> MongoDB {
        dotenv::dotenv().ok();
        let uri = std::env::var("MONGO_DB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        MongoDB::connect(&uri, "DbBootcamp_test").await.unwrap()
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_upsert_creates_document_with_filter_key() {
        let db = connect().await;
        let uid = format!("test-{}", ObjectId::new().to_hex());

        let ack = db
            .upsert_one("users", doc! { "uid": &uid }, doc! { "name": "Jo" })
            .await
            .unwrap();
        assert_eq!(ack.matched_count, 0);
        assert!(ack.upserted_id.is_some());

        let found = db
            .find_one("users", doc! { "uid": &uid })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.get_str("name").unwrap(), "Jo");

        let deleted = db.delete_one("users", doc! { "uid": &uid }).await.unwrap();
        assert_eq!(deleted.deleted_count, 1);
    }
}
