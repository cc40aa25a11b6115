use super::{parse_object_id, render_all, render_one};
use crate::{
    models::{set_document, validated_document, Book, BookUpdate},
    store::{DeleteAck, DocumentStore, InsertAck, UpdateAck},
    utils::AppError,
};
use mongodb::bson::doc;
use serde_json::{Map, Value};

pub const COLLECTION: &str = "book";

pub async fn list_books(store: &dyn DocumentStore) -> Result<Value, AppError> {
    let books = store.find_all(COLLECTION).await?;
    Ok(render_all(books))
}

pub async fn get_book(store: &dyn DocumentStore, id: &str) -> Result<Value, AppError> {
    let oid = parse_object_id(id)?;
    let book = store.find_one(COLLECTION, doc! { "_id": oid }).await?;
    Ok(render_one(book))
}

/// Stores the payload as sent; `category` is not checked against the category collection.
pub async fn create_book(
    store: &dyn DocumentStore,
    payload: Map<String, Value>,
) -> Result<InsertAck, AppError> {
    let document = validated_document::<Book>(payload)?;
    store.insert_one(COLLECTION, document).await
}

pub async fn update_book(
    store: &dyn DocumentStore,
    id: &str,
    update: &BookUpdate,
) -> Result<UpdateAck, AppError> {
    let oid = parse_object_id(id)?;
    let fields = set_document(update)?;
    store
        .upsert_one(COLLECTION, doc! { "_id": oid }, fields)
        .await
}

pub async fn delete_book(store: &dyn DocumentStore, id: &str) -> Result<DeleteAck, AppError> {
    let oid = parse_object_id(id)?;
    store.delete_one(COLLECTION, doc! { "_id": oid }).await
}
