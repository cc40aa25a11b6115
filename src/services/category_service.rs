use super::{parse_object_id, render_all, render_one};
use crate::{
    models::{set_document, validated_document, Category, CategoryUpdate},
    store::{DeleteAck, DocumentStore, InsertAck, UpdateAck},
    utils::AppError,
};
use mongodb::bson::doc;
use serde_json::{Map, Value};

pub const COLLECTION: &str = "category";

pub async fn list_categories(store: &dyn DocumentStore) -> Result<Value, AppError> {
    let categories = store.find_all(COLLECTION).await?;
    Ok(render_all(categories))
}

pub async fn get_category(store: &dyn DocumentStore, id: &str) -> Result<Value, AppError> {
    let oid = parse_object_id(id)?;
    let category = store.find_one(COLLECTION, doc! { "_id": oid }).await?;
    Ok(render_one(category))
}

pub async fn create_category(
    store: &dyn DocumentStore,
    payload: Map<String, Value>,
) -> Result<InsertAck, AppError> {
    let document = validated_document::<Category>(payload)?;
    store.insert_one(COLLECTION, document).await
}

pub async fn update_category(
    store: &dyn DocumentStore,
    id: &str,
    update: &CategoryUpdate,
) -> Result<UpdateAck, AppError> {
    let oid = parse_object_id(id)?;
    let fields = set_document(update)?;
    store
        .upsert_one(COLLECTION, doc! { "_id": oid }, fields)
        .await
}

pub async fn delete_category(
    store: &dyn DocumentStore,
    id: &str,
) -> Result<DeleteAck, AppError> {
    let oid = parse_object_id(id)?;
    store.delete_one(COLLECTION, doc! { "_id": oid }).await
}
