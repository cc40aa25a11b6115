// Users are keyed by the externally issued `uid`, never by `_id`.

use super::{render_all, render_one};
use crate::{
    models::{set_document, validated_document, User, UserUpdate},
    store::{DeleteAck, DocumentStore, InsertAck, UpdateAck},
    utils::AppError,
};
use mongodb::bson::doc;
use serde_json::{Map, Value};

pub const COLLECTION: &str = "users";

pub async fn list_users(store: &dyn DocumentStore) -> Result<Value, AppError> {
    let users = store.find_all(COLLECTION).await?;
    Ok(render_all(users))
}

pub async fn get_user(store: &dyn DocumentStore, uid: &str) -> Result<Value, AppError> {
    let user = store.find_one(COLLECTION, doc! { "uid": uid }).await?;
    Ok(render_one(user))
}

pub async fn create_user(
    store: &dyn DocumentStore,
    payload: Map<String, Value>,
) -> Result<InsertAck, AppError> {
    let document = validated_document::<User>(payload)?;
    store.insert_one(COLLECTION, document).await
}

pub async fn update_user(
    store: &dyn DocumentStore,
    uid: &str,
    update: &UserUpdate,
) -> Result<UpdateAck, AppError> {
    let fields = set_document(update)?;
    store
        .upsert_one(COLLECTION, doc! { "uid": uid }, fields)
        .await
}

pub async fn delete_user(store: &dyn DocumentStore, uid: &str) -> Result<DeleteAck, AppError> {
    store.delete_one(COLLECTION, doc! { "uid": uid }).await
}
