pub mod book;
pub mod category;
pub mod user;

pub use book::*;
pub use category::*;
pub use user::*;

use crate::utils::AppError;
use mongodb::bson::{self, Document};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

/// Converts a create payload into the stored document. Known fields are coerced through
/// `T` so they get the same BSON types an update writes; unknown fields are kept as sent.
pub fn validated_document<T: DeserializeOwned + Serialize>(
    payload: Map<String, Value>,
) -> Result<Document, AppError> {
    let typed: T = serde_json::from_value(Value::Object(payload.clone()))
        .map_err(|e| AppError::InvalidRequest(e.to_string()))?;
    let mut known = bson::to_document(&typed)?;

    let mut document = Document::new();
    for (key, value) in payload {
        let value = match known.remove(&key) {
            Some(coerced) => coerced,
            None => bson::to_bson(&value)?,
        };
        document.insert(key, value);
    }
    Ok(document)
}

/// The `$set` body of a whitelisted update. Every whitelisted field is written;
/// fields left out of the request are set to null.
pub fn set_document<T: Serialize>(update: &T) -> Result<Document, AppError> {
    Ok(bson::to_document(update)?)
}
