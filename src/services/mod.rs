pub mod book_service;
pub mod category_service;
pub mod user_service;

use crate::utils::{document_to_json, AppError};
use mongodb::bson::{oid::ObjectId, Document};
use serde_json::Value;

/// Category and book routes address documents by their native ObjectId.
pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::InvalidId(id.to_string()))
}

pub(crate) fn render_all(documents: Vec<Document>) -> Value {
    Value::Array(documents.into_iter().map(document_to_json).collect())
}

/// A missing document renders as JSON `null`.
pub(crate) fn render_one(document: Option<Document>) -> Value {
    document.map(document_to_json).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id() {
        let oid = ObjectId::new();
        assert_eq!(parse_object_id(&oid.to_hex()).unwrap(), oid);
        assert!(matches!(
            parse_object_id("not-an-id"),
            Err(AppError::InvalidId(_))
        ));
    }

    #[test]
    fn test_render_missing_is_null() {
        assert_eq!(render_one(None), Value::Null);
        assert_eq!(render_all(vec![]), Value::Array(vec![]));
    }
}
