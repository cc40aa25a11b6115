use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A book document (collection `book`). `category` is a loose reference and is never checked.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_of_publishing: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,
}

/// Fields a `PUT /book/{id}` may set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookUpdate {
    pub name: Option<String>,
    pub author: Option<String>,
    pub photo_url: Option<String>,
    pub page_count: Option<i64>,
    pub rating: Option<f64>,
    pub category: Option<String>,
    pub publisher: Option<String>,
    pub year_of_publishing: Option<i64>,
    pub synopsis: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{set_document, validated_document};
    use mongodb::bson::Bson;
    use serde_json::json;

    #[test]
    fn test_numeric_fields_coerced() {
        let update: BookUpdate = serde_json::from_value(json!({
            "pageCount": 320,
            "rating": 4,
            "yearOfPublishing": 1999
        }))
        .unwrap();
        let set = set_document(&update).unwrap();
        assert_eq!(set.get("pageCount"), Some(&Bson::Int64(320)));
        assert_eq!(set.get("rating"), Some(&Bson::Double(4.0)));
        assert_eq!(set.get("yearOfPublishing"), Some(&Bson::Int64(1999)));
    }

    #[test]
    fn test_create_and_update_store_same_types() {
        let payload = json!({ "rating": 4, "yearOfPublishing": 1999, "pageCount": 320, "isbn": "x" });
        let created = validated_document::<Book>(payload.as_object().unwrap().clone()).unwrap();
        let update: BookUpdate = serde_json::from_value(payload).unwrap();
        let set = set_document(&update).unwrap();

        for key in ["rating", "yearOfPublishing", "pageCount"] {
            assert_eq!(created.get(key), set.get(key), "field {}", key);
        }
        assert_eq!(created.get("rating"), Some(&Bson::Double(4.0)));
        assert_eq!(created.get_str("isbn").unwrap(), "x");
    }

    #[test]
    fn test_non_numeric_page_count_rejected() {
        let result = serde_json::from_value::<BookUpdate>(json!({ "pageCount": "many" }));
        assert!(result.is_err());
    }
}
