use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user document (collection `users`), keyed by the externally issued `uid`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
}

/// Fields a `PUT /user/{uid}` may set. Anything else in the body is dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub photo_url: Option<String>,
    pub is_admin: Option<bool>,
    pub is_enabled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{set_document, validated_document};
    use mongodb::bson::Bson;
    use serde_json::json;

    #[test]
    fn test_update_drops_unknown_fields() {
        let update: UserUpdate = serde_json::from_value(json!({
            "name": "Jo",
            "isAdmin": true,
            "uid": "hijack",
            "role": "root"
        }))
        .unwrap();
        let set = set_document(&update).unwrap();
        assert_eq!(set.get_str("name").unwrap(), "Jo");
        assert!(set.get_bool("isAdmin").unwrap());
        assert!(!set.contains_key("uid"));
        assert!(!set.contains_key("role"));
    }

    #[test]
    fn test_update_writes_every_whitelisted_field() {
        let update: UserUpdate = serde_json::from_value(json!({ "name": "Jo", "address": null })).unwrap();
        let set = set_document(&update).unwrap();
        let keys: Vec<&str> = set.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["name", "phoneNumber", "address", "photoUrl", "isAdmin", "isEnabled"]
        );
        for key in ["phoneNumber", "address", "photoUrl", "isAdmin", "isEnabled"] {
            assert_eq!(set.get(key), Some(&Bson::Null), "field {}", key);
        }
    }

    #[test]
    fn test_payload_kept_verbatim() {
        let payload = json!({ "uid": "u1", "name": "Ann", "favouriteGenre": "sci-fi" });
        let doc = validated_document::<User>(payload.as_object().unwrap().clone()).unwrap();
        assert_eq!(doc.get_str("favouriteGenre").unwrap(), "sci-fi");
        assert_eq!(doc.get_str("uid").unwrap(), "u1");
    }

    #[test]
    fn test_payload_with_wrong_types_rejected() {
        let payload = json!({ "uid": "u1", "isAdmin": "yes" });
        assert!(validated_document::<User>(payload.as_object().unwrap().clone()).is_err());
    }
}
