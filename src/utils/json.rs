use mongodb::bson::{Bson, Document};
use serde_json::{Map, Value};

/// Renders a BSON value the way clients expect to read it back:
/// ObjectIds become plain hex strings, everything else is relaxed extended JSON.
pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

pub fn document_to_json(doc: Document) -> Value {
    let map: Map<String, Value> = doc
        .into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect();
    Value::Object(map)
}

pub fn serialize_bson<S>(value: &Bson, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serde::Serialize::serialize(&bson_to_json(value.clone()), serializer)
}

pub fn serialize_optional_bson<S>(value: &Option<Bson>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let rendered = value.clone().map(bson_to_json).unwrap_or(Value::Null);
    serde::Serialize::serialize(&rendered, serializer)
}
