//! Represents one country record in the collection.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! Apart from `id`, the fields are whatever the caller sent: the record is an
//! ordered JSON object, and only `id` is raised to a typed field.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use std::fmt::Display;

use crate::country_actor::CountryError;
use crate::framework::ResourceId;

/// Key under which the id is stored inside the record's fields.
pub const ID_FIELD: &str = "id";

/// Type-safe identifier for Countries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryId(pub u32);

impl From<u32> for CountryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CountryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ResourceId for CountryId {
    fn first() -> Self {
        Self(1)
    }

    fn successor(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

/// A country as stored and served.
///
/// `fields` always holds an `"id"` entry equal to `id`. Serializing a `Country`
/// writes `fields` as-is, so the JSON object keeps the caller's key order.
#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    id: CountryId,
    fields: Map<String, Value>,
}

impl Country {
    /// Builds a record from a field map, forcing its id to `id`.
    ///
    /// An existing `"id"` key is overwritten where it stands; otherwise the key
    /// is appended after the other fields.
    pub fn with_id(id: CountryId, mut fields: Map<String, Value>) -> Self {
        fields.insert(ID_FIELD.to_string(), Value::from(id.0));
        Self { id, fields }
    }

    /// Builds one of the seed records, with `id` listed first.
    pub fn seed(id: u32, name: &str, capital: &str, area: u64) -> Self {
        let mut fields = Map::new();
        fields.insert(ID_FIELD.to_string(), Value::from(id));
        fields.insert("name".to_string(), Value::from(name));
        fields.insert("capital".to_string(), Value::from(capital));
        fields.insert("area".to_string(), Value::from(area));
        Self::with_id(CountryId(id), fields)
    }

    pub fn id(&self) -> CountryId {
        self.id
    }

    /// Looks up a field by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// All fields, `id` included, in serialization order.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl Serialize for Country {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

/// The collection every server process starts with.
pub fn seed_countries() -> Vec<Country> {
    vec![
        Country::seed(1, "Thailand", "Bangkok", 513_120),
        Country::seed(2, "Australia", "Canberra", 7_617_930),
        Country::seed(3, "Egypt", "Cairo", 1_010_408),
    ]
}

/// Payload for appending a country: any JSON object.
///
/// The shape of the object is not checked. An `"id"` it carries is kept only
/// as a position; its value is replaced by the assigned id.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct CountryCreate(pub Map<String, Value>);

impl TryFrom<Value> for CountryCreate {
    type Error = CountryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(CountryError::InvalidPayload(format!(
                "Request body must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
