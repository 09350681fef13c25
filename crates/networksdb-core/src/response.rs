//! Nested-access wrapper over decoded JSON response bodies.
//!
//! The API returns loosely structured JSON whose shape varies by endpoint and
//! by outcome (an invalid key yields an `{"error": ...}` object on the same
//! endpoint that normally returns data). [`ResponseObject`] keeps the body as
//! decoded and lets callers walk it by key:
//!
//! ```rust,ignore
//! let org = resp.get("organisation")?;
//! let name = resp.path(&["organisation", "name"])?.as_str();
//! ```

use crate::error::{NetworksDbError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

type Object = Map<String, Value>;

const INDENT: &[u8] = b"    ";

/// Owned JSON object returned by every API call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseObject {
    data: Object,
}

/// Borrowed view of a (possibly nested) JSON object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseRef<'a> {
    data: &'a Object,
}

/// Mutable view of a (possibly nested) JSON object
///
/// Writes go straight into the tree the view was taken from.
#[derive(Debug)]
pub struct ResponseMut<'a> {
    data: &'a mut Object,
}

/// Result of looking up a key
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'a> {
    /// Nested object, wrapped for further lookups
    Object(ResponseRef<'a>),
    /// JSON array, passed through as-is
    Array(&'a [Value]),
    /// String, number, boolean or null
    Scalar(&'a Value),
}

/// Result of looking up a key for modification
#[derive(Debug)]
pub enum FieldMut<'a> {
    /// Nested object, wrapped for further lookups
    Object(ResponseMut<'a>),
    /// Any other value
    Value(&'a mut Value),
}

fn lookup<'a>(data: &'a Object, key: &str) -> Result<Field<'a>> {
    match data.get(key) {
        Some(Value::Object(nested)) => Ok(Field::Object(ResponseRef { data: nested })),
        Some(Value::Array(items)) => Ok(Field::Array(items)),
        Some(other) => Ok(Field::Scalar(other)),
        None => Err(NetworksDbError::not_found(key)),
    }
}

fn lookup_mut<'a>(data: &'a mut Object, key: &str) -> Result<FieldMut<'a>> {
    match data.get_mut(key) {
        Some(Value::Object(nested)) => Ok(FieldMut::Object(ResponseMut { data: nested })),
        Some(other) => Ok(FieldMut::Value(other)),
        None => Err(NetworksDbError::not_found(key)),
    }
}

fn lookup_path<'a>(data: &'a Object, keys: &[&str]) -> Result<Field<'a>> {
    let mut current = Field::Object(ResponseRef { data });
    for key in keys {
        current = current.get(key)?;
    }
    Ok(current)
}

fn remove(data: &mut Object, key: &str) -> Result<Value> {
    data.shift_remove(key)
        .ok_or_else(|| NetworksDbError::not_found(key))
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn write_pretty(data: &Object, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    data.serialize(&mut ser).map_err(|_| fmt::Error)?;
    f.write_str(std::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
}

impl ResponseObject {
    /// Wrap an already decoded JSON object
    #[must_use]
    pub const fn new(data: Object) -> Self {
        Self { data }
    }

    /// Borrow the whole tree as a view
    #[must_use]
    pub const fn view(&self) -> ResponseRef<'_> {
        ResponseRef { data: &self.data }
    }

    /// Borrow the whole tree mutably
    pub fn view_mut(&mut self) -> ResponseMut<'_> {
        ResponseMut { data: &mut self.data }
    }

    /// Look up a top-level key
    pub fn get(&self, key: &str) -> Result<Field<'_>> {
        lookup(&self.data, key)
    }

    /// Look up a top-level key for modification
    pub fn get_mut(&mut self, key: &str) -> Result<FieldMut<'_>> {
        lookup_mut(&mut self.data, key)
    }

    /// Follow a chain of keys through nested objects
    pub fn path(&self, keys: &[&str]) -> Result<Field<'_>> {
        lookup_path(&self.data, keys)
    }

    /// Insert or replace a top-level value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.data.insert(key.into(), value.into());
    }

    /// Remove a top-level key, returning its value
    pub fn delete(&mut self, key: &str) -> Result<Value> {
        remove(&mut self.data, key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Top-level keys in stored order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub const fn as_map(&self) -> &Object {
        &self.data
    }

    #[must_use]
    pub fn into_map(self) -> Object {
        self.data
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.data)
    }

    /// Decode the body into a caller-defined type
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(T::deserialize(&self.data)?)
    }
}

impl<'a> ResponseRef<'a> {
    /// Look up a key in this object
    pub fn get(&self, key: &str) -> Result<Field<'a>> {
        lookup(self.data, key)
    }

    /// Follow a chain of keys through nested objects
    pub fn path(&self, keys: &[&str]) -> Result<Field<'a>> {
        lookup_path(self.data, keys)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> {
        self.data.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The underlying map, shared with the owning tree
    #[must_use]
    pub const fn as_map(&self) -> &'a Object {
        self.data
    }

    /// Copy this subtree out into its own [`ResponseObject`]
    #[must_use]
    pub fn to_owned_object(&self) -> ResponseObject {
        ResponseObject::new(self.data.clone())
    }
}

impl<'a> ResponseMut<'a> {
    /// Look up a key in this object
    pub fn get(&self, key: &str) -> Result<Field<'_>> {
        lookup(&*self.data, key)
    }

    /// Look up a key for modification
    pub fn get_mut(&mut self, key: &str) -> Result<FieldMut<'_>> {
        lookup_mut(&mut *self.data, key)
    }

    /// Consume the view, descending into `key` with the full lifetime
    pub fn into_field(self, key: &str) -> Result<FieldMut<'a>> {
        lookup_mut(self.data, key)
    }

    /// Insert or replace a value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.data.insert(key.into(), value.into());
    }

    /// Remove a key, returning its value
    pub fn delete(&mut self, key: &str) -> Result<Value> {
        remove(&mut *self.data, key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    #[must_use]
    pub fn as_map(&self) -> &Object {
        &*self.data
    }
}

impl<'a> Field<'a> {
    /// Look up a key if this field is an object
    pub fn get(&self, key: &str) -> Result<Self> {
        match self {
            Self::Object(obj) => obj.get(key),
            _ => Err(NetworksDbError::not_found(key)),
        }
    }

    #[must_use]
    pub const fn as_object(&self) -> Option<ResponseRef<'a>> {
        match self {
            Self::Object(obj) => Some(*obj),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_array(&self) -> Option<&'a [Value]> {
        match self {
            Self::Array(items) => Some(*items),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_scalar(&self) -> Option<&'a Value> {
        match self {
            Self::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&'a str> {
        self.as_scalar().and_then(Value::as_str)
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_scalar().and_then(Value::as_i64)
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_scalar().and_then(Value::as_f64)
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(Value::as_bool)
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(Value::Null))
    }

    /// Copy the field out as a plain JSON value
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Object(obj) => Value::Object(obj.data.clone()),
            Self::Array(items) => Value::Array(items.to_vec()),
            Self::Scalar(value) => (*value).clone(),
        }
    }
}

impl<'a> FieldMut<'a> {
    /// The nested object view, if this field is one
    #[must_use]
    pub fn into_object(self) -> Option<ResponseMut<'a>> {
        match self {
            Self::Object(obj) => Some(obj),
            Self::Value(_) => None,
        }
    }
}

impl TryFrom<Value> for ResponseObject {
    type Error = NetworksDbError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(data) => Ok(Self { data }),
            other => Err(NetworksDbError::UnexpectedPayload {
                found: kind_of(&other),
            }),
        }
    }
}

impl FromStr for ResponseObject {
    type Err = NetworksDbError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(serde_json::from_str::<Value>(s)?)
    }
}

impl From<Object> for ResponseObject {
    fn from(data: Object) -> Self {
        Self { data }
    }
}

impl From<ResponseObject> for Value {
    fn from(obj: ResponseObject) -> Self {
        obj.into_value()
    }
}

impl fmt::Display for ResponseObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pretty(&self.data, f)
    }
}

impl fmt::Display for ResponseRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pretty(self.data, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ResponseObject {
        ResponseObject::try_from(json!({
            "ip": "8.8.8.8",
            "total": 2,
            "ipv6": false,
            "note": null,
            "organisation": {
                "id": "google-inc",
                "name": "Google Inc.",
                "address": { "country": "US" }
            },
            "domains": ["dns.google", "google-public-dns-a.google.com"]
        }))
        .unwrap()
    }

    #[test]
    fn test_scalar_fields_match_direct_lookup() {
        let resp = sample();
        let raw = resp.as_map().clone();

        for key in ["ip", "total", "ipv6", "note"] {
            assert_eq!(resp.get(key).unwrap().as_scalar(), raw.get(key));
        }
        assert_eq!(resp.get("ip").unwrap().as_str(), Some("8.8.8.8"));
        assert_eq!(resp.get("total").unwrap().as_i64(), Some(2));
        assert_eq!(resp.get("ipv6").unwrap().as_bool(), Some(false));
        assert!(resp.get("note").unwrap().is_null());
    }

    #[test]
    fn test_arrays_pass_through() {
        let resp = sample();
        let domains = resp.get("domains").unwrap().as_array().unwrap();
        assert_eq!(domains.len(), 2);
        assert_eq!(domains[0], "dns.google");
    }

    #[test]
    fn test_nested_object_is_a_view_of_the_same_tree() {
        let resp = sample();
        let org = resp.get("organisation").unwrap().as_object().unwrap();

        let underlying = resp.as_map()["organisation"].as_object().unwrap();
        assert!(std::ptr::eq(org.as_map(), underlying));
        assert_eq!(org.get("name").unwrap().as_str(), Some("Google Inc."));
    }

    #[test]
    fn test_chained_access() {
        let resp = sample();
        let country = resp
            .get("organisation")
            .and_then(|f| f.get("address"))
            .and_then(|f| f.get("country"))
            .unwrap();
        assert_eq!(country.as_str(), Some("US"));

        let same = resp.path(&["organisation", "address", "country"]).unwrap();
        assert_eq!(same, country);
    }

    #[test]
    fn test_mutation_through_nested_view_is_visible() {
        let mut resp = sample();
        resp.get_mut("organisation")
            .unwrap()
            .into_object()
            .unwrap()
            .set("asn", 15169);

        assert_eq!(resp.as_map()["organisation"]["asn"], json!(15169));

        let deep = resp.view_mut().into_field("organisation").unwrap().into_object().unwrap();
        let mut address = deep.into_field("address").unwrap().into_object().unwrap();
        address.delete("country").unwrap();
        assert!(!resp.as_map()["organisation"]["address"]
            .as_object()
            .unwrap()
            .contains_key("country"));
    }

    #[test]
    fn test_mutating_scalar_in_place() {
        let mut resp = sample();
        if let FieldMut::Value(v) = resp.get_mut("total").unwrap() {
            *v = json!(3);
        }
        assert_eq!(resp.get("total").unwrap().as_i64(), Some(3));
    }

    #[test]
    fn test_missing_key_is_not_found() {
        let resp = sample();
        let err = resp.get("asn").unwrap_err();
        assert!(matches!(
            err,
            NetworksDbError::NotFound { ref key, type_name: "ResponseObject" } if key == "asn"
        ));

        let err = resp.path(&["organisation", "missing"]).unwrap_err();
        assert!(err.is_not_found());

        // descending into a scalar is also a miss
        assert!(resp.path(&["ip", "octets"]).unwrap_err().is_not_found());
    }

    #[test]
    fn test_set_and_delete() {
        let mut resp = sample();
        resp.set("page", 2);
        assert_eq!(resp.get("page").unwrap().as_i64(), Some(2));
        assert_eq!(resp.keys().last(), Some("page"));

        assert_eq!(resp.delete("ip").unwrap(), json!("8.8.8.8"));
        assert!(!resp.contains_key("ip"));
        assert_eq!(resp.keys().next(), Some("total"));
        assert!(resp.delete("ip").unwrap_err().is_not_found());
    }

    #[test]
    fn test_display_uses_four_space_indent_and_keeps_order() {
        let resp: ResponseObject = r#"{"a": 1, "b": {"c": 2}}"#.parse().unwrap();
        assert_eq!(
            resp.to_string(),
            "{\n    \"a\": 1,\n    \"b\": {\n        \"c\": 2\n    }\n}"
        );

        let reordered: ResponseObject = r#"{"z": true, "a": [1, 2]}"#.parse().unwrap();
        assert_eq!(
            reordered.to_string(),
            "{\n    \"z\": true,\n    \"a\": [\n        1,\n        2\n    ]\n}"
        );
    }

    #[test]
    fn test_nested_view_display() {
        let resp = sample();
        let address = resp.path(&["organisation", "address"]).unwrap().as_object().unwrap();
        assert_eq!(address.to_string(), "{\n    \"country\": \"US\"\n}");
    }

    #[test]
    fn test_error_payload_is_just_an_object() {
        let resp: ResponseObject = r#"{"error": "Invalid API key"}"#.parse().unwrap();
        assert_eq!(resp.get("error").unwrap().as_str(), Some("Invalid API key"));
    }

    #[test]
    fn test_non_object_payload_rejected() {
        let err = "[1, 2]".parse::<ResponseObject>().unwrap_err();
        assert!(matches!(err, NetworksDbError::UnexpectedPayload { found: "array" }));

        let err = "not json".parse::<ResponseObject>().unwrap_err();
        assert!(matches!(err, NetworksDbError::Json(_)));
    }

    #[test]
    fn test_deserialize_into_typed_struct() {
        #[derive(Deserialize)]
        struct Org {
            id: String,
            name: String,
        }

        let resp = sample();
        let org: Org = resp
            .get("organisation")
            .unwrap()
            .as_object()
            .unwrap()
            .to_owned_object()
            .deserialize()
            .unwrap();
        assert_eq!(org.id, "google-inc");
        assert_eq!(org.name, "Google Inc.");
    }
}
