//! Dynamic field values
//!
//! Values travel through builders as `serde_json::Value` and are decoded into
//! the field's declared type when a record is constructed or updated.

use crate::error::{BuilderError, Result};
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Ordered field name → value store.
///
/// Insertion order is kept; inserting an existing name replaces its value in
/// place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Values {
    entries: Vec<(String, Value)>,
}

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.position(name).map(|index| &self.entries[index].1)
    }

    /// Insert or replace, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        let name = name.into();
        match self.position(&name) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.position(name)
            .map(|index| self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Remove and decode `name`; `None` if it was never supplied.
    pub fn take<T: DeserializeOwned>(&mut self, record: &'static str, name: &str) -> Result<Option<T>> {
        match self.remove(name) {
            Some(value) => decode(record, name, value).map(Some),
            None => Ok(None),
        }
    }

    /// Remove and decode `name`, failing with `MissingField` if absent.
    pub fn take_required<T: DeserializeOwned>(&mut self, record: &'static str, name: &str) -> Result<T> {
        self.take(record, name)?
            .ok_or_else(|| BuilderError::missing_fields(record, [name]))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == name)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Values {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut values = Values::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}

impl IntoIterator for Values {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Values {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Decode a dynamic value into a field's declared type.
pub fn decode<T: DeserializeOwned>(record: &'static str, field: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|err| BuilderError::invalid_value(record, field, err))
}

/// Check that a dynamic value decodes into a field's declared type.
pub fn check<T: DeserializeOwned>(record: &'static str, field: &str, value: &Value) -> Result<()> {
    T::deserialize(value)
        .map(|_| ())
        .map_err(|err| BuilderError::invalid_value(record, field, err))
}

/// Encode a typed value for dynamic storage.
pub fn encode<T: Serialize + ?Sized>(record: &'static str, field: &str, value: &T) -> Result<Value> {
    to_value(value).map_err(|err| BuilderError::invalid_value(record, field, err))
}

/// Convert to a dynamic value, refusing anything JSON cannot hold exactly.
///
/// `serde_json` turns NaN and infinities into `null`, which would decode as
/// a different value (or not at all), so they are rejected up front.
/// Integers outside the 64-bit range fail inside `serde_json` itself.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Value> {
    // YAML numbers keep non-finite floats; a value YAML cannot take is left
    // for serde_json to report
    if let Ok(document) = serde_yaml::to_value(value) {
        if let Some(number) = non_finite(&document) {
            return Err(<serde_json::Error as serde::ser::Error>::custom(format_args!(
                "non-finite float {} cannot be stored as a field value",
                number
            )));
        }
    }
    serde_json::to_value(value)
}

fn non_finite(document: &serde_yaml::Value) -> Option<f64> {
    use serde_yaml::Value as Yaml;
    match document {
        Yaml::Number(number) if !number.is_finite() => number.as_f64(),
        Yaml::Sequence(items) => items.iter().find_map(non_finite),
        Yaml::Mapping(map) => map
            .iter()
            .find_map(|(key, value)| non_finite(key).or_else(|| non_finite(value))),
        Yaml::Tagged(tagged) => non_finite(&tagged.value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut values = Values::new();
        values.insert("y", json!(7));
        values.insert("x", json!(3));
        assert_eq!(values.insert("y", json!(8)), Some(json!(7)));
        assert_eq!(values.names().collect::<Vec<_>>(), vec!["y", "x"]);
        assert_eq!(values.get("y"), Some(&json!(8)));
    }

    #[test]
    fn test_take_decodes() {
        let mut values: Values = [("x", json!(5.8))].into_iter().collect();
        let x: Option<f64> = values.take("Point", "x").unwrap();
        assert_eq!(x, Some(5.8));
        assert!(values.is_empty());
        let w: Option<f64> = values.take("Point", "w").unwrap();
        assert_eq!(w, None);
    }

    #[test]
    fn test_take_required_missing() {
        let mut values = Values::new();
        let err = values.take_required::<f64>("Point", "x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
    }

    #[test]
    fn test_decode_wrong_type() {
        let err = decode::<i64>("PixelCoord", "x", json!("three")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert!(check::<i64>("PixelCoord", "x", &json!(3)).is_ok());
        assert!(check::<i64>("PixelCoord", "x", &json!([3])).is_err());
    }

    #[test]
    fn test_encode_rejects_non_finite_floats() {
        let err = encode("Point", "x", &f64::NAN).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert!(err.to_string().contains("non-finite float NaN"));

        let nested = vec![1.0, f64::INFINITY];
        assert!(encode("Collections", "sequence", &nested).is_err());
        assert_eq!(encode("Point", "x", &2.5).unwrap(), json!(2.5));
        assert_eq!(encode::<Option<f64>>("Point", "x", &None).unwrap(), json!(null));
    }

    #[test]
    fn test_encode_rejects_wide_integers() {
        let err = encode("Wide", "big", &(1i128 << 100)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(encode("Wide", "big", &(1i128 << 40)).unwrap(), json!(1u64 << 40));
    }

    #[test]
    fn test_serialize_keeps_order() {
        let values: Values = [("y", json!(1)), ("x", json!(2))].into_iter().collect();
        assert_eq!(serde_json::to_string(&values).unwrap(), r#"{"y":1,"x":2}"#);
    }
}
