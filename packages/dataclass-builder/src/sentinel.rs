//! Placeholders for unset builder fields
//!
//! An unset field is never represented by a value of the field's own type.
//! Typed builders hold a [`Slot<T>`] per field and dynamic reads return a
//! [`FieldValue`]; both carry the unset state as an enum variant, so copying
//! a builder can never turn a placeholder into something that looks like a
//! real value, and comparisons against the placeholders never consult the
//! field type's own `PartialEq`.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Marker for the state of a field that has not been assigned.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentinel {
    /// Unset field without a default; must be assigned before building
    Required,
    /// Unset field with a default; the record's default is used
    Optional,
    /// Generic absence, e.g. a field declaring no default
    Missing,
}

/// Unset required field.
pub const REQUIRED: Sentinel = Sentinel::Required;

/// Unset optional field.
pub const OPTIONAL: Sentinel = Sentinel::Optional;

/// Absent value.
pub const MISSING: Sentinel = Sentinel::Missing;

impl Sentinel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Sentinel::Required => "REQUIRED",
            Sentinel::Optional => "OPTIONAL",
            Sentinel::Missing => "MISSING",
        }
    }

    /// Every sentinel denotes some flavour of "no value".
    pub const fn is_missing(&self) -> bool {
        true
    }
}

impl fmt::Debug for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed state of one field in a generated builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot<T> {
    Required,
    Optional,
    Set(T),
}

impl<T> Slot<T> {
    /// Initial slot for a field, depending on whether it declares a default.
    pub const fn unset(optional: bool) -> Self {
        if optional {
            Slot::Optional
        } else {
            Slot::Required
        }
    }

    pub const fn is_set(&self) -> bool {
        matches!(self, Slot::Set(_))
    }

    pub const fn sentinel(&self) -> Option<Sentinel> {
        match self {
            Slot::Required => Some(Sentinel::Required),
            Slot::Optional => Some(Sentinel::Optional),
            Slot::Set(_) => None,
        }
    }

    pub fn as_ref(&self) -> Slot<&T> {
        match self {
            Slot::Required => Slot::Required,
            Slot::Optional => Slot::Optional,
            Slot::Set(value) => Slot::Set(value),
        }
    }

    /// The assigned value, if any.
    pub fn into_option(self) -> Option<T> {
        match self {
            Slot::Set(value) => Some(value),
            _ => None,
        }
    }

    /// Dynamic view of this slot.
    pub fn to_field_value(&self) -> serde_json::Result<FieldValue>
    where
        T: Serialize,
    {
        Ok(match self {
            Slot::Required => FieldValue::Required,
            Slot::Optional => FieldValue::Optional,
            Slot::Set(value) => FieldValue::Set(crate::values::to_value(value)?),
        })
    }
}

impl<T> From<T> for Slot<T> {
    fn from(value: T) -> Self {
        Slot::Set(value)
    }
}

impl<T> PartialEq<Sentinel> for Slot<T> {
    fn eq(&self, other: &Sentinel) -> bool {
        self.sentinel() == Some(*other)
    }
}

/// Result of reading a field by name.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Required,
    Optional,
    Set(Value),
}

impl FieldValue {
    pub const fn sentinel(&self) -> Option<Sentinel> {
        match self {
            FieldValue::Required => Some(Sentinel::Required),
            FieldValue::Optional => Some(Sentinel::Optional),
            FieldValue::Set(_) => None,
        }
    }

    pub const fn is_set(&self) -> bool {
        matches!(self, FieldValue::Set(_))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            FieldValue::Set(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            FieldValue::Set(value) => Some(value),
            _ => None,
        }
    }
}

impl PartialEq<Sentinel> for FieldValue {
    fn eq(&self, other: &Sentinel) -> bool {
        self.sentinel() == Some(*other)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Required => f.write_str(REQUIRED.as_str()),
            FieldValue::Optional => f.write_str(OPTIONAL.as_str()),
            FieldValue::Set(value) => write!(f, "{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_constants_are_distinct() {
        assert_eq!(REQUIRED, REQUIRED);
        assert_ne!(REQUIRED, OPTIONAL);
        assert_ne!(REQUIRED, MISSING);
        assert_eq!(OPTIONAL, OPTIONAL);
        assert_ne!(OPTIONAL, MISSING);
        assert_eq!(MISSING, MISSING);
    }

    #[test]
    fn test_constants_after_copy() {
        let required = REQUIRED;
        let optional = OPTIONAL.clone();
        assert_eq!(required, REQUIRED);
        assert_ne!(required, OPTIONAL);
        assert_eq!(optional, OPTIONAL);
        assert_ne!(optional, MISSING);
    }

    #[test]
    fn test_constants_repr() {
        assert_eq!(format!("{:?}", REQUIRED), "REQUIRED");
        assert_eq!(OPTIONAL.to_string(), "OPTIONAL");
        assert_eq!(MISSING.to_string(), "MISSING");
    }

    #[test]
    fn test_all_sentinels_are_missing() {
        assert!(REQUIRED.is_missing());
        assert!(OPTIONAL.is_missing());
        assert!(MISSING.is_missing());
    }

    #[test]
    fn test_slot_compares_by_variant() {
        let slot: Slot<f64> = Slot::unset(false);
        assert_eq!(slot, REQUIRED);
        assert_eq!(slot.clone(), REQUIRED);
        assert_eq!(Slot::<f64>::unset(true), OPTIONAL);
        assert!(Slot::Set(f64::NAN) != REQUIRED);
        assert!(Slot::Set(f64::NAN) != OPTIONAL);
    }

    #[test]
    fn test_slot_from_value() {
        let slot: Slot<&str> = "hello".into();
        assert!(slot.is_set());
        assert_eq!(slot.into_option(), Some("hello"));
    }

    #[test]
    fn test_field_value_from_slot() {
        assert_eq!(Slot::<i32>::Required.to_field_value().unwrap(), REQUIRED);
        assert_eq!(
            Slot::Set(3).to_field_value().unwrap(),
            FieldValue::Set(json!(3))
        );
        assert!(Slot::Set(f64::NAN).to_field_value().is_err());
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::Optional.to_string(), "OPTIONAL");
        assert_eq!(FieldValue::Set(json!("one")).to_string(), "\"one\"");
    }
}
