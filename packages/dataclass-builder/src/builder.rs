//! The builder interface shared by [`DataclassBuilder`](crate::DataclassBuilder)
//! and the builders generated by [`dataclass!`](crate::dataclass).

use crate::classify;
use crate::error::{BuilderError, Result};
use crate::field::FieldMap;
use crate::record::Record;
use crate::sentinel::FieldValue;
use crate::values::Values;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Incrementally assign the fields of a [`Record`] and build it on demand.
///
/// Implementors provide storage (`set_value`, `get`, `is_set`, `values`);
/// completeness checking and construction are shared.
pub trait Builder {
    type Target: Record;

    /// Assign a field from a dynamic value.
    ///
    /// Underscore-prefixed names are stored as private builder attributes and
    /// never fail. Any other name the record does not declare fails with
    /// `UndefinedField`; a value that does not decode into the field type
    /// fails with `InvalidValue`.
    fn set_value(&mut self, name: &str, value: Value) -> Result<()>;

    /// Read a field: its value, or `REQUIRED`/`OPTIONAL` while unset.
    fn get(&self, name: &str) -> Result<FieldValue>;

    /// Whether field `name` has been explicitly assigned.
    fn is_set(&self, name: &str) -> bool;

    /// Explicitly assigned field values, in declaration order.
    fn values(&self) -> Result<Values>;

    fn set<V: Serialize>(&mut self, name: &str, value: V) -> Result<()> {
        let value = crate::values::encode(Self::Target::NAME, name, &value)?;
        self.set_value(name, value)?;
        tracing::trace!(record = Self::Target::NAME, field = name, "builder field assigned");
        Ok(())
    }

    fn set_values<I, K, V>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Serialize,
    {
        for (name, value) in values {
            self.set(name.as_ref(), value)?;
        }
        Ok(())
    }

    /// Build the record from the assigned values.
    ///
    /// Fails with `MissingField` naming every unset required field. Unset
    /// optional fields take the record's defaults. The builder is left
    /// untouched, so building again yields an equal record.
    fn build(&self) -> Result<Self::Target> {
        classify::check_complete::<Self::Target>(|name| self.is_set(name))?;
        let mut values = self.values()?;
        let supplied = values.len();
        let record = Self::Target::construct(&mut values)?;
        tracing::debug!(record = Self::Target::NAME, supplied, "record built");
        Ok(record)
    }

    /// Copy every assigned field onto an existing record.
    fn apply(&self, record: &mut Self::Target) -> Result<()> {
        for (name, value) in self.values()? {
            record.assign(&name, value)?;
        }
        Ok(())
    }

    fn fields(&self, required: bool, optional: bool) -> FieldMap {
        classify::select_fields::<Self::Target>(required, optional)
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        classify::missing_fields::<Self::Target>(|name| self.is_set(name))
    }

    fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Private (underscore-prefixed) attributes stored on a builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    values: Values,
}

impl Attributes {
    pub fn set(&mut self, name: &str, value: Value) {
        self.values.insert(name, value);
    }

    pub fn get(&self, record: &'static str, name: &str) -> Result<FieldValue> {
        self.values
            .get(name)
            .cloned()
            .map(FieldValue::Set)
            .ok_or_else(|| BuilderError::no_such_attribute(record, name))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Render `Name(record, field=value, ...)` for assigned fields.
pub fn render<'a>(
    f: &mut fmt::Formatter<'_>,
    builder: &str,
    record: Option<&str>,
    fields: impl IntoIterator<Item = (&'a str, String)>,
) -> fmt::Result {
    let mut args: Vec<String> = record.map(str::to_string).into_iter().collect();
    args.extend(fields.into_iter().map(|(name, value)| format!("{}={}", name, value)));
    write!(f, "{}({})", builder, args.join(", "))
}

/// Display form of a typed field value: its JSON rendering, or its `Debug`
/// form when it has none (NaN, 128-bit integers, ...).
pub fn display_value<T: Serialize + fmt::Debug + ?Sized>(value: &T) -> String {
    match crate::values::to_value(value) {
        Ok(value) => value.to_string(),
        Err(_) => format!("{:?}", value),
    }
}
