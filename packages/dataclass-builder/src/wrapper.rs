//! Generic builder wrapping any [`Record`] type.
//!
//! # Examples
//!
//! ```
//! use dataclass_builder::{dataclass, Builder, DataclassBuilder, OPTIONAL, REQUIRED};
//!
//! dataclass! {
//!     #[derive(Debug, PartialEq)]
//!     pub struct Point {
//!         pub x: f64,
//!         pub y: f64,
//!         pub w: f64 = 1.0,
//!     }
//! }
//!
//! let mut builder = DataclassBuilder::<Point>::new();
//! assert_eq!(builder.get("x").unwrap(), REQUIRED);
//! assert_eq!(builder.get("w").unwrap(), OPTIONAL);
//!
//! builder.set("x", 5.8).unwrap();
//! builder.set("y", 8.1).unwrap();
//! assert_eq!(builder.build().unwrap(), Point { x: 5.8, y: 8.1, w: 1.0 });
//!
//! assert!(builder.set("z", 3.0).is_err());
//! ```

use crate::builder::{render, Attributes, Builder};
use crate::classify::{self, Target};
use crate::error::{BuilderError, Result};
use crate::record::Record;
use crate::sentinel::FieldValue;
use crate::values::Values;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// Builder for any record type, with fields addressed by name.
///
/// Assigned values are type-checked against the record's declared field
/// types as they are set. Extending types should keep their own state in
/// underscore-prefixed attributes, which bypass field validation.
pub struct DataclassBuilder<R: Record> {
    values: Values,
    attributes: Attributes,
    record: PhantomData<fn() -> R>,
}

impl<R: Record> DataclassBuilder<R> {
    pub fn new() -> Self {
        Self {
            values: Values::new(),
            attributes: Attributes::default(),
            record: PhantomData,
        }
    }

    /// Create a builder with initial field values.
    pub fn with_values<I, K, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Serialize,
    {
        let mut builder = Self::new();
        builder.set_values(values)?;
        Ok(builder)
    }

    /// Private attributes assigned through underscore-prefixed names.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

impl<R: Record> Builder for DataclassBuilder<R> {
    type Target = R;

    fn set_value(&mut self, name: &str, value: Value) -> Result<()> {
        match classify::check_assignable::<R>(name)? {
            Target::Private => self.attributes.set(name, value),
            Target::Field(field) => {
                R::validate(field.name, &value)?;
                self.values.insert(field.name, value);
            }
        }
        Ok(())
    }

    fn get(&self, name: &str) -> Result<FieldValue> {
        if name.starts_with('_') {
            return self.attributes.get(R::NAME, name);
        }
        let field = R::field(name).ok_or_else(|| BuilderError::no_such_attribute(R::NAME, name))?;
        Ok(match self.values.get(name) {
            Some(value) => FieldValue::Set(value.clone()),
            None if field.has_default() => FieldValue::Optional,
            None => FieldValue::Required,
        })
    }

    fn is_set(&self, name: &str) -> bool {
        self.values.contains(name)
    }

    fn values(&self) -> Result<Values> {
        Ok(self
            .assigned()
            .map(|(name, value)| (name, value.clone()))
            .collect())
    }
}

impl<R: Record> DataclassBuilder<R> {
    /// Assigned fields in declaration order.
    fn assigned(&self) -> impl Iterator<Item = (&'static str, &Value)> + '_ {
        R::fields()
            .iter()
            .filter_map(|field| self.values.get(field.name).map(|value| (field.name, value)))
    }
}

impl<R: Record> Default for DataclassBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Clone for DataclassBuilder<R> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            attributes: self.attributes.clone(),
            record: PhantomData,
        }
    }
}

impl<R: Record> fmt::Display for DataclassBuilder<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.assigned().map(|(name, value)| (name, value.to_string()));
        render(f, "DataclassBuilder", Some(R::NAME), fields)
    }
}

impl<R: Record> fmt::Debug for DataclassBuilder<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
