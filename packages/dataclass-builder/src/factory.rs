//! Builder factories with factory-level initial values
//!
//! A [`BuilderFactory`] pre-applies field values to every builder it makes,
//! the way a partially applied constructor would. Values given to
//! [`BuilderFactory::builder_with`] override the factory's own.
//!
//! Presets can also be loaded from YAML or JSON documents mapping field
//! names to values:
//!
//! ```yaml
//! x: 5.8
//! w: 100.0
//! ```

use crate::builder::Builder;
use crate::error::{BuilderError, Result};
use crate::record::Record;
use crate::values::{self, Values};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

pub struct BuilderFactory<B: Builder> {
    presets: Values,
    builder: PhantomData<fn() -> B>,
}

impl<B: Builder + Default> BuilderFactory<B> {
    pub fn new() -> Self {
        Self {
            presets: Values::new(),
            builder: PhantomData,
        }
    }

    /// Factory whose builders start from `values`.
    pub fn with_values<I, K, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Serialize,
    {
        let mut factory = Self::new();
        for (name, value) in values {
            factory.insert(name.as_ref(), value)?;
        }
        Ok(factory)
    }

    /// Add or replace one factory-level value.
    pub fn preset<V: Serialize>(mut self, name: &str, value: V) -> Result<Self> {
        self.insert(name, value)?;
        Ok(self)
    }

    pub fn presets(&self) -> &Values {
        &self.presets
    }

    /// A new builder holding the factory-level values.
    pub fn builder(&self) -> Result<B> {
        let mut builder = B::default();
        for (name, value) in self.presets.iter() {
            builder.set_value(name, value.clone())?;
        }
        Ok(builder)
    }

    /// A new builder holding the factory-level values overridden by `overrides`.
    pub fn builder_with<I, K, V>(&self, overrides: I) -> Result<B>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Serialize,
    {
        let mut builder = self.builder()?;
        builder.set_values(overrides)?;
        Ok(builder)
    }

    /// Build directly from the factory-level values.
    pub fn build(&self) -> Result<B::Target> {
        self.builder()?.build()
    }

    /// Load factory-level values from a YAML mapping.
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::new());
        }
        let document: Value = serde_yaml::from_str(text)?;
        Self::from_document(document)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading builder presets");
        Self::from_yaml(&text)
    }

    /// Load factory-level values from a JSON object.
    pub fn from_json(text: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(text)?;
        Self::from_document(document)
    }

    /// Serialize the factory-level values as a YAML mapping.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.presets)?)
    }

    fn from_document(document: Value) -> Result<Self> {
        let entries = match document {
            Value::Object(map) => map,
            Value::Null => Default::default(),
            other => {
                return Err(BuilderError::InvalidPresets(format!(
                    "expected a mapping of field names to values for '{}', found {}",
                    B::Target::NAME,
                    kind_of(&other)
                )))
            }
        };
        let mut factory = Self::new();
        for (name, value) in entries {
            factory.insert_value(&name, value)?;
        }
        tracing::debug!(
            record = B::Target::NAME,
            presets = factory.presets.len(),
            "builder presets loaded"
        );
        Ok(factory)
    }

    fn insert<V: Serialize>(&mut self, name: &str, value: V) -> Result<()> {
        let value = values::encode(B::Target::NAME, name, &value)?;
        self.insert_value(name, value)
    }

    fn insert_value(&mut self, name: &str, value: Value) -> Result<()> {
        // a throwaway builder applies exactly the checks an instance would
        B::default().set_value(name, value.clone())?;
        self.presets.insert(name, value);
        Ok(())
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

impl<B: Builder + Default> Default for BuilderFactory<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Builder> Clone for BuilderFactory<B> {
    fn clone(&self) -> Self {
        Self {
            presets: self.presets.clone(),
            builder: PhantomData,
        }
    }
}

impl<B: Builder> fmt::Debug for BuilderFactory<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuilderFactory")
            .field("record", &B::Target::NAME)
            .field("presets", &self.presets)
            .finish()
    }
}
