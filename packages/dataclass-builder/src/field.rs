//! Field descriptors

use crate::sentinel::Sentinel;
use std::fmt;

/// Default declared on a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    /// No default; the field is required
    Missing,
    /// Default expression, as written in the declaration
    Provided(&'static str),
}

/// Metadata for one declared field of a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    /// Declared Rust type, as written in the declaration
    pub type_name: &'static str,
    pub default: FieldDefault,
}

impl Field {
    pub const fn new(name: &'static str, type_name: &'static str, default: FieldDefault) -> Self {
        Self {
            name,
            type_name,
            default,
        }
    }

    pub const fn has_default(&self) -> bool {
        matches!(self.default, FieldDefault::Provided(_))
    }

    /// Underscore-prefixed fields are reserved and never exposed by builders.
    pub fn is_settable(&self) -> bool {
        !self.name.starts_with('_')
    }

    pub fn is_required(&self) -> bool {
        self.is_settable() && !self.has_default()
    }

    pub fn is_optional(&self) -> bool {
        self.is_settable() && self.has_default()
    }

    /// Sentinel a builder reports while this field is unset.
    pub fn unset_sentinel(&self) -> Sentinel {
        if self.has_default() {
            Sentinel::Optional
        } else {
            Sentinel::Required
        }
    }

    /// Default expression source, or `None` for required fields.
    pub fn default_source(&self) -> Option<&'static str> {
        match self.default {
            FieldDefault::Provided(source) => Some(source),
            FieldDefault::Missing => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.type_name)?;
        if let FieldDefault::Provided(source) = self.default {
            write!(f, " = {}", source)?;
        }
        Ok(())
    }
}

/// Ordered mapping from field name to [`Field`], in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    fields: Vec<&'static Field>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&'static Field> {
        self.fields.iter().copied().find(|field| field.name == name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.name)
    }

    pub fn values(&self) -> impl Iterator<Item = &'static Field> + '_ {
        self.fields.iter().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static Field)> + '_ {
        self.fields.iter().map(|field| (field.name, *field))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.keys().collect()
    }
}

impl FromIterator<&'static Field> for FieldMap {
    fn from_iter<I: IntoIterator<Item = &'static Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
