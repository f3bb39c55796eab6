//! Field classification
//!
//! Partitions a record's declared fields into required (no default) and
//! optional (has a default). Underscore-prefixed fields belong to neither
//! set. Builders call into this module for every name check so the wrapper
//! and the generated builders agree on what is assignable and what is
//! missing.

use crate::error::{BuilderError, Result};
use crate::field::{Field, FieldMap};
use crate::record::Record;

/// Required and optional field names of a record, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub required: Vec<&'static str>,
    pub optional: Vec<&'static str>,
}

impl Classification {
    pub fn is_required(&self, name: &str) -> bool {
        self.required.contains(&name)
    }

    pub fn is_optional(&self, name: &str) -> bool {
        self.optional.contains(&name)
    }
}

pub fn classify<R: Record>() -> Classification {
    let mut classification = Classification::default();
    for field in R::fields() {
        if field.is_required() {
            classification.required.push(field.name);
        } else if field.is_optional() {
            classification.optional.push(field.name);
        }
    }
    classification
}

pub fn settable_fields<R: Record>() -> FieldMap {
    R::fields().iter().filter(|f| f.is_settable()).collect()
}

pub fn required_fields<R: Record>() -> FieldMap {
    R::fields().iter().filter(|f| f.is_required()).collect()
}

pub fn optional_fields<R: Record>() -> FieldMap {
    R::fields().iter().filter(|f| f.is_optional()).collect()
}

/// Settable fields filtered by kind; both flags `false` yields an empty map.
pub fn select_fields<R: Record>(required: bool, optional: bool) -> FieldMap {
    match (required, optional) {
        (true, true) => settable_fields::<R>(),
        (true, false) => required_fields::<R>(),
        (false, true) => optional_fields::<R>(),
        (false, false) => FieldMap::new(),
    }
}

/// Where an assignment by name lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A settable record field
    Field(&'static Field),
    /// A private (underscore-prefixed) builder attribute
    Private,
}

/// Resolve an assignment target, rejecting names the record does not declare.
pub fn check_assignable<R: Record>(name: &str) -> Result<Target> {
    if name.starts_with('_') {
        return Ok(Target::Private);
    }
    match R::field(name) {
        Some(field) => Ok(Target::Field(field)),
        None => {
            let declared: Vec<&str> = settable_fields::<R>().names();
            Err(BuilderError::undefined_field(R::NAME, name, &declared))
        }
    }
}

/// Fail with every required field `is_set` reports as unassigned.
pub fn check_complete<R: Record>(is_set: impl Fn(&str) -> bool) -> Result<()> {
    let missing = missing_fields::<R>(is_set);
    if missing.is_empty() {
        Ok(())
    } else {
        tracing::debug!(record = R::NAME, missing = ?missing, "build rejected, required fields unset");
        Err(BuilderError::missing_fields(R::NAME, missing))
    }
}

pub fn missing_fields<R: Record>(is_set: impl Fn(&str) -> bool) -> Vec<&'static str> {
    R::fields()
        .iter()
        .filter(|field| field.is_required() && !is_set(field.name))
        .map(|field| field.name)
        .collect()
}
