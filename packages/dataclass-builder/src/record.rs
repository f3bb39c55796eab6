//! Record types: the schema and constructor seam builders work against

use crate::error::Result;
use crate::field::Field;
use crate::values::Values;
use serde_json::Value;

/// A struct with a fixed, ordered set of named fields that builders can
/// populate.
///
/// Usually implemented through [`dataclass!`](crate::dataclass).
pub trait Record: Sized {
    /// Type name used in error messages and builder rendering.
    const NAME: &'static str;

    /// Declared fields, in declaration order.
    fn fields() -> &'static [Field];

    /// Construct an instance from the supplied values.
    ///
    /// Consumes the entries it uses. Fields absent from `values` take their
    /// declared default, evaluated on every call; an absent field without a
    /// default is a `MissingField` error.
    fn construct(values: &mut Values) -> Result<Self>;

    /// Check that `value` decodes into the declared type of field `name`.
    fn validate(name: &str, value: &Value) -> Result<()>;

    /// Overwrite field `name` of an existing instance.
    fn assign(&mut self, name: &str, value: Value) -> Result<()>;

    /// Look up a declared field by name.
    fn field(name: &str) -> Option<&'static Field> {
        Self::fields().iter().find(|field| field.name == name)
    }
}
