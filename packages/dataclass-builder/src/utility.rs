//! Free functions over any [`Builder`].
//!
//! These work on both [`DataclassBuilder`](crate::DataclassBuilder) and
//! generated builders, and do not depend on inherent method names.

use crate::builder::Builder;
use crate::error::Result;
use crate::field::FieldMap;
use crate::record::Record;

/// Build the builder's record type from its assigned fields.
pub fn build<B: Builder>(builder: &B) -> Result<B::Target> {
    builder.build()
}

/// Settable fields of the builder's record type, in declaration order.
///
/// `required`/`optional` filter by kind; both `false` returns an empty map.
pub fn fields<B: Builder>(builder: &B, required: bool, optional: bool) -> FieldMap {
    builder.fields(required, optional)
}

/// Copy every assigned field of `builder` onto `record`.
///
/// Fields the builder has not assigned keep their current value, so
/// `update` does not require the builder to be complete.
pub fn update<R: Record, B: Builder<Target = R>>(record: &mut R, builder: &B) -> Result<()> {
    builder.apply(record)?;
    tracing::trace!(record = R::NAME, "record updated from builder");
    Ok(())
}
