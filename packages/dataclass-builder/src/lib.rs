//! Build record structs field by field.
//!
//! A builder accumulates field values for a record type, tracks which
//! required fields are still unset and constructs the record on demand:
//!
//! - [`DataclassBuilder<R>`] wraps any [`Record`] and addresses fields by name
//! - [`dataclass!`] declares a record and, with `struct Name + NameBuilder`,
//!   a dedicated builder holding one typed [`Slot<T>`] per field
//! - [`BuilderFactory`] pre-applies field values to every builder it makes,
//!   optionally loaded from YAML or JSON
//!
//! Unset fields read as [`REQUIRED`] or [`OPTIONAL`]. Assigning a field the
//! record does not declare fails with [`BuilderError::UndefinedField`];
//! building with required fields unset fails with
//! [`BuilderError::MissingField`], naming all of them.
//!
//! ## Usage
//!
//! ```
//! use dataclass_builder::{build, dataclass, Builder, BuilderError, DataclassBuilder};
//!
//! dataclass! {
//!     #[derive(Debug, PartialEq)]
//!     pub struct Point + PointBuilder {
//!         pub x: f64,
//!         pub y: f64,
//!         pub w: f64 = 1.0,
//!     }
//! }
//!
//! // by name
//! let mut builder = DataclassBuilder::<Point>::new();
//! builder.set("y", 8.1).unwrap();
//! assert!(matches!(build(&builder), Err(BuilderError::MissingField { .. })));
//! builder.set("x", 5.8).unwrap();
//! assert_eq!(build(&builder).unwrap(), Point { x: 5.8, y: 8.1, w: 1.0 });
//!
//! // typed
//! let mut builder = PointBuilder::new();
//! builder.x = 5.8.into();
//! builder.y = 8.1.into();
//! builder.w = 2.0.into();
//! assert_eq!(builder.build().unwrap(), Point { x: 5.8, y: 8.1, w: 2.0 });
//! ```

pub mod builder;
pub mod classify;
pub mod error;
pub mod factory;
pub mod field;
mod macros;
pub mod record;
pub mod sentinel;
pub mod utility;
pub mod values;
pub mod wrapper;

pub use builder::{Attributes, Builder};
pub use classify::{classify, Classification};
pub use error::{BuilderError, ErrorKind, Result};
pub use factory::BuilderFactory;
pub use field::{Field, FieldDefault, FieldMap};
pub use record::Record;
pub use sentinel::{FieldValue, Sentinel, Slot, MISSING, OPTIONAL, REQUIRED};
pub use utility::{build, fields, update};
pub use values::Values;
pub use wrapper::DataclassBuilder;

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
    pub use tracing;
}
