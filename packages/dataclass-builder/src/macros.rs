//! Record and builder code generation

/// Declares a record struct, implements [`Record`](crate::Record) for it and,
/// optionally, generates a dedicated typed builder.
///
/// # Example
///
/// ```
/// use dataclass_builder::{dataclass, Slot, OPTIONAL, REQUIRED};
///
/// dataclass! {
///     /// A weighted point.
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct Point + PointBuilder {
///         pub x: f64,
///         pub y: f64,
///         pub w: f64 = 1.0,
///     }
/// }
///
/// let mut builder = PointBuilder::new();
/// assert_eq!(builder.x, REQUIRED);
/// assert_eq!(builder.w, OPTIONAL);
///
/// builder.x = 5.8.into();
/// builder.y = Slot::Set(8.1);
/// assert_eq!(builder.to_string(), "PointBuilder(x=5.8, y=8.1)");
/// assert_eq!(builder.build().unwrap(), Point { x: 5.8, y: 8.1, w: 1.0 });
/// ```
///
/// Field forms:
/// - `field: T` - required; building fails with `MissingField` while unset
/// - `field: T = expr` - optional; `expr` is evaluated on every build that
///   leaves the field unset
///
/// Underscore-prefixed fields are not exposed through the by-name builder
/// interface and should carry a default.
///
/// With `struct Name + BuilderName` the macro also emits `BuilderName`, which
/// holds one public [`Slot<T>`](crate::Slot) per field, typed by the field's
/// declaration, and implements [`Builder`](crate::Builder), `Default`,
/// `Display` and `Debug`, plus inherent `new`, `build` and `fields`. It
/// builds the record from its slots directly, so any value of the field type
/// survives, including NaN or 128-bit integers that the by-name interface
/// cannot store.
///
/// Field value types must implement `serde::Serialize` and
/// `serde::de::DeserializeOwned`; with a generated builder they must also
/// implement `Clone` and `Debug`.
#[macro_export]
macro_rules! dataclass {
    // Field descriptor default
    (@default_of) => { $crate::FieldDefault::Missing };
    (@default_of $default:expr) => { $crate::FieldDefault::Provided(stringify!($default)) };

    // Initial builder slot
    (@slot) => { $crate::Slot::Required };
    (@slot $default:expr) => { $crate::Slot::Optional };

    // Take a field out of the supplied values, falling back to its default
    (@take $values:ident, $name:ident, $field:ident, $fty:ty) => {
        $values.take_required::<$fty>(stringify!($name), stringify!($field))?
    };
    (@take $values:ident, $name:ident, $field:ident, $fty:ty, $default:expr) => {
        match $values.take::<$fty>(stringify!($name), stringify!($field))? {
            ::core::option::Option::Some(value) => value,
            ::core::option::Option::None => $default,
        }
    };

    // Field of a record taken from a typed builder slot, falling back to its default
    (@from_slot $slot:expr, $name:ident, $field:ident) => {
        match $slot {
            $crate::Slot::Set(value) if !stringify!($field).starts_with('_') => {
                ::core::clone::Clone::clone(value)
            }
            _ => {
                return ::core::result::Result::Err($crate::BuilderError::missing_fields(
                    stringify!($name),
                    [stringify!($field)],
                ))
            }
        }
    };
    (@from_slot $slot:expr, $name:ident, $field:ident, $default:expr) => {
        match $slot {
            $crate::Slot::Set(value) if !stringify!($field).starts_with('_') => {
                ::core::clone::Clone::clone(value)
            }
            _ => $default,
        }
    };

    // Typed builder for an already declared record
    (@builder $vis:vis struct $builder:ident for $name:ident {
        $( $field:ident : $fty:ty $(= $default:expr)? ),*
    }) => {
        #[doc = concat!("Builder for [`", stringify!($name), "`].")]
        ///
        /// Slots of underscore-prefixed fields are ignored: those fields
        /// always take their default.
        $vis struct $builder {
            $(
                pub $field: $crate::Slot<$fty>,
            )*
            __attributes: $crate::Attributes,
        }

        impl $builder {
            pub fn new() -> Self {
                <Self as ::core::default::Default>::default()
            }

            #[doc = concat!("Build a [`", stringify!($name), "`] from the assigned fields.")]
            pub fn build(&self) -> $crate::Result<$name> {
                <Self as $crate::Builder>::build(self)
            }

            pub fn fields(&self, required: bool, optional: bool) -> $crate::FieldMap {
                <Self as $crate::Builder>::fields(self, required, optional)
            }
        }

        impl ::core::default::Default for $builder {
            fn default() -> Self {
                Self {
                    $(
                        $field: $crate::dataclass!(@slot $($default)?),
                    )*
                    __attributes: ::core::default::Default::default(),
                }
            }
        }

        impl $crate::Builder for $builder {
            type Target = $name;

            #[allow(unused_variables)]
            fn set_value(
                &mut self,
                name: &str,
                value: $crate::__private::serde_json::Value,
            ) -> $crate::Result<()> {
                if let $crate::classify::Target::Private =
                    $crate::classify::check_assignable::<$name>(name)?
                {
                    self.__attributes.set(name, value);
                    return ::core::result::Result::Ok(());
                }
                $(
                    if name == stringify!($field) {
                        self.$field = $crate::Slot::Set(
                            $crate::values::decode::<$fty>(stringify!($name), name, value)?,
                        );
                        return ::core::result::Result::Ok(());
                    }
                )*
                ::core::result::Result::Err($crate::BuilderError::undefined_field(
                    stringify!($name),
                    name,
                    &[$(stringify!($field)),*],
                ))
            }

            fn get(&self, name: &str) -> $crate::Result<$crate::FieldValue> {
                if name.starts_with('_') {
                    return self.__attributes.get(stringify!($name), name);
                }
                $(
                    if name == stringify!($field) {
                        return self.$field.to_field_value().map_err(|err| {
                            $crate::BuilderError::invalid_value(stringify!($name), name, err)
                        });
                    }
                )*
                ::core::result::Result::Err($crate::BuilderError::no_such_attribute(
                    stringify!($name),
                    name,
                ))
            }

            #[allow(unused_variables)]
            fn is_set(&self, name: &str) -> bool {
                if name.starts_with('_') {
                    return false;
                }
                $(
                    if name == stringify!($field) {
                        return self.$field.is_set();
                    }
                )*
                false
            }

            #[allow(unused_mut)]
            fn values(&self) -> $crate::Result<$crate::Values> {
                let mut values = $crate::Values::new();
                $(
                    if let $crate::Slot::Set(value) = &self.$field {
                        if !stringify!($field).starts_with('_') {
                            values.insert(
                                stringify!($field),
                                $crate::values::encode(stringify!($name), stringify!($field), value)?,
                            );
                        }
                    }
                )*
                ::core::result::Result::Ok(values)
            }

            fn build(&self) -> $crate::Result<$name> {
                $crate::classify::check_complete::<$name>(|name| $crate::Builder::is_set(self, name))?;
                let record = $name {
                    $(
                        $field: $crate::dataclass!(@from_slot &self.$field, $name, $field $(, $default)?),
                    )*
                };
                $crate::__private::tracing::debug!(record = stringify!($name), "record built");
                ::core::result::Result::Ok(record)
            }

            #[allow(unused_variables)]
            fn apply(&self, record: &mut $name) -> $crate::Result<()> {
                $(
                    if let $crate::Slot::Set(value) = &self.$field {
                        if !stringify!($field).starts_with('_') {
                            record.$field = ::core::clone::Clone::clone(value);
                        }
                    }
                )*
                ::core::result::Result::Ok(())
            }
        }

        impl ::core::fmt::Display for $builder {
            #[allow(unused_mut)]
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let mut fields = ::std::vec::Vec::<(&str, ::std::string::String)>::new();
                $(
                    if let $crate::Slot::Set(value) = &self.$field {
                        if !stringify!($field).starts_with('_') {
                            fields.push((stringify!($field), $crate::builder::display_value(value)));
                        }
                    }
                )*
                $crate::builder::render(f, stringify!($builder), ::core::option::Option::None, fields)
            }
        }

        impl ::core::fmt::Debug for $builder {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(self, f)
            }
        }
    };

    // Record with a dedicated builder
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident + $builder:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $fty:ty $(= $default:expr)?
            ),* $(,)?
        }
    ) => {
        $crate::dataclass! {
            $(#[$meta])*
            $vis struct $name {
                $(
                    $(#[$field_meta])*
                    $field_vis $field : $fty $(= $default)?
                ),*
            }
        }

        $crate::dataclass! {
            @builder $vis struct $builder for $name {
                $( $field : $fty $(= $default)? ),*
            }
        }
    };

    // Record only
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $fty:ty $(= $default:expr)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $fty,
            )*
        }

        impl $crate::Record for $name {
            const NAME: &'static str = stringify!($name);

            fn fields() -> &'static [$crate::Field] {
                const FIELDS: &[$crate::Field] = &[
                    $(
                        $crate::Field::new(
                            stringify!($field),
                            stringify!($fty),
                            $crate::dataclass!(@default_of $($default)?),
                        ),
                    )*
                ];
                FIELDS
            }

            #[allow(unused_variables)]
            fn construct(values: &mut $crate::Values) -> $crate::Result<Self> {
                ::core::result::Result::Ok($name {
                    $(
                        $field: $crate::dataclass!(@take values, $name, $field, $fty $(, $default)?),
                    )*
                })
            }

            #[allow(unused_variables)]
            fn validate(
                name: &str,
                value: &$crate::__private::serde_json::Value,
            ) -> $crate::Result<()> {
                $(
                    if name == stringify!($field) {
                        return $crate::values::check::<$fty>(stringify!($name), name, value);
                    }
                )*
                ::core::result::Result::Err($crate::BuilderError::undefined_field(
                    stringify!($name),
                    name,
                    &[$(stringify!($field)),*],
                ))
            }

            #[allow(unused_variables)]
            fn assign(
                &mut self,
                name: &str,
                value: $crate::__private::serde_json::Value,
            ) -> $crate::Result<()> {
                $(
                    if name == stringify!($field) {
                        self.$field = $crate::values::decode::<$fty>(stringify!($name), name, value)?;
                        return ::core::result::Result::Ok(());
                    }
                )*
                ::core::result::Result::Err($crate::BuilderError::undefined_field(
                    stringify!($name),
                    name,
                    &[$(stringify!($field)),*],
                ))
            }
        }
    };
}
