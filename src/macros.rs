/// Concatenates string-like pieces into a freshly allocated `String`.
#[macro_export]
macro_rules! concat_str {
    ($($piece:expr),+ $(,)?) => {{
        [$(::core::convert::AsRef::<str>::as_ref(&$piece)),+].concat()
    }};
}

/// Wire name of a query field: the field name unless `as "name"` overrides it.
macro_rules! wire_name {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident, $wire:literal) => {
        $wire
    };
}

/// Declares a sparse query-parameter record and its validating builder.
///
/// Every field is optional and the generated `QueryParams` impl yields fields
/// in declaration order, which is the order they appear in the query string.
/// The record type must provide `fn validate(&self) -> Result<(), SchemaValidationError>`,
/// which the builder runs in `build()`.
macro_rules! query_params {
    (
        $(#[$meta:meta])*
        pub struct $name:ident / $builder:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident $(as $wire:literal)? : $ty:ty => $arg:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                $field: Option<$ty>,
            )*
        }

        impl $name {
            pub fn builder() -> $builder {
                $builder::default()
            }

            $(
                pub fn $field(&self) -> Option<&$ty> {
                    self.$field.as_ref()
                }
            )*
        }

        impl $crate::query::QueryParams for $name {
            fn query_pairs(&self) -> Vec<(&'static str, $crate::query::QueryValue)> {
                vec![
                    $(
                        (
                            $crate::macros::wire_name!($field $(, $wire)?),
                            $crate::query::QueryValue::from_option(self.$field.as_ref()),
                        ),
                    )*
                ]
            }
        }

        #[derive(Debug, Clone, Default)]
        pub struct $builder {
            inner: $name,
        }

        impl $builder {
            $(
                pub fn $field(mut self, value: $arg) -> Self {
                    self.inner.$field = Some(value.into());
                    self
                }
            )*

            pub fn build(self) -> Result<$name, $crate::error::SchemaValidationError> {
                self.inner.validate()?;
                Ok(self.inner)
            }
        }
    };
}

pub(crate) use wire_name;
