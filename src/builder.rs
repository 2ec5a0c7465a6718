//! Builder macro for reducing boilerplate in configuration builders.

/// Generate a builder struct and implementation for a configuration type.
///
/// The configuration type must implement `Default`. The macro generates:
/// - A builder struct (`Debug + Default + Clone`) with every field wrapped in `Option`
/// - A setter per field, accepting `impl Into<T>`
/// - A `build()` method that checks required fields and fills the rest from `Default`
/// - A `builder()` constructor on the config type
///
/// # Field categories
///
/// - `required { field: Type }`: `build()` returns
///   `BuilderError::MissingRequiredField` naming the builder and field if unset
/// - `optional { field: Type }`: uses `unwrap_or(defaults.field)`
///
/// Attributes (including doc comments) placed before the config name are
/// applied to the generated builder struct.
macro_rules! config_builder {
    (
        $(#[$meta:meta])*
        $Config:ident => $Builder:ident {
            required { $( $req_field:ident : $req_ty:ty ),* $(,)? }
            optional { $( $opt_field:ident : $opt_ty:ty ),* $(,)? }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone)]
        pub struct $Builder {
            $( $req_field: Option<$req_ty>, )*
            $( $opt_field: Option<$opt_ty>, )*
        }

        impl $Config {
            pub fn builder() -> $Builder {
                $Builder::default()
            }
        }

        impl $Builder {
            $(
                pub fn $req_field(mut self, value: impl Into<$req_ty>) -> Self {
                    self.$req_field = Some(value.into());
                    self
                }
            )*

            $(
                pub fn $opt_field(mut self, value: impl Into<$opt_ty>) -> Self {
                    self.$opt_field = Some(value.into());
                    self
                }
            )*

            pub fn build(self) -> Result<$Config, $crate::error::BuilderError> {
                let defaults = $Config::default();
                $(
                    let $req_field = self.$req_field.ok_or(
                        $crate::error::BuilderError::MissingRequiredField {
                            builder: stringify!($Builder),
                            field: stringify!($req_field),
                        },
                    )?;
                )*
                Ok($Config {
                    $( $req_field, )*
                    $( $opt_field: self.$opt_field.unwrap_or(defaults.$opt_field), )*
                })
            }
        }
    };
}

pub(crate) use config_builder;
