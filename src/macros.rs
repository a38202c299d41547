//! Crate-wide helper macros
//!
//! Small declarative macros that remove the repetition from config defaults,
//! native enumerations and native symbol tables.

/// Implements `Default` for a struct from a field list.
///
/// ```ignore
/// impl_default!(LoggingConfig {
///     level: LogLevel::Info,
///     log_to_console: true,
/// });
/// ```
macro_rules! impl_default {
    ($struct_name:ident {
        $($field:ident: $value:expr),* $(,)?
    }) => {
        impl Default for $struct_name {
            fn default() -> Self {
                Self {
                    $($field: $value),*
                }
            }
        }
    };
}

/// Declares a closed enumeration mirroring a native integer enumeration.
///
/// Every enumerant carries its native encoding and the symbolic name the
/// scripting surface exposes it under.
macro_rules! native_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:expr => $symbol:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
        }

        impl $name {
            /// Every enumerant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// Native integer encoding.
            pub const fn code(self) -> i32 {
                match self {
                    $($name::$variant => $code,)*
                }
            }

            /// Symbolic name, as exported to scripts.
            pub const fn symbol(self) -> &'static str {
                match self {
                    $($name::$variant => $symbol,)*
                }
            }

            /// Reverse lookup of a native code.
            pub fn from_code(code: i32) -> Option<Self> {
                Self::ALL.iter().copied().find(|value| value.code() == code)
            }

            /// `(symbol, code)` pairs of this enumeration.
            pub fn entries() -> impl Iterator<Item = (&'static str, i32)> {
                Self::ALL.iter().map(|value| (value.symbol(), value.code()))
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value.code()
            }
        }
    };
}

/// Declares a table of native entry points resolved from a loaded library.
///
/// Each field name is the native symbol with its library prefix removed, so
/// `polyline` in a table resolved with prefix `gr_` binds `gr_polyline`.
macro_rules! symbol_table {
    (
        $(#[$meta:meta])*
        $vis:vis struct $table:ident {
            $(
                $field:ident : fn($($arg:ty),* $(,)?) $(-> $ret:ty)?
            );* $(;)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy)]
        $vis struct $table {
            $(pub(crate) $field: unsafe extern "C" fn($($arg),*) $(-> $ret)?,)*
        }

        impl $table {
            /// Resolves every entry point of the table.
            ///
            /// # Safety
            ///
            /// The library must export each symbol with exactly the declared
            /// C signature.
            pub(crate) unsafe fn resolve(
                library: &$crate::ffi::NativeLibrary,
                prefix: &str,
            ) -> $crate::error::BindingResult<Self> {
                Ok(Self {
                    $(
                        $field: library.symbol::<unsafe extern "C" fn($($arg),*) $(-> $ret)?>(
                            prefix,
                            stringify!($field),
                        )?,
                    )*
                })
            }

            /// Native symbol names bound by this table, without prefix.
            pub const SYMBOLS: &'static [&'static str] = &[$(stringify!($field)),*];
        }
    };
}
