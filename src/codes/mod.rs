//! Typed codes used by name translation requests.
//!
//! Every code is validated against the [`CodeRegistry`] when it is parsed,
//! so a constructed value always carries the registry's canonical spelling.
//! That spelling is what goes on the wire.
//!
//! # Example
//!
//! ```rust
//! use name_translation_model::codes::{Iso15924, LanguageCode};
//!
//! let german = LanguageCode::from_code("DEU")?;
//! assert_eq!(german, LanguageCode::GERMAN);
//! assert_eq!(Iso15924::LATIN.code(), "Latn");
//! # Ok::<(), name_translation_model::codes::CodeError>(())
//! ```

/// Implements lookup, `Display`, `FromStr` and serde support for a
/// registry-backed code wrapper with a single `code: &'static str` field.
macro_rules! registry_code {
    ($ty:ident, $kind:expr, $lookup:ident) => {
        impl $ty {
            /// Parse a code, ignoring ASCII case.
            ///
            /// Returns [`CodeError::Unknown`](crate::codes::CodeError::Unknown)
            /// when the code is not in the registry.
            pub fn from_code(code: &str) -> Result<Self, $crate::codes::CodeError> {
                match $crate::codes::CodeRegistry::get().$lookup(code) {
                    Some(config) => Ok(Self { code: config.code }),
                    None => Err($crate::codes::CodeError::Unknown {
                        kind: $kind,
                        code: code.to_string(),
                    }),
                }
            }

            /// The canonical wire code.
            pub fn code(&self) -> &'static str {
                self.code
            }

            /// English display name from the registry.
            pub fn name(&self) -> &'static str {
                $crate::codes::CodeRegistry::get()
                    .$lookup(self.code)
                    .map(|config| config.name)
                    .unwrap_or(self.code)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.code)
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::codes::CodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_code(s)
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.code)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::from_code(&code).map_err(serde::de::Error::custom)
            }
        }
    };
}

mod error;
mod language;
mod registry;
mod scheme;
mod script;

pub use error::{CodeError, CodeKind};
pub use language::LanguageCode;
pub use registry::{CodeConfig, CodeRegistry};
pub use scheme::TransliterationScheme;
pub use script::Iso15924;
