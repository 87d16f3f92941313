//! Request model for a name translation and transliteration service.
//!
//! # Example
//!
//! ```rust
//! use name_translation_model::{LanguageCode, NameTranslationRequest};
//!
//! let request = NameTranslationRequest::builder("Müller", LanguageCode::ENGLISH)
//!     .source_language_of_use(LanguageCode::GERMAN)
//!     .build();
//!
//! assert_eq!(request.source_language_of_use(), Some(LanguageCode::GERMAN));
//! assert_eq!(request.target_script(), None);
//! ```

pub mod codes;
pub mod config;
pub mod request;

pub use codes::{CodeError, Iso15924, LanguageCode, TransliterationScheme};
pub use request::{NameTranslationRequest, NameTranslationRequestBuilder};
