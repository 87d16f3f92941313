//! Name translation request.
//!
//! [`NameTranslationRequest`] is the JSON body sent to the name translation
//! endpoint. Only the name and the target language are required; every other
//! field left as `None` is decided by the service.

use crate::codes::{Iso15924, LanguageCode, TransliterationScheme};
use serde::{Deserialize, Serialize};

/// Request for name translation.
///
/// Immutable once built. Use [`NameTranslationRequest::builder`] to set the
/// optional fields, or [`NameTranslationRequest::to_builder`] to derive a
/// variant of an existing request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameTranslationRequest {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    entity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_script: Option<Iso15924>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_language_of_origin: Option<LanguageCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_language_of_use: Option<LanguageCode>,
    target_language: LanguageCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target_script: Option<Iso15924>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target_scheme: Option<TransliterationScheme>,
}

impl NameTranslationRequest {
    /// Create a request with every field given explicitly.
    ///
    /// # Arguments
    /// * `name` - name to be translated
    /// * `entity_type` - name's entity type
    /// * `source_script` - name's script code
    /// * `source_language_of_origin` - name's language of origin
    /// * `source_language_of_use` - name's language of use
    /// * `target_language` - target language code
    /// * `target_script` - target script code
    /// * `target_scheme` - target transliteration scheme
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        entity_type: Option<String>,
        source_script: Option<Iso15924>,
        source_language_of_origin: Option<LanguageCode>,
        source_language_of_use: Option<LanguageCode>,
        target_language: LanguageCode,
        target_script: Option<Iso15924>,
        target_scheme: Option<TransliterationScheme>,
    ) -> Self {
        Self {
            name: name.into(),
            entity_type,
            source_script,
            source_language_of_origin,
            source_language_of_use,
            target_language,
            target_script,
            target_scheme,
        }
    }

    /// Start a builder with the two required fields.
    pub fn builder(
        name: impl Into<String>,
        target_language: LanguageCode,
    ) -> NameTranslationRequestBuilder {
        NameTranslationRequestBuilder::new(name, target_language)
    }

    /// Builder pre-populated with this request's fields.
    pub fn to_builder(&self) -> NameTranslationRequestBuilder {
        NameTranslationRequestBuilder {
            name: self.name.clone(),
            entity_type: self.entity_type.clone(),
            source_script: self.source_script,
            source_language_of_origin: self.source_language_of_origin,
            source_language_of_use: self.source_language_of_use,
            target_language: self.target_language,
            target_script: self.target_script,
            target_scheme: self.target_scheme,
        }
    }

    /// The name to be translated.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The entity type of the name (e.g. PERSON).
    pub fn entity_type(&self) -> Option<&str> {
        self.entity_type.as_deref()
    }

    /// The script of the name. `None` means auto-detect.
    pub fn source_script(&self) -> Option<Iso15924> {
        self.source_script
    }

    /// The name's language of origin. `None` means same as language of use.
    pub fn source_language_of_origin(&self) -> Option<LanguageCode> {
        self.source_language_of_origin
    }

    /// The name's language of use. `None` means auto-detect.
    pub fn source_language_of_use(&self) -> Option<LanguageCode> {
        self.source_language_of_use
    }

    pub fn target_language(&self) -> LanguageCode {
        self.target_language
    }

    pub fn target_script(&self) -> Option<Iso15924> {
        self.target_script
    }

    pub fn target_scheme(&self) -> Option<TransliterationScheme> {
        self.target_scheme
    }
}

/// Fluent builder for [`NameTranslationRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTranslationRequestBuilder {
    name: String,
    entity_type: Option<String>,
    source_script: Option<Iso15924>,
    source_language_of_origin: Option<LanguageCode>,
    source_language_of_use: Option<LanguageCode>,
    target_language: LanguageCode,
    target_script: Option<Iso15924>,
    target_scheme: Option<TransliterationScheme>,
}

impl NameTranslationRequestBuilder {
    pub fn new(name: impl Into<String>, target_language: LanguageCode) -> Self {
        Self {
            name: name.into(),
            entity_type: None,
            source_script: None,
            source_language_of_origin: None,
            source_language_of_use: None,
            target_language,
            target_script: None,
            target_scheme: None,
        }
    }

    /// Specify the target script.
    pub fn target_script(mut self, target_script: Iso15924) -> Self {
        self.target_script = Some(target_script);
        self
    }

    /// Specify the transliteration scheme.
    /// The default depends on the source and target languages.
    pub fn target_scheme(mut self, target_scheme: TransliterationScheme) -> Self {
        self.target_scheme = Some(target_scheme);
        self
    }

    /// Specify the type of name (e.g. PERSON, ORGANIZATION).
    /// By default the translation does not take a type into account.
    pub fn entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    /// Specify the script of the source name. By default it is auto-detected.
    pub fn source_script(mut self, source_script: Iso15924) -> Self {
        self.source_script = Some(source_script);
        self
    }

    /// Specify the source language of use. By default it is auto-detected.
    pub fn source_language_of_use(mut self, source_language_of_use: LanguageCode) -> Self {
        self.source_language_of_use = Some(source_language_of_use);
        self
    }

    /// Specify the source language of origin. By default it is the same as
    /// the source language of use.
    pub fn source_language_of_origin(mut self, source_language_of_origin: LanguageCode) -> Self {
        self.source_language_of_origin = Some(source_language_of_origin);
        self
    }

    pub fn current_entity_type(&self) -> Option<&str> {
        self.entity_type.as_deref()
    }

    pub fn current_source_script(&self) -> Option<Iso15924> {
        self.source_script
    }

    pub fn current_source_language_of_use(&self) -> Option<LanguageCode> {
        self.source_language_of_use
    }

    pub fn current_source_language_of_origin(&self) -> Option<LanguageCode> {
        self.source_language_of_origin
    }

    pub fn build(self) -> NameTranslationRequest {
        NameTranslationRequest {
            name: self.name,
            entity_type: self.entity_type,
            source_script: self.source_script,
            source_language_of_origin: self.source_language_of_origin,
            source_language_of_use: self.source_language_of_use,
            target_language: self.target_language,
            target_script: self.target_script,
            target_scheme: self.target_scheme,
        }
    }
}
