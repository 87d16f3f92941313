use crate::codes::{Iso15924, LanguageCode, TransliterationScheme};
use crate::request::NameTranslationRequestBuilder;
use anyhow::{Context, Result};
use std::str::FromStr;
use tracing::{debug, warn};

/// Request defaults read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub target_language: LanguageCode,
    pub target_script: Option<Iso15924>,
    pub target_scheme: Option<TransliterationScheme>,
    pub entity_type: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_language: LanguageCode::ENGLISH,
            target_script: None,
            target_scheme: None,
            entity_type: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            target_language: optional_code("NAME_TRANSLATION_TARGET_LANGUAGE")?
                .unwrap_or(LanguageCode::ENGLISH),
            target_script: optional_code("NAME_TRANSLATION_TARGET_SCRIPT")?,
            target_scheme: optional_code("NAME_TRANSLATION_TARGET_SCHEME")?,
            entity_type: std::env::var("NAME_TRANSLATION_ENTITY_TYPE")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        };

        debug!(
            target_language = %config.target_language,
            target_script = ?config.target_script.map(|s| s.code()),
            target_scheme = ?config.target_scheme.map(|s| s.code()),
            entity_type = ?config.entity_type,
            "Loaded request defaults"
        );

        Ok(config)
    }

    /// Start a request builder with the configured defaults applied.
    pub fn builder_for(&self, name: impl Into<String>) -> NameTranslationRequestBuilder {
        let mut builder = NameTranslationRequestBuilder::new(name, self.target_language);
        if let Some(script) = self.target_script {
            builder = builder.target_script(script);
        }
        if let Some(scheme) = self.target_scheme {
            builder = builder.target_scheme(scheme);
        }
        if let Some(entity_type) = &self.entity_type {
            builder = builder.entity_type(entity_type.clone());
        }
        builder
    }
}

/// Read an optional code variable. Unset or blank means `None`.
fn optional_code<T>(var: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => return Ok(None),
    };

    value
        .trim()
        .parse::<T>()
        .map(Some)
        .inspect_err(|e| warn!(var, error = %e, "Rejected configuration value"))
        .with_context(|| format!("{} is invalid", var))
}
