//! Build a name translation request and print its JSON body.
//!
//! Usage:
//!   name-translation-request "Müller" --source-language deu
//!   name-translation-request "Ivan" --source-script Cyrl --target-scheme BGN
//!   name-translation-request --target-language nld -- "--Ivan--"
//!
//! Options (each takes a value):
//!   --source-language CODE   language of use of the name
//!   --source-origin CODE     language of origin of the name
//!   --source-script CODE     script of the name
//!   --target-language CODE   overrides NAME_TRANSLATION_TARGET_LANGUAGE
//!   --target-script CODE
//!   --target-scheme CODE
//!   --entity-type TYPE
//!
//! Arguments after `--` are never read as options.
//!
//! Optional environment variables (also read from `.env`):
//! - NAME_TRANSLATION_TARGET_LANGUAGE (defaults to eng)
//! - NAME_TRANSLATION_TARGET_SCRIPT
//! - NAME_TRANSLATION_TARGET_SCHEME
//! - NAME_TRANSLATION_ENTITY_TYPE

use anyhow::{bail, Context, Result};
use name_translation_model::config::Config;
use name_translation_model::{Iso15924, LanguageCode, NameTranslationRequest, TransliterationScheme};
use tracing::info;

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    name: String,
    source_language: Option<LanguageCode>,
    source_origin: Option<LanguageCode>,
    source_script: Option<Iso15924>,
    target_language: Option<LanguageCode>,
    target_script: Option<Iso15924>,
    target_scheme: Option<TransliterationScheme>,
    entity_type: Option<String>,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut parsed = Args::default();
        let mut name = None;
        let mut args = args.into_iter();
        let mut options_done = false;

        while let Some(arg) = args.next() {
            if arg == "--" && !options_done {
                options_done = true;
                continue;
            }

            if options_done || !arg.starts_with("--") {
                if name.replace(arg).is_some() {
                    bail!("Only one name may be given");
                }
                continue;
            }

            let value = args
                .next()
                .with_context(|| format!("{} requires a value", arg))?;

            match arg.as_str() {
                "--source-language" => parsed.source_language = Some(parse_code(&arg, &value)?),
                "--source-origin" => parsed.source_origin = Some(parse_code(&arg, &value)?),
                "--source-script" => parsed.source_script = Some(parse_code(&arg, &value)?),
                "--target-language" => parsed.target_language = Some(parse_code(&arg, &value)?),
                "--target-script" => parsed.target_script = Some(parse_code(&arg, &value)?),
                "--target-scheme" => parsed.target_scheme = Some(parse_code(&arg, &value)?),
                "--entity-type" => parsed.entity_type = Some(value),
                _ => bail!("Unknown option: {}", arg),
            }
        }

        parsed.name = name.context("Missing NAME argument")?;
        Ok(parsed)
    }

    fn into_request(self, config: &Config) -> NameTranslationRequest {
        let mut builder = match self.target_language {
            Some(target_language) => Config {
                target_language,
                ..config.clone()
            }
            .builder_for(self.name),
            None => config.builder_for(self.name),
        };

        if let Some(language) = self.source_language {
            builder = builder.source_language_of_use(language);
        }
        if let Some(language) = self.source_origin {
            builder = builder.source_language_of_origin(language);
        }
        if let Some(script) = self.source_script {
            builder = builder.source_script(script);
        }
        if let Some(script) = self.target_script {
            builder = builder.target_script(script);
        }
        if let Some(scheme) = self.target_scheme {
            builder = builder.target_scheme(scheme);
        }
        if let Some(entity_type) = self.entity_type {
            builder = builder.entity_type(entity_type);
        }

        builder.build()
    }
}

fn parse_code<T>(option: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse()
        .with_context(|| format!("Invalid value for {}", option))
}

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout carries only the request body
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("name_translation_model=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let args = Args::parse(std::env::args().skip(1))?;
    let request = args.into_request(&config);

    info!(
        target_language = %request.target_language(),
        "Built name translation request"
    );

    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}
