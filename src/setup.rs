// src/setup.rs

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use models::{FieldName, FieldValues, FormVariant, UnknownFormVariantError};
use services::site::CdnImages;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";
const FORM_VARIANT_VAR: &str = "FOLIO_FORM";
const CDN_IMAGES_VAR: &str = "FOLIO_CDN_IMAGES";

/// Settings read once at startup and never changed afterwards
#[derive(Debug, Clone, Default)]
pub(super) struct SiteConfig {
    pub form: FormVariant,
    /// JSON image map, only read by commands that resolve images
    pub cdn_images_path: Option<PathBuf>,
}

impl SiteConfig {
    pub fn cdn_images(&self) -> Result<CdnImages, ConfigError> {
        match &self.cdn_images_path {
            Some(path) => load_cdn_images(path),
            None => Ok(CdnImages::default()),
        }
    }
}

#[derive(Debug)]
pub(super) struct ConfigError {
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError { message: e.to_string() }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError { message: e.to_string() }
    }
}

impl From<UnknownFormVariantError> for ConfigError {
    fn from(e: UnknownFormVariantError) -> Self {
        ConfigError { message: e.to_string() }
    }
}

/// Logs go to stderr so the JSON report on stdout stays machine readable.
pub(super) fn set_up_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

pub(super) fn set_up_config() -> Result<SiteConfig, ConfigError> {
    dotenvy::dotenv().ok();

    let form = match std::env::var(FORM_VARIANT_VAR) {
        Ok(value) if !value.trim().is_empty() => value.parse::<FormVariant>()?,
        _ => FormVariant::default(),
    };

    let cdn_images_path = std::env::var(CDN_IMAGES_VAR)
        .ok()
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from);

    tracing::debug!(form = %form, images = ?cdn_images_path, "config loaded");
    Ok(SiteConfig { form, cdn_images_path })
}

fn load_cdn_images(path: &Path) -> Result<CdnImages, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|e| ConfigError {
        message: format!("failed to read {}: {}", path.display(), e),
    })?;
    Ok(CdnImages::from_json(&json)?)
}

/// Parse a JSON object of field name to value. Unknown names are skipped with
/// a warning rather than rejected.
pub(super) fn parse_field_values(json: &str) -> Result<FieldValues, ConfigError> {
    let raw: BTreeMap<String, String> = serde_json::from_str(json)?;

    let values = raw
        .into_iter()
        .filter_map(|(name, value)| match name.parse::<FieldName>() {
            Ok(field) => Some((field, value)),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring input");
                None
            }
        })
        .collect();

    Ok(values)
}
