//! Media backend configuration.
//!
//! Handles loading, validating, and merging the `imgsrc.toml` config file.
//! The rewriter itself never reads ambient state — the hosting application
//! loads a [`MediaConfig`] once at startup and passes it by reference into
//! every call. That keeps the rewriter a pure function and unit-testable
//! without environment mutation.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! # URL path prefix under which all media is served
//! media_path = "/media"
//!
//! # Where optimized images are served from:
//! #   "onboard" - relative to the storefront itself
//! #   "backend" - absolutely, against the backend origin
//! optimizing_origin = "onboard"
//!
//! # Scheme + host (+ optional mount path) of the media/CDN server.
//! # Unset means no origin stripping or re-prepending happens.
//! # backend_origin = "https://cdn.example.com"
//!
//! [srcset]
//! widths = [640, 960, 1280, 1600]   # Candidate widths for srcset generation
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Where image-optimization requests are served from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizingOrigin {
    /// Relative to the storefront — rewritten URLs stay origin-less.
    #[default]
    Onboard,
    /// Against the backend — rewritten media paths get the backend origin
    /// prepended.
    Backend,
}

/// Media backend configuration loaded from `imgsrc.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MediaConfig {
    /// Scheme + host (+ optional mount path) of the media/CDN server.
    /// `None` disables origin stripping and re-prepending entirely.
    pub backend_origin: Option<String>,
    /// URL path prefix under which all media is served.
    pub media_path: String,
    /// Whether rewritten URLs point at the storefront or the backend.
    pub optimizing_origin: OptimizingOrigin,
    /// Responsive srcset generation settings.
    pub srcset: SrcsetConfig,
}

fn default_media_path() -> String {
    "/media".to_string()
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            backend_origin: None,
            media_path: default_media_path(),
            optimizing_origin: OptimizingOrigin::default(),
            srcset: SrcsetConfig::default(),
        }
    }
}

impl MediaConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.media_path.starts_with('/') {
            return Err(ConfigError::Validation(
                "media_path must start with '/'".into(),
            ));
        }
        if self.media_path.len() > 1 && self.media_path.ends_with('/') {
            return Err(ConfigError::Validation(
                "media_path must not end with '/'".into(),
            ));
        }
        if let Some(origin) = &self.backend_origin {
            let url = Url::parse(origin).map_err(|e| {
                ConfigError::Validation(format!("backend_origin is not a valid URL: {e}"))
            })?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ConfigError::Validation(
                    "backend_origin must be an http(s) URL".into(),
                ));
            }
        }
        if self.srcset.widths.is_empty() {
            return Err(ConfigError::Validation(
                "srcset.widths must not be empty".into(),
            ));
        }
        if self.srcset.widths.contains(&0) {
            return Err(ConfigError::Validation(
                "srcset.widths values must be non-zero".into(),
            ));
        }
        Ok(())
    }

    /// Backend origin with any trailing `/` trimmed, ready for prefix
    /// concatenation with `media_path`.
    pub fn backend_origin_trimmed(&self) -> Option<&str> {
        self.backend_origin
            .as_deref()
            .map(|origin| origin.trim_end_matches('/'))
    }
}

/// Responsive srcset generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SrcsetConfig {
    /// Candidate widths for `srcset` attributes, ascending.
    pub widths: Vec<u32>,
}

impl Default for SrcsetConfig {
    fn default() -> Self {
        Self {
            widths: vec![640, 960, 1280, 1600],
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(MediaConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist — a missing config means
/// stock defaults, not an error. Returns `Err` if the file exists but
/// contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<MediaConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: MediaConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from the given file path.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result. A missing file yields the stock defaults.
pub fn load_config(path: &Path) -> Result<MediaConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `imgsrc.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# imgsrc Configuration
# ====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# URL path prefix under which all product/category/wysiwyg media is served.
# Must start with '/' and not end with one.
media_path = "/media"

# Where image-optimization requests are served from:
#   "onboard" - relative to the storefront; rewritten URLs stay origin-less
#   "backend" - absolutely against the backend; rewritten media paths get
#               backend_origin prepended
optimizing_origin = "onboard"

# Scheme + host (+ optional mount path) of the media/CDN server.
# When set, absolute inputs under this origin are made relative again, and
# optimizing_origin = "backend" re-prepends it to rewritten media paths.
# backend_origin = "https://cdn.example.com"

# ---------------------------------------------------------------------------
# Responsive srcset generation
# ---------------------------------------------------------------------------
[srcset]
# Candidate widths emitted by the srcset command, ascending.
widths = [640, 960, 1280, 1600]
"##
}
