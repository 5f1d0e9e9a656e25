use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use shared::error::SettingsError;
use tracing::debug;
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://ems-backend-dczs.onrender.com";
pub const SETTINGS_FILE_NAME: &str = "employee_records.toml";
const CONFIG_DIR_NAME: &str = "employee_records";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Base URL of the employee API, without a trailing slash.
    pub api_base: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct FileSettings {
    pub api_base: Option<String>,
}

/// Loads settings from defaults, then the settings file, then the
/// environment, then `api_base_override`. Later layers win.
///
/// With `explicit_path` the file must exist; otherwise `./employee_records.toml`
/// and `<config dir>/employee_records/config.toml` are tried in that order.
pub fn load_settings(
    explicit_path: Option<&Path>,
    api_base_override: Option<&str>,
) -> Result<ClientSettings, SettingsError> {
    let file = match explicit_path {
        Some(path) => Some(read_settings_file(path)?),
        None => match default_settings_path() {
            Some(path) => Some(read_settings_file(&path)?),
            None => None,
        },
    };

    resolve_settings(
        file,
        |name| std::env::var(name).ok(),
        api_base_override,
    )
}

/// Applies the file, environment and override layers over the defaults.
pub fn resolve_settings(
    file: Option<FileSettings>,
    env: impl Fn(&str) -> Option<String>,
    api_base_override: Option<&str>,
) -> Result<ClientSettings, SettingsError> {
    let mut api_base = ClientSettings::default().api_base;

    if let Some(v) = file.and_then(|file| file.api_base) {
        api_base = v;
    }
    if let Some(v) = env("EMS_API_BASE") {
        api_base = v;
    }
    if let Some(v) = env("APP__API_BASE") {
        api_base = v;
    }
    if let Some(v) = api_base_override {
        api_base = v.to_string();
    }

    Ok(ClientSettings {
        api_base: normalize_api_base(&api_base)?,
    })
}

pub fn read_settings_file(path: &Path) -> Result<FileSettings, SettingsError> {
    let raw = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), "loaded settings file");
    toml::from_str::<FileSettings>(&raw).map_err(|err| SettingsError::Parse {
        path: path.display().to_string(),
        reason: err.to_string(),
    })
}

fn default_settings_path() -> Option<PathBuf> {
    let local = PathBuf::from(SETTINGS_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join("config.toml"))
        .filter(|path| path.is_file())
}

/// Validates an http(s) base URL and strips trailing slashes.
pub fn normalize_api_base(raw: &str) -> Result<String, SettingsError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: String| SettingsError::InvalidBaseUrl {
        value: raw.to_string(),
        reason,
    };

    if trimmed.is_empty() {
        return Err(invalid("empty".to_string()));
    }
    let parsed = Url::parse(trimmed).map_err(|err| invalid(err.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{other}'"))),
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
