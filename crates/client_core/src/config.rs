use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use tracing::{info, warn};
use url::Url;

use crate::error::ClientError;

pub const SETTINGS_FILE: &str = "attendify.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct KioskSettings {
    pub api_base_url: String,
    pub roll_number: String,
    pub camera_frame_path: Option<PathBuf>,
    pub frame_interval: Duration,
    pub request_timeout: Duration,
}

impl Default for KioskSettings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000".into(),
            roll_number: "24eg105g54".into(),
            camera_frame_path: None,
            frame_interval: Duration::from_millis(1000),
            request_timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_base_url: Option<String>,
    roll_number: Option<String>,
    camera_frame_path: Option<PathBuf>,
    frame_interval_ms: Option<u64>,
    request_timeout_secs: Option<u64>,
}

/// Defaults, then `attendify.toml` in the working directory, then
/// `ATTENDIFY__*` environment variables.
pub fn load_settings() -> Result<KioskSettings, ClientError> {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

pub(crate) fn load_settings_from(
    path: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<KioskSettings, ClientError> {
    let mut settings = KioskSettings::default();

    match fs::read_to_string(path) {
        Ok(raw) => apply_file(&mut settings, &raw)?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "settings file not found, using defaults")
        }
        Err(err) => warn!(
            path = %path.display(),
            error = %err,
            "settings file unreadable, using defaults"
        ),
    }

    apply_env(&mut settings, lookup);
    validate(&settings)?;
    Ok(settings)
}

pub(crate) fn apply_file(settings: &mut KioskSettings, raw: &str) -> Result<(), ClientError> {
    let file: FileSettings = toml::from_str(raw)
        .map_err(|err| ClientError::Config(format!("failed to parse {SETTINGS_FILE}: {err}")))?;

    if let Some(v) = file.api_base_url {
        settings.api_base_url = v;
    }
    if let Some(v) = file.roll_number {
        settings.roll_number = v;
    }
    if let Some(v) = file.camera_frame_path {
        settings.camera_frame_path = Some(v);
    }
    if let Some(v) = file.frame_interval_ms {
        settings.frame_interval = Duration::from_millis(v);
    }
    if let Some(v) = file.request_timeout_secs {
        settings.request_timeout = Duration::from_secs(v);
    }
    Ok(())
}

pub(crate) fn apply_env(settings: &mut KioskSettings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("ATTENDIFY__API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = lookup("ATTENDIFY__ROLL_NUMBER") {
        settings.roll_number = v;
    }
    if let Some(v) = lookup("ATTENDIFY__CAMERA_FRAME_PATH") {
        settings.camera_frame_path = Some(PathBuf::from(v));
    }
    if let Some(v) = lookup("ATTENDIFY__FRAME_INTERVAL_MS") {
        match v.parse::<u64>() {
            Ok(parsed) => settings.frame_interval = Duration::from_millis(parsed),
            Err(err) => warn!("invalid ATTENDIFY__FRAME_INTERVAL_MS value {v:?}: {err}"),
        }
    }
    if let Some(v) = lookup("ATTENDIFY__REQUEST_TIMEOUT_SECS") {
        match v.parse::<u64>() {
            Ok(parsed) => settings.request_timeout = Duration::from_secs(parsed),
            Err(err) => warn!("invalid ATTENDIFY__REQUEST_TIMEOUT_SECS value {v:?}: {err}"),
        }
    }
}

pub(crate) fn validate(settings: &KioskSettings) -> Result<(), ClientError> {
    let url = Url::parse(&settings.api_base_url).map_err(|err| {
        ClientError::Config(format!(
            "api_base_url '{}' is not a valid url: {err}",
            settings.api_base_url
        ))
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::Config(format!(
            "api_base_url must use http or https, got '{}'",
            url.scheme()
        )));
    }
    if settings.roll_number.trim().is_empty() {
        return Err(ClientError::Config("roll_number must not be empty".into()));
    }
    if settings.frame_interval.is_zero() {
        return Err(ClientError::Config("frame_interval_ms must be positive".into()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
