//! Console settings, read once at startup from an optional JSON file.
//!
//! Lookup order: the path in `RAILOPTIMA_CONFIG`, then `railoptima.json` in
//! the working directory. A missing file means defaults. A file that cannot be
//! read or validated logs a warning and also falls back to defaults.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::Deserialize;

use crate::metrics::UTILIZATION_WARNING_PERCENT;
use crate::settings_error::SettingsError;
use crate::tabs::DashboardTab;

pub const SETTINGS_ENV_VAR: &str = "RAILOPTIMA_CONFIG";
pub const DEFAULT_SETTINGS_FILE: &str = "railoptima.json";

/// The header clock must refresh at least once a second.
pub const MAX_CLOCK_INTERVAL_SECS: f32 = 1.0;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardSettings {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    /// Live clock refresh period.
    pub clock_interval_secs: f32,
    pub twenty_four_hour_clock: bool,
    pub default_tab: DashboardTab,
    /// Capacity bars above this percentage are tinted as a warning.
    pub utilization_warning_percent: u8,
    /// `tracing` env-filter directive handed to the log plugin.
    pub log_filter: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            window_title: "RailOptima".to_string(),
            window_width: 1280.0,
            window_height: 800.0,
            clock_interval_secs: 1.0,
            twenty_four_hour_clock: false,
            default_tab: DashboardTab::Overview,
            utilization_warning_percent: UTILIZATION_WARNING_PERCENT,
            log_filter: "info,wgpu=error,naga=warn".to_string(),
        }
    }
}

impl DashboardSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        let interval = self.clock_interval_secs;
        if !(interval > 0.0 && interval <= MAX_CLOCK_INTERVAL_SECS) {
            return Err(SettingsError::Invalid(format!(
                "clock_interval_secs must be in (0, {MAX_CLOCK_INTERVAL_SECS}], got {interval}"
            )));
        }
        if self.utilization_warning_percent > 100 {
            return Err(SettingsError::Invalid(format!(
                "utilization_warning_percent must be at most 100, got {}",
                self.utilization_warning_percent
            )));
        }
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from `path`. `Ok(None)` when the file does not exist.
    pub fn read_from(path: &Path) -> Result<Option<Self>, SettingsError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Self::from_json(&json).map(Some)
    }

    /// Load from `path`, falling back to defaults on any failure. The returned
    /// [`SettingsSource`] records what happened so it can be logged once the
    /// log plugin is running.
    pub fn load_or_default(path: &Path) -> (Self, SettingsSource) {
        match Self::read_from(path) {
            Ok(Some(settings)) => (settings, SettingsSource::File(path.to_path_buf())),
            Ok(None) => (Self::default(), SettingsSource::Defaults),
            Err(e) => (
                Self::default(),
                SettingsSource::Rejected {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                },
            ),
        }
    }

    /// Settings from the configured location (see module docs).
    pub fn load() -> (Self, SettingsSource) {
        Self::load_or_default(&settings_path())
    }
}

/// Where the active settings came from.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Default)]
pub enum SettingsSource {
    #[default]
    Defaults,
    File(PathBuf),
    Rejected { path: PathBuf, reason: String },
}

pub fn log_settings_source(source: Option<Res<SettingsSource>>) {
    match source.as_deref() {
        None | Some(SettingsSource::Defaults) => info!("Using default console settings"),
        Some(SettingsSource::File(path)) => {
            info!("Loaded console settings from {}", path.display())
        }
        Some(SettingsSource::Rejected { path, reason }) => warn!(
            "Ignoring console settings at {}: {}; using defaults",
            path.display(),
            reason
        ),
    }
}

pub fn settings_path() -> PathBuf {
    std::env::var_os(SETTINGS_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "railoptima_settings_{}_{}.json",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_are_valid() {
        let settings = DashboardSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.clock_interval_secs, 1.0);
        assert_eq!(settings.utilization_warning_percent, 80);
        assert_eq!(settings.default_tab, DashboardTab::Overview);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let settings = DashboardSettings::from_json(
            r#"{ "twenty_four_hour_clock": true, "default_tab": "live-trains" }"#,
        )
        .unwrap();
        assert!(settings.twenty_four_hour_clock);
        assert_eq!(settings.default_tab, DashboardTab::LiveTrains);
        assert_eq!(settings.window_title, "RailOptima");
        assert_eq!(settings.clock_interval_secs, 1.0);
    }

    #[test]
    fn test_invalid_values_rejected() {
        for json in [
            r#"{ "clock_interval_secs": 0.0 }"#,
            r#"{ "clock_interval_secs": -1.0 }"#,
            r#"{ "clock_interval_secs": 5.0 }"#,
            r#"{ "clock_interval_secs": 1e30 }"#,
            r#"{ "utilization_warning_percent": 120 }"#,
            r#"{ "window_width": 0.0 }"#,
        ] {
            let err = DashboardSettings::from_json(json).unwrap_err();
            assert!(matches!(err, SettingsError::Invalid(_)), "{json}: {err}");
        }
    }

    #[test]
    fn test_clock_interval_bounds() {
        let at_max = DashboardSettings::from_json(r#"{ "clock_interval_secs": 1.0 }"#).unwrap();
        assert_eq!(at_max.clock_interval_secs, MAX_CLOCK_INTERVAL_SECS);
        assert!(DashboardSettings::from_json(r#"{ "clock_interval_secs": 0.25 }"#).is_ok());
        assert!(DashboardSettings::from_json(r#"{ "clock_interval_secs": 1.01 }"#).is_err());
        let huge = DashboardSettings {
            clock_interval_secs: f32::MAX,
            ..Default::default()
        };
        assert!(matches!(huge.validate(), Err(SettingsError::Invalid(_))));
        let nan = DashboardSettings {
            clock_interval_secs: f32::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = DashboardSettings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        let err = DashboardSettings::from_json(r#"{ "colour": "red" }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_none() {
        let path = std::env::temp_dir().join("railoptima_settings_does_not_exist.json");
        assert!(DashboardSettings::read_from(&path).unwrap().is_none());
        assert_eq!(
            DashboardSettings::load_or_default(&path),
            (DashboardSettings::default(), SettingsSource::Defaults)
        );
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_file("valid", r#"{ "window_title": "Control Room" }"#);
        let (settings, source) = DashboardSettings::load_or_default(&path);
        assert_eq!(settings.window_title, "Control Room");
        assert_eq!(source, SettingsSource::File(path.clone()));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let path = temp_file("invalid", r#"{ "clock_interval_secs": 0 }"#);
        assert!(DashboardSettings::read_from(&path).is_err());
        let (settings, source) = DashboardSettings::load_or_default(&path);
        assert_eq!(settings, DashboardSettings::default());
        match source {
            SettingsSource::Rejected { path: rejected, reason } => {
                assert_eq!(rejected, path);
                assert!(reason.contains("clock_interval_secs"), "{reason}");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        std::fs::remove_file(path).ok();
    }
}
