//! Startup configuration read from the environment

const BASE_PATH_VAR: &str = "AEONLIGHTS_BASE_PATH";
const EMAILJS_SERVICE_ID_VAR: &str = "AEONLIGHTS_EMAILJS_SERVICE_ID";
const EMAILJS_TEMPLATE_ID_VAR: &str = "AEONLIGHTS_EMAILJS_TEMPLATE_ID";
const EMAILJS_PUBLIC_KEY_VAR: &str = "AEONLIGHTS_EMAILJS_PUBLIC_KEY";
const CELL_WIDTH_VAR: &str = "AEONLIGHTS_CELL_WIDTH_PX";
const CELL_HEIGHT_VAR: &str = "AEONLIGHTS_CELL_HEIGHT_PX";

const DEFAULT_BASE_PATH: &str = "/";
const DEFAULT_CELL_WIDTH_PX: u32 = 8;
const DEFAULT_CELL_HEIGHT_PX: u32 = 16;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must start with '/', got `{value}`")]
    RelativeBasePath { var: &'static str, value: String },
    #[error("{var} must be a positive integer, got `{value}`")]
    InvalidCellSize { var: &'static str, value: String },
}

/// Contact-form service identifiers. Passed through untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
}

impl EmailJsConfig {
    pub fn is_complete(&self) -> bool {
        self.service_id.is_some() && self.template_id.is_some() && self.public_key.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub base_path: String,
    pub emailjs: EmailJsConfig,
    pub cell_width_px: u32,
    pub cell_height_px: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            emailjs: EmailJsConfig::default(),
            cell_width_px: DEFAULT_CELL_WIDTH_PX,
            cell_height_px: DEFAULT_CELL_HEIGHT_PX,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |var: &str| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let base_path = non_empty(BASE_PATH_VAR).unwrap_or_else(|| DEFAULT_BASE_PATH.to_string());
        if !base_path.starts_with('/') {
            return Err(ConfigError::RelativeBasePath {
                var: BASE_PATH_VAR,
                value: base_path,
            });
        }

        let cell_size = |var: &'static str, default: u32| match non_empty(var) {
            None => Ok(default),
            Some(value) => match value.parse::<u32>() {
                Ok(px) if px > 0 => Ok(px),
                _ => Err(ConfigError::InvalidCellSize { var, value }),
            },
        };

        let config = Self {
            base_path,
            emailjs: EmailJsConfig {
                service_id: non_empty(EMAILJS_SERVICE_ID_VAR),
                template_id: non_empty(EMAILJS_TEMPLATE_ID_VAR),
                public_key: non_empty(EMAILJS_PUBLIC_KEY_VAR),
            },
            cell_width_px: cell_size(CELL_WIDTH_VAR, DEFAULT_CELL_WIDTH_PX)?,
            cell_height_px: cell_size(CELL_HEIGHT_VAR, DEFAULT_CELL_HEIGHT_PX)?,
        };

        tracing::debug!(
            base_path = %config.base_path,
            emailjs_configured = config.emailjs.is_complete(),
            cell_width_px = config.cell_width_px,
            cell_height_px = config.cell_height_px,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Window width in pixels. Terminals that report their pixel size are
    /// taken at their word.
    pub fn window_width_px(&self, columns: u16, reported_px: u16) -> u32 {
        if reported_px > 0 {
            u32::from(reported_px)
        } else {
            u32::from(columns) * self.cell_width_px
        }
    }

    /// Pointer position of a terminal cell, in pixels.
    pub fn cell_to_px(&self, column: u16, row: u16) -> (f32, f32) {
        (
            (u32::from(column) * self.cell_width_px) as f32,
            (u32::from(row) * self.cell_height_px) as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn defaults_apply_without_variables() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(!config.emailjs.is_complete());
    }

    #[test]
    fn reads_all_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            ("AEONLIGHTS_BASE_PATH", "/site/"),
            ("AEONLIGHTS_EMAILJS_SERVICE_ID", "svc"),
            ("AEONLIGHTS_EMAILJS_TEMPLATE_ID", "tpl"),
            ("AEONLIGHTS_EMAILJS_PUBLIC_KEY", "key"),
            ("AEONLIGHTS_CELL_WIDTH_PX", "10"),
        ]))
        .unwrap();
        assert_eq!(config.base_path, "/site/");
        assert!(config.emailjs.is_complete());
        assert_eq!(config.cell_width_px, 10);
        assert_eq!(config.cell_height_px, 16);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            AppConfig::from_lookup(lookup(&[("AEONLIGHTS_BASE_PATH", "site")])),
            Err(ConfigError::RelativeBasePath {
                var: "AEONLIGHTS_BASE_PATH",
                value: "site".to_string()
            })
        );
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("AEONLIGHTS_CELL_HEIGHT_PX", "0")])),
            Err(ConfigError::InvalidCellSize { .. })
        ));
    }

    #[test]
    fn width_prefers_reported_pixels() {
        let config = AppConfig::default();
        assert_eq!(config.window_width_px(100, 0), 800);
        assert_eq!(config.window_width_px(100, 1300), 1300);
        assert_eq!(config.cell_to_px(3, 2), (24.0, 32.0));
    }
}
