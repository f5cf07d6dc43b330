use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Screen rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Browser front-end configuration. Every field is optional on the JS side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Edge length of one square in pixels.
    pub cell_size: f64,
    /// Distance of the board's top-left corner from the canvas origin.
    pub offset: f64,
    pub pass_button: Rect,
    pub board_color: String,
    pub line_color: String,
    pub storage_key: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            offset: 100.0,
            pass_button: Rect {
                x: 375.0,
                y: 150.0,
                w: 100.0,
                h: 30.0,
            },
            board_color: "green".to_string(),
            line_color: "black".to_string(),
            storage_key: "othello.save".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size > 0.0 && self.cell_size.is_finite()) {
            return Err(ConfigError::Validation("cell_size must be finite and > 0".into()));
        }
        if !(self.offset >= 0.0 && self.offset.is_finite()) {
            return Err(ConfigError::Validation("offset must be finite and >= 0".into()));
        }
        let Rect { x, y, w, h } = self.pass_button;
        if ![x, y, w, h].iter().all(|v| v.is_finite()) {
            return Err(ConfigError::Validation("pass_button coordinates must be finite".into()));
        }
        if !(w > 0.0 && h > 0.0) {
            return Err(ConfigError::Validation("pass_button width and height must be > 0".into()));
        }
        if self.storage_key.is_empty() {
            return Err(ConfigError::Validation("storage_key must not be empty".into()));
        }
        self.level()?;
        Ok(())
    }

    pub fn level(&self) -> Result<log::Level, ConfigError> {
        log::Level::from_str(&self.log_level).map_err(|_| {
            ConfigError::Validation(format!("unknown log_level '{}'", self.log_level))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_layout() {
        let config = AppConfig::default();

        assert_eq!(config.cell_size, 30.0);
        assert_eq!(config.offset, 100.0);
        assert_eq!(config.pass_button.x, 375.0);
        assert!(config.validate().is_ok());
        assert_eq!(config.level().unwrap(), log::Level::Info);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config = AppConfig::from_json(r#"{"cell_size": 48, "log_level": "debug"}"#).unwrap();

        assert_eq!(config.cell_size, 48.0);
        assert_eq!(config.offset, 100.0);
        assert_eq!(config.storage_key, "othello.save");
        assert_eq!(config.level().unwrap(), log::Level::Debug);
    }

    #[test]
    fn validation_rejects_bad_values() {
        let err = AppConfig::from_json(r#"{"cell_size": 0}"#).unwrap_err();
        assert_eq!(err.to_string(), "config validation error: cell_size must be finite and > 0");

        let err = AppConfig::from_json(r#"{"log_level": "loud"}"#).unwrap_err();
        assert!(err.to_string().contains("log_level"));

        let err = AppConfig::from_json(r#"{"storage_key": ""}"#).unwrap_err();
        assert!(err.to_string().contains("storage_key"));
    }

    #[test]
    fn validation_rejects_non_finite_geometry() {
        let infinite_cells = AppConfig {
            cell_size: f64::INFINITY,
            ..AppConfig::default()
        };
        assert!(infinite_cells.validate().is_err());

        let nan_offset = AppConfig {
            offset: f64::NAN,
            ..AppConfig::default()
        };
        assert!(nan_offset.validate().is_err());

        let mut wide_button = AppConfig::default();
        wide_button.pass_button.w = f64::INFINITY;
        assert!(wide_button.validate().is_err());

        let mut lost_button = AppConfig::default();
        lost_button.pass_button.x = f64::NEG_INFINITY;
        assert!(lost_button.validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = AppConfig::from_json("{").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
