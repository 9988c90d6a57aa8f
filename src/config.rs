//! Canvas configuration
//!
//! All capacities are fixed when the grid and trackers are built from a
//! config. Missing JSON fields fall back to the defaults below.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CanvasError, Result};
use crate::grid::{DrawStyle, Grid};
use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::store::DEFAULT_ADDITIVE_CAPACITY;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub draw_style: DrawStyle,
    pub width: usize,
    pub height: usize,
    /// Initial brush size, clamped to the grid's brush range
    pub brush_size: usize,
    /// Layers each additive cell can hold
    pub additive_capacity: usize,
    /// Distinct layer types each sequence cell can hold
    pub sequence_capacity: usize,
    pub undo_capacity: usize,
    pub replay_capacity: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            draw_style: DrawStyle::Set,
            width: 32,
            height: 32,
            brush_size: Grid::DEFAULT_BRUSH_SIZE,
            additive_capacity: DEFAULT_ADDITIVE_CAPACITY,
            sequence_capacity: crate::layers::get_layers().len(),
            undo_capacity: DEFAULT_HISTORY_CAPACITY,
            replay_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl CanvasConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CanvasConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| CanvasError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        let cells = self.width.checked_mul(self.height).unwrap_or(0);
        if cells == 0 {
            return Err(CanvasError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.brush_size > Grid::MAX_BRUSH {
            return Err(CanvasError::InvalidConfig {
                reason: format!(
                    "brush_size {} exceeds maximum {}",
                    self.brush_size,
                    Grid::MAX_BRUSH
                ),
            });
        }
        let capacities = [
            ("additive_capacity", self.additive_capacity),
            ("sequence_capacity", self.sequence_capacity),
            ("undo_capacity", self.undo_capacity),
            ("replay_capacity", self.replay_capacity),
        ];
        if let Some((name, _)) = capacities.iter().find(|(_, v)| *v == 0) {
            return Err(CanvasError::InvalidConfig {
                reason: format!("{} must be at least 1", name),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_is_valid() {
        let config = CanvasConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.brush_size, 2);
        assert_eq!(config.undo_capacity, 10000);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            CanvasConfig::from_json_str(r#"{"draw_style": "ADD", "width": 3, "height": 2}"#)
                .unwrap();
        assert_eq!(config.draw_style, DrawStyle::Add);
        assert_eq!((config.width, config.height), (3, 2));
        assert_eq!(config.additive_capacity, DEFAULT_ADDITIVE_CAPACITY);
    }

    #[test]
    fn test_invalid_style_rejected() {
        let err = CanvasConfig::from_json_str(r#"{"draw_style": "PAINT"}"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_validation_errors() {
        let err = CanvasConfig::from_json_str(r#"{"width": 0}"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIMENSIONS");

        let huge = CanvasConfig {
            width: usize::MAX,
            height: 2,
            ..CanvasConfig::default()
        };
        assert_eq!(huge.validate().unwrap_err().error_code(), "INVALID_DIMENSIONS");

        let err = CanvasConfig::from_json_str(r#"{"brush_size": 6}"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIG");

        let err = CanvasConfig::from_json_str(r#"{"undo_capacity": 0}"#).unwrap_err();
        assert!(err.to_string().contains("undo_capacity"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"draw_style": "SEQUENCE", "sequence_capacity": 4}}"#).unwrap();

        let config = CanvasConfig::load(file.path()).unwrap();
        assert_eq!(config.draw_style, DrawStyle::Sequence);
        assert_eq!(config.sequence_capacity, 4);

        let missing = CanvasConfig::load(Path::new("/nonexistent/layerpaint.json"));
        assert_eq!(missing.unwrap_err().error_code(), "CONFIG_READ_ERROR");
    }
}
