//! Runtime configuration for the wireframe overlay, with TOML preset
//! support.
//!
//! All fields use `#[serde(default)]` so partial preset files (e.g.
//! only overriding `circle_divisions`) work correctly.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::WiredrawError;
use crate::geometry::DEFAULT_CIRCLE_DIVISIONS;

/// Wireframe overlay options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Wireframe", inline)]
#[serde(default)]
pub struct WireframeOptions {
    /// Angular divisions per wire-sphere circle.
    #[schemars(title = "Circle Divisions")]
    pub circle_divisions: u32,
    /// Default cell extents for axis-aligned grid overlays.
    #[schemars(title = "Grid Cell Extents")]
    pub grid_cell_extents: [f32; 3],
}

impl Default for WireframeOptions {
    fn default() -> Self {
        Self {
            circle_divisions: DEFAULT_CIRCLE_DIVISIONS,
            grid_cell_extents: [1.0, 1.0, 1.0],
        }
    }
}

impl WireframeOptions {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(WireframeOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    /// Returns [`WiredrawError::Io`] if the file cannot be read and
    /// [`WiredrawError::OptionsParse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, WiredrawError> {
        let content = std::fs::read_to_string(path).map_err(WiredrawError::Io)?;
        toml::from_str(&content)
            .map_err(|e| WiredrawError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    /// Returns [`WiredrawError::Io`] if the file cannot be written and
    /// [`WiredrawError::OptionsParse`] if serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), WiredrawError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WiredrawError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(WiredrawError::Io)?;
        }
        std::fs::write(path, content).map_err(WiredrawError::Io)
    }
}
