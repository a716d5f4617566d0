use serde::{Deserialize, Serialize};

use crate::color::ContrastPalette;
use crate::error::{TableError, TableResult};

/// Policy knobs of the cascade resolver.
///
/// Serializable so hosts can persist table presets next to their own setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolveConfig {
    #[serde(default)]
    pub contrast: ContrastPalette,
    /// Skip background assignments for cells whose background equals the
    /// table background.
    #[serde(default = "default_suppress_inherited_background")]
    pub suppress_inherited_background: bool,
}

fn default_suppress_inherited_background() -> bool {
    true
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            contrast: ContrastPalette::default(),
            suppress_inherited_background: default_suppress_inherited_background(),
        }
    }
}

impl ResolveConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_contrast(mut self, contrast: ContrastPalette) -> Self {
        self.contrast = contrast;
        self
    }

    #[must_use]
    pub fn with_suppress_inherited_background(mut self, suppress: bool) -> Self {
        self.suppress_inherited_background = suppress;
        self
    }

    pub fn validate(self) -> TableResult<Self> {
        self.contrast.validate()?;
        Ok(self)
    }

    pub fn to_json_pretty(self) -> TableResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            TableError::InvalidData(format!("failed to serialize resolve config: {e}"))
        })
    }

    /// Parses and validates a config; missing fields take their defaults.
    pub fn from_json_str(input: &str) -> TableResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            TableError::InvalidData(format!("failed to parse resolve config json: {e}"))
        })?;
        config.validate()
    }
}
