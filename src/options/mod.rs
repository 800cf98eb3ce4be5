//! Blend options with TOML support.
//!
//! Default blend settings, preset-cycling behaviour and extra presets live
//! in one file so a host can tune transitions without recompiling.

mod cycle;

use std::path::Path;

pub use cycle::CycleOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::blend::Blend;
use crate::engine::PostFxEngine;
use crate::error::BlendError;
use crate::preset::Preset;
use crate::store::EffectStore;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[cycle]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct BlendOptions {
    /// Blend used for one-off applies.
    #[schemars(title = "Default Blend")]
    pub defaults: Blend,
    /// Preset cycling behaviour.
    pub cycle: CycleOptions,
    /// Extra presets appended after the built-in ones.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub presets: Vec<Preset>,
}

impl BlendOptions {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(BlendOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, BlendError> {
        let content = std::fs::read_to_string(path).map_err(BlendError::Io)?;
        toml::from_str(&content)
            .map_err(|e| BlendError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), BlendError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BlendError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(BlendError::Io)?;
        }
        std::fs::write(path, content).map_err(BlendError::Io)
    }

    /// Append the configured presets to `engine`'s preset list.
    pub fn install_presets<S: EffectStore>(&self, engine: &mut PostFxEngine<S>) {
        for preset in &self.presets {
            engine.add_preset_to_list(preset.clone());
        }
        if !self.presets.is_empty() {
            log::info!("installed {} preset(s) from options", self.presets.len());
        }
    }
}
