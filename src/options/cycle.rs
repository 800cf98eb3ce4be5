use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::blend::Blend;

/// Preset cycling behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Preset Cycling", inline)]
#[serde(default)]
pub struct CycleOptions {
    /// Blend amount used when stepping between presets.
    #[schemars(title = "Blend Amount", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub blend_amount: f32,
    /// Seconds each preset change takes to blend in.
    #[schemars(title = "Transition Duration", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub transition_duration: f32,
    /// Step to the next preset automatically.
    #[schemars(title = "Auto Cycle")]
    pub auto_cycle: bool,
    /// Seconds between automatic steps.
    #[schemars(title = "Cycle Interval", range(min = 0.5, max = 60.0), extend("step" = 0.5))]
    pub cycle_interval: f32,
}

impl CycleOptions {
    /// Blend used for a non-instant preset change.
    #[must_use]
    pub const fn blend(&self) -> Blend {
        Blend {
            amount: self.blend_amount,
            duration: self.transition_duration,
        }
    }
}

impl Default for CycleOptions {
    fn default() -> Self {
        Self {
            blend_amount: 1.0,
            transition_duration: 0.8,
            auto_cycle: false,
            cycle_interval: 5.0,
        }
    }
}
