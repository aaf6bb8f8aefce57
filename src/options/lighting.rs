use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Scene lights handed to the host renderer at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
pub struct LightingOptions {
    /// Ambient light color (linear RGB).
    #[schemars(skip)]
    pub ambient_color: [f32; 3],
    /// Ambient light intensity.
    #[schemars(title = "Ambient", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub ambient_intensity: f32,
    /// Directional key light color (linear RGB).
    #[schemars(skip)]
    pub key_color: [f32; 3],
    /// Directional key light intensity.
    #[schemars(title = "Key Light", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub key_intensity: f32,
    /// Whether the key light casts shadows.
    #[schemars(title = "Shadows")]
    pub cast_shadows: bool,
    /// Shadow map resolution (square).
    #[schemars(skip)]
    pub shadow_map_size: u32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            ambient_color: [1.0, 1.0, 1.0],
            ambient_intensity: 0.65,
            key_color: [1.0, 1.0, 1.0],
            key_intensity: 1.05,
            cast_shadows: true,
            shadow_map_size: 1024,
        }
    }
}
