use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which keyframe table drives the scroll animation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KeyframeMode {
    /// Hand-authored three-keyframe table (one full turn).
    ThreeSection,
    /// One generated keyframe per page section.
    Sweep {
        /// Full model turns over the whole page.
        turns: f32,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Keyframes", inline)]
#[serde(default)]
/// Keyframe table selection.
pub struct KeyframeOptions {
    /// Table layout.
    #[schemars(title = "Mode")]
    pub mode: KeyframeMode,
}

impl Default for KeyframeOptions {
    fn default() -> Self {
        Self {
            mode: KeyframeMode::ThreeSection,
        }
    }
}

/// What fades the idle sway out.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum BreathingFade {
    /// Eased progress through the last phase of the track.
    FinalPhase,
    /// Linear progress through all sections.
    WholeTrack,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Breathing", inline)]
#[serde(default)]
/// Idle sway of the model about its X axis.
pub struct BreathingOptions {
    /// Peak sway in radians.
    #[schemars(title = "Amplitude", range(min = 0.0, max = 0.2), extend("step" = 0.005))]
    pub amplitude: f32,
    /// Angular frequency in radians per millisecond.
    #[schemars(skip)]
    pub frequency: f32,
    /// Progress measure that fades the sway out.
    #[schemars(title = "Fade")]
    pub fade: BreathingFade,
}

impl Default for BreathingOptions {
    fn default() -> Self {
        Self {
            amplitude: 0.03,
            frequency: 0.0015,
            fade: BreathingFade::FinalPhase,
        }
    }
}
