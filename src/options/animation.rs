use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;
use crate::util::frame_timing::DEFAULT_MAX_DT;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Spring stiffness per channel, progress easing and frame-delta cap.
pub struct AnimationOptions {
    /// Curve applied to each phase's progress fraction.
    #[schemars(skip)]
    pub easing: EasingFunction,
    /// Longest frame delta fed to the springs, in seconds.
    #[schemars(title = "Max Frame Step", range(min = 0.005, max = 0.25), extend("step" = 0.005))]
    pub max_dt: f32,
    /// Stiffness of the canvas slide spring.
    #[schemars(title = "Canvas Stiffness", range(min = 1.0, max = 60.0), extend("step" = 0.5))]
    pub canvas_stiffness: f32,
    /// Stiffness of the model rotation spring.
    #[schemars(title = "Rotation Stiffness", range(min = 1.0, max = 60.0), extend("step" = 0.5))]
    pub rotation_stiffness: f32,
    /// Stiffness of the model X offset spring.
    #[schemars(title = "Offset X Stiffness", range(min = 1.0, max = 60.0), extend("step" = 0.5))]
    pub offset_x_stiffness: f32,
    /// Stiffness of the model Y offset spring.
    #[schemars(title = "Offset Y Stiffness", range(min = 1.0, max = 60.0), extend("step" = 0.5))]
    pub offset_y_stiffness: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            easing: EasingFunction::DEFAULT,
            max_dt: DEFAULT_MAX_DT,
            canvas_stiffness: 16.0,
            rotation_stiffness: 10.0,
            offset_x_stiffness: 18.0,
            offset_y_stiffness: 18.0,
        }
    }
}
