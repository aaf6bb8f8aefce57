//! Centralized tuning options with TOML preset support.
//!
//! Every tunable constant of the effect (spring stiffness, framing
//! padding, tilt response, keyframe layout, lights, asset path) lives
//! here. Options serialize to/from TOML so a page can ship a preset.

mod animation;
mod asset;
mod camera;
mod canvas;
mod keyframes;
mod lighting;

use std::path::Path;

pub use animation::AnimationOptions;
pub use asset::AssetOptions;
pub use camera::CameraOptions;
pub use canvas::CanvasOptions;
pub use keyframes::{BreathingFade, BreathingOptions, KeyframeMode, KeyframeOptions};
pub use lighting::LightingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::StageError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Spring stiffness, easing and frame-delta cap.
    pub animation: AnimationOptions,
    /// Camera projection and framing.
    pub camera: CameraOptions,
    /// Canvas element tilt and sizing.
    pub canvas: CanvasOptions,
    /// Keyframe table selection.
    pub keyframes: KeyframeOptions,
    /// Idle sway.
    pub breathing: BreathingOptions,
    /// Scene lights.
    pub lighting: LightingOptions,
    /// Model file and post-load behavior.
    #[schemars(skip)]
    pub asset: AssetOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults; the
    /// result is validated.
    pub fn from_toml_str(content: &str) -> Result<Self, StageError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| StageError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, StageError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), StageError> {
        let content = self.to_toml_string()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(StageError::Io)
    }

    /// Serialize to pretty-printed TOML.
    pub fn to_toml_string(&self) -> Result<String, StageError> {
        toml::to_string_pretty(self)
            .map_err(|e| StageError::OptionsParse(e.to_string()))
    }

    /// Reject values the animation math cannot work with.
    pub fn validate(&self) -> Result<(), StageError> {
        let anim = &self.animation;
        let stiffness = [
            ("canvas_stiffness", anim.canvas_stiffness),
            ("rotation_stiffness", anim.rotation_stiffness),
            ("offset_x_stiffness", anim.offset_x_stiffness),
            ("offset_y_stiffness", anim.offset_y_stiffness),
        ];
        for (name, k) in stiffness {
            if !(k.is_finite() && k > 0.0) {
                return Err(invalid(format!(
                    "animation.{name} must be positive, got {k}"
                )));
            }
        }
        if !(anim.max_dt.is_finite() && anim.max_dt > 0.0) {
            return Err(invalid(format!(
                "animation.max_dt must be positive, got {}",
                anim.max_dt
            )));
        }
        let cam = &self.camera;
        if !(cam.fovy > 0.0 && cam.fovy < 180.0) {
            return Err(invalid(format!(
                "camera.fovy must be in (0, 180), got {}",
                cam.fovy
            )));
        }
        if !(cam.padding.is_finite() && cam.padding > 0.0) {
            return Err(invalid(format!(
                "camera.padding must be positive, got {}",
                cam.padding
            )));
        }
        if !(cam.znear > 0.0 && cam.zfar > cam.znear) {
            return Err(invalid(format!(
                "camera clip planes must satisfy 0 < znear < zfar, got {} / {}",
                cam.znear, cam.zfar
            )));
        }
        let canvas = &self.canvas;
        if !(canvas.tilt_max_deg.is_finite() && canvas.tilt_max_deg >= 0.0) {
            return Err(invalid(format!(
                "canvas.tilt_max_deg must be non-negative, got {}",
                canvas.tilt_max_deg
            )));
        }
        if !canvas.tilt_gain.is_finite() {
            return Err(invalid(format!(
                "canvas.tilt_gain must be finite, got {}",
                canvas.tilt_gain
            )));
        }
        if !(0.0..=1.0).contains(&self.canvas.tilt_retention) {
            return Err(invalid(format!(
                "canvas.tilt_retention must be in [0, 1], got {}",
                self.canvas.tilt_retention
            )));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> StageError {
    StageError::InvalidOptions(msg)
}
