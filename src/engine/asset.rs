//! What the session knows about the loaded model, and what it asks the
//! host to do with it.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{Bounds, Framing, ShadowFrame};
use crate::options::{AssetOptions, LightingOptions};

fn default_forward() -> Vec3 {
    Vec3::Z
}

/// Facts about a successfully loaded model, reported by the host loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetInfo {
    /// Model bounds at identity transform.
    pub bounds: Bounds,
    /// The model's forward axis in world space.
    #[serde(default = "default_forward")]
    pub forward: Vec3,
    /// Number of embedded animation clips.
    #[serde(default)]
    pub clip_count: usize,
    /// Names of embedded material variants, in file order.
    #[serde(default)]
    pub variants: Vec<String>,
}

impl AssetInfo {
    /// Model with the given bounds, facing +Z, with no clips or variants.
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            forward: default_forward(),
            clip_count: 0,
            variants: Vec::new(),
        }
    }
}

/// Load lifecycle of the single model.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModelState {
    /// Load in flight; frames skip model updates.
    #[default]
    Loading,
    /// Loaded and framed.
    Ready(AssetInfo),
    /// Load failed; the scene renders without a model from now on.
    Failed(String),
}

impl ModelState {
    /// Whether the model is loaded and framed.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Loaded model info, if ready.
    #[must_use]
    pub fn info(&self) -> Option<&AssetInfo> {
        match self {
            Self::Ready(info) => Some(info),
            _ => None,
        }
    }
}

/// One-time instructions for the host after a successful load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetSetup {
    /// Animation clip to start looping, if any.
    pub play_clip: Option<usize>,
    /// Material variant to select, if any.
    pub select_variant: Option<String>,
    /// Whether meshes cast and receive shadows.
    pub shadows: bool,
    /// Camera placement computed for the model.
    pub framing: Framing,
    /// Key-light placement following the model.
    pub shadow_frame: ShadowFrame,
}

impl AssetSetup {
    /// Setup for `info` under the given options.
    #[must_use]
    pub fn plan(
        info: &AssetInfo,
        asset: &AssetOptions,
        lighting: &LightingOptions,
        framing: Framing,
    ) -> Self {
        let play_clip =
            (asset.autoplay_first_clip && info.clip_count > 0).then_some(0);
        let select_variant = if asset.select_first_variant {
            info.variants.first().cloned()
        } else {
            None
        };
        Self {
            play_clip,
            select_variant,
            shadows: lighting.cast_shadows,
            framing,
            shadow_frame: ShadowFrame::follow(&framing),
        }
    }
}

/// Static scene description handed to the host before the first frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSetup {
    /// Model path for the host loader.
    pub model_path: String,
    /// Decoder location for compressed meshes.
    pub decoder_path: String,
    /// Lights to add.
    pub lighting: LightingOptions,
    /// Device pixel ratio cap.
    pub pixel_ratio_cap: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::framing::frame_bounds;
    use crate::camera::{Camera, FramingParams};

    fn framing() -> Framing {
        frame_bounds(
            &Camera::default(),
            &Bounds::default(),
            Vec3::Z,
            &FramingParams::default(),
        )
    }

    #[test]
    fn plan_picks_first_clip_and_variant() {
        let info = AssetInfo {
            clip_count: 3,
            variants: vec!["graphite".into(), "silver".into()],
            ..AssetInfo::new(Bounds::default())
        };
        let setup = AssetSetup::plan(
            &info,
            &AssetOptions::default(),
            &LightingOptions::default(),
            framing(),
        );
        assert_eq!(setup.play_clip, Some(0));
        assert_eq!(setup.select_variant.as_deref(), Some("graphite"));
        assert!(setup.shadows);
    }

    #[test]
    fn plan_without_clips_or_variants() {
        let setup = AssetSetup::plan(
            &AssetInfo::new(Bounds::default()),
            &AssetOptions::default(),
            &LightingOptions::default(),
            framing(),
        );
        assert_eq!(setup.play_clip, None);
        assert_eq!(setup.select_variant, None);
    }

    #[test]
    fn plan_respects_opt_outs() {
        let info = AssetInfo {
            clip_count: 1,
            variants: vec!["a".into()],
            ..AssetInfo::new(Bounds::default())
        };
        let asset = AssetOptions {
            autoplay_first_clip: false,
            select_first_variant: false,
            ..AssetOptions::default()
        };
        let setup = AssetSetup::plan(
            &info,
            &asset,
            &LightingOptions::default(),
            framing(),
        );
        assert_eq!(setup.play_clip, None);
        assert_eq!(setup.select_variant, None);
    }

    #[test]
    fn info_deserializes_with_defaults() {
        let json = r#"{"bounds":{"min":[-1,-1,-1],"max":[1,1,1]}}"#;
        let info: AssetInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.forward, Vec3::Z);
        assert_eq!(info.clip_count, 0);
        assert!(info.variants.is_empty());
    }
}
