use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Asset", inline)]
#[serde(default)]
/// The model file and what to do with it once loaded.
pub struct AssetOptions {
    /// Model path or URL, resolved by the host loader.
    #[schemars(skip)]
    pub path: String,
    /// Location of the mesh-compression decoder used by the host loader.
    #[schemars(skip)]
    pub decoder_path: String,
    /// Play the first embedded animation clip.
    #[schemars(title = "Autoplay Clip")]
    pub autoplay_first_clip: bool,
    /// Select the first embedded material variant.
    #[schemars(title = "Select First Variant")]
    pub select_first_variant: bool,
}

impl Default for AssetOptions {
    fn default() -> Self {
        Self {
            path: "model.glb".into(),
            decoder_path: "https://www.gstatic.com/draco/v1/decoders/".into(),
            autoplay_first_clip: true,
            select_first_variant: true,
        }
    }
}
