//! The per-page animation session and its host-facing vocabulary.
//!
//! [`Session`] owns every piece of mutable state the effect needs
//! (springs, tilt, keyframes, section layout, camera rig, model load
//! state). Hosts drive it with [`FrameInput`]s and apply the returned
//! [`FrameCommands`]; nothing here touches a renderer or the DOM.

pub mod asset;
pub mod frame;
mod session;

pub use asset::{AssetInfo, AssetSetup, ModelState, SceneSetup};
pub use frame::{CanvasTransform, FrameCommands, FrameInput, ModelTransform};
pub use session::Session;
