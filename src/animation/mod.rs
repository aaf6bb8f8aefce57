//! Scroll-driven animation primitives.
//!
//! Keyframe tables give a target per scroll phase, springs chase those
//! targets frame by frame, and the tilt and breathing filters add the
//! secondary motion on top.

pub mod breathing;
pub mod keyframes;
pub mod spring;
pub mod tilt;
