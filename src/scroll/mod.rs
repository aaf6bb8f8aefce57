//! Scroll position → progress mapping.
//!
//! [`layout`] snapshots the page sections' pixel geometry; [`track`]
//! turns that snapshot into breakpoints paired with keyframes and maps a
//! scroll offset onto the active phase.

pub mod layout;
pub mod track;

pub use layout::{SectionBounds, SectionLayout};
pub use track::{ScrollTrack, TwoPhaseProgress};

/// Smallest span, in pixels, any progress computation divides by.
/// Zero-height sections and coincident breakpoints are floored to this.
pub const MIN_SPAN: f32 = 1.0;

/// Active segment and raw (un-eased) fraction through it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Segment {
    /// Segment index (section or phase, depending on the producer).
    pub index: usize,
    /// Fraction through the segment, in [0, 1].
    pub t: f32,
}
