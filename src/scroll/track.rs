//! Breakpoint track pairing scroll offsets with keyframes.
//!
//! Keyframe 0 sits at the top of the first section; keyframe `i >= 1`
//! sits at the bottom of section `i`, taken from its own offset so gaps
//! between sections stay inside the phase that crosses them. Between two breakpoints the scroll
//! position is mapped linearly to a fraction of that phase. With three
//! sections this is exactly the classic two-phase blend: phase A runs
//! from the top of section 1 to the bottom of section 2, phase B runs
//! on to the bottom of section 3.

use super::{Segment, SectionLayout, MIN_SPAN};
use crate::util::clamp01;
use crate::util::easing::EasingFunction;

/// Eased progress through the two phases of a three-keyframe track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TwoPhaseProgress {
    /// Eased fraction of phase A (keyframe 0 → 1).
    pub a: f32,
    /// Eased fraction of phase B (keyframe 1 → 2).
    pub b: f32,
}

/// Ordered scroll offsets, one per keyframe.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTrack {
    breakpoints: Vec<f32>,
}

impl ScrollTrack {
    /// Track with explicit breakpoints. Out-of-order offsets are raised
    /// to their predecessor so the track stays monotonic.
    #[must_use]
    pub fn from_breakpoints(mut breakpoints: Vec<f32>) -> Self {
        if breakpoints.is_empty() {
            breakpoints.push(0.0);
        }
        for i in 1..breakpoints.len() {
            if breakpoints[i] < breakpoints[i - 1] {
                breakpoints[i] = breakpoints[i - 1];
            }
        }
        Self { breakpoints }
    }

    /// Track for a table of `keyframes` entries over `layout`.
    ///
    /// Keyframes beyond the last section share its end offset and form
    /// zero-length phases.
    #[must_use]
    pub fn from_layout(layout: &SectionLayout, keyframes: usize) -> Self {
        let breakpoints = (0..keyframes.max(1))
            .map(|i| {
                if i == 0 {
                    layout.start()
                } else {
                    layout.section_end(i)
                }
            })
            .collect();
        Self::from_breakpoints(breakpoints)
    }

    /// Scroll offsets of each keyframe.
    #[must_use]
    pub fn breakpoints(&self) -> &[f32] {
        &self.breakpoints
    }

    /// Number of phases (one fewer than breakpoints, at least zero).
    #[must_use]
    pub fn phase_count(&self) -> usize {
        self.breakpoints.len().saturating_sub(1)
    }

    /// Active phase and raw fraction for `scroll_y`.
    ///
    /// Before the first breakpoint the result is `(0, 0)`; at or past the
    /// last it is `(last phase, 1)`. A position exactly on an inner
    /// breakpoint starts the next phase at `t = 0`.
    #[must_use]
    pub fn segment_at(&self, scroll_y: f32) -> Segment {
        let phases = self.phase_count();
        if phases == 0 || scroll_y <= self.breakpoints[0] {
            return Segment::default();
        }
        for (index, pair) in self.breakpoints.windows(2).enumerate() {
            if scroll_y < pair[1] {
                let span = (pair[1] - pair[0]).max(MIN_SPAN);
                return Segment {
                    index,
                    t: clamp01((scroll_y - pair[0]) / span),
                };
            }
        }
        Segment {
            index: phases - 1,
            t: 1.0,
        }
    }

    /// Eased fraction of every phase at `scroll_y`. Phases already
    /// passed read 1, phases not yet reached read 0.
    #[must_use]
    pub fn phase_fractions(
        &self,
        scroll_y: f32,
        easing: EasingFunction,
    ) -> Vec<f32> {
        self.breakpoints
            .windows(2)
            .map(|pair| {
                let span = (pair[1] - pair[0]).max(MIN_SPAN);
                easing.evaluate(clamp01((scroll_y - pair[0]) / span))
            })
            .collect()
    }

    /// Eased fraction of the final phase (0 when the track has a single
    /// breakpoint).
    #[must_use]
    pub fn final_phase_fraction(
        &self,
        scroll_y: f32,
        easing: EasingFunction,
    ) -> f32 {
        self.phase_fractions(scroll_y, easing)
            .last()
            .copied()
            .unwrap_or(0.0)
    }

    /// Two-phase progress over the first three sections of `layout`:
    /// phase A from the top of section 1 to the bottom of section 2,
    /// phase B from there to the bottom of section 3. Needs at least three sections.
    #[must_use]
    pub fn two_phase_progress(
        layout: &SectionLayout,
        scroll_y: f32,
        easing: EasingFunction,
    ) -> Option<TwoPhaseProgress> {
        if layout.len() < 3 {
            return None;
        }
        let fractions =
            Self::from_layout(layout, 3).phase_fractions(scroll_y, easing);
        Some(TwoPhaseProgress {
            a: fractions[0],
            b: fractions[1],
        })
    }
}
