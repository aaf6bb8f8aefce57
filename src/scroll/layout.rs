//! Section geometry snapshot.
//!
//! Re-measured whenever the page layout changes (resize, orientation
//! change); read every frame.

use serde::{Deserialize, Serialize};

use super::{Segment, MIN_SPAN};
use crate::error::StageError;
use crate::util::clamp01;

/// Pixel geometry of one page section.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SectionBounds {
    /// Offset of the section's top edge from the top of the page.
    pub top: f32,
    /// Section height.
    pub height: f32,
}

impl SectionBounds {
    /// Section starting at `top` with the given height.
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }
}

/// Start offset and cumulative end offsets of vertically stacked
/// sections.
///
/// `ends` are measured from `start` and accumulate section heights, as
/// the per-section lookup expects. `bottoms` keep each section's own
/// page offset (`top + height`), so gaps between sections are honored
/// wherever absolute offsets are needed.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLayout {
    start: f32,
    ends: Vec<f32>,
    bottoms: Vec<f32>,
}

impl SectionLayout {
    /// Snapshot the given sections (in page order). Negative or
    /// non-finite heights count as zero.
    pub fn measure(sections: &[SectionBounds]) -> Result<Self, StageError> {
        let first = sections.first().ok_or(StageError::NoSections)?;
        let height = |s: &SectionBounds| {
            if s.height.is_finite() {
                s.height.max(0.0)
            } else {
                0.0
            }
        };
        let mut cumulative = 0.0;
        let ends: Vec<f32> = sections
            .iter()
            .map(|s| {
                cumulative += height(s);
                cumulative
            })
            .collect();
        let bottoms = sections
            .iter()
            .zip(&ends)
            .map(|(s, end)| {
                if s.top.is_finite() {
                    s.top + height(s)
                } else {
                    first.top + end
                }
            })
            .collect();
        let layout = Self {
            start: first.top,
            ends,
            bottoms,
        };
        log::debug!(
            "measured {} sections: start {}, total {}",
            layout.len(),
            layout.start,
            layout.total()
        );
        Ok(layout)
    }

    /// Page offset of the first section's top.
    #[must_use]
    pub fn start(&self) -> f32 {
        self.start
    }

    /// Cumulative end offset of each section, relative to [`start`](Self::start).
    #[must_use]
    pub fn ends(&self) -> &[f32] {
        &self.ends
    }

    /// Combined height of all sections.
    #[must_use]
    pub fn total(&self) -> f32 {
        self.ends.last().copied().unwrap_or(0.0)
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    /// Whether the snapshot has no sections (never true for a measured
    /// layout).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// Absolute page offset of the bottom of section `index`
    /// (`top + height`), clamped to the last section.
    #[must_use]
    pub fn section_end(&self, index: usize) -> f32 {
        let i = index.min(self.bottoms.len().saturating_sub(1));
        self.bottoms.get(i).copied().unwrap_or(self.start)
    }

    /// Linear progress through all sections combined.
    #[must_use]
    pub fn global_progress(&self, scroll_y: f32) -> f32 {
        clamp01((scroll_y - self.start) / self.total().max(MIN_SPAN))
    }

    /// Section containing `scroll_y` and the fraction through it.
    ///
    /// The first section whose cumulative end is at or past the scroll
    /// position wins, so a position exactly on a boundary reports the
    /// earlier section at `t = 1`. Before the first section the result
    /// is `(0, 0)`; past the last it is `(len - 1, 1)`.
    #[must_use]
    pub fn segment_at(&self, scroll_y: f32) -> Segment {
        let rel = (scroll_y - self.start).max(0.0);
        let mut prev_end = 0.0;
        for (index, &end) in self.ends.iter().enumerate() {
            if rel <= end {
                let span = (end - prev_end).max(MIN_SPAN);
                return Segment {
                    index,
                    t: clamp01((rel - prev_end) / span),
                };
            }
            prev_end = end;
        }
        Segment {
            index: self.ends.len().saturating_sub(1),
            t: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_stacked() -> SectionLayout {
        SectionLayout::measure(&[
            SectionBounds::new(0.0, 800.0),
            SectionBounds::new(800.0, 800.0),
            SectionBounds::new(1600.0, 800.0),
        ])
        .unwrap()
    }

    #[test]
    fn empty_sections_are_rejected() {
        assert!(matches!(
            SectionLayout::measure(&[]),
            Err(StageError::NoSections)
        ));
    }

    #[test]
    fn cumulative_ends() {
        let layout = three_stacked();
        assert_eq!(layout.start(), 0.0);
        assert_eq!(layout.ends(), &[800.0, 1600.0, 2400.0]);
        assert_eq!(layout.total(), 2400.0);
        assert_eq!(layout.section_end(1), 1600.0);
        assert_eq!(layout.section_end(9), 2400.0);
    }

    #[test]
    fn offset_start_shifts_section_ends() {
        let layout = SectionLayout::measure(&[
            SectionBounds::new(120.0, 500.0),
            SectionBounds::new(620.0, 300.0),
        ])
        .unwrap();
        assert_eq!(layout.section_end(0), 620.0);
        assert_eq!(layout.section_end(1), 920.0);
    }

    #[test]
    fn section_end_uses_own_top_across_gaps() {
        let layout = SectionLayout::measure(&[
            SectionBounds::new(0.0, 800.0),
            SectionBounds::new(900.0, 800.0),
            SectionBounds::new(1800.0, 800.0),
        ])
        .unwrap();
        assert_eq!(layout.section_end(1), 1700.0);
        assert_eq!(layout.section_end(2), 2600.0);
        // The per-section lookup still works on summed heights.
        assert_eq!(layout.ends(), &[800.0, 1600.0, 2400.0]);
        assert_eq!(layout.total(), 2400.0);
    }

    #[test]
    fn segment_lookup() {
        let layout = three_stacked();
        assert_eq!(layout.segment_at(-50.0), Segment { index: 0, t: 0.0 });
        assert_eq!(layout.segment_at(400.0), Segment { index: 0, t: 0.5 });
        assert_eq!(layout.segment_at(800.0), Segment { index: 0, t: 1.0 });
        assert_eq!(layout.segment_at(1200.0), Segment { index: 1, t: 0.5 });
        assert_eq!(layout.segment_at(2000.0), Segment { index: 2, t: 0.5 });
        assert_eq!(layout.segment_at(9000.0), Segment { index: 2, t: 1.0 });
    }

    #[test]
    fn zero_height_section_does_not_divide_by_zero() {
        let layout = SectionLayout::measure(&[
            SectionBounds::new(0.0, 500.0),
            SectionBounds::new(500.0, 0.0),
            SectionBounds::new(500.0, 500.0),
        ])
        .unwrap();
        let seg = layout.segment_at(500.0);
        assert_eq!(seg.index, 0);
        assert!(seg.t.is_finite());
        let single = SectionLayout::measure(&[SectionBounds::new(0.0, 0.0)])
            .unwrap();
        assert!(single.global_progress(10.0).is_finite());
        assert!(single.segment_at(0.0).t.is_finite());
    }

    #[test]
    fn global_progress_is_clamped_linear() {
        let layout = three_stacked();
        assert_eq!(layout.global_progress(-10.0), 0.0);
        assert_eq!(layout.global_progress(600.0), 0.25);
        assert_eq!(layout.global_progress(5000.0), 1.0);
    }
}
