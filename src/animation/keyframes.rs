//! Keyframe tables and piecewise interpolation between them.
//!
//! A table holds one target record per scroll phase. Sampling takes a
//! [`Segment`] (active index + raw fraction), eases the fraction and
//! interpolates the bracketing pair field by field.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::error::StageError;
use crate::scroll::Segment;
use crate::util::easing::EasingFunction;
use crate::util::{clamp01, lerp};

/// Field-wise interpolation between two keyframe records.
pub trait Lerp: Clone {
    /// Value at fraction `t` from `self` toward `other`.
    #[must_use]
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        lerp(*self, *other, t)
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vec3::lerp(*self, *other, t)
    }
}

/// A non-numeric keyframe field. It does not blend: the later keyframe's
/// value is taken for the whole segment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stepped<T>(pub T);

impl<T: Clone> Lerp for Stepped<T> {
    #[inline]
    fn lerp(&self, other: &Self, _t: f32) -> Self {
        other.clone()
    }
}

/// Target values for every animated channel at one keyframe.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    /// Canvas horizontal offset, in viewport-width units.
    pub canvas_x_vw: f32,
    /// Model rotation about Y, in radians.
    pub rot_y: f32,
    /// Model X offset in world units.
    pub x: f32,
    /// Model Y offset in world units.
    pub y: f32,
}

impl Lerp for Pose {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            canvas_x_vw: lerp(self.canvas_x_vw, other.canvas_x_vw, t),
            rot_y: lerp(self.rot_y, other.rot_y, t),
            x: lerp(self.x, other.x, t),
            y: lerp(self.y, other.y, t),
        }
    }
}

/// Ordered, immutable, non-empty sequence of keyframes.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeTable<K> {
    frames: Vec<K>,
}

impl<K: Lerp> KeyframeTable<K> {
    /// Build a table. Fails on an empty sequence.
    pub fn new(frames: Vec<K>) -> Result<Self, StageError> {
        if frames.is_empty() {
            return Err(StageError::InvalidOptions(
                "keyframe table needs at least one entry".into(),
            ));
        }
        Ok(Self { frames })
    }

    /// Number of keyframes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; tables are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The first keyframe, used to seed spring states.
    #[must_use]
    pub fn first(&self) -> &K {
        &self.frames[0]
    }

    /// Keyframe at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&K> {
        self.frames.get(index)
    }

    /// All keyframes in order.
    #[must_use]
    pub fn frames(&self) -> &[K] {
        &self.frames
    }

    /// Interpolated record for `segment`.
    ///
    /// The bracketing pair is `(i, i + 1)` with `i` clamped to
    /// `len - 2`; the fraction is clamped to [0, 1] and eased first.
    /// A single-entry table always yields that entry.
    #[must_use]
    pub fn sample(&self, segment: Segment, easing: EasingFunction) -> K {
        if self.frames.len() <= 1 {
            return self.first().clone();
        }
        let i0 = segment.index.min(self.frames.len() - 2);
        let t = easing.evaluate(clamp01(segment.t));
        self.frames[i0].lerp(&self.frames[i0 + 1], t)
    }
}

impl KeyframeTable<Pose> {
    /// Hand-authored table for a three-section page: the canvas slides
    /// left and back while the model makes one full turn.
    #[must_use]
    pub fn three_section() -> Self {
        Self {
            frames: vec![
                Pose {
                    canvas_x_vw: 45.0,
                    rot_y: 0.0,
                    x: 0.0,
                    y: 0.0,
                },
                Pose {
                    canvas_x_vw: 15.0,
                    rot_y: PI,
                    x: -0.10,
                    y: 0.0,
                },
                Pose {
                    canvas_x_vw: 45.0,
                    rot_y: TAU,
                    x: 0.20,
                    y: -0.25,
                },
            ],
        }
    }

    /// Generated table with one keyframe per section.
    ///
    /// Rotation sweeps `turns` full turns evenly; the canvas dips toward
    /// 15 vw mid-page on a sine arc and rests at 45 vw at both ends; X
    /// ramps from -0.1 to 0.1 and the last keyframe drops Y to -0.25,
    /// even when it is also the first.
    #[must_use]
    pub fn sweep(sections: usize, turns: f32) -> Self {
        let n = sections.max(1);
        let last = n - 1;
        let frames = (0..n)
            .map(|i| {
                let t = if n > 1 { i as f32 / last as f32 } else { 0.0 };
                let canvas_x_vw = if i == 0 || i == last {
                    45.0
                } else {
                    lerp(45.0, 15.0, (PI * t).sin())
                };
                Pose {
                    canvas_x_vw,
                    rot_y: t * TAU * turns,
                    x: lerp(0.0, 0.2, i as f32 / last.max(1) as f32) - 0.1,
                    y: if i == last { -0.25 } else { 0.0 },
                }
            })
            .collect();
        Self { frames }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(index: usize, t: f32) -> Segment {
        Segment { index, t }
    }

    #[test]
    fn empty_table_is_rejected() {
        assert!(KeyframeTable::<f32>::new(Vec::new()).is_err());
    }

    #[test]
    fn single_entry_is_held() {
        let table = KeyframeTable::new(vec![3.0_f32]).unwrap();
        for t in [0.0, 0.3, 1.0] {
            assert_eq!(table.sample(seg(4, t), EasingFunction::CubicOut), 3.0);
        }
    }

    #[test]
    fn endpoints_reproduce_keyframes() {
        let table = KeyframeTable::three_section();
        let easing = EasingFunction::CubicOut;
        for i in 0..table.len() - 1 {
            assert_eq!(table.sample(seg(i, 0.0), easing), table.frames()[i]);
            assert_eq!(
                table.sample(seg(i, 1.0), easing),
                table.frames()[i + 1]
            );
        }
    }

    #[test]
    fn index_past_end_clamps_to_last_pair() {
        let table = KeyframeTable::new(vec![0.0_f32, 10.0, 20.0]).unwrap();
        let linear = EasingFunction::Linear;
        assert_eq!(table.sample(seg(7, 0.5), linear), 15.0);
        assert_eq!(table.sample(seg(7, 1.0), linear), 20.0);
    }

    #[test]
    fn fraction_is_eased_and_clamped() {
        let table = KeyframeTable::new(vec![0.0_f32, 8.0]).unwrap();
        let cubic = EasingFunction::CubicOut;
        assert!((table.sample(seg(0, 0.5), cubic) - 7.0).abs() < 1e-5);
        assert_eq!(table.sample(seg(0, -1.0), cubic), 0.0);
        assert_eq!(table.sample(seg(0, 2.0), cubic), 8.0);
    }

    #[test]
    fn stepped_fields_take_later_value() {
        #[derive(Debug, Clone, PartialEq)]
        struct Labeled {
            value: f32,
            label: Stepped<&'static str>,
        }
        impl Lerp for Labeled {
            fn lerp(&self, other: &Self, t: f32) -> Self {
                Self {
                    value: lerp(self.value, other.value, t),
                    label: self.label.lerp(&other.label, t),
                }
            }
        }

        let table = KeyframeTable::new(vec![
            Labeled {
                value: 0.0,
                label: Stepped("intro"),
            },
            Labeled {
                value: 1.0,
                label: Stepped("detail"),
            },
        ])
        .unwrap();
        for t in [0.0, 0.25, 1.0] {
            let s = table.sample(seg(0, t), EasingFunction::Linear);
            assert_eq!(s.label, Stepped("detail"));
            assert_eq!(s.value, t);
        }
    }

    #[test]
    fn sweep_shape() {
        let table = KeyframeTable::sweep(5, 2.0);
        assert_eq!(table.len(), 5);
        let f = table.frames();
        assert_eq!(f[0].canvas_x_vw, 45.0);
        assert_eq!(f[4].canvas_x_vw, 45.0);
        // Middle keyframe sits at the bottom of the sine arc.
        assert!((f[2].canvas_x_vw - 15.0).abs() < 1e-4);
        assert!((f[4].rot_y - 2.0 * TAU).abs() < 1e-4);
        assert!((f[0].x + 0.1).abs() < 1e-6);
        assert!((f[4].x - 0.1).abs() < 1e-6);
        assert_eq!(f[4].y, -0.25);
        assert!(f[..4].iter().all(|p| p.y == 0.0));
    }

    #[test]
    fn sweep_of_one_is_final_pose() {
        let table = KeyframeTable::sweep(0, 2.0);
        assert_eq!(table.len(), 1);
        assert_eq!(table.first().rot_y, 0.0);
        assert_eq!(table.first().canvas_x_vw, 45.0);
        assert_eq!(table.first().y, -0.25);
    }
}
