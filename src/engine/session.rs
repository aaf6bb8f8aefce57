use glam::Vec3;

use super::asset::{AssetInfo, AssetSetup, ModelState, SceneSetup};
use super::frame::{CanvasTransform, FrameCommands, FrameInput, ModelTransform};
use crate::animation::breathing::Breathing;
use crate::animation::keyframes::{KeyframeTable, Pose};
use crate::animation::spring::SpringChannel;
use crate::animation::tilt::TiltFilter;
use crate::camera::{CameraRig, Viewport};
use crate::error::StageError;
use crate::options::{BreathingFade, KeyframeMode, Options};
use crate::scroll::{ScrollTrack, SectionBounds, SectionLayout, TwoPhaseProgress};
use crate::util::frame_timing::FrameClock;

/// Keyframe table for `mode` over a page of `sections` sections.
fn build_table(mode: KeyframeMode, sections: usize) -> KeyframeTable<Pose> {
    match mode {
        KeyframeMode::ThreeSection => KeyframeTable::three_section(),
        KeyframeMode::Sweep { turns } => KeyframeTable::sweep(sections, turns),
    }
}

/// The animation session: every piece of per-page state the effect
/// keeps between frames.
///
/// Constructed once the page sections are measured. The host feeds it
/// layout changes, the asset load result and one [`FrameInput`] per
/// display refresh; each [`tick`](Self::tick) returns the
/// [`FrameCommands`] to apply.
#[derive(Debug, Clone)]
pub struct Session {
    options: Options,
    layout: SectionLayout,
    table: KeyframeTable<Pose>,
    track: ScrollTrack,
    canvas_x: SpringChannel,
    rotation: SpringChannel,
    offset_x: SpringChannel,
    offset_y: SpringChannel,
    tilt: TiltFilter,
    breathing: Breathing,
    rig: CameraRig,
    model: ModelState,
    clock: FrameClock,
}

impl Session {
    /// Create a session for the measured `sections`.
    ///
    /// Options are validated first. Springs start at rest on the first
    /// keyframe so the opening frame does not animate in.
    pub fn new(
        options: Options,
        sections: &[SectionBounds],
    ) -> Result<Self, StageError> {
        options.validate()?;
        let layout = SectionLayout::measure(sections)?;
        let table = build_table(options.keyframes.mode, layout.len());
        let track = ScrollTrack::from_layout(&layout, table.len());

        let anim = &options.animation;
        let first = *table.first();
        let canvas = &options.canvas;
        let session = Self {
            canvas_x: SpringChannel::new(
                first.canvas_x_vw,
                anim.canvas_stiffness,
            ),
            rotation: SpringChannel::new(first.rot_y, anim.rotation_stiffness),
            offset_x: SpringChannel::new(first.x, anim.offset_x_stiffness),
            offset_y: SpringChannel::new(first.y, anim.offset_y_stiffness),
            tilt: TiltFilter::new(
                canvas.tilt_gain,
                canvas.tilt_max_deg,
                canvas.tilt_retention,
            ),
            breathing: Breathing {
                amplitude: options.breathing.amplitude,
                frequency: options.breathing.frequency,
            },
            rig: CameraRig::new(&options.camera),
            model: ModelState::Loading,
            clock: FrameClock::new(anim.max_dt),
            layout,
            table,
            track,
            options,
        };
        log::info!(
            "session ready: {} sections, {} keyframes, track {:?}",
            session.layout.len(),
            session.table.len(),
            session.track.breakpoints()
        );
        Ok(session)
    }

    // ── Host events ──────────────────────────────────────────────────

    /// Re-measure the page sections after a layout change.
    ///
    /// On failure the previous layout stays in effect. A sweep table is
    /// regenerated when the section count changes; springs keep their
    /// state so the model glides to its new target.
    pub fn set_sections(
        &mut self,
        sections: &[SectionBounds],
    ) -> Result<(), StageError> {
        let layout = match SectionLayout::measure(sections) {
            Ok(layout) => layout,
            Err(e) => {
                log::warn!("keeping previous section layout: {e}");
                return Err(e);
            }
        };
        if let KeyframeMode::Sweep { turns } = self.options.keyframes.mode {
            if layout.len() != self.layout.len() {
                self.table = KeyframeTable::sweep(layout.len(), turns);
            }
        }
        self.track = ScrollTrack::from_layout(&layout, self.table.len());
        self.layout = layout;
        log::debug!("section breakpoints: {:?}", self.track.breakpoints());
        Ok(())
    }

    /// Adopt a new canvas size. Returns the drawing-buffer viewport the
    /// host should apply to its renderer.
    pub fn resize(
        &mut self,
        css_width: f32,
        css_height: f32,
        device_pixel_ratio: f32,
    ) -> Viewport {
        let viewport = Viewport::from_css(
            css_width,
            css_height,
            device_pixel_ratio,
            self.options.canvas.pixel_ratio_cap,
        );
        self.rig.resize(viewport);
        log::debug!(
            "viewport {}x{} @{} (aspect {:.3})",
            viewport.width,
            viewport.height,
            viewport.pixel_ratio,
            viewport.aspect()
        );
        viewport
    }

    /// Deliver the outcome of the model load.
    ///
    /// On success the model is framed at its current transform and the
    /// one-time host setup is returned. On failure the reason is logged
    /// and the session keeps rendering without a model; there is no
    /// retry.
    pub fn on_asset_loaded(
        &mut self,
        result: Result<AssetInfo, StageError>,
    ) -> Option<AssetSetup> {
        match result {
            Ok(info) => {
                let m = self.model_transform(0.0, 0.0).matrix();
                let world = info.bounds.transformed(&m);
                let forward = m.transform_vector3(info.forward);
                let framing = self.rig.frame(world, forward);
                log::info!(
                    "model loaded: {} clips, {} variants, radius {:.3}, distance {:.3}",
                    info.clip_count,
                    info.variants.len(),
                    framing.radius,
                    framing.distance
                );
                let setup = AssetSetup::plan(
                    &info,
                    &self.options.asset,
                    &self.options.lighting,
                    framing,
                );
                self.model = ModelState::Ready(info);
                Some(setup)
            }
            Err(e) => {
                log::error!("{e}");
                self.model = ModelState::Failed(e.to_string());
                None
            }
        }
    }

    // ── Per frame ────────────────────────────────────────────────────

    /// Advance one frame.
    pub fn tick(&mut self, input: FrameInput) -> FrameCommands {
        let dt = self.clock.clamp_dt(input.dt);

        let segment = self.track.segment_at(input.scroll_y);
        let target = self.table.sample(segment, self.options.animation.easing);

        self.canvas_x.update(target.canvas_x_vw, dt);
        self.rotation.update(target.rot_y, dt);
        self.offset_x.update(target.x, dt);
        self.offset_y.update(target.y, dt);

        let tilt = self.tilt.update(self.canvas_x.velocity(), dt);
        let canvas = CanvasTransform {
            translate_x_vw: self.canvas_x.value(),
            rotate_z_deg: tilt,
        };

        let (model, mixer_dt) = match &self.model {
            ModelState::Ready(info) => {
                let fade = self.breathing_fade(input.scroll_y);
                let transform = self.model_transform(input.time_ms, fade);
                let center = info.bounds.transformed(&transform.matrix()).center();
                let mixer_dt = (info.clip_count > 0
                    && self.options.asset.autoplay_first_clip)
                    .then_some(dt);
                self.rig.look_at(center);
                (Some(transform), mixer_dt)
            }
            ModelState::Loading | ModelState::Failed(_) => (None, None),
        };

        FrameCommands {
            mixer_dt,
            canvas,
            model,
            camera: *self.rig.camera(),
            render: true,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Two-phase progress of the first three sections at `scroll_y`, or
    /// `None` for pages with fewer than three sections.
    #[must_use]
    pub fn two_phase_progress(&self, scroll_y: f32) -> Option<TwoPhaseProgress> {
        ScrollTrack::two_phase_progress(
            &self.layout,
            scroll_y,
            self.options.animation.easing,
        )
    }

    /// Static scene description for the host.
    #[must_use]
    pub fn scene_setup(&self) -> SceneSetup {
        SceneSetup {
            model_path: self.options.asset.path.clone(),
            decoder_path: self.options.asset.decoder_path.clone(),
            lighting: self.options.lighting.clone(),
            pixel_ratio_cap: self.options.canvas.pixel_ratio_cap,
        }
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Current section layout.
    #[must_use]
    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }

    /// Current breakpoint track.
    #[must_use]
    pub fn track(&self) -> &ScrollTrack {
        &self.track
    }

    /// Keyframe table in use.
    #[must_use]
    pub fn keyframes(&self) -> &KeyframeTable<Pose> {
        &self.table
    }

    /// Model load state.
    #[must_use]
    pub fn model_state(&self) -> &ModelState {
        &self.model
    }

    /// Camera rig.
    #[must_use]
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    /// Current smoothed pose.
    #[must_use]
    pub fn pose(&self) -> Pose {
        Pose {
            canvas_x_vw: self.canvas_x.value(),
            rot_y: self.rotation.value(),
            x: self.offset_x.value(),
            y: self.offset_y.value(),
        }
    }

    fn breathing_fade(&self, scroll_y: f32) -> f32 {
        match self.options.breathing.fade {
            BreathingFade::FinalPhase => self
                .track
                .final_phase_fraction(scroll_y, self.options.animation.easing),
            BreathingFade::WholeTrack => self.layout.global_progress(scroll_y),
        }
    }

    fn model_transform(&self, time_ms: f64, fade: f32) -> ModelTransform {
        ModelTransform {
            position: Vec3::new(self.offset_x.value(), self.offset_y.value(), 0.0),
            rotation_x: self.breathing.angle(time_ms, fade),
            rotation_y: self.rotation.value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Bounds;
    use crate::util::easing::EasingFunction;

    const DT: f32 = 1.0 / 60.0;

    fn three_sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new(0.0, 800.0),
            SectionBounds::new(800.0, 800.0),
            SectionBounds::new(1600.0, 800.0),
        ]
    }

    fn session() -> Session {
        Session::new(Options::default(), &three_sections()).unwrap()
    }

    fn frame(time_ms: f64, scroll_y: f32) -> FrameInput {
        FrameInput {
            time_ms,
            dt: DT,
            scroll_y,
        }
    }

    fn run(s: &mut Session, scroll_y: f32, frames: usize) -> FrameCommands {
        let mut last = s.tick(frame(0.0, scroll_y));
        for i in 1..frames {
            last = s.tick(frame(i as f64 * 16.0, scroll_y));
        }
        last
    }

    fn cube() -> AssetInfo {
        AssetInfo {
            clip_count: 1,
            variants: vec!["default".into()],
            ..AssetInfo::new(Bounds::default())
        }
    }

    #[test]
    fn rejects_empty_page() {
        let err = Session::new(Options::default(), &[]).unwrap_err();
        assert!(matches!(err, StageError::NoSections));
    }

    #[test]
    fn rejects_invalid_options() {
        let mut options = Options::default();
        options.animation.rotation_stiffness = -1.0;
        assert!(Session::new(options, &three_sections()).is_err());

        let mut options = Options::default();
        options.canvas.tilt_max_deg = -1.0;
        let err = Session::new(options, &three_sections()).unwrap_err();
        assert!(matches!(err, StageError::InvalidOptions(_)));
    }

    #[test]
    fn starts_at_rest_on_first_keyframe() {
        let mut s = session();
        let cmds = s.tick(frame(0.0, 0.0));
        assert_eq!(cmds.canvas.translate_x_vw, 45.0);
        assert_eq!(cmds.canvas.rotate_z_deg, 0.0);
        assert!(cmds.render);
    }

    #[test]
    fn frames_before_load_skip_model() {
        let mut s = session();
        let cmds = s.tick(frame(0.0, 400.0));
        assert!(cmds.model.is_none());
        assert!(cmds.mixer_dt.is_none());
    }

    #[test]
    fn failed_load_keeps_rendering_canvas() {
        let mut s = session();
        let setup =
            s.on_asset_loaded(Err(StageError::AssetLoad("404".into())));
        assert!(setup.is_none());
        assert!(matches!(s.model_state(), ModelState::Failed(r) if r.contains("404")));

        let first = s.tick(frame(0.0, 1200.0));
        let later = run(&mut s, 1200.0, 30);
        assert!(first.model.is_none() && later.model.is_none());
        assert!(later.canvas.translate_x_vw < first.canvas.translate_x_vw);
        assert!(later.render);
    }

    #[test]
    fn loaded_model_gets_transform_and_mixer() {
        let mut s = session();
        let setup = s.on_asset_loaded(Ok(cube())).unwrap();
        assert_eq!(setup.play_clip, Some(0));
        assert!(s.model_state().is_ready());

        let cmds = s.tick(frame(0.0, 0.0));
        assert_eq!(cmds.mixer_dt, Some(DT));
        let model = cmds.model.unwrap();
        assert_eq!(model.position, Vec3::ZERO);
        assert_eq!(cmds.camera.target, Vec3::ZERO);
    }

    #[test]
    fn mixer_step_is_clamped() {
        let mut s = session();
        let _ = s.on_asset_loaded(Ok(cube()));
        let cmds = s.tick(FrameInput {
            time_ms: 0.0,
            dt: 2.0,
            scroll_y: 0.0,
        });
        assert_eq!(cmds.mixer_dt, Some(0.05));
        let cmds = s.tick(FrameInput {
            time_ms: 0.0,
            dt: f32::NAN,
            scroll_y: 0.0,
        });
        assert_eq!(cmds.mixer_dt, Some(0.0));
    }

    #[test]
    fn springs_converge_to_section_targets() {
        let mut s = session();
        let _ = s.on_asset_loaded(Ok(cube()));

        // Top of section 3 is the end of phase A: the middle keyframe.
        let _ = run(&mut s, 1600.0, 600);
        let pose = s.pose();
        assert!((pose.canvas_x_vw - 15.0).abs() < 1e-2);
        assert!((pose.rot_y - std::f32::consts::PI).abs() < 1e-2);
        assert!((pose.x + 0.10).abs() < 1e-3);

        // Past the end: the last keyframe.
        let cmds = run(&mut s, 5000.0, 600);
        let model = cmds.model.unwrap();
        assert!((model.position - Vec3::new(0.2, -0.25, 0.0)).length() < 1e-3);
        assert!((model.rotation_y - std::f32::consts::TAU).abs() < 1e-2);
        // Breathing has fully faded at the end of the page.
        assert!(model.rotation_x.abs() < 1e-6);
        assert!((cmds.canvas.translate_x_vw - 45.0).abs() < 1e-2);
    }

    #[test]
    fn camera_follows_model_center() {
        let mut s = session();
        let _ = s.on_asset_loaded(Ok(cube()));
        let cmds = run(&mut s, 5000.0, 600);
        let target = cmds.camera.target;
        let center = Bounds::default()
            .transformed(&cmds.model.unwrap().matrix())
            .center();
        assert!((target - center).length() < 1e-6);
    }

    #[test]
    fn fast_slide_tilts_canvas_within_limit() {
        let mut s = session();
        let mut max_tilt: f32 = 0.0;
        for i in 0..120 {
            let cmds = s.tick(frame(i as f64 * 16.0, 1600.0));
            max_tilt = max_tilt.max(cmds.canvas.rotate_z_deg.abs());
        }
        assert!(max_tilt > 0.0);
        assert!(max_tilt <= 4.0);
    }

    #[test]
    fn two_phase_progress_matches_scenario() {
        let s = session();
        let ease = EasingFunction::CubicOut;
        let p = s.two_phase_progress(400.0).unwrap();
        assert!((p.a - ease.evaluate(0.25)).abs() < 1e-6);
        assert_eq!(p.b, 0.0);
        let p = s.two_phase_progress(2000.0).unwrap();
        assert_eq!(p.a, 1.0);
        assert!((p.b - ease.evaluate(0.5)).abs() < 1e-6);
    }

    #[test]
    fn resize_reframes_loaded_model() {
        let mut s = session();
        let _ = s.resize(1600.0, 900.0, 1.0);
        let _ = s.on_asset_loaded(Ok(cube()));
        let wide = s.rig().framing().unwrap().distance;
        let viewport = s.resize(390.0, 844.0, 3.0);
        assert_eq!(viewport.pixel_ratio, 2.0);
        let narrow = s.rig().framing().unwrap().distance;
        assert!(narrow > wide);
    }

    #[test]
    fn sweep_table_follows_section_count() {
        let mut options = Options::default();
        options.keyframes.mode = KeyframeMode::Sweep { turns: 2.0 };
        let mut s = Session::new(options, &three_sections()).unwrap();
        assert_eq!(s.keyframes().len(), 3);

        let mut five = three_sections();
        five.push(SectionBounds::new(2400.0, 600.0));
        five.push(SectionBounds::new(3000.0, 600.0));
        s.set_sections(&five).unwrap();
        assert_eq!(s.keyframes().len(), 5);
        assert_eq!(s.track().breakpoints().len(), 5);
    }

    #[test]
    fn empty_remeasure_keeps_layout() {
        let mut s = session();
        assert!(s.set_sections(&[]).is_err());
        assert_eq!(s.layout().len(), 3);
    }

    #[test]
    fn scene_setup_reports_asset_paths() {
        let setup = session().scene_setup();
        assert_eq!(setup.model_path, "model.glb");
        assert_eq!(setup.pixel_ratio_cap, 2.0);
    }
}
