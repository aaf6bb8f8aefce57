//! Headless run of the scroll stage.
//!
//! Scripts a scroll sweep over a three-section page at 60 fps, delivers
//! a unit-cube model half a second in, and writes one JSON line of frame
//! commands per frame to stdout. Pass a TOML preset path to try other
//! options.

use std::io::{self, BufWriter, Write};
use std::path::Path;

use glam::Vec3;
use scroll_stage::camera::Bounds;
use scroll_stage::engine::{AssetInfo, FrameInput, Session};
use scroll_stage::error::StageError;
use scroll_stage::options::Options;
use scroll_stage::scroll::SectionBounds;

const FPS: f32 = 60.0;
const SECTION_HEIGHT: f32 = 800.0;
const SECTIONS: usize = 3;
/// Frames spent scrolling from the top to the bottom of the page.
const SWEEP_FRAMES: usize = 240;
/// Frames held at the bottom so the springs settle.
const SETTLE_FRAMES: usize = 120;
const LOAD_FRAME: usize = 30;
const VIEWPORT: (f32, f32, f32) = (1280.0, 720.0, 2.0);

fn sections() -> Vec<SectionBounds> {
    (0..SECTIONS)
        .map(|i| SectionBounds::new(i as f32 * SECTION_HEIGHT, SECTION_HEIGHT))
        .collect()
}

fn sample_model() -> AssetInfo {
    AssetInfo {
        clip_count: 1,
        variants: vec!["default".into()],
        ..AssetInfo::new(Bounds::new(Vec3::splat(-0.5), Vec3::splat(0.5)))
    }
}

fn load_options(arg: Option<&str>) -> Result<Options, StageError> {
    match arg {
        Some(path) => {
            log::info!("loading options from {path}");
            Options::load(Path::new(path))
        }
        None => Ok(Options::default()),
    }
}

fn run(options: Options) -> Result<(), StageError> {
    let mut session = Session::new(options, &sections())?;
    let (w, h, dpr) = VIEWPORT;
    let _ = session.resize(w, h, dpr);

    let page_end = SECTIONS as f32 * SECTION_HEIGHT;
    let dt = 1.0 / FPS;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for frame in 0..SWEEP_FRAMES + SETTLE_FRAMES {
        if frame == LOAD_FRAME {
            if let Some(setup) = session.on_asset_loaded(Ok(sample_model())) {
                log::info!(
                    "setup: clip {:?}, variant {:?}",
                    setup.play_clip,
                    setup.select_variant
                );
            }
        }
        let progress = (frame as f32 / SWEEP_FRAMES as f32).min(1.0);
        let commands = session.tick(FrameInput {
            time_ms: f64::from(frame as u32) * 1000.0 / f64::from(FPS),
            dt,
            scroll_y: progress * page_end,
        });
        serde_json::to_writer(&mut out, &commands)
            .map_err(|e| StageError::Io(e.into()))?;
        writeln!(out)?;
    }
    out.flush()?;

    let pose = session.pose();
    log::info!(
        "final pose: canvas {:.3} vw, rot_y {:.3}, x {:.3}, y {:.3}",
        pose.canvas_x_vw,
        pose.rot_y,
        pose.x,
        pose.y
    );
    Ok(())
}

fn main() {
    env_logger::init();

    let options = match load_options(std::env::args().nth(1).as_deref()) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(options) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
