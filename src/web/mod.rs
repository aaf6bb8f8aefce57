//! Browser host for the session (wasm32, feature `web`).
//!
//! JavaScript owns the 3D renderer and the `requestAnimationFrame` loop.
//! Each frame it calls [`WebStage::tick`], applies the returned commands
//! to its scene, and renders. The stage itself reads the scroll offset,
//! writes the canvas transform and keeps the section layout and canvas
//! size current across resizes and orientation changes.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, Window};

use crate::camera::Viewport;
use crate::engine::{AssetInfo, FrameCommands, FrameInput, Session};
use crate::error::StageError;
use crate::options::Options;
use crate::scroll::SectionBounds;
use crate::util::frame_timing::FrameClock;

/// Module entry point: panic hook and console logging.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

fn js_err(e: &StageError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let text = serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&text)
}

fn window() -> Result<Window, StageError> {
    web_sys::window().ok_or_else(|| StageError::Dom("no window".into()))
}

fn document(window: &Window) -> Result<Document, StageError> {
    window
        .document()
        .ok_or_else(|| StageError::Dom("no document".into()))
}

/// Offsets of every element matching `selector`, in document order.
fn measure_sections(
    document: &Document,
    selector: &str,
) -> Result<Vec<SectionBounds>, StageError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| StageError::Dom(format!("bad selector {selector}: {e:?}")))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|el| {
            SectionBounds::new(el.offset_top() as f32, el.offset_height() as f32)
        })
        .collect())
}

/// Frame commands plus a new drawing-buffer size when the canvas was
/// resized since the previous frame.
#[derive(Serialize)]
struct WebFrame<'a> {
    #[serde(flatten)]
    commands: &'a FrameCommands,
    viewport: Option<Viewport>,
}

struct Stage {
    window: Window,
    document: Document,
    canvas: HtmlCanvasElement,
    session: Session,
    clock: FrameClock,
    pending_viewport: Option<Viewport>,
}

impl Stage {
    fn measure(&mut self) -> Result<(), StageError> {
        let selector = self.session.options().canvas.section_selector.clone();
        let sections = measure_sections(&self.document, &selector)?;
        self.session.set_sections(&sections)
    }

    fn resize(&mut self) {
        let rect = self.canvas.get_bounding_client_rect();
        let viewport = self.session.resize(
            rect.width() as f32,
            rect.height() as f32,
            self.window.device_pixel_ratio() as f32,
        );
        let scale = viewport.pixel_ratio;
        self.canvas
            .set_width((viewport.width as f32 * scale).round() as u32);
        self.canvas
            .set_height((viewport.height as f32 * scale).round() as u32);
        self.pending_viewport = Some(viewport);
    }

    fn relayout(&mut self) {
        if let Err(e) = self.measure() {
            log::warn!("section measure failed: {e}");
        }
        self.resize();
    }

    fn tick(&mut self, now_ms: f64) -> Result<JsValue, JsValue> {
        let scroll_y = self.window.scroll_y().unwrap_or(0.0) as f32;
        let commands = self.session.tick(FrameInput {
            time_ms: now_ms,
            dt: self.clock.tick(),
            scroll_y,
        });
        self.canvas
            .style()
            .set_property("transform", &commands.canvas.css())?;
        to_js(&WebFrame {
            commands: &commands,
            viewport: self.pending_viewport.take(),
        })
    }
}

/// Install resize and orientation-change listeners that re-measure the
/// page. Orientation changes wait `settle_ms` for the browser layout.
fn install_listeners(
    stage: &Rc<RefCell<Stage>>,
    settle_ms: i32,
) -> Result<(), JsValue> {
    let window = stage.borrow().window.clone();

    let on_resize = {
        let stage = Rc::clone(stage);
        Closure::wrap(Box::new(move || {
            stage.borrow_mut().relayout();
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback(
        "resize",
        on_resize.as_ref().unchecked_ref(),
    )?;
    on_resize.forget();

    let on_orientation = {
        let stage = Rc::clone(stage);
        let window = window.clone();
        Closure::wrap(Box::new(move || {
            let stage = Rc::clone(&stage);
            let settle = Closure::once_into_js(move || {
                stage.borrow_mut().relayout();
            });
            if let Err(e) = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    settle.unchecked_ref(),
                    settle_ms,
                )
            {
                log::warn!("orientation settle timer failed: {e:?}");
            }
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback(
        "orientationchange",
        on_orientation.as_ref().unchecked_ref(),
    )?;
    on_orientation.forget();
    Ok(())
}

/// The scroll stage bound to a page canvas.
#[wasm_bindgen]
pub struct WebStage {
    inner: Rc<RefCell<Stage>>,
}

#[wasm_bindgen]
impl WebStage {
    /// Attach to the page. `options_toml` overrides the defaults; the
    /// canvas is looked up by `canvas.element_id`.
    #[wasm_bindgen(constructor)]
    pub fn new(options_toml: Option<String>) -> Result<WebStage, JsValue> {
        let options = match options_toml {
            Some(text) => Options::from_toml_str(&text),
            None => Ok(Options::default()),
        }
        .map_err(|e| js_err(&e))?;

        let window = window().map_err(|e| js_err(&e))?;
        let document = document(&window).map_err(|e| js_err(&e))?;
        let canvas = document
            .get_element_by_id(&options.canvas.element_id)
            .ok_or_else(|| {
                StageError::Dom(format!(
                    "missing #{}",
                    options.canvas.element_id
                ))
            })
            .map_err(|e| js_err(&e))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| {
                js_err(&StageError::Dom(format!(
                    "#{} is not a canvas",
                    options.canvas.element_id
                )))
            })?;

        let sections =
            measure_sections(&document, &options.canvas.section_selector)
                .map_err(|e| js_err(&e))?;
        let settle_ms = options.canvas.orientation_settle_ms as i32;
        let max_dt = options.animation.max_dt;
        let session =
            Session::new(options, &sections).map_err(|e| js_err(&e))?;

        let inner = Rc::new(RefCell::new(Stage {
            window,
            document,
            canvas,
            session,
            clock: FrameClock::new(max_dt),
            pending_viewport: None,
        }));
        inner.borrow_mut().resize();
        install_listeners(&inner, settle_ms)?;
        log::info!("scroll stage attached");
        Ok(Self { inner })
    }

    /// Static scene description: model path, decoder path, lights.
    #[wasm_bindgen(js_name = sceneSetup)]
    pub fn scene_setup(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.borrow().session.scene_setup())
    }

    /// Re-measure sections and the canvas now.
    pub fn relayout(&self) {
        self.inner.borrow_mut().relayout();
    }

    /// Advance one frame. `now_ms` is the `requestAnimationFrame`
    /// timestamp. Returns the frame commands as a JS object.
    pub fn tick(&self, now_ms: f64) -> Result<JsValue, JsValue> {
        self.inner.borrow_mut().tick(now_ms)
    }

    /// Report a successful load. `info_json` is a serialized
    /// [`AssetInfo`]. Returns the one-time setup for the model.
    #[wasm_bindgen(js_name = modelLoaded)]
    pub fn model_loaded(&self, info_json: &str) -> Result<JsValue, JsValue> {
        let result = serde_json::from_str::<AssetInfo>(info_json)
            .map_err(|e| StageError::AssetLoad(format!("bad model info: {e}")));
        let setup = self.inner.borrow_mut().session.on_asset_loaded(result);
        match setup {
            Some(setup) => to_js(&setup),
            None => Ok(JsValue::NULL),
        }
    }

    /// Report a failed load. The page keeps scrolling without a model.
    #[wasm_bindgen(js_name = modelFailed)]
    pub fn model_failed(&self, reason: &str) {
        let _ = self
            .inner
            .borrow_mut()
            .session
            .on_asset_loaded(Err(StageError::AssetLoad(reason.to_owned())));
    }
}
