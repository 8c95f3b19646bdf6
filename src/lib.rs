mod utils;
pub mod animation;
pub mod color;
pub mod config;
pub mod field;
pub mod particle;
pub mod renderer;
pub mod surface;

use animation::Animation;
use rand::rngs::StdRng;
use rand::SeedableRng;
use renderer::CanvasRenderer;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use surface::Surface;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, HtmlCanvasElement, Window};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Keeps the canvas behind everything, out of the way of the mouse,
// and screen-blended with the page above it
const BACKDROP_STYLE: [(&str, &str); 7] = [
    ("position", "fixed"),
    ("inset", "0"),
    ("top", "0"),
    ("left", "0"),
    ("pointer-events", "none"),
    ("z-index", "-10"),
    ("mix-blend-mode", "screen"),
];

type CanvasAnimation = Animation<CanvasRenderer, StdRng>;
type JsCallback = Closure<dyn FnMut()>;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

// Handle to the dust background. Mounting never fails: without a window,
// document or 2D context the handle is simply inert.
#[wasm_bindgen]
pub struct GradientDust {
    mounted: Option<Mounted>,
    particle_count: usize,
}

#[wasm_bindgen]
impl GradientDust {
    pub fn mount() -> GradientDust {
        let mounted = Mounted::new();
        let particle_count = mounted
            .as_ref()
            .map(|m| m.animation.borrow().field().particles().len())
            .unwrap_or(0);
        GradientDust {
            mounted,
            particle_count,
        }
    }

    pub fn unmount(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            mounted.teardown();
        }
    }

    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.particle_count
    }

    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.mounted
            .as_ref()
            .map(|m| m.animation.borrow().is_active())
            .unwrap_or(false)
    }
}

impl Drop for GradientDust {
    fn drop(&mut self) {
        self.unmount();
    }
}

struct Mounted {
    window: Window,
    canvas: HtmlCanvasElement,
    animation: Rc<RefCell<CanvasAnimation>>,
    frame_id: Rc<Cell<Option<i32>>>,
    // The frame callback reschedules itself through this slot; teardown empties it
    frame_loop: Rc<RefCell<Option<JsCallback>>>,
    on_resize: JsCallback,
}

impl Mounted {
    fn new() -> Option<Mounted> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let body = document.body()?;
        let canvas = document
            .create_element("canvas")
            .ok()?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        style_backdrop(&canvas).ok()?;

        let mut renderer = CanvasRenderer::new(canvas.clone())?;
        let (width, height) = viewport_size(&window);
        renderer.resize(width, height);
        body.append_child(&canvas).ok()?;

        let animation = Rc::new(RefCell::new(Animation::new(
            renderer,
            StdRng::from_entropy(),
        )));
        console::log_1(
            &format!(
                "gradient dust: {} particles on {}x{}",
                animation.borrow().field().particles().len(),
                width,
                height
            )
            .into(),
        );

        let on_resize = {
            let window = window.clone();
            let animation = animation.clone();
            Closure::wrap(Box::new(move || {
                let (width, height) = viewport_size(&window);
                animation.borrow_mut().resize(width, height);
            }) as Box<dyn FnMut()>)
        };
        if window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .is_err()
        {
            canvas.remove();
            return None;
        }

        let frame_id = Rc::new(Cell::new(None));
        let frame_loop: Rc<RefCell<Option<JsCallback>>> = Rc::new(RefCell::new(None));
        {
            let window = window.clone();
            let animation = animation.clone();
            let frame_id = frame_id.clone();
            let next = frame_loop.clone();
            *frame_loop.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                frame_id.set(None);
                if run_frame(&animation) {
                    if let Some(callback) = next.borrow().as_ref() {
                        frame_id.set(request_frame(&window, callback));
                    }
                }
            }) as Box<dyn FnMut()>));
        }
        if let Some(callback) = frame_loop.borrow().as_ref() {
            frame_id.set(request_frame(&window, callback));
        }

        Some(Mounted {
            window,
            canvas,
            animation,
            frame_id,
            frame_loop,
            on_resize,
        })
    }

    fn teardown(self) {
        self.animation.borrow_mut().stop();
        if let Some(id) = self.frame_id.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                console::error_1(&err);
            }
        }
        if let Err(err) = self.window.remove_event_listener_with_callback(
            "resize",
            self.on_resize.as_ref().unchecked_ref(),
        ) {
            console::error_1(&err);
        }
        self.frame_loop.borrow_mut().take();
        self.canvas.remove();
    }
}

// One animation frame. Returns whether another should be scheduled.
// Only the first failure of a run is logged.
fn run_frame(animation: &RefCell<CanvasAnimation>) -> bool {
    #[cfg(feature = "frame-timing")]
    let _timer = Timer::new("GradientDust::frame");

    let mut animation = animation.borrow_mut();
    match animation.tick() {
        Ok(more) => more,
        Err(err) => {
            if animation.failed_frames() == 1 {
                console::error_1(&err);
            }
            if !animation.is_active() {
                console::error_1(&"gradient dust: too many failed frames, stopping".into());
            }
            animation.is_active()
        }
    }
}

fn request_frame(window: &Window, callback: &JsCallback) -> Option<i32> {
    window
        .request_animation_frame(callback.as_ref().unchecked_ref::<js_sys::Function>())
        .ok()
}

fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

fn style_backdrop(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let style = canvas.style();
    for (name, value) in BACKDROP_STYLE.iter() {
        style.set_property(name, value)?;
    }
    Ok(())
}
