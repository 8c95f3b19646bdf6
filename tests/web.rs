// Browser tests, run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use gradient_dust::config::DustConfig;
use gradient_dust::GradientDust;
use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

fn viewport() -> (f64, f64) {
    let window = web_sys::window().unwrap();
    (
        window.inner_width().unwrap().as_f64().unwrap(),
        window.inner_height().unwrap().as_f64().unwrap(),
    )
}

fn has_canvas() -> bool {
    let document = web_sys::window().unwrap().document().unwrap();
    document.query_selector("canvas").unwrap().is_some()
}

fn canvas() -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    document
        .query_selector("canvas")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap()
}

fn fire_resize() {
    let window = web_sys::window().unwrap();
    window
        .dispatch_event(&Event::new("resize").unwrap())
        .unwrap();
}

async fn next_frame() {
    let promise = Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .request_animation_frame(&resolve)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn mount_adds_backdrop_canvas() {
    let mut dust = GradientDust::mount();
    assert!(dust.is_active());
    assert!(has_canvas());

    let (width, height) = viewport();
    assert_eq!(
        dust.particle_count(),
        DustConfig::default().particle_count(width, height)
    );
    dust.unmount();
}

#[wasm_bindgen_test]
fn unmount_removes_canvas_and_stops() {
    let mut dust = GradientDust::mount();
    let count = dust.particle_count();
    dust.unmount();
    assert!(!dust.is_active());
    assert!(!has_canvas());
    assert_eq!(dust.particle_count(), count);

    // a second unmount is a no-op
    dust.unmount();
    assert!(!dust.is_active());
}

#[wasm_bindgen_test]
fn drop_tears_down() {
    {
        let _dust = GradientDust::mount();
        assert!(has_canvas());
    }
    assert!(!has_canvas());
}

#[wasm_bindgen_test]
fn resize_event_resizes_mounted_canvas() {
    let mut dust = GradientDust::mount();
    let canvas = canvas();
    canvas.set_width(1);
    canvas.set_height(1);

    fire_resize();
    let (width, height) = viewport();
    assert_eq!(canvas.width(), width as u32);
    assert_eq!(canvas.height(), height as u32);
    dust.unmount();
}

#[wasm_bindgen_test]
async fn nothing_runs_after_unmount() {
    let mut dust = GradientDust::mount();
    let canvas = canvas();
    next_frame().await;
    dust.unmount();

    // the resize listener is gone
    canvas.set_width(1);
    canvas.set_height(1);
    fire_resize();
    assert_eq!((canvas.width(), canvas.height()), (1, 1));

    // a frame still pending at unmount would call a dropped closure and throw here
    next_frame().await;
    next_frame().await;
    assert!(!dust.is_active());
    assert!(!has_canvas());
}
