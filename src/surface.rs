// Drawing seam between the simulation and whatever it paints onto.
// The browser build paints onto a 2D canvas (see renderer.rs); tests record the calls.

use crate::color::Color;
use vecmath::Vector2;
use wasm_bindgen::JsValue;

// A soft radial glow: `inner` at the center, `mid` at `mid_stop` of the radius,
// fully transparent at `radius`. Composited with a screen blend.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Glow {
    pub center: Vector2<f64>,
    pub radius: f64,
    pub inner: Color,
    pub mid: Color,
    pub mid_stop: f64,
}

pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn resize(&mut self, width: f64, height: f64);

    // Paints black at `alpha` over the entire surface, leaving a short trail
    // of whatever was there before.
    fn fade(&mut self, alpha: f64) -> Result<(), JsValue>;

    fn draw_glow(&mut self, glow: &Glow) -> Result<(), JsValue>;
}
