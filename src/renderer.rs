// Canvas renderer: paints the dust field onto a 2D canvas. Owns the canvas element
// so it can resize it, and the 2D context grabbed from it at mount time.

use crate::color::Color;
use crate::surface::{Glow, Surface};
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasRenderer {
    pub canvas: HtmlCanvasElement,
    pub context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    // Grabs the 2D context from the canvas. None if the browser won't hand one out.
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let context = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(CanvasRenderer { canvas, context })
    }

    fn paint_screen(&self, x: f64, y: f64, radius: f64, fill: &CanvasGradient) -> Result<(), JsValue> {
        self.context.set_global_composite_operation("screen")?;
        self.context.set_fill_style(fill);
        self.context.begin_path();
        self.context.arc(x, y, radius, 0.0, PI * 2.0)?;
        self.context.fill();
        Ok(())
    }
}

impl Surface for CanvasRenderer {
    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    fn fade(&mut self, alpha: f64) -> Result<(), JsValue> {
        let black = Color::rgba(0, 0, 0, alpha);
        self.context
            .set_fill_style(&JsValue::from_str(&black.to_css()));
        self.context.fill_rect(0.0, 0.0, self.width(), self.height());
        Ok(())
    }

    fn draw_glow(&mut self, glow: &Glow) -> Result<(), JsValue> {
        let [x, y] = glow.center;
        let gradient = self
            .context
            .create_radial_gradient(x, y, 0.0, x, y, glow.radius)?;
        gradient.add_color_stop(0.0, &glow.inner.to_css())?;
        gradient.add_color_stop(glow.mid_stop as f32, &glow.mid.to_css())?;
        gradient.add_color_stop(1.0, &Color::TRANSPARENT.to_css())?;

        self.context.save();
        let painted = self.paint_screen(x, y, glow.radius, &gradient);
        self.context.restore();
        painted
    }
}
