// Couples a dust field with the surface it paints onto. `tick` is the per-frame
// callback body; the host loop calls it and schedules another frame while it returns true.

use crate::field::DustField;
use crate::surface::Surface;
use rand::Rng;
use wasm_bindgen::JsValue;

// A second's worth of frames failing back to back stops the animation
pub const MAX_FAILED_FRAMES: u32 = 60;

pub struct Animation<S: Surface, R: Rng> {
    field: DustField<R>,
    surface: S,
    active: bool,
    failed_frames: u32,
}

impl<S: Surface, R: Rng> Animation<S, R> {
    // Populates the field from the surface's current size
    pub fn new(surface: S, rng: R) -> Self {
        let field = DustField::new(surface.width(), surface.height(), rng);
        Animation::with_field(surface, field)
    }

    pub fn with_field(surface: S, field: DustField<R>) -> Self {
        Animation {
            field,
            surface,
            active: true,
            failed_frames: 0,
        }
    }

    pub fn tick(&mut self) -> Result<bool, JsValue> {
        if !self.active {
            return Ok(false);
        }
        match self.field.step(&mut self.surface) {
            Ok(()) => {
                self.failed_frames = 0;
                Ok(true)
            }
            Err(err) => {
                self.failed_frames += 1;
                if self.failed_frames >= MAX_FAILED_FRAMES {
                    self.stop();
                }
                Err(err)
            }
        }
    }

    // Number of frames in a row that failed, 0 after a good one
    pub fn failed_frames(&self) -> u32 {
        self.failed_frames
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.surface.resize(width, height);
        self.field.resize(width, height);
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn field(&self) -> &DustField<R> {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
