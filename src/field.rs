// The dust field: a fixed-size arena of particles sized from the surface area
// at creation, updated and painted once per frame

use crate::config::DustConfig;
use crate::particle::Particle;
use crate::surface::Surface;
use rand::Rng;
use wasm_bindgen::JsValue;

pub struct DustField<R: Rng> {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    config: DustConfig,
    rng: R,
}

impl<R: Rng> DustField<R> {
    pub fn new(width: f64, height: f64, rng: R) -> Self {
        DustField::with_config(width, height, DustConfig::default(), rng)
    }

    pub fn with_config(width: f64, height: f64, config: DustConfig, mut rng: R) -> Self {
        let count = config.particle_count(width, height);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle::spawn(&mut rng, width, height, &config));
        }
        DustField {
            width,
            height,
            particles,
            config,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    // Only the bounds change; the particle set is left as it is
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    // A glow the surface rejects doesn't stop the frame: every particle still
    // moves, ages and is replaced on expiry, and the first error is returned.
    pub fn step<S: Surface>(&mut self, surface: &mut S) -> Result<(), JsValue> {
        surface.fade(self.config.trail_alpha)?;

        let mut result = Ok(());
        for i in 0..self.particles.len() {
            let p = &mut self.particles[i];
            p.advance();
            p.wrap(self.width, self.height);
            if let Err(err) = surface.draw_glow(&p.glow(&self.config)) {
                if result.is_ok() {
                    result = Err(err);
                }
            }

            if p.is_expired() {
                self.particles[i] =
                    Particle::spawn(&mut self.rng, self.width, self.height, &self.config);
            }
        }
        result
    }
}
