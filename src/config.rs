// Tunable constants of the dust effect. `Default` reproduces the site's background.

use std::ops::Range;

#[derive(Clone, Debug, PartialEq)]
pub struct DustConfig {
    // Upper bound on the number of particles, whatever the surface area.
    pub max_particles: usize,
    // Surface area (in square pixels) that earns one particle.
    pub area_per_particle: f64,
    // Alpha of the black rectangle painted over the surface each frame.
    pub trail_alpha: f64,
    // Share of a particle's life spent fading in, and again fading out.
    pub fade_fraction: f64,
    // Lifespan in frames.
    pub life_frames: Range<u32>,
    // Each velocity component is drawn from [-max_speed, max_speed).
    pub max_speed: f64,
    pub size: Range<f64>,
    pub opacity: Range<f64>,
    // Glow radius as a multiple of particle size.
    pub glow_radius_scale: f64,
    // Offset of the gradient's middle stop, and its intensity relative to the center.
    pub glow_mid_stop: f64,
    pub glow_mid_intensity: f64,
}

impl Default for DustConfig {
    fn default() -> Self {
        DustConfig {
            max_particles: 150,
            area_per_particle: 8000.0,
            trail_alpha: 0.05,
            fade_fraction: 0.1,
            life_frames: 200..500,
            max_speed: 0.25,
            size: 1.0..4.0,
            opacity: 0.1..0.6,
            glow_radius_scale: 3.0,
            glow_mid_stop: 0.5,
            glow_mid_intensity: 0.3,
        }
    }
}

impl DustConfig {
    // min(max_particles, floor(area / area_per_particle))
    pub fn particle_count(&self, width: f64, height: f64) -> usize {
        let area = (width * height).max(0.0);
        let by_area = (area / self.area_per_particle).floor() as usize;
        by_area.min(self.max_particles)
    }
}
