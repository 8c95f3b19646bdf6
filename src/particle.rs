// Dust particle: position, velocity, look, and a bounded lifespan in frames

use crate::color::{Color, PALETTE};
use crate::config::DustConfig;
use crate::surface::Glow;
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::Range;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub size: f64,
    pub opacity: f64,
    pub color: Color,
    pub age: u32,
    pub max_age: u32,
}

impl Particle {
    // Fresh particle somewhere on a width x height surface, age 0
    pub fn spawn<R: Rng>(rng: &mut R, width: f64, height: f64, config: &DustConfig) -> Particle {
        let speed = config.max_speed;
        Particle {
            pos: [rng.gen::<f64>() * width, rng.gen::<f64>() * height],
            vel: [
                (rng.gen::<f64>() * 2.0 - 1.0) * speed,
                (rng.gen::<f64>() * 2.0 - 1.0) * speed,
            ],
            size: sample(rng, &config.size).max(0.0),
            opacity: sample(rng, &config.opacity).max(0.0).min(1.0),
            color: *PALETTE.choose(rng).unwrap_or(&PALETTE[0]),
            age: 0,
            max_age: sample_frames(rng, &config.life_frames),
        }
    }

    pub fn advance(&mut self) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        self.age = self.age.saturating_add(1);
    }

    pub fn life_fraction(&self) -> f64 {
        if self.max_age == 0 {
            1.0
        } else {
            self.age as f64 / self.max_age as f64
        }
    }

    // Base opacity ramped up linearly over the first `fade_fraction` of life
    // and back down to zero over the last
    pub fn effective_opacity(&self, fade_fraction: f64) -> f64 {
        let life = self.life_fraction();
        let scale = if life < fade_fraction {
            life / fade_fraction
        } else if life > 1.0 - fade_fraction {
            (1.0 - life) / fade_fraction
        } else {
            1.0
        };
        self.opacity * scale.max(0.0).min(1.0)
    }

    pub fn wrap(&mut self, width: f64, height: f64) {
        self.pos[0] = wrap_coord(self.pos[0], width);
        self.pos[1] = wrap_coord(self.pos[1], height);
    }

    pub fn is_expired(&self) -> bool {
        self.age >= self.max_age
    }

    pub fn glow(&self, config: &DustConfig) -> Glow {
        let alpha = self.effective_opacity(config.fade_fraction);
        Glow {
            center: self.pos,
            radius: (self.size * config.glow_radius_scale).max(0.0),
            inner: self.color.with_alpha(alpha),
            mid: self.color.with_alpha(alpha * config.glow_mid_intensity),
            mid_stop: config.glow_mid_stop.max(0.0).min(1.0),
        }
    }
}

// Uniform in [start, end); an empty or inverted range yields start
fn sample<R: Rng>(rng: &mut R, range: &Range<f64>) -> f64 {
    if range.end > range.start {
        range.start + rng.gen::<f64>() * (range.end - range.start)
    } else {
        range.start
    }
}

fn sample_frames<R: Rng>(rng: &mut R, range: &Range<u32>) -> u32 {
    if range.end > range.start {
        rng.gen_range(range.start, range.end)
    } else {
        range.start
    }
}

// Maps v into [0, len): leaving past one edge re-enters from the other
fn wrap_coord(v: f64, len: f64) -> f64 {
    if !(len > 0.0) || !v.is_finite() {
        return 0.0;
    }
    if v >= 0.0 && v < len {
        return v;
    }
    let wrapped = v.rem_euclid(len);
    // rem_euclid can round up to len itself for tiny negative inputs
    if wrapped >= len {
        0.0
    } else {
        wrapped
    }
}
