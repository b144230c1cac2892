//! Short-lived world-space particles: ship exhaust and chopping debris

use super::camera::Camera;
use crate::display::{Color, PixelBuffer};
use crate::math::Vec2;
use crate::util::Rng;

/// A single particle
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32,
    pub max_life: f32,
    pub color: Color,
    pub size: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, life: f32, color: Color) -> Self {
        Self {
            pos,
            vel,
            life,
            max_life: life,
            color,
            size: 2.0,
        }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Normalized age (0 = just born, 1 = about to die)
    #[inline]
    pub fn age(&self) -> f32 {
        1.0 - (self.life / self.max_life)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Particle pool with shared drag
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    drag: f32,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self {
            particles: Vec::with_capacity(256),
            drag: 0.0,
        }
    }

    /// Velocity lost per second (0.5 = half speed after a second, roughly)
    pub fn with_drag(mut self, drag: f32) -> Self {
        self.drag = drag;
        self
    }

    pub fn emit(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Spray `count` particles from `pos`, directions random within `spread`
    /// radians of `heading`
    pub fn emit_spray(
        &mut self,
        pos: Vec2,
        heading: f32,
        spread: f32,
        count: usize,
        speed: f32,
        life: f32,
        color: Color,
        rng: &mut Rng,
    ) {
        for _ in 0..count {
            let angle = heading + rng.range_f32(-spread, spread);
            let s = speed * rng.range_f32(0.5, 1.0);
            let l = life * rng.range_f32(0.5, 1.0);
            let size = rng.range_f32(1.5, 3.5);
            self.emit(Particle::new(pos, Vec2::from_angle(angle) * s, l, color).with_size(size));
        }
    }

    pub fn update(&mut self, dt: f32) {
        let drag_factor = (1.0 - self.drag * dt).max(0.0);
        for p in &mut self.particles {
            p.pos += p.vel * dt;
            p.vel = p.vel * drag_factor;
            p.life -= dt;
        }
        self.particles.retain(Particle::is_alive);
    }

    /// Draw as shrinking, fading circles
    pub fn render(&self, buffer: &mut PixelBuffer, camera: &Camera) {
        for p in &self.particles {
            let alpha = (p.life / p.max_life).clamp(0.0, 1.0);
            let radius = p.size * (1.0 - p.age() * 0.5);
            buffer.draw_circle(camera.to_screen(p.pos, 1.0), radius, p.color, alpha);
        }
    }

    pub fn count(&self) -> usize {
        self.particles.len()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new()
    }
}
