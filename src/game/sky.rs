//! Background layers: parallax starmap and the celestial bodies

use std::f32::consts::TAU;

use super::camera::Camera;
use crate::display::{Color, PixelBuffer};
use crate::math::Vec2;
use crate::util::Rng;

const STAR_MIN_Z: f32 = 0.05;
const STAR_MAX_Z: f32 = 0.4;

#[derive(Debug, Clone)]
pub struct Star {
    pub loc: Vec2,
    pub z: f32,
    pub brightness: f32,
    /// Twinkle phase offset
    phase: f32,
}

/// A sphere lit from one side
#[derive(Debug, Clone)]
pub struct Body {
    pub loc: Vec2,
    pub radius: f32,
    pub color: Color,
    pub z: f32,
    /// Atmosphere glow color, if any
    pub atmosphere: Option<Color>,
}

impl Body {
    fn render(&self, buffer: &mut PixelBuffer, camera: &Camera, light_dir: Vec2) {
        let loc = camera.to_screen(self.loc, self.z);
        if let Some(glow) = self.atmosphere {
            buffer.draw_circle_gradient(loc, self.radius * 1.15, glow, self.radius, 0.5, 0.0);
        }
        buffer.draw_circle(loc, self.radius, self.color, 1.0);
        // Night side: a dark disc pushed away from the light, kept on the body
        let shadow_loc = loc - light_dir * (self.radius * 0.5);
        buffer.draw_circle_within_circle(
            shadow_loc,
            self.radius,
            Color::BLACK,
            loc,
            self.radius,
            0.55,
        );
    }
}

#[derive(Debug, Clone)]
pub struct Sky {
    stars: Vec<Star>,
    pub planet: Body,
    pub moon: Body,
    pub distant_planet: Body,
    moon_angle: f32,
    moon_orbit: f32,
    time: f32,
}

/// Radians per second the moon travels around the planet
const MOON_ORBIT_SPEED: f32 = 0.05;

/// Direction sunlight comes from, in screen terms
const LIGHT_DIR: Vec2 = Vec2::new(0.8, -0.6);

impl Sky {
    pub fn generate(seed: u64, star_count: usize, screen: Vec2) -> Self {
        let mut rng = Rng::new(seed);
        let stars = (0..star_count)
            .map(|_| Star {
                loc: Vec2::new(rng.range_f32(0.0, screen.x), rng.range_f32(0.0, screen.y)),
                z: rng.range_f32(STAR_MIN_Z, STAR_MAX_Z),
                brightness: rng.range_f32(0.3, 1.0),
                phase: rng.range_f32(0.0, TAU),
            })
            .collect();

        Self {
            stars,
            planet: Body {
                loc: Vec2::new(-500.0, 50.0),
                radius: 240.0,
                color: Color::new(70, 110, 190),
                z: 0.3,
                atmosphere: Some(Color::new(120, 180, 255)),
            },
            moon: Body {
                loc: Vec2::ZERO,
                radius: 48.0,
                color: Color::new(190, 190, 185),
                z: 0.3,
                atmosphere: None,
            },
            distant_planet: Body {
                loc: Vec2::new(-300.0, -400.0),
                radius: 100.0,
                color: Color::new(200, 140, 90),
                z: 0.15,
                atmosphere: Some(Color::new(240, 190, 140)),
            },
            moon_angle: rng.range_f32(0.0, TAU),
            moon_orbit: 360.0,
            time: 0.0,
        }
    }

    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    pub fn update(&mut self, dt: f32) {
        self.time += dt;
        self.moon_angle = (self.moon_angle + MOON_ORBIT_SPEED * dt).rem_euclid(TAU);
        self.moon.loc = self.planet.loc
            + Vec2::new(self.moon_angle.cos() * self.moon_orbit, self.moon_angle.sin() * self.moon_orbit * 0.3);
    }

    /// The orbit is seen edge-on, tilted: the moon passes in front of the
    /// planet on the lower half
    pub fn moon_in_front(&self) -> bool {
        self.moon_angle.sin() > 0.0
    }

    pub fn render(&self, buffer: &mut PixelBuffer, camera: &Camera) {
        let screen = camera.screen_size();
        for star in &self.stars {
            // Stars wrap around the screen so the field never runs out
            let p = camera.to_screen(star.loc, star.z) - camera.screen_size() * 0.5;
            let x = p.x.rem_euclid(screen.x);
            let y = p.y.rem_euclid(screen.y);
            let twinkle = 0.85 + 0.15 * (self.time * 2.0 + star.phase).sin();
            let alpha = (star.brightness * twinkle).clamp(0.0, 1.0);
            buffer.put_pixel_with_alpha_blend(x as i32, y as i32, Color::WHITE, alpha);
            if star.z > 0.3 {
                buffer.draw_circle(Vec2::new(x, y), 1.5, Color::WHITE, alpha * 0.5);
            }
        }

        self.distant_planet.render(buffer, camera, LIGHT_DIR);
        if self.moon_in_front() {
            self.planet.render(buffer, camera, LIGHT_DIR);
            self.moon.render(buffer, camera, LIGHT_DIR);
        } else {
            self.moon.render(buffer, camera, LIGHT_DIR);
            self.planet.render(buffer, camera, LIGHT_DIR);
        }
    }
}
