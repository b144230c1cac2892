//! The playfield: planet surface, the dome and what grows inside it

use std::f32::consts::TAU;

use super::camera::Camera;
use crate::display::{Color, PixelBuffer};
use crate::math::Vec2;
use crate::util::{lerp_color, Rng};

pub const WORLD_RADIUS: f32 = 800.0;
pub const DOME_START_RADIUS: f32 = 230.0;
pub const DOME_MAX_RADIUS: f32 = 560.0;
pub const DOME_GROWTH: f32 = 60.0;
pub const START_PLANTS: usize = 6;

/// Seconds for a seedling to ripen
const PLANT_GROW_SECS: f32 = 20.0;
/// Seconds of holding action to chop a ripe plant
pub const CHOP_SECS: f32 = 1.0;

const SURFACE_COLOR: Color = Color::new(92, 64, 51);
const DOME_FLOOR_COLOR: Color = Color::new(60, 110, 60);
const DOME_GLASS_COLOR: Color = Color::new(180, 230, 255);
const HABITAT_COLOR: Color = Color::new(170, 170, 180);
const SEEDLING_COLOR: Color = Color::new(160, 200, 90);
const RIPE_COLOR: Color = Color::new(40, 160, 50);

/// Planet surface the player walks on
#[derive(Debug, Clone)]
pub struct World {
    pub loc: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Default for World {
    fn default() -> Self {
        Self {
            loc: Vec2::ZERO,
            radius: WORLD_RADIUS,
            color: SURFACE_COLOR,
        }
    }
}

impl World {
    /// Pull `loc` back onto the surface so a body of `radius` stays on it
    pub fn confine(&self, loc: Vec2, radius: f32) -> Vec2 {
        let limit = (self.radius - radius).max(0.0);
        let offset = loc - self.loc;
        if offset.magnitude_sqrd() > limit * limit {
            self.loc + offset.normalize() * limit
        } else {
            loc
        }
    }
}

/// Glass dome holding breathable air
#[derive(Debug, Clone)]
pub struct Dome {
    pub loc: Vec2,
    pub radius: f32,
}

impl Dome {
    pub fn contains(&self, p: Vec2) -> bool {
        (p - self.loc).magnitude_sqrd() < self.radius * self.radius
    }

    /// Grow by one step; returns false once the dome is at full size
    pub fn expand(&mut self) -> bool {
        if self.radius >= DOME_MAX_RADIUS {
            return false;
        }
        self.radius = (self.radius + DOME_GROWTH).min(DOME_MAX_RADIUS);
        true
    }
}

/// Living quarters, a rectangle near the top of the dome
#[derive(Debug, Clone)]
pub struct Habitat {
    pub loc: Vec2,
    pub length: i32,
    pub height: i32,
}

impl Habitat {
    fn for_dome(dome: &Dome) -> Self {
        let length = 140;
        let height = 80;
        Self {
            loc: dome.loc + Vec2::new(-(length as f32) / 2.0, -DOME_START_RADIUS * 0.75),
            length,
            height,
        }
    }

    /// True if a circle at `p` with `radius` overlaps the building
    pub fn blocks(&self, p: Vec2, radius: f32) -> bool {
        p.x + radius > self.loc.x
            && p.x - radius < self.loc.x + self.length as f32
            && p.y + radius > self.loc.y
            && p.y - radius < self.loc.y + self.height as f32
    }
}

#[derive(Debug, Clone)]
pub struct Plant {
    pub loc: Vec2,
    pub max_radius: f32,
    /// 0 = just planted, 1 = ripe
    pub growth: f32,
    /// Chop progress, 0..1
    pub chopped: f32,
}

impl Plant {
    pub fn new(loc: Vec2, max_radius: f32) -> Self {
        Self {
            loc,
            max_radius,
            growth: 0.0,
            chopped: 0.0,
        }
    }

    pub fn is_ripe(&self) -> bool {
        self.growth >= 1.0
    }

    pub fn radius(&self) -> f32 {
        self.max_radius * (0.2 + 0.8 * self.growth)
    }

    pub fn grow(&mut self, dt: f32) {
        self.growth = (self.growth + dt / PLANT_GROW_SECS).min(1.0);
    }

    /// Advance chopping; returns true when the plant is harvested this call
    pub fn chop(&mut self, dt: f32) -> bool {
        if !self.is_ripe() {
            return false;
        }
        self.chopped += dt / CHOP_SECS;
        if self.chopped >= 1.0 {
            self.growth = 0.0;
            self.chopped = 0.0;
            true
        } else {
            false
        }
    }
}

/// Everything on the planet surface
#[derive(Debug, Clone)]
pub struct Surface {
    pub world: World,
    pub dome: Dome,
    pub habitat: Habitat,
    pub plants: Vec<Plant>,
    rng: Rng,
}

impl Surface {
    pub fn generate(seed: u64) -> Self {
        let world = World::default();
        let dome = Dome {
            loc: world.loc,
            radius: DOME_START_RADIUS,
        };
        let habitat = Habitat::for_dome(&dome);
        let mut surface = Self {
            world,
            dome,
            habitat,
            plants: Vec::with_capacity(START_PLANTS * 2),
            rng: Rng::new(seed ^ 0x9E37_79B9_7F4A_7C15),
        };
        for _ in 0..START_PLANTS {
            surface.seed_plant();
        }
        surface
    }

    /// Where the player starts: just below the habitat door
    pub fn spawn_point(&self) -> Vec2 {
        self.habitat.loc + Vec2::new(self.habitat.length as f32 / 2.0, self.habitat.height as f32 + 20.0)
    }

    /// Plant a seedling at a free spot inside the dome
    pub fn seed_plant(&mut self) {
        let max_radius = self.rng.range_f32(10.0, 16.0);
        let mut loc = self.dome.loc;
        // Rejection sampling; a crowded dome just takes the last candidate
        for _ in 0..32 {
            let angle = self.rng.range_f32(0.0, TAU);
            let dist = self.rng.range_f32(40.0, self.dome.radius - max_radius - 10.0);
            loc = self.dome.loc + Vec2::from_angle(angle) * dist;
            let clear_of_habitat = !self.habitat.blocks(loc, max_radius + 10.0);
            let clear_of_plants = self
                .plants
                .iter()
                .all(|p| (p.loc - loc).magnitude() > p.max_radius + max_radius + 8.0);
            if clear_of_habitat && clear_of_plants {
                break;
            }
        }
        self.plants.push(Plant::new(loc, max_radius));
    }

    pub fn update(&mut self, dt: f32) {
        let dome = &self.dome;
        for plant in &mut self.plants {
            if dome.contains(plant.loc) {
                plant.grow(dt);
            }
        }
    }

    /// Ripe plant within reach of a body at `p` with `radius`
    pub fn ripe_plant_near(&self, p: Vec2, radius: f32) -> Option<usize> {
        self.plants.iter().position(|plant| {
            let reach = plant.radius() + radius + 6.0;
            plant.is_ripe() && (plant.loc - p).magnitude_sqrd() < reach * reach
        })
    }

    /// Surface, dome floor, plants and habitat. The glass goes on later,
    /// over the player.
    pub fn render_ground(&self, buffer: &mut PixelBuffer, camera: &Camera) {
        let world_loc = camera.to_screen(self.world.loc, 1.0);
        buffer.draw_circle(world_loc, self.world.radius, self.world.color, 1.0);

        let dome_loc = camera.to_screen(self.dome.loc, 1.0);
        buffer.draw_circle(dome_loc, self.dome.radius, DOME_FLOOR_COLOR, 0.35);

        for plant in &self.plants {
            let loc = camera.to_screen(plant.loc, 1.0);
            let color = lerp_color(SEEDLING_COLOR, RIPE_COLOR, plant.growth);
            buffer.draw_circle_within_circle(
                loc,
                plant.radius(),
                color,
                dome_loc,
                self.dome.radius,
                1.0,
            );
            if plant.is_ripe() {
                // Fruit, and a halo that fades as it gets chopped
                buffer.draw_circle(loc, plant.max_radius * 0.3, Color::new(230, 80, 60), 1.0);
                buffer.draw_circle_gradient(
                    loc,
                    plant.radius() + 6.0,
                    Color::YELLOW,
                    plant.radius(),
                    0.5 * (1.0 - plant.chopped),
                    0.0,
                );
            }
        }

        let habitat_loc = camera.to_screen(self.habitat.loc, 1.0);
        buffer.draw_rect_within_circle(
            habitat_loc,
            self.habitat.length,
            self.habitat.height,
            HABITAT_COLOR,
            dome_loc,
            self.dome.radius,
            1.0,
        );
        // Door
        let door = habitat_loc + Vec2::new(self.habitat.length as f32 / 2.0 - 12.0, self.habitat.height as f32 - 30.0);
        buffer.draw_rect(door, 24, 30, Color::new(60, 60, 70), 1.0);
        // Windows
        for i in 0..3 {
            let window = habitat_loc + Vec2::new(14.0 + i as f32 * 44.0, 14.0);
            buffer.draw_rect(window, 24, 16, Color::new(250, 220, 120), 0.85);
        }
    }

    /// Dome glass: clear in the middle, thickening toward the rim
    pub fn render_glass(&self, buffer: &mut PixelBuffer, camera: &Camera) {
        let dome_loc = camera.to_screen(self.dome.loc, 1.0);
        buffer.draw_circle_gradient(
            dome_loc,
            self.dome.radius,
            DOME_GLASS_COLOR,
            self.dome.radius * 0.6,
            0.0,
            0.45,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_deterministic() {
        let a = Surface::generate(11);
        let b = Surface::generate(11);
        let c = Surface::generate(12);
        let locs = |s: &Surface| s.plants.iter().map(|p| p.loc).collect::<Vec<_>>();
        assert_eq!(locs(&a), locs(&b));
        assert_ne!(locs(&a), locs(&c));
    }

    #[test]
    fn test_plants_start_inside_dome_and_clear_of_habitat() {
        let surface = Surface::generate(5);
        assert_eq!(surface.plants.len(), START_PLANTS);
        for plant in &surface.plants {
            assert!(surface.dome.contains(plant.loc));
        }
        assert!(surface.dome.contains(surface.spawn_point()));
        assert!(!surface.habitat.blocks(surface.spawn_point(), 8.0));
    }

    #[test]
    fn test_world_confines_to_surface() {
        let world = World::default();
        let inside = Vec2::new(100.0, 100.0);
        assert_eq!(world.confine(inside, 10.0), inside);

        let outside = world.confine(Vec2::new(2000.0, 0.0), 10.0);
        assert!(outside.approx_eq(&Vec2::new(790.0, 0.0), 1e-3));
    }

    #[test]
    fn test_plant_ripens_then_chops() {
        let mut plant = Plant::new(Vec2::ZERO, 10.0);
        assert!(!plant.chop(5.0));
        for _ in 0..(PLANT_GROW_SECS as usize * 60 + 1) {
            plant.grow(1.0 / 60.0);
        }
        assert!(plant.is_ripe());
        assert!(!plant.chop(CHOP_SECS * 0.5));
        assert!(plant.chop(CHOP_SECS * 0.6));
        assert_eq!(plant.growth, 0.0);
        assert!(!plant.is_ripe());
    }

    #[test]
    fn test_dome_expands_to_cap() {
        let mut dome = Dome {
            loc: Vec2::ZERO,
            radius: DOME_START_RADIUS,
        };
        let mut steps = 0;
        while dome.expand() {
            steps += 1;
        }
        assert_eq!(dome.radius, DOME_MAX_RADIUS);
        assert!(steps >= 5);
    }

    #[test]
    fn test_ripe_plant_near() {
        let mut surface = Surface::generate(3);
        let target = surface.plants[2].loc;
        assert_eq!(surface.ripe_plant_near(target, 8.0), None);
        surface.plants[2].growth = 1.0;
        assert_eq!(surface.ripe_plant_near(target, 8.0), Some(2));
        assert_eq!(surface.ripe_plant_near(target + Vec2::new(500.0, 0.0), 8.0), None);
    }

    #[test]
    fn test_render_draws_surface_and_glass() {
        let surface = Surface::generate(1);
        let mut camera = Camera::new(600, 600);
        camera.center_on(surface.world.loc);
        let mut buffer = PixelBuffer::with_size(600, 600);
        surface.render_ground(&mut buffer, &camera);
        assert_ne!(buffer.get_pixel(300, 300), Some(Color::BLACK));

        // Near the rim the glass tints whatever is underneath
        let rim_y = 300 + (surface.dome.radius * 0.9) as i32;
        let before = buffer.get_pixel(300, rim_y);
        surface.render_glass(&mut buffer, &camera);
        assert_ne!(buffer.get_pixel(300, rim_y), before);
    }
}
