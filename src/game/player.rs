//! The astronaut and the supply ship

use std::f32::consts::PI;

use super::camera::Camera;
use super::particles::ParticleSystem;
use crate::display::{Color, PixelBuffer};
use crate::math::Vec2;
use crate::util::Rng;

const PLAYER_RADIUS: f32 = 9.0;
const PLAYER_ACCEL: f32 = 900.0;
const PLAYER_MAX_SPEED: f32 = 180.0;
/// Fraction of velocity kept per second with no input
const PLAYER_FRICTION: f32 = 0.002;

/// Oxygen gained per second inside the dome
const OXYGEN_REFILL: f32 = 0.25;
/// Oxygen lost per second outside
const OXYGEN_DRAIN: f32 = 1.0 / 30.0;
/// Food lost per second
const FOOD_DRAIN: f32 = 1.0 / 90.0;
/// Food restored by one harvest
pub const HARVEST_FOOD: f32 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    Suffocated,
    Starved,
}

impl DeathCause {
    pub fn message(self) -> &'static str {
        match self {
            Self::Suffocated => "YOU RAN OUT OF OXYGEN",
            Self::Starved => "YOU STARVED",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub loc: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// 0..1
    pub oxygen: f32,
    /// 0..1
    pub food: f32,
    /// Where the player last moved, for the visor
    facing: Vec2,
}

impl Player {
    pub fn new(loc: Vec2) -> Self {
        Self {
            loc,
            vel: Vec2::ZERO,
            radius: PLAYER_RADIUS,
            oxygen: 1.0,
            food: 1.0,
            facing: Vec2::new(0.0, 1.0),
        }
    }

    /// Integrate movement from a (normalized) input direction
    pub fn steer(&mut self, dir: Vec2, dt: f32) {
        if dir == Vec2::ZERO {
            self.vel = self.vel * PLAYER_FRICTION.powf(dt);
        } else {
            self.vel = (self.vel + dir * (PLAYER_ACCEL * dt)).clamp_length(PLAYER_MAX_SPEED);
            self.facing = dir;
        }
        self.loc += self.vel * dt;
    }

    /// Drain and refill survival meters
    pub fn breathe(&mut self, in_dome: bool, dt: f32) {
        if in_dome {
            self.oxygen = (self.oxygen + OXYGEN_REFILL * dt).min(1.0);
        } else {
            self.oxygen = (self.oxygen - OXYGEN_DRAIN * dt).max(0.0);
        }
        self.food = (self.food - FOOD_DRAIN * dt).max(0.0);
    }

    pub fn eat(&mut self, amount: f32) {
        self.food = (self.food + amount).min(1.0);
    }

    pub fn death(&self) -> Option<DeathCause> {
        if self.oxygen <= 0.0 {
            Some(DeathCause::Suffocated)
        } else if self.food <= 0.0 {
            Some(DeathCause::Starved)
        } else {
            None
        }
    }

    pub fn render(&self, buffer: &mut PixelBuffer, camera: &Camera) {
        let loc = camera.to_screen(self.loc, 1.0);
        // Suit, helmet, visor
        buffer.draw_circle(loc, self.radius, Color::new(235, 235, 240), 1.0);
        buffer.draw_circle(loc, self.radius * 0.7, Color::new(200, 120, 40), 1.0);
        let visor = loc + self.facing * (self.radius * 0.35);
        buffer.draw_ellipse(visor, self.radius * 0.45, self.radius * 0.3, Color::new(40, 60, 90), 0.9);
    }
}

const SHIP_SPEED: f32 = 220.0;
const SHIP_LANDED_SECS: f32 = 2.0;

/// Phases of the supply run
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShipPhase {
    Docked,
    Arriving,
    Landed { remaining: f32 },
    Departing,
}

/// What the ship asks of the world this step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipEvent {
    None,
    /// Touched down: grow the dome and seed a plant
    Delivered,
    /// Back out of sight: the scene is over
    Gone,
}

#[derive(Debug, Clone)]
pub struct Spaceship {
    pub loc: Vec2,
    pub phase: ShipPhase,
    heading: f32,
    /// Parked position off-world
    home: Vec2,
    exhaust: ParticleSystem,
    rng: Rng,
}

impl Spaceship {
    pub fn new(home: Vec2, seed: u64) -> Self {
        Self {
            loc: home,
            phase: ShipPhase::Docked,
            heading: 0.0,
            home,
            exhaust: ParticleSystem::new().with_drag(1.5),
            rng: Rng::new(seed),
        }
    }

    pub fn in_scene(&self) -> bool {
        self.phase != ShipPhase::Docked
    }

    /// Begin a delivery run
    pub fn launch(&mut self) {
        if self.phase == ShipPhase::Docked {
            self.loc = self.home;
            self.phase = ShipPhase::Arriving;
        }
    }

    fn fly_to(&mut self, target: Vec2, dt: f32) -> bool {
        let to = target - self.loc;
        let step = SHIP_SPEED * dt;
        if to.magnitude_sqrd() <= step * step {
            self.loc = target;
            return true;
        }
        let dir = to.normalize();
        self.heading = dir.y.atan2(dir.x);
        self.loc += dir * step;
        // Exhaust trails out the back
        let tail = self.loc - dir * 26.0;
        self.exhaust.emit_spray(
            tail,
            self.heading + PI,
            0.35,
            3,
            120.0,
            0.6,
            Color::new(255, 170, 60),
            &mut self.rng,
        );
        false
    }

    pub fn update(&mut self, landing: Vec2, dt: f32) -> ShipEvent {
        self.exhaust.update(dt);
        match self.phase {
            ShipPhase::Docked => ShipEvent::None,
            ShipPhase::Arriving => {
                if self.fly_to(landing, dt) {
                    self.phase = ShipPhase::Landed {
                        remaining: SHIP_LANDED_SECS,
                    };
                    ShipEvent::Delivered
                } else {
                    ShipEvent::None
                }
            }
            ShipPhase::Landed { remaining } => {
                let remaining = remaining - dt;
                self.phase = if remaining <= 0.0 {
                    ShipPhase::Departing
                } else {
                    ShipPhase::Landed { remaining }
                };
                ShipEvent::None
            }
            ShipPhase::Departing => {
                let home = self.home;
                if self.fly_to(home, dt) {
                    self.phase = ShipPhase::Docked;
                    ShipEvent::Gone
                } else {
                    ShipEvent::None
                }
            }
        }
    }

    pub fn reset(&mut self) {
        self.loc = self.home;
        self.phase = ShipPhase::Docked;
        self.exhaust.clear();
    }

    pub fn render(&self, buffer: &mut PixelBuffer, camera: &Camera) {
        self.exhaust.render(buffer, camera);
        if !self.in_scene() {
            return;
        }
        let loc = camera.to_screen(self.loc, 1.0);
        // Hull is drawn axis-aligned; wide when flying sideways, tall otherwise
        let sideways = self.heading.cos().abs() > 0.7 || matches!(self.phase, ShipPhase::Landed { .. });
        let (rw, rh) = if sideways { (30.0, 14.0) } else { (14.0, 30.0) };
        buffer.draw_ellipse(loc, rw, rh, Color::new(210, 210, 220), 1.0);
        buffer.draw_ellipse(loc, rw * 0.4, rh * 0.4, Color::new(90, 160, 220), 1.0);
    }
}
