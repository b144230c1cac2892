//! Shared utilities: deterministic RNG and the fixed-step frame clock

use std::collections::VecDeque;
use std::time::Instant;

use crate::display::Color;

/// Simple deterministic RNG using xorshift64.
/// World generation runs off this so a seed always yields the same layout.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) } // xorshift is stuck at zero
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Get a random f32 in [0, 1)
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() & 0xFFFFFF) as f32 / 0x1000000 as f32
    }

    /// Get a random f32 in [min, max)
    #[inline]
    pub fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Get a random i32 in [min, max]
    ///
    /// # Panics
    /// Panics in debug builds if `min > max`
    #[inline]
    pub fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max, "range_i32: min ({}) must be <= max ({})", min, max);
        if min >= max {
            return min;
        }
        let range = (i64::from(max) - i64::from(min) + 1) as u64;
        (i64::from(min) + (self.next_u64() % range) as i64) as i32
    }
}

/// Linear interpolation between two colors, `t` clamped to [0, 1]
#[inline]
pub fn lerp_color(c1: Color, c2: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color::new(
        (c1.r as f32 + (c2.r as f32 - c1.r as f32) * t) as u8,
        (c1.g as f32 + (c2.g as f32 - c1.g as f32) * t) as u8,
        (c1.b as f32 + (c2.b as f32 - c1.b as f32) * t) as u8,
    )
}

// ============================================================================
// Frame Clock
// ============================================================================

/// Simulation rate of the game model
pub const TICKS_PER_SECOND: u32 = 60;

/// Upper bound on model steps per presented frame, so a long stall
/// (window drag, breakpoint) doesn't snowball into ever longer frames.
pub const MAX_STEPS_PER_FRAME: u32 = 5;

/// Fixed-timestep clock with a rolling frame-time window for FPS stats
pub struct FrameClock {
    frame_times: VecDeque<f32>,
    last_frame: Instant,
    sample_count: usize,
    accumulator: f32,
    step: f32,
}

impl FrameClock {
    /// Create a 60 Hz clock averaging over `sample_count` frames
    pub fn new(sample_count: usize) -> Self {
        Self {
            frame_times: VecDeque::with_capacity(sample_count),
            last_frame: Instant::now(),
            sample_count,
            accumulator: 0.0,
            step: 1.0 / TICKS_PER_SECOND as f32,
        }
    }

    /// Seconds per model step
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Measure wall time since the last call and return how many model steps to run
    pub fn tick(&mut self) -> u32 {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.advance(dt)
    }

    /// Feed `dt` seconds into the accumulator and return the number of whole
    /// steps now due. Leftover time carries into the next frame.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.sample_count {
            self.frame_times.pop_front();
        }

        self.accumulator += dt.max(0.0);
        let mut steps = 0;
        while self.accumulator >= self.step && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= self.step;
            steps += 1;
        }
        if steps == MAX_STEPS_PER_FRAME {
            // Drop whatever backlog is left instead of replaying it later
            self.accumulator = self.accumulator.min(self.step);
        }
        steps
    }

    /// Average frames per second over the sample window
    pub fn avg_fps(&self) -> f32 {
        let avg_dt: f32 =
            self.frame_times.iter().sum::<f32>() / self.frame_times.len().max(1) as f32;
        if avg_dt > 0.0 {
            1.0 / avg_dt
        } else {
            0.0
        }
    }

    /// Get the average frame time in milliseconds
    pub fn avg_frame_time_ms(&self) -> f32 {
        let avg_dt: f32 =
            self.frame_times.iter().sum::<f32>() / self.frame_times.len().max(1) as f32;
        avg_dt * 1000.0
    }

    /// Get min/max FPS from sample window
    pub fn min_max_fps(&self) -> (f32, f32) {
        if self.frame_times.is_empty() {
            return (0.0, 0.0);
        }
        let min_dt = self
            .frame_times
            .iter()
            .copied()
            .fold(f32::INFINITY, f32::min);
        let max_dt = self.frame_times.iter().copied().fold(0.0, f32::max);
        let max_fps = if min_dt > 0.0 { 1.0 / min_dt } else { 0.0 };
        let min_fps = if max_dt > 0.0 { 1.0 / max_dt } else { 0.0 };
        (min_fps, max_fps)
    }
}
