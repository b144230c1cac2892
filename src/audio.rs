//! Audio collaborator and music sequencing
//!
//! Mixing is out of scope: the game talks to an [`Audio`] implementation by
//! track name. [`Jukebox`] decides *what* plays and how loud; the backend
//! decides how.

use crate::config::{AudioConfig, TrackConfig};

/// Named-track audio service. Failures stay inside the implementation.
pub trait Audio {
    fn play(&mut self, track: &str);
    fn stop(&mut self, track: &str);
    fn set_volume(&mut self, track: &str, volume: f32);
}

/// Backend that only reports what it was asked to do
#[derive(Debug, Default)]
pub struct LogAudio;

impl Audio for LogAudio {
    fn play(&mut self, track: &str) {
        log::debug!("audio: play {}", track);
    }

    fn stop(&mut self, track: &str) {
        log::debug!("audio: stop {}", track);
    }

    fn set_volume(&mut self, track: &str, volume: f32) {
        log::trace!("audio: volume {} = {:.3}", track, volume);
    }
}

/// Smallest volume change worth sending to the backend
const VOLUME_EPSILON: f32 = 0.001;

/// Plays the configured music tracks back to back, looping the playlist,
/// while the master volume ramps up to its ceiling.
#[derive(Debug, Clone)]
pub struct Jukebox {
    tracks: Vec<TrackConfig>,
    current: usize,
    timer: f32,
    master_volume: f32,
    max_master_volume: f32,
    ramp_per_sec: f32,
    playing: bool,
    last_volume: Option<f32>,
}

impl Jukebox {
    pub fn new(config: &AudioConfig) -> Self {
        Self {
            tracks: config
                .tracks
                .iter()
                .filter(|t| t.length_secs > 0.0)
                .cloned()
                .collect(),
            current: 0,
            timer: 0.0,
            master_volume: config.initial_master_volume,
            max_master_volume: config.max_master_volume,
            ramp_per_sec: config.master_volume_ramp,
            playing: false,
            last_volume: None,
        }
    }

    pub fn current_track(&self) -> Option<&str> {
        self.tracks.get(self.current).map(|t| t.name.as_str())
    }

    pub fn master_volume(&self) -> f32 {
        self.master_volume
    }

    /// Seconds into the current track
    pub fn position(&self) -> f32 {
        self.timer
    }

    /// Advance track timers by `dt` seconds
    pub fn update(&mut self, dt: f32, audio: &mut dyn Audio) {
        if self.tracks.is_empty() {
            return;
        }

        if !self.playing {
            audio.play(&self.tracks[self.current].name);
            self.playing = true;
            self.last_volume = None;
        }

        if self.master_volume < self.max_master_volume {
            self.master_volume =
                (self.master_volume + self.ramp_per_sec * dt).min(self.max_master_volume);
        }

        self.timer += dt;
        let length = self.tracks[self.current].length_secs;
        if self.timer >= length {
            audio.stop(&self.tracks[self.current].name);
            self.timer -= length;
            self.current = (self.current + 1) % self.tracks.len();
            log::info!("music: now playing {}", self.tracks[self.current].name);
            audio.play(&self.tracks[self.current].name);
            self.last_volume = None;
        }

        let track = &self.tracks[self.current];
        let volume = self.master_volume * track.max_volume;
        if self
            .last_volume
            .map_or(true, |v| (v - volume).abs() >= VOLUME_EPSILON)
        {
            audio.set_volume(&track.name, volume);
            self.last_volume = Some(volume);
        }
    }

    pub fn stop(&mut self, audio: &mut dyn Audio) {
        if self.playing {
            if let Some(track) = self.tracks.get(self.current) {
                audio.stop(&track.name);
            }
            self.playing = false;
        }
    }
}

/// A looping sound effect that is switched on and off by game state
#[derive(Debug, Clone)]
pub struct SoundLoop {
    name: String,
    on: bool,
}

impl SoundLoop {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on: false,
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Start or stop the loop; the backend only hears about changes
    pub fn set(&mut self, on: bool, audio: &mut dyn Audio) {
        if on == self.on {
            return;
        }
        self.on = on;
        if on {
            audio.play(&self.name);
        } else {
            audio.stop(&self.name);
        }
    }
}
