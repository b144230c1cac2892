//! Game orchestration
//!
//! [`Game`] owns every entity and the state machine. The main loop calls
//! [`Game::go`] once per presented frame with the number of fixed model steps
//! the clock wants; everything else happens in here.

mod camera;
mod particles;
mod player;
mod sky;
mod state;
mod world;

use std::f32::consts::TAU;

use camera::Camera;
use particles::ParticleSystem;
use player::{DeathCause, Player, ShipEvent, Spaceship, HARVEST_FOOD};
use sky::Sky;
use world::{Surface, WORLD_RADIUS};

pub use state::GameState;
use state::{Menu, Transition, Trigger};

use crate::audio::{Audio, Jukebox, SoundLoop};
use crate::config::GameConfig;
use crate::display::{draw_text, draw_text_centered, text_width, Color, Frame, Graphics, PixelBuffer, Present, GLYPH_HEIGHT};
use crate::error::DeviceError;
use crate::input::{Button, InputState};
use crate::math::Vec2;
use crate::util::{Rng, TICKS_PER_SECOND};

/// Seconds per model step
const STEP: f32 = 1.0 / TICKS_PER_SECOND as f32;

/// Harvests between supply runs
const HARVESTS_PER_LEVEL: u32 = 3;

const FADE_IN_FRAMES: u32 = 180;
const FADE_OUT_FRAMES: u32 = 60;

/// Full-screen fade to or from black, counted in model steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fade {
    Idle,
    In { frame: u32 },
    Out { frame: u32 },
}

impl Fade {
    /// Advance one step. Returns true on the step a fade-out finishes.
    fn step(&mut self) -> bool {
        match *self {
            Fade::Idle => false,
            Fade::In { frame } => {
                *self = if frame + 1 >= FADE_IN_FRAMES {
                    Fade::Idle
                } else {
                    Fade::In { frame: frame + 1 }
                };
                false
            }
            Fade::Out { frame } => {
                if frame + 1 >= FADE_OUT_FRAMES {
                    *self = Fade::Idle;
                    true
                } else {
                    *self = Fade::Out { frame: frame + 1 };
                    false
                }
            }
        }
    }

    /// Opacity of the black overlay
    fn overlay_alpha(&self) -> f32 {
        match *self {
            Fade::Idle => 0.0,
            Fade::In { frame } => 1.0 - frame as f32 / FADE_IN_FRAMES as f32,
            Fade::Out { frame } => frame as f32 / FADE_OUT_FRAMES as f32,
        }
    }
}

pub struct Game {
    state: GameState,
    menu: Menu,
    seed: u64,
    star_count: usize,
    surface: Surface,
    sky: Sky,
    player: Player,
    ship: Spaceship,
    debris: ParticleSystem,
    camera: Camera,
    jukebox: Jukebox,
    chopping: SoundLoop,
    fade: Fade,
    harvests: u32,
    level: u32,
    death: Option<DeathCause>,
    quit_requested: bool,
    rng: Rng,
    overlay: Option<String>,
}

impl Game {
    pub fn new(config: &GameConfig, width: u32, height: u32) -> Self {
        let camera = Camera::new(width, height);
        let surface = Surface::generate(config.seed);
        let player = Player::new(surface.spawn_point());
        let mut game = Self {
            state: GameState::StartScreen,
            menu: Menu::default(),
            seed: config.seed,
            star_count: config.star_count,
            sky: Sky::generate(config.seed, config.star_count, camera.screen_size()),
            ship: Spaceship::new(Vec2::new(0.0, -(WORLD_RADIUS + 400.0)), config.seed),
            surface,
            player,
            debris: ParticleSystem::new().with_drag(3.0),
            camera,
            jukebox: Jukebox::new(&config.audio),
            chopping: SoundLoop::new(config.audio.chopping_sound.clone()),
            fade: Fade::In { frame: 0 },
            harvests: 0,
            level: 1,
            death: None,
            quit_requested: false,
            rng: Rng::new(config.seed.wrapping_add(1)),
            overlay: None,
        };
        game.reset_world();
        game
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Text drawn in the bottom-left corner over everything else
    pub fn set_overlay(&mut self, text: Option<String>) {
        self.overlay = text;
    }

    /// Run `steps` model updates and present one frame
    pub fn go<P: Present>(
        &mut self,
        gfx: &mut Graphics<P>,
        input: &mut InputState,
        audio: &mut dyn Audio,
        steps: u32,
    ) -> Result<(), DeviceError> {
        let mut frame: Frame<'_, P> = gfx.begin_frame();
        for _ in 0..steps {
            self.update_model(input, audio);
            input.end_tick();
        }
        self.compose_frame(&mut frame);
        frame.end()
    }

    /// Advance the whole game by one fixed step
    pub fn update_model(&mut self, input: &InputState, audio: &mut dyn Audio) {
        self.jukebox.update(STEP, audio);
        self.sky.update(STEP);

        if self.fade.step() {
            self.apply(Trigger::FadeOutComplete);
        }

        match self.state {
            GameState::StartScreen | GameState::GameOver => {
                if input.was_pressed(Button::Action) {
                    self.apply(Trigger::Action(None));
                }
            }
            GameState::StartMenu => {
                if input.was_pressed(Button::Left) {
                    self.change_seed(self.seed.wrapping_sub(1));
                } else if input.was_pressed(Button::Right) {
                    self.change_seed(self.seed.wrapping_add(1));
                }
                self.navigate_menu(input);
            }
            GameState::InGameMenu | GameState::RestartMenu => {
                if input.was_pressed(Button::Pause) {
                    self.apply(Trigger::Pause);
                } else {
                    self.navigate_menu(input);
                }
            }
            GameState::Running => {
                if input.was_pressed(Button::Pause) {
                    self.apply(Trigger::Pause);
                } else if input.was_pressed(Button::Restart) {
                    self.apply(Trigger::Restart);
                } else {
                    self.simulate(input, audio);
                }
            }
            GameState::Restarting => {}
        }

        if !self.state.simulates() {
            self.chopping.set(false, audio);
        }
        self.debris.update(STEP);
        self.camera.follow(self.player.loc, STEP);
    }

    fn navigate_menu(&mut self, input: &InputState) {
        let options = self.state.menu_options();
        if input.was_pressed(Button::Up) {
            self.menu.up(options.len());
        }
        if input.was_pressed(Button::Down) {
            self.menu.down(options.len());
        }
        if input.was_pressed(Button::Action) {
            self.apply(Trigger::Action(self.menu.selected(options)));
        }
    }

    fn apply(&mut self, trigger: Trigger) {
        match self.state.next(trigger) {
            Transition::Stay => {}
            Transition::Quit => {
                log::info!("quit requested from {:?}", self.state);
                self.quit_requested = true;
            }
            Transition::Enter(next) => self.enter(next),
        }
    }

    fn enter(&mut self, next: GameState) {
        log::info!("state {:?} -> {:?}", self.state, next);
        let prev = self.state;
        self.state = next;

        match (prev, next) {
            (GameState::StartMenu, GameState::Running) => self.reset_world(),
            (GameState::Restarting, GameState::Running) => {
                self.reset_world();
                self.fade = Fade::In { frame: 0 };
            }
            (_, GameState::Restarting) => self.fade = Fade::Out { frame: 0 },
            (_, GameState::GameOver) => {
                if let Some(cause) = self.death {
                    log::info!("game over: {:?} after {} harvests", cause, self.harvests);
                }
            }
            _ => {}
        }

        if !next.menu_options().is_empty() {
            self.menu.reset();
        }
    }

    fn change_seed(&mut self, seed: u64) {
        self.seed = seed;
        log::info!("world seed {}", seed);
        self.reset_world();
    }

    /// Fresh world, player and ship from the current seed
    fn reset_world(&mut self) {
        self.surface = Surface::generate(self.seed);
        self.sky = Sky::generate(self.seed, self.star_count, self.camera.screen_size());
        self.player = Player::new(self.surface.spawn_point());
        self.ship.reset();
        self.debris.clear();
        self.harvests = 0;
        self.level = 1;
        self.death = None;
        self.camera.center_on(self.player.loc);
    }

    fn landing_site(&self) -> Vec2 {
        self.surface.dome.loc + Vec2::new(0.0, self.surface.dome.radius * 0.55)
    }

    fn simulate(&mut self, input: &InputState, audio: &mut dyn Audio) {
        let landing = self.landing_site();

        // Supply run: the world holds still while the ship does its thing
        if self.ship.in_scene() {
            self.chopping.set(false, audio);
            match self.ship.update(landing, STEP) {
                ShipEvent::Delivered => {
                    let grew = self.surface.dome.expand();
                    self.surface.seed_plant();
                    log::info!(
                        "level {}: dome radius {:.0}{}, {} plants",
                        self.level,
                        self.surface.dome.radius,
                        if grew { "" } else { " (max)" },
                        self.surface.plants.len()
                    );
                }
                ShipEvent::Gone => log::debug!("supply ship departed"),
                ShipEvent::None => {}
            }
            return;
        }
        self.ship.update(landing, STEP);

        self.player.steer(input.direction(), STEP);
        self.player.loc = self.surface.world.confine(self.player.loc, self.player.radius);
        let in_dome = self.surface.dome.contains(self.player.loc);
        self.player.breathe(in_dome, STEP);
        self.surface.update(STEP);

        let target = if input.is_held(Button::Action) {
            self.surface.ripe_plant_near(self.player.loc, self.player.radius)
        } else {
            None
        };
        self.chopping.set(target.is_some(), audio);
        if let Some(i) = target {
            if self.surface.plants[i].chop(STEP) {
                let loc = self.surface.plants[i].loc;
                self.harvest(loc);
                self.chopping.set(false, audio);
            }
        }

        if let Some(cause) = self.player.death() {
            self.death = Some(cause);
            self.apply(Trigger::PlayerDied);
        }
    }

    fn harvest(&mut self, loc: Vec2) {
        self.player.eat(HARVEST_FOOD);
        self.harvests += 1;
        let count = self.rng.range_i32(10, 16) as usize;
        self.debris
            .emit_spray(loc, 0.0, TAU, count, 90.0, 0.8, Color::new(120, 200, 70), &mut self.rng);
        log::debug!("harvest {} at {:?}", self.harvests, loc);

        if self.harvests % HARVESTS_PER_LEVEL == 0 {
            self.level += 1;
            log::info!("level up: {}", self.level);
            self.ship.launch();
        }
    }

    /// Paint the current state into `buffer`, back to front
    pub fn compose_frame(&self, buffer: &mut PixelBuffer) {
        self.sky.render(buffer, &self.camera);
        self.surface.render_ground(buffer, &self.camera);
        self.player.render(buffer, &self.camera);
        self.surface.render_glass(buffer, &self.camera);
        self.ship.render(buffer, &self.camera);
        self.debris.render(buffer, &self.camera);

        let scale = (buffer.height() / 150).max(2);
        match self.state {
            GameState::StartScreen => {
                let y = buffer.height() as i32 / 3;
                draw_text_centered(buffer, y, scale * 2, "STARDOME", Color::WHITE, 1.0);
                let y = y + (GLYPH_HEIGHT * scale * 4) as i32;
                draw_text_centered(buffer, y, scale, "PRESS ACTION", Color::LIGHT_GRAY, 1.0);
            }
            GameState::StartMenu => {
                self.render_menu(buffer, "STARDOME", scale);
                let seed = format!("< SEED {} >", self.seed);
                let y = buffer.height() as i32 * 3 / 4;
                draw_text_centered(buffer, y, scale, &seed, Color::GRAY, 1.0);
            }
            GameState::Running | GameState::Restarting => self.render_hud(buffer, scale),
            GameState::InGameMenu => {
                self.render_hud(buffer, scale);
                self.render_menu(buffer, "PAUSED", scale);
            }
            GameState::RestartMenu => {
                self.render_hud(buffer, scale);
                self.render_menu(buffer, "RESTART", scale);
            }
            GameState::GameOver => {
                buffer.fill(Color::BLACK, 0.5);
                let y = buffer.height() as i32 / 3;
                draw_text_centered(buffer, y, scale * 2, "GAME OVER", Color::RED, 1.0);
                let y = y + (GLYPH_HEIGHT * scale * 4) as i32;
                if let Some(cause) = self.death {
                    draw_text_centered(buffer, y, scale, cause.message(), Color::WHITE, 1.0);
                }
                let summary = format!("HARVESTS {}  LEVEL {}", self.harvests, self.level);
                let y = y + (GLYPH_HEIGHT * scale * 2) as i32;
                draw_text_centered(buffer, y, scale, &summary, Color::LIGHT_GRAY, 1.0);
            }
        }

        let fade = self.fade.overlay_alpha();
        if fade > 0.0 {
            buffer.fill(Color::BLACK, fade);
        }

        if let Some(text) = &self.overlay {
            let y = buffer.height() as i32 - 12;
            draw_text(buffer, 5, y + 1, 1, text, Color::BLACK, 1.0);
            draw_text(buffer, 4, y, 1, text, Color::YELLOW, 1.0);
        }
    }

    fn render_hud(&self, buffer: &mut PixelBuffer, scale: u32) {
        let bar_length = 40 * scale as i32;
        let bar_height = (GLYPH_HEIGHT * scale) as i32;
        let label_width = text_width("FOOD", scale) as i32 + 2 * scale as i32;
        let meters = [
            ("O2", self.player.oxygen, Color::CYAN),
            ("FOOD", self.player.food, Color::GREEN),
        ];
        for (i, (label, value, color)) in meters.into_iter().enumerate() {
            let y = 10 + i as i32 * (bar_height + 2 * scale as i32);
            draw_text(buffer, 10, y, scale, label, Color::WHITE, 1.0);
            let bar = Vec2::new((10 + label_width) as f32, y as f32);
            buffer.draw_rect(bar, bar_length, bar_height, Color::GRAY, 0.5);
            let filled = (bar_length as f32 * value.clamp(0.0, 1.0)) as i32;
            // Dim the bar when it runs low
            let alpha = if value < 0.25 { 0.6 } else { 1.0 };
            buffer.draw_rect(bar, filled, bar_height, color, alpha);
        }

        let status = format!("LEVEL {}  HARVESTS {}", self.level, self.harvests);
        let x = buffer.width() as i32 - text_width(&status, scale) as i32 - 10;
        draw_text(buffer, x, 10, scale, &status, Color::WHITE, 1.0);
    }

    fn render_menu(&self, buffer: &mut PixelBuffer, title: &str, scale: u32) {
        buffer.fill(Color::BLACK, 0.5);
        let line = (GLYPH_HEIGHT * scale * 2) as i32;
        let mut y = buffer.height() as i32 / 3;
        draw_text_centered(buffer, y, scale * 2, title, Color::WHITE, 1.0);
        y += line * 2;
        for (i, option) in self.state.menu_options().iter().enumerate() {
            let (text, color) = if i == self.menu.index() {
                (format!("> {} <", option.label()), Color::YELLOW)
            } else {
                (option.label().to_string(), Color::LIGHT_GRAY)
            };
            draw_text_centered(buffer, y, scale, &text, color, 1.0);
            y += line;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::tests::RecordingAudio;
    use crate::display::Headless;
    use crate::error::DeviceFailure;

    fn game() -> Game {
        Game::new(&GameConfig::default(), 320, 200)
    }

    fn step(game: &mut Game, input: &mut InputState, audio: &mut RecordingAudio) {
        game.update_model(input, audio);
        input.end_tick();
    }

    /// Tap a button for one step
    fn tap(game: &mut Game, input: &mut InputState, audio: &mut RecordingAudio, button: Button) {
        input.press(button);
        step(game, input, audio);
        input.release(button);
    }

    fn start(game: &mut Game, input: &mut InputState, audio: &mut RecordingAudio) {
        tap(game, input, audio, Button::Action);
        assert_eq!(game.state(), GameState::StartMenu);
        tap(game, input, audio, Button::Action);
        assert_eq!(game.state(), GameState::Running);
    }

    #[test]
    fn test_start_screen_to_running() {
        let mut game = game();
        let mut input = InputState::new();
        let mut audio = RecordingAudio::default();
        assert_eq!(game.state(), GameState::StartScreen);
        step(&mut game, &mut input, &mut audio);
        assert_eq!(game.state(), GameState::StartScreen);
        start(&mut game, &mut input, &mut audio);
        assert!(audio.count("play") >= 1);
    }

    #[test]
    fn test_quit_from_start_menu() {
        let mut game = game();
        let mut input = InputState::new();
        let mut audio = RecordingAudio::default();
        tap(&mut game, &mut input, &mut audio, Button::Action);
        tap(&mut game, &mut input, &mut audio, Button::Down);
        assert!(!game.quit_requested());
        tap(&mut game, &mut input, &mut audio, Button::Action);
        assert!(game.quit_requested());
    }

    #[test]
    fn test_seed_selection_regenerates_world() {
        let mut game = game();
        let mut input = InputState::new();
        let mut audio = RecordingAudio::default();
        tap(&mut game, &mut input, &mut audio, Button::Action);
        let seed = game.seed();
        let before: Vec<_> = game.surface.plants.iter().map(|p| p.loc).collect();
        tap(&mut game, &mut input, &mut audio, Button::Right);
        assert_eq!(game.seed(), seed + 1);
        let after: Vec<_> = game.surface.plants.iter().map(|p| p.loc).collect();
        assert_ne!(before, after);
        tap(&mut game, &mut input, &mut audio, Button::Left);
        assert_eq!(game.seed(), seed);
        assert_eq!(game.state(), GameState::StartMenu);
    }

    #[test]
    fn test_pause_freezes_simulation() {
        let mut game = game();
        let mut input = InputState::new();
        let mut audio = RecordingAudio::default();
        start(&mut game, &mut input, &mut audio);

        tap(&mut game, &mut input, &mut audio, Button::Pause);
        assert_eq!(game.state(), GameState::InGameMenu);
        let food = game.player.food;
        for _ in 0..120 {
            step(&mut game, &mut input, &mut audio);
        }
        assert_eq!(game.player.food, food);

        tap(&mut game, &mut input, &mut audio, Button::Pause);
        assert_eq!(game.state(), GameState::Running);
        step(&mut game, &mut input, &mut audio);
        assert!(game.player.food < food);

        // Resume through the menu as well
        tap(&mut game, &mut input, &mut audio, Button::Pause);
        tap(&mut game, &mut input, &mut audio, Button::Action);
        assert_eq!(game.state(), GameState::Running);
    }

    #[test]
    fn test_restart_fades_out_and_resets() {
        let mut game = game();
        let mut input = InputState::new();
        let mut audio = RecordingAudio::default();
        start(&mut game, &mut input, &mut audio);
        game.player.food = 0.4;
        game.harvests = 2;

        tap(&mut game, &mut input, &mut audio, Button::Restart);
        assert_eq!(game.state(), GameState::RestartMenu);
        // Cancel is second
        tap(&mut game, &mut input, &mut audio, Button::Down);
        tap(&mut game, &mut input, &mut audio, Button::Action);
        assert_eq!(game.state(), GameState::Running);

        tap(&mut game, &mut input, &mut audio, Button::Restart);
        tap(&mut game, &mut input, &mut audio, Button::Action);
        assert_eq!(game.state(), GameState::Restarting);
        for _ in 0..FADE_OUT_FRAMES {
            step(&mut game, &mut input, &mut audio);
        }
        assert_eq!(game.state(), GameState::Running);
        assert!(game.player.food > 0.99);
        assert_eq!(game.harvests, 0);
        assert_eq!(game.fade, Fade::In { frame: 0 });
    }

    #[test]
    fn test_running_out_of_air_ends_the_run() {
        let mut game = game();
        let mut input = InputState::new();
        let mut audio = RecordingAudio::default();
        start(&mut game, &mut input, &mut audio);

        // Outside the dome nothing refills it
        game.player.loc = Vec2::new(0.0, 700.0);
        game.player.oxygen = 0.0;
        step(&mut game, &mut input, &mut audio);
        assert_eq!(game.state(), GameState::GameOver);
        assert_eq!(game.death, Some(DeathCause::Suffocated));

        tap(&mut game, &mut input, &mut audio, Button::Action);
        assert_eq!(game.state(), GameState::Restarting);
    }

    #[test]
    fn test_walking_outside_drains_oxygen() {
        let mut game = game();
        let mut input = InputState::new();
        let mut audio = RecordingAudio::default();
        start(&mut game, &mut input, &mut audio);

        game.player.loc = Vec2::new(0.0, 700.0);
        step(&mut game, &mut input, &mut audio);
        assert!(game.player.oxygen < 1.0);

        // Can't walk off the planet
        game.player.loc = Vec2::new(0.0, 5000.0);
        step(&mut game, &mut input, &mut audio);
        assert!(game.player.loc.magnitude() <= WORLD_RADIUS);
    }

    #[test]
    fn test_chopping_a_ripe_plant() {
        let mut game = game();
        let mut input = InputState::new();
        let mut audio = RecordingAudio::default();
        start(&mut game, &mut input, &mut audio);

        game.surface.plants[0].growth = 1.0;
        game.player.loc = game.surface.plants[0].loc;
        game.player.food = 0.5;

        input.press(Button::Action);
        for _ in 0..80 {
            step(&mut game, &mut input, &mut audio);
        }
        input.release(Button::Action);

        assert_eq!(game.harvests, 1);
        assert!(game.player.food > 0.8);
        assert!(!game.surface.plants[0].is_ripe());
        assert!(game.debris.count() > 0);
        assert_eq!(audio.count("play chopping.wav"), 1);
        assert_eq!(audio.count("stop chopping.wav"), 1);
    }

    #[test]
    fn test_third_harvest_brings_the_ship() {
        let mut game = game();
        let mut input = InputState::new();
        let mut audio = RecordingAudio::default();
        start(&mut game, &mut input, &mut audio);

        let radius = game.surface.dome.radius;
        let plants = game.surface.plants.len();
        game.harvests = HARVESTS_PER_LEVEL - 1;
        game.harvest(game.player.loc);
        assert_eq!(game.level, 2);
        assert!(game.ship.in_scene());

        // Survival meters hold during the scene
        let oxygen = game.player.oxygen;
        let food = game.player.food;
        step(&mut game, &mut input, &mut audio);
        assert_eq!(game.player.food, food);
        assert_eq!(game.player.oxygen, oxygen);

        for _ in 0..(60 * 15) {
            step(&mut game, &mut input, &mut audio);
        }
        assert!(!game.ship.in_scene());
        assert!(game.surface.dome.radius > radius);
        assert_eq!(game.surface.plants.len(), plants + 1);
    }

    #[test]
    fn test_fade_in_starts_black_and_clears() {
        let mut game = game();
        let mut gfx = Graphics::new(Headless::default(), 320, 200);
        let mut input = InputState::new();
        let mut audio = RecordingAudio::default();

        game.go(&mut gfx, &mut input, &mut audio, 0).unwrap();
        let frame = gfx.presenter().last_frame.clone().unwrap();
        assert!(frame.chunks_exact(4).all(|p| p[1..] == [0, 0, 0]));

        for _ in 0..(FADE_IN_FRAMES / 5) {
            game.go(&mut gfx, &mut input, &mut audio, 5).unwrap();
        }
        assert_eq!(game.fade, Fade::Idle);
        let frame = gfx.presenter().last_frame.clone().unwrap();
        assert!(frame.chunks_exact(4).any(|p| p[1..] != [0, 0, 0]));
        assert_eq!(gfx.frames_presented(), 1 + u64::from(FADE_IN_FRAMES / 5));
    }

    #[test]
    fn test_go_consumes_edges_and_reports_device_errors() {
        let mut game = game();
        let mut gfx = Graphics::new(Headless::default(), 320, 200);
        let mut input = InputState::new();
        let mut audio = RecordingAudio::default();

        input.press(Button::Action);
        game.go(&mut gfx, &mut input, &mut audio, 3).unwrap();
        // One press, one transition, however many steps ran
        assert_eq!(game.state(), GameState::StartMenu);
        assert!(!input.was_pressed(Button::Action));

        gfx = Graphics::new(
            Headless {
                last_frame: None,
                fail_with: Some(DeviceError::new(DeviceFailure::TextureUpload, "lost", file!(), line!())),
            },
            320,
            200,
        );
        let err = game.go(&mut gfx, &mut input, &mut audio, 1).unwrap_err();
        assert_eq!(err.failure, DeviceFailure::TextureUpload);
        assert_eq!(gfx.frames_presented(), 0);
    }

    #[test]
    fn test_every_state_composes() {
        let mut game = game();
        game.fade = Fade::Idle;
        game.set_overlay(Some("FPS 60".to_string()));
        for state in [
            GameState::StartScreen,
            GameState::StartMenu,
            GameState::Running,
            GameState::InGameMenu,
            GameState::RestartMenu,
            GameState::Restarting,
            GameState::GameOver,
        ] {
            game.state = state;
            game.death = Some(DeathCause::Starved);
            let mut buffer = PixelBuffer::with_size(320, 200);
            game.compose_frame(&mut buffer);
            assert!(buffer.as_bytes().chunks_exact(4).any(|p| p[1..] != [0, 0, 0]));
        }
    }
}
