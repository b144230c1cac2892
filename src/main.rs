// Library-style APIs (accessors, test presenters) are not all reached from main
#![allow(dead_code)]

mod audio;
mod config;
mod display;
mod error;
mod game;
mod input;
mod logging;
mod math;
mod util;

use audio::LogAudio;
use config::{GameConfig, DEFAULT_CONFIG_PATH};
use display::{show_fatal_error, Display, Graphics, InputEvent, RenderTarget, Screen};
use error::DeviceError;
use game::Game;
use input::{InputState, KeyMap};
use sdl2::keyboard::Keycode;
use util::FrameClock;

const TITLE: &str = "stardome";

/// Command-line overrides, applied on top of the config file
#[derive(Debug, Default)]
struct Args {
    width: Option<u32>,
    height: Option<u32>,
    no_vsync: bool,
    seed: Option<u64>,
    config_path: Option<String>,
    save_config: bool,
}

fn print_help() {
    println!("Usage: stardome [OPTIONS]");
    println!();
    println!("Options:");
    println!(
        "  --width W, -w W           Set window width (default: {})",
        display::SCREEN_WIDTH
    );
    println!(
        "  --height H, -h H          Set window height (default: {})",
        display::SCREEN_HEIGHT
    );
    println!("  --resolution WxH, -r WxH  Set resolution (e.g., 1920x1080)");
    println!("  --no-vsync                Disable VSync for uncapped framerate");
    println!("  --seed N                  World seed");
    println!(
        "  --config PATH             Config file (default: {})",
        DEFAULT_CONFIG_PATH
    );
    println!("  --save-config             Write the effective config back to the config file");
    println!("  --help                    Show this help message");
}

/// Parse command line arguments
fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args::default();

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "--no-vsync" => parsed.no_vsync = true,
            "--save-config" => parsed.save_config = true,
            "--width" | "-w" => {
                if let Some(v) = value {
                    parsed.width = v.parse().ok();
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if let Some(v) = value {
                    parsed.height = v.parse().ok();
                    i += 1;
                }
            },
            "--resolution" | "-r" => {
                if let Some(v) = value {
                    // WxH, e.g. 1920x1080
                    if let Some((w, h)) = v.split_once('x') {
                        if let (Ok(w), Ok(h)) = (w.parse::<u32>(), h.parse::<u32>()) {
                            parsed.width = Some(w);
                            parsed.height = Some(h);
                        }
                    }
                    i += 1;
                }
            },
            "--seed" => {
                if let Some(v) = value {
                    parsed.seed = v.parse().ok();
                    i += 1;
                }
            },
            "--config" => {
                if let Some(v) = value {
                    parsed.config_path = Some(v.clone());
                    i += 1;
                }
            },
            "--help" => {
                print_help();
                std::process::exit(0);
            },
            other => eprintln!("ignoring unknown argument {}", other),
        }
        i += 1;
    }

    parsed
}

fn main() {
    let args = parse_args();
    let config_path = args
        .config_path
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let (mut config, config_warning) = GameConfig::load_or_default(&config_path);
    logging::init_logging(config.log_filter.as_deref());
    if let Some(warning) = config_warning {
        log::warn!("{}", warning);
    }

    if let Some(w) = args.width {
        config.width = w;
    }
    if let Some(h) = args.height {
        config.height = h;
    }
    if args.no_vsync {
        config.vsync = false;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.save_config {
        match config.save(&config_path) {
            Ok(()) => log::info!("config saved to {}", config_path),
            Err(e) => log::warn!("failed to save {}: {}", config_path, e),
        }
    }

    if let Err(e) = run(&config) {
        log::error!("{}", e);
        show_fatal_error(TITLE, &e.full_message());
        std::process::exit(1);
    }
}

fn run(config: &GameConfig) -> Result<(), DeviceError> {
    let (display, texture_creator, mut events) = Display::with_options(
        TITLE,
        config.width,
        config.height,
        config.vsync,
        config.linear_filtering,
    )?;
    let (width, height) = (display.width(), display.height());
    let target = RenderTarget::with_size(&texture_creator, width, height)?;
    let mut gfx = Graphics::new(Screen::new(display, target), width, height);

    let keymap = KeyMap::from_bindings(&config.keys);
    let mut input = InputState::new();
    let mut audio = LogAudio;
    let mut game = Game::new(config, width, height);

    // 60 sample rolling average
    let mut clock = FrameClock::new(60);
    let mut show_fps = false;

    log::info!("{} {}x{} seed {}", TITLE, width, height, config.seed);
    log::info!("F toggles the FPS overlay, Escape quits");

    'main: loop {
        let steps = clock.tick();

        for event in events.poll() {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Keycode::Escape) => break 'main,
                InputEvent::KeyDown(Keycode::F) => {
                    show_fps = !show_fps;
                    continue;
                },
                _ => {},
            }
            input.handle_event(&event, &keymap);
        }

        if show_fps {
            let (min_fps, max_fps) = clock.min_max_fps();
            game.set_overlay(Some(format!(
                "FPS {} AVG  {} MIN  {} MAX  {}MS",
                clock.avg_fps() as u32,
                min_fps as u32,
                max_fps as u32,
                clock.avg_frame_time_ms() as u32
            )));
        } else {
            game.set_overlay(None);
        }

        game.go(&mut gfx, &mut input, &mut audio, steps)?;

        if game.quit_requested() {
            break;
        }
    }

    log::info!("exiting after {} frames", gfx.frames_presented());
    Ok(())
}
