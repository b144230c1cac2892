//! Keyboard → logical buttons, with per-tick edge detection
//!
//! The game only ever asks two questions: is a button held right now, and
//! was it pressed since the last model step. Key repeat is filtered out by
//! the display layer; a press only registers on the up → down edge.

use std::collections::HashMap;

use sdl2::keyboard::Keycode;

use crate::config::KeyBindings;
use crate::display::InputEvent;
use crate::math::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    Action,
    Pause,
    Restart,
}

impl Button {
    pub const ALL: [Button; 7] = [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::Action,
        Button::Pause,
        Button::Restart,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Resolved key bindings
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    keys: HashMap<Keycode, Button>,
}

impl KeyMap {
    /// Resolve SDL key names. Unknown names are skipped with a warning.
    pub fn from_bindings(bindings: &KeyBindings) -> Self {
        let mut map = Self::default();
        let groups: [(&[String], Button); 7] = [
            (&bindings.up, Button::Up),
            (&bindings.down, Button::Down),
            (&bindings.left, Button::Left),
            (&bindings.right, Button::Right),
            (&bindings.action, Button::Action),
            (&bindings.pause, Button::Pause),
            (&bindings.restart, Button::Restart),
        ];
        for (names, button) in groups {
            for name in names {
                match Keycode::from_name(name) {
                    Some(key) => map.bind(key, button),
                    None => log::warn!("unknown key name {:?} for {:?}", name, button),
                }
            }
        }
        map
    }

    pub fn bind(&mut self, key: Keycode, button: Button) {
        if let Some(previous) = self.keys.insert(key, button) {
            if previous != button {
                log::warn!("key {} rebound from {:?} to {:?}", key.name(), previous, button);
            }
        }
    }

    pub fn button(&self, key: Keycode) -> Option<Button> {
        self.keys.get(&key).copied()
    }
}

/// Button state as seen by the model
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: [bool; 7],
    pressed: [bool; 7],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, button: Button) {
        let i = button.index();
        if !self.held[i] {
            self.pressed[i] = true;
        }
        self.held[i] = true;
    }

    pub fn release(&mut self, button: Button) {
        self.held[button.index()] = false;
    }

    /// Apply a key event through the key map. Returns false for unbound keys.
    pub fn handle_event(&mut self, event: &InputEvent, keymap: &KeyMap) -> bool {
        match event {
            InputEvent::KeyDown(key) => keymap.button(*key).map_or(false, |b| {
                self.press(b);
                true
            }),
            InputEvent::KeyUp(key) => keymap.button(*key).map_or(false, |b| {
                self.release(b);
                true
            }),
            InputEvent::Quit => false,
        }
    }

    #[inline]
    pub fn is_held(&self, button: Button) -> bool {
        self.held[button.index()]
    }

    /// Pressed since the last `end_tick`
    #[inline]
    pub fn was_pressed(&self, button: Button) -> bool {
        self.pressed[button.index()]
    }

    /// Forget this tick's edges; held state persists
    pub fn end_tick(&mut self) {
        self.pressed = [false; 7];
    }

    /// Unit-ish movement direction from the held arrow buttons
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.is_held(Button::Left) {
            dir.x -= 1.0;
        }
        if self.is_held(Button::Right) {
            dir.x += 1.0;
        }
        if self.is_held(Button::Up) {
            dir.y -= 1.0;
        }
        if self.is_held(Button::Down) {
            dir.y += 1.0;
        }
        dir.normalize()
    }
}
