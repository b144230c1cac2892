mod color;
mod font;
mod graphics;
mod pixel_buffer;
mod shapes;

pub use color::Color;
pub use font::{draw_text, draw_text_centered, text_width, GLYPH_HEIGHT, GLYPH_WIDTH};
pub use graphics::{Frame, Graphics, Headless, Present};
pub use pixel_buffer::PixelBuffer;
pub use shapes::gradient_alpha;

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;

use crate::device_error;
use crate::error::{DeviceError, DeviceFailure};

/// Reference resolution of the system buffer
pub const SCREEN_WIDTH: u32 = 1600;
pub const SCREEN_HEIGHT: u32 = 900;

/// Window and renderer
pub struct Display {
    canvas: Canvas<Window>,
    width: u32,
    height: u32,
}

/// Streaming texture the system buffer is uploaded into each frame
pub struct RenderTarget<'a> {
    texture: Texture<'a>,
    width: u32,
    height: u32,
}

/// Window event source, kept apart from the renderer so the loop can poll
/// while `Graphics` holds the display
pub struct Events {
    event_pump: EventPump,
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Quit,
    KeyDown(Keycode),
    KeyUp(Keycode),
}

impl Display {
    /// Create window, renderer and event source.
    ///
    /// `linear_filtering = false` selects point sampling when the frame
    /// texture is stretched onto the window.
    pub fn with_options(
        title: &str,
        width: u32,
        height: u32,
        vsync: bool,
        linear_filtering: bool,
    ) -> Result<(Self, TextureCreator<WindowContext>, Events), DeviceError> {
        let sdl_context =
            sdl2::init().map_err(|e| device_error!(DeviceFailure::Init, e))?;
        let video_subsystem = sdl_context
            .video()
            .map_err(|e| device_error!(DeviceFailure::Init, e))?;

        let quality = if linear_filtering { "1" } else { "0" };
        if !sdl2::hint::set("SDL_RENDER_SCALE_QUALITY", quality) {
            log::warn!("renderer ignored scale quality hint {}", quality);
        }

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| device_error!(DeviceFailure::Window, e.to_string()))?;

        let mut canvas_builder = window.into_canvas().accelerated();
        if vsync {
            canvas_builder = canvas_builder.present_vsync();
        }
        let canvas = canvas_builder
            .build()
            .map_err(|e| device_error!(DeviceFailure::Renderer, e.to_string()))?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context
            .event_pump()
            .map_err(|e| device_error!(DeviceFailure::Init, e))?;

        log::info!(
            "display {}x{} vsync={} filtering={}",
            width,
            height,
            vsync,
            if linear_filtering { "linear" } else { "point" }
        );

        Ok((
            Self {
                canvas,
                width,
                height,
            },
            texture_creator,
            Events { event_pump },
        ))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl<'a> RenderTarget<'a> {
    pub fn with_size(
        texture_creator: &'a TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Self, DeviceError> {
        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::RGBA8888, width, height)
            .map_err(|e| device_error!(DeviceFailure::TextureCreate, e.to_string()))?;
        Ok(Self {
            texture,
            width,
            height,
        })
    }
}

/// Presenter backed by an SDL renderer.
///
/// Field order is teardown order: the texture goes before the renderer that
/// created it.
pub struct Screen<'a> {
    target: RenderTarget<'a>,
    display: Display,
}

impl<'a> Screen<'a> {
    pub fn new(display: Display, target: RenderTarget<'a>) -> Self {
        Self { target, display }
    }
}

impl Present for Screen<'_> {
    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), DeviceError> {
        if buffer.width() != self.target.width || buffer.height() != self.target.height {
            return Err(device_error!(
                DeviceFailure::TextureUpload,
                format!(
                    "buffer is {}x{} but frame texture is {}x{}",
                    buffer.width(),
                    buffer.height(),
                    self.target.width,
                    self.target.height
                )
            ));
        }

        self.target
            .texture
            .update(None, buffer.as_bytes(), buffer.pitch())
            .map_err(|e| device_error!(DeviceFailure::TextureUpload, e.to_string()))?;

        // Whole texture onto the whole window: the fullscreen quad
        self.display
            .canvas
            .copy(&self.target.texture, None, None)
            .map_err(|e| device_error!(DeviceFailure::Draw, e))?;
        self.display.canvas.present();
        Ok(())
    }
}

impl Events {
    pub fn poll(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => events.push(InputEvent::Quit),
                Event::KeyDown {
                    keycode: Some(k),
                    repeat: false,
                    ..
                } => events.push(InputEvent::KeyDown(k)),
                Event::KeyUp {
                    keycode: Some(k), ..
                } => events.push(InputEvent::KeyUp(k)),
                _ => {},
            }
        }

        events
    }
}

/// Show a blocking error dialog. Falls back to stderr when no dialog can be shown.
pub fn show_fatal_error(title: &str, message: &str) {
    use sdl2::messagebox::{show_simple_message_box, MessageBoxFlag};

    if let Err(e) = show_simple_message_box(MessageBoxFlag::ERROR, title, message, None::<&Window>)
    {
        eprintln!("{}: {}\n(could not show dialog: {})", title, message, e);
    }
}
