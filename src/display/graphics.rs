//! Frame lifecycle
//!
//! `Graphics` owns the system buffer and the presenter. Drawing is only
//! reachable through the [`Frame`] guard handed out by
//! [`Graphics::begin_frame`], and [`Frame::end`] is the single way a frame
//! reaches the screen.

use std::ops::{Deref, DerefMut};

use super::{Color, PixelBuffer};
use crate::error::DeviceError;

/// Anything that can put a finished system buffer on screen.
///
/// The SDL implementation uploads the buffer into a streaming texture, draws
/// it as one quad covering the window, and presents.
pub trait Present {
    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), DeviceError>;
}

/// Software renderer: system buffer plus the presenter that shows it
pub struct Graphics<P: Present> {
    buffer: PixelBuffer,
    presenter: P,
    frames_presented: u64,
}

impl<P: Present> Graphics<P> {
    pub fn new(presenter: P, width: u32, height: u32) -> Self {
        Self {
            buffer: PixelBuffer::with_size(width, height),
            presenter,
            frames_presented: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Clear the system buffer and hand out exclusive write access to it
    pub fn begin_frame(&mut self) -> Frame<'_, P> {
        self.buffer.clear(Color::BLACK);
        Frame { graphics: self }
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}

/// Exclusive access to the system buffer for one frame.
///
/// Derefs to [`PixelBuffer`] for drawing. Dropping it without calling
/// [`Frame::end`] throws the frame away.
pub struct Frame<'a, P: Present> {
    graphics: &'a mut Graphics<P>,
}

impl<P: Present> Frame<'_, P> {
    /// Release the buffer and present it
    pub fn end(self) -> Result<(), DeviceError> {
        let graphics = self.graphics;
        graphics.presenter.present(&graphics.buffer)?;
        graphics.frames_presented += 1;
        Ok(())
    }
}

impl<P: Present> Deref for Frame<'_, P> {
    type Target = PixelBuffer;

    fn deref(&self) -> &PixelBuffer {
        &self.graphics.buffer
    }
}

impl<P: Present> DerefMut for Frame<'_, P> {
    fn deref_mut(&mut self) -> &mut PixelBuffer {
        &mut self.graphics.buffer
    }
}

/// Presenter that keeps a copy of the last frame instead of showing it.
/// Drives the game loop in tests.
#[derive(Default)]
pub struct Headless {
    pub last_frame: Option<Vec<u8>>,
    pub fail_with: Option<DeviceError>,
}

impl Present for Headless {
    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), DeviceError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.last_frame = Some(buffer.as_bytes().to_vec());
        Ok(())
    }
}
