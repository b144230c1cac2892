//! Device-level failures
//!
//! Anything that goes wrong while talking to the window system or the GPU
//! (SDL init, renderer, texture upload, present) ends up here. These errors are
//! not recovered from: `main` logs them, shows a message box and exits.

use std::fmt;

/// Which device operation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceFailure {
    Init,
    Window,
    Renderer,
    TextureCreate,
    TextureUpload,
    Draw,
}

impl DeviceFailure {
    /// Stable numeric code, shown in the diagnostic dialog
    pub fn code(self) -> u32 {
        match self {
            Self::Init => 1,
            Self::Window => 2,
            Self::Renderer => 3,
            Self::TextureCreate => 4,
            Self::TextureUpload => 5,
            Self::Draw => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Init => "SDL initialization failed",
            Self::Window => "Window creation failed",
            Self::Renderer => "Renderer creation failed",
            Self::TextureCreate => "Frame texture creation failed",
            Self::TextureUpload => "Frame texture upload failed",
            Self::Draw => "Fullscreen quad draw failed",
        }
    }
}

/// A device failure with its description and the source location that raised it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceError {
    pub failure: DeviceFailure,
    pub description: String,
    pub file: &'static str,
    pub line: u32,
}

impl DeviceError {
    pub fn new(
        failure: DeviceFailure,
        description: impl Into<String>,
        file: &'static str,
        line: u32,
    ) -> Self {
        Self {
            failure,
            description: description.into(),
            file,
            line,
        }
    }

    pub fn code(&self) -> u32 {
        self.failure.code()
    }

    /// Multi-line message for the fatal error dialog
    pub fn full_message(&self) -> String {
        format!(
            "{} (code {})\n\n{}\n\nat {}:{}",
            self.failure.name(),
            self.code(),
            self.description,
            self.file,
            self.line
        )
    }
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (code {}): {} [{}:{}]",
            self.failure.name(),
            self.code(),
            self.description,
            self.file,
            self.line
        )
    }
}

impl std::error::Error for DeviceError {}

/// Build a `DeviceError` tagged with the caller's file and line
#[macro_export]
macro_rules! device_error {
    ($failure:expr, $desc:expr) => {
        $crate::error::DeviceError::new($failure, $desc, file!(), line!())
    };
}
