use std::fmt;

use crate::foundation::error::{RandomartError, RandomartResult};

/// Source location a node was constructed at.
///
/// Used only for diagnostics; evaluation never branches on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Provenance {
    /// Source file path as reported by the constructor.
    pub file: &'static str,
    /// 1-based line number.
    pub line: u32,
}

impl Provenance {
    /// Create a provenance from an explicit file and line.
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Provenance of the calling location.
    ///
    /// Propagates through any chain of `#[track_caller]` functions, so builder helpers report the
    /// user's call site rather than their own.
    #[track_caller]
    pub fn caller() -> Self {
        let loc = std::panic::Location::caller();
        Self::new(loc.file(), loc.line())
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Color produced by a randomart expression.
///
/// Channels are in whatever range the expression produced; `[-1, 1]` maps onto `[0, 255]`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

impl Color {
    /// Create a color from three channels.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Pack into straight-alpha RGBA8 with full opacity.
    ///
    /// Each channel maps via `(c + 1) / 2 * 255`. Out-of-range values saturate and NaN maps to 0.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn channel(c: f32) -> u8 {
            ((c + 1.0) / 2.0 * 255.0) as u8
        }

        [channel(self.r), channel(self.g), channel(self.b), 255]
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> RandomartResult<Self> {
        if width == 0 || height == 0 {
            return Err(RandomartError::validation(format!(
                "canvas must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Number of pixels covered by the canvas.
    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Map a pixel column to the normalized `x` coordinate in `[-1, 1)`.
    pub fn normalized_x(self, px: u32) -> f32 {
        normalize(px, self.width)
    }

    /// Map a pixel row to the normalized `y` coordinate in `[-1, 1)`.
    pub fn normalized_y(self, py: u32) -> f32 {
        normalize(py, self.height)
    }
}

fn normalize(p: u32, extent: u32) -> f32 {
    p as f32 / extent as f32 * 2.0 - 1.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
