//! Validated parameters for the aspect-ratio resize.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SpriteError};

/// Target width / height ratio. Always finite and greater than zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio(f64);

impl AspectRatio {
    pub fn new(ratio: f64) -> Result<Self> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(SpriteError::InvalidParameter {
                message: format!("Aspect ratio must be a positive number, got {}", ratio),
                help: Some(
                    "Use the value from Tools -> Determine Sprite Dimensions, e.g. 1.0 or 0.75"
                        .to_string(),
                ),
            });
        }
        Ok(Self(ratio))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl FromStr for AspectRatio {
    type Err = SpriteError;

    /// Parses either a plain number (`0.75`) or a `W:H` pair (`3:4`).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || SpriteError::InvalidParameter {
            message: format!("Invalid aspect ratio '{}'", s),
            help: Some("Use a number (e.g. 1.5) or W:H (e.g. 3:2)".to_string()),
        };

        if let Some((w, h)) = s.split_once(':') {
            let w: f64 = w.trim().parse().map_err(|_| invalid())?;
            let h: f64 = h.trim().parse().map_err(|_| invalid())?;
            if h == 0.0 {
                return Err(invalid());
            }
            return Self::new(w / h);
        }

        let ratio: f64 = s.parse().map_err(|_| invalid())?;
        Self::new(ratio)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Padding multiplier applied after ratio matching.
///
/// Values below 1.0 are clamped up to 1.0, so `get()` is always >= 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FudgeFactor(f64);

impl FudgeFactor {
    pub fn new(factor: f64) -> Result<Self> {
        if !factor.is_finite() {
            return Err(SpriteError::InvalidParameter {
                message: format!("Fudge factor must be a finite number, got {}", factor),
                help: Some("Use a value >= 1.0, e.g. 1.05".to_string()),
            });
        }
        Ok(Self(factor.max(1.0)))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Pixel shift added to the paste position. May be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Everything the resize transform needs besides the image itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeParams {
    pub ratio: AspectRatio,
    pub fudge: FudgeFactor,
    pub offset: Offset,
}

impl ResizeParams {
    pub fn new(ratio: AspectRatio, fudge: FudgeFactor, offset: Offset) -> Self {
        Self {
            ratio,
            fudge,
            offset,
        }
    }
}
