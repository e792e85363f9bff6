use crate::SnapError;

/// The fixed extent of every cell in the strip.
///
/// Only `width` participates in snapping; `height` is carried for hosts that lay cells out
/// from the same value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellSize {
    width: f32,
    height: f32,
}

impl CellSize {
    pub fn new(width: f32, height: f32) -> Result<Self, SnapError> {
        if !width.is_finite() || width <= 0.0 {
            return Err(SnapError::InvalidCellSize(width));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

/// Which way a gesture moves the index.
///
/// `Forward` advances the index (content dragged toward negative x), `Backward` retreats it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    /// Direction implied by a content movement of `delta_x`.
    ///
    /// Returns `None` for a zero (or NaN) delta.
    pub fn from_delta(delta_x: f32) -> Option<Self> {
        if delta_x < 0.0 {
            Some(Self::Forward)
        } else if delta_x > 0.0 {
            Some(Self::Backward)
        } else {
            None
        }
    }
}

/// The result of advancing the engine by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// `true` while a snap animation is still running after this tick.
    pub animating: bool,
    /// The host content offset after this tick.
    pub offset: f32,
}
