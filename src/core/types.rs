//! Core type definitions used throughout the overlay

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, TacmapError};

/// Map viewport: a screen-space rectangle plus the world range it represents
///
/// `range` is the world-unit radius covered by half the viewport; the
/// projector divides by it, so construction rejects non-positive values.
/// A range cutoff of 0 ("unlimited") is a filter concern, not a viewport
/// concern; see `map::filter`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapViewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// World units represented by half the viewport; always > 0
    pub range: f32,
}

impl MapViewport {
    pub fn new(x: f32, y: f32, width: f32, height: f32, range: f32) -> Result<Self> {
        if width <= 0.0 || height <= 0.0 {
            return Err(TacmapError::InvalidViewport(width, height));
        }
        if range <= 0.0 {
            return Err(TacmapError::InvalidRange(range));
        }
        Ok(Self {
            x,
            y,
            width,
            height,
            range,
        })
    }

    /// Screen-space center of the viewport
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Camera transform snapshot: world position plus euler angles in degrees
///
/// The primary camera's pose doubles as the observer for projection;
/// the secondary top-down camera is re-posed from it every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub yaw_deg: f32,
    pub pitch_deg: f32,
    pub roll_deg: f32,
}

impl CameraPose {
    pub fn new(position: Vec3, yaw_deg: f32, pitch_deg: f32, roll_deg: f32) -> Self {
        Self {
            position,
            yaw_deg,
            pitch_deg,
            roll_deg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_center() {
        let viewport = MapViewport::new(0.0, 0.0, 200.0, 200.0, 100.0).unwrap();
        assert_eq!(viewport.center(), Vec2::new(100.0, 100.0));

        let offset = MapViewport::new(10.0, 20.0, 100.0, 50.0, 100.0).unwrap();
        assert_eq!(offset.center(), Vec2::new(60.0, 45.0));
    }

    #[test]
    fn test_viewport_rejects_non_positive_range() {
        assert!(MapViewport::new(0.0, 0.0, 200.0, 200.0, 0.0).is_err());
        assert!(MapViewport::new(0.0, 0.0, 200.0, 200.0, -50.0).is_err());
        assert!(MapViewport::new(0.0, 0.0, 200.0, 200.0, 0.001).is_ok());
    }

    #[test]
    fn test_viewport_rejects_degenerate_rect() {
        assert!(MapViewport::new(0.0, 0.0, 0.0, 200.0, 100.0).is_err());
        assert!(MapViewport::new(0.0, 0.0, 200.0, -1.0, 100.0).is_err());
    }
}
