//! Fundamental geometric types for the 2D playfield.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position on the playfield (pixels, origin at top-left).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity (pixels per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Velocity with the given speed magnitude along a direction angle
    /// (radians, 0 = rightward, counter-clockwise).
    pub fn from_angle(angle: f64, speed: f64) -> Self {
        let dir = DVec2::from_angle(angle);
        Self {
            x: dir.x * speed,
            y: dir.y * speed,
        }
    }

    /// Speed magnitude (pixels per second).
    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}
