//! Axis-aligned hitboxes and play field zones
//!
//! Screen coordinates: origin top-left, y grows downward.
//! - Flight zone: where the player may hover (upper half)
//! - Street zone: where pedestrians walk (bottom third)

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box of the given size centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Strict overlap test; boxes that only touch along an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Nearest point inside the box
    pub fn clamp_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.max(self.min.x).min(self.max.x),
            point.y.max(self.min.y).min(self.max.y),
        )
    }
}

/// The play field the simulation runs in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIELD_WIDTH,
            height: DEFAULT_FIELD_HEIGHT,
        }
    }
}

impl Field {
    /// Create a field, growing it to the minimum playable size if needed
    pub fn new(width: f32, height: f32) -> Self {
        let width = if width.is_finite() { width } else { DEFAULT_FIELD_WIDTH };
        let height = if height.is_finite() { height } else { DEFAULT_FIELD_HEIGHT };
        Self {
            width: width.max(MIN_FIELD_WIDTH),
            height: height.max(MIN_FIELD_HEIGHT),
        }
    }

    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    /// Region the player is clamped into
    pub fn flight_zone(&self) -> Aabb {
        Aabb::new(
            Vec2::new(FLIGHT_MARGIN_X, FLIGHT_MIN_Y),
            Vec2::new(self.width - FLIGHT_MARGIN_X, self.height * FLIGHT_ZONE_BOTTOM),
        )
    }

    /// Top edge of the street
    pub fn street_top(&self) -> f32 {
        self.height * STREET_TOP
    }

    /// Lowest point a pedestrian may stand on
    pub fn ground(&self) -> f32 {
        self.height - GROUND_OFFSET
    }

    /// Region pedestrians walk in, including the off-screen wrap margins
    pub fn street_zone(&self) -> Aabb {
        Aabb::new(
            Vec2::new(-STREET_WRAP_MARGIN, self.street_top()),
            Vec2::new(self.width + STREET_WRAP_MARGIN, self.ground()),
        )
    }

    /// Whether a falling/thrown projectile has left the field for good
    pub fn projectile_escaped(&self, pos: Vec2) -> bool {
        pos.y > self.height + DESPAWN_MARGIN_BOTTOM
            || pos.x < -DESPAWN_MARGIN_X
            || pos.x > self.width + DESPAWN_MARGIN_X
    }

    /// Whether a floating pickup has left the field
    pub fn pickup_escaped(&self, pos: Vec2) -> bool {
        pos.x < -DESPAWN_MARGIN_X || pos.x > self.width + DESPAWN_MARGIN_X || pos.y < -PICKUP_DESPAWN_TOP
    }
}
