use glam::Vec2;

use crate::{Config, Side};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_top_left(top_left: Vec2, size: Vec2) -> Self {
        Self {
            min: top_left,
            max: top_left + size,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Check if circle intersects AABB
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        let closest = Vec2::new(
            center.x.clamp(self.min.x, self.max.x),
            center.y.clamp(self.min.y, self.max.y),
        );
        (center - closest).length_squared() <= radius * radius
    }
}

/// Playing field bounds
#[derive(Debug, Clone, Copy)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl GameMap {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.field_width,
            height: config.field_height,
        }
    }

    /// Ball rest position during a serve
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Paddle top edge at game start (vertically centered)
    pub fn paddle_spawn(&self, config: &Config) -> f32 {
        config.clamp_paddle_y((self.height - config.paddle_height) / 2.0)
    }

    /// Collision box of a paddle whose top edge is at `y`
    pub fn paddle_box(&self, config: &Config, side: Side, y: f32) -> Aabb {
        Aabb::from_top_left(
            Vec2::new(config.paddle_x(side), y),
            Vec2::new(config.paddle_width, config.paddle_height),
        )
    }
}

impl Default for GameMap {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
