use crate::{Params, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub opponent_dead_zone: f32,
    pub aim_step: f32,
    pub opponent_serve_delay_ms: f64,
    pub serve_min_factor: f32,
    pub serve_snap_factor: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            opponent_dead_zone: Params::OPPONENT_DEAD_ZONE,
            aim_step: Params::AIM_STEP,
            opponent_serve_delay_ms: Params::OPPONENT_SERVE_DELAY_MS,
            serve_min_factor: Params::SERVE_MIN_FACTOR,
            serve_snap_factor: Params::SERVE_SNAP_FACTOR,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position (left edge) of the paddle for a side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_inset,
            Side::Opponent => self.field_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Clamp a paddle top edge to the field
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }

    pub fn max_paddle_y(&self) -> f32 {
        (self.field_height - self.paddle_height).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Player), 20.0, "Left paddle X position");
        assert_eq!(
            config.paddle_x(Side::Opponent),
            768.0,
            "Right paddle X position"
        );
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-50.0), 0.0);
        assert_eq!(
            config.clamp_paddle_y(10_000.0),
            config.field_height - config.paddle_height
        );
        let valid_y = 120.0;
        assert_eq!(config.clamp_paddle_y(valid_y), valid_y);
    }
}
