/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    pub const PADDLE_INSET: f32 = 20.0; // Gap between field edge and paddle
    pub const PADDLE_SPEED: f32 = 7.0; // units per frame, scaled by difficulty

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;

    // Opponent
    pub const OPPONENT_DEAD_ZONE: f32 = 20.0;

    // Serve
    pub const AIM_STEP: f32 = 0.05;
    pub const AIM_CENTER: f32 = 0.5;
    pub const AIM_CURVE_EXPONENT: f32 = 1.5;
    pub const OPPONENT_SERVE_DELAY_MS: f64 = 1000.0;
    pub const SERVE_MIN_FACTOR: f32 = 0.3; // Rolls flatter than this get snapped
    pub const SERVE_SNAP_FACTOR: f32 = 0.5;
}
