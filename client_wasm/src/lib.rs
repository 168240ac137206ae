//! Browser host for the Pong simulation
//!
//! The page owns the canvas, the animation frame loop and the DOM wiring; it
//! forwards pointer, key and difficulty events to [`PongGame`] and draws from
//! its getters every frame.

pub mod input;
#[cfg(target_arch = "wasm32")]
mod logger;

use game_core::{Config, Difficulty, GameSession, Side, UnknownDifficulty};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

/// One game session as seen from JavaScript
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub struct PongGame {
    session: GameSession,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl PongGame {
    /// Start a game at `now_ms` (the page's animation clock)
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(constructor))]
    pub fn new(now_ms: f64) -> PongGame {
        Self::with_seed(random_seed(), now_ms)
    }

    /// Pointer moved; `y` in canvas coordinates
    pub fn pointer_move(&mut self, y: f32) {
        self.session.pointer_move(y);
    }

    /// Key pressed; returns true if the key changed the serve
    pub fn key_down(&mut self, key: &str) -> bool {
        match input::handle_key_down(key) {
            Some(serve_key) => self.session.press(serve_key),
            None => false,
        }
    }

    /// Switch to the named difficulty ("easy", "medium", "hard", "impossible")
    #[cfg(target_arch = "wasm32")]
    pub fn select_difficulty(&mut self, name: &str) -> Result<(), JsValue> {
        self.set_difficulty(name)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Advance one animation frame
    pub fn frame(&mut self, now_ms: f64) {
        self.session.frame(now_ms);
    }

    /// Callback for a page-side serve timer armed with `serve_cycle`.
    /// Does nothing before the serve delay has run out.
    pub fn fire_serve_timer(&mut self, cycle: f64, now_ms: f64) -> bool {
        self.session.fire_serve_timer(cycle as u64, now_ms)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn field_width(&self) -> f32 {
        self.session.config.field_width
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn field_height(&self) -> f32 {
        self.session.config.field_height
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn paddle_width(&self) -> f32 {
        self.session.config.paddle_width
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn paddle_height(&self) -> f32 {
        self.session.config.paddle_height
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn ball_radius(&self) -> f32 {
        self.session.config.ball_radius
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn player_x(&self) -> f32 {
        self.session.config.paddle_x(Side::Player)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn opponent_x(&self) -> f32 {
        self.session.config.paddle_x(Side::Opponent)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn player_y(&self) -> f32 {
        self.session.snapshot().player_y
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn opponent_y(&self) -> f32 {
        self.session.snapshot().opponent_y
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn ball_x(&self) -> f32 {
        self.session.snapshot().ball_pos.x
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn ball_y(&self) -> f32 {
        self.session.snapshot().ball_pos.y
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn score_player(&self) -> u32 {
        self.session.score.player
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn score_opponent(&self) -> u32 {
        self.session.score.opponent
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn serving(&self) -> bool {
        self.session.serve.is_pending()
    }

    /// "player", "opponent", or undefined during a rally
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn serving_side(&self) -> Option<String> {
        self.session
            .serve
            .serving_side()
            .map(|side| side.name().to_string())
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn serve_cycle(&self) -> Option<f64> {
        self.session.serve.cycle().map(|cycle| cycle as f64)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn aim_offset(&self) -> Option<f32> {
        self.session.serve.aim_offset()
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn aim_marker_x(&self) -> Option<f32> {
        self.session.aim_marker().map(|marker| marker.x)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn aim_marker_y(&self) -> Option<f32> {
        self.session.aim_marker().map(|marker| marker.y)
    }

    /// Milliseconds left before the opponent serves
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn serve_delay_remaining(&self) -> Option<f64> {
        self.session.serve_delay_remaining()
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn difficulty(&self) -> String {
        self.session.difficulty.name().to_string()
    }

    // Per-frame events for sound and effects; reset by the next `frame`

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn hit_paddle(&self) -> bool {
        self.session.events.ball_hit_paddle
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn hit_wall(&self) -> bool {
        self.session.events.ball_hit_wall
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn served(&self) -> bool {
        self.session.events.serve_launched
    }

    /// "player" or "opponent" if a point was scored this frame
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn scored_side(&self) -> Option<String> {
        let events = &self.session.events;
        let side = if events.player_scored {
            Side::Player
        } else if events.opponent_scored {
            Side::Opponent
        } else {
            return None;
        };
        Some(side.name().to_string())
    }
}

impl PongGame {
    /// Deterministic game, independent of the JS random source
    pub fn with_seed(seed: u64, now_ms: f64) -> PongGame {
        Self {
            session: GameSession::new(Config::new(), seed, now_ms),
        }
    }

    pub fn set_difficulty(&mut self, name: &str) -> Result<(), UnknownDifficulty> {
        let difficulty: Difficulty = name.parse()?;
        self.session.select_difficulty(difficulty);
        Ok(())
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }
}
