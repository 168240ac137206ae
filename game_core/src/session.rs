//! One complete game: world, score, serve state and difficulty in a single owner.

use glam::Vec2;
use hecs::World;

use crate::systems::{
    apply_pointer, apply_serve_key, begin_serve, fire_serve_timer, randomize_rally, ServeKey,
};
use crate::{
    create_ball, create_paddle, find_ball, find_paddle, step, Config, Difficulty, Events,
    GameMap, GameRng, Score, ServeCoordinator, Side, Time,
};

/// Pending serve as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServeView {
    pub side: Side,
    pub aim_offset: f32,
    pub cycle: u64,
}

/// Read-only view of everything a renderer draws
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub player_y: f32,
    pub opponent_y: f32,
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    pub score: Score,
    pub serve: Option<ServeView>,
    pub difficulty: Difficulty,
}

pub struct GameSession {
    pub world: World,
    pub time: Time,
    pub map: GameMap,
    pub config: Config,
    pub difficulty: Difficulty,
    pub score: Score,
    pub events: Events,
    pub serve: ServeCoordinator,
    pub rng: GameRng,
}

impl GameSession {
    /// New game with a randomly chosen first server
    pub fn new(config: Config, seed: u64, now_ms: f64) -> Self {
        let mut rng = GameRng::new(seed);
        let first = if rng.sign() > 0.0 {
            Side::Player
        } else {
            Side::Opponent
        };
        Self::with_rng(config, rng, now_ms, first)
    }

    /// New game where `first` serves first
    pub fn with_first_server(config: Config, seed: u64, now_ms: f64, first: Side) -> Self {
        Self::with_rng(config, GameRng::new(seed), now_ms, first)
    }

    fn with_rng(config: Config, rng: GameRng, now_ms: f64, first: Side) -> Self {
        let map = GameMap::new(&config);
        let mut world = World::new();

        let paddle_y = map.paddle_spawn(&config);
        create_paddle(&mut world, Side::Player, paddle_y);
        create_paddle(&mut world, Side::Opponent, paddle_y);
        create_ball(&mut world, map.ball_spawn(), Vec2::ZERO);

        let mut session = Self {
            world,
            time: Time::new(now_ms),
            map,
            config,
            difficulty: Difficulty::default(),
            score: Score::new(),
            events: Events::new(),
            serve: ServeCoordinator::new(),
            rng,
        };
        session.begin_serve(first);
        session
    }

    /// Advance one animation frame
    pub fn frame(&mut self, now_ms: f64) {
        step(
            &mut self.world,
            &mut self.time,
            &self.map,
            &self.config,
            self.difficulty,
            &mut self.score,
            &mut self.events,
            &mut self.serve,
            &mut self.rng,
            now_ms,
        );
    }

    /// Pointer moved to `y` in field coordinates
    pub fn pointer_move(&mut self, y: f32) {
        apply_pointer(&mut self.world, &self.config, y);
    }

    /// Serve key pressed. Returns false when the key had no effect.
    pub fn press(&mut self, key: ServeKey) -> bool {
        apply_serve_key(
            &mut self.world,
            &self.config,
            &self.difficulty.profile(),
            &mut self.serve,
            &mut self.rng,
            &mut self.events,
            key,
        )
    }

    /// Switch difficulty immediately; a live rally gets a fresh random heading
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        if !self.serve.is_pending() {
            randomize_rally(&mut self.world, &difficulty.profile(), &mut self.rng);
        }
        log::info!("difficulty set to {}", difficulty);
    }

    /// Park the ball and start a serve for `side`. Returns the serve cycle.
    pub fn begin_serve(&mut self, side: Side) -> u64 {
        begin_serve(
            &mut self.world,
            &self.map,
            &self.config,
            &self.time,
            &mut self.serve,
            &mut self.rng,
            side,
        )
    }

    /// Callback for a host-side one-shot serve timer firing at `now_ms`
    pub fn fire_serve_timer(&mut self, cycle: u64, now_ms: f64) -> bool {
        self.time.advance(now_ms);
        fire_serve_timer(
            &mut self.world,
            &self.config,
            &self.difficulty.profile(),
            &self.time,
            &mut self.serve,
            &mut self.rng,
            &mut self.events,
            cycle,
        )
    }

    /// Milliseconds until the pending opponent serve launches
    pub fn serve_delay_remaining(&self) -> Option<f64> {
        match self.serve.state() {
            crate::ServeState::Serving {
                timer: Some(timer), ..
            } => Some((timer.deadline_ms - self.time.now_ms).max(0.0)),
            _ => None,
        }
    }

    /// Point on the serving paddle's face that the aim offset selects
    pub fn aim_marker(&self) -> Option<Vec2> {
        let side = self.serve.serving_side()?;
        let aim_offset = self.serve.aim_offset()?;
        let paddle = find_paddle(&self.world, side)?;
        let x = match side {
            Side::Player => self.config.paddle_x(side) + self.config.paddle_width,
            Side::Opponent => self.config.paddle_x(side),
        };
        Some(Vec2::new(x, paddle.y + aim_offset * self.config.paddle_height))
    }

    pub fn snapshot(&self) -> Snapshot {
        let ball = find_ball(&self.world);
        let paddle_y = |side| find_paddle(&self.world, side).map_or(0.0, |p| p.y);
        let serve = match *self.serve.state() {
            crate::ServeState::Serving {
                side,
                aim_offset,
                cycle,
                ..
            } => Some(ServeView {
                side,
                aim_offset,
                cycle,
            }),
            crate::ServeState::InPlay => None,
        };

        Snapshot {
            player_y: paddle_y(Side::Player),
            opponent_y: paddle_y(Side::Opponent),
            ball_pos: ball.map_or(self.map.ball_spawn(), |b| b.pos),
            ball_vel: ball.map_or(Vec2::ZERO, |b| b.vel),
            score: self.score,
            serve,
            difficulty: self.difficulty,
        }
    }
}
