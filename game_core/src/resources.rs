/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub now_ms: f64, // Latest wall-clock time seen from the host
}

impl Time {
    pub fn new(now_ms: f64) -> Self {
        Self { now_ms }
    }

    /// Catch up with the host clock, which is not trusted to be monotonic
    pub fn advance(&mut self, now_ms: f64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_player(&mut self) {
        self.player += 1;
    }

    pub fn increment_opponent(&mut self) {
        self.opponent += 1;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Uniform in [-1, 1]
    pub fn unit(&mut self) -> f32 {
        use rand::Rng;
        self.0.gen_range(-1.0..=1.0)
    }

    /// +1 or -1 with equal probability
    pub fn sign(&mut self) -> f32 {
        use rand::Rng;
        if self.0.gen_bool(0.5) {
            1.0
        } else {
            -1.0
        }
    }

    /// Uniform in [0, max]
    pub fn up_to(&mut self, max: f32) -> f32 {
        use rand::Rng;
        if max <= 0.0 {
            0.0
        } else {
            self.0.gen_range(0.0..=max)
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub player_scored: bool,
    pub opponent_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub serve_launched: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_scored = false;
        self.opponent_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.serve_launched = false;
    }

    pub fn scored(&self) -> bool {
        self.player_scored || self.opponent_scored
    }
}
