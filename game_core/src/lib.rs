pub mod components;
pub mod config;
pub mod difficulty;
pub mod map;
pub mod params;
pub mod resources;
pub mod serve;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use difficulty::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use serve::*;
pub use session::*;
pub use systems::ServeKey;

use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation at wall-clock time `now_ms`
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    difficulty: Difficulty,
    score: &mut Score,
    events: &mut Events,
    serve: &mut ServeCoordinator,
    rng: &mut GameRng,
    now_ms: f64,
) {
    time.advance(now_ms);

    // Clear events at start of frame
    events.clear();

    let profile = difficulty.profile();

    // 1. Opponent's delayed serve
    poll_serve_timer(world, config, &profile, time, serve, rng, events);

    // 2. Opponent paddle chases the ball, serving or not
    move_opponent(world, config, &profile);

    // 3. Ball is frozen while a serve is pending
    if serve.is_pending() {
        return;
    }

    // 4. Move ball
    move_ball(world);

    // 5. Check collisions (walls, then paddles)
    check_collisions(world, map, config, &profile, events);

    // 6. Check scoring (ball exited the field)
    check_scoring(world, map, config, time, score, events, serve, rng);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Current state of the ball, if one exists
pub fn find_ball(world: &World) -> Option<Ball> {
    let mut query = world.query::<&Ball>();
    let ball = query.iter().next().map(|(_e, ball)| *ball);
    ball
}

/// Current state of a side's paddle, if one exists
pub fn find_paddle(world: &World, side: Side) -> Option<Paddle> {
    let mut query = world.query::<&Paddle>();
    let paddle = query
        .iter()
        .map(|(_e, paddle)| *paddle)
        .find(|paddle| paddle.side == side);
    paddle
}
