use crate::{
    aim_curve, Ball, Config, DifficultyProfile, Events, GameMap, GameRng, Paddle,
    ServeCoordinator, ServeTimer, Side, Time,
};
use glam::Vec2;
use hecs::World;

/// Park the ball and hand the serve to `side`. Returns the new serve cycle.
///
/// An opponent serve arms a launch timer and re-places the opponent paddle at
/// a random height.
pub fn begin_serve(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    time: &Time,
    serve: &mut ServeCoordinator,
    rng: &mut GameRng,
    side: Side,
) -> u64 {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.park(map.ball_spawn());
    }

    let timer = match side {
        Side::Player => None,
        Side::Opponent => {
            let y = rng.up_to(config.max_paddle_y());
            for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
                if paddle.side == Side::Opponent {
                    paddle.y = y;
                }
            }
            Some(ServeTimer {
                deadline_ms: time.now_ms + config.opponent_serve_delay_ms,
            })
        }
    };

    let cycle = serve.enter(side, timer);
    log::debug!("serve cycle {} begins, {} to serve", cycle, side.name());
    cycle
}

/// Random vertical factor for an opponent serve, never close to flat
pub fn opponent_serve_factor(rng: &mut GameRng, config: &Config) -> f32 {
    let factor = rng.unit();
    if factor.abs() < config.serve_min_factor {
        if factor < 0.0 {
            -config.serve_snap_factor
        } else {
            config.serve_snap_factor
        }
    } else {
        factor
    }
}

/// Launch `side`'s pending serve. Returns false if `side` is not serving.
pub fn launch_serve(
    world: &mut World,
    config: &Config,
    profile: &DifficultyProfile,
    serve: &mut ServeCoordinator,
    rng: &mut GameRng,
    events: &mut Events,
    side: Side,
) -> bool {
    let aim_offset = match serve.take_launch(side) {
        Some(aim_offset) => aim_offset,
        None => return false,
    };

    let factor = match side {
        Side::Player => aim_curve(aim_offset),
        Side::Opponent => opponent_serve_factor(rng, config),
    };
    let vel = Vec2::new(
        profile.serve_speed_x * side.direction(),
        profile.serve_speed_y * factor,
    );
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.vel = vel;
    }

    events.serve_launched = true;
    log::debug!("{} served, velocity ({}, {})", side.name(), vel.x, vel.y);
    true
}

/// Fire the opponent's serve timer once its deadline has passed
pub fn poll_serve_timer(
    world: &mut World,
    config: &Config,
    profile: &DifficultyProfile,
    time: &Time,
    serve: &mut ServeCoordinator,
    rng: &mut GameRng,
    events: &mut Events,
) -> bool {
    match serve.due(time.now_ms) {
        Some(side) => launch_serve(world, config, profile, serve, rng, events, side),
        None => false,
    }
}

/// Fire the timer of serve cycle `cycle` from an external one-shot timer.
///
/// A timer from an earlier cycle, one that already fired, or one firing
/// before its deadline does nothing.
#[allow(clippy::too_many_arguments)]
pub fn fire_serve_timer(
    world: &mut World,
    config: &Config,
    profile: &DifficultyProfile,
    time: &Time,
    serve: &mut ServeCoordinator,
    rng: &mut GameRng,
    events: &mut Events,
    cycle: u64,
) -> bool {
    match serve.armed(cycle, time.now_ms) {
        Some(side) => launch_serve(world, config, profile, serve, rng, events, side),
        None => {
            log::trace!(
                "ignoring serve timer for cycle {} at {}ms",
                cycle,
                time.now_ms
            );
            false
        }
    }
}
