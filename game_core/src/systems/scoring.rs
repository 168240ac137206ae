use crate::systems::begin_serve;
use crate::{find_ball, Config, Events, GameMap, GameRng, Score, ServeCoordinator, Side, Time};
use hecs::World;

/// Check if ball left the field; the scoring side serves next.
///
/// At most one side scores per call. Returns the scorer.
#[allow(clippy::too_many_arguments)]
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    time: &Time,
    score: &mut Score,
    events: &mut Events,
    serve: &mut ServeCoordinator,
    rng: &mut GameRng,
) -> Option<Side> {
    let ball = find_ball(world)?;
    let radius = config.ball_radius;

    let scorer = if ball.pos.x - radius < 0.0 {
        score.increment_opponent();
        events.opponent_scored = true;
        Side::Opponent
    } else if ball.pos.x + radius > map.width {
        score.increment_player();
        events.player_scored = true;
        Side::Player
    } else {
        return None;
    };

    log::info!(
        "{} scored ({} - {})",
        scorer.name(),
        score.player,
        score.opponent
    );
    begin_serve(world, map, config, time, serve, rng, scorer);
    Some(scorer)
}
