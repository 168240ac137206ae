use crate::{find_ball, Ball, Config, DifficultyProfile, Events, GameMap, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    profile: &DifficultyProfile,
    events: &mut Events,
) {
    let mut ball = match find_ball(world) {
        Some(ball) => ball,
        None => return, // No ball in world
    };

    // Top/bottom walls: elastic, position clamped onto the wall
    let radius = config.ball_radius;
    if ball.pos.y - radius < 0.0 {
        ball.pos.y = radius;
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }
    if ball.pos.y + radius > map.height {
        ball.pos.y = map.height - radius;
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }

    // Paddles are re-tested against the wall-corrected position
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for paddle in paddles {
        let approaching = match paddle.side {
            Side::Player => ball.vel.x < 0.0,
            Side::Opponent => ball.vel.x > 0.0,
        };
        if !approaching {
            continue;
        }

        let paddle_box = map.paddle_box(config, paddle.side, paddle.y);
        if !paddle_box.intersects_circle(ball.pos, radius) {
            continue;
        }

        // Push the ball just outside the paddle face
        ball.pos.x = match paddle.side {
            Side::Player => paddle_box.max.x + radius,
            Side::Opponent => paddle_box.min.x - radius,
        };

        // -1 (top end) .. 1 (bottom end)
        let hit_offset = ((ball.pos.y - paddle_box.center().y) / (config.paddle_height / 2.0))
            .clamp(-1.0, 1.0);

        // Rally speed is reset to the profile's nominal value on every hit
        ball.vel.x = -ball.vel.x.signum() * profile.serve_speed_x;
        ball.vel.y = profile.serve_speed_y * hit_offset;

        events.ball_hit_paddle = true;
    }

    for (_entity, b) in world.query_mut::<&mut Ball>() {
        *b = ball;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Difficulty};
    use glam::Vec2;

    fn setup_world() -> (World, Config, GameMap, Events) {
        let world = World::new();
        let config = Config::new();
        let map = GameMap::new(&config);
        let events = Events::new();
        (world, config, map, events)
    }

    fn ball(world: &World) -> Ball {
        find_ball(world).unwrap()
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, map, mut events) = setup_world();
        let profile = Difficulty::Easy.profile();
        create_ball(&mut world, Vec2::new(400.0, 4.0), Vec2::new(8.0, -5.0));

        check_collisions(&mut world, &map, &config, &profile, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.vel.y, 5.0, "Only the sign of vy flips");
        assert_eq!(ball.vel.x, 8.0, "X velocity should be unchanged");
        assert_eq!(ball.pos.y, config.ball_radius, "Ball clamped onto the wall");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, map, mut events) = setup_world();
        let profile = Difficulty::Easy.profile();
        create_ball(&mut world, Vec2::new(400.0, 497.0), Vec2::new(-8.0, 6.0));

        check_collisions(&mut world, &map, &config, &profile, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.vel.y, -6.0);
        assert_eq!(ball.pos.y, map.height - config.ball_radius);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_no_wall_bounce_inside_field() {
        let (mut world, config, map, mut events) = setup_world();
        let profile = Difficulty::Easy.profile();
        create_ball(&mut world, Vec2::new(400.0, 10.0), Vec2::new(8.0, -5.0));

        check_collisions(&mut world, &map, &config, &profile, &mut events);

        assert_eq!(ball(&world).vel.y, -5.0, "Touching the wall is not crossing it");
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_collides_with_player_paddle() {
        let (mut world, config, map, mut events) = setup_world();
        let profile = Difficulty::Medium.profile();
        create_paddle(&mut world, Side::Player, 200.0);
        // Paddle face at x = 32, ball edge overlapping it at the paddle center
        create_ball(&mut world, Vec2::new(38.0, 245.0), Vec2::new(-12.0, 3.0));

        check_collisions(&mut world, &map, &config, &profile, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.vel.x, 12.0, "Ball should bounce right");
        assert_eq!(ball.vel.y, 0.0, "Center hit leaves the ball flat");
        assert_eq!(ball.pos.x, 32.0 + config.ball_radius);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_collides_with_opponent_paddle() {
        let (mut world, config, map, mut events) = setup_world();
        let profile = Difficulty::Hard.profile();
        create_paddle(&mut world, Side::Opponent, 100.0);
        // Opponent face at x = 768; bottom end of paddle
        create_ball(&mut world, Vec2::new(762.0, 190.0), Vec2::new(16.0, 0.0));

        check_collisions(&mut world, &map, &config, &profile, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.vel.x, -16.0, "Ball should bounce left");
        assert_eq!(ball.vel.y, profile.serve_speed_y, "Bottom end deflects fully down");
        assert_eq!(ball.pos.x, 768.0 - config.ball_radius);
    }

    #[test]
    fn test_rally_speed_resets_on_hit() {
        let profile = Difficulty::Medium.profile();
        for incoming in [-1.5_f32, -12.0, -40.0] {
            let (mut world, config, map, mut events) = setup_world();
            create_paddle(&mut world, Side::Player, 200.0);
            create_ball(&mut world, Vec2::new(36.0, 230.0), Vec2::new(incoming, -2.0));

            check_collisions(&mut world, &map, &config, &profile, &mut events);

            assert_eq!(
                ball(&world).vel.x.abs(),
                profile.serve_speed_x,
                "Incoming speed {} should reset to nominal",
                incoming
            );
        }
    }

    #[test]
    fn test_hit_position_sets_spin() {
        let (mut world, config, map, mut events) = setup_world();
        let profile = Difficulty::Easy.profile();
        create_paddle(&mut world, Side::Player, 200.0);
        // Upper half of the paddle (center at 245)
        create_ball(&mut world, Vec2::new(38.0, 222.5), Vec2::new(-8.0, 0.0));

        check_collisions(&mut world, &map, &config, &profile, &mut events);

        let ball = ball(&world);
        assert!(ball.vel.y < 0.0, "Upper hit should deflect upward");
        assert!((ball.vel.y - profile.serve_speed_y * -0.5).abs() < 1e-5);
    }

    #[test]
    fn test_ball_does_not_bounce_when_moving_away_from_paddle() {
        let (mut world, config, map, mut events) = setup_world();
        let profile = Difficulty::Easy.profile();
        create_paddle(&mut world, Side::Player, 200.0);
        create_ball(&mut world, Vec2::new(38.0, 245.0), Vec2::new(8.0, 0.0));

        check_collisions(&mut world, &map, &config, &profile, &mut events);

        assert_eq!(ball(&world).vel.x, 8.0);
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_passes_beside_paddle() {
        let (mut world, config, map, mut events) = setup_world();
        let profile = Difficulty::Easy.profile();
        create_paddle(&mut world, Side::Player, 0.0);
        create_ball(&mut world, Vec2::new(30.0, 300.0), Vec2::new(-8.0, 0.0));

        check_collisions(&mut world, &map, &config, &profile, &mut events);

        assert_eq!(ball(&world).vel.x, -8.0);
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_corner_bounces_wall_then_paddle() {
        let (mut world, config, map, mut events) = setup_world();
        let profile = Difficulty::Medium.profile();
        create_paddle(&mut world, Side::Player, 0.0);
        create_ball(&mut world, Vec2::new(36.0, 3.0), Vec2::new(-12.0, -6.0));

        check_collisions(&mut world, &map, &config, &profile, &mut events);

        let ball = ball(&world);
        assert!(events.ball_hit_wall && events.ball_hit_paddle);
        assert_eq!(ball.pos.y, config.ball_radius);
        assert_eq!(ball.vel.x, 12.0);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, map, mut events) = setup_world();
        let profile = Difficulty::Easy.profile();
        create_paddle(&mut world, Side::Player, 200.0);

        check_collisions(&mut world, &map, &config, &profile, &mut events);

        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }
}
