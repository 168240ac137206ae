use hecs::World;

use crate::systems::launch_serve;
use crate::{Config, DifficultyProfile, Events, GameRng, Paddle, ServeCoordinator, Side};

/// Discrete serve controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeKey {
    AimUp,
    AimDown,
    Launch,
}

/// Center the player paddle on the pointer, clamped to the field.
///
/// Non-finite pointer positions leave the paddle where it is.
pub fn apply_pointer(world: &mut World, config: &Config, pointer_y: f32) {
    if !pointer_y.is_finite() {
        log::trace!("ignoring pointer at y = {}", pointer_y);
        return;
    }
    let y = config.clamp_paddle_y(pointer_y - config.paddle_height / 2.0);
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            paddle.y = y;
        }
    }
}

/// Apply a serve key for the player.
///
/// Keys only act while the player is serving; otherwise they are ignored and
/// `false` is returned.
pub fn apply_serve_key(
    world: &mut World,
    config: &Config,
    profile: &DifficultyProfile,
    serve: &mut ServeCoordinator,
    rng: &mut GameRng,
    events: &mut Events,
    key: ServeKey,
) -> bool {
    let applied = match key {
        ServeKey::AimUp => serve.adjust_aim(Side::Player, -config.aim_step),
        ServeKey::AimDown => serve.adjust_aim(Side::Player, config.aim_step),
        ServeKey::Launch => launch_serve(world, config, profile, serve, rng, events, Side::Player),
    };
    if !applied {
        log::trace!("ignoring {:?}, player is not serving", key);
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, find_ball, find_paddle, Difficulty, ServeTimer};
    use glam::Vec2;

    #[test]
    fn test_pointer_centers_paddle() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Player, 0.0);
        create_paddle(&mut world, Side::Opponent, 0.0);

        apply_pointer(&mut world, &config, 250.0);

        assert_eq!(find_paddle(&world, Side::Player).unwrap().y, 205.0);
        assert_eq!(find_paddle(&world, Side::Opponent).unwrap().y, 0.0);
    }

    #[test]
    fn test_pointer_clamped_for_any_y() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Player, 0.0);

        for pointer_y in [-1e6_f32, -45.0, 0.0, 44.9, 123.4, 455.0, 499.0, 1e6] {
            apply_pointer(&mut world, &config, pointer_y);
            let y = find_paddle(&world, Side::Player).unwrap().y;
            assert!(
                (0.0..=config.max_paddle_y()).contains(&y),
                "pointer {} gave paddle y {}",
                pointer_y,
                y
            );
        }

        apply_pointer(&mut world, &config, 250.0);
        for pointer_y in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            apply_pointer(&mut world, &config, pointer_y);
            assert_eq!(find_paddle(&world, Side::Player).unwrap().y, 205.0);
        }
    }

    #[test]
    fn test_aim_keys_while_player_serving() {
        let mut world = World::new();
        let config = Config::new();
        let profile = Difficulty::Easy.profile();
        let mut serve = ServeCoordinator::new();
        let mut rng = GameRng::new(1);
        let mut events = Events::new();
        serve.enter(Side::Player, None);

        let mut press = |key| {
            apply_serve_key(
                &mut world, &config, &profile, &mut serve, &mut rng, &mut events, key,
            )
        };
        assert!(press(ServeKey::AimDown));
        assert!(press(ServeKey::AimDown));
        assert!(press(ServeKey::AimUp));

        assert!((serve.aim_offset().unwrap() - 0.55).abs() < 1e-6);
    }

    #[test]
    fn test_keys_ignored_during_opponent_serve() {
        let mut world = World::new();
        let config = Config::new();
        let profile = Difficulty::Easy.profile();
        let mut serve = ServeCoordinator::new();
        let mut rng = GameRng::new(1);
        let mut events = Events::new();
        create_ball(&mut world, Vec2::new(400.0, 250.0), Vec2::ZERO);
        serve.enter(Side::Opponent, Some(ServeTimer { deadline_ms: 1000.0 }));

        for key in [ServeKey::AimUp, ServeKey::AimDown, ServeKey::Launch] {
            assert!(!apply_serve_key(
                &mut world, &config, &profile, &mut serve, &mut rng, &mut events, key,
            ));
        }
        assert_eq!(serve.serving_side(), Some(Side::Opponent));
        assert_eq!(serve.aim_offset(), Some(0.5));
        assert_eq!(find_ball(&world).unwrap().vel, Vec2::ZERO);
    }

    #[test]
    fn test_keys_ignored_in_play() {
        let mut world = World::new();
        let config = Config::new();
        let profile = Difficulty::Easy.profile();
        let mut serve = ServeCoordinator::new();
        let mut rng = GameRng::new(1);
        let mut events = Events::new();
        create_ball(&mut world, Vec2::new(400.0, 250.0), Vec2::new(8.0, 2.0));

        assert!(!apply_serve_key(
            &mut world, &config, &profile, &mut serve, &mut rng, &mut events, ServeKey::Launch,
        ));
        assert_eq!(find_ball(&world).unwrap().vel, Vec2::new(8.0, 2.0));
        assert!(!events.serve_launched);
    }
}
