use crate::{Ball, DifficultyProfile, GameRng};
use glam::Vec2;
use hecs::World;

/// Move ball based on velocity (units per frame)
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

/// Give a live rally a fresh random heading at the profile's speeds
pub fn randomize_rally(world: &mut World, profile: &DifficultyProfile, rng: &mut GameRng) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.vel = Vec2::new(
            profile.serve_speed_x * rng.sign(),
            profile.serve_speed_y * rng.unit(),
        );
    }
}
