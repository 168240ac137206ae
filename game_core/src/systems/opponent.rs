use crate::{find_ball, Config, DifficultyProfile, Paddle, Side};
use hecs::World;

/// Chase the ball's height with the opponent paddle.
///
/// Only moves when the paddle center is more than the dead zone away from the
/// ball, and never faster than the base paddle speed times the difficulty
/// factor. Runs during serves too.
pub fn move_opponent(world: &mut World, config: &Config, profile: &DifficultyProfile) {
    let ball_y = match find_ball(world) {
        Some(ball) => ball.pos.y,
        None => return,
    };

    let speed = config.paddle_speed * profile.opponent_speed_factor;
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Opponent {
            continue;
        }
        let center = paddle.center_y(config.paddle_height);
        if center < ball_y - config.opponent_dead_zone {
            paddle.y += speed;
        } else if center > ball_y + config.opponent_dead_zone {
            paddle.y -= speed;
        }
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}
