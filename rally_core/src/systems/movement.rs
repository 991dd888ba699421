use hecs::World;

use crate::{Ball, BallConfig, Params, Time};

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * time.dt;
    }
}

/// Per-tick correction: re-pin the depth axis and hold speed inside its band
pub fn stabilize(ball: &mut Ball, config: &BallConfig) {
    if config.lock_z && (ball.pos.z - config.fixed_z).abs() > Params::PIN_TOLERANCE {
        ball.pos.z = config.fixed_z;
    }

    // Near-zero velocity has no usable direction
    if ball.vel.length_squared() > Params::MIN_VELOCITY_SQR {
        let dir = ball.vel.normalize();
        ball.current_speed = config.clamp_speed(ball.current_speed);
        ball.vel = dir * ball.current_speed;
    }
}

pub fn stabilize_ball(world: &mut World, config: &BallConfig) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        stabilize(ball, config);
    }
}
