//! Predictive opponent paddle.
//!
//! Each tick the controller extrapolates the ball's height when it is heading
//! toward the paddle (or recenters when it is not), clamps that target to the
//! playfield, passes it through a reaction-lag filter, then walks the paddle
//! toward the filtered target at a bounded speed. `look_ahead`, `aim_jitter`,
//! `reaction_lag` and `dead_zone` together set how good the opponent is.

use glam::Vec3;
use hecs::World;

use crate::{Ball, GameRng, OpponentConfig, OpponentPaddle, Time};

/// What the controller can observe about the ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallSnapshot {
    pub pos: Vec3,
    pub vel: Option<Vec3>,
}

impl From<&Ball> for BallSnapshot {
    fn from(ball: &Ball) -> Self {
        Self {
            pos: ball.pos,
            vel: Some(ball.vel),
        }
    }
}

/// Is the ball heading toward the paddle's side?
///
/// Without velocity data this falls back to whether the ball is already past
/// the paddle's plane on the paddle's side.
pub fn is_approaching(paddle: &OpponentPaddle, ball: &BallSnapshot, threshold: f32) -> bool {
    let toward = paddle.side.sign();
    match ball.vel {
        // No hysteresis: a ball moving along the paddle plane counts as retreating
        Some(vel) => vel.x * toward > threshold,
        None => (ball.pos.x - paddle.fixed_x) * toward > 0.0,
    }
}

/// Unfiltered aim point, already clamped to the paddle's limits
pub fn raw_target(
    paddle: &OpponentPaddle,
    ball: &BallSnapshot,
    config: &OpponentConfig,
    rng: &mut GameRng,
) -> f32 {
    let target = if is_approaching(paddle, ball, config.approach_threshold) {
        let vel_y = ball.vel.map_or(0.0, |v| v.y);
        let predicted = ball.pos.y + vel_y * config.look_ahead;
        predicted + rng.spread(config.aim_jitter)
    } else {
        config.center_y
    };
    paddle.clamp_y(target)
}

/// Exponential smoothing toward `target`; zero lag snaps
pub fn lag_filter(filtered: f32, target: f32, dt: f32, reaction_lag: f32) -> f32 {
    if reaction_lag > 0.0 {
        let t = 1.0 - (-dt / reaction_lag).exp();
        filtered + (target - filtered) * t
    } else {
        target
    }
}

/// Step `current` toward `target` by at most `max_delta`, never overshooting
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}

/// One controller tick. A missing ball means no movement this tick.
pub fn update_opponent(
    paddle: &mut OpponentPaddle,
    ball: Option<&BallSnapshot>,
    config: &OpponentConfig,
    dt: f32,
    rng: &mut GameRng,
) {
    let Some(ball) = ball else {
        return;
    };

    let target = raw_target(paddle, ball, config, rng);
    paddle.delayed_target_y = lag_filter(paddle.delayed_target_y, target, dt, config.reaction_lag);

    let current_y = paddle.pos.y;
    let new_y = if (paddle.delayed_target_y - current_y).abs() > config.dead_zone {
        move_towards(current_y, paddle.delayed_target_y, config.move_speed * dt)
    } else {
        current_y
    };

    // Re-assert the fixed axes every tick in case something pushed the paddle
    paddle.pos = Vec3::new(paddle.fixed_x, paddle.clamp_y(new_y), paddle.fixed_z);
}

/// Run every opponent paddle against the ball it tracks
pub fn drive_opponents(world: &mut World, time: &Time, config: &OpponentConfig, rng: &mut GameRng) {
    let paddles: Vec<(hecs::Entity, Option<hecs::Entity>)> = world
        .query::<&OpponentPaddle>()
        .iter()
        .map(|(e, p)| (e, p.target))
        .collect();

    for (entity, target) in paddles {
        let snapshot = target.and_then(|t| {
            world
                .get::<&Ball>(t)
                .ok()
                .map(|ball| BallSnapshot::from(&*ball))
        });
        if snapshot.is_none() {
            log::trace!("Opponent {:?} has no ball to track", entity);
        }

        if let Ok(mut paddle) = world.get::<&mut OpponentPaddle>(entity) {
            update_opponent(&mut paddle, snapshot.as_ref(), config, time.dt, rng);
        }
    }
}
