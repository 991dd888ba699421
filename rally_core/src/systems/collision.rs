use glam::Vec3;
use hecs::World;

use crate::systems::serve::enforce_min_x;
use crate::{
    Ball, BallConfig, BallPhase, ColliderKind, Contact, Events, GameRng, GoalListener, Params,
    PhysicsEvent, Scheduler, Time,
};

/// Reflect `v` about the plane with normal `normal`: `v - 2(v·n)n`
pub fn reflect(v: Vec3, normal: Vec3) -> Vec3 {
    let n = normal.normalize_or_zero();
    v - 2.0 * v.dot(n) * n
}

/// Resolve one contact against the ball and return the collider category hit
pub fn resolve_contact(
    ball: &mut Ball,
    contact: &Contact,
    config: &BallConfig,
    rng: &mut GameRng,
) -> ColliderKind {
    match contact.kind {
        ColliderKind::Wall | ColliderKind::Other => {
            // Works for angled surfaces too; speed is left untouched
            let reflected = keep_plane(reflect(ball.vel, contact.normal), config);
            ball.vel = reflected.normalize_or_zero() * ball.current_speed;
        }
        ColliderKind::Paddle {
            center_y,
            half_height,
        } => bounce_off_paddle(ball, center_y, half_height, config, rng),
    }
    log::trace!("{:?} contact -> vel={:?}", contact.kind, ball.vel);
    contact.kind
}

fn bounce_off_paddle(
    ball: &mut Ball,
    center_y: f32,
    half_height: Option<f32>,
    config: &BallConfig,
    rng: &mut GameRng,
) {
    // Relative hit position from -1 (below center) to 1 (above center)
    let half_height = half_height
        .unwrap_or(Params::DEFAULT_PADDLE_HALF_HEIGHT)
        .max(Params::MIN_PADDLE_HALF_HEIGHT);
    let offset_y = ((ball.pos.y - center_y) / half_height).clamp(-1.0, 1.0);

    // Always back toward the side the ball came from
    let x_sign = if -ball.vel.x >= 0.0 { 1.0 } else { -1.0 };
    let dir = Vec3::new(
        x_sign,
        offset_y * config.hit_influence + rng.spread(config.jitter_y),
        0.0,
    )
    .normalize();
    let dir = enforce_min_x(dir, x_sign, config.min_abs_x_dir);

    ball.current_speed = (ball.current_speed + config.speed_increase_per_hit).min(config.max_speed);
    ball.vel = dir * ball.current_speed;
}

fn keep_plane(mut v: Vec3, config: &BallConfig) -> Vec3 {
    if config.lock_z {
        v.z = 0.0;
    }
    v
}

/// Drain queued contacts and goal triggers against the ball
#[allow(clippy::too_many_arguments)]
pub fn apply_physics_events(
    world: &mut World,
    physics: Vec<PhysicsEvent>,
    time: &Time,
    config: &BallConfig,
    scheduler: &mut Scheduler,
    events: &mut Events,
    rng: &mut GameRng,
    listener: &mut dyn GoalListener,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for event in &physics {
            // A parked ball ignores contacts and triggers until it is served
            if ball.phase == BallPhase::Idle {
                log::trace!("Ignoring {:?} while ball is idle", event);
                continue;
            }
            match event {
                PhysicsEvent::Contact(contact) => match resolve_contact(ball, contact, config, rng)
                {
                    ColliderKind::Wall => events.ball_hit_wall = true,
                    ColliderKind::Paddle { .. } => events.ball_hit_paddle = true,
                    ColliderKind::Other => events.ball_hit_other = true,
                },
                PhysicsEvent::GoalEntered(side) => crate::systems::scoring::enter_goal(
                    ball, *side, time, config, scheduler, events, listener,
                ),
            }
        }
    }
}
