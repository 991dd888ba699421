//! Simulation core for a two-paddle ball game: ball flight, collision
//! response, delayed serves and a predictive computer opponent.
//!
//! Collision detection, rendering, input and score display live elsewhere.
//! Collaborators push [`PhysicsEvent`]s in and receive goals through a
//! [`GoalListener`].

pub mod components;
pub mod config;
pub mod error;
pub mod params;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use params::*;
pub use resources::*;
pub use simulation::Simulation;

use hecs::World;
use systems::*;

/// Advance the simulation by `time.dt`
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    scheduler: &mut Scheduler,
    contacts: &mut ContactQueue,
    events: &mut Events,
    rng: &mut GameRng,
    listener: &mut dyn GoalListener,
) {
    // Clamp dt to prevent large jumps
    let dt = if time.dt.is_finite() { time.dt } else { 0.0 };
    let clamped_dt = dt.clamp(0.0, Params::MAX_DT);

    // Events accumulate over every micro-step of this frame
    events.clear();

    // Fixed micro-steps for stable physics; always at least one
    let mut remaining_dt = clamped_dt;
    let mut first = true;
    while first || remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);

        // Stamped with the micro-step's start time
        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };
        remaining_dt -= step_dt;

        // 1. Fire a due serve
        run_scheduled(world, &step_time, &config.ball, scheduler, events, rng);

        // 2. Contacts and goal triggers reported since the last frame
        if first {
            let physics = contacts.drain();
            apply_physics_events(
                world,
                physics,
                &step_time,
                &config.ball,
                scheduler,
                events,
                rng,
                listener,
            );
            first = false;
        }

        // 3. Move ball
        move_ball(world, &step_time);

        // 4. Pin depth and hold speed
        stabilize_ball(world, &config.ball);

        // 5. Opponent reads the finalized ball state
        drive_opponents(world, &step_time, &config.opponent, rng);
    }

    // Update time
    time.now += clamped_dt;
}

/// Helper to create the ball entity, parked at spawn
pub fn create_ball(world: &mut World, config: &BallConfig) -> hecs::Entity {
    world.spawn((Ball::new(config.spawn_position, config.start_speed),))
}

/// Helper to create an opponent paddle tracking `target`
pub fn create_opponent(
    world: &mut World,
    config: &OpponentConfig,
    target: Option<hecs::Entity>,
) -> hecs::Entity {
    if target.is_none() {
        log::warn!("Opponent paddle created without a ball to track; it will stay put");
    }
    world.spawn((OpponentPaddle::new(config, target),))
}
