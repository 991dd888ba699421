use hecs::World;

use crate::systems::serve::run_serve;
use crate::{Ball, BallConfig, Events, GameRng, Scheduler, Time};

/// Fire the pending serve once its time has come
pub fn run_scheduled(
    world: &mut World,
    time: &Time,
    config: &BallConfig,
    scheduler: &mut Scheduler,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let Some(action) = scheduler.due(time.now) else {
        return;
    };
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        run_serve(ball, action, config, rng);
    }
    events.served.push(action);
}
