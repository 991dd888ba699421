use crate::systems::serve::serve_after_goal;
use crate::{Ball, BallConfig, Events, GoalListener, Scheduler, Side, Time};

/// Ball entered the goal zone on `side`: notify, park the ball, queue the next serve
pub fn enter_goal(
    ball: &mut Ball,
    side: Side,
    time: &Time,
    config: &BallConfig,
    scheduler: &mut Scheduler,
    events: &mut Events,
    listener: &mut dyn GoalListener,
) {
    log::info!("Goal entered on {} side", side.as_str());
    listener.on_goal(side);
    events.goals.push(side);

    ball.reset(config);

    let next = serve_after_goal(config.serve_strategy, side);
    scheduler.schedule(time.now, config.serve_delay, next);
    log::debug!("Next serve {:?} in {}s", next, config.serve_delay);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BallPhase, Config, ServeAction, ServeStrategy, Score};
    use glam::Vec3;

    fn setup() -> (Ball, Config, Scheduler, Events, Score) {
        let config = Config::new();
        let mut ball = Ball::new(Vec3::new(-9.0, 2.0, 0.0), 12.0);
        ball.vel = Vec3::new(-12.0, 1.0, 0.0);
        ball.phase = BallPhase::Served;
        (ball, config, Scheduler::new(), Events::new(), Score::new())
    }

    #[test]
    fn test_left_goal_resets_and_serves_right() {
        let (mut ball, config, mut scheduler, mut events, mut score) = setup();
        let time = Time::new(0.016, 3.0);

        enter_goal(
            &mut ball,
            Side::Left,
            &time,
            &config.ball,
            &mut scheduler,
            &mut events,
            &mut score,
        );

        assert_eq!(events.goals, vec![Side::Left]);
        assert_eq!(score.right, 1, "Left goal is a point for the right side");
        assert_eq!(ball.pos, config.ball.spawn_position);
        assert_eq!(ball.vel, Vec3::ZERO);
        assert_eq!(ball.current_speed, config.ball.start_speed);
        assert_eq!(ball.phase, BallPhase::Idle);

        let pending = scheduler.pending().unwrap();
        assert_eq!(pending.action, ServeAction::Toward(Side::Right));
        assert!((pending.fire_at - (3.0 + config.ball.serve_delay)).abs() < 1e-5);
    }

    #[test]
    fn test_right_goal_serves_left() {
        let (mut ball, config, mut scheduler, mut events, mut score) = setup();

        enter_goal(
            &mut ball,
            Side::Right,
            &Time::default(),
            &config.ball,
            &mut scheduler,
            &mut events,
            &mut score,
        );

        assert_eq!(score.left, 1);
        assert_eq!(
            scheduler.pending().map(|p| p.action),
            Some(ServeAction::Toward(Side::Left))
        );
    }

    #[test]
    fn test_fixed_strategy_keeps_direction_after_goal() {
        let (mut ball, mut config, mut scheduler, mut events, mut score) = setup();
        config.ball.serve_strategy = ServeStrategy::FixedDirection(Side::Left);

        enter_goal(
            &mut ball,
            Side::Left,
            &Time::default(),
            &config.ball,
            &mut scheduler,
            &mut events,
            &mut score,
        );

        assert_eq!(
            scheduler.pending().map(|p| p.action),
            Some(ServeAction::Fixed(Side::Left))
        );
    }
}
