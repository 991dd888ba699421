use glam::Vec3;

use crate::{Ball, BallConfig, BallPhase, GameRng, Params, ServeAction, ServeStrategy, Side};

/// Serve toward a random side at a random angle within the serve cone
pub fn serve_random(ball: &mut Ball, config: &BallConfig, rng: &mut GameRng) {
    let x_sign = if rng.coin_flip() { 1.0 } else { -1.0 };
    let angle = rng.spread(config.serve_max_angle_deg).to_radians();
    let dir = Vec3::new(x_sign * angle.cos(), angle.sin(), 0.0);
    launch(ball, enforce_min_x(dir, x_sign, config.min_abs_x_dir));
}

/// Serve toward `side` with a small vertical perturbation
pub fn serve_toward(ball: &mut Ball, side: Side, config: &BallConfig, rng: &mut GameRng) {
    serve_with_spread(ball, side, Params::DIRECTED_SERVE_SPREAD, config, rng);
}

/// Fixed-direction strategy serve, with a wider vertical spread
pub fn serve_fixed(ball: &mut Ball, side: Side, config: &BallConfig, rng: &mut GameRng) {
    serve_with_spread(ball, side, Params::FIXED_SERVE_SPREAD, config, rng);
}

fn serve_with_spread(
    ball: &mut Ball,
    side: Side,
    spread: f32,
    config: &BallConfig,
    rng: &mut GameRng,
) {
    let x_sign = side.sign();
    let dir = Vec3::new(x_sign, rng.spread(spread), 0.0).normalize();
    launch(ball, enforce_min_x(dir, x_sign, config.min_abs_x_dir));
}

pub fn run_serve(ball: &mut Ball, action: ServeAction, config: &BallConfig, rng: &mut GameRng) {
    match action {
        ServeAction::Random => serve_random(ball, config, rng),
        ServeAction::Toward(side) => serve_toward(ball, side, config, rng),
        ServeAction::Fixed(side) => serve_fixed(ball, side, config, rng),
    }
    log::debug!(
        "Serve {:?}: vel={:?} speed={}",
        action,
        ball.vel,
        ball.current_speed
    );
}

/// Serve used when the world starts
pub fn opening_serve(strategy: ServeStrategy) -> ServeAction {
    match strategy {
        ServeStrategy::Random => ServeAction::Random,
        ServeStrategy::FixedDirection(side) => ServeAction::Fixed(side),
    }
}

/// Serve that follows a goal entered on `conceded`
pub fn serve_after_goal(strategy: ServeStrategy, conceded: Side) -> ServeAction {
    match strategy {
        // Serve toward the side that did not concede
        ServeStrategy::Random => ServeAction::Toward(conceded.opposite()),
        ServeStrategy::FixedDirection(side) => ServeAction::Fixed(side),
    }
}

/// Raise a too-steep planar direction to `|x| == min_abs_x`, keeping it unit length.
///
/// The vertical component keeps its sign and absorbs the remainder, so the floor
/// still holds after normalization.
pub fn enforce_min_x(dir: Vec3, x_sign: f32, min_abs_x: f32) -> Vec3 {
    if dir.x.abs() >= min_abs_x {
        return dir;
    }
    let y_sign = if dir.y < 0.0 { -1.0 } else { 1.0 };
    let y = y_sign * (1.0 - min_abs_x * min_abs_x).max(0.0).sqrt();
    Vec3::new(x_sign * min_abs_x, y, 0.0)
}

fn launch(ball: &mut Ball, dir: Vec3) {
    ball.vel = dir * ball.current_speed;
    ball.phase = BallPhase::Served;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    fn served_ball(config: &BallConfig) -> Ball {
        Ball::new(config.spawn_position, config.start_speed)
    }

    #[test]
    fn test_random_serve_respects_speed_and_floor() {
        let config = Config::new().ball;
        let mut rng = GameRng::new(42);
        for _ in 0..200 {
            let mut ball = served_ball(&config);
            serve_random(&mut ball, &config, &mut rng);

            assert!((ball.speed() - 8.0).abs() < 1e-4, "Serve speed should be 8");
            assert!(
                (ball.vel.x / 8.0).abs() >= 0.6 - 1e-5,
                "Horizontal direction {} below floor",
                ball.vel.x / 8.0
            );
            assert_eq!(ball.vel.z, 0.0);
            assert_eq!(ball.phase, BallPhase::Served);
        }
    }

    #[test]
    fn test_random_serve_uses_both_sides() {
        let config = Config::new().ball;
        let mut rng = GameRng::new(3);
        let mut left = 0;
        let mut right = 0;
        for _ in 0..100 {
            let mut ball = served_ball(&config);
            serve_random(&mut ball, &config, &mut rng);
            if ball.vel.x < 0.0 {
                left += 1;
            } else {
                right += 1;
            }
        }
        assert!(left > 0 && right > 0, "Both sides should be served");
    }

    #[test]
    fn test_wide_serve_cone_is_floored() {
        let mut config = Config::new().ball;
        config.serve_max_angle_deg = 89.0;
        config.min_abs_x_dir = 0.8;
        let mut rng = GameRng::new(11);
        for _ in 0..200 {
            let mut ball = served_ball(&config);
            serve_random(&mut ball, &config, &mut rng);
            let dir = ball.vel / ball.speed();
            assert!(dir.x.abs() >= 0.8 - 1e-5, "Floor violated: {}", dir.x);
            assert!((ball.speed() - config.start_speed).abs() < 1e-4);
        }
    }

    #[test]
    fn test_serve_toward_uses_given_side() {
        let config = Config::new().ball;
        let mut rng = GameRng::new(5);
        for _ in 0..50 {
            let mut ball = served_ball(&config);
            serve_toward(&mut ball, Side::Right, &config, &mut rng);
            assert!(ball.vel.x > 0.0, "Directed serve should go right");
            let dir = ball.vel / ball.speed();
            // y spread of 0.25 before normalization
            assert!(dir.y.abs() <= 0.25 / (1.0f32 + 0.0625).sqrt() + 1e-5);

            serve_toward(&mut ball, Side::Left, &config, &mut rng);
            assert!(ball.vel.x < 0.0, "Directed serve should go left");
        }
    }

    #[test]
    fn test_fixed_serve_uses_wider_spread() {
        let config = Config::new().ball;
        let mut rng = GameRng::new(9);
        let mut widest: f32 = 0.0;
        for _ in 0..300 {
            let mut ball = served_ball(&config);
            serve_fixed(&mut ball, Side::Left, &config, &mut rng);
            assert!(ball.vel.x < 0.0);
            widest = widest.max((ball.vel.y / ball.vel.x).abs());
        }
        assert!(widest > 0.25, "Fixed serve should exceed the directed spread");
        assert!(widest <= 0.5 + 1e-5);
    }

    #[test]
    fn test_serve_uses_current_speed() {
        let config = Config::new().ball;
        let mut rng = GameRng::new(1);
        let mut ball = served_ball(&config);
        ball.current_speed = 12.0;
        run_serve(&mut ball, ServeAction::Toward(Side::Left), &config, &mut rng);
        assert!((ball.speed() - 12.0).abs() < 1e-4);
    }

    #[test]
    fn test_enforce_min_x_keeps_unit_length_and_signs() {
        let dir = Vec3::new(-0.2, -0.98, 0.0).normalize();
        let fixed = enforce_min_x(dir, -1.0, 0.6);
        assert!((fixed.length() - 1.0).abs() < 1e-5);
        assert!((fixed.x + 0.6).abs() < 1e-6);
        assert!(fixed.y < 0.0, "Vertical sign should be preserved");
    }

    #[test]
    fn test_enforce_min_x_leaves_legal_direction() {
        let dir = Vec3::new(0.8, 0.6, 0.0);
        assert_eq!(enforce_min_x(dir, 1.0, 0.6), dir);
    }

    #[test]
    fn test_serve_selection_by_strategy() {
        assert_eq!(opening_serve(ServeStrategy::Random), ServeAction::Random);
        assert_eq!(
            serve_after_goal(ServeStrategy::Random, Side::Left),
            ServeAction::Toward(Side::Right)
        );
        assert_eq!(
            serve_after_goal(ServeStrategy::Random, Side::Right),
            ServeAction::Toward(Side::Left)
        );
        let fixed = ServeStrategy::FixedDirection(Side::Left);
        assert_eq!(opening_serve(fixed), ServeAction::Fixed(Side::Left));
        assert_eq!(
            serve_after_goal(fixed, Side::Left),
            ServeAction::Fixed(Side::Left)
        );
    }
}
