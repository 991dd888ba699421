use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, Params, Side};

/// How the ball is put into play on world start and after a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ServeStrategy {
    /// Random side on start, then toward the side that did not concede
    #[default]
    Random,
    /// Always toward the given side
    FixedDirection(Side),
}

/// Ball flight tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub start_speed: f32,
    pub speed_increase_per_hit: f32,
    pub max_speed: f32,
    pub serve_max_angle_deg: f32,
    pub min_abs_x_dir: f32,
    pub hit_influence: f32,
    pub jitter_y: f32,
    pub lock_z: bool,
    pub fixed_z: f32,
    pub spawn_position: Vec3,
    pub serve_delay: f32,
    pub serve_strategy: ServeStrategy,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            start_speed: Params::BALL_START_SPEED,
            speed_increase_per_hit: Params::BALL_SPEED_INCREASE_PER_HIT,
            max_speed: Params::BALL_MAX_SPEED,
            serve_max_angle_deg: Params::SERVE_MAX_ANGLE_DEG,
            min_abs_x_dir: Params::MIN_ABS_X_DIR,
            hit_influence: Params::HIT_INFLUENCE,
            jitter_y: Params::JITTER_Y,
            lock_z: true,
            fixed_z: Params::FIXED_Z,
            spawn_position: Vec3::ZERO,
            serve_delay: Params::SERVE_DELAY,
            serve_strategy: ServeStrategy::Random,
        }
    }
}

impl BallConfig {
    /// Lowest speed the per-tick renormalization allows
    pub fn min_speed(&self) -> f32 {
        self.start_speed * Params::SPEED_FLOOR_FACTOR
    }

    /// Clamp a rally speed into the allowed band
    pub fn clamp_speed(&self, speed: f32) -> f32 {
        speed.clamp(self.min_speed(), self.max_speed)
    }
}

/// Opponent paddle tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpponentConfig {
    pub side: Side,
    pub x: f32,
    pub z: f32,
    pub move_speed: f32,
    pub top_limit: f32,
    pub bottom_limit: f32,
    pub center_y: f32,
    pub look_ahead: f32,
    pub aim_jitter: f32,
    pub dead_zone: f32,
    pub reaction_lag: f32,
    /// Minimum horizontal speed toward the paddle that counts as approaching
    pub approach_threshold: f32,
}

impl Default for OpponentConfig {
    fn default() -> Self {
        Self {
            side: Side::Right,
            x: Params::OPPONENT_X,
            z: Params::OPPONENT_Z,
            move_speed: Params::OPPONENT_MOVE_SPEED,
            top_limit: Params::OPPONENT_TOP_LIMIT,
            bottom_limit: Params::OPPONENT_BOTTOM_LIMIT,
            center_y: Params::OPPONENT_CENTER_Y,
            look_ahead: Params::LOOK_AHEAD,
            aim_jitter: Params::AIM_JITTER,
            dead_zone: Params::DEAD_ZONE,
            reaction_lag: Params::REACTION_LAG,
            approach_threshold: Params::APPROACH_THRESHOLD,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ball: BallConfig,
    pub opponent: OpponentConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document (missing fields take defaults) and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ball = &self.ball;
        positive("start_speed", ball.start_speed)?;
        positive("max_speed", ball.max_speed)?;
        if ball.max_speed < ball.start_speed {
            return Err(ConfigError::MaxBelowStart {
                start: ball.start_speed,
                max: ball.max_speed,
            });
        }
        non_negative("speed_increase_per_hit", ball.speed_increase_per_hit)?;
        non_negative("serve_delay", ball.serve_delay)?;
        in_range("min_abs_x_dir", ball.min_abs_x_dir, 0.0, 1.0)?;
        in_range("serve_max_angle_deg", ball.serve_max_angle_deg, 0.0, 90.0)?;
        in_range("hit_influence", ball.hit_influence, 0.0, Params::MAX_DEFLECTION)?;
        in_range("jitter_y", ball.jitter_y, 0.0, Params::MAX_DEFLECTION)?;
        finite("fixed_z", ball.fixed_z)?;
        finite("spawn_position.x", ball.spawn_position.x)?;
        finite("spawn_position.y", ball.spawn_position.y)?;
        finite("spawn_position.z", ball.spawn_position.z)?;

        let opp = &self.opponent;
        non_negative("move_speed", opp.move_speed)?;
        in_range("aim_jitter", opp.aim_jitter, 0.0, Params::MAX_DEFLECTION)?;
        non_negative("dead_zone", opp.dead_zone)?;
        non_negative("reaction_lag", opp.reaction_lag)?;
        non_negative("look_ahead", opp.look_ahead)?;
        non_negative("approach_threshold", opp.approach_threshold)?;
        finite("x", opp.x)?;
        finite("z", opp.z)?;
        finite("center_y", opp.center_y)?;
        finite("bottom_limit", opp.bottom_limit)?;
        finite("top_limit", opp.top_limit)?;
        if opp.bottom_limit > opp.top_limit {
            return Err(ConfigError::InvertedLimits {
                bottom: opp.bottom_limit,
                top: opp.top_limit,
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

fn in_range(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
