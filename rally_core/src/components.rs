use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::{BallConfig, OpponentConfig};

/// Horizontal side of the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign of the horizontal axis pointing toward this side
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Where the ball is in its serve cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BallPhase {
    /// Parked at spawn with zero velocity, waiting for a serve
    #[default]
    Idle,
    /// In play
    Served,
}

/// Ball component - owns position, velocity and rally speed
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec3,
    pub vel: Vec3,
    pub current_speed: f32,
    pub phase: BallPhase,
}

impl Ball {
    pub fn new(pos: Vec3, current_speed: f32) -> Self {
        Self {
            pos,
            vel: Vec3::ZERO,
            current_speed,
            phase: BallPhase::Idle,
        }
    }

    /// Park the ball at spawn with zero velocity and the starting speed
    pub fn reset(&mut self, config: &BallConfig) {
        self.vel = Vec3::ZERO;
        self.pos = config.spawn_position;
        self.current_speed = config.start_speed;
        self.phase = BallPhase::Idle;
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Computer-controlled paddle that tracks a ball entity
#[derive(Debug, Clone, Copy)]
pub struct OpponentPaddle {
    pub side: Side,
    pub pos: Vec3,
    /// Horizontal and depth coordinates the paddle is held to
    pub fixed_x: f32,
    pub fixed_z: f32,
    /// Output of the reaction-lag filter, persists across ticks
    pub delayed_target_y: f32,
    pub bottom_limit: f32,
    pub top_limit: f32,
    pub target: Option<hecs::Entity>,
}

impl OpponentPaddle {
    pub fn new(config: &OpponentConfig, target: Option<hecs::Entity>) -> Self {
        let (bottom_limit, top_limit) = ordered(config.bottom_limit, config.top_limit);
        let y = config.center_y.clamp(bottom_limit, top_limit);
        Self {
            side: config.side,
            pos: Vec3::new(config.x, y, config.z),
            fixed_x: config.x,
            fixed_z: config.z,
            delayed_target_y: y,
            bottom_limit,
            top_limit,
            target,
        }
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }

    /// Replace the playfield bounds; the paddle is pulled inside immediately
    pub fn set_vertical_limits(&mut self, bottom: f32, top: f32) {
        if bottom.is_nan() || top.is_nan() {
            log::warn!("Ignoring NaN vertical limits ({bottom}, {top})");
            return;
        }
        let (bottom, top) = ordered(bottom, top);
        self.bottom_limit = bottom;
        self.top_limit = top;
        self.pos.y = self.clamp_y(self.pos.y);
        self.delayed_target_y = self.clamp_y(self.delayed_target_y);
    }

    pub fn clamp_y(&self, y: f32) -> f32 {
        y.clamp(self.bottom_limit, self.top_limit)
    }
}

fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
