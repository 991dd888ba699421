/// Default tuning parameters and numeric guards
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Ball
    pub const BALL_START_SPEED: f32 = 8.0;
    pub const BALL_SPEED_INCREASE_PER_HIT: f32 = 0.6;
    pub const BALL_MAX_SPEED: f32 = 18.0;
    pub const SERVE_MAX_ANGLE_DEG: f32 = 20.0;
    pub const MIN_ABS_X_DIR: f32 = 0.6; // Keeps rallies from going near-vertical
    pub const HIT_INFLUENCE: f32 = 1.6;
    pub const JITTER_Y: f32 = 0.05;
    pub const FIXED_Z: f32 = 0.0;
    pub const SERVE_DELAY: f32 = 0.6; // seconds

    // Opponent
    pub const OPPONENT_MOVE_SPEED: f32 = 9.0;
    pub const OPPONENT_TOP_LIMIT: f32 = 3.5;
    pub const OPPONENT_BOTTOM_LIMIT: f32 = -3.5;
    pub const OPPONENT_CENTER_Y: f32 = 0.0;
    pub const OPPONENT_X: f32 = 7.0;
    pub const OPPONENT_Z: f32 = 0.0;
    pub const LOOK_AHEAD: f32 = 0.35; // seconds of linear extrapolation
    pub const AIM_JITTER: f32 = 0.15;
    pub const DEAD_ZONE: f32 = 0.05;
    pub const REACTION_LAG: f32 = 0.0; // seconds, 0 = instant
    pub const APPROACH_THRESHOLD: f32 = 0.01;

    // Guards
    pub const SPEED_FLOOR_FACTOR: f32 = 0.75; // Floor = start speed * factor
    pub const MIN_VELOCITY_SQR: f32 = 0.0001;
    pub const DEFAULT_PADDLE_HALF_HEIGHT: f32 = 0.5;
    pub const MIN_PADDLE_HALF_HEIGHT: f32 = 0.001;
    pub const DIRECTED_SERVE_SPREAD: f32 = 0.25;
    pub const FIXED_SERVE_SPREAD: f32 = 0.5;
    pub const PIN_TOLERANCE: f32 = 0.0001;
    pub const MAX_DEFLECTION: f32 = 1000.0; // Cap on hit influence and jitter widths

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
