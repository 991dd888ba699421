use glam::Vec3;

use crate::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Uniform draw from `[-half_width, half_width]`. Widths too large to sample
    /// are capped; zero or NaN widths draw nothing.
    pub fn spread(&mut self, half_width: f32) -> f32 {
        use rand::Rng;
        let half_width = half_width.abs();
        if half_width.is_nan() || half_width == 0.0 {
            return 0.0;
        }
        let half_width = half_width.min(f32::MAX / 4.0);
        self.0.gen_range(-half_width..=half_width)
    }

    pub fn coin_flip(&mut self) -> bool {
        use rand::Rng;
        self.0.gen_bool(0.5)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Category of the body the ball touched
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColliderKind {
    Wall,
    Paddle {
        center_y: f32,
        /// Vertical half-extent, when the collider exposes bounds
        half_height: Option<f32>,
    },
    Other,
}

/// Contact notification from the collision collaborator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub normal: Vec3,
    pub kind: ColliderKind,
}

impl Contact {
    pub fn wall(normal: Vec3) -> Self {
        Self {
            normal,
            kind: ColliderKind::Wall,
        }
    }

    pub fn paddle(normal: Vec3, center_y: f32, half_height: Option<f32>) -> Self {
        Self {
            normal,
            kind: ColliderKind::Paddle {
                center_y,
                half_height,
            },
        }
    }

    pub fn other(normal: Vec3) -> Self {
        Self {
            normal,
            kind: ColliderKind::Other,
        }
    }
}

/// Inbound collision or trigger notification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhysicsEvent {
    Contact(Contact),
    /// Ball entered the goal zone on this side
    GoalEntered(Side),
}

/// Queue of physics notifications waiting for the next tick
#[derive(Debug, Clone, Default)]
pub struct ContactQueue {
    pub events: Vec<PhysicsEvent>,
}

impl ContactQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push(&mut self, event: PhysicsEvent) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> Vec<PhysicsEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub goals: Vec<Side>, // Goal zones entered, in order
    pub served: Vec<ServeAction>, // Serves fired, in order
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub ball_hit_other: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.goals.clear();
        self.served.clear();
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.ball_hit_other = false;
    }
}

/// Deferred serve kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeAction {
    Random,
    Toward(Side),
    Fixed(Side),
}

/// A serve waiting for its fire time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingServe {
    pub fire_at: f32,
    pub action: ServeAction,
}

/// Single-slot timer for delayed serves, polled against the tick clock
#[derive(Debug, Clone, Copy, Default)]
pub struct Scheduler {
    pending: Option<PendingServe>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` at `now + delay`, replacing any pending serve
    pub fn schedule(&mut self, now: f32, delay: f32, action: ServeAction) {
        self.pending = Some(PendingServe {
            fire_at: now + delay.max(0.0),
            action,
        });
    }

    /// Take the pending serve if its time has come
    pub fn due(&mut self, now: f32) -> Option<ServeAction> {
        match self.pending {
            Some(task) if now >= task.fire_at => {
                self.pending = None;
                Some(task.action)
            }
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<PendingServe> {
        self.pending
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Receives goal notifications synchronously from the ball engine
pub trait GoalListener {
    fn on_goal(&mut self, side: Side);
}

impl<F: FnMut(Side)> GoalListener for F {
    fn on_goal(&mut self, side: Side) {
        self(side)
    }
}

/// Listener that ignores goals
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl GoalListener for NoopListener {
    fn on_goal(&mut self, _side: Side) {}
}

/// Goal tally
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u32,  // Points won by the left side
    pub right: u32, // Points won by the right side
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }
}

impl GoalListener for Score {
    fn on_goal(&mut self, side: Side) {
        // A goal entered on one side is a point for the other
        match side {
            Side::Left => self.increment_right(),
            Side::Right => self.increment_left(),
        }
    }
}
