use hecs::World;

use crate::systems::{opening_serve, run_serve};
use crate::{
    create_ball, create_opponent, step, Ball, Config, ConfigError, ContactQueue, Events, GameRng,
    GoalListener, OpponentPaddle, PhysicsEvent, Scheduler, ServeAction, Side, Time,
};

/// Owns the world and every resource the tick needs
pub struct Simulation<L: GoalListener> {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub scheduler: Scheduler,
    pub contacts: ContactQueue,
    pub events: Events,
    pub rng: GameRng,
    listener: L,
    ball: hecs::Entity,
    opponent: hecs::Entity,
}

impl<L: GoalListener> Simulation<L> {
    /// Validate `config`, spawn the ball and opponent, and queue the opening serve
    pub fn new(config: Config, seed: u64, listener: L) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let ball = create_ball(&mut world, &config.ball);
        let opponent = create_opponent(&mut world, &config.opponent, Some(ball));

        let mut scheduler = Scheduler::new();
        let opening = opening_serve(config.ball.serve_strategy);
        scheduler.schedule(0.0, config.ball.serve_delay, opening);
        log::debug!(
            "World started, {:?} in {}s",
            opening,
            config.ball.serve_delay
        );

        Ok(Self {
            world,
            time: Time::new(0.0, 0.0),
            config,
            scheduler,
            contacts: ContactQueue::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            listener,
            ball,
            opponent,
        })
    }

    /// Advance by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.scheduler,
            &mut self.contacts,
            &mut self.events,
            &mut self.rng,
            &mut self.listener,
        );
    }

    /// Queue a contact or goal trigger for the next step
    pub fn push_event(&mut self, event: PhysicsEvent) {
        self.contacts.push(event);
    }

    /// Zero velocity, move to spawn, restore the starting speed
    pub fn reset_ball(&mut self) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.reset(&self.config.ball);
            log::debug!("Ball reset to {:?}", ball.pos);
        }
    }

    pub fn serve_random(&mut self) {
        self.serve(ServeAction::Random);
    }

    pub fn serve_toward(&mut self, side: Side) {
        self.serve(ServeAction::Toward(side));
    }

    fn serve(&mut self, action: ServeAction) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            run_serve(&mut ball, action, &self.config.ball, &mut self.rng);
        }
    }

    /// Adjust the opponent's playfield bounds at runtime
    pub fn set_vertical_limits(&mut self, bottom: f32, top: f32) {
        if let Ok(mut paddle) = self.world.get::<&mut OpponentPaddle>(self.opponent) {
            paddle.set_vertical_limits(bottom, top);
        }
    }

    /// Snapshot of the ball state
    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|b| *b)
    }

    /// Snapshot of the opponent paddle state
    pub fn opponent(&self) -> Option<OpponentPaddle> {
        self.world
            .get::<&OpponentPaddle>(self.opponent)
            .ok()
            .map(|p| *p)
    }

    pub fn ball_entity(&self) -> hecs::Entity {
        self.ball
    }

    pub fn opponent_entity(&self) -> hecs::Entity {
        self.opponent
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }
}
