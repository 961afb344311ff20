//! Run state and core simulation types
//!
//! Everything that belongs to one run lives in [`GameState`]. A restart
//! replaces it wholesale.

use rand::Rng;

use super::ground::{GroundSpec, generate_ground};
use super::obstacle::Obstacle;
use super::player::Player;
use crate::consts::{SCORE_DIGITS, SCORE_TICKS_PER_POINT};
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Initial frame shown, waiting for the first activate
    NotStarted,
    /// Active gameplay
    Running,
    /// Player hit an obstacle; waiting for restart
    Ended,
}

/// Notable things that happened during a frame (drained by the host)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    RunStarted,
    Jumped,
    RunEnded { score: u64 },
    Restarted,
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    /// Animation frames since this state was created (advances in every phase)
    pub frame_count: u64,
    /// Simulation ticks (advances only while running)
    pub tick_count: u64,
    /// Current scroll speed (pixels/tick)
    pub obstacle_move_speed: f32,
    pub player: Player,
    /// Oldest first
    pub obstacles: Vec<Obstacle>,
    pub ground: Vec<GroundSpec>,
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh state waiting for the first activate
    pub fn new(tuning: &Tuning, rng: &mut impl Rng) -> Self {
        Self {
            phase: GamePhase::NotStarted,
            frame_count: 0,
            tick_count: 0,
            obstacle_move_speed: tuning.start_speed,
            player: Player::default(),
            obstacles: Vec::new(),
            ground: generate_ground(tuning, rng),
            events: Vec::new(),
        }
    }

    /// Discard this run and begin a new one immediately
    pub fn restart(&mut self, tuning: &Tuning, rng: &mut impl Rng) {
        *self = Self::new(tuning, rng);
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Restarted);
    }

    /// End the run. Only the first call per run has any effect; returns
    /// whether this call ended it.
    pub fn end_run(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        self.phase = GamePhase::Ended;
        self.events.push(GameEvent::RunEnded {
            score: self.score(),
        });
        true
    }

    /// One point per 30 ticks
    #[inline]
    pub fn score(&self) -> u64 {
        self.tick_count / SCORE_TICKS_PER_POINT
    }

    /// Zero-padded score as drawn on screen
    pub fn score_text(&self) -> String {
        format!("{:0width$}", self.score(), width = SCORE_DIGITS)
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
