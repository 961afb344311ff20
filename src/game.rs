//! Frame orchestrator
//!
//! [`Game`] owns everything one player session needs: tuning, resolved
//! sprite sizes, the RNG, the run state and the input mailbox. The host
//! calls [`Game::frame`] once per animation frame.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use thiserror::Error;

use crate::platform::{InputMailbox, Intent, IntentSender};
use crate::renderer::{Renderer, draw_frame};
use crate::sim::{
    GameEvent, GameState, SpriteCatalog, SpriteError, SpriteMetrics, TickInput,
    resolve_collisions, tick,
};
use crate::tuning::{Tuning, TuningError};

/// The game could not be set up
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Tuning(#[from] TuningError),
    #[error(transparent)]
    Sprite(#[from] SpriteError),
}

pub struct Game {
    tuning: Tuning,
    catalog: SpriteCatalog,
    state: GameState,
    rng: Pcg32,
    mailbox: InputMailbox,
}

impl Game {
    /// Validate `tuning` and resolve every sprite size before the first frame
    pub fn new(seed: u64, tuning: Tuning, metrics: &impl SpriteMetrics) -> Result<Self, GameError> {
        tuning.validate()?;
        let catalog = SpriteCatalog::resolve(&tuning, metrics)?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(&tuning, &mut rng);

        log::info!(
            "Game initialized with seed {} ({} obstacle types)",
            seed,
            catalog.obstacle_kinds.len()
        );

        Ok(Self {
            tuning,
            catalog,
            state,
            rng,
            mailbox: InputMailbox::new(),
        })
    }

    /// Handle for input event handlers
    pub fn input(&self) -> IntentSender {
        self.mailbox.sender()
    }

    /// Post an activate intent (start, jump or restart)
    pub fn activate(&self) {
        self.mailbox.sender().post(Intent::Activate);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn catalog(&self) -> &SpriteCatalog {
        &self.catalog
    }

    /// Run one animation frame: simulate, draw, then test collisions
    /// against what was drawn. Returns the frame's events.
    pub fn frame(&mut self, renderer: &mut impl Renderer) -> Vec<GameEvent> {
        let input = TickInput {
            activate: self.mailbox.drain().is_some(),
        };

        tick(
            &mut self.state,
            &input,
            &self.tuning,
            &self.catalog,
            &mut self.rng,
        );
        draw_frame(renderer, &self.state, &self.tuning, &self.catalog);
        resolve_collisions(&mut self.state, &self.tuning, &self.catalog);

        let events = self.state.drain_events();
        for event in &events {
            match event {
                GameEvent::RunStarted => log::info!("Run started"),
                GameEvent::Jumped => log::debug!("Jump at tick {}", self.state.tick_count),
                GameEvent::RunEnded { score } => log::info!("Run ended with score {}", score),
                GameEvent::Restarted => log::info!("Run restarted"),
            }
        }
        events
    }
}
