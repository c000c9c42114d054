//! Self-play training loop.
//!
//! One agent plays both seats. After every move the trainer attributes
//! rewards and applies TD updates:
//!
//! - The move that empties the board is updated with `LOSS_REWARD`, and the
//!   opponent's last move with `WIN_REWARD`, both toward the final state.
//! - Otherwise the previous move of the player now to act, which the
//!   opponent has just answered, is updated with `NEUTRAL_REWARD`.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::agent::{AgentConfig, NimAgent, LOSS_REWARD, NEUTRAL_REWARD, WIN_REWARD};
use crate::core::{GameRng, PlayerId, PlayerMap};
use crate::error::{NimError, Result};
use crate::games::nim::{Nim, DEFAULT_PILES};

use super::memory::MoveMemory;

/// Configuration for a training run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of self-play episodes (must be positive).
    pub episodes: usize,

    /// Pile layout every episode starts from.
    pub initial_piles: Vec<u32>,

    /// Seed for exploration and tie-breaking.
    pub seed: u64,

    /// Log progress at `info` every this many episodes (0 = never).
    pub log_interval: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: 10_000,
            initial_piles: DEFAULT_PILES.to_vec(),
            seed: 42,
            log_interval: 1_000,
        }
    }
}

impl TrainingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of episodes.
    pub fn with_episodes(mut self, episodes: usize) -> Self {
        self.episodes = episodes;
        self
    }

    /// Set the starting piles.
    pub fn with_initial_piles(mut self, piles: Vec<u32>) -> Self {
        self.initial_piles = piles;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the progress log interval.
    pub fn with_log_interval(mut self, interval: usize) -> Self {
        self.log_interval = interval;
        self
    }

    /// Reject runs that could not finish an episode.
    pub fn validate(&self) -> Result<()> {
        if self.episodes == 0 {
            return Err(NimError::InvalidConfig("episodes must be positive".into()));
        }
        if self.initial_piles.iter().all(|&p| p == 0) {
            return Err(NimError::InvalidConfig(format!(
                "initial piles {:?} contain no objects",
                self.initial_piles
            )));
        }
        Ok(())
    }
}

/// Result of a single self-play episode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EpisodeOutcome {
    /// Player recorded as winner by the game.
    pub winner: PlayerId,

    /// Moves played.
    pub moves: usize,
}

/// Summary of a training run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingReport {
    pub episodes: usize,
    pub total_moves: usize,
    /// Episodes won by each seat.
    pub wins: PlayerMap<usize>,
    /// Stored (state, action) entries at the end of training.
    pub q_entries: usize,
    /// Distinct states in the table at the end of training.
    pub q_states: usize,
}

impl TrainingReport {
    fn record(&mut self, outcome: EpisodeOutcome) {
        self.episodes += 1;
        self.total_moves += outcome.moves;
        self.wins[outcome.winner] += 1;
    }

    /// Mean episode length in moves.
    pub fn average_moves(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.episodes as f64
        }
    }
}

impl std::fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Episodes:      {}", self.episodes)?;
        writeln!(f, "Average moves: {:.2}", self.average_moves())?;
        for (player, wins) in self.wins.iter() {
            writeln!(f, "{} wins:  {}", player, wins)?;
        }
        write!(f, "Q-table:       {} entries over {} states", self.q_entries, self.q_states)
    }
}

/// Runs self-play episodes against a single agent.
pub struct Trainer {
    agent: NimAgent,
    config: TrainingConfig,
    rng: GameRng,
}

impl Trainer {
    /// Create a trainer with a fresh agent.
    pub fn new(agent_config: AgentConfig, config: TrainingConfig) -> Result<Self> {
        Self::with_agent(NimAgent::new(agent_config)?, config)
    }

    /// Continue training an existing agent.
    pub fn with_agent(agent: NimAgent, config: TrainingConfig) -> Result<Self> {
        config.validate()?;
        let rng = GameRng::new(config.seed);
        Ok(Self { agent, config, rng })
    }

    #[must_use]
    pub fn agent(&self) -> &NimAgent {
        &self.agent
    }

    #[must_use]
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Play one episode from the configured piles, updating the agent.
    pub fn play_episode(&mut self) -> Result<EpisodeOutcome> {
        let mut game = Nim::with_piles(self.config.initial_piles.clone());
        let mut memory = MoveMemory::new();

        loop {
            let state = game.state_key();
            let action = self
                .agent
                .choose_action(&state, true, &mut self.rng)
                .ok_or_else(|| NimError::InvalidConfig(format!("no legal move from {}", state)))?;

            let mover = game.current_player();
            memory.record(mover, state.clone(), action);

            game.apply_move(action)?;
            let new_state = game.state_key();

            if let Some(winner) = game.winner() {
                self.agent.update(&state, action, &new_state, LOSS_REWARD);
                if let Some(last) = memory.last(mover.other()) {
                    self.agent.update(&last.state, last.action, &new_state, WIN_REWARD);
                }
                return Ok(EpisodeOutcome {
                    winner,
                    moves: game.move_count(),
                });
            }

            if let Some(last) = memory.last(game.current_player()) {
                self.agent.update(&last.state, last.action, &new_state, NEUTRAL_REWARD);
            }
        }
    }

    /// Run every configured episode and hand back the trained agent.
    pub fn run(mut self) -> Result<(NimAgent, TrainingReport)> {
        let episodes = self.config.episodes;
        info!(
            "Training for {} episodes from {:?} (alpha {}, epsilon {}, seed {})",
            episodes,
            self.config.initial_piles,
            self.agent.config().alpha,
            self.agent.config().epsilon,
            self.config.seed
        );

        let mut report = TrainingReport::default();
        for i in 0..episodes {
            debug!("Playing training game {}", i + 1);
            let outcome = self.play_episode()?;
            report.record(outcome);

            let interval = self.config.log_interval;
            if interval > 0 && (i + 1) % interval == 0 {
                info!(
                    "{}/{} episodes, {} Q entries",
                    i + 1,
                    episodes,
                    self.agent.q_table().len()
                );
            }
        }

        report.q_entries = self.agent.q_table().len();
        report.q_states = self.agent.q_table().state_count();
        info!("Done training");

        Ok((self.agent, report))
    }
}

/// Train a default agent for `episodes` self-play games on `[1, 3, 5, 7]`.
pub fn train(episodes: usize) -> Result<NimAgent> {
    let config = TrainingConfig::default().with_episodes(episodes);
    let (agent, _) = Trainer::new(AgentConfig::default(), config)?.run()?;
    Ok(agent)
}
