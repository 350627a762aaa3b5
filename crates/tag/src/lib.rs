#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Predator-Prey Tag Scenario
//!
//! A continuous 2D pursuit benchmark for multi-agent reinforcement learning.
//! Slower, larger predators chase faster, smaller prey around a small arena
//! scattered with static obstacles and ringed by eight fixed boundary
//! markers.
//!
//! ## Key Components
//!
//! -   **Roster:** [`build_world`] creates the predators, then the prey, then
//!     the obstacles and the [`boundary`] markers.
//! -   **Reset:** [`reset_world`] samples starting positions, optionally pinned
//!     by [`ResetOverrides`].
//! -   **Rewards:** [`reward`] dispatches to the prey or predator reward,
//!     including the shared predator team credit and the soft arena limit.
//! -   **Observations:** [`observation`] encodes the world in the observer's
//!     frame. Predator velocities stay hidden.
//! -   **Benchmark:** [`benchmark_data`] counts a predator's current catches.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tag::{TagConfig, TagScenario};
//! use world::Scenario;
//!
//! let scenario = TagScenario::new(TagConfig::default());
//! let mut world = scenario.make_world();
//! let mut rng = fastrand::Rng::with_seed(0);
//! scenario.reset_world(&mut world, &mut rng, None);
//!
//! for agent in &world.agents {
//!     let r = scenario.reward(agent, &world);
//!     let obs = scenario.observation(agent, &world);
//! }
//! ```

pub mod benchmark;
pub mod boundary;
pub mod config;
pub mod error;
pub mod observation;
pub mod reset;
pub mod reward;
pub mod roster;

pub use benchmark::benchmark_data;
pub use boundary::{boundary_markers, BOUNDARY_LAYOUT, NUM_BOUNDARIES};
pub use config::{RewardShaping, ScenarioFile, TagConfig};
pub use error::ConfigError;
pub use observation::{observation, observation_size};
pub use reset::{reset_world, ResetOverrides};
pub use reward::{adversary_reward, agent_reward, boundary_penalty, reward};
pub use roster::build_world;

use world::{Agent, Role, Scenario, UniformSource, World};

/// The tag scenario bound to one roster configuration.
#[derive(Clone, Debug, Default)]
pub struct TagScenario {
    config: TagConfig,
}

impl TagScenario {
    #[must_use]
    pub const fn new(config: TagConfig) -> Self {
        Self { config }
    }

    /// Validates signed roster sizes before building anything.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeCount`] if any count is negative.
    pub fn from_counts(
        num_good: i64,
        num_adversaries: i64,
        num_obstacles: i64,
    ) -> Result<Self, ConfigError> {
        TagConfig::from_counts(num_good, num_adversaries, num_obstacles).map(Self::new)
    }

    #[must_use]
    pub const fn config(&self) -> &TagConfig {
        &self.config
    }

    /// Observation length for agents of `role` in `world`.
    #[must_use]
    pub fn observation_size(&self, world: &World, role: Role) -> usize {
        observation_size(world, role)
    }
}

impl Scenario for TagScenario {
    type Overrides = ResetOverrides;

    fn make_world(&self) -> World {
        build_world(&self.config)
    }

    fn reset_world<R: UniformSource + ?Sized>(
        &self,
        world: &mut World,
        rng: &mut R,
        overrides: Option<&ResetOverrides>,
    ) {
        reset_world(world, rng, overrides);
    }

    fn reward(&self, agent: &Agent, world: &World) -> f32 {
        reward(agent, world, self.config.shaping)
    }

    fn observation(&self, agent: &Agent, world: &World) -> Vec<f32> {
        observation(agent, world)
    }

    fn benchmark_data(&self, agent: &Agent, world: &World) -> f32 {
        benchmark_data(agent, world)
    }
}
