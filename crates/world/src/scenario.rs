use crate::rng::UniformSource;
use crate::types::Agent;
use crate::world::World;

/// Multi-agent particle scenario.
///
/// A scenario decides what lives in a [`World`], how each episode starts and
/// what every agent is rewarded with and observes. The host runtime drives it:
/// [`make_world`] once per environment, [`reset_world`] once per episode, then
/// [`reward`], [`observation`] and optionally [`benchmark_data`] once per agent
/// per step after physics has advanced.
///
/// Only [`reset_world`] writes to the world. The per-agent queries take a shared
/// borrow, so a host may evaluate them for different agents in any order or in
/// parallel as long as no reset runs concurrently.
///
/// [`make_world`]: Scenario::make_world
/// [`reset_world`]: Scenario::reset_world
/// [`reward`]: Scenario::reward
/// [`observation`]: Scenario::observation
/// [`benchmark_data`]: Scenario::benchmark_data
pub trait Scenario {
    /// Per-episode initial-state overrides understood by this scenario.
    type Overrides;

    /// Build the roster and static geometry. No randomness.
    fn make_world(&self) -> World;

    /// Resample the initial state of every movable entity in place.
    fn reset_world<R: UniformSource + ?Sized>(
        &self,
        world: &mut World,
        rng: &mut R,
        overrides: Option<&Self::Overrides>,
    );

    /// Scalar reward for `agent` in the current world state.
    fn reward(&self, agent: &Agent, world: &World) -> f32;

    /// Feature vector seen by `agent`.
    fn observation(&self, agent: &Agent, world: &World) -> Vec<f32>;

    /// Diagnostics only. Never fed back into rewards.
    fn benchmark_data(&self, _agent: &Agent, _world: &World) -> f32 {
        0.0
    }
}
