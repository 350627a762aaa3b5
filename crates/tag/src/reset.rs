//! # State Resetter
//!
//! Resamples the start of an episode. Agents land uniformly in `[-1, 1]²`,
//! obstacles in `[-0.9, 0.9]²`, and boundary markers are never touched.
//! Velocities and utterances are zeroed.
//!
//! Any entity can be pinned with [`ResetOverrides`]. An override that does
//! not match the roster is ignored and that entity is sampled as usual.

use std::collections::HashMap;

use glam::Vec2;
use serde::Deserialize;
use world::{Color, Role, UniformSource, World};

pub const AGENT_SPAWN_RANGE: (f32, f32) = (-1.0, 1.0);
pub const OBSTACLE_SPAWN_RANGE: (f32, f32) = (-0.9, 0.9);

pub const PREDATOR_COLOR: Color = [0.85, 0.35, 0.35];
pub const PREY_COLOR: Color = [0.35, 0.85, 0.35];

/// Fixed starting positions for one or more entities.
///
/// Positions are copied into the world on reset, so editing an override
/// after the call has no effect on the episode.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResetOverrides {
    /// Agent name to starting position.
    pub agents: HashMap<String, Vec2>,
    /// Starting positions for obstacles by landmark index. Indices past the
    /// end of the list fall back to random sampling.
    pub obstacles: Vec<Vec2>,
}

impl ResetOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_agent(mut self, name: impl Into<String>, pos: Vec2) -> Self {
        self.agents.insert(name.into(), pos);
        self
    }

    #[must_use]
    pub fn with_obstacles(mut self, positions: impl IntoIterator<Item = Vec2>) -> Self {
        self.obstacles = positions.into_iter().collect();
        self
    }

    fn agent(&self, name: &str) -> Option<Vec2> {
        self.agents.get(name).copied()
    }

    fn obstacle(&self, index: usize) -> Option<Vec2> {
        self.obstacles.get(index).copied()
    }
}

/// Resets `world` in place for a new episode.
pub fn reset_world<R: UniformSource + ?Sized>(
    world: &mut World,
    rng: &mut R,
    overrides: Option<&ResetOverrides>,
) {
    let dim_c = world.dim_c;

    for agent in &mut world.agents {
        agent.color = match agent.role {
            Role::Predator => PREDATOR_COLOR,
            Role::Prey => PREY_COLOR,
        };
        agent.state.pos = match overrides.and_then(|o| o.agent(&agent.name)) {
            Some(pos) => pos,
            None => sample(rng, AGENT_SPAWN_RANGE),
        };
        agent.state.vel = Vec2::ZERO;
        agent.state.comm.clear();
        agent.state.comm.resize(dim_c, 0.0);
    }

    for (i, landmark) in world.landmarks.iter_mut().enumerate() {
        if landmark.boundary {
            continue;
        }
        landmark.state.pos = match overrides.and_then(|o| o.obstacle(i)) {
            Some(pos) => pos,
            None => {
                tracing::trace!(landmark = %landmark.name, "sampling obstacle position");
                sample(rng, OBSTACLE_SPAWN_RANGE)
            }
        };
        landmark.state.vel = Vec2::ZERO;
    }

    if let Some(overrides) = overrides {
        for name in overrides.agents.keys() {
            if world.agent(name).is_none() {
                tracing::debug!(%name, "ignoring override for unknown agent");
            }
        }
        tracing::debug!(
            agents = overrides.agents.len(),
            obstacles = overrides.obstacles.len(),
            "applied reset overrides"
        );
    }
}

fn sample<R: UniformSource + ?Sized>(rng: &mut R, (low, high): (f32, f32)) -> Vec2 {
    let x = rng.uniform(low, high);
    let y = rng.uniform(low, high);
    Vec2::new(x, y)
}
