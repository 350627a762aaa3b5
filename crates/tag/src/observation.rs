//! # Observation Encoder
//!
//! Every agent sees the world in its own frame, concatenated in this order:
//!
//! 1. own velocity
//! 2. own position
//! 3. each obstacle's position relative to the observer
//! 4. each other agent's position relative to the observer, in roster order
//! 5. each other prey's raw velocity
//!
//! Predator velocities are never observed by anyone. Boundary markers are
//! fixed and therefore left out.

use world::{Agent, Role, World};

/// Length of the vector [`observation`] produces for an agent of `role` in
/// `world`.
///
/// Agents of the same role in the same world always get the same length, so
/// this can size a per-role policy input before the first episode.
#[must_use]
pub fn observation_size(world: &World, role: Role) -> usize {
    let dim = world.dim_p;
    let obstacles = world.obstacles().count();
    let others = world.agents.len().saturating_sub(1);
    let visible_prey = match role {
        Role::Prey => world.count_role(Role::Prey).saturating_sub(1),
        Role::Predator => world.count_role(Role::Prey),
    };
    dim * (2 + obstacles + others + visible_prey)
}

/// Feature vector observed by `agent`.
///
/// The observer is excluded from the "other agents" blocks by its name,
/// which is unique within a roster.
#[must_use]
pub fn observation(agent: &Agent, world: &World) -> Vec<f32> {
    let origin = agent.state.pos;
    let mut obs = Vec::with_capacity(observation_size(world, agent.role));

    obs.extend_from_slice(&agent.state.vel.to_array());
    obs.extend_from_slice(&origin.to_array());

    for obstacle in world.obstacles() {
        obs.extend_from_slice(&(obstacle.state.pos - origin).to_array());
    }

    for other in others(agent, world) {
        obs.extend_from_slice(&(other.state.pos - origin).to_array());
    }
    for other in others(agent, world).filter(|other| other.role.is_prey()) {
        obs.extend_from_slice(&other.state.vel.to_array());
    }

    obs
}

fn others<'a>(agent: &'a Agent, world: &'a World) -> impl Iterator<Item = &'a Agent> + 'a {
    world.agents.iter().filter(move |other| other.name != agent.name)
}
