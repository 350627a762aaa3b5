//! # Reward Engine
//!
//! Prey lose [`CATCH_REWARD`] for every predator touching them. Predators share
//! one team signal: each of them earns [`CATCH_REWARD`] for every colliding
//! predator-prey pair in the world, whoever made the catch.
//!
//! Both roles pay [`boundary_penalty`] per axis for straying from the arena.
//! Predators get a wider soft limit to make up for their lower top speed.

use world::{is_collision, Agent, Role, World};

use crate::config::RewardShaping;

pub const CATCH_REWARD: f32 = 10.0;
pub const SHAPING_SCALE: f32 = 0.1;

/// `(low, high)` thresholds of the prey boundary penalty.
pub const PREY_BOUNDS: (f32, f32) = (0.9, 1.0);
/// `(low, high)` thresholds of the predator boundary penalty.
pub const PREDATOR_BOUNDS: (f32, f32) = (1.1, 1.2);

const MAX_BOUNDARY_PENALTY: f32 = 10.0;

/// Penalty for a coordinate magnitude `x`.
///
/// Zero below `low`, a linear ramp `(x - low) * 10` up to `high`, and
/// `exp(2x - 2)` capped at 10 beyond it.
#[must_use]
pub fn boundary_penalty(x: f32, low: f32, high: f32) -> f32 {
    if x < low {
        0.0
    } else if x < high {
        (x - low) * 10.0
    } else {
        (2.0 * x - 2.0).exp().min(MAX_BOUNDARY_PENALTY)
    }
}

fn out_of_bounds(agent: &Agent, (low, high): (f32, f32)) -> f32 {
    let pos = agent.state.pos;
    boundary_penalty(pos.x.abs(), low, high) + boundary_penalty(pos.y.abs(), low, high)
}

/// Reward for `agent`, dispatched on its role.
#[must_use]
pub fn reward(agent: &Agent, world: &World, shaping: RewardShaping) -> f32 {
    match agent.role {
        Role::Predator => adversary_reward(agent, world, shaping),
        Role::Prey => agent_reward(agent, world, shaping),
    }
}

/// Prey reward: caught penalties plus the boundary penalty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn agent_reward(agent: &Agent, world: &World, shaping: RewardShaping) -> f32 {
    let mut rew = 0.0;

    if shaping.is_enabled() {
        rew += SHAPING_SCALE
            * world
                .predators()
                .map(|adv| agent.state.pos.distance(adv.state.pos))
                .sum::<f32>();
    }

    if agent.collide {
        let caught_by = world.predators().filter(|adv| is_collision(*adv, agent)).count();
        rew -= CATCH_REWARD * caught_by as f32;
    }

    rew - out_of_bounds(agent, PREY_BOUNDS)
}

/// Predator reward: the team catch bonus plus the boundary penalty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn adversary_reward(agent: &Agent, world: &World, shaping: RewardShaping) -> f32 {
    let mut rew = 0.0;

    if shaping.is_enabled() {
        for adv in world.predators() {
            let nearest = world
                .prey()
                .map(|prey| prey.state.pos.distance(adv.state.pos))
                .reduce(f32::min);
            if let Some(d) = nearest {
                rew -= SHAPING_SCALE * d;
            }
        }
    }

    if agent.collide {
        rew += CATCH_REWARD * team_catches(world) as f32;
    }

    rew - out_of_bounds(agent, PREDATOR_BOUNDS)
}

/// Colliding (prey, predator) pairs anywhere in the world.
#[must_use]
pub fn team_catches(world: &World) -> usize {
    world
        .prey()
        .map(|prey| world.predators().filter(|adv| is_collision(prey, *adv)).count())
        .sum()
}
