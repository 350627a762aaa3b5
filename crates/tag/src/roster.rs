//! # Roster Builder
//!
//! Builds the agents, the static obstacles and the boundary for a tag world.
//!
//! Postcondition relied on by hosts that size one policy per role: the
//! roster holds exactly `num_adversaries` predators followed by exactly
//! `num_good` prey. Landmarks are the obstacles followed by the
//! [`boundary_markers`](crate::boundary::boundary_markers).

use world::{Agent, Landmark, Role, World};

use crate::boundary::boundary_markers;
use crate::config::TagConfig;

pub const PREDATOR_SIZE: f32 = 0.075;
pub const PREDATOR_ACCEL: f32 = 3.0;
pub const PREDATOR_MAX_SPEED: f32 = 1.0;

pub const PREY_SIZE: f32 = 0.05;
pub const PREY_ACCEL: f32 = 4.0;
pub const PREY_MAX_SPEED: f32 = 1.3;

pub const OBSTACLE_SIZE: f32 = 0.2;

/// Creates a world for the given roster. Positions are left at the origin
/// until the first reset.
#[must_use]
pub fn build_world(config: &TagConfig) -> World {
    let mut world = World::new();
    let dim_c = world.dim_c;

    world.agents.reserve(config.num_agents());
    world
        .agents
        .extend((0..config.num_adversaries).map(|i| make_agent(Role::Predator, i, dim_c)));
    world
        .agents
        .extend((0..config.num_good).map(|i| make_agent(Role::Prey, i, dim_c)));

    world.landmarks = (0..config.num_obstacles).map(make_obstacle).collect();
    world.landmarks.extend(boundary_markers());

    tracing::debug!(
        predators = config.num_adversaries,
        prey = config.num_good,
        obstacles = config.num_obstacles,
        "built tag world"
    );
    world
}

fn make_agent(role: Role, index: usize, dim_c: usize) -> Agent {
    let (name, size, accel, max_speed) = match role {
        Role::Predator => (
            format!("adversary_{index}"),
            PREDATOR_SIZE,
            PREDATOR_ACCEL,
            PREDATOR_MAX_SPEED,
        ),
        Role::Prey => (format!("agent_{index}"), PREY_SIZE, PREY_ACCEL, PREY_MAX_SPEED),
    };
    let mut agent = Agent::new(name, role, size, dim_c);
    agent.silent = true;
    agent.accel = accel;
    agent.max_speed = max_speed;
    agent
}

fn make_obstacle(index: usize) -> Landmark {
    Landmark::new(format!("landmark {index}"), OBSTACLE_SIZE)
}
