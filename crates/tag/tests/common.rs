#![allow(dead_code)]

use glam::Vec2;
use tag::{build_world, TagConfig};
use world::{Agent, World};

/// A default world with every agent and obstacle parked well apart and inside
/// the soft arena limit, so no catch or boundary penalty fires by accident.
pub fn quiet_world(config: &TagConfig) -> World {
    let mut world = build_world(config);
    let n = world.agents.len();
    for (i, agent) in world.agents.iter_mut().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let x = -0.8 + 1.6 * (i as f32) / (n.max(2) - 1) as f32;
        agent.state.pos = Vec2::new(x, 0.0);
    }
    for landmark in world.landmarks.iter_mut().filter(|l| !l.boundary) {
        landmark.state.pos = Vec2::new(0.0, 0.7);
    }
    world
}

pub fn place(world: &mut World, name: &str, x: f32, y: f32) {
    let agent = world
        .agents
        .iter_mut()
        .find(|a| a.name == name)
        .unwrap_or_else(|| panic!("no agent named {name}"));
    agent.state.pos = Vec2::new(x, y);
}

pub fn agent<'a>(world: &'a World, name: &str) -> &'a Agent {
    world.agent(name).unwrap_or_else(|| panic!("no agent named {name}"))
}
