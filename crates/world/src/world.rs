//! # World Container
//!
//! The [`World`] is owned by the host runtime. Scenario code reads it on every
//! step and writes it only during an episode reset; the host's physics engine
//! is the only other writer.

use crate::types::{Agent, Landmark, Role};

/// Number of spatial dimensions.
pub const DIM_P: usize = 2;
/// Default length of the communication channel.
pub const DIM_C: usize = 2;

#[derive(Clone, Debug, PartialEq)]
pub struct World {
    pub dim_p: usize,
    pub dim_c: usize,
    /// Ordered roster. Scenario builders document their ordering guarantees.
    pub agents: Vec<Agent>,
    /// Ordered landmarks: obstacles first, then boundary markers.
    pub landmarks: Vec<Landmark>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dim_p: DIM_P,
            dim_c: DIM_C,
            agents: Vec::new(),
            landmarks: Vec::new(),
        }
    }

    /// Looks up an agent by its unique name.
    #[must_use]
    pub fn agent(&self, name: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.name == name)
    }

    /// Agents with the given role, in roster order.
    pub fn agents_with_role(&self, role: Role) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.iter().filter(move |a| a.role == role)
    }

    pub fn predators(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents_with_role(Role::Predator)
    }

    pub fn prey(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents_with_role(Role::Prey)
    }

    /// Landmarks that are not boundary markers, in roster order.
    pub fn obstacles(&self) -> impl Iterator<Item = &Landmark> + '_ {
        self.landmarks.iter().filter(|l| !l.boundary)
    }

    pub fn boundaries(&self) -> impl Iterator<Item = &Landmark> + '_ {
        self.landmarks.iter().filter(|l| l.boundary)
    }

    #[must_use]
    pub fn count_role(&self, role: Role) -> usize {
        self.agents_with_role(role).count()
    }
}
