#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Particle World Model
//!
//! Shared data model for continuous 2D multi-agent particle scenarios.
//!
//! This crate holds the state a host simulation runtime owns: the agents,
//! the landmarks and their positions and velocities. It does not integrate
//! forces over time. A physics engine owned by the host mutates the
//! [`World`] between steps, and scenario crates read it to produce rewards
//! and observations.
//!
//! ## Key Components
//!
//! -   **Entities:** [`Agent`] and [`Landmark`] in the [`types`] module. Agents
//!     carry a [`Role`] that partitions the roster.
//! -   **World:** [`World`] owns the ordered agent and landmark lists.
//! -   **Collision:** [`is_collision`] is the strict-overlap predicate used by
//!     scenario reward logic.
//! -   **Scenario:** [`Scenario`] is the contract a host uses to build, reset
//!     and query a scenario.
//! -   **Randomness:** [`UniformSource`] is the injected uniform sampler used
//!     by resets.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use world::{is_collision, World};
//!
//! let world: World = scenario.make_world();
//! let caught = is_collision(&world.agents[0], &world.agents[3]);
//! ```

pub mod collision;
pub mod rng;
pub mod scenario;
pub mod types;
pub mod world;

pub use collision::{is_collision, Body};
pub use glam::Vec2;
pub use rng::UniformSource;
pub use scenario::Scenario;
pub use types::{Agent, AgentState, Color, EntityState, Landmark, Role};
pub use world::World;
