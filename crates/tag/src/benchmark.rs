use world::{is_collision, Agent, World};

/// Number of prey a predator is currently touching. Always zero for prey.
///
/// Metrics only; rewards are computed independently.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn benchmark_data(agent: &Agent, world: &World) -> f32 {
    if !agent.is_predator() {
        return 0.0;
    }
    world.prey().filter(|prey| is_collision(*prey, agent)).count() as f32
}
