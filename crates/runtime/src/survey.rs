//! Episode-start survey: resets a scenario repeatedly and evaluates every
//! agent's reward, observation and benchmark on the fresh state.

use tag::{ResetOverrides, TagScenario};
use world::{Role, Scenario};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RoleStats {
    pub agents: usize,
    pub obs_size: usize,
    pub reward_sum: f32,
}

impl RoleStats {
    /// Mean reward per agent per episode.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_reward(&self, episodes: usize) -> f32 {
        let samples = self.agents * episodes;
        if samples == 0 {
            0.0
        } else {
            self.reward_sum / samples as f32
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Summary {
    pub episodes: usize,
    pub predators: RoleStats,
    pub prey: RoleStats,
    /// Sum of predator benchmark counts over all episodes.
    pub catches: f32,
}

/// Runs `episodes` seeded resets of `scenario`.
pub fn run(
    scenario: &TagScenario,
    overrides: Option<&ResetOverrides>,
    episodes: usize,
    seed: u64,
) -> Summary {
    let mut world = scenario.make_world();
    let mut rng = fastrand::Rng::with_seed(seed);

    let mut summary = Summary {
        episodes,
        predators: RoleStats {
            agents: world.count_role(Role::Predator),
            obs_size: scenario.observation_size(&world, Role::Predator),
            reward_sum: 0.0,
        },
        prey: RoleStats {
            agents: world.count_role(Role::Prey),
            obs_size: scenario.observation_size(&world, Role::Prey),
            reward_sum: 0.0,
        },
        catches: 0.0,
    };

    for episode in 0..episodes {
        scenario.reset_world(&mut world, &mut rng, overrides);

        let mut episode_catches = 0.0;
        for agent in &world.agents {
            let reward = scenario.reward(agent, &world);
            let obs = scenario.observation(agent, &world);
            debug_assert_eq!(obs.len(), scenario.observation_size(&world, agent.role));

            let stats = match agent.role {
                Role::Predator => &mut summary.predators,
                Role::Prey => &mut summary.prey,
            };
            stats.reward_sum += reward;
            episode_catches += scenario.benchmark_data(agent, &world);
        }
        summary.catches += episode_catches;

        tracing::debug!(episode, catches = episode_catches, "episode start evaluated");
    }

    summary
}
