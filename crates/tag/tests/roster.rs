use tag::{build_world, TagConfig, NUM_BOUNDARIES};
use world::Role;

#[test]
fn predators_precede_prey_for_every_shape() {
    for num_good in 0..4 {
        for num_adversaries in 0..4 {
            let world = build_world(&TagConfig::new(num_good, num_adversaries, 1));
            assert_eq!(world.agents.len(), num_good + num_adversaries);

            let first_prey = world
                .agents
                .iter()
                .position(|a| a.role == Role::Prey)
                .unwrap_or(world.agents.len());
            assert_eq!(first_prey, num_adversaries);
            assert!(world.agents[first_prey..].iter().all(|a| a.role == Role::Prey));
        }
    }
}

#[test]
fn names_restart_per_role() {
    let world = build_world(&TagConfig::new(2, 3, 0));
    let names: Vec<_> = world.agents.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(
        names,
        ["adversary_0", "adversary_1", "adversary_2", "agent_0", "agent_1"]
    );
}

#[test]
fn role_parameters() {
    let world = build_world(&TagConfig::default());

    let predator = world.agent("adversary_0").unwrap();
    assert_eq!(predator.size, 0.075);
    assert_eq!(predator.accel, 3.0);
    assert_eq!(predator.max_speed, 1.0);

    let prey = world.agent("agent_0").unwrap();
    assert_eq!(prey.size, 0.05);
    assert_eq!(prey.accel, 4.0);
    assert_eq!(prey.max_speed, 1.3);

    for agent in &world.agents {
        assert!(agent.collide);
        assert!(agent.silent);
        assert!(agent.movable);
        assert_eq!(agent.state.comm.len(), world.dim_c);
    }
}

#[test]
fn obstacles_then_boundaries() {
    let world = build_world(&TagConfig::new(1, 1, 3));
    assert_eq!(world.landmarks.len(), 3 + NUM_BOUNDARIES);

    for (i, obstacle) in world.landmarks[..3].iter().enumerate() {
        assert_eq!(obstacle.name, format!("landmark {i}"));
        assert!(obstacle.collide);
        assert!(!obstacle.movable);
        assert!(!obstacle.boundary);
        assert_eq!(obstacle.size, 0.2);
    }
    assert!(world.landmarks[3..].iter().all(|l| l.boundary));
}

#[test]
fn empty_roster_is_valid() {
    let world = build_world(&TagConfig::new(0, 0, 0));
    assert!(world.agents.is_empty());
    assert_eq!(world.landmarks.len(), NUM_BOUNDARIES);
    assert_eq!((world.dim_p, world.dim_c), (2, 2));
}
