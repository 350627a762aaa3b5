use glam::Vec2;
use tag::{build_world, reset_world, ResetOverrides, TagConfig};
use world::Role;

#[test]
fn positions_fall_in_spawn_ranges() {
    let mut world = build_world(&TagConfig::new(4, 4, 4));
    let mut rng = fastrand::Rng::with_seed(11);

    for _ in 0..50 {
        reset_world(&mut world, &mut rng, None);
        for agent in &world.agents {
            let p = agent.state.pos;
            assert!(p.x.abs() <= 1.0 && p.y.abs() <= 1.0, "{} at {p}", agent.name);
        }
        for obstacle in world.obstacles() {
            let p = obstacle.state.pos;
            assert!(p.x.abs() <= 0.9 && p.y.abs() <= 0.9, "{} at {p}", obstacle.name);
        }
    }
}

#[test]
fn velocities_and_comm_are_zeroed() {
    let mut world = build_world(&TagConfig::default());
    for agent in &mut world.agents {
        agent.state.vel = Vec2::new(0.4, -0.3);
        agent.state.comm = vec![1.0, 1.0];
    }
    for landmark in &mut world.landmarks {
        if !landmark.boundary {
            landmark.state.vel = Vec2::ONE;
        }
    }

    reset_world(&mut world, &mut fastrand::Rng::with_seed(0), None);

    for agent in &world.agents {
        assert_eq!(agent.state.vel, Vec2::ZERO);
        assert_eq!(agent.state.comm, vec![0.0; world.dim_c]);
    }
    for landmark in &world.landmarks {
        assert_eq!(landmark.state.vel, Vec2::ZERO);
    }
}

#[test]
fn colors_follow_role() {
    let mut world = build_world(&TagConfig::default());
    reset_world(&mut world, &mut fastrand::Rng::with_seed(0), None);
    for agent in &world.agents {
        let expected = match agent.role {
            Role::Predator => tag::reset::PREDATOR_COLOR,
            Role::Prey => tag::reset::PREY_COLOR,
        };
        assert_eq!(agent.color, expected);
    }
}

#[test]
fn agent_override_is_exact_and_copied() {
    let mut world = build_world(&TagConfig::default());
    let mut overrides = ResetOverrides::new().with_agent("adversary_0", Vec2::new(0.3, -0.2));

    reset_world(&mut world, &mut fastrand::Rng::with_seed(5), Some(&overrides));
    assert_eq!(world.agent("adversary_0").unwrap().state.pos, Vec2::new(0.3, -0.2));

    overrides.agents.insert("adversary_0".into(), Vec2::new(0.9, 0.9));
    if let Some(pos) = overrides.agents.get_mut("adversary_0") {
        pos.x = -0.5;
    }
    assert_eq!(world.agent("adversary_0").unwrap().state.pos, Vec2::new(0.3, -0.2));
}

#[test]
fn obstacle_overrides_apply_by_index() {
    let mut world = build_world(&TagConfig::new(1, 1, 3));
    let overrides = ResetOverrides::new().with_obstacles([Vec2::new(0.1, 0.2), Vec2::new(-0.4, 0.5)]);

    reset_world(&mut world, &mut fastrand::Rng::with_seed(9), Some(&overrides));

    assert_eq!(world.landmarks[0].state.pos, Vec2::new(0.1, 0.2));
    assert_eq!(world.landmarks[1].state.pos, Vec2::new(-0.4, 0.5));
    // Past the end of the list: sampled.
    let p = world.landmarks[2].state.pos;
    assert!(p.x.abs() <= 0.9 && p.y.abs() <= 0.9);
}

#[test]
fn malformed_overrides_fall_back_to_sampling() {
    let overrides = ResetOverrides::new()
        .with_agent("agent_7", Vec2::new(0.5, 0.5))
        .with_obstacles([Vec2::new(0.0, 0.0); 5]);

    let mut with = build_world(&TagConfig::new(1, 1, 2));
    let mut without = with.clone();
    reset_world(&mut with, &mut fastrand::Rng::with_seed(21), Some(&overrides));
    reset_world(&mut without, &mut fastrand::Rng::with_seed(21), None);

    // Unknown names change nothing for the real agents.
    assert_eq!(with.agents[0].state.pos, without.agents[0].state.pos);
    assert_eq!(with.agents[1].state.pos, without.agents[1].state.pos);
    // A list longer than the obstacle count is used up to the obstacle count.
    assert_eq!(with.landmarks[0].state.pos, Vec2::ZERO);
    assert_eq!(with.landmarks[1].state.pos, Vec2::ZERO);
}

#[test]
fn same_seed_same_episode() {
    let mut a = build_world(&TagConfig::default());
    let mut b = build_world(&TagConfig::default());
    reset_world(&mut a, &mut fastrand::Rng::with_seed(1234), None);
    reset_world(&mut b, &mut fastrand::Rng::with_seed(1234), None);
    assert_eq!(a, b);

    reset_world(&mut b, &mut fastrand::Rng::with_seed(1234), None);
    assert_eq!(a, b);

    reset_world(&mut b, &mut fastrand::Rng::with_seed(4321), None);
    assert_ne!(a.agents[0].state.pos, b.agents[0].state.pos);
}
