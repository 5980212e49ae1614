use roomsim::core::{Room, RoomSimulator, Simulator, Vec3, GRAVITY};
use roomsim::error::Result;

fn room_sim(velocity: Vec3, cor: f64, interval: f64) -> Result<RoomSimulator> {
    RoomSimulator::new(
        Some(velocity),
        cor,
        0.0,
        interval,
        1e-5,
        Room::default(),
        None,
    )
}

/// Free fall from rest, far from any wall: after n steps the velocity must
/// match the accumulated per-step increments and the position must match the
/// semi-implicit partial sums (each position update sees the velocity that
/// already includes that step's gravity).
#[test]
fn free_fall_matches_semi_implicit_partial_sums() -> Result<()> {
    let dt = 0.01;
    let mut sim = room_sim(Vec3::zero(), 1.0, dt)?;
    sim.set_position(Vec3::new(10.0, 10.0, 15.0))?;

    let mut expected_v = 0.0;
    let mut expected_z = 15.0;
    for _ in 0..50 {
        expected_v += -GRAVITY * dt;
        expected_z += expected_v * dt;
        let pos = sim.step();
        assert!((pos.z - expected_z).abs() < 1e-12);
        assert!((sim.velocity().z - expected_v).abs() < 1e-12);
        assert_eq!(pos.x, 10.0);
        assert_eq!(pos.y, 10.0);
    }
    Ok(())
}

/// A horizontal throw keeps x advancing linearly while z accrues gravity;
/// the two axes never contaminate each other.
#[test]
fn axes_integrate_independently() -> Result<()> {
    let dt = 0.01;
    let mut sim = room_sim(Vec3::new(2.0, 0.0, 0.0), 1.0, dt)?;
    sim.set_position(Vec3::new(5.0, 10.0, 15.0))?;

    for s in 1..=100 {
        let pos = sim.step();
        assert!((pos.x - (5.0 + 2.0 * dt * s as f64)).abs() < 1e-9);
        assert_eq!(pos.y, 10.0);
    }
    assert!(sim.position().z < 15.0);
    Ok(())
}

/// Reflection is velocity-only: a ball fast enough to cross the whole room
/// in one interval ends the step beyond the wall with a flipped velocity.
/// The fixed-step model accepts this overshoot by design of the policy.
#[test]
fn fast_ball_can_overshoot_the_wall_within_one_step() -> Result<()> {
    let dt = 0.01;
    let mut sim = room_sim(Vec3::new(5000.0, 0.0, 0.0), 1.0, dt)?;
    sim.set_position(Vec3::new(10.0, 10.0, 10.0))?;

    let pos = sim.step();
    assert!(pos.x > Room::default().max());
    assert!(sim.velocity().x < 0.0);
    Ok(())
}

/// The simulator clock starts at the configured time and accrues exactly one
/// interval per step.
#[test]
fn clock_accrues_one_interval_per_step() -> Result<()> {
    let mut sim = RoomSimulator::new(
        Some(Vec3::zero()),
        1.0,
        3.5,
        0.25,
        1e-5,
        Room::default(),
        None,
    )?;
    sim.set_position(Vec3::new(10.0, 10.0, 10.0))?;
    for s in 1..=8 {
        sim.step();
        assert!((sim.time() - (3.5 + 0.25 * s as f64)).abs() < 1e-12);
    }
    Ok(())
}
