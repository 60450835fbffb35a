//! Engine scenarios on in-memory houses
//!
//! Drives the decision engine through whole runs against a grid world and
//! checks the run-level guarantees: success when everything reachable is
//! cleaned, never stranding the robot, exact retracing and a battery that
//! only moves by the amounts each action allows.

mod common;

use approx::assert_relative_eq;
use common::{Cell, TestBattery, World, engine_for};
use marjani::{
    Action, Direction, EngineState, ExitCondition, PathStack, PositionTracker, RelativeCoordinate,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_small_room_is_cleaned_and_robot_docks() {
    let world = World::parse(&[
        "WWWWW", //
        "W   W",
        "W D1W",
        "W   W",
        "WWWWW",
    ]);
    let (mut engine, handle) = engine_for(world, TestBattery::new(10.0, 1.0), 20);

    let exit = engine.run().unwrap();

    assert_eq!(exit, ExitCondition::Success);
    assert_eq!(engine.steps_taken(), 9);
    assert_eq!(handle.0.borrow().total_dirt(), 0);
    assert_eq!(handle.0.borrow().robot, handle.0.borrow().dock);
    assert_eq!(handle.0.borrow().bumps, 0);
    assert_relative_eq!(engine.battery().level, 1.0);

    let actions: Vec<Action> = engine.trace().iter().map(|r| r.action).collect();
    assert_eq!(
        &actions[..5],
        &[
            Action::Move(Direction::North),
            Action::Move(Direction::East),
            Action::Move(Direction::South),
            Action::Clean,
            Action::Move(Direction::South),
        ]
    );
    assert!(actions[5..].iter().all(|a| matches!(a, Action::Retrace(_))));
}

#[test]
fn test_corridor_return_arrives_with_empty_battery() {
    let world = World::parse(&[
        "WWWWWW", //
        "WD123W",
        "WWWWWW",
    ]);
    let (mut engine, handle) = engine_for(world, TestBattery::new(20.0, 1.0), 100);

    let exit = engine.run().unwrap();

    // Back on the dock with exactly nothing left is still a success
    assert_eq!(exit, ExitCondition::Success);
    assert_eq!(engine.steps_taken(), 20);
    assert_relative_eq!(engine.battery().level, 0.0);
    assert_eq!(handle.0.borrow().total_dirt(), 0);
    assert!(engine.path().is_empty());
}

#[test]
fn test_dirt_cleaned_with_round_trip_plus_one_capacity() {
    // Out, clean and back costs exactly three units
    let world = World::parse(&[
        "WWWW", //
        "WD1W",
        "WWWW",
    ]);
    let (mut engine, handle) = engine_for(world, TestBattery::new(3.0, 1.0), 40);

    let exit = engine.run().unwrap();

    assert_eq!(exit, ExitCondition::Success);
    assert_eq!(handle.0.borrow().total_dirt(), 0);
    assert_eq!(engine.steps_taken(), 3);
    assert_relative_eq!(engine.battery().level, 0.0);

    let actions: Vec<Action> = engine.trace().iter().map(|r| r.action).collect();
    assert_eq!(
        actions,
        vec![
            Action::Move(Direction::East),
            Action::Clean,
            Action::Retrace(Direction::West),
        ]
    );
}

#[test]
fn test_low_battery_never_strands_robot() {
    // Dirt five tiles out with only two units of battery
    let world = World::parse(&[
        "WWWWWWWW", //
        "WD00005W",
        "WWWWWWWW",
    ]);
    let (mut engine, handle) = engine_for(world, TestBattery::new(2.0, 0.5), 60);

    let exit = engine.run().unwrap();

    assert_eq!(exit, ExitCondition::StepLimitReached);
    assert_eq!(handle.0.borrow().total_dirt(), 5);
    assert!(engine.trace().iter().all(|r| r.battery >= 0.0));
    assert!(
        engine
            .trace()
            .iter()
            .all(|r| r.position.manhattan_distance(&RelativeCoordinate::ORIGIN) <= 1)
    );

    // The return starts while one unit is still left
    let first_retrace = engine
        .trace()
        .iter()
        .position(|r| matches!(r.action, Action::Retrace(_)))
        .unwrap();
    assert_eq!(first_retrace, 1);
    assert_relative_eq!(engine.trace()[0].battery, 1.0);
    assert_relative_eq!(engine.trace()[first_retrace].battery, 0.0);
    assert!(engine.trace()[first_retrace].position.is_origin());

    // Out, back, then four half-unit charges
    let cycle: Vec<Action> = engine.trace()[..6].iter().map(|r| r.action).collect();
    assert_eq!(
        cycle,
        vec![
            Action::Move(Direction::East),
            Action::Retrace(Direction::West),
            Action::Charge,
            Action::Charge,
            Action::Charge,
            Action::Charge,
        ]
    );
    assert_eq!(engine.trace()[6].action, Action::Move(Direction::East));
}

#[test]
fn test_retracing_path_stack_returns_to_origin() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let mut tracker = PositionTracker::new();
        let mut path = PathStack::new();
        let len = rng.random_range(1..40);

        for _ in 0..len {
            let direction = Direction::CARDINAL[rng.random_range(0..4)];
            tracker.advance(direction);
            path.record_departure(direction);
        }
        assert_eq!(path.len(), len);

        while let Ok(step) = path.next_retrace_step() {
            tracker.advance(step);
        }
        assert!(tracker.is_at_charging_station());
        assert!(path.is_empty());
    }
}

#[test]
fn test_battery_changes_match_actions() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..20 {
        let max = rng.random_range(4..30) as f32;
        let world = World::random(&mut rng);
        let (mut engine, _) = engine_for(world, TestBattery::new(max, 2.0), 300);
        engine.run().unwrap();

        let mut previous = max;
        for record in engine.trace() {
            match record.action {
                Action::Move(_) | Action::Retrace(_) | Action::Clean => {
                    assert_relative_eq!(record.battery, previous - 1.0);
                }
                Action::Charge => {
                    assert_relative_eq!(record.battery, (previous + 2.0).min(max));
                    assert!(record.position.is_origin());
                    assert_eq!(record.state, EngineState::Charging);
                }
                Action::Stay => assert_relative_eq!(record.battery, previous),
            }
            assert!(record.battery >= 0.0 && record.battery <= max);
            previous = record.battery;
        }
    }
}

#[test]
fn test_random_houses_terminate_safely() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..100 {
        let world = World::random(&mut rng);
        let max_battery = rng.random_range(2..40) as f32;
        let max_steps = rng.random_range(1..500);
        let (mut engine, handle) = engine_for(world, TestBattery::new(max_battery, 1.0), max_steps);

        let exit = engine.run().unwrap();

        assert_ne!(exit, ExitCondition::BatteryStuck);
        assert!(engine.steps_taken() <= max_steps);
        assert_eq!(engine.trace().len() as u32, engine.steps_taken());

        let world = handle.0.borrow();
        assert_eq!(world.bumps, 0);
        for record in engine.trace() {
            assert!(matches!(
                world.cell(world.absolute(record.position)),
                Cell::Floor(_)
            ));
        }
        if exit == ExitCondition::Success {
            assert_eq!(world.total_dirt(), 0);
            assert!(engine.position().is_origin());
        }
    }
}
