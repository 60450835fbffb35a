//! In-memory grid world implementing the engine's collaborator traits.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use marjani::{
    BatteryMeter, DecisionEngine, Direction, DirtSensor, EngineConfig, RelativeCoordinate,
    RobotBody, WallsSensor,
};
use rand::Rng;
use rand::rngs::StdRng;

/// Grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Floor(u32),
}

/// House with the robot in it. Rows grow southwards.
pub struct World {
    pub cells: Vec<Vec<Cell>>,
    pub dock: (i32, i32),
    pub robot: (i32, i32),
    /// Moves the body refused because the target was a wall
    pub bumps: u32,
}

impl World {
    /// Parse `W` walls, `D` dock, digits (dirt) and spaces.
    pub fn parse(layout: &[&str]) -> Self {
        let mut dock = (0, 0);
        let cells = layout
            .iter()
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, ch)| match ch {
                        'W' => Cell::Wall,
                        'D' => {
                            dock = (row as i32, col as i32);
                            Cell::Floor(0)
                        }
                        d if d.is_ascii_digit() => Cell::Floor(d.to_digit(10).unwrap_or(0)),
                        _ => Cell::Floor(0),
                    })
                    .collect()
            })
            .collect();

        Self {
            cells,
            dock,
            robot: dock,
            bumps: 0,
        }
    }

    /// Random walled house with scattered interior walls and dirt.
    pub fn random(rng: &mut StdRng) -> Self {
        let rows = rng.random_range(3..9) + 2;
        let cols = rng.random_range(3..9) + 2;

        let mut cells = vec![vec![Cell::Wall; cols]; rows];
        for row in cells.iter_mut().take(rows - 1).skip(1) {
            for cell in row.iter_mut().take(cols - 1).skip(1) {
                *cell = if rng.random_bool(0.2) {
                    Cell::Wall
                } else if rng.random_bool(0.3) {
                    Cell::Floor(rng.random_range(1..4))
                } else {
                    Cell::Floor(0)
                };
            }
        }

        let dock = (
            rng.random_range(1..rows - 1) as i32,
            rng.random_range(1..cols - 1) as i32,
        );
        cells[dock.0 as usize][dock.1 as usize] = Cell::Floor(0);

        Self {
            cells,
            dock,
            robot: dock,
            bumps: 0,
        }
    }

    pub fn cell(&self, pos: (i32, i32)) -> Cell {
        if pos.0 < 0 || pos.1 < 0 {
            return Cell::Wall;
        }
        self.cells
            .get(pos.0 as usize)
            .and_then(|row| row.get(pos.1 as usize))
            .copied()
            .unwrap_or(Cell::Wall)
    }

    pub fn total_dirt(&self) -> u32 {
        self.cells
            .iter()
            .flatten()
            .map(|c| match c {
                Cell::Floor(d) => *d,
                Cell::Wall => 0,
            })
            .sum()
    }

    /// Absolute position of a coordinate relative to the dock.
    pub fn absolute(&self, coord: RelativeCoordinate) -> (i32, i32) {
        (self.dock.0 - coord.y, self.dock.1 + coord.x)
    }

    fn step(pos: (i32, i32), direction: Direction) -> (i32, i32) {
        let (dx, dy) = direction.unit_vector();
        (pos.0 - dy, pos.1 + dx)
    }
}

/// Shared handle used as dirt sensor, wall sensor and body.
#[derive(Clone)]
pub struct WorldHandle(pub Rc<RefCell<World>>);

impl DirtSensor for WorldHandle {
    fn dirt_level(&self) -> u32 {
        let world = self.0.borrow();
        match world.cell(world.robot) {
            Cell::Floor(d) => d,
            Cell::Wall => 0,
        }
    }

    fn decrement_dirt(&mut self) {
        let mut world = self.0.borrow_mut();
        let (row, col) = world.robot;
        if let Cell::Floor(d) = &mut world.cells[row as usize][col as usize] {
            *d = d.saturating_sub(1);
        }
    }
}

impl WallsSensor for WorldHandle {
    fn is_wall(&self, direction: Direction) -> bool {
        let world = self.0.borrow();
        world.cell(World::step(world.robot, direction)) == Cell::Wall
    }
}

impl RobotBody for WorldHandle {
    fn apply_move(&mut self, direction: Direction) {
        let mut world = self.0.borrow_mut();
        let target = World::step(world.robot, direction);
        if world.cell(target) == Cell::Wall {
            world.bumps += 1;
        } else {
            world.robot = target;
        }
    }

    fn dirt_remaining(&self) -> u32 {
        self.0.borrow().total_dirt()
    }
}

/// Battery that gains a fixed amount per charging tick.
pub struct TestBattery {
    pub level: f32,
    pub max: f32,
    pub charge_per_tick: f32,
    pub charging: bool,
}

impl TestBattery {
    pub fn new(max: f32, charge_per_tick: f32) -> Self {
        Self {
            level: max,
            max,
            charge_per_tick,
            charging: false,
        }
    }
}

impl BatteryMeter for TestBattery {
    fn level(&self) -> f32 {
        self.level
    }

    fn decrease_charge(&mut self) {
        self.level -= 1.0;
    }

    fn charge_battery(&mut self) {
        self.charging = true;
        self.level = (self.level + self.charge_per_tick).min(self.max);
    }

    fn stop_charging(&mut self) {
        self.charging = false;
    }

    fn is_full(&self) -> bool {
        self.level >= self.max
    }
}

pub type WorldEngine = DecisionEngine<WorldHandle, WorldHandle, TestBattery, WorldHandle>;

/// Build an engine over `world`.
pub fn engine_for(world: World, battery: TestBattery, max_steps: u32) -> (WorldEngine, WorldHandle) {
    let handle = WorldHandle(Rc::new(RefCell::new(world)));
    let engine = DecisionEngine::new(
        EngineConfig::with_max_steps(max_steps),
        handle.clone(),
        handle.clone(),
        battery,
        handle.clone(),
    );
    (engine, handle)
}
