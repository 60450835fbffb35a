//! House loader for YAML layout files
//!
//! A house file names the run budgets and draws the floor plan row by row:
//!
//! ```yaml
//! name: small_room
//! max_steps: 100
//! max_battery: 20
//! layout:
//!   - "WWWWW"
//!   - "WD01W"
//!   - "W  2W"
//!   - "WWWWW"
//! ```
//!
//! `W` is a wall, `D` the docking station, a digit the dirt level of a
//! floor tile and a space clean floor. Rows may be ragged; anything
//! outside the drawn layout counts as wall.

use crate::error::{Result, SimError};
use marjani::{Direction, RelativeCoordinate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// House file contents as written on disk
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HouseFile {
    /// Display name
    #[serde(default)]
    pub name: String,

    /// Step budget for a run
    pub max_steps: u32,

    /// Battery capacity in steps
    pub max_battery: f32,

    /// Floor plan, northmost row first
    pub layout: Vec<String>,
}

/// One tile of the house
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Floor { dirt: u32 },
    Dock,
}

impl Cell {
    fn parse(ch: char) -> Option<Self> {
        match ch {
            'W' => Some(Cell::Wall),
            'D' => Some(Cell::Dock),
            ' ' => Some(Cell::Floor { dirt: 0 }),
            d => d.to_digit(10).map(|dirt| Cell::Floor { dirt }),
        }
    }

    /// Dirt on this tile
    pub fn dirt(&self) -> u32 {
        match self {
            Cell::Floor { dirt } => *dirt,
            Cell::Wall | Cell::Dock => 0,
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Cell::Wall)
    }
}

/// Absolute tile position: row grows southwards, column eastwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HousePos {
    pub row: i32,
    pub col: i32,
}

impl HousePos {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Neighbouring position in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.unit_vector();
        Self::new(self.row - dy, self.col + dx)
    }

    /// Position of a coordinate relative to `self` (north is up).
    pub fn offset(self, coord: RelativeCoordinate) -> Self {
        Self::new(self.row - coord.y, self.col + coord.x)
    }
}

impl fmt::Display for HousePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

/// Validated house
#[derive(Clone, Debug)]
pub struct House {
    name: String,
    max_steps: u32,
    max_battery: f32,
    cells: Vec<Vec<Cell>>,
    dock: HousePos,
}

impl House {
    /// Load and validate a house from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SimError::House(format!(
                "Failed to read house file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut file: HouseFile = serde_yaml::from_str(&content)?;
        if file.name.is_empty()
            && let Some(stem) = path.file_stem()
        {
            file.name = stem.to_string_lossy().into_owned();
        }
        Self::from_file(file)
    }

    /// Parse a house from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: HouseFile = serde_yaml::from_str(yaml)?;
        Self::from_file(file)
    }

    /// Validate a parsed house file.
    pub fn from_file(file: HouseFile) -> Result<Self> {
        if !(file.max_battery > 0.0 && file.max_battery.is_finite()) {
            return Err(SimError::House(format!(
                "max_battery must be positive, got {}",
                file.max_battery
            )));
        }

        let mut dock: Option<HousePos> = None;
        let mut cells = Vec::with_capacity(file.layout.len());

        for (row, line) in file.layout.iter().enumerate() {
            let mut cells_row = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::parse(ch).ok_or_else(|| {
                    SimError::House(format!(
                        "Unknown character {:?} at row {}, col {}",
                        ch, row, col
                    ))
                })?;

                if cell == Cell::Dock {
                    let pos = HousePos::new(row as i32, col as i32);
                    if let Some(first) = dock {
                        return Err(SimError::House(format!(
                            "Multiple docking stations at ({}) and ({})",
                            first, pos
                        )));
                    }
                    dock = Some(pos);
                }
                cells_row.push(cell);
            }
            cells.push(cells_row);
        }

        let dock = dock.ok_or_else(|| SimError::House("No docking station in layout".to_string()))?;

        Ok(Self {
            name: file.name,
            max_steps: file.max_steps,
            max_battery: file.max_battery,
            cells,
            dock,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    pub fn max_battery(&self) -> f32 {
        self.max_battery
    }

    pub fn dock(&self) -> HousePos {
        self.dock
    }

    /// Number of layout rows
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Cell at `pos`; wall outside the layout.
    pub fn cell(&self, pos: HousePos) -> Cell {
        if pos.row < 0 || pos.col < 0 {
            return Cell::Wall;
        }
        self.cells
            .get(pos.row as usize)
            .and_then(|row| row.get(pos.col as usize))
            .copied()
            .unwrap_or(Cell::Wall)
    }

    pub fn is_wall(&self, pos: HousePos) -> bool {
        self.cell(pos).is_wall()
    }

    pub fn dirt_at(&self, pos: HousePos) -> u32 {
        self.cell(pos).dirt()
    }

    /// Remove one unit of dirt; returns false if there was none.
    pub fn clean(&mut self, pos: HousePos) -> bool {
        if pos.row < 0 || pos.col < 0 {
            return false;
        }
        match self
            .cells
            .get_mut(pos.row as usize)
            .and_then(|row| row.get_mut(pos.col as usize))
        {
            Some(Cell::Floor { dirt }) if *dirt > 0 => {
                *dirt -= 1;
                true
            }
            _ => false,
        }
    }

    /// Dirt left in the whole house
    pub fn total_dirt(&self) -> u32 {
        self.cells.iter().flatten().map(Cell::dirt).sum()
    }

    /// Number of non-wall tiles
    pub fn floor_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| !c.is_wall()).count()
    }
}
