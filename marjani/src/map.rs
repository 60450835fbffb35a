//! Expanding map of everything the robot has learned about the house.
//!
//! The map is sparse and keyed by [`RelativeCoordinate`]. A tile with no
//! entry is unknown. Entries are created the first time a tile is visited or
//! sensed and are never removed, so the map is an append-only knowledge base
//! whose size is bounded by the explored area.

use std::collections::HashMap;

use crate::core::{Direction, RelativeCoordinate};

/// Knowledge about a single tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tile {
    /// Impassable (reported by the wall sensor)
    pub is_wall: bool,
    /// The docking station
    pub is_charging_station: bool,
    /// The robot has stood on this tile
    pub visited: bool,
    /// Last observed dirt level
    dirt: Option<u32>,
}

impl Tile {
    /// Has a dirt level been observed here?
    #[inline]
    pub fn dirt_known(&self) -> bool {
        self.dirt.is_some()
    }

    /// Last observed dirt level, if any.
    #[inline]
    pub fn dirt(&self) -> Option<u32> {
        self.dirt
    }

    /// Single character representation for debugging
    pub fn as_char(&self) -> char {
        if self.is_charging_station {
            'D'
        } else if self.is_wall {
            'W'
        } else {
            match self.dirt {
                Some(0) => ' ',
                Some(level) => char::from_digit(level.min(9), 10).unwrap_or('9'),
                None => '.',
            }
        }
    }
}

/// Sparse, growing map of the house.
#[derive(Debug, Default)]
pub struct ExpandingMap {
    tiles: HashMap<RelativeCoordinate, Tile>,
    charging_station: Option<RelativeCoordinate>,
}

impl ExpandingMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            tiles: HashMap::with_capacity(256),
            charging_station: None,
        }
    }

    /// Mark `coord` as the charging station (open and visited).
    pub fn register_charging_station(&mut self, coord: RelativeCoordinate) {
        let tile = self.tiles.entry(coord).or_default();
        tile.is_charging_station = true;
        tile.is_wall = false;
        tile.visited = true;
        self.charging_station = Some(coord);
    }

    /// Coordinate of the charging station, once registered.
    pub fn charging_station(&self) -> Option<RelativeCoordinate> {
        self.charging_station
    }

    /// Record that the neighbour of `coord` in `direction` is a wall.
    ///
    /// Returns `true` if this is new knowledge. Recording a known wall
    /// again changes nothing.
    pub fn record_wall(&mut self, coord: RelativeCoordinate, direction: Direction) -> bool {
        if !direction.is_move() {
            return false;
        }

        let tile = self.tiles.entry(coord + direction).or_default();
        let is_new = !tile.is_wall;
        tile.is_wall = true;
        is_new
    }

    /// Mark `coord` as open floor the robot has visited.
    pub fn record_floor(&mut self, coord: RelativeCoordinate) {
        let tile = self.tiles.entry(coord).or_default();
        tile.is_wall = false;
        tile.visited = true;
    }

    /// Remember the dirt level observed at `coord`.
    pub fn record_dirt(&mut self, coord: RelativeCoordinate, level: u32) {
        self.tiles.entry(coord).or_default().dirt = Some(level);
    }

    /// Is `coord` known to be impassable? Unknown tiles are not.
    #[inline]
    pub fn is_known_wall(&self, coord: RelativeCoordinate) -> bool {
        self.tiles.get(&coord).is_some_and(|t| t.is_wall)
    }

    /// Has the robot stood on `coord`?
    #[inline]
    pub fn is_visited(&self, coord: RelativeCoordinate) -> bool {
        self.tiles.get(&coord).is_some_and(|t| t.visited)
    }

    /// Last observed dirt level at `coord`.
    pub fn dirt_at(&self, coord: RelativeCoordinate) -> Option<u32> {
        self.tiles.get(&coord).and_then(|t| t.dirt)
    }

    /// Knowledge about `coord`, if any.
    pub fn tile(&self, coord: RelativeCoordinate) -> Option<&Tile> {
        self.tiles.get(&coord)
    }

    /// Number of known tiles (walls included).
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True when nothing is known yet.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of tiles the robot has stood on.
    pub fn visited_count(&self) -> usize {
        self.tiles.values().filter(|t| t.visited).count()
    }

    /// Number of known walls.
    pub fn wall_count(&self) -> usize {
        self.tiles.values().filter(|t| t.is_wall).count()
    }

    /// Sum of the last observed dirt levels.
    pub fn known_dirt(&self) -> u32 {
        self.tiles.values().filter_map(|t| t.dirt).sum()
    }

    /// Render the known area as text, north row first.
    ///
    /// `R` marks `robot`, `.` a sensed-but-unvisited tile and `?` unknown
    /// space inside the bounding box.
    pub fn render_ascii(&self, robot: RelativeCoordinate) -> String {
        let Some((min_x, max_x, min_y, max_y)) = self.bounds() else {
            return String::new();
        };

        let mut out = String::new();
        for y in (min_y..=max_y).rev() {
            for x in min_x..=max_x {
                let coord = RelativeCoordinate::new(x, y);
                let c = if coord == robot {
                    'R'
                } else {
                    self.tiles.get(&coord).map_or('?', Tile::as_char)
                };
                out.push(c);
            }
            out.push('\n');
        }
        out
    }

    fn bounds(&self) -> Option<(i32, i32, i32, i32)> {
        let mut keys = self.tiles.keys();
        let first = keys.next()?;
        let init = (first.x, first.x, first.y, first.y);
        Some(keys.fold(init, |(lx, hx, ly, hy), c| {
            (lx.min(c.x), hx.max(c.x), ly.min(c.y), hy.max(c.y))
        }))
    }
}
