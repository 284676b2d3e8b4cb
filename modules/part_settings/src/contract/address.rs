//! Discrete spatial addressing for parts
//!
//! A part is anchored at one cell of an unbounded integer grid inside a
//! named space (a world). Neighbours are the six axis-aligned cells.

use std::fmt;
use std::str::FromStr;

/// One of the six axis-aligned directions of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// z - 1
    North,
    /// x + 1
    East,
    /// z + 1
    South,
    /// x - 1
    West,
    /// y + 1
    Up,
    /// y - 1
    Down,
}

impl Direction {
    /// All directions in canonical order
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit offset `(dx, dy, dz)` of this direction
    pub fn offset(self) -> (i32, i32, i32) {
        match self {
            Direction::North => (0, 0, -1),
            Direction::East => (1, 0, 0),
            Direction::South => (0, 0, 1),
            Direction::West => (-1, 0, 0),
            Direction::Up => (0, 1, 0),
            Direction::Down => (0, -1, 0),
        }
    }

    /// The direction pointing back
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::East => "EAST",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
            Direction::Up => "UP",
            Direction::Down => "DOWN",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a direction name is not one of the six grid directions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction '{0}'")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDirection(s.to_string()))
    }
}

/// Address of a cell: a named space plus integer coordinates
///
/// Equality and hashing are structural over all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpatialAddress {
    space_id: String,
    x: i32,
    y: i32,
    z: i32,
}

impl SpatialAddress {
    pub fn new(space_id: impl Into<String>, x: i32, y: i32, z: i32) -> Self {
        Self {
            space_id: space_id.into(),
            x,
            y,
            z,
        }
    }

    pub fn space_id(&self) -> &str {
        &self.space_id
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn z(&self) -> i32 {
        self.z
    }

    /// Address one step away in `direction`
    ///
    /// The grid is unbounded; coordinates wrap at the `i32` range so the
    /// operation stays total and `relative(d).relative(d.opposite())` is
    /// always the original address.
    pub fn relative(&self, direction: Direction) -> SpatialAddress {
        let (dx, dy, dz) = direction.offset();
        SpatialAddress {
            space_id: self.space_id.clone(),
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
            z: self.z.wrapping_add(dz),
        }
    }

    /// Address one step away in the direction called `name`
    ///
    /// Returns `None` for names that are not grid directions.
    pub fn relative_named(&self, name: &str) -> Option<SpatialAddress> {
        name.parse::<Direction>().ok().map(|d| self.relative(d))
    }

    /// All six neighbours, in [`Direction::ALL`] order
    pub fn neighbours(&self) -> [SpatialAddress; 6] {
        Direction::ALL.map(|d| self.relative(d))
    }
}

impl fmt::Display for SpatialAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{},{},{}", self.space_id, self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_relative_offsets() {
        let addr = SpatialAddress::new("world", 10, 64, -3);
        assert_eq!(addr.relative(Direction::North), SpatialAddress::new("world", 10, 64, -4));
        assert_eq!(addr.relative(Direction::South), SpatialAddress::new("world", 10, 64, -2));
        assert_eq!(addr.relative(Direction::East), SpatialAddress::new("world", 11, 64, -3));
        assert_eq!(addr.relative(Direction::West), SpatialAddress::new("world", 9, 64, -3));
        assert_eq!(addr.relative(Direction::Up), SpatialAddress::new("world", 10, 65, -3));
        assert_eq!(addr.relative(Direction::Down), SpatialAddress::new("world", 10, 63, -3));
    }

    #[test]
    fn test_relative_keeps_space() {
        let addr = SpatialAddress::new("nether", 0, 0, 0);
        assert_eq!(addr.relative(Direction::Up).space_id(), "nether");
    }

    #[test]
    fn test_relative_named() {
        let addr = SpatialAddress::new("world", 0, 0, 0);
        assert_eq!(addr.relative_named("north"), Some(SpatialAddress::new("world", 0, 0, -1)));
        assert_eq!(addr.relative_named(" UP "), Some(SpatialAddress::new("world", 0, 1, 0)));
        assert_eq!(addr.relative_named("north_east"), None);
        assert_eq!(addr.relative_named(""), None);
    }

    #[test]
    fn test_direction_parse_error() {
        let err = "SELF".parse::<Direction>().unwrap_err();
        assert_eq!(err, UnknownDirection("SELF".to_string()));
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(SpatialAddress::new("world", 1, 2, 3), SpatialAddress::new("world", 1, 2, 3));
        assert_ne!(SpatialAddress::new("world", 1, 2, 3), SpatialAddress::new("world_nether", 1, 2, 3));
        assert_ne!(SpatialAddress::new("world", 1, 2, 3), SpatialAddress::new("world", 1, 2, 4));
    }

    #[test]
    fn test_display() {
        assert_eq!(SpatialAddress::new("world", -1, 70, 5).to_string(), "world@-1,70,5");
    }

    #[test]
    fn test_wraps_at_edge() {
        let addr = SpatialAddress::new("world", i32::MAX, 0, 0);
        let east = addr.relative(Direction::East);
        assert_eq!(east.x(), i32::MIN);
        assert_eq!(east.relative(Direction::West), addr);
    }

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn north_then_south_is_identity(x in any::<i32>(), y in any::<i32>(), z in any::<i32>()) {
            let addr = SpatialAddress::new("world", x, y, z);
            prop_assert_eq!(addr.relative(Direction::North).relative(Direction::South), addr);
        }

        #[test]
        fn opposite_undoes_step(x in any::<i32>(), y in any::<i32>(), z in any::<i32>(), d in arb_direction()) {
            let addr = SpatialAddress::new("world", x, y, z);
            prop_assert_eq!(addr.relative(d).relative(d.opposite()), addr);
        }

        #[test]
        fn neighbours_are_distinct(x in any::<i32>(), y in any::<i32>(), z in any::<i32>()) {
            let addr = SpatialAddress::new("world", x, y, z);
            let set: HashSet<_> = addr.neighbours().into_iter().collect();
            prop_assert_eq!(set.len(), 6);
            prop_assert!(!set.contains(&addr));
        }
    }
}
