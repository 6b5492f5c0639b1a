//! Compass directions and direction sets.
//!
//! The eight compass directions are the complete neighbourhood of a cell. Their
//! offsets live in a `const` table that is never mutated, and their canonical
//! order (`n ne e se s sw w nw`) is the order in which [`DirectionSet`]
//! iterates.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::ParseDirectionError;
use crate::vector::Vector;

// =============================================================================
// Direction
// =============================================================================

/// One of the eight compass directions.
///
/// # Example
///
/// ```
/// use elife_grid::{Direction, Vector};
///
/// let dir: Direction = "ne".parse().unwrap();
/// assert_eq!(dir, Direction::NorthEast);
/// assert_eq!(dir.offset(), Vector::new(1, -1));
/// assert_eq!(dir.name(), "ne");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    /// `n`: `(0, -1)`
    #[serde(rename = "n")]
    North,
    /// `ne`: `(1, -1)`
    #[serde(rename = "ne")]
    NorthEast,
    /// `e`: `(1, 0)`
    #[serde(rename = "e")]
    East,
    /// `se`: `(1, 1)`
    #[serde(rename = "se")]
    SouthEast,
    /// `s`: `(0, 1)`
    #[serde(rename = "s")]
    South,
    /// `sw`: `(-1, 1)`
    #[serde(rename = "sw")]
    SouthWest,
    /// `w`: `(-1, 0)`
    #[serde(rename = "w")]
    West,
    /// `nw`: `(-1, -1)`
    #[serde(rename = "nw")]
    NorthWest,
}

/// Offsets indexed by `Direction as usize`.
const OFFSETS: [Vector; 8] = [
    Vector::new(0, -1),
    Vector::new(1, -1),
    Vector::new(1, 0),
    Vector::new(1, 1),
    Vector::new(0, 1),
    Vector::new(-1, 1),
    Vector::new(-1, 0),
    Vector::new(-1, -1),
];

/// Compass names indexed by `Direction as usize`.
const NAMES: [&str; 8] = ["n", "ne", "e", "se", "s", "sw", "w", "nw"];

impl Direction {
    /// All eight directions in canonical order.
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Returns the unit offset for this direction.
    #[must_use]
    pub const fn offset(self) -> Vector {
        OFFSETS[self as usize]
    }

    /// Returns the short compass name (`"n"`, `"ne"`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Looks up a direction by its compass name.
    ///
    /// Returns `None` for anything that is not one of the eight names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .map(|index| Self::ALL[index])
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseDirectionError {
            name: s.to_string(),
        })
    }
}

// =============================================================================
// DirectionSet
// =============================================================================

bitflags! {
    /// A set of compass directions, one bit per direction.
    ///
    /// Iterating with [`DirectionSet::directions`] yields members in canonical
    /// order.
    ///
    /// # Example
    ///
    /// ```
    /// use elife_grid::{Direction, DirectionSet};
    ///
    /// let set = DirectionSet::from(Direction::South) | DirectionSet::from(Direction::North);
    /// let members: Vec<_> = set.directions().collect();
    /// assert_eq!(members, vec![Direction::North, Direction::South]);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct DirectionSet: u8 {
        /// North
        const N = 1 << 0;
        /// North-east
        const NE = 1 << 1;
        /// East
        const E = 1 << 2;
        /// South-east
        const SE = 1 << 3;
        /// South
        const S = 1 << 4;
        /// South-west
        const SW = 1 << 5;
        /// West
        const W = 1 << 6;
        /// North-west
        const NW = 1 << 7;
    }
}

impl DirectionSet {
    /// Returns `true` if `direction` is a member of the set.
    #[must_use]
    pub fn has(self, direction: Direction) -> bool {
        self.contains(Self::from(direction))
    }

    /// Adds `direction` to the set.
    pub fn add(&mut self, direction: Direction) {
        self.insert(Self::from(direction));
    }

    /// Number of directions in the set.
    #[must_use]
    pub fn len(self) -> usize {
        self.bits().count_ones() as usize
    }

    /// Iterates the member directions in canonical order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.has(*d))
    }

    /// Returns the `index`-th member in canonical order, if any.
    #[must_use]
    pub fn nth(self, index: usize) -> Option<Direction> {
        self.directions().nth(index)
    }
}

impl From<Direction> for DirectionSet {
    fn from(direction: Direction) -> Self {
        Self::from_bits_retain(1 << direction as u8)
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Self::empty();
        for direction in iter {
            set.add(direction);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(dir.name().parse::<Direction>().unwrap(), dir);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "north".parse::<Direction>().unwrap_err();
        assert_eq!(err.name, "north");
        assert!(Direction::from_name("").is_none());
    }

    #[test]
    fn offsets_are_unit_neighbours() {
        for dir in Direction::ALL {
            let o = dir.offset();
            assert!(o.x().abs() <= 1 && o.y().abs() <= 1);
            assert_ne!(o, Vector::ZERO);
        }
        assert_eq!(Direction::South.offset(), Vector::new(0, 1));
        assert_eq!(Direction::NorthWest.offset(), Vector::new(-1, -1));
    }

    #[test]
    fn set_bits_match_named_flags() {
        assert_eq!(DirectionSet::from(Direction::North), DirectionSet::N);
        assert_eq!(DirectionSet::from(Direction::SouthWest), DirectionSet::SW);
        assert_eq!(DirectionSet::from(Direction::NorthWest), DirectionSet::NW);
    }

    #[test]
    fn set_iterates_in_canonical_order() {
        let set: DirectionSet = [Direction::West, Direction::East, Direction::North]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 3);
        assert_eq!(
            set.directions().collect::<Vec<_>>(),
            vec![Direction::North, Direction::East, Direction::West]
        );
        assert_eq!(set.nth(1), Some(Direction::East));
        assert_eq!(set.nth(3), None);
    }

    #[test]
    fn empty_set_has_no_members() {
        let set = DirectionSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.directions().count(), 0);
    }

    #[test]
    fn direction_serializes_as_compass_name() {
        let json = serde_json::to_string(&Direction::SouthEast).unwrap();
        assert_eq!(json, "\"se\"");
    }
}
