//! Coordinates, world vectors and the other small value types shared by the
//! world service and the agents.

use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Unique identifier for an agent standing on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupantId(pub u32);

impl fmt::Display for OccupantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in tile coordinates.
///
/// `x` grows to the east, `y` grows to the south.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring coordinate in the given direction.
    pub fn step(self, facing: Facing) -> Self {
        let (dx, dy) = facing.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// The four orthogonal neighbours, in [`Facing::ALL`] order.
    pub fn neighbours(self) -> [Coord; 4] {
        Facing::ALL.map(|facing| self.step(facing))
    }

    pub fn manhattan(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction an item faces on the grid.
///
/// Rotations are counted in clockwise quarter turns starting from `East`.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Facing {
    #[default]
    East,
    South,
    West,
    North,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::East, Facing::South, Facing::West, Facing::North];

    /// Facing after `rotations` clockwise quarter turns from `East`.
    pub fn from_rotations(rotations: u8) -> Self {
        Self::ALL[usize::from(rotations % 4)]
    }

    pub fn rotate_cw(self) -> Self {
        match self {
            Facing::East => Facing::South,
            Facing::South => Facing::West,
            Facing::West => Facing::North,
            Facing::North => Facing::East,
        }
    }

    pub fn delta(self) -> (i32, i32) {
        match self {
            Facing::East => (1, 0),
            Facing::South => (0, 1),
            Facing::West => (-1, 0),
            Facing::North => (0, -1),
        }
    }
}

/// Continuous world-space vector used for render positions.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation: `t = 0` yields `self`, `t = 1` yields `other`.
    pub fn lerp(self, other: Vec2, t: f32) -> Vec2 {
        self + (other - self) * t
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Simulation frame counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotations_turn_clockwise_from_east() {
        assert_eq!(Facing::from_rotations(0), Facing::East);
        assert_eq!(Facing::from_rotations(1), Facing::South);
        assert_eq!(Facing::from_rotations(5), Facing::South);
        assert_eq!(Facing::North.rotate_cw(), Facing::East);
    }

    #[test]
    fn step_follows_facing() {
        let desk = Coord::new(4, 1);
        assert_eq!(desk.step(Facing::South), Coord::new(4, 2));
        assert_eq!(desk.step(Facing::West), Coord::new(3, 1));
        assert_eq!(desk.manhattan(Coord::new(3, 3)), 3);
    }

    #[test]
    fn facing_parses_snake_case() {
        assert_eq!("north".parse::<Facing>().ok(), Some(Facing::North));
        assert_eq!(Facing::West.to_string(), "west");
    }

    #[test]
    fn lerp_interpolates_linearly() {
        let a = Vec2::new(0.0, 10.0);
        let b = Vec2::new(9.0, 1.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 1.0 / 3.0);
        assert!((mid.x - 3.0).abs() < 1e-5);
        assert!((mid.y - 7.0).abs() < 1e-5);
    }
}
