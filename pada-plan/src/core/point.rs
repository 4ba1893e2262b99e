//! Point and coordinate types for the terrain grid.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Grid coordinates (integer cell indices)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    /// Row index
    pub x: i32,
    /// Column index
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Euclidean distance to another coordinate
    #[inline]
    pub fn distance(&self, other: &GridCoord) -> f64 {
        self.to_point().distance(&other.to_point())
    }

    /// Coordinate one step away in the given direction
    #[inline]
    pub fn step(&self, direction: Direction) -> GridCoord {
        *self + direction.offset()
    }

    /// Get the 4 cardinal neighbors in [`Direction::ALL`] order
    #[inline]
    pub fn neighbors_4(&self) -> [GridCoord; 4] {
        Direction::ALL.map(|d| self.step(d))
    }

    /// Whether `other` is one of the 4 cardinal neighbors
    #[inline]
    pub fn is_adjacent(&self, other: &GridCoord) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Convert to a real-valued point
    #[inline]
    pub fn to_point(self) -> GridPoint {
        GridPoint::new(self.x as f64, self.y as f64)
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.x - other.x, self.y - other.y)
    }
}

/// Cardinal step direction on the grid.
///
/// Rows grow downward, columns grow to the right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Previous row
    Up,
    /// Next row
    Down,
    /// Previous column
    Left,
    /// Next column
    Right,
}

impl Direction {
    /// Fixed enumeration order used by neighbor queries
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset of one step in this direction
    #[inline]
    pub fn offset(self) -> GridCoord {
        match self {
            Direction::Up => GridCoord::new(-1, 0),
            Direction::Down => GridCoord::new(1, 0),
            Direction::Left => GridCoord::new(0, -1),
            Direction::Right => GridCoord::new(0, 1),
        }
    }

    /// Index in [`Direction::ALL`]
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// Real-valued grid point for sub-cell math (rotation, scaling, blending).
///
/// Must be rounded with [`GridPoint::round`] before any grid lookup.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct GridPoint {
    /// Row component
    pub x: f64,
    /// Column component
    pub y: f64,
}

impl GridPoint {
    /// Create a new point
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Origin
    pub const ZERO: GridPoint = GridPoint { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &GridPoint) -> f64 {
        (*self - *other).length()
    }

    /// Length as a vector from origin
    #[inline]
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction, or zero for a zero-length vector
    #[inline]
    pub fn normalize(&self) -> GridPoint {
        let len = self.length();
        if len > f64::EPSILON {
            GridPoint::new(self.x / len, self.y / len)
        } else {
            GridPoint::ZERO
        }
    }

    /// Angle of the vector from this point to another (atan2 of y over x)
    #[inline]
    pub fn angle_to(&self, other: &GridPoint) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Point at a given angle and distance from this point
    #[inline]
    pub fn point_at(&self, angle: f64, distance: f64) -> GridPoint {
        GridPoint::new(
            self.x + distance * angle.cos(),
            self.y + distance * angle.sin(),
        )
    }

    /// Rotate around the origin by angle (radians)
    #[inline]
    pub fn rotate(&self, angle: f64) -> GridPoint {
        let (sin_a, cos_a) = angle.sin_cos();
        GridPoint::new(
            self.x * cos_a - self.y * sin_a,
            self.x * sin_a + self.y * cos_a,
        )
    }

    /// Dot product
    #[inline]
    pub fn dot(&self, other: &GridPoint) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Round to the nearest grid cell
    #[inline]
    pub fn round(&self) -> GridCoord {
        GridCoord::new(self.x.round() as i32, self.y.round() as i32)
    }
}

impl Add for GridPoint {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridPoint::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridPoint {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridPoint::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for GridPoint {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        GridPoint::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for GridPoint {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        GridPoint::new(-self.x, -self.y)
    }
}

impl From<GridCoord> for GridPoint {
    fn from(coord: GridCoord) -> Self {
        coord.to_point()
    }
}

/// Terrain point: a grid cell lifted to its height
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Lift a grid cell to the given height
    #[inline]
    pub fn from_cell(coord: GridCoord, z: f64) -> Self {
        Self::new(coord.x as f64, coord.y as f64, z)
    }

    #[inline]
    pub fn sub(&self, other: &Point3) -> Point3 {
        Point3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    #[inline]
    pub fn cross(&self, other: &Point3) -> Point3 {
        Point3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn dot(&self, other: &Point3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Distance in the horizontal (x, y) plane
    #[inline]
    pub fn horizontal_distance(&self, other: &Point3) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
