//! Core type definitions for the simulation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of agent energy; the lower bound is zero
pub const MAX_ENERGY: i32 = 100;

/// Unique identifier for an agent, assigned by the world in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub u64);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Real-valued position in the world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Grid cell this point rounds to (ties go to the even neighbour)
    pub fn cell(&self) -> Cell {
        Cell::new(self.x.round_ties_even() as i32, self.y.round_ties_even() as i32)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Integer grid cell. Ordering is by `x`, then `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Extent of a world: valid coordinates are `[0, width-1] x [0, height-1]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn max_x(&self) -> f64 {
        (self.width - 1) as f64
    }

    pub fn max_y(&self) -> f64 {
        (self.height - 1) as f64
    }

    pub fn contains_cell(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    pub fn contains_point(&self, point: Point) -> bool {
        (0.0..=self.max_x()).contains(&point.x) && (0.0..=self.max_y()).contains(&point.y)
    }

    /// Reject a point outside the world
    pub fn check_point(&self, point: Point) -> Result<Point> {
        if self.contains_point(point) {
            Ok(point)
        } else {
            Err(Error::OutOfBounds {
                x: point.x,
                y: point.y,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn check_cell(&self, cell: Cell) -> Result<Cell> {
        if self.contains_cell(cell) {
            Ok(cell)
        } else {
            Err(Error::OutOfBounds {
                x: cell.x as f64,
                y: cell.y as f64,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn clamp(&self, point: Point) -> Point {
        Point::new(point.x.clamp(0.0, self.max_x()), point.y.clamp(0.0, self.max_y()))
    }
}

/// What an agent eats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    Herbivore,
    Carnivore,
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diet::Herbivore => write!(f, "herbivore"),
            Diet::Carnivore => write!(f, "carnivore"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn test_point_cell_rounds_half_to_even() {
        assert_eq!(Point::new(2.5, 3.5).cell(), Cell::new(2, 4));
        assert_eq!(Point::new(4.49, 0.51).cell(), Cell::new(4, 1));
    }

    #[test]
    fn test_cell_ordering() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 5), Cell::new(0, 1)];
        cells.sort();
        assert_eq!(cells, vec![Cell::new(0, 1), Cell::new(0, 5), Cell::new(1, 0)]);
    }

    #[test]
    fn test_bounds_rejects_non_positive() {
        assert!(Bounds::new(0, 10).is_err());
        assert!(Bounds::new(10, -1).is_err());
        assert!(Bounds::new(1, 1).is_ok());
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds::new(10, 5).unwrap();
        assert!(bounds.contains_point(Point::new(9.0, 4.0)));
        assert!(!bounds.contains_point(Point::new(9.01, 0.0)));
        assert!(!bounds.contains_cell(Cell::new(-1, 0)));
        assert!(bounds.check_point(Point::new(-0.5, 1.0)).is_err());
        assert_eq!(bounds.clamp(Point::new(12.0, -3.0)), Point::new(9.0, 0.0));
    }
}
