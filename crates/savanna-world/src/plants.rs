//! Plant cells scattered over the world.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use savanna_core::{Bounds, Cell, Point, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of occupied plant cells, iterated in ascending `(x, y)` order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantField {
    bounds: Bounds,
    cells: BTreeSet<Cell>,
}

impl PlantField {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            cells: BTreeSet::new(),
        }
    }

    /// Plant a specific cell. Returns `false` if it already held a plant.
    pub fn insert(&mut self, cell: Cell) -> Result<bool> {
        let cell = self.bounds.check_cell(cell)?;
        Ok(self.cells.insert(cell))
    }

    /// Remove the plant at a cell, returning whether one was there
    pub fn remove(&mut self, cell: Cell) -> bool {
        self.cells.remove(&cell)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Uniformly random cell inside the bounds
    pub fn random_cell(&self, rng: &mut ChaCha8Rng) -> Cell {
        Cell::new(
            rng.gen_range(0..self.bounds.width),
            rng.gen_range(0..self.bounds.height),
        )
    }

    /// Plant `count` independently chosen cells; collisions collapse.
    pub fn scatter(&mut self, count: usize, rng: &mut ChaCha8Rng) {
        for _ in 0..count {
            let cell = self.random_cell(rng);
            self.cells.insert(cell);
        }
    }

    /// With probability `chance`, plant one random cell.
    ///
    /// Returns the chosen cell when the roll succeeded, whether or not it was
    /// already occupied.
    pub fn regrow(&mut self, chance: f64, rng: &mut ChaCha8Rng) -> Option<Cell> {
        if rng.gen::<f64>() < chance {
            let cell = self.random_cell(rng);
            self.cells.insert(cell);
            Some(cell)
        } else {
            None
        }
    }

    /// Nearest plant within `max_dist` of `from`. The first minimal cell in
    /// iteration order wins ties.
    pub fn nearest(&self, from: Point, max_dist: f64) -> Option<(Cell, f64)> {
        let mut best: Option<(Cell, f64)> = None;
        for cell in self.iter() {
            let d = from.distance(cell.center());
            if d <= max_dist && best.map_or(true, |(_, bd)| d < bd) {
                best = Some((cell, d));
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn field(width: i32, height: i32) -> PlantField {
        PlantField::new(Bounds::new(width, height).unwrap())
    }

    #[test]
    fn test_insert_and_remove() {
        let mut plants = field(10, 10);
        assert!(plants.insert(Cell::new(3, 4)).unwrap());
        assert!(!plants.insert(Cell::new(3, 4)).unwrap());
        assert_eq!(plants.len(), 1);
        assert!(plants.contains(Cell::new(3, 4)));

        assert!(plants.remove(Cell::new(3, 4)));
        assert!(!plants.remove(Cell::new(3, 4)));
        assert!(plants.is_empty());
    }

    #[test]
    fn test_insert_out_of_bounds() {
        let mut plants = field(10, 10);
        assert!(plants.insert(Cell::new(10, 0)).is_err());
        assert!(plants.insert(Cell::new(0, -1)).is_err());
        assert!(plants.is_empty());
    }

    #[test]
    fn test_scatter_stays_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut plants = field(7, 3);
        plants.scatter(200, &mut rng);

        // 21 cells total, duplicates collapse
        assert!(plants.len() <= 21);
        assert!(plants.len() > 0);
        for cell in plants.iter() {
            assert!((0..7).contains(&cell.x));
            assert!((0..3).contains(&cell.y));
        }
    }

    #[test]
    fn test_regrow_on_full_field_does_not_grow() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut plants = field(1, 1);
        plants.insert(Cell::new(0, 0)).unwrap();

        let regrown = plants.regrow(1.0, &mut rng);
        assert_eq!(regrown, Some(Cell::new(0, 0)));
        assert_eq!(plants.len(), 1);
    }

    #[test]
    fn test_regrow_never_with_zero_chance() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut plants = field(10, 10);
        for _ in 0..100 {
            assert_eq!(plants.regrow(0.0, &mut rng), None);
        }
        assert!(plants.is_empty());
    }

    #[test]
    fn test_nearest_with_cutoff() {
        let mut plants = field(20, 20);
        plants.insert(Cell::new(10, 10)).unwrap();
        plants.insert(Cell::new(2, 2)).unwrap();

        let (cell, d) = plants.nearest(Point::new(3.0, 2.0), 5.0).unwrap();
        assert_eq!(cell, Cell::new(2, 2));
        assert_eq!(d, 1.0);

        assert!(plants.nearest(Point::new(6.0, 6.0), 2.0).is_none());
    }

    #[test]
    fn test_nearest_tie_takes_first_in_order() {
        let mut plants = field(10, 10);
        plants.insert(Cell::new(6, 5)).unwrap();
        plants.insert(Cell::new(4, 5)).unwrap();
        plants.insert(Cell::new(5, 4)).unwrap();

        let (cell, _) = plants.nearest(Point::new(5.0, 5.0), 3.0).unwrap();
        assert_eq!(cell, Cell::new(4, 5));
    }
}
