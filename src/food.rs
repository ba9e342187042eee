use std::collections::HashSet;

use log::debug;
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::error::GameError;
use crate::grid::GridSpace;
use crate::Cell;

/// Random picks tried before falling back to choosing among the free cells
const MAX_SAMPLE_ATTEMPTS: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Food {
    position: Cell,
}

impl Food {
    pub fn new<R: Rng>(grid: &GridSpace, occupied: &HashSet<Cell>, rng: &mut R) -> Result<Self, GameError> {
        let mut food = Food { position: (0, 0) };
        food.randomize(grid, occupied, rng)?;
        Ok(food)
    }

    #[cfg(test)]
    pub fn at(position: Cell) -> Self {
        Food { position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Moves the food to a uniformly random cell outside `occupied`. On a full
    /// board the position is left as it was.
    pub fn randomize<R: Rng>(
        &mut self,
        grid: &GridSpace,
        occupied: &HashSet<Cell>,
        rng: &mut R,
    ) -> Result<(), GameError> {
        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let cell = (rng.gen_range(0..grid.width()), rng.gen_range(0..grid.height()));
            if !occupied.contains(&cell) {
                self.position = cell;
                return Ok(());
            }
        }

        // Crowded board, pick straight from what is left
        debug!("Sampling food from the free cells of a crowded board");
        let free = grid.cells().filter(|cell| !occupied.contains(cell));
        match free.choose(rng) {
            Some(cell) => {
                self.position = cell;
                Ok(())
            }
            None => Err(GameError::NoFreeCellAvailable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const RNG_SEED: u64 = 0x5EED_F00D;

    #[test]
    fn never_lands_on_an_occupied_cell() {
        let grid = GridSpace::new(10, 10, (1, 1));
        let mut rng = StdRng::seed_from_u64(RNG_SEED);
        // Left half of the board is taken
        let occupied: HashSet<Cell> = grid.cells().filter(|c| c.0 < 5).collect();

        let mut food = Food::new(&grid, &occupied, &mut rng).unwrap();
        for _ in 0..500 {
            food.randomize(&grid, &occupied, &mut rng).unwrap();
            assert!(grid.contains(food.position()));
            assert!(!occupied.contains(&food.position()));
        }
    }

    #[test]
    fn finds_the_last_free_cell() {
        let grid = GridSpace::new(8, 8, (1, 1));
        let mut rng = StdRng::seed_from_u64(RNG_SEED);
        let occupied: HashSet<Cell> = grid.cells().filter(|&c| c != (6, 3)).collect();

        for _ in 0..20 {
            let food = Food::new(&grid, &occupied, &mut rng).unwrap();
            assert_eq!(food.position(), (6, 3));
        }
    }

    #[test]
    fn full_board_has_no_free_cell() {
        let grid = GridSpace::new(8, 8, (1, 1));
        let mut rng = StdRng::seed_from_u64(RNG_SEED);
        let occupied: HashSet<Cell> = grid.cells().collect();

        assert_eq!(Food::new(&grid, &occupied, &mut rng), Err(GameError::NoFreeCellAvailable));
    }

    #[test]
    fn full_board_keeps_the_old_position() {
        let grid = GridSpace::new(8, 8, (1, 1));
        let mut rng = StdRng::seed_from_u64(RNG_SEED);
        let mut food = Food::new(&grid, &HashSet::new(), &mut rng).unwrap();
        let before = food.position();

        let occupied: HashSet<Cell> = grid.cells().collect();
        assert_eq!(food.randomize(&grid, &occupied, &mut rng), Err(GameError::NoFreeCellAvailable));
        assert_eq!(food.position(), before);
    }
}
