use crate::config::{CellSize, GameConfig};
use crate::error::GameError;
use crate::{Cell, GridInt};

pub const MIN_GRID_SIZE: GridInt = 8;

// Left and right borders
const BORDER_COLUMNS: u16 = 2;
// Status line plus top and bottom borders
const RESERVED_ROWS: u16 = 3;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridSpace {
    width: GridInt,
    height: GridInt,
    cell_size: CellSize,
}

impl GridSpace {
    pub fn new(width: GridInt, height: GridInt, cell_size: CellSize) -> Self {
        GridSpace { width, height, cell_size }
    }

    /// The configured grid, shrunk if needed so it fits a terminal of the given
    /// size together with its borders and the status line.
    pub fn fit(config: &GameConfig, term_size: (u16, u16)) -> Result<Self, GameError> {
        let (term_w, term_h) = term_size;
        let (cell_w, cell_h) = (config.cell_size.0.max(1), config.cell_size.1.max(1));

        let max_w = (term_w.saturating_sub(BORDER_COLUMNS) / cell_w) as GridInt;
        let max_h = (term_h.saturating_sub(RESERVED_ROWS) / cell_h) as GridInt;

        let width = config.grid_width.min(max_w);
        let height = config.grid_height.min(max_h);

        if width < MIN_GRID_SIZE || height < MIN_GRID_SIZE {
            return Err(GameError::TerminalTooSmall { width: term_w, height: term_h });
        }

        Ok(GridSpace::new(width, height, (cell_w, cell_h)))
    }

    pub fn width(&self) -> GridInt {
        self.width
    }

    pub fn height(&self) -> GridInt {
        self.height
    }

    pub fn cell_size(&self) -> CellSize {
        self.cell_size
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.0 >= 0 && cell.0 < self.width && cell.1 >= 0 && cell.1 < self.height
    }

    pub fn center(&self) -> Cell {
        (self.width / 2, self.height / 2)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// Top-left terminal position of a cell, given where cell (0, 0) is drawn
    pub fn to_screen(&self, cell: Cell, origin: (u16, u16)) -> (u16, u16) {
        (
            origin.0 + cell.0 as u16 * self.cell_size.0,
            origin.1 + cell.1 as u16 * self.cell_size.1,
        )
    }

    pub fn screen_size(&self) -> (u16, u16) {
        (
            self.width as u16 * self.cell_size.0,
            self.height as u16 * self.cell_size.1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridSpace {
        GridSpace::new(30, 30, (2, 1))
    }

    #[test]
    fn bounds() {
        let grid = grid();
        assert!(grid.contains((0, 0)));
        assert!(grid.contains((29, 29)));
        assert!(!grid.contains((-1, 0)));
        assert!(!grid.contains((0, -1)));
        assert!(!grid.contains((30, 0)));
        assert!(!grid.contains((0, 30)));
    }

    #[test]
    fn cells_cover_the_whole_grid() {
        let grid = GridSpace::new(4, 3, (1, 1));
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), 12);
        assert_eq!(cells.first(), Some(&(0, 0)));
        assert_eq!(cells.last(), Some(&(3, 2)));
    }

    #[test]
    fn center_of_default_grid() {
        assert_eq!(grid().center(), (15, 15));
    }

    #[test]
    fn screen_mapping_uses_cell_size() {
        let grid = grid();
        assert_eq!(grid.to_screen((0, 0), (1, 2)), (1, 2));
        assert_eq!(grid.to_screen((3, 4), (1, 2)), (7, 6));
        assert_eq!(grid.screen_size(), (60, 30));
    }

    #[test]
    fn fit_keeps_configured_size_in_a_big_terminal() {
        let grid = GridSpace::fit(&GameConfig::default(), (200, 60)).unwrap();
        assert_eq!((grid.width(), grid.height()), (30, 30));
    }

    #[test]
    fn fit_shrinks_to_a_small_terminal() {
        let grid = GridSpace::fit(&GameConfig::default(), (80, 24)).unwrap();
        assert_eq!((grid.width(), grid.height()), (30, 21));
    }

    #[test]
    fn fit_rejects_a_tiny_terminal() {
        assert_eq!(
            GridSpace::fit(&GameConfig::default(), (10, 5)),
            Err(GameError::TerminalTooSmall { width: 10, height: 5 })
        );
    }
}
