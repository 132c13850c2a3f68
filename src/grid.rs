use rand::Rng;
use thiserror::Error;

/// Coordinate of a cell on the grid
pub type CellCoord = usize;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Cell ({x}, {y}) is outside of the {width}x{height} grid")]
    OutOfRange {
        x: CellCoord,
        y: CellCoord,
        width: CellCoord,
        height: CellCoord,
    },
}

/// A fixed-size rectangle of cells, each either alive or dead.
///
/// Cells are stored row-major, so `(x, y)` lives at `y * width + x`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    /// The cell buffer
    cells: Vec<bool>,

    w: CellCoord,
    h: CellCoord,
}

impl Grid {
    /// Create a grid where every cell is dead
    pub fn new(w: CellCoord, h: CellCoord) -> Self {
        assert!(w > 0, "grid width must be positive");
        assert!(h > 0, "grid height must be positive");

        Self {
            cells: vec![false; w * h],
            w,
            h,
        }
    }

    /// Create a grid where every cell is alive with probability 1/2
    pub fn random<R: Rng>(w: CellCoord, h: CellCoord, rng: &mut R) -> Self {
        let mut grid = Self::new(w, h);
        grid.cells.iter_mut().for_each(|c| *c = rng.r#gen());

        grid
    }

    /// Build a grid from its cells, in row-major order. Used by the stepper, which computes a
    /// whole generation at once.
    pub(crate) fn from_cells(w: CellCoord, h: CellCoord, cells: Vec<bool>) -> Self {
        assert_eq!(cells.len(), w * h, "cell buffer does not match dimensions");

        Self { cells, w, h }
    }

    pub fn width(&self) -> CellCoord {
        self.w
    }

    pub fn height(&self) -> CellCoord {
        self.h
    }

    pub fn contains(&self, x: CellCoord, y: CellCoord) -> bool {
        x < self.w && y < self.h
    }

    /// State of the cell at `(x, y)`.
    ///
    /// Panics if the coordinate is outside of the grid. Use [`Grid::try_get`] when the
    /// coordinate comes from somewhere untrusted.
    pub fn get(&self, x: CellCoord, y: CellCoord) -> bool {
        assert!(x < self.w, "x is out of bounds");
        assert!(y < self.h, "y is out of bounds");

        self.cells[self.xy_from(x, y)]
    }

    /// Sets the state of a single cell. Panics if the coordinate is outside of the grid.
    pub fn set(&mut self, x: CellCoord, y: CellCoord, alive: bool) {
        assert!(x < self.w, "x is out of bounds");
        assert!(y < self.h, "y is out of bounds");

        let i = self.xy_from(x, y);
        self.cells[i] = alive;
    }

    pub fn try_get(&self, x: CellCoord, y: CellCoord) -> Result<bool, GridError> {
        self.check(x, y)?;

        Ok(self.get(x, y))
    }

    pub fn try_set(&mut self, x: CellCoord, y: CellCoord, alive: bool) -> Result<(), GridError> {
        self.check(x, y)?;
        self.set(x, y, alive);

        Ok(())
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Iterate over `(x, y, alive)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, CellCoord, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(n, &alive)| {
                let (x, y) = self.xy_to(n);
                (x, y, alive)
            })
    }

    fn check(&self, x: CellCoord, y: CellCoord) -> Result<(), GridError> {
        if self.contains(x, y) {
            return Ok(());
        }

        Err(GridError::OutOfRange {
            x,
            y,
            width: self.w,
            height: self.h,
        })
    }

    fn xy_to(&self, n: usize) -> (CellCoord, CellCoord) {
        (n % self.w, n / self.w)
    }

    fn xy_from(&self, x: CellCoord, y: CellCoord) -> usize {
        y * self.w + x
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::Grid;
    use super::GridError;

    #[test]
    fn new_grid_is_dead() {
        let grid = Grid::new(4, 3);

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.population(), 0);
        assert!(grid.iter().all(|(_, _, alive)| !alive));
    }

    #[test]
    fn set_touches_one_cell() {
        let mut grid = Grid::new(4, 3);

        grid.set(3, 2, true);

        assert!(grid.get(3, 2));
        assert_eq!(grid.population(), 1);

        // row-major: (3, 2) is the last cell
        let last = grid.iter().last().unwrap();
        assert_eq!(last, (3, 2, true));
    }

    #[test]
    fn clear_kills_everything() {
        let mut grid = Grid::random(8, 8, &mut StdRng::seed_from_u64(3));
        assert!(grid.population() > 0);

        grid.clear();

        assert_eq!(grid.population(), 0);
        assert_eq!(grid.width(), 8);
    }

    #[test]
    fn random_is_deterministic_per_seed() {
        let a = Grid::random(16, 16, &mut StdRng::seed_from_u64(7));
        let b = Grid::random(16, 16, &mut StdRng::seed_from_u64(7));

        assert_eq!(a, b);
    }

    #[test]
    fn try_get_out_of_range() {
        let grid = Grid::new(2, 2);

        assert_eq!(grid.try_get(1, 1), Ok(false));
        assert_eq!(
            grid.try_get(2, 0),
            Err(GridError::OutOfRange {
                x: 2,
                y: 0,
                width: 2,
                height: 2
            })
        );
    }

    #[test]
    fn try_set_out_of_range_leaves_grid_untouched() {
        let mut grid = Grid::new(2, 2);

        assert!(grid.try_set(0, 5, true).is_err());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    #[should_panic(expected = "x is out of bounds")]
    fn get_out_of_range_panics() {
        Grid::new(2, 2).get(2, 0);
    }

    #[test]
    #[should_panic(expected = "y is out of bounds")]
    fn set_out_of_range_panics() {
        Grid::new(2, 2).set(0, 2, true);
    }

    #[test]
    #[should_panic(expected = "grid width must be positive")]
    fn zero_width_panics() {
        Grid::new(0, 2);
    }
}
