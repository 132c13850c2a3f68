use crate::grid::CellCoord;
use crate::grid::Grid;

/// The Moore neighborhood: every offset in `{-1, 0, 1}²` except the cell itself.
const MOORE: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Count the live neighbors of the cell at `(x, y)`. Always in `[0, 8]`.
///
/// The boundary is clipped: neighbors falling off an edge of the grid are skipped, they never
/// wrap around to the opposite edge. A corner cell therefore has at most 3 neighbors and an
/// edge cell at most 5.
pub fn count_live_neighbors(grid: &Grid, x: CellCoord, y: CellCoord) -> u8 {
    debug_assert!(grid.contains(x, y), "({x}, {y}) is out of bounds");

    let mut n = 0;

    for (dx, dy) in MOORE {
        let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
            continue;
        };

        if grid.contains(nx, ny) && grid.get(nx, ny) {
            n += 1;
        }
    }

    n
}
