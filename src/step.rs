use crate::grid::Grid;
use crate::neighbors::count_live_neighbors;
use crate::rule_set::B3S23;
use crate::rule_set::RuleSet;

/// Compute the next generation of `grid` under Conway's rules (B3/S23).
pub fn step(grid: &Grid) -> Grid {
    step_with(grid, &B3S23)
}

/// Compute the next generation of `grid` under `rule`.
///
/// Every neighbor count is taken against `grid`, never against the generation being built, so
/// the order in which cells are visited cannot change the result.
pub fn step_with(grid: &Grid, rule: &RuleSet) -> Grid {
    let cells = grid
        .iter()
        .map(|(x, y, alive)| rule.next_state(alive, count_live_neighbors(grid, x, y)))
        .collect();

    Grid::from_cells(grid.width(), grid.height(), cells)
}
