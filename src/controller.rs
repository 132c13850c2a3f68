use tracing::debug;

use crate::Pixel;
use crate::grid::CellCoord;
use crate::simulation::SimulationState;

/// Pause a running simulation, or resume a paused one.
pub fn toggle_pause(state: &mut SimulationState) {
    state.paused = !state.paused;

    debug!(paused = state.paused, "Toggled pause");
}

/// Flip the cell at `(x, y)` and pause the simulation, so the edit is not immediately
/// overwritten by the next generation. Coordinates outside of the grid are ignored.
pub fn toggle_cell_at(state: &mut SimulationState, x: CellCoord, y: CellCoord) {
    if !state.grid.contains(x, y) {
        debug!(x, y, "Ignoring toggle outside of the grid");
        return;
    }

    let alive = !state.grid.get(x, y);
    state.grid.set(x, y, alive);
    state.dirty = true;
    state.paused = true;

    debug!(x, y, alive, "Toggled cell");
}

/// Like [`toggle_cell_at`], for a point given in pixels where each cell is `block_size` pixels
/// on a side.
pub fn toggle_cell_at_pixel(state: &mut SimulationState, px: Pixel, py: Pixel, block_size: Pixel) {
    assert!(block_size > 0, "block size must be positive");

    let x = (px / block_size) as CellCoord;
    let y = (py / block_size) as CellCoord;

    toggle_cell_at(state, x, y);
}

/// Kill every cell. The pause flag is left as it was.
pub fn clear(state: &mut SimulationState) {
    state.grid.clear();
    state.generation = 0;
    state.dirty = true;

    debug!("Cleared grid");
}
