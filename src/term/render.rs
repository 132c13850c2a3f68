use game_of_life::grid::Grid;
use game_of_life::simulation::SimulationState;

const ALIVE: &str = "██";
const DEAD: &str = "··";

/// Number of terminal columns a cell takes
const CELL_COLUMNS: usize = 2;

/// Turns a grid into text, one line per row of cells.
///
/// The frame buffer is kept between frames to avoid reallocating it every time.
#[derive(Default)]
pub struct Frame {
    fb: String,
}

impl Frame {
    /// Draw as much of `grid` as fits in `cols` columns and `rows` rows, starting from its
    /// top left corner.
    pub fn render(&mut self, grid: &Grid, cols: u16, rows: u16) -> &str {
        let (w, h) = visible(grid, cols, rows);

        self.fb.clear();

        for y in 0..h {
            if y > 0 {
                self.fb.push('\n');
            }

            for x in 0..w {
                self.fb.push_str(if grid.get(x, y) { ALIVE } else { DEAD });
            }
        }

        &self.fb
    }
}

/// Cells of `grid` that fit in the terminal, as `(width, height)`
pub fn visible(grid: &Grid, cols: u16, rows: u16) -> (usize, usize) {
    (
        grid.width().min(cols as usize / CELL_COLUMNS),
        grid.height().min(rows as usize),
    )
}

/// Generation, population and pause state, with a reminder of the controls
pub fn status_line(state: &SimulationState) -> String {
    let mode = if state.is_paused() { "paused" } else { "running" };

    format!(
        "gen {} | pop {} | {mode} | space: pause, esc: clear, click: toggle, q: quit",
        state.generation(),
        state.grid().population(),
    )
}
