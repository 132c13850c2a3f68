use crate::Pixel;

/// Something the user asked for. The host converts raw input events into intents and hands them
/// to [`crate::simulation::Simulation::tick`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Intent {
    /// Exit the application
    Quit,

    /// Pause or resume the simulation
    TogglePause,

    /// Kill every cell
    ClearGrid,

    /// Flip the cell under a point, in pixel units. Also pauses the simulation.
    ToggleCellAtPixel { x: Pixel, y: Pixel },
}
