pub mod config;
pub mod controller;
pub mod grid;
pub mod intent;
pub mod neighbors;
pub mod rule_set;
pub mod scheduler;
pub mod simulation;
pub mod step;

/// A point on the host's drawing surface, see [`intent::Intent::ToggleCellAtPixel`]
pub type Pixel = u32;
