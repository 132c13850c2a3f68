//! The terminal host: input conversion and drawing.
//!
//! Terminal cells are roughly twice as tall as they are wide. A pixel is one column wide, so one
//! row spans two pixels, and each grid cell is drawn as two columns by one row, a square of
//! [`BLOCK_SIZE`] pixels.

use game_of_life::Pixel;

pub mod input;
pub mod render;

/// Side length of a grid cell, in pixels
pub const BLOCK_SIZE: Pixel = 2;

/// Height of a terminal row, in pixels
pub const ROW_PIXELS: Pixel = 2;
