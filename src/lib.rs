//! **ellers** is a memory compact maze generation library: a row by row
//! variant of Eller's algorithm over a packed grid of 4-bit cell descriptors,
//! sized for severely RAM constrained targets.

pub mod cells;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod groups;
pub mod units;
pub mod utils;
