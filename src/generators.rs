//! Row by row Eller's maze generation over the packed grid.
//!
//! Each row runs a fixed sequence: clean up the state carried down from the
//! row above, label every cell, decide the right walls (merging sets where no
//! wall goes in), decide the bottom walls, then byte copy the row into the row
//! below so it inherits the still-open groupings. Two invariants hold
//! throughout: adjacent cells of the same set never lose their dividing wall
//! (no cycles from a row's own unions), and every set leaves a non-final row
//! with at least one cell whose bottom stays open (no sealed-off pockets).

use rand::Rng;

use crate::cells::{BOTTOM_WALL_MASK, RIGHT_WALL_MASK, WallDirection};
use crate::grid::PackedGrid;
use crate::groups;
use crate::units::{Height, Width};

/// The source of the generator's wall decisions: a uniformly distributed
/// integer in `[0, 100)` per draw.
///
/// Injected into `build` rather than hidden inside it, so the row decisions
/// can be driven by a scripted sequence under test.
pub trait PercentSource {
    fn next_percent(&mut self) -> u8;
}

impl<R: Rng> PercentSource for R {
    fn next_percent(&mut self) -> u8 {
        self.gen_range(0, 100)
    }
}

pub const DEFAULT_BIAS_FACTOR: u8 = 50;

/// A maze generator running Eller's algorithm in place over a `PackedGrid`.
pub struct EllersMaze {
    grid: PackedGrid,
    /// Corridor bias, legal range `[1, 99]`. Above 50 the corridors spread
    /// more horizontally, below 50 more vertically. Set before `build`.
    pub bias_factor: u8,
}

impl EllersMaze {
    /// Sides above `grid::MAX_SIDE` are silently clamped, not rejected.
    pub fn new(width: Width, height: Height) -> EllersMaze {
        EllersMaze {
            grid: PackedGrid::new(width, height),
            bias_factor: DEFAULT_BIAS_FACTOR,
        }
    }

    #[inline]
    pub fn grid(&self) -> &PackedGrid {
        &self.grid
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Post-build query surface: is the east or south wall of a cell present?
    /// Coordinates are a caller contract, as on the grid store.
    #[inline]
    pub fn has_wall(&self, col: usize, row: usize, direction: WallDirection) -> bool {
        self.grid.has_wall(col, row, direction.wall_mask())
    }

    /// Generate the maze, top row to bottom, in one synchronous pass.
    /// Deterministic for a fixed percent stream.
    pub fn build<R: PercentSource>(&mut self, rng: &mut R) {
        let height = self.grid.height();
        for row in 0..height {
            self.process_row(row, rng);
            if row + 1 < height {
                self.grid.copy_row_down(row);
            }
        }
    }

    fn process_row<R: PercentSource>(&mut self, row: usize, rng: &mut R) {
        let last_row = row + 1 == self.grid.height();

        if !last_row {
            self.reset_carried_cells(row);
        }
        groups::assign_row_labels(&mut self.grid, row);
        if last_row {
            self.close_out_last_row(row);
        } else {
            self.place_right_walls(row, rng);
        }
        self.place_bottom_walls(row, last_row, rng);
    }

    /// Carry-in cleanup: strip the right walls inherited from the row above,
    /// and fully reset any cell that inherited a bottom wall - its connection
    /// downward was closed, so it starts this row fresh and ungrouped.
    fn reset_carried_cells(&mut self, row: usize) {
        for col in 0..self.grid.width() {
            let mut descriptor = self.grid.descriptor(col, row) & !RIGHT_WALL_MASK;
            if descriptor & BOTTOM_WALL_MASK == BOTTOM_WALL_MASK {
                descriptor = 0;
            }
            self.grid.set_descriptor(col, row, descriptor);
        }
    }

    /// Right wall decisions for a non-final row, left to right.
    ///
    /// A pair already sharing a label always gets a wall (never create a
    /// cycle). Otherwise the wall goes in with probability
    /// `100 - bias_factor`; leaving it out merges the two sets.
    fn place_right_walls<R: PercentSource>(&mut self, row: usize, rng: &mut R) {
        let width = self.grid.width();
        let mut col = 0;
        while col + 1 < width {
            let roll = rng.next_percent();
            let group = self.grid.group(col, row);
            let next_group = self.grid.group(col + 1, row);

            if roll > self.bias_factor || group == next_group {
                self.grid.set_wall(col, row, RIGHT_WALL_MASK);
            } else {
                col = groups::merge_label_run(&mut self.grid, row, col);
            }
            col += 1;
        }
    }

    /// The final row has nothing below to carry into, so it must end as a
    /// single component: every adjacent differing pair loses its wall and the
    /// left label is propagated rightward until the labels match.
    fn close_out_last_row(&mut self, row: usize) {
        let width = self.grid.width();
        let mut col = 0;
        while col + 1 < width {
            let group = self.grid.group(col, row);
            let mut next_group = self.grid.group(col + 1, row);

            if group != next_group {
                self.grid.clear_wall(col, row, RIGHT_WALL_MASK);
                while col + 1 < width && next_group != group {
                    col += 1;
                    self.grid.set_group(col, row, group);
                    if col + 1 < width {
                        next_group = self.grid.group(col, row);
                    }
                }
            }
            col += 1;
        }
    }

    /// Bottom wall decisions, left to right, counting per contiguous
    /// same-label run how many cells are still open below. The last row is
    /// the maze floor and is walled throughout. Elsewhere a wall goes in with
    /// probability `bias_factor`, except that the sole remaining open cell of
    /// a run keeps its bottom open.
    fn place_bottom_walls<R: PercentSource>(&mut self, row: usize, last_row: bool, rng: &mut R) {
        let width = self.grid.width();
        let mut previous_group = 0;
        let mut open_cells_in_run: u8 = 0;

        for col in 0..width {
            let group = self.grid.group(col, row);
            if group != previous_group {
                open_cells_in_run = 1;
            } else {
                open_cells_in_run += 1;
            }

            let mut place_bottom_wall = false;
            if last_row {
                place_bottom_wall = true;
            } else {
                if rng.next_percent() <= self.bias_factor {
                    place_bottom_wall = true;

                    let next_group = if col + 1 < width {
                        self.grid.group(col + 1, row)
                    } else {
                        0
                    };
                    if next_group != group && open_cells_in_run <= 1 {
                        place_bottom_wall = false;
                    }
                }
                previous_group = group;
            }

            if place_bottom_wall {
                self.grid.set_wall(col, row, BOTTOM_WALL_MASK);
                open_cells_in_run -= 1;
            }
        }
    }
}
