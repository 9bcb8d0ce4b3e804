//! Diagnostic text rendering of a built maze.
//!
//! Purely a debug aid over the wall query surface - no part of the
//! generation algorithm depends on it. Closed floors render as `__`, closed
//! sides as `|`, and the outer boundary is always drawn even though it is
//! never stored.

use std::fmt;

use itertools::Itertools;

use crate::cells::WallDirection;
use crate::generators::EllersMaze;

impl fmt::Display for EllersMaze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (width, height) = (self.width(), self.height());

        // one leading space, then "__ " per column, trailing space included
        let top_boundary = (0..width).map(|_| "__").join(" ");
        writeln!(f, " {} ", top_boundary)?;

        for row in 0..height {
            write!(f, "|")?;
            for col in 0..width {
                let floor_closed =
                    self.has_wall(col, row, WallDirection::South) || row + 1 == height;
                write!(f, "{}", if floor_closed { "__" } else { "  " })?;

                let side_closed =
                    self.has_wall(col, row, WallDirection::East) || col + 1 == width;
                write!(f, "{}", if side_closed { "|" } else { " " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
