//! The set/group manager for the row currently being built.
//!
//! Eller's algorithm classically hands every new set a unique growing id.
//! Here only two live label values exist, 1 and 2, toggled by XOR with
//! `GROUP_MASK`; a union is expressed by flipping the labels of a whole run
//! of cells rather than by adopting a canonical id. That buys a 2-bit
//! per-cell footprint at the cost of label precision: two genuinely distinct,
//! non-adjacent sets in a wide row can collide onto the same label value.
//! The labelling is row scoped only - nothing resembling a persistent
//! union-find is ever tracked.

use crate::cells::GROUP_MASK;
use crate::grid::PackedGrid;

/// Scan the row left to right handing a label to every unassigned cell.
///
/// Fresh labels come from toggling a running last-label value between 1 and 2,
/// so immediate neighbours that are both freshly assigned always differ.
/// Cells that inherited a label from the row above keep it, with one patch:
/// when a freshly assigned cell's toggled label collides with the label of the
/// inherited cell right after it, the following inherited run is re-toggled
/// so the two do not wrongly read as one set.
pub fn assign_row_labels(grid: &mut PackedGrid, row: usize) {
    let mut last_label = 1;
    let mut last_cell_was_fresh = false;
    let mut flip_inherited_run = false;

    for col in 0..grid.width() {
        let label = grid.group(col, row);
        if label == 0 {
            last_label ^= GROUP_MASK; // 1 <-> 2
            grid.set_group(col, row, last_label);
            last_cell_was_fresh = true;
            flip_inherited_run = false;
        } else {
            if last_cell_was_fresh && last_label == label {
                flip_inherited_run = true;
            }
            let label = if flip_inherited_run {
                let flipped = label ^ GROUP_MASK;
                grid.set_group(col, row, flipped);
                flipped
            } else {
                label
            };
            last_cell_was_fresh = false;
            last_label = label;
        }
    }
}

/// Union the set at `col` with the set at `col + 1` by XOR-flipping the label
/// of every cell to the right of `col`, which converts the right hand side's
/// label family into the left hand side's.
///
/// Returns the scan column the caller should continue from, advanced one step
/// for each cell at the start of the flipped region that already matched the
/// left cell's label.
pub fn merge_label_run(grid: &mut PackedGrid, row: usize, col: usize) -> usize {
    let mut resume_col = col;
    let mut matching_label = grid.group(col, row);

    for i in (col + 1)..grid.width() {
        let label = grid.group(i, row);
        if label == matching_label {
            resume_col += 1;
        } else {
            matching_label = 0; // stop matching for the rest of the run
        }
        grid.set_group(i, row, label ^ GROUP_MASK);
    }

    resume_col
}
