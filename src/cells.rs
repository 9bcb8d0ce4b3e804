//! The packed cell descriptor layout.
//!
//! Each cell of the maze is one 4-bit descriptor:
//! bit 3 right wall, bit 2 bottom wall, bits 1-0 the set label.
//! Only the right and bottom walls are stored per cell; the left and top walls
//! of any interior cell are implied by its neighbours and the outer boundary
//! is closed by convention.

/// A cell descriptor. Only the low 4 bits are meaningful.
pub type CellDescriptor = u8;

pub const RIGHT_WALL_MASK: CellDescriptor = 0b1000;
pub const BOTTOM_WALL_MASK: CellDescriptor = 0b0100;

/// Bits 1-0 hold the set label: 0 unassigned, otherwise 1 or 2.
/// XOR with the mask toggles a live label between 1 and 2.
pub const GROUP_MASK: CellDescriptor = 0b0011;

pub const DESCRIPTOR_MASK: CellDescriptor = 0b1111;

/// The two wall directions a cell stores.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum WallDirection {
    East,
    South,
}

impl WallDirection {
    #[inline]
    pub fn wall_mask(self) -> CellDescriptor {
        match self {
            WallDirection::East => RIGHT_WALL_MASK,
            WallDirection::South => BOTTOM_WALL_MASK,
        }
    }
}
