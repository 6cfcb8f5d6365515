use smallvec::SmallVec;
use std::fmt;

/// A (row, column) position in a grid. Cells refer to their linked neighbours by coordinate,
/// the grid resolves a coordinate back to a cell on each access.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub row: usize,
    pub column: usize,
}

impl GridCoordinate {
    pub fn new(row: usize, column: usize) -> GridCoordinate {
        GridCoordinate { row, column }
    }

    #[inline]
    pub fn from_row_major_index(index: usize, columns: usize) -> GridCoordinate {
        GridCoordinate::new(index / columns, index % columns)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl From<(usize, usize)> for GridCoordinate {
    fn from(row_column_pair: (usize, usize)) -> GridCoordinate {
        GridCoordinate::new(row_column_pair.0, row_column_pair.1)
    }
}

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;
pub type DirectionSmallVec = SmallVec<[CompassPrimary; 4]>;

/// The four link slot directions of a cell.
/// The declaration order is the slot order, so `opposite` is a reflection of the slot index.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North,
    East,
    West,
    South,
}

impl CompassPrimary {
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                          CompassPrimary::East,
                                          CompassPrimary::West,
                                          CompassPrimary::South];

    #[inline]
    pub fn slot_index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn opposite(self) -> CompassPrimary {
        CompassPrimary::ALL[CompassPrimary::ALL.len() - 1 - self.slot_index()]
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Cell {
    row: usize,
    column: usize,
    links: [Option<GridCoordinate>; 4],
}

impl Cell {
    pub fn new(row: usize, column: usize) -> Cell {
        Cell {
            row,
            column,
            links: [None; 4],
        }
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    #[inline]
    pub fn coordinate(&self) -> GridCoordinate {
        GridCoordinate::new(self.row, self.column)
    }

    /// The cell linked through the slot for `direction`, if any.
    #[inline]
    pub fn link(&self, direction: CompassPrimary) -> Option<GridCoordinate> {
        self.links[direction.slot_index()]
    }

    pub fn north(&self) -> Option<GridCoordinate> {
        self.link(CompassPrimary::North)
    }

    pub fn east(&self) -> Option<GridCoordinate> {
        self.link(CompassPrimary::East)
    }

    pub fn west(&self) -> Option<GridCoordinate> {
        self.link(CompassPrimary::West)
    }

    pub fn south(&self) -> Option<GridCoordinate> {
        self.link(CompassPrimary::South)
    }

    /// Every linked cell, in slot order.
    pub fn links(&self) -> CoordinateSmallVec {
        self.links.iter().filter_map(|slot| *slot).collect()
    }

    /// The directions of every occupied slot, in slot order.
    pub fn linked_directions(&self) -> DirectionSmallVec {
        CompassPrimary::ALL
            .iter()
            .cloned()
            .filter(|dir| self.link(*dir).is_some())
            .collect()
    }

    #[inline]
    pub fn is_dead_end(&self) -> bool {
        self.links.iter().filter(|slot| slot.is_some()).count() == 1
    }

    // Only the link operations write slots, they keep both ends consistent.
    #[inline]
    pub(crate) fn set_link(&mut self, direction: CompassPrimary, to: Option<GridCoordinate>) {
        self.links[direction.slot_index()] = to;
    }
}
