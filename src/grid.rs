use log::debug;
use std::slice;

use crate::cells::{Cell, CompassPrimary, GridCoordinate};
use crate::errors::*;
use crate::units::{ColumnsCount, RowsCount};

/// A rectangular grid of cells stored contiguously in row-major order.
///
/// A row is a slice of the cell storage, so row / column addressing is O(1) without a second
/// allocation. The default grid is empty, as is a grid after `dispose`.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Grid {
    num_rows: usize,
    num_columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<Grid> {
        let mut grid = Grid::default();
        grid.initialize(rows, columns)?;
        Ok(grid)
    }

    /// (Re)build the grid storage. Every cell gets its row-major coordinates and no links.
    /// Any previous content is discarded, also when initialisation fails.
    pub fn initialize(&mut self, rows: RowsCount, columns: ColumnsCount) -> Result<()> {
        let (RowsCount(rows), ColumnsCount(columns)) = (rows, columns);
        self.dispose();

        if rows == 0 || columns == 0 {
            return Err(ErrorKind::InvalidDimensions(rows, columns).into());
        }

        let cells_count = rows.checked_mul(columns)
            .ok_or(ErrorKind::AllocationFailed(None))?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(cells_count)
            .map_err(|_| ErrorKind::AllocationFailed(Some(cells_count)))?;

        for r in 0..rows {
            for c in 0..columns {
                cells.push(Cell::new(r, c));
            }
        }

        self.num_rows = rows;
        self.num_columns = columns;
        self.cells = cells;
        debug!("Initialised {} x {} grid", rows, columns);
        Ok(())
    }

    /// Release the cell storage. Safe to call repeatedly or on a grid that was never initialised.
    pub fn dispose(&mut self) {
        if !self.cells.is_empty() {
            debug!("Disposing {} x {} grid", self.num_rows, self.num_columns);
        }
        self.cells = Vec::new();
        self.num_rows = 0;
        self.num_columns = 0;
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[inline]
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    #[inline]
    pub fn count_cells(&self) -> usize {
        self.num_rows * self.num_columns
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The number of distinct passages. Each passage occupies one slot in each of its two cells.
    pub fn links_count(&self) -> usize {
        let occupied_slots: usize = self.cells.iter().map(|cell| cell.links().len()).sum();
        occupied_slots / 2
    }

    /// The cell at `(row, column)`, or None when either index is outside the grid.
    /// Out of range is an expected answer here, negative indices included.
    pub fn cell_at(&self, row: isize, column: isize) -> Option<&Cell> {
        if row < 0 || column < 0 {
            return None;
        }
        self.cell(GridCoordinate::new(row as usize, column as usize))
    }

    #[inline]
    pub fn cell(&self, coord: GridCoordinate) -> Option<&Cell> {
        self.grid_coordinate_to_index(coord).map(|index| &self.cells[index])
    }

    #[inline]
    pub(crate) fn cell_mut(&mut self, coord: GridCoordinate) -> Option<&mut Cell> {
        match self.grid_coordinate_to_index(coord) {
            Some(index) => Some(&mut self.cells[index]),
            None => None,
        }
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0..count_cells().
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row * self.num_columns + coord.column)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        coord.row < self.num_rows && coord.column < self.num_columns
    }

    /// The coordinate of the cell adjacent to `coord` in `direction`, if that is still on the grid.
    pub fn neighbour_at_direction(&self,
                                  coord: GridCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<GridCoordinate> {
        let GridCoordinate { row, column } = coord;
        let neighbour_coord = match direction {
            CompassPrimary::North => row.checked_sub(1).map(|r| GridCoordinate::new(r, column)),
            CompassPrimary::South => row.checked_add(1).map(|r| GridCoordinate::new(r, column)),
            CompassPrimary::East => column.checked_add(1).map(|c| GridCoordinate::new(row, c)),
            CompassPrimary::West => column.checked_sub(1).map(|c| GridCoordinate::new(row, c)),
        };
        neighbour_coord.filter(|c| self.is_valid_coordinate(*c))
    }

    pub fn neighbour_north(&self, cell: &Cell) -> Option<&Cell> {
        self.neighbour_at_direction(cell.coordinate(), CompassPrimary::North)
            .and_then(|coord| self.cell(coord))
    }

    pub fn neighbour_east(&self, cell: &Cell) -> Option<&Cell> {
        self.neighbour_at_direction(cell.coordinate(), CompassPrimary::East)
            .and_then(|coord| self.cell(coord))
    }

    /// All cells in row-major order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// The cells of each row, top row first.
    #[inline]
    pub fn iter_row(&self) -> slice::Chunks<'_, Cell> {
        // chunks(0) panics, an empty grid has no rows anyway.
        self.cells.chunks(self.num_columns.max(1))
    }

    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row < self.num_rows {
            let start = row * self.num_columns;
            Some(&self.cells[start..start + self.num_columns])
        } else {
            None
        }
    }

    /// Visit every row in order, passing the row's cells.
    pub fn for_each_row<F>(&self, mut visit: F)
        where F: FnMut(&[Cell])
    {
        for row in self.iter_row() {
            visit(row);
        }
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
