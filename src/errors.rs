// Create the Error, ErrorKind, ResultExt, and Result types for the library.
// Every fallible grid, link and generation operation returns this `Result`.
use crate::cells::{CompassPrimary, GridCoordinate};
use error_chain::*;

error_chain! {

    errors {
        InvalidDimensions(rows: usize, columns: usize) {
            description("invalid grid dimensions")
            display("invalid grid dimensions {} x {}: rows and columns must be positive",
                    rows, columns)
        }

        AllocationFailed(cells_count: Option<usize>) {
            description("grid cell storage could not be allocated")
            display("failed to allocate grid storage for {}",
                    cells_count.map_or_else(|| String::from("an overflowing cell count"),
                                            |n| format!("{} cells", n)))
        }

        CellOutOfBounds(coord: GridCoordinate) {
            description("cell is not in the grid")
            display("cell {} is not in the grid", coord)
        }

        SelfLink(coord: GridCoordinate) {
            description("a cell cannot be linked to itself")
            display("cell {} cannot be linked to itself", coord)
        }

        AsymmetricLink(from: GridCoordinate, direction: CompassPrimary) {
            description("a cell link has no matching back link")
            display("the {:?} link of cell {} has no matching {:?} back link",
                    direction, from, direction.opposite())
        }
    }
}
