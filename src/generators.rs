use log::{debug, trace};
use rand_core::RngCore;
use smallvec::SmallVec;

use crate::cells::{CompassPrimary, GridCoordinate};
use crate::config::MazeConfig;
use crate::errors::*;
use crate::grid::Grid;
use crate::links;
use crate::prng;
use crate::units::{ColumnsCount, RowsCount};

/// Apply the binary tree maze generation algorithm to a grid.
///
/// Every cell is visited once in row-major order and carves a passage either North or East,
/// whichever of the two neighbours exist. With both available a draw of `next_u32() % 2` picks
/// North on 0 and East on 1. The top right corner has neither and becomes the root of the tree,
/// so the result is a perfect maze whatever the draws are.
///
/// The two directions are fixed for the whole run, which is where the long corridors along the
/// top row and the east column come from.
pub fn binary_tree<R>(grid: &mut Grid, rng: &mut R) -> Result<()>
    where R: RngCore + ?Sized
{
    for index in 0..grid.count_cells() {
        let cell_coord = GridCoordinate::from_row_major_index(index, grid.num_columns());

        let neighbours: SmallVec<[(CompassPrimary, GridCoordinate); 2]> =
            [CompassPrimary::North, CompassPrimary::East]
                .iter()
                .filter_map(|dir| grid.neighbour_at_direction(cell_coord, *dir).map(|coord| (*dir, coord)))
                .collect();

        let chosen = match neighbours.len() {
            0 => None,
            1 => Some(neighbours[0]),
            n => prng::choose(rng, n).map(|i| neighbours[i]),
        };

        if let Some((dir, link_coord)) = chosen {
            trace!("{} carves {:?}", cell_coord, dir);
            links::link(grid, cell_coord, dir, link_coord)?;
        }
    }

    debug!("Binary tree maze generated on a {} x {} grid with {} links",
           grid.num_rows(),
           grid.num_columns(),
           grid.links_count());
    Ok(())
}

/// Build a fresh grid from the configuration and carve a binary tree maze into it.
pub fn generate(config: &MazeConfig) -> Result<Grid> {
    config.validate()?;
    let mut grid = Grid::new(RowsCount(config.rows), ColumnsCount(config.columns))?;
    let mut rng = config.rng();
    binary_tree(&mut grid, &mut rng)?;
    Ok(grid)
}
