use petgraph::algo::{connected_components, is_cyclic_undirected};
use petgraph::graph::{NodeIndex, UnGraph};
use std::fmt;

use crate::cells::{CompassPrimary, GridCoordinate};
use crate::errors::*;
use crate::grid::Grid;

/// Aggregate facts about a generated maze.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct MazeSummary {
    pub rows: usize,
    pub columns: usize,
    pub cells: usize,
    pub links: usize,
    pub dead_ends: usize,
    pub connected_components: usize,
    pub is_perfect: bool,
}

impl fmt::Display for MazeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "grid:       {} x {} ({} cells)", self.rows, self.columns, self.cells)?;
        writeln!(f, "passages:   {}", self.links)?;
        writeln!(f, "dead ends:  {}", self.dead_ends)?;
        writeln!(f, "components: {}", self.connected_components)?;
        write!(f, "perfect:    {}", if self.is_perfect { "yes" } else { "no" })
    }
}

/// Every occupied slot must point at a cell of the grid that links straight back through the
/// opposite slot.
pub fn check_link_integrity(grid: &Grid) -> Result<()> {
    for cell in grid {
        let coord = cell.coordinate();
        for &dir in CompassPrimary::ALL.iter() {
            if let Some(target) = cell.link(dir) {
                let mirrored = grid.cell(target)
                    .map_or(false, |target_cell| target_cell.link(dir.opposite()) == Some(coord));
                if !mirrored {
                    return Err(ErrorKind::AsymmetricLink(coord, dir).into());
                }
            }
        }
    }
    Ok(())
}

/// The passages of the maze as an undirected graph. Node `i` is the cell with row-major index `i`,
/// each passage is one edge weighted with its direction as seen from the lower indexed cell.
pub fn link_graph(grid: &Grid) -> UnGraph<GridCoordinate, CompassPrimary> {
    let cells_count = grid.count_cells();
    let mut graph = UnGraph::with_capacity(cells_count, cells_count.saturating_sub(1));
    for cell in grid {
        let _ = graph.add_node(cell.coordinate());
    }

    for (index, cell) in grid.iter().enumerate() {
        for dir in cell.linked_directions() {
            let target_index = cell.link(dir).and_then(|target| grid.grid_coordinate_to_index(target));
            if let Some(target_index) = target_index {
                if index < target_index {
                    let _ = graph.update_edge(NodeIndex::new(index), NodeIndex::new(target_index), dir);
                }
            }
        }
    }
    graph
}

pub fn summarize(grid: &Grid) -> MazeSummary {
    let graph = link_graph(grid);
    let cells = grid.count_cells();
    let components = connected_components(&graph);
    let is_perfect = components == 1 && graph.edge_count() + 1 == cells &&
                     !is_cyclic_undirected(&graph);

    MazeSummary {
        rows: grid.num_rows(),
        columns: grid.num_columns(),
        cells,
        links: grid.links_count(),
        dead_ends: grid.iter().filter(|cell| cell.is_dead_end()).count(),
        connected_components: components,
        is_perfect,
    }
}

/// Fully connected and cycle free.
pub fn is_perfect_maze(grid: &Grid) -> bool {
    summarize(grid).is_perfect
}
