//! Passage links between cells of a grid.
//!
//! These are the only writers of cell link slots. After any `link` or `unlink` call every occupied
//! slot is mirrored: if A's slot for direction D holds B, B's slot for D's opposite holds A.

use log::trace;

use crate::cells::{Cell, CompassPrimary, GridCoordinate};
use crate::errors::*;
use crate::grid::Grid;

/// Link `a` to `b` through `a`'s `direction` slot and `b`'s opposite slot.
///
/// The cells are expected to be adjacent in `direction`; that is not checked.
/// A slot that already pointed at some third cell is overwritten and the third cell's back link
/// is cleared with it.
pub fn link(grid: &mut Grid,
            a: GridCoordinate,
            direction: CompassPrimary,
            b: GridCoordinate)
            -> Result<()> {
    require_in_grid(grid, a)?;
    require_in_grid(grid, b)?;
    if a == b {
        return Err(ErrorKind::SelfLink(a).into());
    }

    let opposite = direction.opposite();

    let a_previous = grid.cell(a).and_then(|cell| cell.link(direction));
    if let Some(stale) = a_previous.filter(|&coord| coord != b) {
        clear_slot_if_linked_to(grid, stale, opposite, a);
    }
    let b_previous = grid.cell(b).and_then(|cell| cell.link(opposite));
    if let Some(stale) = b_previous.filter(|&coord| coord != a) {
        clear_slot_if_linked_to(grid, stale, direction, b);
    }

    set_slot(grid, a, direction, Some(b));
    set_slot(grid, b, opposite, Some(a));
    trace!("Linked {} {:?} to {}", a, direction, b);
    Ok(())
}

/// The direction of the first slot of `cell` holding `target`.
pub fn find_link(cell: &Cell, target: GridCoordinate) -> Option<CompassPrimary> {
    CompassPrimary::ALL
        .iter()
        .cloned()
        .find(|dir| cell.link(*dir) == Some(target))
}

/// Clear every slot in `a` pointing to `b` and every slot in `b` pointing to `a`.
///
/// The two sides are searched independently, so a half linked pair is repaired as well.
/// Returns true if any slot was cleared.
pub fn unlink(grid: &mut Grid, a: GridCoordinate, b: GridCoordinate) -> Result<bool> {
    require_in_grid(grid, a)?;
    require_in_grid(grid, b)?;

    let cleared_a = clear_links_to(grid, a, b);
    let cleared_b = clear_links_to(grid, b, a);
    if cleared_a || cleared_b {
        trace!("Unlinked {} and {}", a, b);
    }
    Ok(cleared_a || cleared_b)
}

/// Are two cells joined by a passage? Invalid coordinates are never linked.
pub fn is_linked(grid: &Grid, a: GridCoordinate, b: GridCoordinate) -> bool {
    grid.cell(a).map_or(false, |cell| find_link(cell, b).is_some())
}

fn require_in_grid(grid: &Grid, coord: GridCoordinate) -> Result<()> {
    if grid.is_valid_coordinate(coord) {
        Ok(())
    } else {
        Err(ErrorKind::CellOutOfBounds(coord).into())
    }
}

fn set_slot(grid: &mut Grid, at: GridCoordinate, direction: CompassPrimary, to: Option<GridCoordinate>) {
    if let Some(cell) = grid.cell_mut(at) {
        cell.set_link(direction, to);
    }
}

fn clear_slot_if_linked_to(grid: &mut Grid,
                           at: GridCoordinate,
                           direction: CompassPrimary,
                           expected: GridCoordinate) {
    if let Some(cell) = grid.cell_mut(at) {
        if cell.link(direction) == Some(expected) {
            cell.set_link(direction, None);
        }
    }
}

fn clear_links_to(grid: &mut Grid, at: GridCoordinate, target: GridCoordinate) -> bool {
    let mut cleared = false;
    if let Some(cell) = grid.cell_mut(at) {
        while let Some(dir) = find_link(cell, target) {
            cell.set_link(dir, None);
            cleared = true;
        }
    }
    cleared
}


#[cfg(test)]
mod tests {

    use quickcheck::{quickcheck, TestResult};

    use super::*;
    use crate::analysis::check_link_integrity;
    use crate::units::{ColumnsCount, RowsCount};

    fn grid(rows: usize, columns: usize) -> Grid {
        Grid::new(RowsCount(rows), ColumnsCount(columns)).expect("grid construction failed")
    }

    fn cell(g: &Grid, r: usize, c: usize) -> &Cell {
        g.cell(GridCoordinate::new(r, c)).expect("cell missing")
    }

    #[test]
    fn link_north_is_mirrored_south() {
        let mut g = grid(3, 5);
        let a = GridCoordinate::new(1, 3);
        let n = GridCoordinate::new(0, 3);
        link(&mut g, a, CompassPrimary::North, n).expect("link failed");
        assert_eq!(cell(&g, 1, 3).north(), Some(n));
        assert_eq!(cell(&g, 0, 3).south(), Some(a));
        assert!(is_linked(&g, a, n) && is_linked(&g, n, a));
        assert_eq!(g.links_count(), 1);
    }

    #[test]
    fn link_east_is_mirrored_west() {
        let mut g = grid(3, 5);
        let a = GridCoordinate::new(1, 3);
        let e = GridCoordinate::new(1, 4);
        link(&mut g, a, CompassPrimary::East, e).expect("link failed");
        assert_eq!(cell(&g, 1, 3).east(), Some(e));
        assert_eq!(cell(&g, 1, 4).west(), Some(a));
    }

    #[test]
    fn find_link_returns_slot_direction() {
        let mut g = grid(3, 5);
        let a = GridCoordinate::new(1, 3);
        let s = GridCoordinate::new(2, 3);
        link(&mut g, a, CompassPrimary::South, s).expect("link failed");
        assert_eq!(find_link(cell(&g, 1, 3), s), Some(CompassPrimary::South));
        assert_eq!(find_link(cell(&g, 2, 3), a), Some(CompassPrimary::North));
        assert_eq!(find_link(cell(&g, 1, 3), GridCoordinate::new(0, 0)), None);
    }

    #[test]
    fn unlink_clears_both_sides() {
        let mut g = grid(3, 5);
        let a = GridCoordinate::new(1, 3);
        let s = GridCoordinate::new(2, 3);
        let e = GridCoordinate::new(1, 4);
        link(&mut g, a, CompassPrimary::South, s).expect("link failed");
        link(&mut g, a, CompassPrimary::East, e).expect("link failed");

        assert_eq!(unlink(&mut g, a, s).unwrap(), true);
        assert_eq!(cell(&g, 1, 3).south(), None);
        assert_eq!(cell(&g, 2, 3).north(), None);
        assert_eq!(find_link(cell(&g, 1, 3), s), None);
        assert_eq!(find_link(cell(&g, 2, 3), a), None);

        // a - e untouched
        assert!(is_linked(&g, a, e));
        assert_eq!(g.links_count(), 1);

        assert_eq!(unlink(&mut g, a, s).unwrap(), false);
    }

    #[test]
    fn unlink_repairs_half_links() {
        let mut g = grid(2, 2);
        let a = GridCoordinate::new(0, 0);
        let b = GridCoordinate::new(1, 0);
        g.cell_mut(b).unwrap().set_link(CompassPrimary::North, Some(a));
        assert!(check_link_integrity(&g).is_err());

        assert!(unlink(&mut g, a, b).unwrap());
        assert_eq!(find_link(cell(&g, 0, 0), b), None);
        assert_eq!(find_link(cell(&g, 1, 0), a), None);
        assert!(check_link_integrity(&g).is_ok());
    }

    #[test]
    fn unlink_after_repeated_links() {
        let mut g = grid(2, 2);
        let a = GridCoordinate::new(0, 0);
        let b = GridCoordinate::new(0, 1);
        link(&mut g, a, CompassPrimary::East, b).expect("link failed");
        link(&mut g, a, CompassPrimary::East, b).expect("link failed");
        // Not adjacent in this direction, but the caller owns that precondition.
        link(&mut g, a, CompassPrimary::South, b).expect("link failed");

        assert!(unlink(&mut g, a, b).unwrap());
        assert_eq!(find_link(cell(&g, 0, 0), b), None);
        assert_eq!(find_link(cell(&g, 0, 1), a), None);
        assert_eq!(g.links_count(), 0);
    }

    #[test]
    fn relinking_a_slot_clears_the_stale_back_link() {
        let mut g = grid(3, 3);
        let a = GridCoordinate::new(1, 1);
        let first = GridCoordinate::new(0, 1);
        let second = GridCoordinate::new(0, 2);
        link(&mut g, a, CompassPrimary::North, first).expect("link failed");
        link(&mut g, a, CompassPrimary::North, second).expect("link failed");

        assert_eq!(cell(&g, 1, 1).north(), Some(second));
        assert_eq!(cell(&g, 0, 2).south(), Some(a));
        assert_eq!(cell(&g, 0, 1).south(), None);
        assert!(check_link_integrity(&g).is_ok());

        // The same from the receiving side.
        let other = GridCoordinate::new(1, 2);
        link(&mut g, other, CompassPrimary::North, second).expect("link failed");
        assert_eq!(cell(&g, 0, 2).south(), Some(other));
        assert_eq!(cell(&g, 1, 1).north(), None);
        assert!(check_link_integrity(&g).is_ok());
    }

    #[test]
    fn no_self_links() {
        let mut g = grid(4, 4);
        let a = GridCoordinate::new(0, 0);
        let err = link(&mut g, a, CompassPrimary::East, a).unwrap_err();
        assert!(matches!(*err.kind(), ErrorKind::SelfLink(coord) if coord == a));
        assert!(cell(&g, 0, 0).links().is_empty());
    }

    #[test]
    fn no_links_to_cells_outside_the_grid() {
        let mut g = grid(4, 4);
        let good = GridCoordinate::new(0, 0);
        let invalid = GridCoordinate::new(100, 100);

        let err = link(&mut g, good, CompassPrimary::East, invalid).unwrap_err();
        assert!(matches!(*err.kind(), ErrorKind::CellOutOfBounds(coord) if coord == invalid));
        let err = link(&mut g, invalid, CompassPrimary::West, good).unwrap_err();
        assert!(matches!(*err.kind(), ErrorKind::CellOutOfBounds(_)));
        let err = unlink(&mut g, good, invalid).unwrap_err();
        assert!(matches!(*err.kind(), ErrorKind::CellOutOfBounds(_)));

        assert!(cell(&g, 0, 0).links().is_empty());
        assert!(!is_linked(&g, good, invalid));
        assert!(!is_linked(&g, invalid, good));
    }

    #[test]
    fn links_on_a_disposed_grid_are_rejected() {
        let mut g = grid(2, 2);
        g.dispose();
        let err = link(&mut g, GridCoordinate::new(0, 0), CompassPrimary::East,
                       GridCoordinate::new(0, 1)).unwrap_err();
        assert!(matches!(*err.kind(), ErrorKind::CellOutOfBounds(_)));
    }

    #[test]
    fn quickcheck_links_stay_symmetric() {
        // Arbitrary link / unlink sequences on a 3x3 grid, adjacency not enforced.
        fn p(ops: Vec<(u8, u8, u8, bool)>, last: (u8, u8)) -> TestResult {
            let mut g = grid(3, 3);
            let coord = |i: u8| GridCoordinate::from_row_major_index(i as usize % 9, 3);

            for (from, dir, to, is_link) in ops {
                let (a, b) = (coord(from), coord(to));
                let result = if is_link {
                    link(&mut g, a, CompassPrimary::ALL[dir as usize % 4], b).map(|_| ())
                } else {
                    unlink(&mut g, a, b).map(|_| ())
                };
                if result.is_err() && a != b {
                    return TestResult::failed();
                }
                if check_link_integrity(&g).is_err() {
                    return TestResult::failed();
                }
            }

            let (a, b) = (coord(last.0), coord(last.1));
            if unlink(&mut g, a, b).is_err() {
                return TestResult::failed();
            }
            TestResult::from_bool(find_link(cell(&g, a.row, a.column), b).is_none() &&
                                  find_link(cell(&g, b.row, b.column), a).is_none() &&
                                  check_link_integrity(&g).is_ok())
        }
        quickcheck(p as fn(Vec<(u8, u8, u8, bool)>, (u8, u8)) -> TestResult);
    }
}
