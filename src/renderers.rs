use std::fmt;

use crate::cells::Cell;
use crate::grid::Grid;

const CORNER: &str = "+";
const WALL_LR_3: &str = "---";
const OPEN_LR_3: &str = "   ";
const WALL_UD: &str = "|";
const OPEN_UD: &str = " ";
const BODY: &str = "   "; // 3 spaces

/// Render a maze as text, one row of cells at a time.
///
/// Each cell only draws its North and West walls, and only when that link is absent. The cell to
/// the East or South supplies the remaining walls, except on the grid's east column and south row
/// where the closing walls are always drawn.
pub fn render_text(grid: &Grid) -> String {
    let mut output = String::new();

    grid.for_each_row(|row: &[Cell]| {
        let mut top_section = String::new();
        let mut middle_section = String::new();

        for cell in row {
            top_section.push_str(CORNER);
            top_section.push_str(if cell.north().is_some() { OPEN_LR_3 } else { WALL_LR_3 });

            middle_section.push_str(if cell.west().is_some() { OPEN_UD } else { WALL_UD });
            middle_section.push_str(BODY);
        }
        top_section.push_str(CORNER);
        middle_section.push_str(WALL_UD);

        output.push_str(&top_section);
        output.push('\n');
        output.push_str(&middle_section);
        output.push('\n');
    });

    if !grid.is_empty() {
        output.push_str(CORNER);
        for _ in 0..grid.num_columns() {
            output.push_str(WALL_LR_3);
            output.push_str(CORNER);
        }
        output.push('\n');
    }

    output
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_text(self))
    }
}
