//! Plain-text board rendering.

use strictly_foxhounds::{format_position, BoardState};
use tracing::instrument;

/// Symbol for a square with no figure on it.
const EMPTY: char = '.';

/// Renders the board with column letters above and below and row numbers
/// on both sides.
///
/// Row numbers are zero-padded to two digits on boards of ten or more rows
/// so the columns stay aligned.
#[instrument(skip(board), fields(dimension = board.dimension()))]
pub fn render_board(board: &BoardState) -> String {
    let dimension = board.dimension();
    let label_width = if dimension >= 10 { 2 } else { 1 };

    let mut grid = vec![vec![EMPTY; dimension]; dimension];
    for (figure, pos) in board.figures() {
        if let (Ok(x), Ok(y)) = (usize::try_from(pos.x()), usize::try_from(pos.y()))
            && x < dimension
            && y < dimension
        {
            grid[y][x] = figure.symbol();
        }
    }

    let letters = column_letters(dimension);
    let header = format!("{}{}", " ".repeat(label_width + 1), letters);

    let mut out = String::new();
    out.push_str(&header);
    out.push_str("\n\n");
    for (y, row) in grid.iter().enumerate() {
        let label = format!("{:0width$}", y + 1, width = label_width);
        let cells: String = row.iter().collect();
        out.push_str(&format!("{label} {cells} {label}\n"));
    }
    out.push('\n');
    out.push_str(&header);
    out.push('\n');
    out
}

/// Column letters `A`, `B`, ... for a board of the given size.
fn column_letters(dimension: usize) -> String {
    (0..dimension as i32)
        .filter_map(|x| format_position(x, 0).chars().next())
        .collect()
}
