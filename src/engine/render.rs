use super::{BoardError, Grid, Score, Tile};

/// How an empty cell is drawn.
pub const EMPTY_CELL: &str = "  --  ";
/// Largest tile value that fits a six-character cell. This is a display
/// ceiling only; the engine itself has no maximum.
pub const MAX_DISPLAY_VALUE: u64 = 99_999;

/// Format one tile into a six-character cell.
pub fn format_square(tile: Tile) -> Result<String, BoardError> {
    let Some(value) = tile else {
        return Ok(EMPTY_CELL.to_string());
    };
    let cell = match value {
        v if v > MAX_DISPLAY_VALUE => return Err(BoardError::TileTooWide { value: v }),
        v if v > 9_999 => format!(" {v}"),
        v if v > 999 => format!(" {v} "),
        v if v > 99 => format!("  {v} "),
        v if v > 9 => format!("  {v}  "),
        v => format!("   {v}  "),
    };
    Ok(cell)
}

/// Render `grid` as pipe-separated rows, each underlined with dashes, then the score.
///
/// ```
/// use p2048::engine::{render_grid, Grid};
///
/// let grid = Grid::from_values(2, 1, vec![Some(2), None]).unwrap();
/// assert_eq!(render_grid(&grid, 4).unwrap(), "   2  |  --  \n-------------\nScore: 4\n");
/// ```
pub fn render_grid(grid: &Grid, score: Score) -> Result<String, BoardError> {
    let mut out = String::new();
    for row in grid.as_rows(false) {
        let cells = row.into_iter().map(format_square).collect::<Result<Vec<_>, _>>()?;
        let line = cells.join("|");
        out.push_str(&line);
        out.push('\n');
        out.push_str(&"-".repeat(line.len()));
        out.push('\n');
    }
    out.push_str(&format!("Score: {score}\n"));
    Ok(out)
}
