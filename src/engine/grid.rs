use super::{BoardError, Move, Tile};

/// Fixed-size, row-major grid of tiles.
///
/// Cell `(row, col)` lives at linear index `row * width + col`. The number of
/// cells never changes after construction; whole-grid replacement goes through
/// [`Grid::replace`], which rejects wrongly sized input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    values: Vec<Tile>,
}

impl Grid {
    /// An empty `width x height` grid.
    ///
    /// Panics if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Self {
        let cells = width.checked_mul(height).unwrap_or_else(|| panic!("{width}x{height} grid overflows usize"));
        Grid { width, height, values: vec![None; cells] }
    }

    /// Build a grid from row-major values.
    pub fn from_values(width: usize, height: usize, values: Vec<Tile>) -> Result<Self, BoardError> {
        let expected = width.saturating_mul(height);
        if values.len() != expected {
            return Err(BoardError::LengthMismatch { expected, actual: values.len() });
        }
        Ok(Grid { width, height, values })
    }

    #[inline]
    pub fn width(&self) -> usize { self.width }

    #[inline]
    pub fn height(&self) -> usize { self.height }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize { self.values.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Tile at `(row, col)`. Panics when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.values[self.index(row, col)]
    }

    /// Overwrite the tile at `(row, col)`. Panics when out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) {
        let idx = self.index(row, col);
        self.values[idx] = tile;
    }

    /// Tile at a linear index.
    #[inline]
    pub fn cell(&self, idx: usize) -> Tile {
        self.values[idx]
    }

    /// Copy of every tile in row-major order.
    pub fn values(&self) -> Vec<Tile> {
        self.values.clone()
    }

    /// Replace every tile at once.
    pub fn replace(&mut self, values: Vec<Tile>) -> Result<(), BoardError> {
        if values.len() != self.values.len() {
            return Err(BoardError::LengthMismatch { expected: self.values.len(), actual: values.len() });
        }
        self.values = values;
        Ok(())
    }

    /// Number of cells without a tile.
    pub fn count_empty(&self) -> usize {
        self.values.iter().filter(|t| t.is_none()).count()
    }

    /// Rows top to bottom, each optionally reversed.
    ///
    /// ```text
    ///  1  2  3  4
    ///  5  6  7  8     ->  [[1 2 3 4], [5 6 7 8], ...]
    /// ```
    pub fn as_rows(&self, reverse_each: bool) -> Vec<Vec<Tile>> {
        (0..self.height)
            .map(|row| {
                let mut line = self.values[row * self.width..(row + 1) * self.width].to_vec();
                if reverse_each {
                    line.reverse();
                }
                line
            })
            .collect()
    }

    /// Columns left to right, each read top to bottom and optionally reversed.
    ///
    /// ```text
    ///  1  2  3  4
    ///  5  6  7  8     ->  [[1 5 ...], [2 6 ...], ...]
    /// ```
    pub fn as_columns(&self, reverse_each: bool) -> Vec<Vec<Tile>> {
        (0..self.width)
            .map(|col| {
                let mut line: Vec<Tile> = (0..self.height).map(|row| self.values[col + row * self.width]).collect();
                if reverse_each {
                    line.reverse();
                }
                line
            })
            .collect()
    }

    /// The lines a move in `direction` resolves, oriented so tiles slide
    /// toward the end of each line.
    pub fn lines(&self, direction: Move) -> Vec<Vec<Tile>> {
        if direction.is_vertical() {
            self.as_columns(direction.is_reversed())
        } else {
            self.as_rows(direction.is_reversed())
        }
    }

    /// Inverse of [`Grid::lines`]: rebuild row-major values from lines
    /// oriented for `direction`.
    ///
    /// `lines` must have the shape `lines(direction)` produces.
    pub fn flatten(&self, lines: &[Vec<Tile>], direction: Move) -> Vec<Tile> {
        match direction {
            Move::Right => lines.iter().flat_map(|line| line.iter().copied()).collect(),
            Move::Left => lines.iter().flat_map(|line| line.iter().rev().copied()).collect(),
            Move::Down | Move::Up => {
                let mut out = vec![None; self.width * self.height];
                for (col, column) in lines.iter().enumerate() {
                    for (pos, &tile) in column.iter().enumerate() {
                        let row = if direction == Move::Up { column.len() - 1 - pos } else { pos };
                        out[row * self.width + col] = tile;
                    }
                }
                out
            }
        }
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(row < self.height && col < self.width, "cell ({row}, {col}) outside {}x{} grid", self.width, self.height);
        row * self.width + col
    }

    #[inline]
    pub(crate) fn set_cell(&mut self, idx: usize, tile: Tile) {
        self.values[idx] = tile;
    }
}
