/// Failures raised by the board and its collaborators.
///
/// Illegal moves are not errors: a move that changes nothing is a no-op.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("cannot add {requested} random tiles, board only has {available} empty cells")]
    BoardFull { requested: usize, available: usize },
    #[error("tile value {value} is wider than a display cell (max 99999)")]
    TileTooWide { value: u64 },
    #[error("grid holds {expected} cells, got {actual} values")]
    LengthMismatch { expected: usize, actual: usize },
}
