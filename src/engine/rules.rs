use std::collections::BTreeMap;

use log::warn;

use super::{BoardState, Grid, Move, Score, Tile};

/// Directions that would change the board, with the score each would earn.
pub type LegalMoves = BTreeMap<Move, Score>;

/// Result of resolving a legal move: the new row-major values and the score earned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transform {
    pub values: Vec<Tile>,
    pub score_gain: Score,
}

/// Strategy that decides what a move does to a board.
///
/// Implementors only have to provide [`transform_line`](Self::transform_line);
/// the remaining methods orient lines per direction through [`Grid::lines`]
/// and commit through [`BoardState`]. A ruleset never holds game state.
pub trait ResolutionRuleset {
    /// Resolve a single row or column whose tiles slide toward the end.
    ///
    /// Must return a line of the same length.
    fn transform_line(&self, line: &[Tile]) -> (Vec<Tile>, Score);

    /// Resolve every line for `direction` without touching the grid.
    ///
    /// Returns `None` when no line changes, i.e. the move is illegal.
    fn pre_transform(&self, grid: &Grid, direction: Move) -> Option<Transform> {
        let lines = grid.lines(direction);
        let mut legal = false;
        let mut score_gain = 0;
        let mut resolved = Vec::with_capacity(lines.len());
        for line in &lines {
            let (next, gain) = self.transform_line(line);
            assert_eq!(next.len(), line.len(), "transform_line changed the line length");
            legal |= next != *line;
            score_gain += gain;
            resolved.push(next);
        }
        legal.then(|| Transform { values: grid.flatten(&resolved, direction), score_gain })
    }

    /// Every direction that changes at least one line. Computed fresh on each call.
    fn legal_moves(&self, grid: &Grid) -> LegalMoves {
        Move::ALL
            .into_iter()
            .filter_map(|dir| self.pre_transform(grid, dir).map(|t| (dir, t.score_gain)))
            .collect()
    }

    /// Apply `direction` to `state`: commit the new values, add the score and
    /// spawn one tile. Illegal moves leave `state` untouched.
    ///
    /// Returns whether the move was applied.
    fn transform(&self, state: &mut BoardState, direction: Move) -> bool {
        let Some(resolved) = self.pre_transform(state.grid(), direction) else {
            return false;
        };
        state.commit(resolved);
        if let Err(err) = state.spawn(1) {
            warn!("no tile spawned after {direction}: {err}");
        }
        true
    }
}

/// Standard 2048 rules: slide, merge each adjacent equal pair once, slide again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicResolutionRuleset;

impl ResolutionRuleset for BasicResolutionRuleset {
    fn transform_line(&self, line: &[Tile]) -> (Vec<Tile>, Score) {
        let mut packed = compact(line);
        let mut score: Score = 0;
        // Scan from the far end so the tile nearest the wall merges first;
        // the cleared slot stops a freshly doubled tile from merging again.
        for pos in (1..packed.len()).rev() {
            // A tile of 2^63 cannot double, so a pair of them stays put.
            let Some(merged) = packed[pos].and_then(|v| v.checked_mul(2)) else {
                continue;
            };
            if packed[pos - 1] == packed[pos] {
                packed[pos] = Some(merged);
                packed[pos - 1] = None;
                score = score.saturating_add(merged);
            }
        }
        (compact(&packed), score)
    }
}

/// Stable partition: empty cells first, tiles after in their original order.
fn compact(line: &[Tile]) -> Vec<Tile> {
    let tiles: Vec<Tile> = line.iter().copied().filter(Option::is_some).collect();
    let mut out = vec![None; line.len() - tiles.len()];
    out.extend(tiles);
    out
}
