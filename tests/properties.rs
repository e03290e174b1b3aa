use p2048::engine::{BasicResolutionRuleset, Board, Grid, Move, ResolutionRuleset, Tile};
use proptest::prelude::*;

fn arb_tile() -> impl Strategy<Value = Tile> {
    prop::option::of((1u32..8).prop_map(|exp| 1u64 << exp))
}

fn arb_line() -> impl Strategy<Value = Vec<Tile>> {
    prop::collection::vec(arb_tile(), 0..8)
}

fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..6, 1usize..6).prop_flat_map(|(w, h)| {
        prop::collection::vec(arb_tile(), w * h).prop_map(move |values| Grid::from_values(w, h, values).unwrap())
    })
}

fn tile_sum(values: &[Tile]) -> u64 {
    values.iter().flatten().sum()
}

fn filled(values: &[Tile]) -> usize {
    values.iter().filter(|t| t.is_some()).count()
}

fn has_equal_neighbours(line: &[Tile]) -> bool {
    line.windows(2).any(|w| w[0].is_some() && w[0] == w[1])
}

proptest! {
    #[test]
    fn line_conserves_tiles(line in arb_line()) {
        let (out, score) = BasicResolutionRuleset.transform_line(&line);
        prop_assert_eq!(out.len(), line.len());
        prop_assert_eq!(tile_sum(&out), tile_sum(&line));
        // Every merge removes one tile and scores the doubled value.
        let merges = filled(&line) - filled(&out);
        prop_assert_eq!(merges == 0, score == 0);
        prop_assert!(score >= 4 * merges as u64 || merges == 0);
    }

    #[test]
    fn line_output_is_compact(line in arb_line()) {
        let (out, _) = BasicResolutionRuleset.transform_line(&line);
        let first_tile = out.iter().position(Option::is_some).unwrap_or(out.len());
        prop_assert!(out[first_tile..].iter().all(Option::is_some));
        for tile in out.iter().flatten() {
            prop_assert!(tile.is_power_of_two() && *tile >= 2);
        }
    }

    #[test]
    fn settled_line_is_a_fixed_point(line in arb_line()) {
        let (once, _) = BasicResolutionRuleset.transform_line(&line);
        let (twice, score) = BasicResolutionRuleset.transform_line(&once);
        if has_equal_neighbours(&once) {
            prop_assert!(score > 0);
        } else {
            prop_assert_eq!(twice, once);
            prop_assert_eq!(score, 0);
        }
    }

    #[test]
    fn views_round_trip(grid in arb_grid()) {
        prop_assert_eq!(grid.flatten(&grid.as_rows(false), Move::Right), grid.values());
        prop_assert_eq!(grid.flatten(&grid.as_columns(false), Move::Down), grid.values());
        prop_assert_eq!(grid.flatten(&grid.as_rows(true), Move::Left), grid.values());
        prop_assert_eq!(grid.flatten(&grid.as_columns(true), Move::Up), grid.values());
    }

    #[test]
    fn transform_conserves_tile_sum(grid in arb_grid()) {
        for dir in Move::ALL {
            if let Some(t) = BasicResolutionRuleset.pre_transform(&grid, dir) {
                prop_assert_eq!(tile_sum(&t.values), tile_sum(&grid.values()));
                prop_assert_ne!(t.values, grid.values());
            }
        }
    }

    #[test]
    fn moves_follow_legality(grid in arb_grid(), seed in any::<u64>()) {
        for dir in Move::ALL {
            let mut board = Board::from_grid(grid.clone(), BasicResolutionRuleset, seed);
            let legal = board.possible_moves();
            let before = board.values();
            match legal.get(&dir) {
                None => {
                    prop_assert!(!board.make_move(dir));
                    prop_assert_eq!(board.values(), before);
                    prop_assert_eq!(board.score(), 0);
                }
                Some(&gain) => {
                    let resolved = BasicResolutionRuleset.pre_transform(&grid, dir).unwrap();
                    prop_assert!(board.make_move(dir));
                    prop_assert_eq!(board.score(), gain);
                    prop_assert_eq!(resolved.score_gain, gain);
                    // Exactly one tile spawned on top of the resolved layout.
                    prop_assert_eq!(filled(&board.values()), filled(&resolved.values) + 1);
                    let spawned = tile_sum(&board.values()) - tile_sum(&resolved.values);
                    prop_assert!(spawned == 2 || spawned == 4);
                }
            }
        }
    }
}

#[test]
fn empty_board_has_no_moves_in_any_size() {
    for (w, h) in [(1, 1), (4, 4), (5, 3)] {
        let board = Board::from_grid(Grid::new(w, h), BasicResolutionRuleset, 0);
        assert!(board.possible_moves().is_empty());
    }
}

#[test]
fn long_game_keeps_invariants() {
    let mut board = Board::new(4, 4, 2, 2024);
    let mut last_score = 0;
    let mut turns = 0;
    while !board.is_game_over() && turns < 2_000 {
        let dir = *board.possible_moves().keys().next().unwrap();
        assert!(board.make_move(dir));
        assert!(board.score() >= last_score);
        last_score = board.score();
        turns += 1;
    }
    for tile in board.values().into_iter().flatten() {
        assert!(tile.is_power_of_two() && tile >= 2);
    }
    assert!(board.is_game_over() || turns == 2_000);
}
