//! Property-based tests for board, rule and search invariants

use othello::board::{Board, Player, Pos, Stone, BOARD_SIZE};
use othello::eval::{evaluate, score};
use othello::rules::{
    apply_move, flipped_cells, has_legal_move, is_game_over, is_legal, legal_moves, outcome, undo_move,
};
use othello::search::{Searcher, INF};
use proptest::prelude::*;

/// Play the chosen legal moves from the opening, passing when stuck.
fn playout(choices: &[prop::sample::Index]) -> (Board, Player) {
    let mut board = Board::new();
    let mut player = Player::Black;

    for choice in choices {
        if !has_legal_move(&board, player) {
            player = player.opponent();
            if !has_legal_move(&board, player) {
                break;
            }
        }
        let moves = legal_moves(&board, player);
        apply_move(&mut board, *choice.get(&moves), player);
        player = player.opponent();
    }

    (board, player)
}

fn position() -> impl Strategy<Value = (Board, Player)> {
    prop::collection::vec(any::<prop::sample::Index>(), 0..60).prop_map(|c| playout(&c))
}

fn all_cells() -> impl Iterator<Item = Pos> {
    (0..BOARD_SIZE as u8).flat_map(|r| (0..BOARD_SIZE as u8).map(move |c| Pos::new(r, c)))
}

/// Reference minimax without pruning
fn minimax(board: &Board, depth: u8, to_move: Player, maximizer: Player) -> i32 {
    let moves = legal_moves(board, to_move);
    if depth == 0 || moves.is_empty() {
        return evaluate(board, maximizer);
    }

    let values = moves.into_iter().map(|mov| {
        let mut child = board.clone();
        apply_move(&mut child, mov, to_move);
        minimax(&child, depth - 1, to_move.opponent(), maximizer)
    });

    if to_move == maximizer {
        values.max().unwrap_or(-INF)
    } else {
        values.min().unwrap_or(INF)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn occupied_cells_are_never_legal((board, player) in position()) {
        for pos in all_cells() {
            if board.get(pos) != Stone::Empty {
                prop_assert!(!is_legal(&board, pos, player));
                prop_assert!(!is_legal(&board, pos, player.opponent()));
            }
        }
    }

    #[test]
    fn legal_moves_are_sorted_and_legal((board, player) in position()) {
        let moves = legal_moves(&board, player);
        prop_assert!(moves.windows(2).all(|w| w[0] < w[1]));
        for pos in all_cells() {
            prop_assert_eq!(moves.contains(&pos), is_legal(&board, pos, player));
        }
        prop_assert_eq!(moves.is_empty(), !has_legal_move(&board, player));
    }

    #[test]
    fn legal_move_flips_at_least_one((board, player) in position()) {
        for mov in legal_moves(&board, player) {
            prop_assert!(!flipped_cells(&board, mov, player).is_empty());
        }
    }

    #[test]
    fn applying_a_move_is_monotone((board, player) in position()) {
        let before = score(&board);
        for mov in legal_moves(&board, player) {
            let mut child = board.clone();
            let flipped = apply_move(&mut child, mov, player);
            let after = score(&child);

            prop_assert!(after.of(player) > before.of(player));
            prop_assert!(after.of(player.opponent()) < before.of(player.opponent()));
            prop_assert_eq!(after.of(player), before.of(player) + 1 + flipped.count());
            prop_assert_eq!(child.stone_count(), board.stone_count() + 1);
        }
    }

    #[test]
    fn only_opponent_stones_change((board, player) in position()) {
        for mov in legal_moves(&board, player) {
            let mut child = board.clone();
            apply_move(&mut child, mov, player);

            for pos in all_cells() {
                let (old, new) = (board.get(pos), child.get(pos));
                if pos == mov {
                    prop_assert_eq!(old, Stone::Empty);
                    prop_assert_eq!(new, player.stone());
                } else if old != new {
                    prop_assert_eq!(old, player.opponent().stone());
                    prop_assert_eq!(new, player.stone());
                }
            }
        }
    }

    #[test]
    fn clone_is_isolated((board, player) in position()) {
        let snapshot = board.to_string();
        for mov in legal_moves(&board, player) {
            let mut child = board.clone();
            apply_move(&mut child, mov, player);
            prop_assert_ne!(&child, &board);
        }
        prop_assert_eq!(board.to_string(), snapshot);
    }

    #[test]
    fn undo_restores_exactly((board, player) in position()) {
        let mut work = board.clone();
        for mov in legal_moves(&board, player) {
            let flipped = apply_move(&mut work, mov, player);
            undo_move(&mut work, mov, flipped);
            prop_assert_eq!(&work, &board);
        }
    }

    #[test]
    fn game_over_iff_nobody_moves((board, _player) in position()) {
        let stuck = legal_moves(&board, Player::Black).is_empty()
            && legal_moves(&board, Player::White).is_empty();
        prop_assert_eq!(is_game_over(&board), stuck);
        prop_assert_eq!(outcome(&board).is_some(), stuck);
    }

    #[test]
    fn text_form_round_trips((board, _player) in position()) {
        let parsed: Board = board.to_string().parse().unwrap();
        prop_assert_eq!(parsed, board);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn alpha_beta_matches_minimax((board, player) in position(), depth in 0u8..=3) {
        let mut searcher = Searcher::new();
        for maximizer in [player, player.opponent()] {
            let pruned = searcher.search(&board, depth, -INF, INF, player, maximizer);
            prop_assert_eq!(pruned, minimax(&board, depth, player, maximizer));
        }
    }

    #[test]
    fn best_move_is_legal_and_scored((board, player) in position()) {
        let mut searcher = Searcher::with_depth(2);
        let result = searcher.best_move(&board, player);
        match result.best_move {
            Some(mov) => {
                prop_assert!(is_legal(&board, mov, player));
                let mut child = board.clone();
                apply_move(&mut child, mov, player);
                prop_assert_eq!(result.score, minimax(&child, 2, player.opponent(), player));
            }
            None => prop_assert!(!has_legal_move(&board, player)),
        }
    }
}
