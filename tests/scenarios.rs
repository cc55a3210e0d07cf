//! End-to-end scenarios through the public controller API

use othello::board::Stone;
use othello::rules::{is_game_over, legal_moves};
use othello::search::Searcher;
use othello::{Board, BoardError, GameConfig, GameController, GameMode, GameOutcome, GamePhase, Player, Pos};

#[test]
fn opening_position() {
    let game = GameController::default();
    assert_eq!(<(u32, u32)>::from(game.score()), (2, 2));
    assert_eq!(
        game.legal_moves(Player::Black),
        vec![Pos::new(2, 3), Pos::new(3, 2), Pos::new(4, 5), Pos::new(5, 4)]
    );
}

#[test]
fn black_opens_at_two_three() {
    let mut game = GameController::default();
    assert_eq!(game.board().cell(3, 3), Ok(Stone::White));

    assert!(game.apply_human_move_at(2, 3));

    assert_eq!(<(u32, u32)>::from(game.score()), (4, 1));
    assert_eq!(game.board().cell(3, 3), Ok(Stone::Black));
    assert_eq!(game.board().cell(2, 3), Ok(Stone::Black));
}

#[test]
fn out_of_range_access_fails() {
    let board = Board::new();
    assert_eq!(board.cell(8, 0), Err(BoardError::OutOfRange { row: 8, col: 0 }));
    assert_eq!(board.cell(0, -1), Err(BoardError::OutOfRange { row: 0, col: -1 }));
}

#[test]
fn stuck_player_gets_no_move() {
    let board: Board = "BB......
                        ........
                        ........
                        ........
                        ........
                        ........
                        ........
                        ........"
        .parse()
        .unwrap();

    assert!(legal_moves(&board, Player::White).is_empty());
    assert!(is_game_over(&board));
    assert_eq!(Searcher::new().best_move(&board, Player::White).best_move, None);
}

#[test]
fn human_against_engine_plays_to_the_end() {
    let mut game = GameController::new(GameConfig::new(GameMode::PvE { human: Player::Black }).with_search_depth(2));
    let mut plies = 0;

    while !game.is_game_over() {
        match game.phase() {
            GamePhase::HumanTurn(player) => {
                assert_eq!(player, Player::Black);
                // Take the last legal move so the game differs from the engine's choices
                let mov = *game.current_legal_moves().last().unwrap();
                assert!(game.apply_human_move(mov));
            }
            GamePhase::AutoTurn(player) => {
                assert_eq!(player, Player::White);
                assert!(game.request_auto_move().is_some());
            }
            GamePhase::GameOver => unreachable!(),
        }
        plies += 1;
        assert!(plies <= 60, "every ply fills a cell");
    }

    let score = game.score();
    let expected = match score.black.cmp(&score.white) {
        std::cmp::Ordering::Greater => GameOutcome::Win(Player::Black),
        std::cmp::Ordering::Less => GameOutcome::Win(Player::White),
        std::cmp::Ordering::Equal => GameOutcome::Draw,
    };
    assert_eq!(game.outcome(), Some(expected));
    assert!(!game.apply_human_move(Pos::new(0, 0)));
}

#[test]
fn undo_after_reply_restores_human_turn() {
    let mut game = GameController::default();
    game.apply_human_move(Pos::new(4, 5));
    game.request_auto_move();
    game.apply_human_move(game.current_legal_moves()[0]);
    let before_second = game.history()[..2].to_vec();

    assert!(game.undo());
    assert_eq!(game.history(), &before_second[..]);
    assert_eq!(game.phase(), GamePhase::HumanTurn(Player::Black));
}
