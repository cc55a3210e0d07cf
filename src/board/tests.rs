use super::*;
use crate::error::BoardError;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Black.opponent(), Player::White);
    assert_eq!(Player::White.opponent(), Player::Black);
}

#[test]
fn test_stone_sign_symmetry() {
    assert_eq!(Stone::Black.sign(), 1);
    assert_eq!(Stone::White.sign(), -1);
    assert_eq!(Stone::Empty.sign(), 0);
    for player in [Player::Black, Player::White] {
        assert_eq!(player.opponent().stone().sign(), -player.stone().sign());
    }
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 4);
    assert_eq!(pos.to_index(), 28);
    assert_eq!(Pos::from_index(28), pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(8, 0));
    assert!(!Pos::is_valid(0, 8));
}

#[test]
fn test_pos_try_new_out_of_range() {
    assert_eq!(Pos::try_new(2, 3), Ok(Pos::new(2, 3)));
    assert_eq!(
        Pos::try_new(8, 3),
        Err(BoardError::OutOfRange { row: 8, col: 3 })
    );
}

#[test]
fn test_pos_step_stops_at_edge() {
    assert_eq!(Pos::new(0, 0).step(-1, 0), None);
    assert_eq!(Pos::new(0, 0).step(1, 1), Some(Pos::new(1, 1)));
    assert_eq!(Pos::new(7, 3).step(1, 0), None);
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 0) < Pos::new(0, 1));
    assert!(Pos::new(0, 7) < Pos::new(1, 0));
}

#[test]
fn test_initial_position() {
    let board = Board::new();
    assert_eq!(board.get(Pos::new(3, 3)), Stone::White);
    assert_eq!(board.get(Pos::new(4, 4)), Stone::White);
    assert_eq!(board.get(Pos::new(3, 4)), Stone::Black);
    assert_eq!(board.get(Pos::new(4, 3)), Stone::Black);
    assert_eq!(board.count(Player::Black), 2);
    assert_eq!(board.count(Player::White), 2);
    assert_eq!(board.stone_count(), 4);
}

#[test]
fn test_checked_access() {
    let mut board = Board::new();
    assert_eq!(board.cell(3, 4), Ok(Stone::Black));
    assert!(matches!(board.cell(-1, 0), Err(BoardError::OutOfRange { .. })));
    assert!(board.set_cell(0, 8, Stone::Black).is_err());

    board.set_cell(0, 0, Stone::White).unwrap();
    assert_eq!(board.get(Pos::new(0, 0)), Stone::White);
}

#[test]
fn test_set_overwrites_and_clears() {
    let mut board = Board::new();
    let pos = Pos::new(3, 3);
    board.set(pos, Stone::Black);
    assert_eq!(board.get(pos), Stone::Black);
    assert!(!board.white.get(pos));
    board.set(pos, Stone::Empty);
    assert!(board.is_empty(pos));
}

#[test]
fn test_clone_isolated() {
    let original = Board::new();
    let mut copy = original.clone();
    copy.set(Pos::new(0, 0), Stone::Black);
    copy.set(Pos::new(3, 3), Stone::Black);

    assert_eq!(original, Board::new());
    assert!(original.is_empty(Pos::new(0, 0)));
}

#[test]
fn test_flip_mask() {
    let mut board = Board::new();
    let mut mask = Bitboard::new();
    mask.set(Pos::new(3, 3));
    board.flip(mask);
    assert_eq!(board.get(Pos::new(3, 3)), Stone::Black);
    assert_eq!(board.count(Player::Black), 3);
    assert_eq!(board.count(Player::White), 1);
}

#[test]
fn test_display_roundtrip() {
    let board = Board::new();
    let text = board.to_string();
    assert_eq!(text.lines().nth(3), Some("...WB..."));
    assert_eq!(text.parse::<Board>().unwrap(), board);
}

#[test]
fn test_parse_rejects_bad_input() {
    assert!("........".parse::<Board>().is_err());

    let bad = "\
        ........
        ........
        ........
        ...WB...
        ...BZ...
        ........
        ........
        ........";
    match bad.parse::<Board>() {
        Err(BoardError::Parse { line, .. }) => assert_eq!(line, 5),
        other => panic!("expected parse error, got {:?}", other),
    }
}
