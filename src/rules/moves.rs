//! Move legality and legal-move enumeration

use crate::board::{Board, Player, Pos, Stone, BOARD_SIZE, DIRECTIONS};

/// True if a run of opponent stones starting next to `pos` is closed by `player`.
#[inline]
fn brackets(board: &Board, pos: Pos, player: Player, dr: i32, dc: i32) -> bool {
    let own = player.stone();
    let opponent = player.opponent().stone();

    // The adjacent cell must already be the opponent's
    let mut cursor = match pos.step(dr, dc) {
        Some(p) if board.get(p) == opponent => p.step(dr, dc),
        _ => return false,
    };

    while let Some(p) = cursor {
        match board.get(p) {
            s if s == own => return true,
            Stone::Empty => return false,
            _ => cursor = p.step(dr, dc),
        }
    }

    false
}

/// Check if `player` may place a stone at `pos`.
///
/// Legal iff the cell is empty and at least one direction brackets a
/// contiguous run of opponent stones.
pub fn is_legal(board: &Board, pos: Pos, player: Player) -> bool {
    if !board.is_empty(pos) {
        return false;
    }

    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| brackets(board, pos, player, dr, dc))
}

/// All legal moves for `player`, row-major (row ascending, then column).
pub fn legal_moves(board: &Board, player: Player) -> Vec<Pos> {
    all_cells()
        .filter(|&pos| is_legal(board, pos, player))
        .collect()
}

/// Faster than `!legal_moves(..).is_empty()`: stops at the first hit.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    all_cells().any(|pos| is_legal(board, pos, player))
}

#[inline]
fn all_cells() -> impl Iterator<Item = Pos> {
    (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Pos::new(row, col)))
}
