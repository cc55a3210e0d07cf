//! Flip rule: placing a stone turns every bracketed run of opponent stones.
//!
//! Each of the eight directions is walked independently. Opponent stones are
//! buffered until the walk reaches one of the mover's stones (the buffer is
//! committed) or an empty cell / the board edge (the buffer is discarded).

use crate::board::{Bitboard, Board, Player, Pos, Stone, DIRECTIONS};

/// Opponent stones bracketed along one direction from `pos`.
///
/// Returns an empty bitboard when the run is not closed by `player`.
#[inline]
fn flips_in_direction(board: &Board, pos: Pos, player: Player, dr: i32, dc: i32) -> Bitboard {
    let own = player.stone();
    let opponent = player.opponent().stone();
    let mut buffer = Bitboard::new();
    let mut cursor = pos.step(dr, dc);

    while let Some(p) = cursor {
        match board.get(p) {
            s if s == opponent => buffer.set(p),
            s if s == own => return buffer,
            _ => break,
        }
        cursor = p.step(dr, dc);
    }

    Bitboard::new()
}

/// Find every stone that would flip if `player` placed at `pos`.
///
/// Does not check that `pos` is empty; see [`crate::rules::is_legal`].
pub fn flipped_cells(board: &Board, pos: Pos, player: Player) -> Bitboard {
    DIRECTIONS
        .iter()
        .fold(Bitboard::new(), |acc, &(dr, dc)| {
            acc.union(flips_in_direction(board, pos, player, dr, dc))
        })
}

/// Number of stones a move would flip.
#[inline]
pub fn count_flips(board: &Board, pos: Pos, player: Player) -> u32 {
    flipped_cells(board, pos, player).count()
}

/// Place `player`'s stone at `pos` and flip every bracketed run.
///
/// The move must be legal; this does not re-validate. All flips are
/// computed before any cell changes, so the board moves from one
/// consistent state to the next in a single step.
///
/// # Returns
/// The flipped cells, which [`undo_move`] needs to reverse the move
pub fn apply_move(board: &mut Board, pos: Pos, player: Player) -> Bitboard {
    debug_assert!(board.is_empty(pos), "apply_move on occupied cell {}", pos);
    let flipped = flipped_cells(board, pos, player);
    board.set(pos, player.stone());
    board.flip(flipped);
    flipped
}

/// Exactly reverse an [`apply_move`]: clear `pos` and flip the stones back.
#[inline]
pub fn undo_move(board: &mut Board, pos: Pos, flipped: Bitboard) {
    board.set(pos, Stone::Empty);
    board.flip(flipped);
}
