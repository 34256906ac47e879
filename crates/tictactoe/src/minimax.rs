//! Exhaustive game-tree search

use crate::board::{Action, Board, Player};

/// Optimal move for the player to move, or `None` on a finished board.
///
/// X maximises and O minimises the final utility. Ties keep the first
/// action in row-major order.
pub fn minimax(board: &Board) -> Option<Action> {
    if board.is_terminal() {
        return None;
    }

    let maximizing = board.player() == Player::X;
    let mut best: Option<(i8, Action)> = None;

    for action in board.actions() {
        let next = board.result(action).ok()?;
        let value = search(&next, i8::MIN, i8::MAX);
        let better = match best {
            None => true,
            Some((best_value, _)) if maximizing => value > best_value,
            Some((best_value, _)) => value < best_value,
        };
        if better {
            best = Some((value, action));
        }
    }

    best.map(|(_, action)| action)
}

/// Game-theoretic value of a board under perfect play
pub fn value(board: &Board) -> i8 {
    search(board, i8::MIN, i8::MAX)
}

/// Minimax value with alpha-beta pruning
fn search(board: &Board, mut alpha: i8, mut beta: i8) -> i8 {
    if board.is_terminal() {
        return board.utility();
    }

    let children = board.actions().into_iter().filter_map(|a| board.result(a).ok());

    if board.player() == Player::X {
        let mut best = i8::MIN;
        for child in children {
            best = best.max(search(&child, alpha, beta));
            alpha = alpha.max(best);
            if alpha >= beta {
                break;
            }
        }
        best
    } else {
        let mut best = i8::MAX;
        for child in children {
            best = best.min(search(&child, alpha, beta));
            beta = beta.min(best);
            if alpha >= beta {
                break;
            }
        }
        best
    }
}
