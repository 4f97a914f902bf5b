//! Add/Remove neighborhood.
//!
//! Every neighbor differs from its source in exactly one flag. The move
//! direction adapts to the boundary of the search space:
//!
//! - nothing selected: always add a free item
//! - everything selected: always remove a chosen item
//! - otherwise: add or remove with equal probability
//!
//! The item is drawn uniformly from the eligible side.

use rand::Rng;

use crate::problem::Selection;

/// A single-flag change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Select a free item.
    Add(usize),
    /// Deselect a chosen item.
    Remove(usize),
}

impl Move {
    /// The item index the move touches.
    pub fn index(self) -> usize {
        match self {
            Move::Add(i) | Move::Remove(i) => i,
        }
    }

    /// Applies the move in place.
    pub fn apply(self, selection: &mut Selection) {
        match self {
            Move::Add(i) => selection.set(i, true),
            Move::Remove(i) => selection.set(i, false),
        }
    }
}

/// Draws a move for `selection`.
///
/// Returns `None` only for a zero-length selection, where no move exists.
pub fn propose<R: Rng>(selection: &Selection, rng: &mut R) -> Option<Move> {
    let chosen = selection.selected_indices();
    let free = selection.free_indices();

    let add = match (chosen.is_empty(), free.is_empty()) {
        (true, true) => return None,
        (true, false) => true,
        (false, true) => false,
        (false, false) => rng.random_bool(0.5),
    };

    let mv = if add {
        Move::Add(free[rng.random_range(0..free.len())])
    } else {
        Move::Remove(chosen[rng.random_range(0..chosen.len())])
    };
    Some(mv)
}

/// Returns a fresh neighbor of `selection`. The input is not modified.
///
/// A zero-length selection has no neighbors and is returned as a copy.
pub fn add_remove<R: Rng>(selection: &Selection, rng: &mut R) -> Selection {
    let mut next = selection.clone();
    if let Some(mv) = propose(selection, rng) {
        mv.apply(&mut next);
    }
    next
}
