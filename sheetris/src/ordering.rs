use crate::entities::Piece;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Order in which the pieces are offered to the packers, as indices into `pieces`.
///
/// Descending area, then descending longer side, then input order.
/// Large pieces go first so smaller ones can fill the gaps they leave behind.
pub fn placement_order(pieces: &[Piece]) -> Vec<usize> {
    (0..pieces.len())
        .sorted_by_key(|&i| {
            let piece = &pieces[i];
            (
                Reverse(OrderedFloat(piece.area())),
                Reverse(OrderedFloat(piece.longer_side())),
                i,
            )
        })
        .collect_vec()
}
