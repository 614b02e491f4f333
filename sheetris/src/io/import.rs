use crate::entities::{Piece, ThicknessGroup};
use crate::io::ext_repr::{ExtInstance, ExtPiece};
use anyhow::{Result, ensure};
use itertools::Itertools;
use log::debug;
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

/// Number of decimals kept when comparing thicknesses
pub const THICKNESS_DECIMALS: i32 = 6;

/// Splits the pieces of an instance into thickness groups.
///
/// Thicknesses equal up to [`THICKNESS_DECIMALS`] decimals share a group. Groups are sorted by
/// ascending thickness, pieces keep their order from the instance.
pub fn import(ext_instance: &ExtInstance) -> Result<Vec<ThicknessGroup>> {
    ensure!(
        ext_instance.pieces.iter().map(|p| p.id).all_unique(),
        "instance {} contains duplicate piece ids",
        ext_instance.name
    );

    let mut groups: BTreeMap<OrderedFloat<f64>, Vec<Piece>> = BTreeMap::new();
    for ext_piece in &ext_instance.pieces {
        let piece = import_piece(ext_piece)?;
        groups
            .entry(OrderedFloat(piece.thickness))
            .or_default()
            .push(piece);
    }

    let groups = groups
        .into_iter()
        .map(|(thickness, pieces)| ThicknessGroup::new(thickness.0, pieces))
        .collect_vec();

    debug!(
        "[IMPORT] {}: {} pieces in {} thickness group(s)",
        ext_instance.name,
        ext_instance.pieces.len(),
        groups.len()
    );

    Ok(groups)
}

pub fn import_piece(ext_piece: &ExtPiece) -> Result<Piece> {
    ensure!(
        ext_piece.thickness.is_finite() && ext_piece.thickness >= 0.0,
        "piece {} has an invalid thickness: {}",
        ext_piece.id,
        ext_piece.thickness
    );
    Ok(Piece::new(
        ext_piece.id,
        ext_piece.width,
        ext_piece.height,
        round_thickness(ext_piece.thickness),
        ext_piece.allow_rotation,
    ))
}

/// Rounds a thickness to [`THICKNESS_DECIMALS`] decimals
pub fn round_thickness(thickness: f64) -> f64 {
    let factor = 10f64.powi(THICKNESS_DECIMALS);
    (thickness * factor).round() / factor
}
