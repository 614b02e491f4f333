use crate::entities::{Algorithm, PackConfig, Piece, ThicknessGroup};
use crate::error::{PackError, Result};
use crate::ordering::placement_order;
use crate::packers::{GuillotinePacker, MaxRectsPacker, Packer, SkylinePacker};
use crate::util::assertions;
use log::info;
use rayon::prelude::*;
use std::collections::HashSet;

mod allocator;
mod assembler;

#[doc(inline)]
pub use allocator::SheetAllocator;
#[doc(inline)]
pub use assembler::{
    LabelEntry, LabelTable, LayoutResult, SheetLayout, assemble, label_from_index,
};

/// Packs one batch of pieces onto as many sheets as needed.
///
/// The pieces are offered to the packer in [`placement_order`]. Pieces that do not fit on an
/// empty sheet in any allowed orientation end up in [`LayoutResult::unplaced`].
pub fn pack_pieces(pieces: &[Piece], config: &PackConfig) -> Result<LayoutResult> {
    config.validate()?;
    validate_pieces(pieces)?;

    if pieces.is_empty() {
        return Ok(LayoutResult::empty(*config));
    }

    let order = placement_order(pieces);
    let rotation = config.allow_rotation;
    let layout = match config.algorithm {
        Algorithm::MaxRects => run(pieces, &order, config, MaxRectsPacker::new(rotation)),
        Algorithm::Guillotine => run(pieces, &order, config, GuillotinePacker::new(rotation)),
        Algorithm::Skyline => run(pieces, &order, config, SkylinePacker::new(rotation)),
    };

    debug_assert!(assertions::layout_accounts_for_pieces(&layout, pieces));

    info!(
        "[{}] packed {}/{} pieces on {} sheet(s), utilization: {:.3}%",
        config.algorithm,
        layout.n_placed(),
        pieces.len(),
        layout.n_sheets(),
        layout.total_utilization() * 100.0
    );

    Ok(layout)
}

fn run<P: Packer>(
    pieces: &[Piece],
    order: &[usize],
    config: &PackConfig,
    packer: P,
) -> LayoutResult {
    let mut allocator = SheetAllocator::new(*config, packer);
    for &i in order {
        allocator.place(&pieces[i]);
    }
    let SheetAllocator {
        sheets, unplaced, ..
    } = allocator;

    assemble(
        *config,
        sheets.into_iter().map(|(_, sheet)| sheet),
        &unplaced,
        pieces,
    )
}

fn validate_pieces(pieces: &[Piece]) -> Result<()> {
    let mut ids = HashSet::with_capacity(pieces.len());
    for piece in pieces {
        let valid_dim = |d: f64| d.is_finite() && d > 0.0;
        if !(valid_dim(piece.width) && valid_dim(piece.height)) {
            return Err(PackError::InvalidPiece {
                id: piece.id,
                width: piece.width,
                height: piece.height,
            });
        }
        if !ids.insert(piece.id) {
            return Err(PackError::DuplicatePieceId(piece.id));
        }
    }
    Ok(())
}

/// Layout of a single thickness group
#[derive(Clone, Debug, PartialEq)]
pub struct GroupLayout {
    pub thickness: f64,
    pub layout: LayoutResult,
}

pub fn pack_group(group: &ThicknessGroup, config: &PackConfig) -> Result<GroupLayout> {
    let layout = pack_pieces(&group.pieces, config)?;
    Ok(GroupLayout {
        thickness: group.thickness,
        layout,
    })
}

/// Packs every group as an independent run, in parallel. Layouts are returned in the order of `groups`.
pub fn pack_groups(groups: &[ThicknessGroup], config: &PackConfig) -> Result<Vec<GroupLayout>> {
    config.validate()?;
    groups
        .par_iter()
        .map(|group| pack_group(group, config))
        .collect()
}

/// Same as [`pack_groups`], on the calling thread
pub fn pack_groups_sequential(
    groups: &[ThicknessGroup],
    config: &PackConfig,
) -> Result<Vec<GroupLayout>> {
    config.validate()?;
    groups
        .iter()
        .map(|group| pack_group(group, config))
        .collect()
}
