use crate::entities::{PackConfig, Piece, Placement, Sheet, SheetKey};
use crate::packers::{Packer, fits_on_empty_sheet};
use crate::util::assertions;
use log::{debug, warn};
use slotmap::SlotMap;

/// Owns the sheets of a packing run and decides on which sheet every piece goes.
///
/// Sheets are tried oldest first. A new sheet is only opened when none of the open sheets
/// accepts the piece. Sheets are never closed or merged.
pub struct SheetAllocator<P: Packer> {
    pub config: PackConfig,
    pub packer: P,
    pub sheets: SlotMap<SheetKey, Sheet<P::FreeSpace>>,
    /// Pieces that do not fit on an empty sheet in any allowed orientation
    pub unplaced: Vec<Piece>,
}

impl<P: Packer> SheetAllocator<P> {
    pub fn new(config: PackConfig, packer: P) -> Self {
        Self {
            config,
            packer,
            sheets: SlotMap::with_key(),
            unplaced: vec![],
        }
    }

    /// Places `piece` on the first open sheet that accepts it, opening a new sheet if none does.
    /// Returns `None` if the piece is too large for the sheet and was recorded as unplaced.
    pub fn place(&mut self, piece: &Piece) -> Option<(SheetKey, Placement)> {
        if !fits_on_empty_sheet(piece, &self.config) {
            warn!(
                "[ALLOC] piece {} ({} x {}) exceeds the {} x {} sheet in every allowed orientation",
                piece.id,
                piece.width,
                piece.height,
                self.config.sheet_width,
                self.config.sheet_height
            );
            self.unplaced.push(*piece);
            return None;
        }

        for (skey, sheet) in self.sheets.iter_mut() {
            if let Some(placement) = self.packer.try_place(piece, sheet) {
                debug!(
                    "[ALLOC] placed piece {} on sheet {} at ({}, {}){}",
                    piece.id,
                    sheet.id,
                    placement.x,
                    placement.y,
                    if placement.rotated { ", rotated" } else { "" }
                );
                debug_assert!(self.packer.free_space_is_consistent(sheet));
                debug_assert!(assertions::sheet_is_feasible(sheet));
                return Some((skey, placement));
            }
        }

        let skey = self.open_sheet();
        let sheet = &mut self.sheets[skey];
        let placement = self
            .packer
            .try_place(piece, sheet)
            .expect("an empty sheet should accept every piece that passed the size check");

        debug!(
            "[ALLOC] opened sheet {} for piece {} at ({}, {})",
            sheet.id, piece.id, placement.x, placement.y
        );
        debug_assert!(self.packer.free_space_is_consistent(sheet));
        debug_assert!(assertions::sheet_is_feasible(sheet));

        Some((skey, placement))
    }

    /// True if any open sheet would accept `piece` right now, without modifying the sheets
    pub fn any_sheet_accepts(&self, piece: &Piece) -> bool {
        self.sheets
            .values()
            .any(|sheet| self.packer.find_position(sheet, piece).is_some())
    }

    pub fn n_sheets(&self) -> usize {
        self.sheets.len()
    }

    fn open_sheet(&mut self) -> SheetKey {
        let id = self.sheets.len();
        let sheet = self.packer.new_sheet(id, &self.config);
        self.sheets.insert(sheet)
    }
}
