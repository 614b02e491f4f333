use crate::entities::{Piece, Sheet};
use crate::free_space::FreeRects;
use crate::geometry::primitives::Rect;
use crate::packers::{Candidate, Packer, best_short_side_fit};
use crate::util::assertions;

/// Guillotine packer.
///
/// Positions are ranked like [`MaxRectsPacker`](crate::packers::MaxRectsPacker), but the chosen
/// free rectangle is split by one straight cut into two disjoint parts. Free rectangles are
/// never merged again, every layout it produces can be cut with edge-to-edge saw cuts.
#[derive(Clone, Copy, Debug)]
pub struct GuillotinePacker {
    pub allow_rotation: bool,
}

impl GuillotinePacker {
    pub fn new(allow_rotation: bool) -> Self {
        Self { allow_rotation }
    }
}

impl Packer for GuillotinePacker {
    type FreeSpace = FreeRects;

    fn init_free_space(&self, region: Rect) -> FreeRects {
        FreeRects::new(region)
    }

    fn find_position(&self, sheet: &Sheet<FreeRects>, piece: &Piece) -> Option<Candidate> {
        best_short_side_fit(
            sheet.free_space.rects(),
            piece,
            sheet.kerf,
            self.allow_rotation,
        )
    }

    fn occupy(&self, free_space: &mut FreeRects, candidate: &Candidate, kerf: f64) {
        free_space.guillotine_split(candidate.slot, candidate.occupied(kerf));
    }

    fn free_space_is_consistent(&self, sheet: &Sheet<FreeRects>) -> bool {
        assertions::free_rects_match_sheet(sheet)
            && assertions::free_rects_are_disjoint(&sheet.free_space)
            && assertions::free_rects_tile_sheet(sheet)
    }
}
