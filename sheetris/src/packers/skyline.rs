use crate::entities::{Piece, Sheet};
use crate::free_space::Skyline;
use crate::geometry::primitives::Rect;
use crate::packers::{Candidate, Packer, orientations};
use crate::util::assertions;
use ordered_float::OrderedFloat;

/// Skyline packer with the bottom-left policy.
///
/// Pieces rest on the top profile of the sheet. The position with the lowest resulting top wins,
/// then the leftmost one, then the one trapping the least area below the piece.
#[derive(Clone, Copy, Debug)]
pub struct SkylinePacker {
    pub allow_rotation: bool,
}

impl SkylinePacker {
    pub fn new(allow_rotation: bool) -> Self {
        Self { allow_rotation }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct BottomLeft {
    top: OrderedFloat<f64>,
    x: OrderedFloat<f64>,
    waste: OrderedFloat<f64>,
}

impl Packer for SkylinePacker {
    type FreeSpace = Skyline;

    fn init_free_space(&self, region: Rect) -> Skyline {
        Skyline::new(region)
    }

    fn find_position(&self, sheet: &Sheet<Skyline>, piece: &Piece) -> Option<Candidate> {
        let skyline = &sheet.free_space;
        (0..skyline.n_segments())
            .flat_map(|slot| {
                orientations(piece, self.allow_rotation).filter_map(move |orientation| {
                    let (w, h) = orientation.inflated(sheet.kerf);
                    let fit = skyline.fit(slot, w, h)?;
                    let score = BottomLeft {
                        top: OrderedFloat(fit.y + h),
                        x: OrderedFloat(fit.x),
                        waste: OrderedFloat(fit.waste),
                    };
                    let candidate = Candidate {
                        x: fit.x,
                        y: fit.y,
                        orientation,
                        slot,
                    };
                    Some((score, candidate))
                })
            })
            .min_by_key(|(score, _)| *score)
            .map(|(_, candidate)| candidate)
    }

    fn occupy(&self, free_space: &mut Skyline, candidate: &Candidate, kerf: f64) {
        let (w, h) = candidate.orientation.inflated(kerf);
        free_space.raise(candidate.slot, w, candidate.y + h);
    }

    fn free_space_is_consistent(&self, sheet: &Sheet<Skyline>) -> bool {
        sheet.free_space.is_contiguous() && assertions::skyline_covers_placements(sheet)
    }
}
