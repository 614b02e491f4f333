use crate::entities::{Piece, Sheet};
use crate::free_space::FreeRects;
use crate::geometry::primitives::Rect;
use crate::packers::{Candidate, Packer, orientations};
use crate::util::assertions;
use ordered_float::OrderedFloat;

/// MaxRects packer with the best short side fit heuristic.
///
/// Keeps the set of all maximal free rectangles of a sheet. Placing a piece carves it out of
/// every free rectangle it overlaps, after which enclosed rectangles are pruned.
#[derive(Clone, Copy, Debug)]
pub struct MaxRectsPacker {
    pub allow_rotation: bool,
}

impl MaxRectsPacker {
    pub fn new(allow_rotation: bool) -> Self {
        Self { allow_rotation }
    }
}

impl Packer for MaxRectsPacker {
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
        free_space.carve(candidate.occupied(kerf));
    }

    fn free_space_is_consistent(&self, sheet: &Sheet<FreeRects>) -> bool {
        assertions::free_rects_match_sheet(sheet)
            && assertions::free_rects_are_maximal(&sheet.free_space)
    }
}

/// Ranking of a (free rectangle, orientation) pair, lower is better.
/// Field order defines the comparison: shorter leftover, longer leftover, then lowest y and x.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct ShortSideFit {
    short_leftover: OrderedFloat<f64>,
    long_leftover: OrderedFloat<f64>,
    y: OrderedFloat<f64>,
    x: OrderedFloat<f64>,
}

/// Selects the best (free rectangle, orientation) pair using best short side fit.
///
/// Candidates with identical scores are resolved by the order in which they are visited
/// (free rectangle order, upright before rotated), which makes the selection a total order.
pub fn best_short_side_fit(
    free_rects: &[Rect],
    piece: &Piece,
    kerf: f64,
    allow_rotation: bool,
) -> Option<Candidate> {
    free_rects
        .iter()
        .enumerate()
        .flat_map(|(slot, fr)| {
            orientations(piece, allow_rotation).filter_map(move |orientation| {
                let (w, h) = orientation.inflated(kerf);
                if !fr.fits_at_origin(w, h) {
                    return None;
                }
                let leftover_x = fr.width() - w;
                let leftover_y = fr.height() - h;
                let score = ShortSideFit {
                    short_leftover: OrderedFloat(f64::min(leftover_x, leftover_y)),
                    long_leftover: OrderedFloat(f64::max(leftover_x, leftover_y)),
                    y: OrderedFloat(fr.y_min),
                    x: OrderedFloat(fr.x_min),
                };
                let candidate = Candidate {
                    x: fr.x_min,
                    y: fr.y_min,
                    orientation,
                    slot,
                };
                Some((score, candidate))
            })
        })
        .min_by_key(|(score, _)| *score)
        .map(|(_, candidate)| candidate)
}
