use crate::entities::{Piece, Placement, Sheet};
use crate::free_space::{FreeRects, Skyline};
use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Rect;
use crate::packing::LayoutResult;
use crate::util::FPA;
use itertools::Itertools;
use log::error;
use std::collections::HashMap;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks and in the test suites

/// No two pieces on the sheet come closer than the kerf, and all of them lie within the sheet
pub fn sheet_is_feasible<F>(sheet: &Sheet<F>) -> bool {
    placements_within_sheet(&sheet.placements, sheet.width, sheet.height)
        && placements_do_not_overlap(&sheet.placements, sheet.kerf)
}

pub fn placements_within_sheet(placements: &[Placement], width: f64, height: f64) -> bool {
    placements.iter().all(|p| {
        let within = p.x >= 0.0
            && p.y >= 0.0
            && FPA(p.x + p.width) <= FPA(width)
            && FPA(p.y + p.height) <= FPA(height);
        if !within {
            error!("piece {} exceeds the sheet: {p:?}", p.piece_id);
        }
        within
    })
}

/// Pairwise check of the kerf-inflated bounding boxes
pub fn placements_do_not_overlap(placements: &[Placement], kerf: f64) -> bool {
    placements.iter().tuple_combinations().all(|(a, b)| {
        match Rect::intersection(a.occupied(kerf), b.occupied(kerf)) {
            Some(overlap) => {
                error!(
                    "pieces {} and {} overlap over an area of {}: {a:?} and {b:?}",
                    a.piece_id,
                    b.piece_id,
                    overlap.area()
                );
                false
            }
            None => true,
        }
    })
}

/// Every free rectangle lies within the packing region and is untouched by the placed pieces
pub fn free_rects_match_sheet(sheet: &Sheet<FreeRects>) -> bool {
    let region = Rect::from_origin(0.0, 0.0, sheet.width + sheet.kerf, sheet.height + sheet.kerf);
    sheet.free_space.rects().iter().all(|fr| {
        let inside = !fr.is_degenerate() && fr.relation_to(region) == GeoRelation::Enclosed;
        let occupied = sheet
            .placements
            .iter()
            .find(|p| p.occupied(sheet.kerf).collides_with(fr));
        if let Some(p) = occupied {
            error!("free rectangle {fr:?} overlaps piece {}", p.piece_id);
        }
        inside && occupied.is_none()
    })
}

/// No free rectangle is enclosed by another one
pub fn free_rects_are_maximal(free_rects: &FreeRects) -> bool {
    let rects = free_rects.rects();
    (0..rects.len()).all(|i| {
        (0..rects.len())
            .filter(|&j| j != i)
            .all(|j| rects[i].relation_to(rects[j]) != GeoRelation::Enclosed)
    })
}

pub fn free_rects_are_disjoint(free_rects: &FreeRects) -> bool {
    free_rects
        .rects()
        .iter()
        .tuple_combinations()
        .all(|(a, b)| !a.collides_with(b))
}

/// The free rectangles and the kerf-inflated pieces together cover exactly the packing region.
/// Only holds for disjoint free rectangles.
pub fn free_rects_tile_sheet(sheet: &Sheet<FreeRects>) -> bool {
    let region_area = (sheet.width + sheet.kerf) * (sheet.height + sheet.kerf);
    let occupied_area: f64 = sheet
        .placements
        .iter()
        .map(|p| p.occupied(sheet.kerf).area())
        .sum();
    let free_area = sheet.free_space.summed_area();

    float_cmp::approx_eq!(
        f64,
        region_area,
        occupied_area + free_area,
        epsilon = 1e-6 * region_area
    )
}

/// The skyline lies on or above every placed piece
pub fn skyline_covers_placements(sheet: &Sheet<Skyline>) -> bool {
    sheet.placements.iter().all(|p| {
        let occupied = p.occupied(sheet.kerf);
        match sheet
            .free_space
            .min_height_over(occupied.x_min, occupied.x_max)
        {
            Some(y) => FPA(y) >= FPA(occupied.y_max),
            None => false,
        }
    })
}

/// Every piece appears exactly once: either in a placement or as unplaced.
/// Placements never rotate a piece that forbids it.
pub fn layout_accounts_for_pieces(layout: &LayoutResult, pieces: &[Piece]) -> bool {
    let mut seen: HashMap<usize, usize> = HashMap::new();
    let placements = layout.sheets.iter().flat_map(|s| s.placements.iter());
    for p in placements {
        *seen.entry(p.piece_id).or_default() += 1;
    }
    for id in layout.unplaced.iter() {
        *seen.entry(*id).or_default() += 1;
    }

    let pieces_by_id: HashMap<usize, &Piece> = pieces.iter().map(|p| (p.id, p)).collect();

    let rotations_respected = layout
        .sheets
        .iter()
        .flat_map(|s| s.placements.iter())
        .all(|pl| match pieces_by_id.get(&pl.piece_id) {
            Some(piece) => !pl.rotated || piece.allow_rotation,
            None => false,
        });

    seen.len() == pieces.len()
        && pieces.iter().all(|p| seen.get(&p.id) == Some(&1))
        && rotations_respected
}
