use crate::entities::{PackConfig, Piece, Placement, Sheet};
use crate::geometry::primitives::Rect;
use std::fmt::Debug;

mod guillotine;
mod maxrects;
mod skyline;

#[doc(inline)]
pub use guillotine::GuillotinePacker;
#[doc(inline)]
pub use maxrects::{MaxRectsPacker, best_short_side_fit};
#[doc(inline)]
pub use skyline::SkylinePacker;

/// Contract shared by the packing strategies.
///
/// A packer owns no sheet state: it creates the free-space state of a new sheet
/// and decides where a piece goes on a given sheet.
pub trait Packer: Sync {
    /// Bookkeeping of the available space, owned by each [`Sheet`]
    type FreeSpace: Clone + Debug + Send;

    /// Free space of an empty sheet covering `region`
    fn init_free_space(&self, region: Rect) -> Self::FreeSpace;

    /// Best position for `piece` on the sheet, `None` if it does not fit
    fn find_position(&self, sheet: &Sheet<Self::FreeSpace>, piece: &Piece) -> Option<Candidate>;

    /// Removes the space claimed by `candidate` from the free space
    fn occupy(&self, free_space: &mut Self::FreeSpace, candidate: &Candidate, kerf: f64);

    /// True if the free space of the sheet is consistent with its placements
    fn free_space_is_consistent(&self, sheet: &Sheet<Self::FreeSpace>) -> bool;

    /// Opens an empty sheet
    fn new_sheet(&self, id: usize, config: &PackConfig) -> Sheet<Self::FreeSpace> {
        Sheet::new(id, config, self.init_free_space(config.packing_region()))
    }

    /// Places `piece` on `sheet` if it fits, returns the resulting [`Placement`].
    fn try_place(&self, piece: &Piece, sheet: &mut Sheet<Self::FreeSpace>) -> Option<Placement> {
        let candidate = self.find_position(sheet, piece)?;
        self.occupy(&mut sheet.free_space, &candidate, sheet.kerf);

        let placement = Placement {
            piece_id: piece.id,
            sheet_id: sheet.id,
            x: candidate.x,
            y: candidate.y,
            width: candidate.orientation.width,
            height: candidate.orientation.height,
            rotated: candidate.orientation.rotated,
        };
        sheet.placements.push(placement);
        Some(placement)
    }
}

/// Dimensions of a piece in one of its allowed orientations
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    pub width: f64,
    pub height: f64,
    pub rotated: bool,
}

impl Orientation {
    /// Width and height including the kerf
    pub fn inflated(&self, kerf: f64) -> (f64, f64) {
        (self.width + kerf, self.height + kerf)
    }
}

/// A position a packer selected for a piece
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub x: f64,
    pub y: f64,
    pub orientation: Orientation,
    /// Index of the free rectangle or skyline segment the position belongs to
    pub slot: usize,
}

impl Candidate {
    /// The area claimed by the piece, kerf included
    pub fn occupied(&self, kerf: f64) -> Rect {
        let (w, h) = self.orientation.inflated(kerf);
        Rect::from_origin(self.x, self.y, w, h)
    }
}

/// The orientations in which `piece` may be placed: upright first, then rotated
/// if rotation is allowed both globally and for the piece, and the piece is not square.
pub fn orientations(piece: &Piece, allow_rotation: bool) -> impl Iterator<Item = Orientation> {
    let upright = Orientation {
        width: piece.width,
        height: piece.height,
        rotated: false,
    };
    let rotated = (allow_rotation && piece.allow_rotation && !piece.is_square()).then_some(
        Orientation {
            width: piece.height,
            height: piece.width,
            rotated: true,
        },
    );
    std::iter::once(upright).chain(rotated)
}

/// True if `piece` fits on an empty sheet in at least one allowed orientation
pub fn fits_on_empty_sheet(piece: &Piece, config: &PackConfig) -> bool {
    let region = config.packing_region();
    orientations(piece, config.allow_rotation).any(|o| {
        let (w, h) = o.inflated(config.kerf);
        region.fits_at_origin(w, h)
    })
}
