use crate::geometry::primitives::Rect;
use serde::{Deserialize, Serialize};

/// A piece fixed at a position on a sheet. Created once by a packer, never modified afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub piece_id: usize,
    /// Ordinal of the sheet the piece was placed on
    pub sheet_id: usize,
    /// Bottom-left corner of the piece
    pub x: f64,
    pub y: f64,
    /// Width after rotation
    pub width: f64,
    /// Height after rotation
    pub height: f64,
    pub rotated: bool,
}

impl Placement {
    /// The area covered by the piece itself
    pub fn bbox(&self) -> Rect {
        Rect::from_origin(self.x, self.y, self.width, self.height)
    }

    /// The area claimed by the piece, including the kerf on its right and top side
    pub fn occupied(&self, kerf: f64) -> Rect {
        Rect::from_origin(self.x, self.y, self.width + kerf, self.height + kerf)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
