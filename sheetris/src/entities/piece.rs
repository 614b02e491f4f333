use serde::{Deserialize, Serialize};

/// Rectangular part to be cut from a sheet.
/// Dimensions are raw: the kerf is only added when computing occupancy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub id: usize,
    pub width: f64,
    pub height: f64,
    /// Material thickness tag, all pieces of one packing run share it
    pub thickness: f64,
    /// Whether the piece may be turned by 90 degrees
    pub allow_rotation: bool,
}

impl Piece {
    pub fn new(id: usize, width: f64, height: f64, thickness: f64, allow_rotation: bool) -> Self {
        Piece {
            id,
            width,
            height,
            thickness,
            allow_rotation,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn longer_side(&self) -> f64 {
        f64::max(self.width, self.height)
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Dimensions with the shorter side first, identical for a piece and its rotated twin.
    pub fn normalized_dims(&self) -> (f64, f64) {
        (
            f64::min(self.width, self.height),
            f64::max(self.width, self.height),
        )
    }
}
