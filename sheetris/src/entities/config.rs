use crate::error::{PackError, Result};
use crate::geometry::primitives::Rect;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Strategy used to pick positions on a sheet
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Maximal free rectangles, best short side fit. Densest, most bookkeeping.
    #[default]
    MaxRects,
    /// Free rectangles split by a single straight cut per placement.
    Guillotine,
    /// Bottom-left placement on the top profile of the sheet.
    Skyline,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::MaxRects,
        Algorithm::Guillotine,
        Algorithm::Skyline,
    ];
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Algorithm::MaxRects => "MaxRects",
            Algorithm::Guillotine => "Guillotine",
            Algorithm::Skyline => "Skyline",
        };
        write!(f, "{name}")
    }
}

/// Configuration shared by all sheets of a packing run
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PackConfig {
    /// Width of every sheet, kerf excluded
    pub sheet_width: f64,
    /// Height of every sheet, kerf excluded
    pub sheet_height: f64,
    /// Spacing kept between any two pieces (width of the saw blade)
    pub kerf: f64,
    pub algorithm: Algorithm,
    /// Global switch for 90 degree rotations, combined with the flag of each piece
    pub allow_rotation: bool,
}

impl PackConfig {
    /// Ensures the configuration describes a usable sheet.
    pub fn validate(&self) -> Result<()> {
        if !(self.sheet_width.is_finite() && self.sheet_width > 0.0) {
            return Err(PackError::InvalidConfiguration(format!(
                "sheet width must be positive, got {}",
                self.sheet_width
            )));
        }
        if !(self.sheet_height.is_finite() && self.sheet_height > 0.0) {
            return Err(PackError::InvalidConfiguration(format!(
                "sheet height must be positive, got {}",
                self.sheet_height
            )));
        }
        if !(self.kerf.is_finite() && self.kerf >= 0.0) {
            return Err(PackError::InvalidConfiguration(format!(
                "kerf must be non-negative, got {}",
                self.kerf
            )));
        }
        Ok(())
    }

    /// The region in which kerf-inflated pieces are packed.
    ///
    /// Every piece claims `width + kerf` by `height + kerf`. Extending the sheet by one kerf
    /// on its right and top side keeps pieces at least one kerf apart from each other
    /// while they can still touch the sheet border.
    pub fn packing_region(&self) -> Rect {
        Rect::from_origin(
            0.0,
            0.0,
            self.sheet_width + self.kerf,
            self.sheet_height + self.kerf,
        )
    }

    pub fn sheet_area(&self) -> f64 {
        self.sheet_width * self.sheet_height
    }
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            sheet_width: 2440.0,
            sheet_height: 1220.0,
            kerf: 3.0,
            algorithm: Algorithm::MaxRects,
            allow_rotation: true,
        }
    }
}
