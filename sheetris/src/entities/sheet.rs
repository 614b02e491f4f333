use crate::entities::{PackConfig, Placement};
use slotmap::new_key_type;

new_key_type! {
    /// Unique key for each [`Sheet`] opened during a packing run
    pub struct SheetKey;
}

/// A sheet opened during a packing run.
///
/// The sheet owns its free-space state `F` by value, it is never shared with another sheet.
#[derive(Clone, Debug)]
pub struct Sheet<F> {
    /// Ordinal of the sheet within its run, in opening order
    pub id: usize,
    pub width: f64,
    pub height: f64,
    pub kerf: f64,
    /// Accepted placements, in insertion order
    pub placements: Vec<Placement>,
    /// Algorithm specific bookkeeping of the remaining space
    pub free_space: F,
}

impl<F> Sheet<F> {
    pub fn new(id: usize, config: &PackConfig, free_space: F) -> Self {
        Sheet {
            id,
            width: config.sheet_width,
            height: config.sheet_height,
            kerf: config.kerf,
            placements: vec![],
            free_space,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Sum of the areas of the pieces placed on this sheet
    pub fn placed_area(&self) -> f64 {
        self.placements.iter().map(|p| p.area()).sum()
    }

    pub fn utilization(&self) -> f64 {
        self.placed_area() / self.area()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}
