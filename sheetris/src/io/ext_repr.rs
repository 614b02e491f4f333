use serde::{Deserialize, Serialize};

/// External representation of a packing job: a named list of pieces of mixed thickness.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the job
    pub name: String,
    pub pieces: Vec<ExtPiece>,
}

/// External representation of a [`Piece`](crate::entities::Piece).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPiece {
    /// Unique identifier of the piece
    pub id: usize,
    pub width: f64,
    pub height: f64,
    /// Material thickness, pieces are grouped by it
    pub thickness: f64,
    /// Whether the piece may be turned by 90 degrees. Allowed if not specified.
    #[serde(default = "default_allow_rotation")]
    pub allow_rotation: bool,
}

fn default_allow_rotation() -> bool {
    true
}

/// External representation of the layout of one thickness group
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtGroupLayout {
    pub thickness: f64,
    pub sheets: Vec<ExtSheetLayout>,
    /// Ids of the pieces which could not be placed
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub unplaced: Vec<usize>,
    /// The cut list: one entry per distinct piece size
    pub cut_list: Vec<ExtLabel>,
    pub statistics: ExtLayoutStats,
}

/// External representation of a [`SheetLayout`](crate::packing::SheetLayout).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSheetLayout {
    /// Index of the sheet within its group
    pub index: usize,
    pub width: f64,
    pub height: f64,
    pub placements: Vec<ExtPlacement>,
    pub utilization: f64,
}

/// External representation of a [`Placement`](crate::entities::Placement).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacement {
    pub piece_id: usize,
    /// Label of the size of the piece in the cut list
    pub label: String,
    /// Bottom-left corner of the placed piece
    pub x: f64,
    pub y: f64,
    /// Dimensions after rotation
    pub width: f64,
    pub height: f64,
    pub rotated: bool,
}

/// One line of the cut list
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtLabel {
    pub label: String,
    pub width: f64,
    pub height: f64,
    pub quantity: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtLayoutStats {
    pub n_sheets: usize,
    pub n_placed: usize,
    pub n_unplaced: usize,
    /// Placed area over the area of all sheets of the group
    pub utilization: f64,
}
