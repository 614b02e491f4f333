use crate::entities::{PackConfig, Piece, Placement, Sheet};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Final outcome of a packing run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub config: PackConfig,
    /// Sheets in opening order
    pub sheets: Vec<SheetLayout>,
    /// Ids of the pieces that could not be placed, in packing order
    pub unplaced: Vec<usize>,
    /// Letter labels for the distinct piece sizes of the batch
    pub labels: LabelTable,
}

/// A sheet with its placements
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SheetLayout {
    /// Ordinal of the sheet within the run
    pub id: usize,
    pub width: f64,
    pub height: f64,
    /// Placements in insertion order
    pub placements: Vec<Placement>,
    /// Placed piece area divided by the sheet area
    pub utilization: f64,
}

impl SheetLayout {
    pub fn placed_area(&self) -> f64 {
        self.placements.iter().map(|p| p.area()).sum()
    }
}

impl LayoutResult {
    /// Result of a run without any pieces
    pub fn empty(config: PackConfig) -> Self {
        LayoutResult {
            config,
            sheets: vec![],
            unplaced: vec![],
            labels: LabelTable::default(),
        }
    }

    pub fn n_sheets(&self) -> usize {
        self.sheets.len()
    }

    pub fn n_placed(&self) -> usize {
        self.sheets.iter().map(|s| s.placements.len()).sum()
    }

    /// Placed piece area over the area of all opened sheets, 0 if no sheet was opened
    pub fn total_utilization(&self) -> f64 {
        let sheet_area = self.n_sheets() as f64 * self.config.sheet_area();
        match sheet_area > 0.0 {
            true => self.sheets.iter().map(|s| s.placed_area()).sum::<f64>() / sheet_area,
            false => 0.0,
        }
    }

    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.sheets.iter().flat_map(|s| s.placements.iter())
    }
}

/// Converts the sheets of a finished run into a [`LayoutResult`].
///
/// `pieces` is the batch in input order, it determines the order in which labels are handed out.
pub fn assemble<F>(
    config: PackConfig,
    sheets: impl IntoIterator<Item = Sheet<F>>,
    unplaced: &[Piece],
    pieces: &[Piece],
) -> LayoutResult {
    let mut sheets = sheets
        .into_iter()
        .map(|sheet| SheetLayout {
            id: sheet.id,
            width: sheet.width,
            height: sheet.height,
            utilization: sheet.utilization(),
            placements: sheet.placements,
        })
        .collect::<Vec<_>>();
    sheets.sort_by_key(|s| s.id);

    LayoutResult {
        config,
        sheets,
        unplaced: unplaced.iter().map(|p| p.id).collect(),
        labels: LabelTable::from_pieces(pieces),
    }
}

/// Letter label of one distinct piece size, with the number of pieces of that size
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelEntry {
    pub label: String,
    /// Shorter side
    pub width: f64,
    /// Longer side
    pub height: f64,
    pub quantity: usize,
}

/// Assignment of letter labels (A, B, C, ...) to the distinct piece sizes of a batch, in first-seen order.
///
/// Sizes are compared with the shorter side first, so a piece and its rotated twin share a label.
/// Labels are only used for reporting, packing never looks at them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelTable {
    entries: Vec<LabelEntry>,
}

impl LabelTable {
    pub fn from_pieces(pieces: &[Piece]) -> Self {
        let mut index: HashMap<(OrderedFloat<f64>, OrderedFloat<f64>), usize> = HashMap::new();
        let mut entries: Vec<LabelEntry> = vec![];

        for piece in pieces {
            let (w, h) = piece.normalized_dims();
            let key = (OrderedFloat(w), OrderedFloat(h));
            match index.get(&key) {
                Some(&i) => entries[i].quantity += 1,
                None => {
                    index.insert(key, entries.len());
                    entries.push(LabelEntry {
                        label: label_from_index(entries.len()),
                        width: w,
                        height: h,
                        quantity: 1,
                    });
                }
            }
        }
        LabelTable { entries }
    }

    pub fn entries(&self) -> &[LabelEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Label of a `width` x `height` piece, in either orientation
    pub fn label_of(&self, width: f64, height: f64) -> Option<&str> {
        let (w, h) = (f64::min(width, height), f64::max(width, height));
        self.entries
            .iter()
            .find(|e| e.width == w && e.height == h)
            .map(|e| e.label.as_str())
    }
}

/// Spreadsheet-style column label: 0 -> A, 25 -> Z, 26 -> AA, 27 -> AB, ...
pub fn label_from_index(index: usize) -> String {
    let mut letters = vec![];
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}
