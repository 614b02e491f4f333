use crate::entities::Placement;
use crate::io::ext_repr::{
    ExtGroupLayout, ExtLabel, ExtLayoutStats, ExtPlacement, ExtSheetLayout,
};
use crate::packing::{GroupLayout, LabelTable, SheetLayout};
use itertools::Itertools;

/// Exports a [`GroupLayout`], every placement carries the label of its size.
pub fn export(group_layout: &GroupLayout) -> ExtGroupLayout {
    let layout = &group_layout.layout;
    let labels = &layout.labels;

    ExtGroupLayout {
        thickness: group_layout.thickness,
        sheets: layout
            .sheets
            .iter()
            .map(|s| export_sheet(s, labels))
            .collect_vec(),
        unplaced: layout.unplaced.clone(),
        cut_list: export_cut_list(labels),
        statistics: ExtLayoutStats {
            n_sheets: layout.n_sheets(),
            n_placed: layout.n_placed(),
            n_unplaced: layout.unplaced.len(),
            utilization: layout.total_utilization(),
        },
    }
}

pub fn export_sheet(sheet: &SheetLayout, labels: &LabelTable) -> ExtSheetLayout {
    ExtSheetLayout {
        index: sheet.id,
        width: sheet.width,
        height: sheet.height,
        placements: sheet
            .placements
            .iter()
            .map(|p| export_placement(p, labels))
            .collect_vec(),
        utilization: sheet.utilization,
    }
}

fn export_placement(placement: &Placement, labels: &LabelTable) -> ExtPlacement {
    ExtPlacement {
        piece_id: placement.piece_id,
        label: labels
            .label_of(placement.width, placement.height)
            .unwrap_or_default()
            .to_string(),
        x: placement.x,
        y: placement.y,
        width: placement.width,
        height: placement.height,
        rotated: placement.rotated,
    }
}

pub fn export_cut_list(labels: &LabelTable) -> Vec<ExtLabel> {
    labels
        .entries()
        .iter()
        .map(|e| ExtLabel {
            label: e.label.clone(),
            width: e.width,
            height: e.height,
            quantity: e.quantity,
        })
        .collect_vec()
}
