use crate::io::svg_util;
use crate::io::svg_util::SvgDrawOptions;
use sheetris::entities::Placement;
use sheetris::packing::{LabelTable, SheetLayout};
use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

/// Draws a single sheet with its placed pieces.
///
/// The layout has its origin at the bottom left of the sheet, the y-axis is flipped for SVG.
pub fn sheet_to_svg(
    sheet: &SheetLayout,
    labels: &LabelTable,
    kerf: f64,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let theme = &options.theme;
    let (width, height) = (sheet.width, sheet.height);
    let min_dim = f64::min(width, height);

    let margin = 0.05 * min_dim;
    let font_size = 0.025 * min_dim;
    let stroke_width = min_dim * 0.001 * theme.stroke_width_multiplier;

    let caption = {
        //print some information above the left top of the sheet
        let content = format!(
            "sheet: {} | width: {:.1} | height: {:.1} | pieces: {} | utilization: {:.3}% | {}",
            sheet.id,
            width,
            height,
            sheet.placements.len(),
            sheet.utilization * 100.0,
            title,
        );
        Text::new(content)
            .set("x", 0.0)
            .set("y", -0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let sheet_group = Group::new()
        .set("id", format!("sheet_{}", sheet.id))
        .add(
            Rectangle::new()
                .set("x", 0.0)
                .set("y", 0.0)
                .set("width", width)
                .set("height", height)
                .set("fill", theme.sheet_fill.to_string())
                .set("stroke", "black")
                .set("stroke-width", 2.0 * stroke_width),
        )
        .add(Title::new(format!(
            "sheet, id: {}, width: {width:.3}, height: {height:.3}",
            sheet.id
        )));

    let pieces_group = sheet
        .placements
        .iter()
        .fold(Group::new().set("id", "pieces"), |group, placement| {
            let label = labels.label_of(placement.width, placement.height);
            group.add(piece_group(
                placement,
                label,
                height,
                kerf,
                stroke_width,
                options,
            ))
        });

    let vbox = (
        -margin,
        -margin - 2.0 * font_size,
        width + 2.0 * margin,
        height + 2.0 * margin + 2.0 * font_size,
    );

    Document::new()
        .set("viewBox", vbox)
        .add(sheet_group)
        .add(pieces_group)
        .add(caption)
}

fn piece_group(
    placement: &Placement,
    label: Option<&str>,
    sheet_height: f64,
    kerf: f64,
    stroke_width: f64,
    options: SvgDrawOptions,
) -> Group {
    let theme = &options.theme;
    let (w, h) = (placement.width, placement.height);
    let (x, y) = (placement.x, flip_y(placement.y + h, sheet_height));

    let fill = match placement.rotated {
        true => theme.rotated_piece_fill,
        false => theme.piece_fill,
    };

    let mut group = Group::new()
        .set("id", format!("piece_{}", placement.piece_id))
        .add(Title::new(format!(
            "piece, id: {}, label: {}, size: {w:.3} x {h:.3}, at: ({:.3}, {:.3}){}",
            placement.piece_id,
            label.unwrap_or("-"),
            placement.x,
            placement.y,
            if placement.rotated { ", rotated" } else { "" }
        )))
        .add(
            Rectangle::new()
                .set("x", x)
                .set("y", y)
                .set("width", w)
                .set("height", h)
                .set("fill", fill.to_string())
                .set("stroke", svg_util::change_brightness(fill, 0.5).to_string())
                .set("stroke-width", stroke_width)
                .set("opacity", "0.9"),
        );

    if options.kerf && kerf > 0.0 {
        //the kerf claimed by the piece, on its right and top side
        group = group.add(
            Rectangle::new()
                .set("x", x)
                .set("y", y - kerf)
                .set("width", w + kerf)
                .set("height", h + kerf)
                .set("fill", "none")
                .set("stroke", "black")
                .set("stroke-width", 0.5 * stroke_width)
                .set("stroke-opacity", "0.5")
                .set(
                    "stroke-dasharray",
                    format!("{} {}", stroke_width, 2.0 * stroke_width),
                ),
        );
    }

    if let (true, Some(label)) = (options.labels, label) {
        // fit the label inside the piece
        let n_chars = label.chars().count() as f64;
        let font_size = f64::min(0.5 * h, w / (0.7 * n_chars + 0.3));
        let centre = placement.bbox().centroid();
        group = group.add(
            Text::new(label)
                .set("x", centre.x())
                .set("y", flip_y(centre.y(), sheet_height))
                .set("font-size", font_size)
                .set("font-family", "monospace")
                .set("text-anchor", "middle")
                .set("dominant-baseline", "central")
                .set("fill", theme.label_color.to_string()),
        );
    }

    group
}

/// Converts a y-coordinate with the origin at the bottom of the sheet to one with the origin at the top
fn flip_y(y: f64, sheet_height: f64) -> f64 {
    sheet_height - y
}
