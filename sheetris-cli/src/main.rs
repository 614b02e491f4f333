use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use itertools::Itertools;
use log::{info, warn};
use sheetris::io::export::export;
use sheetris::io::import::import;
use sheetris::packing::{GroupLayout, pack_groups, pack_groups_sequential};
use sheetris_cli::config::SheetrisConfig;
use sheetris_cli::io::cli::Cli;
use sheetris_cli::io::layout_to_svg::sheet_to_svg;
use sheetris_cli::io::output::SheetrisOutput;
use sheetris_cli::{EPOCH, io};
use thousands::Separable;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            SheetrisConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };
    let config = config.with_overrides(&args);

    info!("[MAIN] Successfully parsed SheetrisConfig: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = io::read_json_instance(&args.input_file)?;
    let groups = import(&ext_instance)?;

    info!(
        "[MAIN] {}: {} pieces in {} thickness group(s), algorithm: {}",
        ext_instance.name,
        ext_instance.pieces.len(),
        groups.len(),
        config.pack_config.algorithm
    );

    let start = EPOCH.elapsed();
    let layouts = match config.parallel_groups {
        true => pack_groups(&groups, &config.pack_config)?,
        false => pack_groups_sequential(&groups, &config.pack_config)?,
    };
    let run_time = EPOCH.elapsed() - start;

    for group_layout in &layouts {
        log_group_summary(group_layout);
    }

    {
        let output = SheetrisOutput {
            instance: ext_instance,
            layouts: layouts.iter().map(export).collect_vec(),
            config,
            run_time_ms: run_time.as_millis() as u64,
        };
        let solution_path = args.solution_folder.join(format!("sol_{input_stem}.json"));
        io::write_json(&output, Path::new(&solution_path))?;
    }

    for group_layout in &layouts {
        let layout = &group_layout.layout;
        for sheet in &layout.sheets {
            let svg_path = args.solution_folder.join(format!(
                "sol_{input_stem}_{}_{}.svg",
                group_layout.thickness, sheet.id
            ));
            let title = format!("thickness: {}", group_layout.thickness);
            let svg = sheet_to_svg(
                sheet,
                &layout.labels,
                layout.config.kerf,
                config.svg_draw_options,
                &title,
            );
            io::write_svg(&svg, Path::new(&svg_path))?;
        }
    }

    Ok(())
}

fn log_group_summary(group_layout: &GroupLayout) {
    let layout = &group_layout.layout;
    let placed_area = layout
        .sheets
        .iter()
        .map(|s| s.placed_area())
        .sum::<f64>()
        .round() as u64;

    info!(
        "[MAIN] thickness {}: {} sheet(s), {} pieces placed, area: {}, utilization: {:.3}%",
        group_layout.thickness,
        layout.n_sheets(),
        layout.n_placed(),
        placed_area.separate_with_commas(),
        layout.total_utilization() * 100.0
    );
    for entry in layout.labels.entries() {
        info!(
            "[MAIN]   {} | {} x {} | {}",
            entry.label, entry.width, entry.height, entry.quantity
        );
    }
    if !layout.unplaced.is_empty() {
        warn!(
            "[MAIN] thickness {}: {} piece(s) do not fit on the sheet: {:?}",
            group_layout.thickness,
            layout.unplaced.len(),
            layout.unplaced
        );
    }
}
