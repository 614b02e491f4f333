#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::str::FromStr;

    use clap::Parser;
    use test_case::test_case;

    use sheetris::entities::Algorithm;
    use sheetris::io::export::export;
    use sheetris::io::import::import;
    use sheetris::packing::pack_groups;
    use sheetris_cli::config::SheetrisConfig;
    use sheetris_cli::io;
    use sheetris_cli::io::cli::Cli;
    use sheetris_cli::io::layout_to_svg::sheet_to_svg;
    use sheetris_cli::io::svg_util::{Color, SvgDrawOptions};

    const CABINET: &str = "../assets/cabinet.json";

    #[test_case(Algorithm::MaxRects; "maxrects")]
    #[test_case(Algorithm::Guillotine; "guillotine")]
    #[test_case(Algorithm::Skyline; "skyline")]
    fn cabinet_instance(algorithm: Algorithm) {
        let ext_instance = io::read_json_instance(Path::new(CABINET)).unwrap();
        let groups = import(&ext_instance).unwrap();
        assert_eq!(
            groups.iter().map(|g| g.thickness).collect::<Vec<_>>(),
            vec![12.0, 18.0]
        );

        let mut config = SheetrisConfig::default();
        config.pack_config.algorithm = algorithm;
        let layouts = pack_groups(&groups, &config.pack_config).unwrap();

        // the two 3000 mm strips do not fit any sheet
        let thin = export(&layouts[0]);
        assert_eq!(thin.unplaced.len(), 2);
        let thick = export(&layouts[1]);
        assert!(thick.unplaced.is_empty());

        let n_placed: usize = layouts.iter().map(|g| g.layout.n_placed()).sum();
        assert_eq!(n_placed + 2, ext_instance.pieces.len());

        for group_layout in &layouts {
            let layout = &group_layout.layout;
            for sheet in &layout.sheets {
                let svg = sheet_to_svg(
                    sheet,
                    &layout.labels,
                    layout.config.kerf,
                    config.svg_draw_options,
                    "test",
                )
                .to_string();
                assert!(svg.contains(&format!("sheet_{}", sheet.id)));
                assert_eq!(svg.matches("piece, id:").count(), sheet.placements.len());
            }
        }
    }

    #[test]
    fn config_file_defaults() {
        let json = r#"{
            "pack_config": {
                "sheet_width": 1000.0,
                "sheet_height": 500.0,
                "kerf": 2.0,
                "algorithm": "Skyline",
                "allow_rotation": false
            }
        }"#;
        let config: SheetrisConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.pack_config.algorithm, Algorithm::Skyline);
        assert!(config.parallel_groups);
        assert_eq!(config.svg_draw_options, SvgDrawOptions::default());
    }

    #[test]
    fn config_file_in_assets() {
        let file = std::fs::File::open("../assets/config.json").unwrap();
        let config: SheetrisConfig = serde_json::from_reader(file).unwrap();
        assert_eq!(config.pack_config, SheetrisConfig::default().pack_config);
        assert!(config.svg_draw_options.kerf);
    }

    #[test]
    fn command_line_overrides() {
        let args = Cli::parse_from([
            "sheetris",
            "-i",
            "job.json",
            "-s",
            "out",
            "--algorithm",
            "guillotine",
            "--kerf",
            "4.5",
            "--no-rotation",
        ]);
        let config = SheetrisConfig::default().with_overrides(&args);
        assert_eq!(config.pack_config.algorithm, Algorithm::Guillotine);
        assert_eq!(config.pack_config.kerf, 4.5);
        assert!(!config.pack_config.allow_rotation);

        let args = Cli::parse_from(["sheetris", "-i", "job.json", "-s", "out"]);
        let config = SheetrisConfig::default().with_overrides(&args);
        assert_eq!(config, SheetrisConfig::default());
    }

    #[test_case("#CC824A", Some(Color(0xCC, 0x82, 0x4A)))]
    #[test_case("ffc879", Some(Color(0xFF, 0xC8, 0x79)))]
    #[test_case("#12345", None)]
    #[test_case("#GG0000", None)]
    fn parse_color(s: &str, expected: Option<Color>) {
        assert_eq!(Color::from_str(s).ok(), expected);
    }
}
