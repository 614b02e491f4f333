use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use sheetris::entities::Algorithm;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    /// Overrides the algorithm of the config
    #[arg(short, long, value_enum)]
    pub algorithm: Option<AlgorithmArg>,
    /// Overrides the kerf of the config
    #[arg(short, long)]
    pub kerf: Option<f64>,
    /// Disallows rotation of every piece
    #[arg(long)]
    pub no_rotation: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlgorithmArg {
    #[value(name = "maxrects")]
    MaxRects,
    #[value(name = "guillotine")]
    Guillotine,
    #[value(name = "skyline")]
    Skyline,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::MaxRects => Algorithm::MaxRects,
            AlgorithmArg::Guillotine => Algorithm::Guillotine,
            AlgorithmArg::Skyline => Algorithm::Skyline,
        }
    }
}
