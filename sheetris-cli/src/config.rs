use serde::{Deserialize, Serialize};
use sheetris::entities::PackConfig;

use crate::io::cli::Cli;
use crate::io::svg_util::SvgDrawOptions;

/// Configuration of the sheetris command line tool
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SheetrisConfig {
    /// Sheet size, kerf, algorithm and rotation
    pub pack_config: PackConfig,
    /// Pack the thickness groups in parallel, one task per group
    #[serde(default = "default_parallel_groups")]
    pub parallel_groups: bool,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

fn default_parallel_groups() -> bool {
    true
}

impl SheetrisConfig {
    /// Applies the overrides given on the command line
    pub fn with_overrides(mut self, args: &Cli) -> Self {
        if let Some(algorithm) = args.algorithm {
            self.pack_config.algorithm = algorithm.into();
        }
        if let Some(kerf) = args.kerf {
            self.pack_config.kerf = kerf;
        }
        if args.no_rotation {
            self.pack_config.allow_rotation = false;
        }
        self
    }
}

impl Default for SheetrisConfig {
    fn default() -> Self {
        Self {
            pack_config: PackConfig::default(),
            parallel_groups: true,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
