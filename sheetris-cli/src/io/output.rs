use crate::config::SheetrisConfig;
use serde::{Deserialize, Serialize};
use sheetris::io::ext_repr::{ExtGroupLayout, ExtInstance};

/// Content of the solution file
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SheetrisOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    /// One layout per thickness group, by ascending thickness
    pub layouts: Vec<ExtGroupLayout>,
    pub config: SheetrisConfig,
    pub run_time_ms: u64,
}
