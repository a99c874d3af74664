use serde::{Serialize, Deserialize};

use crate::geo::{NumericPolicy, Tolerance};
use crate::io;
use crate::compare::{err_str, ProcResult};

/// Comparison settings.
/// Loadable from a JSON, YAML or TOML config file; missing fields take defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompareCfg {
    /// Absolute tolerance per coordinate (zero is exact).
    #[serde(default, alias = "epsilon")]
    pub tolerance: Tolerance,

    /// Handling of NaN and infinite coordinates.
    #[serde(default)]
    pub policy: NumericPolicy,
}
impl CompareCfg {
    /// Load a config file.
    pub fn from_cfg_file(cfg_file: &str) -> ProcResult<Self> {
        Ok(io::read_cfg_file(cfg_file)?)
    }
}

/// Comparison target struct.
/// Contains the inputs, settings and optional report output.
#[derive(Debug, Clone)]
pub struct CompareTarget {
    /// First vertex list path (`-` for standard input).
    pub input_a: String,
    /// Second vertex list path (`-` for standard input).
    pub input_b: String,
    /// Format override for the inputs.
    pub format: Option<io::Format>,
    /// Comparison settings.
    pub cfg: CompareCfg,
    /// Optional report output path.
    pub output_path: Option<String>,
}
impl CompareTarget {
    /// Construct a target, checking the inputs can all be read.
    pub fn new(
        input_a: String,
        input_b: String,
        format: Option<io::Format>,
        cfg: CompareCfg,
        output_path: Option<String>,
    ) -> ProcResult<Self> {
        if io::is_stdin(&input_a) && io::is_stdin(&input_b) {
            err_str("Only one input can be read from stdin")?;
        }
        Ok(CompareTarget{input_a, input_b, format, cfg, output_path})
    }
}
