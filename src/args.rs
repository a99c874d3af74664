mod proc_errors;

use clap::{
    Args,
    Parser,
    Subcommand,
    ValueEnum,
};

use crate::compare::{CompareCfg, CompareTarget};
use crate::geo::{NumericPolicy, Tolerance};
use crate::io::Format;

pub use proc_errors::{
    ArgError,
    ProcResult,
};

/// Woolz vertex validation and comparison tool.
#[derive(Debug, Parser)]
#[command(name = "wlzvtx")]
pub struct WlzvtxCli {
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    /// Increase log verbosity (-v for debug, -vv for trace).
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Command,
}

/// Subcommands of the wlzvtx binary.
#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(name = "compare")]
    /// Compare two vertex lists index by index.
    Compare(CompareArgs),

    #[command(name = "check")]
    /// Load a vertex list and check its coordinates.
    Check(CheckArgs),

    #[command(name = "example")]
    /// Print an example vertex list or comparison config.
    Example(ExampleArgs),
}

/// Arguments for the compare command.
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// First vertex list (.json/.yaml/.yml/.toml, or - for stdin).
    pub input_a: String,

    /// Second vertex list (.json/.yaml/.yml/.toml, or - for stdin).
    pub input_b: String,

    #[arg(short, long = "cfg")]
    /// Comparison config file.
    pub cfg_file: Option<String>,

    #[arg(short, long)]
    /// Absolute tolerance per coordinate, overriding the config.
    pub epsilon: Option<f64>,

    #[arg(short, long, value_enum)]
    /// Non-finite coordinate policy, overriding the config.
    pub policy: Option<NumericPolicy>,

    #[arg(short, long, value_enum)]
    /// Input format, if it can't be inferred from the extension.
    pub format: Option<Format>,

    #[arg(short, long = "output")]
    /// Save the full report to this file (format from the extension).
    pub output_path: Option<String>,
}
impl CompareArgs {
    /// Build the comparison target: config file first, then command line overrides.
    pub fn build_target(self) -> ProcResult<CompareTarget> {
        let mut cfg = match self.cfg_file.as_ref() {
            Some(cfg_file) => {
                println!("Loading comparison config file: {}...", cfg_file);
                CompareCfg::from_cfg_file(cfg_file)?
            },
            None => CompareCfg::default(),
        };
        if let Some(epsilon) = self.epsilon {
            cfg.tolerance = Tolerance::absolute(epsilon)?;
        }
        if let Some(policy) = self.policy {
            cfg.policy = policy;
        }
        log::debug!("Comparison config: {:?}", cfg);

        Ok(CompareTarget::new(
            self.input_a,
            self.input_b,
            self.format,
            cfg,
            self.output_path,
        )?)
    }
}

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Vertex list (.json/.yaml/.yml/.toml, or - for stdin).
    pub input: String,

    #[arg(short, long, value_enum, default_value_t = NumericPolicy::Finite)]
    /// Non-finite coordinate policy.
    pub policy: NumericPolicy,

    #[arg(short, long, value_enum)]
    /// Input format, if it can't be inferred from the extension.
    pub format: Option<Format>,
}

/// Which example to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[clap(rename_all = "kebab_case")]
pub enum ExampleKind {
    /// A vertex list file.
    Vertices,
    /// A comparison config file.
    Cfg,
}

/// Arguments for the example command.
#[derive(Debug, Args)]
pub struct ExampleArgs {
    #[arg(value_enum, default_value_t = ExampleKind::Vertices)]
    /// Kind of example.
    pub kind: ExampleKind,

    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    /// Output format.
    pub format: Format,
}

/// Parse the command line arguments.
pub fn parse_cli_args() -> WlzvtxCli {
    WlzvtxCli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> WlzvtxCli {
        WlzvtxCli::try_parse_from(args).unwrap()
    }

    #[test]
    fn cli_is_consistent() {
        use clap::CommandFactory;
        WlzvtxCli::command().debug_assert();
    }

    #[test]
    fn compare_overrides() {
        let cli = parse(&["wlzvtx", "-v", "compare", "a.yaml", "b.json", "-e", "0.5", "-p", "finite"]);
        assert_eq!(cli.verbose, 1);
        let target = match cli.command {
            Command::Compare(args) => args.build_target().unwrap(),
            other => panic!("Expected compare, got {:?}", other),
        };
        assert_eq!(target.cfg.tolerance.epsilon(), 0.5);
        assert_eq!(target.cfg.policy, NumericPolicy::Finite);
        assert_eq!(target.input_b, "b.json");
    }

    #[test]
    fn negative_epsilon_is_an_error() {
        let cli = parse(&["wlzvtx", "compare", "a.yaml", "b.yaml", "--epsilon=-1"]);
        match cli.command {
            Command::Compare(args) => assert!(matches!(args.build_target(), Err(ArgError::GeoError(_)))),
            other => panic!("Expected compare, got {:?}", other),
        }
    }

    #[test]
    fn missing_cfg_file() {
        let cli = parse(&["wlzvtx", "compare", "a.yaml", "b.yaml", "--cfg", "/no/such/cfg.toml"]);
        match cli.command {
            Command::Compare(args) => assert!(matches!(args.build_target(), Err(ArgError::IoError(_)))),
            other => panic!("Expected compare, got {:?}", other),
        }
    }

    #[test]
    fn check_defaults_to_finite() {
        match parse(&["wlzvtx", "check", "-"]).command {
            Command::Check(args) => {
                assert_eq!(args.policy, NumericPolicy::Finite);
                assert_eq!(args.format, None);
            },
            other => panic!("Expected check, got {:?}", other),
        }
    }

    #[test]
    fn example_defaults() {
        match parse(&["wlzvtx", "example"]).command {
            Command::Example(args) => {
                assert_eq!(args.kind, ExampleKind::Vertices);
                assert_eq!(args.format, Format::Yaml);
            },
            other => panic!("Expected example, got {:?}", other),
        }
    }
}
