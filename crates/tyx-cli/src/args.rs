use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

/// CLI arguments for the tyx binary.
#[derive(Parser, Debug)]
#[command(
    name = "tyx",
    version,
    about = "Evaluate type-level challenge suites with a structural type engine"
)]
pub struct CliArgs {
    /// Run only the named suite. Repeat to run several.
    #[arg(short = 's', long = "suite", value_name = "NAME")]
    pub suites: Vec<String>,

    /// Report format.
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,

    /// Path to a tyx.json config file.
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the available suites and exit.
    #[arg(long)]
    pub list: bool,

    /// Disable colored output.
    #[arg(long = "no-color", alias = "noColor")]
    pub no_color: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
