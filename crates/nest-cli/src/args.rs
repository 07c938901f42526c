use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::conf::OutputFormat;
use crate::input::InputSource;

#[derive(Parser, Debug)]
#[command(
    name = "nstat",
    version,
    about = "Flatten nested numeric JSON and compute mean, median and std deviation"
)]
pub struct NstatCli {
    /// Config file; defaults to ./nstat.toml when present
    #[clap(long, global = true)]
    pub conf: Option<PathBuf>,
    /// Log filter (error, warn, info, debug, trace); overrides [log].level
    #[clap(long = "log-level", global = true)]
    pub log_level: Option<String>,
    #[command(subcommand)]
    pub command: StatCmd,
}

#[derive(Subcommand, Debug)]
pub enum StatCmd {
    /// Print every leaf of the input, depth-first
    Flatten(InputArgs),
    /// Print the leaves, failing on the first non-numeric one
    Validate(InputArgs),
    /// Arithmetic mean
    Mean(InputArgs),
    /// Median; equal middle values are returned as-is
    Median(InputArgs),
    /// Population standard deviation
    #[command(name = "stddev")]
    StdDev(InputArgs),
    /// Count, mean, median and std deviation at once
    Describe(InputArgs),
}

impl StatCmd {
    pub fn input(&self) -> &InputArgs {
        match self {
            StatCmd::Flatten(a)
            | StatCmd::Validate(a)
            | StatCmd::Mean(a)
            | StatCmd::Median(a)
            | StatCmd::StdDev(a)
            | StatCmd::Describe(a) => a,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StatCmd::Flatten(_) => "flatten",
            StatCmd::Validate(_) => "validate",
            StatCmd::Mean(_) => "mean",
            StatCmd::Median(_) => "median",
            StatCmd::StdDev(_) => "stddev",
            StatCmd::Describe(_) => "describe",
        }
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Inline JSON document, e.g. '[1, [2, 3]]'
    #[clap(short, long, conflicts_with = "file")]
    pub data: Option<String>,
    /// Read the JSON document from a file
    #[clap(short, long)]
    pub file: Option<PathBuf>,
    /// Output format; overrides [output].format
    #[clap(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl InputArgs {
    /// Stdin is used when neither `--data` nor `--file` is given.
    pub fn source(&self) -> InputSource {
        match (&self.data, &self.file) {
            (Some(data), _) => InputSource::Inline(data.clone()),
            (None, Some(path)) => InputSource::File(path.clone()),
            (None, None) => InputSource::Stdin,
        }
    }
}
