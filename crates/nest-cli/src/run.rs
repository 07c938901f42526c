use anyhow::Context;
use env_logger::DEFAULT_FILTER_ENV;
use std::io::Read;

use nest_stats::{describe, flatten, mean, median, std_deviation, validate};

use crate::args::{NstatCli, StatCmd};
use crate::conf::NstatConf;
use crate::input::read_value;
use crate::pretty::{render_float, render_number, render_numbers, render_summary, render_values};

/// Picks the log filter: `--log-level` wins, then `RUST_LOG`, then the
/// config file level.
pub fn log_filter(cli: &NstatCli, conf: &NstatConf, rust_log: Option<String>) -> String {
    cli.log_level
        .clone()
        .or(rust_log.filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| conf.log().level.clone())
}

/// Sets up `env_logger` with the filter from [`log_filter`].
pub fn init_logger(cli: &NstatCli, conf: &NstatConf) {
    let rust_log = std::env::var(DEFAULT_FILTER_ENV).ok();
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(&log_filter(cli, conf, rust_log));
    // a second init (tests) is harmless
    let _ = builder.try_init();
}

/// Executes one subcommand and returns what should be printed.
pub fn run<R: Read>(cli: &NstatCli, conf: &NstatConf, stdin: R) -> anyhow::Result<String> {
    let cmd = &cli.command;
    let args = cmd.input();
    let conf = conf.clone().with_format(args.format);
    let out = conf.output();

    let value = read_value(&args.source(), stdin)?;
    log::info!("running {} on {} input", cmd.name(), value.kind());

    let ctx = || format!("{} failed", cmd.name());
    match cmd {
        StatCmd::Flatten(_) => render_values(&flatten(&value).with_context(ctx)?, out),
        StatCmd::Validate(_) => render_numbers(&validate(&value).with_context(ctx)?, out),
        StatCmd::Mean(_) => render_float("mean", mean(&value).with_context(ctx)?, out),
        StatCmd::Median(_) => render_number("median", median(&value).with_context(ctx)?, out),
        StatCmd::StdDev(_) => render_float(
            "std_deviation",
            std_deviation(&value).with_context(ctx)?,
            out,
        ),
        StatCmd::Describe(_) => render_summary(&describe(&value).with_context(ctx)?, out),
    }
}
