use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use nest_cli::{NstatCli, NstatConf, init_logger, run};

fn main() -> ExitCode {
    let cli = NstatCli::parse();
    let work_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let conf = match NstatConf::resolve(cli.conf.as_deref(), &work_dir) {
        Ok(conf) => conf,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_logger(&cli, &conf);

    match run(&cli, &conf, io::stdin().lock()) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("{} aborted: {:?}", cli.command.name(), e);
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
