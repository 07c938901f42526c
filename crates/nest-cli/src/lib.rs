pub mod args;
pub mod conf;
pub mod input;
pub mod pretty;
pub mod run;

pub use args::{InputArgs, NstatCli, StatCmd};
pub use conf::{ConfError, LogConf, NstatConf, OutputConf, OutputFormat};
pub use run::{init_logger, log_filter, run};
