mod app;
mod cli_opts;
mod config;
mod output;

pub use app::*;
pub use cli_opts::command_from_cli;
pub use config::*;
pub use output::*;
