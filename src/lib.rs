pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod output;
pub mod resolver;

pub use resolver::{Environment, Request, VariableResolver};

use cli::Cli;
use error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    logging::init(cli.verbose)?;
    app::run(cli)
}
