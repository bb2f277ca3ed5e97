use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        profile,
        json,
        verbose,
        environment,
        command,
    } = cli;

    let ctx = AppContext::bootstrap(profile, json, verbose, environment)?;

    match command {
        Command::Fetch(args) => commands::fetch::run(&ctx, args),
        Command::Enforce(args) => commands::enforce::run(&ctx, args),
        Command::Resolve(args) => commands::resolve::run(&ctx, args),
        Command::Vars => commands::vars::run(&ctx),
        Command::Config(args) => commands::config::run(&ctx, args.command),
    }
}
