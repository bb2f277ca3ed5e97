use clap::{ArgAction, Args, Parser, Subcommand};

use crate::resolver::Environment;

#[derive(Debug, Parser)]
#[command(
    name = "tagvars",
    version,
    about = "Resolve tag-manager function call variables"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "default",
        help = "Profile name to use"
    )]
    pub profile: String,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[arg(
        long,
        global = true,
        value_parser = parse_environment,
        help = "Override the environment (test or production)"
    )]
    pub environment: Option<Environment>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch a variable by name
    Fetch(FetchArgs),
    /// Enforce a default on an existing value
    Enforce(EnforceArgs),
    /// Resolve a raw request object
    Resolve(ResolveArgs),
    /// List recognized variable names
    Vars,
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct DefaultArgs {
    #[arg(long = "default", help = "Value returned when nothing usable is available")]
    pub default_value: Option<String>,
    #[arg(long, help = "Return no value instead of any default")]
    pub default_none: bool,
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    #[arg(help = "Variable name, e.g. timestamp")]
    pub name: String,
    #[command(flatten)]
    pub defaults: DefaultArgs,
}

#[derive(Debug, Args)]
pub struct EnforceArgs {
    #[arg(long, help = "Current value of the host variable")]
    pub current: Option<String>,
    #[command(flatten)]
    pub defaults: DefaultArgs,
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    #[arg(help = "Request JSON object; read from stdin when omitted")]
    pub request: Option<String>,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective settings
    Show,
    /// Print the settings file location
    Path,
}

fn parse_environment(value: &str) -> Result<Environment, String> {
    value.parse()
}
