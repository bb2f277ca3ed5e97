use clap::Parser;
use tagvars::cli::{Cli, Command, ConfigCommand};
use tagvars::resolver::Environment;

#[test]
fn parses_fetch_with_default() {
    let cli = Cli::try_parse_from(["tagvars", "fetch", "timestamp", "--default", "none yet"])
        .expect("cli parse should work");
    match cli.command {
        Command::Fetch(fetch) => {
            assert_eq!(fetch.name, "timestamp");
            assert_eq!(fetch.defaults.default_value.as_deref(), Some("none yet"));
            assert!(!fetch.defaults.default_none);
        }
        _ => panic!("expected fetch command"),
    }
}

#[test]
fn parses_enforce() {
    let cli = Cli::try_parse_from([
        "tagvars",
        "enforce",
        "--current",
        "undefined",
        "--default",
        "N/A",
        "--default-none",
    ])
    .expect("cli parse should work");
    match cli.command {
        Command::Enforce(enforce) => {
            assert_eq!(enforce.current.as_deref(), Some("undefined"));
            assert_eq!(enforce.defaults.default_value.as_deref(), Some("N/A"));
            assert!(enforce.defaults.default_none);
        }
        _ => panic!("expected enforce command"),
    }
}

#[test]
fn parses_global_environment_override() {
    let cli = Cli::try_parse_from(["tagvars", "vars", "--environment", "production", "--json"])
        .expect("cli parse should work");
    assert_eq!(cli.environment, Some(Environment::Production));
    assert!(cli.json);
    assert!(matches!(cli.command, Command::Vars));
}

#[test]
fn rejects_unknown_environment() {
    let result = Cli::try_parse_from(["tagvars", "--environment", "staging", "vars"]);
    assert!(result.is_err());
}

#[test]
fn parses_resolve_and_config() {
    let cli = Cli::try_parse_from(["tagvars", "resolve", r#"{"action":"enforce_default"}"#])
        .expect("cli parse should work");
    match cli.command {
        Command::Resolve(resolve) => assert!(resolve.request.is_some()),
        _ => panic!("expected resolve command"),
    }

    let cli = Cli::try_parse_from(["tagvars", "-vv", "config", "path"])
        .expect("cli parse should work");
    assert_eq!(cli.verbose, 2);
    match cli.command {
        Command::Config(config) => assert!(matches!(config.command, ConfigCommand::Path)),
        _ => panic!("expected config command"),
    }
}
