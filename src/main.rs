use clap::Parser;

fn main() {
    let cli = tagvars::cli::Cli::parse();

    if let Err(err) = tagvars::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
