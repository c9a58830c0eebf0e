use clap::Parser;

use defi_scan::{cli, example, history, projects, tvl};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = cli::Cli::parse();

    match cli.command {
        cli::Command::Projects { content, output } => projects::run(&content, output.as_deref()),
        cli::Command::Tvl { slug } => tvl::run(&slug),
        cli::Command::History { since, output } => history::run(since, output.as_deref()),
        cli::Command::Example => example::run(),
    }
}
