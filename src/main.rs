use clap::Parser;
use tracing_subscriber::EnvFilter;

use hgvs_describe::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("hgvs_describe=debug,info")
    } else {
        EnvFilter::new("hgvs_describe=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Describe(args) => {
            cli::describe::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
