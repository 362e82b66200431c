use clap::Parser;
mod cli;
mod commands;
mod ortholog;

fn main() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    let cli = cli::Cli::parse();
    cli.execute()?;
    Ok(())
}
