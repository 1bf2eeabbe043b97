use clap::Parser;
use std::path::PathBuf;

mod activity;
mod qr;

/// Operator toolkit for the lifelink blood-donation app.
#[derive(Debug, Parser)]
#[command(name = "lifelink", version)]
struct Cli {
    /// Directory holding the `.lifelink` data directory.
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Inspect and append to the local activity log.
    Activity(activity::ActivityCli),
    /// Work with scanned donor QR payloads.
    Qr(qr::QrCli),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Activity(c) => activity::run(&cli.root, c),
        Command::Qr(c) => qr::run(c),
    }
}
