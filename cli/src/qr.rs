use clap::Parser;

/// CLI for scanned donor QR payloads.
#[derive(Debug, Parser)]
pub struct QrCli {
    #[command(subcommand)]
    pub cmd: QrCommand,
}

#[derive(Debug, clap::Subcommand)]
pub enum QrCommand {
    /// Parse a scanned payload and print it as JSON.
    Parse { payload: String },
}

pub fn run(cli: QrCli) -> anyhow::Result<()> {
    match cli.cmd {
        QrCommand::Parse { payload } => {
            let parsed = lifelink_qr::parse_payload(&payload)?;
            println!("{}", serde_json::to_string(&parsed)?);
        }
    }
    Ok(())
}
