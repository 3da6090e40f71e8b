// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments, build the client, hand over to `app::run`.
// - Returns `anyhow::Result` so any failure exits non-zero with its cause chain.

use anyhow::Context;
use ccpaste::api::{
    Expiration, PasteOptions, PastebinClient, Visibility, DEFAULT_FORMAT, DEFAULT_NAME,
};
use ccpaste::{app, logging};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ccpaste",
    version,
    about = "Upload a ComputerCraft script to Pastebin without its excluded regions"
)]
struct Cli {
    #[arg(help = "Pastebin developer API key")]
    api_key: String,
    #[arg(help = "Script to upload")]
    file: PathBuf,
    #[arg(long, help = "Paste title (defaults to the file name)")]
    name: Option<String>,
    #[arg(long, default_value = DEFAULT_FORMAT, help = "Syntax highlighting format")]
    format: String,
    #[arg(long, value_enum, default_value_t = Expiration::OneHour)]
    expire: Expiration,
    #[arg(long, value_enum, default_value_t = Visibility::Unlisted)]
    visibility: Visibility,
    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let name = cli.name.clone().unwrap_or_else(|| {
        cli.file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_NAME.into())
    });
    let options = PasteOptions {
        name,
        format: cli.format.clone(),
        expiration: cli.expire,
        visibility: cli.visibility,
    };

    // Endpoint comes from `PASTEBIN_API_URL` or the public Pastebin API.
    let client = PastebinClient::from_env().context("Failed to build HTTP client")?;

    let mut stdout = std::io::stdout().lock();
    app::run(&client, &cli.api_key, &cli.file, &options, &mut stdout)
        .with_context(|| format!("Failed to publish {}", cli.file.display()))?;
    Ok(())
}
