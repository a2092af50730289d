// src/bin/cli.rs
use cybar_scrape::cli;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let params = cli::parse().map_err(|e| color_eyre::eyre::eyre!("{e}"))?;
    cli::run(params)
        .await
        .map_err(|e| color_eyre::eyre::eyre!("{e}"))?;
    Ok(())
}
