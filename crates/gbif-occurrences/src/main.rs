//! GBIF occurrence lookup - prints occurrence records as a table

use clap::Parser;
use gbif_occurrences::{logging, run, Config, Result};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::init()?;

    let config = Config::parse();
    info!(
        species = %config.species,
        country = %config.country,
        api_url = %config.api_url,
        "Looking up GBIF occurrences"
    );

    let client = config.client();
    let output = run(&client, &config.query()).await;
    println!("{}", output);

    Ok(())
}
