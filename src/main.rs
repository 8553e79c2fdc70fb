//! `catalog` CLI entry point.

use clap::Parser;

use storefront_catalog::cli::{self, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = cli::run(cli).await {
        cli::handle_error(err, json);
    }
}
