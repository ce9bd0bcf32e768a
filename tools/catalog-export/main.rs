use clap::Parser;
use recipe_roulette::prelude::*;
use std::fs;

/// Writes the built-in recipe catalog as an editable JSON document
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the JSON file to
    #[arg(short, long, default_value = "catalog.json")]
    output: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let catalog = Catalog::builtin();

    let document = CatalogDocument::from(catalog);
    let json_output = document.to_json_pretty()?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Exported {} recipes to '{}'. Load it back with `roulette --catalog {}`.",
        catalog.len(),
        cli.output,
        cli.output
    );

    Ok(())
}
