use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use home_to_pdf::cli::Args;
use home_to_pdf::config::Settings;
use home_to_pdf::model::Home;
use home_to_pdf::render_home_pdf;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    // Read input file
    let home = Home::load(&args.input)
        .with_context(|| format!("Failed to read home file: {}", args.input.display()))?;

    log::info!(
        "Loaded home with {} furniture pieces, {} walls, {} levels",
        home.furniture.len(),
        home.walls.len(),
        home.levels.len()
    );

    // Build settings from CLI args and the print attributes stored in the home
    let settings = Settings::from_args(&args).with_home_print(home.print.as_ref());

    let pdf_data = match render_home_pdf(&home, &settings) {
        Ok(data) => data,
        Err(e) if e.is_cancelled() => return Ok(()),
        Err(e) => return Err(e).with_context(|| "Failed to generate PDF"),
    };

    if pdf_data.is_empty() {
        anyhow::bail!("Nothing to print: furniture, plan and 3D view are all disabled");
    }

    // Write output
    let output_path = args.output_path();
    fs::write(&output_path, pdf_data)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    println!("Successfully wrote PDF to {}", output_path.display());

    Ok(())
}
