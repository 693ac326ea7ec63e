use anyhow::{Context, Result};
use clap::Parser;
use day10::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let map = day10::asteroid::read_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read asteroid map from given file({}).",
            args.input_path.display()
        )
    })?;

    let (station, visible) = map
        .best_station()
        .context("No station could be found, there's no asteroid in given map.")?;
    println!(
        "Max asteroids can be detected: {} at ({},{})",
        visible.len(),
        station.x(),
        station.y()
    );

    Ok(())
}
