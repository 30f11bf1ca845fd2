// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use seamcarve::{energy_to_image, SeamCarver};
use std::path::PathBuf;

/// Seam carving: shrink an image without squashing what matters.
#[derive(Debug, Parser)]
#[command(name = "seamcarve", version)]
struct Args {
    /// The image to carve
    input: PathBuf,

    /// Where to write the result; the format follows the extension
    output: PathBuf,

    /// Target width (defaults to the current width)
    #[arg(long)]
    width: Option<u32>,

    /// Target height (defaults to the current height)
    #[arg(long)]
    height: Option<u32>,

    /// Write the energy map of the input instead of carving
    #[arg(long)]
    energy: bool,

    /// More output; repeat for more still
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let image = image::open(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?
        .to_rgb8();
    let mut carver = SeamCarver::from_image(&image)?;
    let (width, height) = carver.dimensions();

    if args.energy {
        energy_to_image(&carver.energy_map())
            .save(&args.output)
            .with_context(|| format!("cannot write {}", args.output.display()))?;
        info!("wrote energy map of {}x{} image", width, height);
        return Ok(());
    }

    let (newwidth, newheight) = (args.width.unwrap_or(width), args.height.unwrap_or(height));
    carver.carve_to(newwidth, newheight)?;
    carver
        .to_image()
        .save(&args.output)
        .with_context(|| format!("cannot write {}", args.output.display()))?;
    info!("carved {}x{} down to {}x{}", width, height, newwidth, newheight);
    Ok(())
}
