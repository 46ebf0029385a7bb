#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	clap::Parser,
	std::path::PathBuf,
	tristram_scripts::{
		collision_mask::{collisionTiles, palette, writeTiles, DEFAULT_NCOLLISIONS, NAMED_COLOURS},
		image::Image,
		initLogger,
	},
};

/// Generate collision tiles, and optionally tiled_collision.png, from a given mask image.
#[derive(Parser, Debug)]
struct Args {
	/// number of collision tiles
	#[clap(long, default_value_t = DEFAULT_NCOLLISIONS as u16, value_parser = clap::value_parser!(u16).range(1..=NAMED_COLOURS.len() as i64))]
	count: u16,
	/// shuffle the colours with the given seed
	#[clap(long)]
	seed: Option<u64>,
	/// also write the tiles into tiled_collision.png
	#[clap(long)]
	atlas: bool,
	/// output directory
	#[clap(long, default_value = ".")]
	outdir: PathBuf,
	/// suppress non-error messages
	#[clap(short)]
	q: bool,
	#[clap(value_name = "FILE.png")]
	maskPath: PathBuf,
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();
	initLogger("gentiled_collision", args.q);
	let mask = Image::readPNG(&args.maskPath)?;
	let palette = palette(args.count.into(), args.seed);
	for (i, (name, _)) in palette.iter().enumerate() {
		log::info!("collision {i}: {name}.");
	}
	writeTiles(&args.outdir, &collisionTiles(&mask, &palette), args.atlas)?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use {super::*, clap::error::ErrorKind};

	#[test]
	fn countDefaultsToForty() {
		let args = Args::try_parse_from(["gentiled_collision", "mask.png"]).unwrap();
		assert_eq!(args.count, 40);
		assert_eq!(args.outdir, PathBuf::from("."));
		assert!(!args.atlas);
		assert_eq!(args.seed, None);
	}

	#[test]
	fn countStaysWithinNamedColours() {
		for count in ["1", "147"] {
			assert!(Args::try_parse_from(["gentiled_collision", "--count", count, "mask.png"]).is_ok());
		}
		for count in ["0", "148"] {
			let err = Args::try_parse_from(["gentiled_collision", "--count", count, "mask.png"]).unwrap_err();
			assert_eq!(err.kind(), ErrorKind::ValueValidation);
		}
	}
}
