#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	clap::Parser,
	std::{io::Write, path::PathBuf},
	tristram_scripts::{createOutput, initLogger, locateMpqDir, sol::SolTable, tilesetdef::TilesetDef, DungeonType},
};

/// Generate Flare tileset definitions from the solidity table of a dungeon type.
#[derive(Parser, Debug)]
struct Args {
	/// dungeon type
	#[clap(long, value_enum, default_value = "l1")]
	dtype: DungeonType,
	/// path to extracted "diabdat.mpq"
	#[clap(long, default_value = "diabdat")]
	mpqdir: PathBuf,
	/// output path
	#[clap(short)]
	o: Option<PathBuf>,
	/// suppress non-error messages
	#[clap(short)]
	q: bool,
	/// ID of the first tile [default: 41]
	#[clap(long)]
	firstId: Option<usize>,
	/// tiles per row of the tileset image [default: a sixteenth of the tiles]
	#[clap(long)]
	columns: Option<usize>,
	/// number of tiles [default: number of dungeon pieces]
	#[clap(long)]
	count: Option<usize>,
	/// tileset image path, relative to the mod
	#[clap(long)]
	img: Option<String>,
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();
	initLogger("gentilesetdef", args.q);
	locateMpqDir(&args.mpqdir)?;
	let ndpieces = match args.count {
		Some(count) => count,
		None => SolTable::load(&args.mpqdir, args.dtype)?.ndpieces(),
	};
	let mut def = TilesetDef::new(args.dtype, ndpieces);
	if let Some(firstID) = args.firstId {
		def.firstID = firstID;
	}
	if let Some(columns) = args.columns {
		def.columns = columns.max(1);
	}
	if let Some(img) = args.img {
		def.img = img;
	}
	log::info!("{} tiles in {} columns, starting at ID {}.", def.count, def.columns, def.firstID);
	let mut out = createOutput(args.o.as_deref())?;
	def.write(&mut out)?;
	out.flush()?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn legacyTownOverrides() {
		let args = Args::try_parse_from([
			"gentilesetdef",
			"--dtype",
			"town",
			"--first-id",
			"101",
			"--columns",
			"79",
			"--count",
			"1258",
			"--img",
			"images/tilesets/tileset_town.png",
		])
		.unwrap();
		assert_eq!(args.dtype, DungeonType::Town);
		assert_eq!(args.firstId, Some(101));
		assert_eq!(args.columns, Some(79));
		assert_eq!(args.count, Some(1258));
		assert_eq!(args.img.as_deref(), Some("images/tilesets/tileset_town.png"));
	}

	#[test]
	fn overridesAreOptional() {
		let args = Args::try_parse_from(["gentilesetdef"]).unwrap();
		assert_eq!(args.dtype, DungeonType::L1);
		assert_eq!((args.firstId, args.columns, args.count, args.img), (None, None, None, None));
	}

	#[test]
	fn snakeCaseFlagIsRejected() {
		assert!(Args::try_parse_from(["gentilesetdef", "--firstId", "101"]).is_err());
	}
}
