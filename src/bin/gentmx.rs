#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	anyhow::Context,
	clap::Parser,
	std::{fs, io::Write, path::PathBuf},
	tristram_scripts::{createOutput, initLogger, locateMpqDir, sol::SolTable, tmx::TmxMap, DungeonType},
};

/// Generate TMX maps from a sequence of dungeon pieces (i.e. miniature tiles).
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
	#[clap(value_name = "FILE.bin")]
	binPath: PathBuf,
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();
	initLogger("gentmx", args.q);
	locateMpqDir(&args.mpqdir)?;
	let sol = SolTable::load(&args.mpqdir, args.dtype)?;
	let bin = fs::read(&args.binPath).with_context(|| format!("unable to read {:?}", args.binPath))?;
	let map = TmxMap::new(&bin, &sol).with_context(|| format!("unable to parse {:?}", args.binPath))?;
	log::info!("{}x{} {} map with {} dungeon pieces.", map.width, map.height, args.dtype, map.ndpieces);
	let mut out = createOutput(args.o.as_deref())?;
	map.write(&mut out)?;
	out.flush()?;
	Ok(())
}
