#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	anyhow::Context,
	clap::Parser,
	std::path::PathBuf,
	tristram_scripts::{fixarches::fixArches, initLogger, DungeonType},
};

/// Draw arches onto the dumped dungeon pieces of the tilesets.
#[derive(Parser, Debug)]
struct Args {
	/// path to extracted "diabdat.mpq"
	#[clap(long, default_value = "diabdat")]
	mpqdir: PathBuf,
	/// directory of the CEL and MIN dumps
	#[clap(long, default_value = "_dump_")]
	dump: PathBuf,
	/// dungeon types to process [default: all]
	#[clap(long, value_enum)]
	dtype: Vec<DungeonType>,
	/// suppress non-error messages
	#[clap(short)]
	q: bool,
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();
	initLogger("fixarches", args.q);
	let dtypes = if args.dtype.is_empty() { DungeonType::ALL.to_vec() } else { args.dtype };
	for dtype in dtypes {
		let nfixed = fixArches(&args.mpqdir, &args.dump, dtype)
			.with_context(|| format!("unable to draw the arches of dungeon type {dtype}"))?;
		log::debug!("{nfixed} dungeon piece images of {dtype} rewritten.");
	}
	Ok(())
}
