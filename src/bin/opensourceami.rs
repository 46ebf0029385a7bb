#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	anyhow::Context,
	clap::Parser,
	std::{io::Write, path::PathBuf},
	tristram_scripts::{assets_script::writeScript, createScript},
};

/// Generate the script converting the original Diablo 1 game assets into the file formats
/// used by Ember.
#[derive(Parser, Debug)]
struct Args {
	/// output path
	#[clap(short)]
	o: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();
	let mut out = createScript(args.o.as_deref())?;
	writeScript(&mut out).and_then(|()| out.flush()).context("unable to write the script")?;
	Ok(())
}
