#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	anyhow::Context,
	clap::Parser,
	std::{
		fs,
		io::{self, BufWriter, Write},
		path::PathBuf,
	},
	tristram_scripts::{
		initLogger,
		monster::{graphicsScript, parseMonsters, soundsScript, Definitions, Layout},
		pe::Executable,
	},
};

/// Extract monsters assets from the Diablo 1 game.
///
/// Requires an original copy of diablo.exe (v1.09).
#[derive(Parser, Debug)]
struct Args {
	/// extract monster definitions
	#[clap(long)]
	def: bool,
	/// extract monster graphics
	#[clap(long)]
	graphics: bool,
	/// extract monster sounds
	#[clap(long)]
	sounds: bool,
	/// suppress non-error messages
	#[clap(short)]
	q: bool,
	/// directory of the Tristram mod receiving the definitions
	#[clap(long, default_value = "../mods/tristram")]
	modDir: PathBuf,
	/// TOML file pinning the location of the monster table
	#[clap(long)]
	layout: Option<PathBuf>,
	#[clap(value_name = "diablo.exe")]
	exePath: PathBuf,
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();
	initLogger("extract_monsters", args.q);
	let layout = match &args.layout {
		Some(path) => Layout::load(path)?,
		None => Layout::default(),
	};
	let data = fs::read(&args.exePath).with_context(|| format!("unable to read {:?}", args.exePath))?;
	let exe = Executable::new(data).with_context(|| format!("unable to parse {:?}", args.exePath))?;
	let monsters = parseMonsters(&exe, &layout)?;
	log::info!("{} monsters located.", monsters.len());

	let stdout = &mut BufWriter::new(io::stdout().lock());
	writeln!(stdout, "#!/bin/bash")?;
	for monster in &monsters {
		log::info!("extracting assets of {:?}.", monster.name);
		if args.graphics {
			graphicsScript(monster, stdout)?;
		}
		if args.sounds {
			soundsScript(monster, stdout)?;
		}
		if args.def {
			Definitions::new(monster)
				.save(&args.modDir)
				.with_context(|| format!("unable to store the definitions of {:?}", monster.name))?;
		}
	}
	stdout.flush()?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn modDirIsKebabCase() {
		let args = Args::try_parse_from(["extract_monsters", "--def", "--mod-dir", "mods/t", "diablo.exe"]).unwrap();
		assert!(args.def && !args.graphics && !args.sounds);
		assert_eq!(args.modDir, PathBuf::from("mods/t"));
		assert_eq!(args.exePath, PathBuf::from("diablo.exe"));
	}

	#[test]
	fn defaults() {
		let args = Args::try_parse_from(["extract_monsters", "--graphics", "--sounds", "-q", "diablo.exe"]).unwrap();
		assert!(args.graphics && args.sounds && args.q);
		assert_eq!(args.modDir, PathBuf::from("../mods/tristram"));
		assert_eq!(args.layout, None);
	}

	#[test]
	fn requiresExecutable() {
		assert!(Args::try_parse_from(["extract_monsters", "--def"]).is_err());
	}
}
