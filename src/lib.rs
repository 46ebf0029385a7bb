#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case, clippy::cast_possible_truncation, clippy::module_name_repetitions)]

pub mod arch;
pub mod assets_script;
pub mod collision_mask;
pub mod dtype;
mod error;
pub mod fixarches;
pub mod image;
pub mod monster;
pub mod pe;
pub mod sol;
pub mod tilesetdef;
pub mod tmx;

pub use {
	dtype::DungeonType,
	error::{Error, Result},
};

use {
	log::LevelFilter,
	std::{
		fs::{File, OpenOptions},
		io::{self, BufWriter, Write},
		path::Path,
	},
};

/// Routes `log` records to stderr as `<tool>: <message>`. `RUST_LOG` takes precedence over
/// `quiet`, which mutes everything but errors.
pub fn initLogger(tool: &'static str, quiet: bool) {
	let level = if quiet { LevelFilter::Error } else { LevelFilter::Info };
	let _ = env_logger::Builder::new()
		.filter_level(level)
		.parse_env("RUST_LOG")
		.format(move |buf, record| writeln!(buf, "{tool}: {}", record.args()))
		.try_init();
}

/// Fails unless `mpqDir`, the extracted `diabdat.mpq`, exists.
pub fn locateMpqDir(mpqDir: &Path) -> Result<()> {
	if mpqDir.exists() {
		Ok(())
	} else {
		Err(Error::MpqDirNotFound(mpqDir.to_owned()))
	}
}

/// Where a tool prints to: the file given with `-o`, or else stdout.
pub fn createOutput(path: Option<&Path>) -> Result<Box<dyn Write>> {
	Ok(match path {
		Some(path) => Box::new(BufWriter::new(File::create(path).map_err(Error::io(path))?)),
		None => Box::new(BufWriter::new(io::stdout().lock())),
	})
}

/// Like [`createOutput`], a created file being executable.
pub fn createScript(path: Option<&Path>) -> Result<Box<dyn Write>> {
	let Some(path) = path else {
		return createOutput(None);
	};
	let mut options = OpenOptions::new();
	options.write(true).create(true).truncate(true);
	#[cfg(unix)]
	{
		use std::os::unix::fs::OpenOptionsExt;
		options.mode(0o755);
	}
	Ok(Box::new(BufWriter::new(options.open(path).map_err(Error::io(path))?)))
}

#[cfg(test)]
mod tests {
	use {super::*, std::fs};

	#[test]
	fn missingMpqDirIsReported() {
		let dir = tempfile::tempdir().unwrap();
		assert!(locateMpqDir(dir.path()).is_ok());
		let err = locateMpqDir(&dir.path().join("diabdat")).unwrap_err();
		assert!(matches!(&err, Error::MpqDirNotFound(path) if path.ends_with("diabdat")));
		assert_eq!(err.to_string(), format!("unable to locate {:?} directory", dir.path().join("diabdat")));
	}

	#[test]
	fn outputGoesToGivenFile() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("out.txt");
		let mut out = createOutput(Some(&path)).unwrap();
		write!(out, "img=x").unwrap();
		drop(out);
		assert_eq!(fs::read_to_string(&path).unwrap(), "img=x");
	}

	#[cfg(unix)]
	#[test]
	fn scriptsAreExecutable() {
		use std::os::unix::fs::PermissionsExt;
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("opensourceami.sh");
		createScript(Some(&path)).unwrap().write_all(b"#!/bin/bash\n").unwrap();
		let mode = fs::metadata(&path).unwrap().permissions().mode();
		// the umask may only clear bits
		assert_eq!(mode & 0o100, 0o100);
		assert_eq!(fs::read(&path).unwrap(), b"#!/bin/bash\n");
	}
}
