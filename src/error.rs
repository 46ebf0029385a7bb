use {
	std::{io, path::PathBuf},
	thiserror::Error,
};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	#[error("unable to access {path:?}")]
	Io { path: PathBuf, source: io::Error },

	#[error(transparent)]
	Stream(#[from] io::Error),

	#[error("unable to decode PNG {path:?}")]
	PngDecode { path: PathBuf, source: png::DecodingError },

	#[error("unable to encode PNG {path:?}")]
	PngEncode { path: PathBuf, source: png::EncodingError },

	#[error("invalid layout {path:?}")]
	Layout { path: PathBuf, source: toml::de::Error },

	#[error(
		"mismatch between number of dungeon pieces and dungeon size {width}x{height}; expected {expected}, got {got}"
	)]
	DungeonSizeMismatch { width: usize, height: usize, expected: usize, got: usize },

	#[error("dungeon piece ID {dpieceID} out of range; the SOL table holds {ndpieces} dungeon pieces")]
	DPieceOutOfRange { dpieceID: i32, ndpieces: usize },

	#[error("malformed executable; {0}")]
	MalformedExe(&'static str),

	#[error("unable to locate {0:?} directory")]
	MpqDirNotFound(PathBuf),

	#[error("virtual address {0:#010X} is not backed by the executable")]
	UnmappedAddress(u32),

	#[error("unable to locate the monster data table")]
	MonsterTableNotFound,
}

impl Error {
	pub fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
		let path = path.into();
		move |source| Error::Io { path, source }
	}
}

#[cfg(test)]
mod tests {
	use {super::*, std::error::Error as _};

	#[test]
	fn ioCauseIsChainedNotRepeated() {
		let err = Error::io("nope/levels/l3data/l3.sol")(io::Error::from(io::ErrorKind::NotFound));
		assert_eq!(err.to_string(), r#"unable to access "nope/levels/l3data/l3.sol""#);
		let source = err.source().map(ToString::to_string);
		assert_eq!(source, Some(io::Error::from(io::ErrorKind::NotFound).to_string()));
	}
}
