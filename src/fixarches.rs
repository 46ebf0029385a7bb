//! Draws the arch graphics onto the dumped dungeon pieces casting their floor shadows.

use {
	crate::{arch::archID, image::Image, sol::SolTable, DungeonType, Result},
	std::path::{Path, PathBuf},
};

/// `<dump>/levels/<dtype>data/<dtype>s/<pal>.pal/<dtype>s_<archID>.png`
pub fn archPath(dumpDir: &Path, dtype: DungeonType, pal: &str, archID: u32) -> PathBuf {
	dumpDir
		.join(dtype.dataDir())
		.join(format!("{dtype}s"))
		.join(format!("{pal}.pal"))
		.join(format!("{dtype}s_{archID:04}.png"))
}

/// `<dump>/_dpieces_/<dtype>/<pal>.pal/dpiece_<dpieceID>.png`
pub fn dpiecePath(dumpDir: &Path, dtype: DungeonType, pal: &str, dpieceID: u32) -> PathBuf {
	dumpDir.join("_dpieces_").join(dtype.name()).join(format!("{pal}.pal")).join(format!("dpiece_{dpieceID:04}.png"))
}

/// Composites the arches of `dtype` over their dungeon pieces in every palette, in place.
/// Returns the number of images rewritten.
pub fn fixArches(mpqDir: &Path, dumpDir: &Path, dtype: DungeonType) -> Result<usize> {
	let sol = SolTable::load(mpqDir, dtype)?;
	let mut nfixed = 0;
	for dpieceID in 1..=sol.ndpieces() as u32 {
		let archID = archID(dtype, dpieceID);
		if archID == crate::arch::ARCH_NONE {
			continue;
		}
		for (pal, _) in dtype.palettes() {
			let dpiecePath = dpiecePath(dumpDir, dtype, pal, dpieceID);
			let mut dpiece = Image::readPNG(&dpiecePath)?;
			let arch = Image::readPNG(&archPath(dumpDir, dtype, pal, archID))?;
			log::info!(
				"Drawing arch ID {archID} onto dungeon piece ID {dpieceID} with palette {:?}.",
				dtype.dataDir().join(format!("{pal}.pal")),
			);
			dpiece.drawOver(&arch);
			dpiece.writePNG(&dpiecePath)?;
			nfixed += 1;
		}
	}
	Ok(nfixed)
}

#[cfg(test)]
mod tests {
	use {super::*, crate::Error, std::fs};

	#[test]
	fn pathsFollowDumpLayout() {
		let dump = Path::new("_dump_");
		assert_eq!(
			archPath(dump, DungeonType::L1, "l1_2", 5),
			Path::new("_dump_/levels/l1data/l1s/l1_2.pal/l1s_0005.png")
		);
		assert_eq!(
			dpiecePath(dump, DungeonType::Town, "ltpalg", 1234),
			Path::new("_dump_/_dpieces_/town/ltpalg.pal/dpiece_1234.png")
		);
	}

	#[test]
	fn cavesHaveNoArches() {
		let dir = tempfile::tempdir().unwrap();
		let sol = DungeonType::L3.solPath(dir.path());
		fs::create_dir_all(sol.parent().unwrap()).unwrap();
		fs::write(&sol, [0; 560]).unwrap();
		assert_eq!(fixArches(dir.path(), &dir.path().join("_dump_"), DungeonType::L3).unwrap(), 0);
	}

	#[test]
	fn missingSolIsReported() {
		let dir = tempfile::tempdir().unwrap();
		let err = fixArches(dir.path(), dir.path(), DungeonType::L1).unwrap_err();
		assert!(matches!(err, Error::Io { .. }));
	}
}
