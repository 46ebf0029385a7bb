use {
	core::fmt,
	std::path::{Path, PathBuf},
};

/// Tile width in pixels of every dungeon piece.
pub const TILEWIDTH: usize = 64;

/// First GID of the dungeon piece tileset; GIDs below it belong to the collision tileset.
pub const FIRST_DPIECE_GID: usize = 41;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum DungeonType {
	Town,
	L1,
	L2,
	L3,
	L4,
}
use DungeonType::*;

impl DungeonType {
	pub const ALL: [DungeonType; 5] = [L1, L2, L3, L4, Town];

	pub fn name(self) -> &'static str {
		match self {
			Town => "town",
			L1 => "l1",
			L2 => "l2",
			L3 => "l3",
			L4 => "l4",
		}
	}

	/// Map dimensions in number of cels.
	pub fn mapDimensions(self) -> [usize; 2] {
		match self {
			Town => [96, 96],
			L1 | L2 | L3 | L4 => [112, 112],
		}
	}

	pub fn title(self) -> &'static str {
		match self {
			Town => "tristram",
			L1 => "cathedral",
			L2 => "catacombs",
			L3 => "caves",
			L4 => "hell",
		}
	}

	pub fn tileset(self) -> &'static str {
		match self {
			Town => "tileset_tristram",
			L1 => "tileset_cathedral_theme_1",
			L2 => "tileset_catacombs_theme_1",
			L3 => "tileset_caves_theme_1",
			L4 => "tileset_hell_theme_1",
		}
	}

	pub fn tilesPerRow(self) -> usize {
		match self {
			Town => 64,
			L1 | L2 | L3 | L4 => 32,
		}
	}

	pub fn tileHeight(self) -> usize {
		match self {
			Town | L4 => 256,
			L1 | L2 | L3 => 160,
		}
	}

	/// Palettes the dungeon pieces get dumped with, paired with the name of the
	/// tileset generated from each of them.
	pub fn palettes(self) -> &'static [(&'static str, &'static str)] {
		match self {
			L1 => &[
				("l1_1", "tileset_cathedral_theme_1"),
				("l1_2", "tileset_cathedral_theme_2"),
				("l1_3", "tileset_cathedral_theme_3"),
				("l1_4", "tileset_cathedral_theme_4"),
				("l1_5", "tileset_cathedral_theme_5"),
				("l1palg", "tileset_cathedral_gray"),
			],
			L2 => &[
				("l2_1", "tileset_catacombs_theme_1"),
				("l2_2", "tileset_catacombs_theme_2"),
				("l2_3", "tileset_catacombs_theme_3"),
				("l2_4", "tileset_catacombs_theme_4"),
				("l2_5", "tileset_catacombs_theme_5"),
				("l2palg", "tileset_catacombs_gray"),
			],
			L3 => &[
				("l3_1", "tileset_caves_theme_1"),
				("l3_2", "tileset_caves_theme_2"),
				("l3_3", "tileset_caves_theme_3"),
				("l3_4", "tileset_caves_theme_4"),
				("l3_i", "tileset_caves_theme_ice"),
				("l3palg", "tileset_caves_gray"),
				("l3pfoul", "tileset_caves_theme_foul_water"),
				("l3pwater", "tileset_caves_theme_water"),
			],
			L4 => &[
				("l4_1", "tileset_hell_theme_1"),
				("l4_2", "tileset_hell_theme_2"),
				("l4_3", "tileset_hell_theme_3"),
				("l4_4", "tileset_hell_theme_4"),
			],
			Town => &[("ltpalg", "tileset_tristram_gray"), ("town", "tileset_tristram")],
		}
	}

	/// `levels/<dtype>data`, relative to an extracted "diabdat.mpq".
	pub fn dataDir(self) -> PathBuf {
		Path::new("levels").join(format!("{}data", self.name()))
	}

	pub fn solPath(self, mpqDir: &Path) -> PathBuf {
		mpqDir.join(self.dataDir()).join(format!("{}.sol", self.name()))
	}
}

impl fmt::Display for DungeonType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
