//! Flare tileset definitions: where each dungeon piece sits within the tileset image.

use {
	crate::{
		dtype::{FIRST_DPIECE_GID, TILEWIDTH},
		DungeonType,
	},
	std::io::{self, Write},
};

pub struct TilesetDef {
	pub img: String,
	pub firstID: usize,
	pub count: usize,
	pub columns: usize,
	pub tileHeight: usize,
}

impl TilesetDef {
	pub fn new(dtype: DungeonType, ndpieces: usize) -> Self {
		Self {
			img: format!("images/tilesets/tileset_{}.png", dtype.title()),
			firstID: FIRST_DPIECE_GID,
			count: ndpieces,
			columns: ndpieces.div_ceil(16),
			tileHeight: dtype.tileHeight(),
		}
	}

	pub fn write(&self, w: &mut impl Write) -> io::Result<()> {
		let &Self { ref img, firstID, count, columns, tileHeight } = self;
		write!(w, "img={img}\n\n")?;
		let [mut x, mut y] = [0, 0];
		for id in firstID..firstID + count {
			writeln!(w, "tile={id},{},{},{TILEWIDTH},{tileHeight},32,{}", x * TILEWIDTH, y * tileHeight, tileHeight - 16)?;
			x += 1;
			if x >= columns {
				x = 0;
				y += 1;
			}
		}
		Ok(())
	}
}
