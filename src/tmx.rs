//! TMX maps from a sequence of dungeon pieces (i.e. miniature tiles).

use {
	crate::{
		dtype::{FIRST_DPIECE_GID, TILEWIDTH},
		sol::SolTable,
		DungeonType, Error, Result,
	},
	byteorder::{ReadBytesExt, LE},
	std::io::{self, Write},
};

pub struct TmxMap {
	pub dtype: DungeonType,
	pub width: usize,
	pub height: usize,
	/// Number of dungeon pieces in the tileset.
	pub ndpieces: usize,
	/// Indexed `[x][y]`.
	pub background: Vec<Vec<usize>>,
	/// Indexed `[x][y]`.
	pub collision: Vec<Vec<u8>>,
}

impl TmxMap {
	/// Parses `bin`, a little-endian `i32` dungeon piece ID per cel, rows of x within y.
	pub fn new(bin: &[u8], sol: &SolTable) -> Result<Self> {
		let (dtype, [width, height]) = (sol.dtype, sol.dtype.mapDimensions());
		let expected = 4 * width * height;
		if bin.len() != expected {
			return Err(Error::DungeonSizeMismatch { width, height, expected, got: bin.len() });
		}
		let (mut background, mut collision) = (vec![vec![0; height]; width], vec![vec![0; height]; width]);
		let cursor = &mut io::Cursor::new(bin);
		for y in 0..height {
			for x in 0..width {
				let dpieceID = cursor.read_i32::<LE>()?;
				collision[x][y] = sol.collision(dpieceID)? as u8;
				if dpieceID != 0 {
					// collision() already rejected negative IDs.
					background[x][y] = FIRST_DPIECE_GID - 1 + dpieceID as usize;
				}
			}
		}
		Ok(Self { dtype, width, height, ndpieces: sol.ndpieces(), background, collision })
	}

	/// Tileset dimensions in pixels.
	pub fn tilesetDimensions(&self) -> [usize; 2] {
		let tilesPerRow = self.dtype.tilesPerRow();
		[TILEWIDTH * tilesPerRow, self.dtype.tileHeight() * self.ndpieces.div_ceil(tilesPerRow)]
	}

	pub fn write(&self, w: &mut impl Write) -> io::Result<()> {
		let (dtype, width, height) = (self.dtype, self.width, self.height);
		let (title, tileset) = (dtype.title(), dtype.tileset());
		let [tilesetWidth, tilesetHeight] = self.tilesetDimensions();
		writeln!(w, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
		writeln!(
			w,
			r#"<map version="1.0" orientation="isometric" width="{width}" height="{height}" tilewidth="64" tileheight="32">"#
		)?;
		writeln!(w, " <properties>")?;
		writeln!(w, r#"  <property name="music" value="music/{title}.ogg"/>"#)?;
		writeln!(w, r#"  <property name="tileset" value="tilesetdefs/{tileset}.txt"/>"#)?;
		writeln!(w, r#"  <property name="title" value="{}"/>"#, titleCase(title))?;
		writeln!(w, " </properties>")?;
		writeln!(w, r#" <tileset firstgid="1" name="collision" tilewidth="64" tileheight="32">"#)?;
		writeln!(w, r#"  <image source="../tiled_collision.png" width="512" height="160"/>"#)?;
		writeln!(w, " </tileset>")?;
		writeln!(
			w,
			r#" <tileset firstgid="{FIRST_DPIECE_GID}" name="{title}" tilewidth="64" tileheight="{}">"#,
			dtype.tileHeight()
		)?;
		writeln!(
			w,
			r#"  <image source="../../mods/ember/images/tilesets/{tileset}.png" width="{tilesetWidth}" height="{tilesetHeight}"/>"#
		)?;
		writeln!(w, " </tileset>")?;
		// The layer height repeats the width; every map is square.
		writeln!(w, r#" <layer name="background" width="{width}" height="{width}">"#)?;
		writeCSV(w, &self.background)?;
		writeln!(w, " </layer>")?;
		writeln!(w, r#" <layer name="collision" width="{width}" height="{width}" visible="0">"#)?;
		writeCSV(w, &self.collision)?;
		writeln!(w, " </layer>")?;
		writeln!(w, "</map>")
	}
}

fn writeCSV<T: core::fmt::Display>(w: &mut impl Write, rows: &[Vec<T>]) -> io::Result<()> {
	writeln!(w, r#"  <data encoding="csv">"#)?;
	for (i, row) in rows.iter().enumerate() {
		if i != 0 {
			writeln!(w, ",")?;
		}
		for (j, cell) in row.iter().enumerate() {
			if j != 0 {
				write!(w, ",")?;
			}
			write!(w, "{cell}")?;
		}
	}
	writeln!(w)?;
	writeln!(w, "  </data>")
}

pub(crate) fn titleCase(s: &str) -> String {
	let mut chars = s.chars();
	chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}
