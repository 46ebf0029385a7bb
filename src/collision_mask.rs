//! Collision tiles: the tile mask painted in a distinct colour per collision class.

use {
	crate::{image::Image, Result},
	rand::{rngs::StdRng, seq::SliceRandom, SeedableRng},
	std::path::Path,
};

pub const MASK_WIDTH: usize = 64;
pub const MASK_HEIGHT: usize = 32;
pub const ATLAS_COLUMNS: usize = 8;
pub const DEFAULT_NCOLLISIONS: usize = 40;

/// SVG 1.1 colour keywords, sorted by name.
pub const NAMED_COLOURS: [(&str, u32); 147] = [
	("aliceblue", 0xF0F8FF),
	("antiquewhite", 0xFAEBD7),
	("aqua", 0x00FFFF),
	("aquamarine", 0x7FFFD4),
	("azure", 0xF0FFFF),
	("beige", 0xF5F5DC),
	("bisque", 0xFFE4C4),
	("black", 0x000000),
	("blanchedalmond", 0xFFEBCD),
	("blue", 0x0000FF),
	("blueviolet", 0x8A2BE2),
	("brown", 0xA52A2A),
	("burlywood", 0xDEB887),
	("cadetblue", 0x5F9EA0),
	("chartreuse", 0x7FFF00),
	("chocolate", 0xD2691E),
	("coral", 0xFF7F50),
	("cornflowerblue", 0x6495ED),
	("cornsilk", 0xFFF8DC),
	("crimson", 0xDC143C),
	("cyan", 0x00FFFF),
	("darkblue", 0x00008B),
	("darkcyan", 0x008B8B),
	("darkgoldenrod", 0xB8860B),
	("darkgray", 0xA9A9A9),
	("darkgreen", 0x006400),
	("darkgrey", 0xA9A9A9),
	("darkkhaki", 0xBDB76B),
	("darkmagenta", 0x8B008B),
	("darkolivegreen", 0x556B2F),
	("darkorange", 0xFF8C00),
	("darkorchid", 0x9932CC),
	("darkred", 0x8B0000),
	("darksalmon", 0xE9967A),
	("darkseagreen", 0x8FBC8F),
	("darkslateblue", 0x483D8B),
	("darkslategray", 0x2F4F4F),
	("darkslategrey", 0x2F4F4F),
	("darkturquoise", 0x00CED1),
	("darkviolet", 0x9400D3),
	("deeppink", 0xFF1493),
	("deepskyblue", 0x00BFFF),
	("dimgray", 0x696969),
	("dimgrey", 0x696969),
	("dodgerblue", 0x1E90FF),
	("firebrick", 0xB22222),
	("floralwhite", 0xFFFAF0),
	("forestgreen", 0x228B22),
	("fuchsia", 0xFF00FF),
	("gainsboro", 0xDCDCDC),
	("ghostwhite", 0xF8F8FF),
	("gold", 0xFFD700),
	("goldenrod", 0xDAA520),
	("gray", 0x808080),
	("green", 0x008000),
	("greenyellow", 0xADFF2F),
	("grey", 0x808080),
	("honeydew", 0xF0FFF0),
	("hotpink", 0xFF69B4),
	("indianred", 0xCD5C5C),
	("indigo", 0x4B0082),
	("ivory", 0xFFFFF0),
	("khaki", 0xF0E68C),
	("lavender", 0xE6E6FA),
	("lavenderblush", 0xFFF0F5),
	("lawngreen", 0x7CFC00),
	("lemonchiffon", 0xFFFACD),
	("lightblue", 0xADD8E6),
	("lightcoral", 0xF08080),
	("lightcyan", 0xE0FFFF),
	("lightgoldenrodyellow", 0xFAFAD2),
	("lightgray", 0xD3D3D3),
	("lightgreen", 0x90EE90),
	("lightgrey", 0xD3D3D3),
	("lightpink", 0xFFB6C1),
	("lightsalmon", 0xFFA07A),
	("lightseagreen", 0x20B2AA),
	("lightskyblue", 0x87CEFA),
	("lightslategray", 0x778899),
	("lightslategrey", 0x778899),
	("lightsteelblue", 0xB0C4DE),
	("lightyellow", 0xFFFFE0),
	("lime", 0x00FF00),
	("limegreen", 0x32CD32),
	("linen", 0xFAF0E6),
	("magenta", 0xFF00FF),
	("maroon", 0x800000),
	("mediumaquamarine", 0x66CDAA),
	("mediumblue", 0x0000CD),
	("mediumorchid", 0xBA55D3),
	("mediumpurple", 0x9370DB),
	("mediumseagreen", 0x3CB371),
	("mediumslateblue", 0x7B68EE),
	("mediumspringgreen", 0x00FA9A),
	("mediumturquoise", 0x48D1CC),
	("mediumvioletred", 0xC71585),
	("midnightblue", 0x191970),
	("mintcream", 0xF5FFFA),
	("mistyrose", 0xFFE4E1),
	("moccasin", 0xFFE4B5),
	("navajowhite", 0xFFDEAD),
	("navy", 0x000080),
	("oldlace", 0xFDF5E6),
	("olive", 0x808000),
	("olivedrab", 0x6B8E23),
	("orange", 0xFFA500),
	("orangered", 0xFF4500),
	("orchid", 0xDA70D6),
	("palegoldenrod", 0xEEE8AA),
	("palegreen", 0x98FB98),
	("paleturquoise", 0xAFEEEE),
	("palevioletred", 0xDB7093),
	("papayawhip", 0xFFEFD5),
	("peachpuff", 0xFFDAB9),
	("peru", 0xCD853F),
	("pink", 0xFFC0CB),
	("plum", 0xDDA0DD),
	("powderblue", 0xB0E0E6),
	("purple", 0x800080),
	("red", 0xFF0000),
	("rosybrown", 0xBC8F8F),
	("royalblue", 0x4169E1),
	("saddlebrown", 0x8B4513),
	("salmon", 0xFA8072),
	("sandybrown", 0xF4A460),
	("seagreen", 0x2E8B57),
	("seashell", 0xFFF5EE),
	("sienna", 0xA0522D),
	("silver", 0xC0C0C0),
	("skyblue", 0x87CEEB),
	("slateblue", 0x6A5ACD),
	("slategray", 0x708090),
	("slategrey", 0x708090),
	("snow", 0xFFFAFA),
	("springgreen", 0x00FF7F),
	("steelblue", 0x4682B4),
	("tan", 0xD2B48C),
	("teal", 0x008080),
	("thistle", 0xD8BFD8),
	("tomato", 0xFF6347),
	("turquoise", 0x40E0D0),
	("violet", 0xEE82EE),
	("wheat", 0xF5DEB3),
	("white", 0xFFFFFF),
	("whitesmoke", 0xF5F5F5),
	("yellow", 0xFFFF00),
	("yellowgreen", 0x9ACD32),
];

pub fn rgb(colour: u32) -> [u8; 3] {
	let [_, r, g, b] = colour.to_be_bytes();
	[r, g, b]
}

/// The first `n` named colours, shuffled beforehand when given a seed.
pub fn palette(n: usize, seed: Option<u64>) -> Vec<(&'static str, u32)> {
	let mut colours = NAMED_COLOURS.to_vec();
	if let Some(seed) = seed {
		colours.shuffle(&mut StdRng::seed_from_u64(seed));
	}
	colours.truncate(n);
	colours
}

/// One `MASK_WIDTH`×`MASK_HEIGHT` tile per colour.
pub fn collisionTiles(mask: &Image, palette: &[(&str, u32)]) -> Vec<Image> {
	palette.iter().map(|&(_, colour)| crate::image::tinted(mask, rgb(colour), MASK_WIDTH, MASK_HEIGHT)).collect()
}

/// Lays `tiles` out in rows of `ATLAS_COLUMNS`.
pub fn atlas(tiles: &[Image]) -> Image {
	let rows = tiles.len().div_ceil(ATLAS_COLUMNS);
	let mut atlas = Image::fromWidthHeight(ATLAS_COLUMNS * MASK_WIDTH, rows * MASK_HEIGHT);
	for (i, tile) in tiles.iter().enumerate() {
		atlas.blit([i % ATLAS_COLUMNS * MASK_WIDTH, i / ATLAS_COLUMNS * MASK_HEIGHT], tile);
	}
	atlas
}

/// Writes `mask_<i>.png` for every tile into `outDir`, and `tiled_collision.png` if `withAtlas`.
pub fn writeTiles(outDir: &Path, tiles: &[Image], withAtlas: bool) -> Result<()> {
	for (i, tile) in tiles.iter().enumerate() {
		let path = outDir.join(format!("mask_{i:04}.png"));
		log::debug!("writing {path:?}.");
		tile.writePNG(&path)?;
	}
	if withAtlas {
		let path = outDir.join("tiled_collision.png");
		log::info!("writing collision atlas {path:?}.");
		atlas(tiles).writePNG(&path)?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn diamond() -> Image {
		let mut mask = Image::fromWidthHeight(MASK_WIDTH, MASK_WIDTH);
		for y in 0..MASK_HEIGHT {
			let half = 2 * if y < MASK_HEIGHT / 2 { y + 1 } else { MASK_HEIGHT - y };
			for x in MASK_WIDTH / 2 - half..MASK_WIDTH / 2 + half {
				mask.setPixel(x, y, [0, 0, 0, 255]);
			}
		}
		// below the tile; never painted
		mask.setPixel(0, MASK_HEIGHT + 1, [0, 0, 0, 255]);
		mask
	}

	#[test]
	fn namedColoursAreSortedAndUnique() {
		assert!(NAMED_COLOURS.windows(2).all(|pair| pair[0].0 < pair[1].0));
		assert_eq!(NAMED_COLOURS[0], ("aliceblue", 0xF0F8FF));
		assert_eq!(rgb(0x9ACD32), [0x9A, 0xCD, 0x32]);
	}

	#[test]
	fn defaultPaletteIsAlphabetical() {
		let palette = palette(DEFAULT_NCOLLISIONS, None);
		assert_eq!(palette.len(), 40);
		assert_eq!(palette[7].0, "black");
		assert_eq!(palette[39].0, "darkviolet");
	}

	#[test]
	fn seededPaletteIsReproducible() {
		let (a, b) = (palette(40, Some(7)), palette(40, Some(7)));
		assert_eq!(a, b);
		assert_ne!(a, palette(40, None));
		assert!(a.iter().all(|colour| NAMED_COLOURS.contains(colour)));
	}

	#[test]
	fn tilesFollowMask() {
		let tiles = collisionTiles(&diamond(), &palette(2, None));
		assert_eq!(tiles.len(), 2);
		let tile = &tiles[1];
		assert_eq!((tile.width, tile.height), (MASK_WIDTH, MASK_HEIGHT));
		assert_eq!(tile.pixel(32, 16), [0xFA, 0xEB, 0xD7, 255]);
		assert_eq!(tile.pixel(0, 0), [0; 4]);
	}

	#[test]
	fn atlasHasEightColumns() {
		let tiles = collisionTiles(&diamond(), &palette(DEFAULT_NCOLLISIONS, None));
		let atlas = atlas(&tiles);
		assert_eq!((atlas.width, atlas.height), (512, 160));
		// centre of the tenth tile: second row, second column
		assert_eq!(atlas.pixel(64 + 32, 32 + 16), tiles[9].pixel(32, 16));
		assert_eq!(atlas.pixel(64 + 32, 32 + 16)[..3], rgb(NAMED_COLOURS[9].1));
	}

	#[test]
	fn writesMasksAndAtlas() {
		let dir = tempfile::tempdir().unwrap();
		let tiles = collisionTiles(&diamond(), &palette(3, None));
		writeTiles(dir.path(), &tiles, true).unwrap();
		for name in ["mask_0000.png", "mask_0002.png", "tiled_collision.png"] {
			assert!(dir.path().join(name).is_file(), "{name}");
		}
		assert_eq!(Image::readPNG(&dir.path().join("mask_0001.png")).unwrap(), tiles[1]);
		let atlas = Image::readPNG(&dir.path().join("tiled_collision.png")).unwrap();
		assert_eq!((atlas.width, atlas.height), (512, 32));
	}
}
