#![allow(non_snake_case)]

use {
	std::{fs, path::Path},
	tristram_scripts::{
		collision_mask::{collisionTiles, palette, writeTiles},
		fixarches::{archPath, dpiecePath, fixArches},
		image::Image,
		sol::{SolTable, SOL_BLOCK_MISSILE, SOL_BLOCK_WALK},
		tilesetdef::TilesetDef,
		tmx::TmxMap,
		DungeonType,
	},
};

fn writeSol(mpqDir: &Path, dtype: DungeonType, flags: &[u8]) {
	let path = dtype.solPath(mpqDir);
	fs::create_dir_all(path.parent().unwrap()).unwrap();
	fs::write(path, flags).unwrap();
}

fn writePNG(path: &Path, image: &Image) {
	fs::create_dir_all(path.parent().unwrap()).unwrap();
	image.writePNG(path).unwrap();
}

#[test]
fn townMapFromDiskFixtures() {
	let dir = tempfile::tempdir().unwrap();
	let mpqDir = dir.path().join("diabdat");
	let mut flags = vec![0; 1258];
	flags[9] = SOL_BLOCK_WALK;
	flags[10] = SOL_BLOCK_MISSILE;
	writeSol(&mpqDir, DungeonType::Town, &flags);

	let mut ids = vec![1_i32; 96 * 96];
	ids[0] = 10;
	ids[1] = 11;
	ids[96 * 96 - 1] = 0;
	let bin: Vec<u8> = ids.iter().flat_map(|id| id.to_le_bytes()).collect();

	let sol = SolTable::load(&mpqDir, DungeonType::Town).unwrap();
	let map = TmxMap::new(&bin, &sol).unwrap();
	let out = &mut Vec::new();
	map.write(out).unwrap();
	let tmx = String::from_utf8(out.clone()).unwrap();
	let lines: Vec<_> = tmx.lines().collect();

	assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
	assert_eq!(
		lines[1],
		r#"<map version="1.0" orientation="isometric" width="96" height="96" tilewidth="64" tileheight="32">"#
	);
	assert_eq!(lines[3], r#"  <property name="music" value="music/tristram.ogg"/>"#);
	assert_eq!(lines[5], r#"  <property name="title" value="Tristram"/>"#);
	assert_eq!(lines[10], r#" <tileset firstgid="41" name="tristram" tilewidth="64" tileheight="256">"#);
	assert_eq!(
		lines[11],
		r#"  <image source="../../mods/ember/images/tilesets/tileset_tristram.png" width="4096" height="5120"/>"#
	);
	assert_eq!(lines[13], r#" <layer name="background" width="96" height="96">"#);
	assert_eq!(lines[14], r#"  <data encoding="csv">"#);
	// the first row holds x = 0
	assert!(lines[15].starts_with("50,41,41,"));
	assert!(lines[16].starts_with("51,41,"));
	assert!(lines[15 + 95].ends_with(",41,0"));
	assert_eq!(lines[15 + 96], "  </data>");
	let collision = lines.iter().position(|line| line.contains(r#"name="collision" width"#)).unwrap();
	assert!(lines[collision + 2].starts_with("1,0,0,"));
	assert!(lines[collision + 3].starts_with("2,0,"));
	assert!(lines[collision + 2 + 95].ends_with(",0,1"));
	assert_eq!(lines.last(), Some(&"</map>"));
}

#[test]
fn tilesetDefinitionFromSol() {
	let dir = tempfile::tempdir().unwrap();
	writeSol(dir.path(), DungeonType::L2, &[0; 559]);
	let sol = SolTable::load(dir.path(), DungeonType::L2).unwrap();
	let def = TilesetDef::new(DungeonType::L2, sol.ndpieces());
	let out = &mut Vec::new();
	def.write(out).unwrap();
	let text = String::from_utf8(out.clone()).unwrap();
	assert!(text.starts_with("img=images/tilesets/tileset_catacombs.png\n\ntile=41,0,0,64,160,32,144\n"));
	// 35 columns
	assert!(text.contains("\ntile=76,0,160,64,160,32,144\n"));
	assert!(text.ends_with("tile=599,2112,2400,64,160,32,144\n"));
}

#[test]
fn archesAreDrawnInEveryPalette() {
	let dir = tempfile::tempdir().unwrap();
	let (mpqDir, dumpDir) = (dir.path().join("diabdat"), dir.path().join("_dump_"));
	writeSol(&mpqDir, DungeonType::L1, &[0; 12]);

	let mut floor = Image::fromWidthHeight(64, 160);
	floor.data.chunks_exact_mut(4).for_each(|pixel| pixel.copy_from_slice(&[10, 20, 30, 255]));
	let mut arch = Image::fromWidthHeight(64, 160);
	arch.setPixel(5, 5, [200, 0, 0, 255]);
	for (pal, _) in DungeonType::L1.palettes() {
		for dpieceID in [11, 12] {
			writePNG(&dpiecePath(&dumpDir, DungeonType::L1, pal, dpieceID), &floor);
		}
		for archID in [1, 2] {
			writePNG(&archPath(&dumpDir, DungeonType::L1, pal, archID), &arch);
		}
	}

	assert_eq!(fixArches(&mpqDir, &dumpDir, DungeonType::L1).unwrap(), 2 * 6);
	let fixed = Image::readPNG(&dpiecePath(&dumpDir, DungeonType::L1, "l1palg", 12)).unwrap();
	assert_eq!(fixed.pixel(5, 5), [200, 0, 0, 255]);
	assert_eq!(fixed.pixel(6, 5), [10, 20, 30, 255]);
	assert_eq!((fixed.width, fixed.height), (64, 160));
}

#[test]
fn missingArchImageFails() {
	let dir = tempfile::tempdir().unwrap();
	let (mpqDir, dumpDir) = (dir.path().join("diabdat"), dir.path().join("_dump_"));
	writeSol(&mpqDir, DungeonType::L1, &[0; 12]);
	writePNG(&dpiecePath(&dumpDir, DungeonType::L1, "l1_1", 11), &Image::fromWidthHeight(64, 160));
	assert!(fixArches(&mpqDir, &dumpDir, DungeonType::L1).is_err());
}

#[test]
fn collisionTilesetFromMask() {
	let dir = tempfile::tempdir().unwrap();
	let maskPath = dir.path().join("mask.png");
	let mut mask = Image::fromWidthHeight(64, 32);
	mask.setPixel(32, 16, [255, 255, 255, 255]);
	writePNG(&maskPath, &mask);

	let mask = Image::readPNG(&maskPath).unwrap();
	let tiles = collisionTiles(&mask, &palette(40, None));
	writeTiles(dir.path(), &tiles, true).unwrap();
	assert!(dir.path().join("mask_0039.png").is_file());
	assert!(!dir.path().join("mask_0040.png").exists());
	let atlas = Image::readPNG(&dir.path().join("tiled_collision.png")).unwrap();
	assert_eq!((atlas.width, atlas.height), (512, 160));
	// black is the eighth colour
	assert_eq!(atlas.pixel(7 * 64 + 32, 16), [0, 0, 0, 255]);
	assert_eq!(atlas.pixel(7 * 64 + 33, 16), [0, 0, 0, 0]);
}
