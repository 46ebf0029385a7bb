//! The shell script converting an extracted `diabdat.mpq` into the assets of the Ember mod.

use {
	crate::{monster::montageDirections, tmx::titleCase, DungeonType},
	const_format::concatcp,
	std::io::{self, Write},
};

const MOD_DIR: &str = "../mods/ember";
const TILESET_IMAGE_DIR: &str = concatcp!(MOD_DIR, "/images/tileset");
const MONSTER_IMAGE_DIR: &str = concatcp!(MOD_DIR, "/images/monster");

const PROLOGUE: &str = r#"#!/bin/bash

# Locate extracted diabdat.mpq
if [ ! -f "diabdat/levels/towndata/town.cel" ]; then
	echo "Unable to locate \"diabdat\" directory containing the contents of diabdat.mpq"
	echo ""
	echo "   Please extract diabdat.mpq to \"_assets_/diabdat/\" using"
	echo "   Ladislav Zezula's MPQ Editor [1]."
	echo ""
	echo "   [1]: http://www.zezula.net/en/mpq/download.html"
	exit 1
fi

# Convert CEL, CL2 and MIN files to PNG images.
echo "Converting CEL, CL2 and MIN files to PNG images."
if [ ! -d "_dump_" ]; then
	mkdir -p _dump_
	time cel_dump -a
	time min_dump -a
fi

# Draw arches onto tileset dungeon pieces.
echo "Draw arches onto tileset dungeon pieces."
fixarches
"#;

/// One glob of a sprite sheet row.
enum Part {
	/// `<prefix>{<runes>}/*_<direction>/*.png`
	Actions { prefix: &'static str, runes: &'static str },
	/// `<dir>/*_<direction>/*.png`
	Directional(&'static str),
	/// `<dir>/*.png`, the same frames in every direction.
	Still(&'static str),
}
use Part::*;

struct Sheet {
	title: &'static str,
	dir: &'static str,
	parts: &'static [Part],
	/// Frame size, the frames being bottom-aligned.
	geometry: Option<[u32; 2]>,
}

macro_rules! sheet {
	($title:literal, $dir:literal, $prefix:literal, $runes:literal) => {
		sheet!(@ $title, $dir, $prefix, $runes, None)
	};
	($title:literal, $dir:literal, $prefix:literal, $runes:literal, $w:literal x $h:literal) => {
		sheet!(@ $title, $dir, $prefix, $runes, Some([$w, $h]))
	};
	(@ $title:literal, $dir:literal, $prefix:literal, $runes:literal, $geometry:expr) => {
		Sheet { title: $title, dir: $dir, parts: &[Actions { prefix: $prefix, runes: $runes }], geometry: $geometry }
	};
}

const SHEETS: [Sheet; 33] = [
	sheet!("Spitting Terror", "acid", "acid", "a,d,h,n,s,w"),
	sheet!("Winged Fiend", "bat", "bat", "a,d,h,n,w"),
	sheet!("Devil Kin Brute", "bigfall", "fallg", "a,d,h,n,w"),
	sheet!("Black Knight", "black", "black", "a,d,h,n,w", 160 x 160),
	sheet!("Dark Mage", "darkmage", "dmage", "a,d,h,n,s"),
	sheet!("Bone Demon", "demskel", "demskl", "a,d,h,n,s,w"),
	sheet!("Diablo", "diablo", "diablo", "a,d,h,n,s,w"),
	sheet!("Fallen One Spear Wielder", "falspear", "phall", "a,d,h,n,s,w"),
	sheet!("Fallen One Sword Wielder", "falsword", "fall", "a,d,h,n,s,w"),
	sheet!("Overlord", "fat", "fat", "a,d,h,n,s,w"),
	sheet!("Butcher", "fatc", "fatc", "a,d,h,n,w"),
	sheet!("Fireman", "fireman", "firem", "a,d,h,n,s,w", 128 x 171),
	sheet!("Gargoyle", "gargoyle", "gargo", "a,d,h,n,s,w"),
	sheet!("Goat Archer", "goatbow", "goatb", "a,d,h,n,w"),
	sheet!("Goat Lord", "goatlord", "goatl", "a,d,h,n,w", 160 x 160),
	sheet!("Goat Mace Wielder", "goatmace", "goat", "a,d,h,n,s,w"),
	Sheet {
		title: "Golem",
		dir: "golem",
		parts: &[Directional("golema"), Still("golemd"), Still("golems"), Directional("golemw")],
		geometry: None,
	},
	sheet!("Mage", "mage", "mage", "a,d,h,n,s"),
	sheet!("Magma Demon", "magma", "magma", "a,d,h,n,s,w"),
	sheet!("Balrog", "mega", "mega", "a,d,h,n,s,w"),
	sheet!("Horned Demon", "rhino", "rhino", "a,d,h,n,s,w"),
	sheet!("Scavenger", "scav", "scav", "a,d,h,n,s,w"),
	sheet!("Skeleton Axe Wielder", "skelaxe", "sklax", "a,d,h,n,s,w"),
	sheet!("Skeleton Archer", "skelbow", "sklbw", "a,d,h,n,s,w"),
	sheet!("Skeleton Sword Wielder", "skelsd", "sklsr", "a,d,h,n,s,w"),
	sheet!("Skeleton King", "sking", "sking", "a,d,h,n,s,w"),
	sheet!("Viper", "snake", "snake", "a,d,h,n,s,w"),
	sheet!("Hidden", "sneak", "sneak", "a,d,h,n,s,w"),
	sheet!("Succubus", "succ", "scbs", "a,d,h,n,w"),
	sheet!("Litch Demon", "thin", "thin", "a,d,h,n,s,w"),
	sheet!("Invisible Lord", "tsneak", "tsneak", "a,d,h,n,w"),
	sheet!("Unraveler", "unrav", "unrav", "a,d,h,n,s,w", 96 x 128),
	sheet!("Zombie", "zombie", "zombie", "a,d,h,n,s,w"),
];

/// Music tracks of `diabdat/music`, and their name within the mod.
const MUSIC: [(&str, &str); 6] = [
	("dintro", "intro"),
	("dlvla", "cathedral"),
	("dlvlb", "catacombs"),
	("dlvlc", "caves"),
	("dlvld", "hell"),
	("dtowne", "tristram"),
];

impl Sheet {
	fn fileName(&self) -> String {
		self.title.to_lowercase().replace(' ', "_")
	}

	fn writeMontage(&self, w: &mut impl Write) -> io::Result<()> {
		write!(w, "\tmontage")?;
		let dir = format!("_dump_/monsters/{}", self.dir);
		for direction in montageDirections() {
			for part in self.parts {
				match part {
					Actions { prefix, runes } => write!(w, " {dir}/{prefix}{{{runes}}}/*_{direction}/*.png")?,
					Directional(glob) => write!(w, " {dir}/{glob}/*_{direction}/*.png")?,
					Still(glob) => write!(w, " {dir}/{glob}/*.png")?,
				}
			}
		}
		match self.geometry {
			Some([width, height]) => write!(w, " -gravity south -geometry {width}x{height}+0+0")?,
			None => write!(w, " -geometry +0+0")?,
		}
		writeln!(w, " -tile x8 -background none {MONSTER_IMAGE_DIR}/{}.png", self.fileName())
	}
}

/// Writes the whole conversion script.
pub fn writeScript(w: &mut impl Write) -> io::Result<()> {
	w.write_all(PROLOGUE.as_bytes())?;
	writeTilesets(w)?;
	writeMonsters(w)?;
	writeln!(w)?;
	writeln!(w, "# Copy cursor graphics.")?;
	writeln!(w, r#"if [ ! -d "{MOD_DIR}/images/cursor" ]; then"#)?;
	writeln!(w, "\tmkdir -p {MOD_DIR}/images/cursor")?;
	writeln!(w, "\tcp _dump_/data/inv/objcurs/objcurs_0001.png {MOD_DIR}/images/cursor/cursor_hand.png")?;
	writeln!(w, "fi")?;
	writeln!(w)?;
	writeln!(w, "# Convert music from wav to ogg.")?;
	writeln!(w, r#"echo "Converting music from wav to ogg.""#)?;
	writeln!(w, r#"if [ ! -d "{MOD_DIR}/music" ]; then"#)?;
	writeln!(w, "\tmkdir -p {MOD_DIR}/music")?;
	for (track, name) in MUSIC {
		writeln!(w, "\tffmpeg -loglevel error -y -i diabdat/music/{track}.wav {MOD_DIR}/music/{name}.ogg")?;
	}
	writeln!(w, "fi")
}

fn writeTilesets(w: &mut impl Write) -> io::Result<()> {
	writeln!(w)?;
	writeln!(w, "# Generate tilesets.")?;
	writeln!(w, r#"echo "Generate tilesets.""#)?;
	writeln!(w, r#"if [ ! -d "{TILESET_IMAGE_DIR}" ]; then"#)?;
	writeln!(w, "\tmkdir -p {TILESET_IMAGE_DIR}")?;
	for dtype in DungeonType::ALL {
		let title = titleCase(dtype.title());
		writeln!(w, "\t# {title}.")?;
		writeln!(w, "\techo \"Generate {title} tilesets.\"")?;
		let (tilesPerRow, tileHeight) = (dtype.tilesPerRow(), dtype.tileHeight());
		for (pal, tileset) in dtype.palettes() {
			writeln!(
				w,
				"\tmontage _dump_/_dpieces_/{dtype}/{pal}.pal/dpiece_*.png -background none -tile {tilesPerRow}x -geometry 64x{tileHeight} {TILESET_IMAGE_DIR}/{tileset}.png",
			)?;
		}
	}
	writeln!(w, "fi")?;
	writeln!(w)?;
	writeln!(w, "# Generate tileset definitions.")?;
	for dtype in [DungeonType::Town, DungeonType::L1, DungeonType::L2, DungeonType::L3, DungeonType::L4] {
		writeln!(w, "gentilesetdef --dtype {dtype} > {MOD_DIR}/tileset/{}.txt", dtype.tileset())?;
	}
	Ok(())
}

fn writeMonsters(w: &mut impl Write) -> io::Result<()> {
	writeln!(w)?;
	writeln!(w, "# Generate monster graphics.")?;
	writeln!(w, r#"echo "Generate monster graphics.""#)?;
	writeln!(w, r#"if [ ! -d "{MONSTER_IMAGE_DIR}" ]; then"#)?;
	writeln!(w, "\tmkdir -p {MONSTER_IMAGE_DIR}")?;
	for sheet in &SHEETS {
		writeln!(w, "\t# {}", sheet.title)?;
		writeln!(w, "\techo \"Generating {} graphics.\"", sheet.title)?;
		sheet.writeMontage(w)?;
	}
	writeln!(w, "fi")
}
