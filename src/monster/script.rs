//! Shell script fragments converting the graphics and sounds of a monster.

use {
	super::{montageDirections, Action, MonsterData},
	const_format::concatcp,
	std::io::{self, Write},
};

const MOD_DIR: &str = "../mods/tristram";
const IMAGE_DIR: &str = concatcp!(MOD_DIR, "/images/monster");
const SOUND_DIR: &str = concatcp!(MOD_DIR, "/sounds/monster");

/// Graphics missing from `diabdat.mpq`.
const MISSING_GRAPHICS: [&str; 4] = ["Wyrm", "Cave Slug", "Devil Wyrm", "Devourer"];

/// Appends the montage command assembling the sprite sheet of `monster`.
pub fn graphicsScript(monster: &MonsterData, w: &mut impl Write) -> io::Result<()> {
	if MISSING_GRAPHICS.contains(&monster.name.as_str()) {
		log::debug!("skipping graphics of {:?}; not present in diabdat.mpq.", monster.name);
		return Ok(());
	}
	let mut actions = vec![Action::Stand, Action::Walk, Action::Attack, Action::Hit, Action::Die];
	if monster.hasSpecialGraphic {
		actions.push(Action::Special);
	}
	let trnDir = monster.trnDir();
	if !trnDir.is_empty() {
		log::debug!("using colour translation {trnDir:?}.");
	}

	writeln!(w, "echo 'Extracting graphics for {}'", monster.name)?;
	writeln!(w, "montage \\")?;
	for direction in montageDirections() {
		for &action in &actions {
			let cl2Path = monster.cl2PathOf(action);
			let cl2Dir = cl2Path.rsplit_once('.').map_or(cl2Path.as_str(), |(stem, _)| stem);
			match cl2Dir {
				// no walk animation
				"monsters/darkmage/dmagew"
				// special missing from diabdat.mpq
				| "monsters/bigfall/fallgs"
				// no stand or hit animation
				| "monsters/golem/golemn"
				| "monsters/golem/golemh" => continue,
				// Die and special have a single direction.
				"monsters/golem/golemd" | "monsters/golem/golems" => {
					writeln!(w, "\t_dump_/{cl2Dir}/{trnDir}*.png \\")?;
					break;
				}
				_ => {}
			}
			let name = cl2Dir.rsplit('/').next().unwrap_or(cl2Dir);
			writeln!(w, "\t_dump_/{cl2Dir}/{trnDir}{name}_{direction}/*.png \\")?;
		}
	}
	writeln!(w, "\t-gravity south -geometry {}x+0+0 \\", monster.width)?;
	writeln!(w, "\t-tile x8 \\")?;
	writeln!(w, "\t-background none \\")?;
	writeln!(w, "\t{IMAGE_DIR}/{}.png", monster.fileName())
}

/// Appends the ffmpeg commands converting the sounds of `monster` to Ogg.
pub fn soundsScript(monster: &MonsterData, w: &mut impl Write) -> io::Result<()> {
	let mut actions = vec![Action::Attack, Action::Hit, Action::Die];
	if monster.hasSpecialSound {
		actions.push(Action::Special);
	}
	let fileName = monster.fileName();
	writeln!(w, "echo 'Extracting sounds for {}'", monster.name)?;
	for action in actions {
		for i in 1..=2 {
			writeln!(
				w,
				"ffmpeg -loglevel error -y -i diabdat/{} {SOUND_DIR}/{fileName}_{}_{i}.ogg",
				monster.wavPathOf(action, i),
				action.name(),
			)?;
		}
	}
	writeln!(w)
}
