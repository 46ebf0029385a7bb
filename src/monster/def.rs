//! Flare enemy and animation definitions of a monster.

use {
	super::{Action, MonsterData},
	crate::{Error, Result},
	std::{
		fs::{self, File},
		io::{self, BufWriter, Write},
		path::Path,
	},
};

pub const DEF_MELEE_RANGE: f32 = 1.2;
pub const DEF_THREAT_RANGE: f32 = 600.0;

/// The game runs at 20 frames per second.
const FRAME_DURATION_MS: i32 = 50;
const FRAME_HEIGHT: i32 = 96;

pub struct Definitions<'a> {
	monster: &'a MonsterData,
	name: String,
}

impl<'a> Definitions<'a> {
	pub fn new(monster: &'a MonsterData) -> Self {
		Self { monster, name: monster.fileName() }
	}

	/// `enemies/base/<name>.txt`: sounds and animations shared by the variants.
	pub fn writeBase(&self, w: &mut impl Write) -> io::Result<()> {
		let name = &self.name;
		writeln!(w, "sfx_attack=swing,sounds/monster/{name}_attack_1.ogg")?;
		if self.monster.hasSpecialSound {
			writeln!(w, "sfx_attack=shoot,sounds/monster/{name}_special_1.ogg")?;
			writeln!(w, "sfx_attack=cast,sounds/monster/{name}_special_1.ogg")?;
		}
		writeln!(w, "sfx_block=soundfx/powers/block.ogg")?;
		writeln!(w, "sfx_hit=sounds/monster/{name}_hit_1.ogg")?;
		writeln!(w, "sfx_die=sounds/monster/{name}_die_1.ogg")?;
		writeln!(w)?;
		writeln!(w, "animations=animations/monster/{name}.txt")?;
		writeln!(w)?;
		writeln!(w, "melee_range={DEF_MELEE_RANGE:.1}")?;
		writeln!(w, "threat_range={DEF_THREAT_RANGE:.1}")
	}

	/// `enemies/<name>.txt`
	pub fn writeEnemy(&self, w: &mut impl Write) -> io::Result<()> {
		let (name, monster) = (&self.name, self.monster);
		writeln!(w, "INCLUDE enemies/base/{name}.txt")?;
		writeln!(w)?;
		writeln!(w, "name={}", monster.name)?;
		writeln!(w, "level={}", monster.level)?;
		writeln!(w, "categories={name},dungeon")?;
		writeln!(w, "rarity=common")?;
		writeln!(w, "xp={}", monster.exp)?;
		writeln!(w)?;
		writeln!(w, "# combat stats")?;
		writeln!(w, "stat=hp,{}", monster.minHP + (monster.maxHP - monster.minHP) / 2)?;
		// TODO: derive speed from the animation rates.
		writeln!(w, "speed=2")?;
		writeln!(w, "turn_delay=400ms")?;
		writeln!(w, "chance_pursue=10")?;
		writeln!(w)?;
		writeln!(w, "power=melee,1,2")?;
		writeln!(w, "power=ranged,32,2")?;
		writeln!(w)?;
		writeln!(w, "stat=accuracy,69")?;
		writeln!(w, "stat=avoidance,19")?;
		writeln!(w)?;
		writeln!(w, "stat=dmg_melee_min,{}", monster.minDamage)?;
		writeln!(w, "stat=dmg_melee_max,{}", monster.maxDamage)?;
		if monster.hasSpecialGraphic && monster.minDamageSpecial != 0 {
			writeln!(w, "stat=dmg_ranged_min,{}", monster.minDamageSpecial)?;
			writeln!(w, "stat=dmg_ranged_max,{}", monster.maxDamageSpecial)?;
		}
		writeln!(w, "cooldown=1s")?;
		writeln!(w)?;
		writeln!(w, "# loot")?;
		writeln!(w, "loot=loot/leveled_low.txt")
	}

	/// `animations/monster/<name>.txt`; sections follow the frame order of the sprite sheet.
	pub fn writeAnimation(&self, w: &mut impl Write) -> io::Result<()> {
		let monster = self.monster;
		writeln!(w, "image=images/monster/{}.png", self.name)?;
		writeln!(w, "render_size={},{FRAME_HEIGHT}", monster.width)?;
		writeln!(w, "render_offset={},{}", monster.width / 2, FRAME_HEIGHT - 16)?;
		writeln!(w)?;
		let mut sections = vec![
			(Action::Stand, "stance", "back_forth"),
			(Action::Walk, "run", "looped"),
			(Action::Attack, "swing", "play_once"),
			(Action::Hit, "hit", "play_once"),
			(Action::Die, "die", "play_once"),
		];
		if monster.hasSpecialGraphic {
			sections.push((Action::Special, "shoot", "play_once"));
		}
		let mut position = 0;
		for (action, section, kind) in sections {
			let nframes = monster.nframesOf(action);
			writeln!(w, "[{section}]")?;
			writeln!(w, "position={position}")?;
			writeln!(w, "frames={nframes}")?;
			writeln!(w, "duration={}ms", FRAME_DURATION_MS * nframes)?;
			writeln!(w, "type={kind}")?;
			position += nframes;
		}
		Ok(())
	}

	/// Writes the three definition files below `modDir`.
	pub fn save(&self, modDir: &Path) -> Result<()> {
		let files: [(&str, fn(&Self, &mut BufWriter<File>) -> io::Result<()>); 3] = [
			("enemies/base", Self::writeBase),
			("enemies", Self::writeEnemy),
			("animations/monster", Self::writeAnimation),
		];
		for (dir, write) in files {
			let dir = modDir.join(dir);
			fs::create_dir_all(&dir).map_err(Error::io(&dir))?;
			let path = dir.join(format!("{}.txt", self.name));
			log::debug!("writing {path:?}.");
			let file = &mut BufWriter::new(File::create(&path).map_err(Error::io(&path))?);
			write(self, file).and_then(|()| file.flush()).map_err(Error::io(&path))?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use {super::*, crate::monster::monster};

	fn acid() -> MonsterData {
		let mut acid = monster("Spitting Terror", r"Monsters\Acid\Acid%c.CL2");
		acid.hasSpecialGraphic = true;
		acid.hasSpecialSound = true;
		acid.nframes = [13, 8, 12, 8, 24, 12];
		acid.minHP = 60;
		acid.maxHP = 85;
		acid.minDamageSpecial = 4;
		acid.maxDamageSpecial = 12;
		acid
	}

	fn text(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
		let out = &mut Vec::new();
		write(out).unwrap();
		String::from_utf8(out.clone()).unwrap()
	}

	#[test]
	fn baseDefinitionWithSpecialSound() {
		let acid = acid();
		let def = Definitions::new(&acid);
		assert_eq!(
			text(|w| def.writeBase(w)),
			"sfx_attack=swing,sounds/monster/spitting_terror_attack_1.ogg
sfx_attack=shoot,sounds/monster/spitting_terror_special_1.ogg
sfx_attack=cast,sounds/monster/spitting_terror_special_1.ogg
sfx_block=soundfx/powers/block.ogg
sfx_hit=sounds/monster/spitting_terror_hit_1.ogg
sfx_die=sounds/monster/spitting_terror_die_1.ogg

animations=animations/monster/spitting_terror.txt

melee_range=1.2
threat_range=600.0
"
		);
	}

	#[test]
	fn enemyDefinitionWithRangedDamage() {
		let acid = acid();
		let enemy = text(|w| Definitions::new(&acid).writeEnemy(w));
		assert!(enemy.starts_with("INCLUDE enemies/base/spitting_terror.txt\n\nname=Spitting Terror\nlevel=1\n"));
		assert!(enemy.contains("categories=spitting_terror,dungeon\nrarity=common\nxp=54\n"));
		assert!(enemy.contains("stat=hp,72\n"));
		assert!(enemy.contains(
			"stat=dmg_melee_min,2\nstat=dmg_melee_max,5\nstat=dmg_ranged_min,4\nstat=dmg_ranged_max,12\ncooldown=1s\n"
		));
		assert!(enemy.ends_with("\n# loot\nloot=loot/leveled_low.txt\n"));
	}

	#[test]
	fn meleeOnlyEnemyOmitsRangedDamage() {
		let zombie = monster("Zombie", r"Monsters\Zombie\Zombie%c.CL2");
		let enemy = text(|w| Definitions::new(&zombie).writeEnemy(w));
		assert!(enemy.contains("stat=hp,5\n"));
		assert!(!enemy.contains("dmg_ranged"));
	}

	#[test]
	fn animationSectionsAccumulatePositions() {
		let acid = acid();
		let animation = text(|w| Definitions::new(&acid).writeAnimation(w));
		let expected = "image=images/monster/spitting_terror.png
render_size=128,96
render_offset=64,80

[stance]
position=0
frames=13
duration=650ms
type=back_forth
[run]
position=13
frames=8
duration=400ms
type=looped
[swing]
position=21
frames=12
duration=600ms
type=play_once
[hit]
position=33
frames=8
duration=400ms
type=play_once
[die]
position=41
frames=24
duration=1200ms
type=play_once
[shoot]
position=65
frames=12
duration=600ms
type=play_once
";
		assert_eq!(animation, expected);
	}

	#[test]
	fn savesIntoModDirectory() {
		let dir = tempfile::tempdir().unwrap();
		let zombie = monster("Zombie", r"Monsters\Zombie\Zombie%c.CL2");
		Definitions::new(&zombie).save(dir.path()).unwrap();
		for path in ["enemies/base/zombie.txt", "enemies/zombie.txt", "animations/monster/zombie.txt"] {
			assert!(dir.path().join(path).is_file(), "{path}");
		}
		let animation = fs::read_to_string(dir.path().join("animations/monster/zombie.txt")).unwrap();
		assert!(!animation.contains("[shoot]"));
	}
}
