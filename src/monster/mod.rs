//! Monster data of `diablo.exe` and the assets derived from it.

use array_macro::array;

mod def;
mod script;
mod table;

pub use {
	def::{Definitions, DEF_MELEE_RANGE, DEF_THREAT_RANGE},
	script::{graphicsScript, soundsScript},
	table::{parseMonsters, Layout, MONSTER_DATA_SIZE},
};

/// Directions in the row order of a sprite sheet; dumps start facing south.
pub fn montageDirections() -> [usize; 8] {
	array![i => (2 + i) % 8; 8]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
	Stand,
	Walk,
	Attack,
	Hit,
	Die,
	Special,
}
use Action::*;

impl Action {
	/// In the order of [`MonsterData::nframes`].
	pub const ALL: [Action; 6] = [Stand, Walk, Attack, Hit, Die, Special];

	/// The letter substituted for `%c` in graphics and sound paths.
	pub fn rune(self) -> char {
		match self {
			Stand => 'n',
			Walk => 'w',
			Attack => 'a',
			Hit => 'h',
			Die => 'd',
			Special => 's',
		}
	}

	pub fn name(self) -> &'static str {
		match self {
			Stand => "stand",
			Walk => "walk",
			Attack => "attack",
			Hit => "hit",
			Die => "die",
			Special => "special",
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonsterData {
	/// Frame width in pixels.
	pub width: i32,
	pub image: i32,
	/// Path format of the graphics, `%c` being the action rune.
	pub cl2Path: String,
	pub hasSpecialGraphic: bool,
	/// Path format of the sounds, `%c` being the action rune and `%i` the variant.
	pub wavPath: String,
	pub hasSpecialSound: bool,
	pub hasTrn: bool,
	pub trnPath: Option<String>,
	pub nframes: [i32; 6],
	pub rates: [i32; 6],
	pub name: String,
	pub minDungeonLevel: i8,
	pub maxDungeonLevel: i8,
	pub level: i8,
	pub minHP: i32,
	pub maxHP: i32,
	pub ai: i8,
	pub flags: i32,
	pub intelligence: u8,
	pub hit: u8,
	pub attackFrame: u8,
	pub minDamage: u8,
	pub maxDamage: u8,
	pub hitSpecial: u8,
	pub attackFrameSpecial: u8,
	pub minDamageSpecial: u8,
	pub maxDamageSpecial: u8,
	pub armourClass: u8,
	pub class: i8,
	pub magicResistance: u16,
	pub magicResistanceHell: u16,
	pub treasure: u16,
	pub selectionFlag: i8,
	pub exp: u16,
}

impl MonsterData {
	pub fn nframesOf(&self, action: Action) -> i32 {
		self.nframes[action as usize]
	}

	/// Lowercase, slash-separated graphics path of `action`, e.g. `monsters/zombie/zombiea.cl2`.
	pub fn cl2PathOf(&self, action: Action) -> String {
		formatPath(&self.cl2Path, action.rune(), None)
	}

	pub fn wavPathOf(&self, action: Action, variant: u32) -> String {
		formatPath(&self.wavPath, action.rune(), Some(variant))
	}

	/// Directory name of the colour translation, e.g. `bluered.trn/`, or empty.
	pub fn trnDir(&self) -> String {
		match (&self.trnPath, self.hasTrn) {
			(Some(trnPath), true) => {
				let trnPath = normalise(trnPath);
				format!("{}/", trnPath.rsplit('/').next().unwrap_or(&trnPath))
			}
			_ => String::new(),
		}
	}

	/// Unique file name of the monster.
	pub fn fileName(&self) -> String {
		// TODO: let the four kinds of zombies share one set of graphics.
		let name = self.name.to_lowercase().replace(' ', "_");
		let cl2Path = normalise(&self.cl2Path);
		// Resolve monster name collisions.
		const SUFFIXES: [(&str, &str); 6] = [
			("monsters/skelaxe/", "_axe"),
			("monsters/skelbow/", "_bow"),
			("monsters/falspear/", "_spear"),
			("monsters/falsword/", "_sword"),
			("monsters/goatmace/", "_mace"),
			("monsters/goatbow/", "_bow"),
		];
		match SUFFIXES.iter().find(|(dir, _)| cl2Path.starts_with(dir)) {
			Some((_, suffix)) => name + suffix,
			None => name,
		}
	}
}

fn normalise(path: &str) -> String {
	path.to_lowercase().replace('\\', "/")
}

/// Expands the printf-style `%c` and `%i`/`%d` verbs of a game path.
fn formatPath(format: &str, rune: char, variant: Option<u32>) -> String {
	let (format, mut out) = (normalise(format), String::new());
	let mut chars = format.chars();
	while let Some(c) = chars.next() {
		if c != '%' {
			out.push(c);
			continue;
		}
		match chars.next() {
			Some('c') => out.push(rune),
			Some('i' | 'd') => out += &variant.unwrap_or_default().to_string(),
			Some(other) => out.extend(['%', other]),
			None => out.push('%'),
		}
	}
	out
}

#[cfg(test)]
pub(crate) fn monster(name: &str, cl2Path: &str) -> MonsterData {
	MonsterData {
		width: 128,
		cl2Path: cl2Path.into(),
		wavPath: cl2Path.replace("%c.CL2", "%c%i.WAV"),
		nframes: [10, 8, 12, 6, 16, 0],
		name: name.into(),
		level: 1,
		minHP: 4,
		maxHP: 7,
		minDamage: 2,
		maxDamage: 5,
		exp: 54,
		..MonsterData::default()
	}
}
