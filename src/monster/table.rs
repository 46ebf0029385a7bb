use {
	super::MonsterData,
	crate::{pe::Executable, Error, Result},
	byteorder::{ReadBytesExt, LE},
	memchr::memmem,
	serde::Deserialize,
	std::{
		fs,
		io::{self, Read},
		path::Path,
	},
};

pub const MONSTER_DATA_SIZE: usize = 128;

/// Upper bound on the records read when the layout leaves the count open.
const MAX_MONSTERS: usize = 128;

/// The first record of the table refers to this graphic.
const FIRST_CL2_PATHS: [&[u8]; 2] = [br"Monsters\Zombie\Zombie%c.CL2", br"monsters\zombie\zombie%c.cl2"];

/// Where the monster table lives within a given build of the executable.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Layout {
	/// Virtual address of the first record; located by signature when absent.
	pub monsterDataAddress: Option<u32>,
	/// Number of records; read until the first invalid record when absent.
	pub numMonsters: Option<usize>,
}

impl Layout {
	pub fn load(path: &Path) -> Result<Self> {
		let text = fs::read_to_string(path).map_err(Error::io(path))?;
		toml::from_str(&text).map_err(|source| Error::Layout { path: path.to_owned(), source })
	}
}

/// Parses the monster data table of `exe`.
pub fn parseMonsters(exe: &Executable, layout: &Layout) -> Result<Vec<MonsterData>> {
	let start = match layout.monsterDataAddress {
		Some(va) => va,
		None => locateTable(exe).ok_or(Error::MonsterTableNotFound)?,
	};
	let mut monsters = Vec::new();
	for i in 0..layout.numMonsters.unwrap_or(MAX_MONSTERS) {
		let va = start + (i * MONSTER_DATA_SIZE) as u32;
		match (parseRecord(exe, va), layout.numMonsters) {
			(Ok(monster), _) => monsters.push(monster),
			// An explicit count makes every record mandatory.
			(Err(err), Some(_)) => return Err(err),
			(Err(_), None) => break,
		}
	}
	if monsters.is_empty() {
		return Err(Error::MonsterTableNotFound);
	}
	Ok(monsters)
}

/// Virtual address of the first record, i.e. the one pointing at the Zombie graphics.
fn locateTable(exe: &Executable) -> Option<u32> {
	const CL2_PATH_FIELD: usize = 8;
	FIRST_CL2_PATHS.iter().find_map(|needle| {
		let stringVA = memmem::find_iter(&exe.data, needle)
			.filter(|&offset| exe.data.get(offset + needle.len()) == Some(&0))
			.find_map(|offset| exe.vaOf(offset))?;
		memmem::find_iter(&exe.data, &stringVA.to_le_bytes())
			.filter_map(|offset| offset.checked_sub(CL2_PATH_FIELD))
			.filter_map(|offset| exe.vaOf(offset))
			.find(|&va| parseRecord(exe, va).is_ok())
	})
}

fn parseRecord(exe: &Executable, va: u32) -> Result<MonsterData> {
	let record = exe.bytesAt(va)?.get(..MONSTER_DATA_SIZE).ok_or(Error::UnmappedAddress(va))?;
	let cursor = &mut io::Cursor::new(record);
	let string = |va: u32| exe.cString(va);
	let bool32 = |cursor: &mut io::Cursor<&[u8]>| cursor.read_u32::<LE>().map(|v| v != 0);

	let width = cursor.read_i32::<LE>()?;
	let image = cursor.read_i32::<LE>()?;
	let cl2Path = string(cursor.read_u32::<LE>()?)?;
	let hasSpecialGraphic = bool32(cursor)?;
	let wavPath = string(cursor.read_u32::<LE>()?)?;
	let hasSpecialSound = bool32(cursor)?;
	let hasTrn = bool32(cursor)?;
	let trnPath = match cursor.read_u32::<LE>()? {
		0 => None,
		va => Some(string(va)?),
	};
	let mut nframes = [0; 6];
	cursor.read_i32_into::<LE>(&mut nframes)?;
	let mut rates = [0; 6];
	cursor.read_i32_into::<LE>(&mut rates)?;
	let name = string(cursor.read_u32::<LE>()?)?;
	let minDungeonLevel = cursor.read_i8()?;
	let maxDungeonLevel = cursor.read_i8()?;
	let level = cursor.read_i8()?;
	skip(cursor, 1)?;
	let minHP = cursor.read_i32::<LE>()?;
	let maxHP = cursor.read_i32::<LE>()?;
	let ai = cursor.read_i8()?;
	skip(cursor, 3)?;
	let flags = cursor.read_i32::<LE>()?;
	let [intelligence, hit, attackFrame, minDamage, maxDamage, hitSpecial, attackFrameSpecial, minDamageSpecial, maxDamageSpecial, armourClass] = {
		let mut bytes = [0; 10];
		cursor.read_exact(&mut bytes)?;
		bytes
	};
	let class = cursor.read_i8()?;
	skip(cursor, 1)?;
	let magicResistance = cursor.read_u16::<LE>()?;
	let magicResistanceHell = cursor.read_u16::<LE>()?;
	let treasure = cursor.read_u16::<LE>()?;
	let selectionFlag = cursor.read_i8()?;
	skip(cursor, 1)?;
	let exp = cursor.read_u16::<LE>()?;

	if !(1..=512).contains(&width) || nframes.iter().chain(&rates).any(|n| !(0..=64).contains(n)) {
		return Err(Error::MalformedExe("monster record out of range"));
	}
	Ok(MonsterData {
		width,
		image,
		cl2Path,
		hasSpecialGraphic,
		wavPath,
		hasSpecialSound,
		hasTrn,
		trnPath,
		nframes,
		rates,
		name,
		minDungeonLevel,
		maxDungeonLevel,
		level,
		minHP,
		maxHP,
		ai,
		flags,
		intelligence,
		hit,
		attackFrame,
		minDamage,
		maxDamage,
		hitSpecial,
		attackFrameSpecial,
		minDamageSpecial,
		maxDamageSpecial,
		armourClass,
		class,
		magicResistance,
		magicResistanceHell,
		treasure,
		selectionFlag,
		exp,
	})
}

fn skip(cursor: &mut io::Cursor<&[u8]>, padding: u64) -> io::Result<()> {
	cursor.set_position(cursor.position() + padding);
	Ok(())
}
