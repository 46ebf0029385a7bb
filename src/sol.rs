//! Solidity tables (`<dtype>.sol`), one flag byte per dungeon piece.

use {
	crate::{DungeonType, Error, Result},
	std::{fs, path::Path},
};

pub const SOL_BLOCK_WALK: u8 = 0x01;
pub const SOL_LIGHT: u8 = 0x02;
pub const SOL_BLOCK_MISSILE: u8 = 0x04;
pub const SOL_TRANSPARENT: u8 = 0x08;
pub const SOL_SW_WALL: u8 = 0x10;
pub const SOL_SE_WALL: u8 = 0x20;
pub const SOL_FIT_SHRINE: u8 = 0x80;

/// Collision classes understood by the collision tileset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Collision {
	None = 0,
	/// block all
	BlocksAll = 1,
	/// block movement
	BlocksMovement = 2,
	/// block all (not visible on mini map)
	BlocksAllHidden = 3,
	/// block movement (not visible on mini map)
	BlocksMovementHidden = 4,
}

pub struct SolTable {
	pub dtype: DungeonType,
	pub flags: Vec<u8>,
}

impl SolTable {
	pub fn load(mpqDir: &Path, dtype: DungeonType) -> Result<Self> {
		let path = dtype.solPath(mpqDir);
		let flags = fs::read(&path).map_err(Error::io(path))?;
		Ok(Self { dtype, flags })
	}

	/// Number of dungeon pieces contained within `<dtype>.min`.
	pub fn ndpieces(&self) -> usize {
		self.flags.len()
	}

	pub fn flagsOf(&self, dpieceID: i32) -> Result<u8> {
		usize::try_from(dpieceID)
			.ok()
			.and_then(|id| id.checked_sub(1))
			.and_then(|i| self.flags.get(i).copied())
			.ok_or(Error::DPieceOutOfRange { dpieceID, ndpieces: self.ndpieces() })
	}

	pub fn collision(&self, dpieceID: i32) -> Result<Collision> {
		if dpieceID == 0 {
			// TODO: derive the collision of empty cels from their neighbours.
			return Ok(Collision::BlocksAll);
		}
		if isDoor(dpieceID) {
			// Doors become interactable objects with collisions of their own.
			// The IDs are those of l1 and apply to every dungeon type.
			return Ok(Collision::None);
		}
		let flags = self.flagsOf(dpieceID)?;
		Ok(if flags & SOL_BLOCK_WALK != 0 {
			Collision::BlocksAll
		} else if flags & SOL_BLOCK_MISSILE != 0 {
			Collision::BlocksMovement
		} else {
			Collision::None
		})
	}
}

pub fn isDoor(dpieceID: i32) -> bool {
	matches!(dpieceID, 44 | 46 | 51 | 56 | 214 | 393 | 395 | 408)
}
