//! Arches are drawn separately from the dungeon pieces they belong to; the
//! floor shadow under an arch identifies which arch goes on top of it.

use crate::DungeonType;

pub const ARCH_NONE: u32 = 0;

// Arch IDs for layout 1, i.e. frame numbers within l1s.cel.
pub const L1_ARCH_SW: u32 = 1;
pub const L1_ARCH_SE: u32 = 2;
pub const L1_ARCH_SE_BROKEN: u32 = 3;
pub const L1_ARCH_SW_BROKEN_2: u32 = 4;
pub const L1_ARCH_SW_2: u32 = 5;
pub const L1_ARCH_SW_BROKEN: u32 = 6;
pub const L1_ARCH_SW_DOOR: u32 = 7;
pub const L1_ARCH_SE_DOOR: u32 = 8;

/// Returns the arch ID of the given dungeon piece, or [`ARCH_NONE`].
pub fn archID(dtype: DungeonType, dpieceID: u32) -> u32 {
	match dtype {
		DungeonType::L1 => l1ArchID(dpieceID),
		// TODO: resolve the arches of layout 2 and the town (l2s.cel, towns.cel).
		DungeonType::L2 | DungeonType::Town => ARCH_NONE,
		// layouts 3 and 4 have no arches.
		DungeonType::L3 | DungeonType::L4 => ARCH_NONE,
	}
}

// ref: 46E9E2
fn l1ArchID(dpieceID: u32) -> u32 {
	// floor shadows
	const SW: [u32; 6] = [12, 71, 211, 321, 341, 418];
	const SE: [u32; 6] = [11, 249, 325, 331, 344, 421];
	const SW_BROKEN_2: u32 = 255;
	const SW_2: u32 = 259;
	match dpieceID {
		id if SW.contains(&id) => L1_ARCH_SW,
		id if SE.contains(&id) => L1_ARCH_SE,
		SW_BROKEN_2 => L1_ARCH_SW_BROKEN_2,
		SW_2 => L1_ARCH_SW_2,
		_ => ARCH_NONE,
	}
}
