//! Just enough of the PE32 format to resolve virtual addresses of `diablo.exe`.

use {
	crate::{Error, Result},
	byteorder::{ReadBytesExt, LE},
	memchr::memchr,
	std::io::{self, Seek, SeekFrom},
};

pub struct Section {
	pub name: [u8; 8],
	pub virtualAddress: u32,
	pub virtualSize: u32,
	pub rawSize: u32,
	pub rawPointer: u32,
}

pub struct Executable {
	pub data: Vec<u8>,
	pub imageBase: u32,
	pub sections: Vec<Section>,
}

impl Executable {
	pub fn new(data: Vec<u8>) -> Result<Self> {
		let (imageBase, sections) = parseHeaders(&data).map_err(|err| match err.kind() {
			io::ErrorKind::UnexpectedEof => Error::MalformedExe("truncated headers"),
			_ => Error::Stream(err),
		})??;
		Ok(Self { data, imageBase, sections })
	}

	/// File offset of `va`, if a section holds raw data for it.
	pub fn offsetOf(&self, va: u32) -> Option<usize> {
		let rva = va.checked_sub(self.imageBase)?;
		self.sections.iter().find_map(|section| {
			let delta = rva.checked_sub(section.virtualAddress)?;
			(delta < section.rawSize).then(|| (section.rawPointer + delta) as usize)
		})
	}

	pub fn vaOf(&self, offset: usize) -> Option<u32> {
		let offset = u32::try_from(offset).ok()?;
		self.sections.iter().find_map(|section| {
			let delta = offset.checked_sub(section.rawPointer)?;
			(delta < section.rawSize).then(|| self.imageBase + section.virtualAddress + delta)
		})
	}

	pub fn bytesAt(&self, va: u32) -> Result<&[u8]> {
		self.offsetOf(va).and_then(|offset| self.data.get(offset..)).ok_or(Error::UnmappedAddress(va))
	}

	/// The NUL-terminated string at `va`, decoded as Latin-1.
	pub fn cString(&self, va: u32) -> Result<String> {
		let bytes = self.bytesAt(va)?;
		let len = memchr(0, bytes).ok_or(Error::UnmappedAddress(va))?;
		Ok(bytes[..len].iter().map(|&byte| byte as char).collect())
	}
}

fn parseHeaders(data: &[u8]) -> io::Result<Result<(u32, Vec<Section>)>> {
	const PE32_MAGIC: u16 = 0x10B;
	let cursor = &mut io::Cursor::new(data);
	if cursor.read_u16::<LE>()? != u16::from_le_bytes(*b"MZ") {
		return Ok(Err(Error::MalformedExe("missing MZ signature")));
	}
	cursor.seek(SeekFrom::Start(0x3C))?;
	let peHeaderPointer = cursor.read_u32::<LE>()?;
	cursor.seek(SeekFrom::Start(peHeaderPointer.into()))?;
	if cursor.read_u32::<LE>()? != u32::from_le_bytes(*b"PE\0\0") {
		return Ok(Err(Error::MalformedExe("missing PE signature")));
	}
	// COFF file header
	let _machine = cursor.read_u16::<LE>()?;
	let numSections = cursor.read_u16::<LE>()?;
	cursor.seek(SeekFrom::Current(12))?;
	let optionalHeaderSize = cursor.read_u16::<LE>()?;
	let _characteristics = cursor.read_u16::<LE>()?;
	let optionalHeaderStart = cursor.position();
	if cursor.read_u16::<LE>()? != PE32_MAGIC {
		return Ok(Err(Error::MalformedExe("not a PE32 image")));
	}
	cursor.seek(SeekFrom::Start(optionalHeaderStart + 28))?;
	let imageBase = cursor.read_u32::<LE>()?;
	cursor.seek(SeekFrom::Start(optionalHeaderStart + u64::from(optionalHeaderSize)))?;
	let mut sections = Vec::with_capacity(numSections.into());
	for _ in 0..numSections {
		let mut name = [0; 8];
		io::Read::read_exact(cursor, &mut name)?;
		let virtualSize = cursor.read_u32::<LE>()?;
		let virtualAddress = cursor.read_u32::<LE>()?;
		let rawSize = cursor.read_u32::<LE>()?;
		let rawPointer = cursor.read_u32::<LE>()?;
		cursor.seek(SeekFrom::Current(16))?;
		sections.push(Section { name, virtualAddress, virtualSize, rawSize, rawPointer });
	}
	Ok(Ok((imageBase, sections)))
}
