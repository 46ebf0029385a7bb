use {
	crate::{Error, Result},
	glam::Vec4,
	png::{BitDepth, ColorType, Transformations},
	std::{
		fs::File,
		io::{BufReader, BufWriter},
		path::Path,
	},
};

pub const RGBA_SIZE: usize = 4;

/// RGBA8 pixels, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
	pub width: usize,
	pub height: usize,
	pub data: Vec<u8>,
}

impl Image {
	pub fn fromWidthHeight(width: usize, height: usize) -> Self {
		Self { width, height, data: vec![0; width * height * RGBA_SIZE] }
	}

	pub fn readPNG(path: &Path) -> Result<Self> {
		let decodeError = |source| Error::PngDecode { path: path.to_owned(), source };
		let mut png = png::Decoder::new(BufReader::new(File::open(path).map_err(Error::io(path))?));
		png.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
		let png = &mut png.read_info().map_err(decodeError)?;
		let mut buffer = vec![0; png.output_buffer_size()];
		let info = png.next_frame(&mut buffer).map_err(decodeError)?;
		buffer.truncate(info.buffer_size());
		let (width, height) = (info.width as usize, info.height as usize);
		let data = match info.color_type {
			ColorType::Rgba => buffer,
			ColorType::Rgb => buffer.chunks_exact(3).flat_map(|rgb| [rgb[0], rgb[1], rgb[2], u8::MAX]).collect(),
			ColorType::GrayscaleAlpha => buffer.chunks_exact(2).flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]]).collect(),
			ColorType::Grayscale => buffer.iter().flat_map(|&g| [g, g, g, u8::MAX]).collect(),
			// EXPAND turns palettes into RGB(A).
			ColorType::Indexed => unreachable!(),
		};
		Ok(Self { width, height, data })
	}

	pub fn writePNG(&self, path: &Path) -> Result<()> {
		let encodeError = |source| Error::PngEncode { path: path.to_owned(), source };
		let mut png = png::Encoder::new(
			BufWriter::new(File::create(path).map_err(Error::io(path))?),
			self.width as _,
			self.height as _,
		);
		png.set_color(ColorType::Rgba);
		png.set_depth(BitDepth::Eight);
		png.write_header().map_err(encodeError)?.write_image_data(&self.data).map_err(encodeError)
	}

	pub fn pixel(&self, x: usize, y: usize) -> [u8; RGBA_SIZE] {
		let i = (y * self.width + x) * RGBA_SIZE;
		[self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
	}

	pub fn setPixel(&mut self, x: usize, y: usize, rgba: [u8; RGBA_SIZE]) {
		let i = (y * self.width + x) * RGBA_SIZE;
		self.data[i..i + RGBA_SIZE].copy_from_slice(&rgba);
	}

	/// Porter-Duff "over" of `src` placed at the origin, clipped to `self`.
	pub fn drawOver(&mut self, src: &Image) {
		for y in 0..self.height.min(src.height) {
			for x in 0..self.width.min(src.width) {
				let [s, d] = [src.pixel(x, y), self.pixel(x, y)].map(|rgba| Vec4::from_array(rgba.map(f32::from)) / 255.0);
				if s.w == 0.0 {
					continue;
				}
				let outAlpha = s.w + d.w * (1.0 - s.w);
				let rgb = (s.truncate() * s.w + d.truncate() * d.w * (1.0 - s.w)) / outAlpha;
				let out = (rgb.extend(outAlpha) * 255.0).round().to_array().map(|c| c.clamp(0.0, 255.0) as u8);
				self.setPixel(x, y, out);
			}
		}
	}

	/// Blits `src` with its top-left corner at `destPoint`.
	pub fn blit(&mut self, destPoint: [usize; 2], src: &Image) {
		let [x0, y0] = destPoint;
		for y in 0..src.height.min(self.height.saturating_sub(y0)) {
			let rowLen = src.width.min(self.width.saturating_sub(x0)) * RGBA_SIZE;
			let [i, j] = [((y0 + y) * self.width + x0) * RGBA_SIZE, y * src.width * RGBA_SIZE];
			self.data[i..i + rowLen].copy_from_slice(&src.data[j..j + rowLen]);
		}
	}
}

/// A `width`×`height` image painted `rgb` wherever `mask` has non-zero alpha.
pub fn tinted(mask: &Image, rgb: [u8; 3], width: usize, height: usize) -> Image {
	let mut image = Image::fromWidthHeight(width, height);
	for y in 0..height.min(mask.height) {
		for x in 0..width.min(mask.width) {
			if mask.pixel(x, y)[3] != 0 {
				image.setPixel(x, y, [rgb[0], rgb[1], rgb[2], u8::MAX]);
			}
		}
	}
	image
}
