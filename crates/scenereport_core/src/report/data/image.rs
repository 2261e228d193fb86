use std::fmt;

use bitflags::bitflags;
use serde::Deserialize;

use crate::report::data::DataFlags;

/// Uncompressed pixel format.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum PixelFormat {
	R8Unorm,
	RG8Unorm,
	RGB8Unorm,
	RGBA8Unorm,
	R8Snorm,
	RGBA8Snorm,
	R8Srgb,
	RGB8Srgb,
	RGBA8Srgb,
	R8UI,
	RGBA8UI,
	R8I,
	RGBA8I,
	R16Unorm,
	RGBA16Unorm,
	R16UI,
	R16I,
	R32UI,
	R32I,
	R16F,
	RGBA16F,
	R32F,
	RG32F,
	RGB32F,
	RGBA32F,
	Depth16Unorm,
	Depth32F,
	Depth24UnormStencil8UI,
}

impl PixelFormat {
	/// Size of one pixel in bytes.
	pub fn size(self) -> usize {
		match self {
			PixelFormat::R8Unorm | PixelFormat::R8Snorm | PixelFormat::R8Srgb | PixelFormat::R8UI | PixelFormat::R8I => 1,
			PixelFormat::RG8Unorm | PixelFormat::R16Unorm | PixelFormat::R16UI | PixelFormat::R16I | PixelFormat::R16F | PixelFormat::Depth16Unorm => 2,
			PixelFormat::RGB8Unorm | PixelFormat::RGB8Srgb => 3,
			PixelFormat::RGBA8Unorm
			| PixelFormat::RGBA8Snorm
			| PixelFormat::RGBA8Srgb
			| PixelFormat::RGBA8UI
			| PixelFormat::RGBA8I
			| PixelFormat::R32UI
			| PixelFormat::R32I
			| PixelFormat::R32F
			| PixelFormat::Depth32F
			| PixelFormat::Depth24UnormStencil8UI => 4,
			PixelFormat::RGBA16Unorm | PixelFormat::RGBA16F | PixelFormat::RG32F => 8,
			PixelFormat::RGB32F => 12,
			PixelFormat::RGBA32F => 16,
		}
	}
}

/// Block-compressed pixel format.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum CompressedPixelFormat {
	Bc1RGBUnorm,
	Bc1RGBAUnorm,
	Bc3RGBAUnorm,
	Bc4RUnorm,
	Bc5RGUnorm,
	Bc6hRGBUfloat,
	Bc7RGBAUnorm,
	Etc2RGB8Unorm,
	Etc2RGBA8Unorm,
	Astc4x4RGBAUnorm,
	Astc8x8RGBAUnorm,
}

/// Pixel storage of an image level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ImageFormat {
	/// Uncompressed pixels.
	Uncompressed(PixelFormat),
	/// Block-compressed pixels.
	Compressed(CompressedPixelFormat),
}

impl fmt::Display for ImageFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ImageFormat::Uncompressed(format) => fmt::Debug::fmt(format, f),
			ImageFormat::Compressed(format) => write!(f, "{format:?} (compressed)"),
		}
	}
}

bitflags! {
	/// Interpretation of the image's dimensions.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
	#[serde(transparent)]
	pub struct ImageFlags: u8 {
		/// Last dimension enumerates array layers.
		const ARRAY = 1 << 0;
		/// Six faces of a cube map.
		const CUBE_MAP = 1 << 1;
	}
}

/// One level of an image record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageData {
	/// Pixel storage.
	pub format: ImageFormat,
	/// Size per dimension, one to three entries.
	pub size: Vec<u32>,
	/// Layout flags.
	#[serde(default)]
	pub flags: ImageFlags,
	/// Storage flags of the pixel data.
	#[serde(default)]
	pub data_flags: DataFlags,
	/// Size of the pixel data in bytes.
	pub data_size: usize,
}

impl ImageData {
	/// Tightly packed uncompressed image.
	pub fn new(format: PixelFormat, size: Vec<u32>) -> Self {
		let pixels = size.iter().map(|item| *item as usize).product::<usize>();
		Self {
			format: ImageFormat::Uncompressed(format),
			size,
			flags: ImageFlags::empty(),
			data_flags: DataFlags::empty(),
			data_size: pixels * format.size(),
		}
	}
}
