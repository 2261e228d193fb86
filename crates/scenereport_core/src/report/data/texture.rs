use std::fmt;

use serde::Deserialize;

use crate::report::data::Category;

/// Texture kind, which also selects the image category it samples from.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum TextureType {
	Texture1D,
	Texture1DArray,
	Texture2D,
	Texture2DArray,
	Texture3D,
	CubeMap,
	CubeMapArray,
}

impl TextureType {
	/// Image category the texture's image id indexes into.
	pub fn image_category(self) -> Category {
		match self {
			TextureType::Texture1D => Category::Image1D,
			TextureType::Texture1DArray | TextureType::Texture2D => Category::Image2D,
			TextureType::Texture2DArray | TextureType::Texture3D | TextureType::CubeMap | TextureType::CubeMapArray => Category::Image3D,
		}
	}
}

impl fmt::Display for TextureType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self, f)
	}
}

/// Texel filtering.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum SamplerFilter {
	Nearest,
	Linear,
}

impl fmt::Display for SamplerFilter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self, f)
	}
}

/// Mip level selection.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum SamplerMipmap {
	Base,
	Nearest,
	Linear,
}

impl fmt::Display for SamplerMipmap {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self, f)
	}
}

/// Coordinate wrapping outside `[0, 1]`.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum SamplerWrapping {
	Repeat,
	MirroredRepeat,
	ClampToEdge,
	ClampToBorder,
	MirrorClampToEdge,
}

impl fmt::Display for SamplerWrapping {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self, f)
	}
}

/// Texture record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TextureData {
	/// Texture kind.
	pub texture_type: TextureType,
	/// Minification filter.
	pub minification: SamplerFilter,
	/// Magnification filter.
	pub magnification: SamplerFilter,
	/// Mip level selection.
	pub mipmap: SamplerMipmap,
	/// Wrapping per coordinate.
	pub wrapping: [SamplerWrapping; 3],
	/// Image id in the category selected by the texture type.
	pub image: u32,
}

impl TextureData {
	/// Texture with the same wrapping on all coordinates.
	pub fn new(texture_type: TextureType, minification: SamplerFilter, magnification: SamplerFilter, mipmap: SamplerMipmap, wrapping: SamplerWrapping, image: u32) -> Self {
		Self {
			texture_type,
			minification,
			magnification,
			mipmap,
			wrapping: [wrapping; 3],
			image,
		}
	}
}
