mod animation;
mod image;
mod light;
mod material;
mod mesh;
mod scene;
mod skin;
mod texture;

use std::fmt;

use bitflags::bitflags;
use serde::Deserialize;

/// Animation record types.
pub use animation::{AnimationData, AnimationTrackData, AnimationTrackTarget, AnimationValueType, Extrapolation, Interpolation};
/// Image record types.
pub use image::{CompressedPixelFormat, ImageData, ImageFlags, ImageFormat, PixelFormat};
/// Light record types.
pub use light::{LightData, LightType};
pub(crate) use material::LAYER_NAME;
/// Material record types.
pub use material::{MaterialAttributeData, MaterialData, MaterialLayerData, MaterialTextureSwizzle, MaterialTypes, MaterialValue};
/// Mesh record types.
pub use mesh::{MeshAttribute, MeshAttributeData, MeshData, MeshIndexData, MeshIndexType, MeshPrimitive, VertexComponent, VertexFormat};
/// Scene record types.
pub use scene::{SceneData, SceneDimensions, SceneField, SceneFieldData, SceneFieldFlags, SceneFieldType, SceneMappingType};
/// Skin record type.
pub use skin::SkinData;
/// Texture record types.
pub use texture::{SamplerFilter, SamplerMipmap, SamplerWrapping, TextureData, TextureType};

/// Top-level record group of an asset. Each category has its own 0-based id space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum Category {
	/// Scene graphs mapping objects to fields.
	Scene,
	/// Objects referenced by scene fields. Objects carry names only.
	Object,
	/// Keyframe animations.
	Animation,
	/// Skins for 2D scenes.
	Skin2D,
	/// Skins for 3D scenes.
	Skin3D,
	/// Light sources.
	Light,
	/// Materials.
	Material,
	/// Meshes, each with one or more levels.
	Mesh,
	/// Textures referencing images.
	Texture,
	/// One-dimensional images.
	Image1D,
	/// Two-dimensional images.
	Image2D,
	/// Three-dimensional images.
	Image3D,
}

impl Category {
	/// All categories in report order.
	pub const ALL: [Category; 12] = [
		Category::Scene,
		Category::Object,
		Category::Animation,
		Category::Skin2D,
		Category::Skin3D,
		Category::Light,
		Category::Material,
		Category::Mesh,
		Category::Texture,
		Category::Image1D,
		Category::Image2D,
		Category::Image3D,
	];

	/// Tag used at the start of report lines.
	pub fn label(self) -> &'static str {
		match self {
			Category::Scene => "Scene",
			Category::Object => "Object",
			Category::Animation => "Animation",
			Category::Skin2D => "2D skin",
			Category::Skin3D => "3D skin",
			Category::Light => "Light",
			Category::Material => "Material",
			Category::Mesh => "Mesh",
			Category::Texture => "Texture",
			Category::Image1D => "1D image",
			Category::Image2D => "2D image",
			Category::Image3D => "3D image",
		}
	}

	/// Whether records of this category are fetched per level.
	pub fn has_levels(self) -> bool {
		matches!(self, Category::Mesh | Category::Image1D | Category::Image2D | Category::Image3D)
	}

	/// Category whose records reference ids of this category, if any.
	pub fn referenced_from(self) -> Option<Category> {
		match self {
			Category::Object | Category::Mesh | Category::Light | Category::Material | Category::Skin2D | Category::Skin3D => Some(Category::Scene),
			Category::Texture => Some(Category::Material),
			Category::Image1D | Category::Image2D | Category::Image3D => Some(Category::Texture),
			Category::Scene | Category::Animation => None,
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

bitflags! {
	/// Ownership and mutability of a record's backing storage.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
	#[serde(transparent)]
	pub struct DataFlags: u8 {
		/// Data is owned by the record.
		const OWNED = 1 << 0;
		/// Data is owned by the source and only borrowed.
		const EXTERNALLY_OWNED = 1 << 1;
		/// Data lives for the whole program.
		const GLOBAL = 1 << 2;
		/// Data may be modified in place.
		const MUTABLE = 1 << 3;
	}
}
