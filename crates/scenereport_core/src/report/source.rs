use bitflags::bitflags;
use thiserror::Error;

use crate::report::data::{AnimationData, Category, ImageData, LightData, MaterialData, MeshData, SceneData, SkinData, TextureData};

/// Retrieval failure for one record id or level.
///
/// The message is the source's own diagnostic and is forwarded to the report's
/// diagnostics sink unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
	/// Diagnostic text emitted for this failure.
	pub message: String,
}

impl FetchError {
	/// Failure with a source-provided message.
	pub fn new(message: impl Into<String>) -> Self {
		Self { message: message.into() }
	}

	/// Failure for a category the source never provides records for.
	pub fn unsupported(category: Category, id: u32) -> Self {
		Self::new(format!("{} {id} is not supported by this source", category.label()))
	}
}

/// Fetch outcome alias.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

bitflags! {
	/// Category families a source can provide at all.
	///
	/// A missing family is skipped entirely, which differs from a supported family with zero records.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
	pub struct SourceFeatures: u16 {
		/// Scenes and objects.
		const SCENES = 1 << 0;
		/// Animations.
		const ANIMATIONS = 1 << 1;
		/// 2D and 3D skins.
		const SKINS = 1 << 2;
		/// Lights.
		const LIGHTS = 1 << 3;
		/// Materials.
		const MATERIALS = 1 << 4;
		/// Meshes.
		const MESHES = 1 << 5;
		/// Textures.
		const TEXTURES = 1 << 6;
		/// 1D, 2D and 3D images.
		const IMAGES = 1 << 7;
	}
}

impl SourceFeatures {
	/// Feature bit gating a category.
	pub fn for_category(category: Category) -> Self {
		match category {
			Category::Scene | Category::Object => SourceFeatures::SCENES,
			Category::Animation => SourceFeatures::ANIMATIONS,
			Category::Skin2D | Category::Skin3D => SourceFeatures::SKINS,
			Category::Light => SourceFeatures::LIGHTS,
			Category::Material => SourceFeatures::MATERIALS,
			Category::Mesh => SourceFeatures::MESHES,
			Category::Texture => SourceFeatures::TEXTURES,
			Category::Image1D | Category::Image2D | Category::Image3D => SourceFeatures::IMAGES,
		}
	}

	/// Whether the source provides the given category.
	pub fn supports(self, category: Category) -> bool {
		self.contains(Self::for_category(category))
	}
}

/// Already-opened asset exposing its records per category.
///
/// Every method has a default so a source implements only the categories it
/// has: counts default to zero, names to none and fetches to a failure. The
/// report never issues overlapping calls and never retries a failed fetch.
pub trait RecordSource {
	/// Category families this source provides.
	fn features(&self) -> SourceFeatures {
		SourceFeatures::all()
	}

	/// Number of records in a category.
	fn count(&mut self, _category: Category) -> u64 {
		0
	}

	/// Number of levels of a mesh or image record.
	fn level_count(&mut self, _category: Category, _id: u32) -> u32 {
		1
	}

	/// Display name of a record. An empty string counts as unnamed.
	fn name(&mut self, _category: Category, _id: u64) -> Option<String> {
		None
	}

	/// Smallest id at or after `from` that may carry a name.
	///
	/// The default yields every id below `count`. Sources holding a name index
	/// should skip unnamed ids so large sparse categories stay cheap.
	fn next_named_id(&mut self, category: Category, from: u64) -> Option<u64> {
		(from < self.count(category)).then_some(from)
	}

	/// Name registered for a custom scene field id.
	fn scene_field_name(&mut self, _id: u32) -> Option<String> {
		None
	}

	/// Name registered for a custom mesh attribute id.
	fn mesh_attribute_name(&mut self, _id: u16) -> Option<String> {
		None
	}

	/// Name registered for a custom animation track target id.
	fn animation_target_name(&mut self, _id: u32) -> Option<String> {
		None
	}

	/// Fetch a scene.
	fn scene(&mut self, id: u32) -> FetchResult<SceneData> {
		Err(FetchError::unsupported(Category::Scene, id))
	}

	/// Fetch an animation.
	fn animation(&mut self, id: u32) -> FetchResult<AnimationData> {
		Err(FetchError::unsupported(Category::Animation, id))
	}

	/// Fetch a 2D skin.
	fn skin_2d(&mut self, id: u32) -> FetchResult<SkinData> {
		Err(FetchError::unsupported(Category::Skin2D, id))
	}

	/// Fetch a 3D skin.
	fn skin_3d(&mut self, id: u32) -> FetchResult<SkinData> {
		Err(FetchError::unsupported(Category::Skin3D, id))
	}

	/// Fetch a light.
	fn light(&mut self, id: u32) -> FetchResult<LightData> {
		Err(FetchError::unsupported(Category::Light, id))
	}

	/// Fetch a material.
	fn material(&mut self, id: u32) -> FetchResult<MaterialData> {
		Err(FetchError::unsupported(Category::Material, id))
	}

	/// Fetch one level of a mesh.
	fn mesh(&mut self, id: u32, _level: u32) -> FetchResult<MeshData> {
		Err(FetchError::unsupported(Category::Mesh, id))
	}

	/// Fetch a texture.
	fn texture(&mut self, id: u32) -> FetchResult<TextureData> {
		Err(FetchError::unsupported(Category::Texture, id))
	}

	/// Fetch one level of a 1D image.
	fn image_1d(&mut self, id: u32, _level: u32) -> FetchResult<ImageData> {
		Err(FetchError::unsupported(Category::Image1D, id))
	}

	/// Fetch one level of a 2D image.
	fn image_2d(&mut self, id: u32, _level: u32) -> FetchResult<ImageData> {
		Err(FetchError::unsupported(Category::Image2D, id))
	}

	/// Fetch one level of a 3D image.
	fn image_3d(&mut self, id: u32, _level: u32) -> FetchResult<ImageData> {
		Err(FetchError::unsupported(Category::Image3D, id))
	}
}
