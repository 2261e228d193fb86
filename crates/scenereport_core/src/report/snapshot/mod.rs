use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::report::data::{AnimationData, Category, ImageData, LightData, MaterialData, MeshData, SceneData, SkinData, TextureData};
use crate::report::{FetchError, FetchResult, RecordSource, ReportError, Result, SourceFeatures};

/// Stored outcome of one record level: the record itself or the failure message a fetch reports.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelEntry<T> {
	/// Successfully retrievable record.
	Record(T),
	/// Retrieval fails with this diagnostic.
	Error(String),
}

/// One record id of a category.
///
/// Exactly one of `record`, `error` or `levels` is set. Single-level records use
/// `record` or `error`; meshes and images may list `levels` instead.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct CategoryEntry<T> {
	/// Display name.
	#[serde(default)]
	pub name: Option<String>,
	/// Record of a single-level entry.
	#[serde(default)]
	pub record: Option<T>,
	/// Failure message of a single-level entry.
	#[serde(default)]
	pub error: Option<String>,
	/// Per-level outcomes.
	#[serde(default)]
	pub levels: Vec<LevelEntry<T>>,
}

impl<T: Clone> CategoryEntry<T> {
	fn level_count(&self) -> u32 {
		if self.levels.is_empty() { 1 } else { self.levels.len() as u32 }
	}

	fn level(&self, category: Category, id: u32, level: u32) -> FetchResult<T> {
		if self.levels.is_empty() && level == 0 {
			if let Some(record) = &self.record {
				return Ok(record.clone());
			}
			if let Some(message) = &self.error {
				return Err(FetchError::new(message.clone()));
			}
		}
		match self.levels.get(level as usize) {
			Some(LevelEntry::Record(record)) => Ok(record.clone()),
			Some(LevelEntry::Error(message)) => Err(FetchError::new(message.clone())),
			None => Err(FetchError::new(format!("{} {id} has no level {level}", category.label()))),
		}
	}

	fn validate(&self, category: Category, id: usize) -> Result<()> {
		let forms = usize::from(self.record.is_some()) + usize::from(self.error.is_some()) + usize::from(!self.levels.is_empty());
		if forms != 1 {
			return Err(ReportError::InvalidSnapshot {
				reason: format!("{} {id} must have exactly one of record, error or levels", category.label()),
			});
		}
		if !category.has_levels() && self.levels.len() > 1 {
			return Err(ReportError::InvalidSnapshot {
				reason: format!("{} {id} cannot have multiple levels", category.label()),
			});
		}
		Ok(())
	}
}

/// In-memory asset, usually loaded from a JSON document.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetSnapshot {
	/// Categories the asset does not support at all.
	pub unsupported: Vec<Category>,
	/// Number of objects.
	pub object_count: u64,
	/// Object names by id.
	pub object_names: BTreeMap<u64, String>,
	/// Names of custom scene fields by id.
	pub scene_field_names: BTreeMap<u32, String>,
	/// Names of custom mesh attributes by id.
	pub mesh_attribute_names: BTreeMap<u16, String>,
	/// Names of custom animation track targets by id.
	pub animation_target_names: BTreeMap<u32, String>,
	/// Scenes.
	pub scenes: Vec<CategoryEntry<SceneData>>,
	/// Animations.
	pub animations: Vec<CategoryEntry<AnimationData>>,
	/// 2D skins.
	pub skins_2d: Vec<CategoryEntry<SkinData>>,
	/// 3D skins.
	pub skins_3d: Vec<CategoryEntry<SkinData>>,
	/// Lights.
	pub lights: Vec<CategoryEntry<LightData>>,
	/// Materials.
	pub materials: Vec<CategoryEntry<MaterialData>>,
	/// Meshes.
	pub meshes: Vec<CategoryEntry<MeshData>>,
	/// Textures.
	pub textures: Vec<CategoryEntry<TextureData>>,
	/// 1D images.
	pub images_1d: Vec<CategoryEntry<ImageData>>,
	/// 2D images.
	pub images_2d: Vec<CategoryEntry<ImageData>>,
	/// 3D images.
	pub images_3d: Vec<CategoryEntry<ImageData>>,
}

impl AssetSnapshot {
	/// Parse and validate a JSON snapshot.
	pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
		let snapshot: Self = serde_json::from_slice(bytes)?;
		snapshot.validate()?;
		Ok(snapshot)
	}

	/// Read, parse and validate a JSON snapshot file.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
		let bytes = std::fs::read(path)?;
		Self::from_json_slice(&bytes)
	}

	fn validate(&self) -> Result<()> {
		fn check<T: Clone>(category: Category, entries: &[CategoryEntry<T>]) -> Result<()> {
			entries.iter().enumerate().try_for_each(|(id, entry)| entry.validate(category, id))
		}

		check(Category::Scene, &self.scenes)?;
		check(Category::Animation, &self.animations)?;
		check(Category::Skin2D, &self.skins_2d)?;
		check(Category::Skin3D, &self.skins_3d)?;
		check(Category::Light, &self.lights)?;
		check(Category::Material, &self.materials)?;
		check(Category::Mesh, &self.meshes)?;
		check(Category::Texture, &self.textures)?;
		check(Category::Image1D, &self.images_1d)?;
		check(Category::Image2D, &self.images_2d)?;
		check(Category::Image3D, &self.images_3d)?;

		if let Some(id) = self.object_names.keys().find(|id| **id >= self.object_count) {
			return Err(ReportError::InvalidSnapshot {
				reason: format!("object name given for object {id} but only {} objects exist", self.object_count),
			});
		}
		Ok(())
	}

	/// Name and level count of an id, regardless of record type.
	fn entry_meta(&self, category: Category, id: u32) -> Option<(Option<&str>, u32)> {
		fn meta<T: Clone>(entries: &[CategoryEntry<T>], id: u32) -> Option<(Option<&str>, u32)> {
			entries.get(id as usize).map(|entry| (entry.name.as_deref(), entry.level_count()))
		}

		match category {
			Category::Scene => meta(&self.scenes, id),
			Category::Object => None,
			Category::Animation => meta(&self.animations, id),
			Category::Skin2D => meta(&self.skins_2d, id),
			Category::Skin3D => meta(&self.skins_3d, id),
			Category::Light => meta(&self.lights, id),
			Category::Material => meta(&self.materials, id),
			Category::Mesh => meta(&self.meshes, id),
			Category::Texture => meta(&self.textures, id),
			Category::Image1D => meta(&self.images_1d, id),
			Category::Image2D => meta(&self.images_2d, id),
			Category::Image3D => meta(&self.images_3d, id),
		}
	}

	fn entry_len(&self, category: Category) -> usize {
		match category {
			Category::Scene => self.scenes.len(),
			Category::Object => 0,
			Category::Animation => self.animations.len(),
			Category::Skin2D => self.skins_2d.len(),
			Category::Skin3D => self.skins_3d.len(),
			Category::Light => self.lights.len(),
			Category::Material => self.materials.len(),
			Category::Mesh => self.meshes.len(),
			Category::Texture => self.textures.len(),
			Category::Image1D => self.images_1d.len(),
			Category::Image2D => self.images_2d.len(),
			Category::Image3D => self.images_3d.len(),
		}
	}
}

fn fetch_level<T: Clone>(entries: &[CategoryEntry<T>], category: Category, id: u32, level: u32) -> FetchResult<T> {
	let Some(entry) = entries.get(id as usize) else {
		return Err(FetchError::new(format!("{} {id} does not exist", category.label())));
	};
	entry.level(category, id, level)
}

impl RecordSource for AssetSnapshot {
	fn features(&self) -> SourceFeatures {
		self.unsupported
			.iter()
			.fold(SourceFeatures::all(), |features, category| features.difference(SourceFeatures::for_category(*category)))
	}

	fn count(&mut self, category: Category) -> u64 {
		match category {
			Category::Object => self.object_count,
			_ => self.entry_len(category) as u64,
		}
	}

	fn level_count(&mut self, category: Category, id: u32) -> u32 {
		self.entry_meta(category, id).map_or(1, |(_, levels)| levels)
	}

	fn name(&mut self, category: Category, id: u64) -> Option<String> {
		if category == Category::Object {
			return self.object_names.get(&id).cloned();
		}
		let id = u32::try_from(id).ok()?;
		self.entry_meta(category, id).and_then(|(name, _)| name).map(str::to_owned)
	}

	fn next_named_id(&mut self, category: Category, from: u64) -> Option<u64> {
		match category {
			Category::Object => self.object_names.range(from..).map(|(id, _)| *id).next(),
			_ => (from < self.entry_len(category) as u64).then_some(from),
		}
	}

	fn scene_field_name(&mut self, id: u32) -> Option<String> {
		self.scene_field_names.get(&id).cloned()
	}

	fn mesh_attribute_name(&mut self, id: u16) -> Option<String> {
		self.mesh_attribute_names.get(&id).cloned()
	}

	fn animation_target_name(&mut self, id: u32) -> Option<String> {
		self.animation_target_names.get(&id).cloned()
	}

	fn scene(&mut self, id: u32) -> FetchResult<SceneData> {
		fetch_level(&self.scenes, Category::Scene, id, 0)
	}

	fn animation(&mut self, id: u32) -> FetchResult<AnimationData> {
		fetch_level(&self.animations, Category::Animation, id, 0)
	}

	fn skin_2d(&mut self, id: u32) -> FetchResult<SkinData> {
		fetch_level(&self.skins_2d, Category::Skin2D, id, 0)
	}

	fn skin_3d(&mut self, id: u32) -> FetchResult<SkinData> {
		fetch_level(&self.skins_3d, Category::Skin3D, id, 0)
	}

	fn light(&mut self, id: u32) -> FetchResult<LightData> {
		fetch_level(&self.lights, Category::Light, id, 0)
	}

	fn material(&mut self, id: u32) -> FetchResult<MaterialData> {
		fetch_level(&self.materials, Category::Material, id, 0)
	}

	fn mesh(&mut self, id: u32, level: u32) -> FetchResult<MeshData> {
		fetch_level(&self.meshes, Category::Mesh, id, level)
	}

	fn texture(&mut self, id: u32) -> FetchResult<TextureData> {
		fetch_level(&self.textures, Category::Texture, id, 0)
	}

	fn image_1d(&mut self, id: u32, level: u32) -> FetchResult<ImageData> {
		fetch_level(&self.images_1d, Category::Image1D, id, level)
	}

	fn image_2d(&mut self, id: u32, level: u32) -> FetchResult<ImageData> {
		fetch_level(&self.images_2d, Category::Image2D, id, level)
	}

	fn image_3d(&mut self, id: u32, level: u32) -> FetchResult<ImageData> {
		fetch_level(&self.images_3d, Category::Image3D, id, level)
	}
}
