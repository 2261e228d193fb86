use std::collections::{BTreeMap, BTreeSet};

use crate::report::data::{Category, MaterialData, SceneData, SceneDimensions, SceneField, TextureData};

/// Reference whose target id lies outside `[0, count)` of its target category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
	/// Category of the record holding the reference.
	pub source: Category,
	/// Id of the record holding the reference.
	pub source_id: u32,
	/// Object the reference is attached to, for scene fields.
	pub object: Option<u64>,
	/// Category the reference points into.
	pub target: Category,
	/// Referenced id as stored.
	pub target_id: i64,
}

/// Tallies references per target category and id, and collects out-of-range references.
///
/// Tallies are sparse: every id below the category count is valid and an id
/// without a tally entry has zero references. Object tallies count the scenes
/// an object has fields in. Counts for a target category are only reported
/// once at least one record of its referencing category was scanned.
#[derive(Debug, Clone, Default)]
pub struct ReferenceAnalyzer {
	counts: BTreeMap<Category, u64>,
	tallies: BTreeMap<Category, BTreeMap<u64, u64>>,
	sources: BTreeSet<Category>,
	out_of_range: Vec<OutOfRange>,
}

impl ReferenceAnalyzer {
	/// Analyzer with empty tallies for the given per-category record counts.
	pub fn new(counts: impl IntoIterator<Item = (Category, u64)>) -> Self {
		Self {
			counts: counts.into_iter().collect(),
			..Self::default()
		}
	}

	/// Count the object, mesh, material, light and skin references of a scene.
	pub fn scan_scene(&mut self, id: u32, scene: &SceneData) {
		self.sources.insert(Category::Scene);
		let object_count = self.count(Category::Object);
		let skin = match scene.dimensions() {
			Some(SceneDimensions::Two) => Some(Category::Skin2D),
			Some(SceneDimensions::Three) => Some(Category::Skin3D),
			None => None,
		};

		let mut objects = BTreeSet::new();
		let mut reported = BTreeSet::new();
		for field in &scene.fields {
			let target = match field.name {
				SceneField::Mesh => Some(Category::Mesh),
				SceneField::MeshMaterial => Some(Category::Material),
				SceneField::Light => Some(Category::Light),
				SceneField::Skin => skin,
				_ => None,
			};

			for (entry, &object) in field.mapping.iter().enumerate() {
				if object < object_count {
					objects.insert(object);
				} else if reported.insert(object) {
					self.out_of_range.push(OutOfRange {
						source: Category::Scene,
						source_id: id,
						object: Some(object),
						target: Category::Object,
						target_id: i64::try_from(object).unwrap_or(i64::MAX),
					});
				}

				let (Some(target), Some(&value)) = (target, field.values.get(entry)) else {
					continue;
				};
				// -1 marks a mesh without a material
				if field.name == SceneField::MeshMaterial && value < 0 {
					continue;
				}
				self.record(Category::Scene, id, Some(object), target, value);
			}
		}

		let tally = self.tallies.entry(Category::Object).or_default();
		for object in objects {
			*tally.entry(object).or_default() += 1;
		}
	}

	/// Count the texture references of a material.
	pub fn scan_material(&mut self, id: u32, material: &MaterialData) {
		self.sources.insert(Category::Material);
		for (_, attribute) in material.attributes() {
			if let Some(texture) = attribute.texture_id() {
				self.record(Category::Material, id, None, Category::Texture, i64::from(texture));
			}
		}
	}

	/// Count the image reference of a texture.
	pub fn scan_texture(&mut self, id: u32, texture: &TextureData) {
		self.sources.insert(Category::Texture);
		self.record(Category::Texture, id, None, texture.texture_type.image_category(), i64::from(texture.image));
	}

	/// Number of records in a target category.
	pub fn count(&self, category: Category) -> u64 {
		self.counts.get(&category).copied().unwrap_or(0)
	}

	/// Whether a stored reference value is a valid id of the target category.
	pub fn in_range(&self, category: Category, value: i64) -> bool {
		u64::try_from(value).is_ok_and(|value| value < self.count(category))
	}

	/// Reference count of an id, or `None` when no record of its referencing category was scanned.
	pub fn reference_count(&self, category: Category, id: u64) -> Option<u64> {
		let source = category.referenced_from()?;
		if !self.sources.contains(&source) {
			return None;
		}
		if id >= self.count(category) {
			return None;
		}
		Some(self.tally(category).and_then(|tally| tally.get(&id)).copied().unwrap_or(0))
	}

	/// Ids of a category with no references, when its referencing category was scanned.
	pub fn unreferenced(&self, category: Category) -> impl Iterator<Item = u64> + '_ {
		let scanned = category.referenced_from().is_some_and(|source| self.sources.contains(&source));
		let ids = if scanned { 0..self.count(category) } else { 0..0 };
		let tally = self.tally(category);
		ids.filter(move |id| !tally.is_some_and(|tally| tally.contains_key(id)))
	}

	/// Number of ids `unreferenced` yields.
	pub fn unreferenced_count(&self, category: Category) -> u64 {
		let scanned = category.referenced_from().is_some_and(|source| self.sources.contains(&source));
		if !scanned {
			return 0;
		}
		let referenced = self.tally(category).map_or(0, |tally| tally.len() as u64);
		self.count(category).saturating_sub(referenced)
	}

	/// All out-of-range references in scan order.
	pub fn out_of_range(&self) -> &[OutOfRange] {
		&self.out_of_range
	}

	/// Out-of-range references held by one record.
	pub fn out_of_range_from(&self, source: Category, id: u32) -> impl Iterator<Item = &OutOfRange> {
		self.out_of_range.iter().filter(move |item| item.source == source && item.source_id == id)
	}

	fn tally(&self, category: Category) -> Option<&BTreeMap<u64, u64>> {
		self.tallies.get(&category)
	}

	fn record(&mut self, source: Category, source_id: u32, object: Option<u64>, target: Category, value: i64) {
		if let Ok(id) = u64::try_from(value)
			&& id < self.count(target)
		{
			*self.tallies.entry(target).or_default().entry(id).or_default() += 1;
			return;
		}
		self.out_of_range.push(OutOfRange {
			source,
			source_id,
			object,
			target,
			target_id: value,
		});
	}
}
