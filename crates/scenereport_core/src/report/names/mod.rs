use std::collections::HashMap;

use crate::report::RecordSource;
use crate::report::data::{AnimationData, AnimationTrackTarget, Category, MeshAttribute, MeshData, SceneData, SceneField};

/// Maps builtin and custom field kinds to display names.
///
/// Custom ids are looked up through the record source once per run and
/// cached; ids without a registered name render as `Custom(<id>)`.
#[derive(Debug, Default)]
pub struct NameResolver {
	custom: HashMap<(Category, u32), Option<String>>,
}

impl NameResolver {
	/// Empty resolver.
	pub fn new() -> Self {
		Self::default()
	}

	/// Resolve a custom field id of a scene, mesh or animation vocabulary.
	pub fn resolve_field_name<S: RecordSource + ?Sized>(&mut self, source: &mut S, category: Category, id: u32) -> Option<&str> {
		self.custom
			.entry((category, id))
			.or_insert_with(|| {
				let name = match category {
					Category::Scene => source.scene_field_name(id),
					Category::Mesh => u16::try_from(id).ok().and_then(|id| source.mesh_attribute_name(id)),
					Category::Animation => source.animation_target_name(id),
					_ => None,
				};
				name.filter(|item| !item.is_empty())
			})
			.as_deref()
	}

	/// Resolve all custom field names used by a scene.
	pub fn prepare_scene<S: RecordSource + ?Sized>(&mut self, source: &mut S, scene: &SceneData) {
		for field in &scene.fields {
			if let SceneField::Custom(id) = field.name {
				self.resolve_field_name(source, Category::Scene, id);
			}
		}
	}

	/// Resolve all custom attribute names used by a mesh level.
	pub fn prepare_mesh<S: RecordSource + ?Sized>(&mut self, source: &mut S, mesh: &MeshData) {
		for attribute in &mesh.attributes {
			if let MeshAttribute::Custom(id) = attribute.name {
				self.resolve_field_name(source, Category::Mesh, u32::from(id));
			}
		}
	}

	/// Resolve all custom track target names used by an animation.
	pub fn prepare_animation<S: RecordSource + ?Sized>(&mut self, source: &mut S, animation: &AnimationData) {
		for track in &animation.tracks {
			if let AnimationTrackTarget::Custom(id) = track.target_name {
				self.resolve_field_name(source, Category::Animation, id);
			}
		}
	}

	/// Display name of a scene field.
	pub fn scene_field(&self, field: SceneField) -> String {
		match field {
			SceneField::Custom(id) => self.custom_label(Category::Scene, id),
			builtin => format!("{builtin:?}"),
		}
	}

	/// Display name of a mesh attribute.
	pub fn mesh_attribute(&self, attribute: MeshAttribute) -> String {
		match attribute {
			MeshAttribute::Custom(id) => self.custom_label(Category::Mesh, u32::from(id)),
			builtin => format!("{builtin:?}"),
		}
	}

	/// Display name of an animation track target.
	pub fn animation_target(&self, target: AnimationTrackTarget) -> String {
		match target {
			AnimationTrackTarget::Custom(id) => self.custom_label(Category::Animation, id),
			builtin => format!("{builtin:?}"),
		}
	}

	fn custom_label(&self, category: Category, id: u32) -> String {
		match self.custom.get(&(category, id)) {
			Some(Some(name)) => name.clone(),
			_ => format!("Custom({id})"),
		}
	}
}

/// Fetch a record name, treating an empty string as unnamed.
pub fn record_name<S: RecordSource + ?Sized>(source: &mut S, category: Category, id: u64) -> Option<String> {
	source.name(category, id).filter(|name| !name.is_empty())
}
