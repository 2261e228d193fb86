//! One formatting unit per category, turning a retrieved record into report lines.

mod animation;
mod image;
mod light;
mod material;
mod mesh;
mod scene;
mod skin;
mod texture;

pub(crate) use scene::ObjectTable;

use crate::report::data::{AnimationData, Category, ImageData, LightData, MaterialData, MeshData, SceneData, SkinData, TextureData};
use crate::report::format::{Style, header, plural, references};
use crate::report::names::NameResolver;
use crate::report::options::ReportOptions;
use crate::report::refs::ReferenceAnalyzer;

/// Read-only state shared by all reporters during one run.
pub(crate) struct Context<'a> {
	pub style: Style,
	pub names: &'a NameResolver,
	pub refs: &'a ReferenceAnalyzer,
	pub compute_bounds: bool,
}

impl<'a> Context<'a> {
	pub fn new(options: &ReportOptions, names: &'a NameResolver, refs: &'a ReferenceAnalyzer) -> Self {
		Self {
			style: Style::new(options.color),
			names,
			refs,
			compute_bounds: options.compute_bounds,
		}
	}

	/// Header line of a record, annotated with its reference count when known.
	pub fn header(&self, category: Category, id: u64, name: Option<&str>) -> String {
		let annotation = self.refs.reference_count(category, id).map(|count| match category {
			Category::Object if count > 0 => format!("(in {})", plural(count, "scene")),
			_ => references(count, self.style),
		});
		header(category.label(), id, annotation.as_deref(), name)
	}
}

/// A successfully retrieved record, or one level of it.
#[derive(Debug, Clone)]
pub(crate) enum Record {
	Scene(SceneData),
	Animation(AnimationData),
	Skin(SkinData),
	Light(LightData),
	Material(MaterialData),
	Mesh(MeshData),
	Texture(TextureData),
	Image(ImageData),
}

/// Append the lines for one record id. `levels` holds every retrieved level in order.
pub(crate) fn report(ctx: &Context<'_>, category: Category, id: u32, name: Option<&str>, levels: &[(u32, Record)], lines: &mut Vec<String>) {
	let Some((_, first)) = levels.first() else {
		return;
	};

	match first {
		Record::Scene(scene) => scene::report(ctx, id, name, scene, lines),
		Record::Animation(animation) => animation::report(ctx, id, name, animation, lines),
		Record::Skin(skin) => skin::report(ctx, category, id, name, skin, lines),
		Record::Light(light) => light::report(ctx, id, name, light, lines),
		Record::Material(material) => material::report(ctx, id, name, material, lines),
		Record::Texture(texture) => texture::report(ctx, id, name, texture, lines),
		Record::Mesh(_) => {
			let meshes: Vec<_> = levels
				.iter()
				.filter_map(|(level, record)| match record {
					Record::Mesh(mesh) => Some((*level, mesh)),
					_ => None,
				})
				.collect();
			mesh::report(ctx, id, name, &meshes, lines);
		}
		Record::Image(_) => {
			let images: Vec<_> = levels
				.iter()
				.filter_map(|(level, record)| match record {
					Record::Image(image) => Some((*level, image)),
					_ => None,
				})
				.collect();
			image::report(ctx, category, id, name, &images, lines);
		}
	}
}

#[cfg(test)]
mod tests;
