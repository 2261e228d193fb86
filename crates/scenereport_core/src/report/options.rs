use crate::report::data::Category;

/// Category groups included in a report. An empty selection means all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
	/// Scene listings.
	pub scenes: bool,
	/// Per-object listing.
	pub objects: bool,
	/// Animations.
	pub animations: bool,
	/// 2D and 3D skins.
	pub skins: bool,
	/// Lights.
	pub lights: bool,
	/// Materials.
	pub materials: bool,
	/// Meshes.
	pub meshes: bool,
	/// Textures.
	pub textures: bool,
	/// 1D, 2D and 3D images.
	pub images: bool,
}

impl Selection {
	/// Every category.
	pub fn all() -> Self {
		Self {
			scenes: true,
			objects: true,
			animations: true,
			skins: true,
			lights: true,
			materials: true,
			meshes: true,
			textures: true,
			images: true,
		}
	}

	/// Select or deselect scene and object listings together.
	pub fn with_scenes_objects(mut self, enabled: bool) -> Self {
		self.scenes = enabled;
		self.objects = enabled;
		self
	}

	/// Whether no category was explicitly selected.
	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}

	/// Selection with the "nothing selected means all" rule applied.
	pub fn effective(self) -> Self {
		if self.is_empty() { Self::all() } else { self }
	}

	/// Whether records of a category are printed.
	pub fn prints(&self, category: Category) -> bool {
		match category {
			Category::Scene => self.scenes,
			Category::Object => self.objects,
			Category::Animation => self.animations,
			Category::Skin2D | Category::Skin3D => self.skins,
			Category::Light => self.lights,
			Category::Material => self.materials,
			Category::Mesh => self.meshes,
			Category::Texture => self.textures,
			Category::Image1D | Category::Image2D | Category::Image3D => self.images,
		}
	}

	/// Whether records of a category are fetched. Scenes are fetched for the object listing too.
	pub fn traverses(&self, category: Category) -> bool {
		match category {
			Category::Scene => self.scenes || self.objects,
			other => self.prints(other),
		}
	}
}

/// Tri-state color choice, resolved against the output terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
	/// Color when the output is a terminal.
	#[default]
	Auto,
	/// Always color.
	Always,
	/// Never color.
	Never,
}

impl ColorMode {
	/// Whether emphasis is rendered, given whether the output is a terminal.
	pub fn resolve(self, is_terminal: bool) -> bool {
		match self {
			ColorMode::Auto => is_terminal,
			ColorMode::Always => true,
			ColorMode::Never => false,
		}
	}
}

/// Report configuration threaded through the driver and reporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportOptions {
	/// Categories to report.
	pub selection: Selection,
	/// Decode vertex and index buffers to print per-component bounds.
	pub compute_bounds: bool,
	/// Render emphasis with ANSI colors.
	pub color: bool,
}

impl ReportOptions {
	/// Options reporting exactly the given selection.
	pub fn with_selection(selection: Selection) -> Self {
		Self {
			selection,
			..Self::default()
		}
	}
}
