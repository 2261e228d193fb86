use std::io::{self, IsTerminal};
use std::path::PathBuf;

use scenereport::report::{AssetSnapshot, ColorMode, ReportOptions, Result, Selection, print_info};

#[derive(clap::Args)]
pub struct Args {
	/// Asset snapshot document (JSON).
	pub path: PathBuf,
	/// Report scenes.
	#[arg(long)]
	pub info_scenes: bool,
	/// Report objects and the scene fields they have.
	#[arg(long)]
	pub info_objects: bool,
	/// Report animations.
	#[arg(long)]
	pub info_animations: bool,
	/// Report 2D and 3D skins.
	#[arg(long)]
	pub info_skins: bool,
	/// Report lights.
	#[arg(long)]
	pub info_lights: bool,
	/// Report materials.
	#[arg(long)]
	pub info_materials: bool,
	/// Report meshes.
	#[arg(long)]
	pub info_meshes: bool,
	/// Report textures.
	#[arg(long)]
	pub info_textures: bool,
	/// Report 1D, 2D and 3D images.
	#[arg(long)]
	pub info_images: bool,
	/// Decode vertex and index data and print per-component bounds.
	#[arg(long)]
	pub bounds: bool,
	/// When to emphasize findings with color.
	#[arg(long, value_enum, default_value_t = ColorArg::Auto)]
	pub color: ColorArg,
	/// Print the time spent producing the report to stderr.
	#[arg(long)]
	pub profile: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorArg {
	Auto,
	Always,
	Never,
}

impl From<ColorArg> for ColorMode {
	fn from(value: ColorArg) -> Self {
		match value {
			ColorArg::Auto => ColorMode::Auto,
			ColorArg::Always => ColorMode::Always,
			ColorArg::Never => ColorMode::Never,
		}
	}
}

impl Args {
	fn options(&self, is_terminal: bool) -> ReportOptions {
		let selection = Selection {
			scenes: self.info_scenes,
			objects: self.info_objects,
			animations: self.info_animations,
			skins: self.info_skins,
			lights: self.info_lights,
			materials: self.info_materials,
			meshes: self.info_meshes,
			textures: self.info_textures,
			images: self.info_images,
		};
		ReportOptions {
			selection,
			compute_bounds: self.bounds,
			color: ColorMode::from(self.color).resolve(is_terminal),
		}
	}
}

/// Print the introspection report of a snapshot. Returns whether every record was retrieved.
pub fn run(args: Args) -> Result<bool> {
	let mut snapshot = AssetSnapshot::from_path(&args.path)?;
	log::info!("loaded snapshot {}", args.path.display());

	let stdout = io::stdout();
	let options = args.options(stdout.is_terminal());
	let mut out = stdout.lock();
	let mut diag = io::stderr().lock();
	let outcome = print_info(&mut snapshot, &options, &mut out, &mut diag)?;

	if args.profile {
		eprintln!("report took {:.3} ms", outcome.elapsed.as_secs_f64() * 1000.0);
	}
	if outcome.failed {
		log::info!("some records could not be retrieved");
	}

	Ok(!outcome.failed)
}

#[cfg(test)]
mod tests;
