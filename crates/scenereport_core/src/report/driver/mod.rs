use std::io::Write;
use std::time::{Duration, Instant};

use crate::report::data::Category;
use crate::report::names::{NameResolver, record_name};
use crate::report::options::ReportOptions;
use crate::report::refs::ReferenceAnalyzer;
use crate::report::reporters::{self, Context, ObjectTable, Record};
use crate::report::{FetchError, FetchResult, RecordSource, Result};

/// Outcome of a completed report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOutcome {
	/// At least one record or level could not be retrieved.
	pub failed: bool,
	/// Wall-clock time spent traversing the source.
	pub elapsed: Duration,
}

/// One step of the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
	/// Retrieve one level of a record.
	Fetch { category: Category, id: u32, level: u32 },
	/// All levels of a record were visited.
	EndId { category: Category, id: u32 },
	/// All records of a category were visited.
	EndCategory(Category),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
	Category(usize),
	Id { step: usize, id: u32 },
	Level { step: usize, id: u32, level: u32, levels: u32 },
	Done,
}

/// Category, then id, then level iteration over the planned categories.
#[derive(Debug)]
struct Traversal {
	plan: Vec<(Category, u32)>,
	state: State,
}

impl Traversal {
	/// Plan holds each category to visit with the number of ids to fetch.
	fn new(plan: Vec<(Category, u32)>) -> Self {
		Self {
			plan,
			state: State::Category(0),
		}
	}

	fn next_visit<S: RecordSource + ?Sized>(&mut self, source: &mut S) -> Option<Visit> {
		loop {
			match self.state {
				State::Done => return None,
				State::Category(step) => {
					let Some(&(category, ids)) = self.plan.get(step) else {
						self.state = State::Done;
						continue;
					};
					log::debug!("visiting {ids} {category} records");
					self.state = State::Id { step, id: 0 };
				}
				State::Id { step, id } => {
					let (category, ids) = self.plan[step];
					if id >= ids {
						self.state = State::Category(step + 1);
						return Some(Visit::EndCategory(category));
					}
					let levels = if category.has_levels() { source.level_count(category, id) } else { 1 };
					self.state = State::Level { step, id, level: 0, levels };
				}
				State::Level { step, id, level, levels } => {
					let (category, _) = self.plan[step];
					if level >= levels {
						self.state = State::Id { step, id: id + 1 };
						return Some(Visit::EndId { category, id });
					}
					self.state = State::Level {
						step,
						id,
						level: level + 1,
						levels,
					};
					return Some(Visit::Fetch { category, id, level });
				}
			}
		}
	}
}

fn fetch<S: RecordSource + ?Sized>(source: &mut S, category: Category, id: u32, level: u32) -> FetchResult<Record> {
	Ok(match category {
		Category::Scene => Record::Scene(source.scene(id)?),
		Category::Animation => Record::Animation(source.animation(id)?),
		Category::Skin2D => Record::Skin(source.skin_2d(id)?),
		Category::Skin3D => Record::Skin(source.skin_3d(id)?),
		Category::Light => Record::Light(source.light(id)?),
		Category::Material => Record::Material(source.material(id)?),
		Category::Mesh => Record::Mesh(source.mesh(id, level)?),
		Category::Texture => Record::Texture(source.texture(id)?),
		Category::Image1D => Record::Image(source.image_1d(id, level)?),
		Category::Image2D => Record::Image(source.image_2d(id, level)?),
		Category::Image3D => Record::Image(source.image_3d(id, level)?),
		Category::Object => return Err(FetchError::unsupported(category, id)),
	})
}

/// Write an introspection report of every selected category of `source`.
///
/// Fetch failures are written to `diag` as they happen and the traversal moves
/// on to the next id or level. Report lines are written to `out` once the
/// traversal finishes, so all failure messages precede the report.
pub fn print_info<S: RecordSource + ?Sized>(source: &mut S, options: &ReportOptions, out: &mut dyn Write, diag: &mut dyn Write) -> Result<ReportOutcome> {
	let started = Instant::now();
	let selection = options.selection.effective();
	let features = source.features();

	let counts: Vec<(Category, u64)> = Category::ALL
		.into_iter()
		.filter(|category| features.supports(*category))
		.map(|category| (category, source.count(category)))
		.collect();
	let count_of = |category: Category| counts.iter().find(|(item, _)| *item == category).map_or(0, |(_, count)| *count);

	let plan = counts
		.iter()
		.filter(|(category, _)| selection.traverses(*category))
		.map(|&(category, count)| match category {
			Category::Object => (category, 0),
			_ => (category, u32::try_from(count).unwrap_or(u32::MAX)),
		})
		.collect();

	let mut refs = ReferenceAnalyzer::new(counts.iter().copied());
	let mut names = NameResolver::new();
	let mut objects = ObjectTable::new(count_of(Category::Object));
	let mut traversal = Traversal::new(plan);
	let mut pending: Vec<(u32, Record)> = Vec::new();
	let mut lines = Vec::new();
	let mut failed = false;

	while let Some(visit) = traversal.next_visit(source) {
		match visit {
			Visit::Fetch { category, id, level } => {
				log::trace!("fetching {category} {id} level {level}");
				match fetch(source, category, id, level) {
					Ok(record) => pending.push((level, record)),
					Err(err) => {
						log::debug!("{category} {id} level {level} failed to load");
						writeln!(diag, "{err}")?;
						failed = true;
					}
				}
			}
			Visit::EndId { category, id } => {
				if pending.is_empty() {
					continue;
				}
				for (_, record) in &pending {
					match record {
						Record::Scene(scene) => {
							refs.scan_scene(id, scene);
							names.prepare_scene(source, scene);
							objects.add_scene(scene);
						}
						Record::Animation(animation) => names.prepare_animation(source, animation),
						Record::Material(material) => refs.scan_material(id, material),
						Record::Mesh(mesh) => names.prepare_mesh(source, mesh),
						Record::Texture(texture) => refs.scan_texture(id, texture),
						_ => {}
					}
				}
				if selection.prints(category) {
					let name = record_name(source, category, u64::from(id));
					let ctx = Context::new(options, &names, &refs);
					reporters::report(&ctx, category, id, name.as_deref(), &pending, &mut lines);
				}
				pending.clear();
			}
			Visit::EndCategory(Category::Object) => {
				let ctx = Context::new(options, &names, &refs);
				objects.report(&ctx, source, &mut lines);
			}
			Visit::EndCategory(category) => {
				let unreferenced = refs.unreferenced_count(category);
				if unreferenced > 0 {
					log::debug!("{unreferenced} {category} ids are unreferenced");
				}
			}
		}
	}

	for line in &lines {
		writeln!(out, "{line}")?;
	}
	out.flush()?;

	Ok(ReportOutcome {
		failed,
		elapsed: started.elapsed(),
	})
}
