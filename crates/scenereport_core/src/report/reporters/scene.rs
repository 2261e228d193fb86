use std::collections::BTreeMap;

use crate::report::RecordSource;
use crate::report::data::{Category, SceneData, SceneField, SceneFieldData};
use crate::report::format::{counted, flags_suffix, format_flags, plural};
use crate::report::names::record_name;
use crate::report::reporters::Context;

pub(super) fn report(ctx: &Context<'_>, id: u32, name: Option<&str>, scene: &SceneData, lines: &mut Vec<String>) {
	lines.push(ctx.header(Category::Scene, u64::from(id), name));
	lines.push(format!(
		"  Bound: {} @ {}{}",
		plural(scene.mapping_bound, "object"),
		scene.mapping_type,
		flags_suffix(&scene.data_flags)
	));
	if let Some(dimensions) = scene.dimensions() {
		lines.push(format!("  Dimensions: {dimensions}"));
	}

	if !scene.fields.is_empty() {
		lines.push("  Fields:".to_owned());
		for index in canonical_order(&scene.fields) {
			lines.push(field_line(ctx, &scene.fields, index));
		}
	}

	let mut hits = ctx.refs.out_of_range_from(Category::Scene, id).peekable();
	if hits.peek().is_some() {
		lines.push("  Out of range:".to_owned());
		for hit in hits {
			let object = hit.object.unwrap_or_default();
			let text = match hit.target {
				Category::Object => format!("Object {object}"),
				target => format!("Object {object} -> {target} {}", hit.target_id),
			};
			lines.push(format!("    {}", ctx.style.out_of_range(&text)));
		}
	}
}

fn field_line(ctx: &Context<'_>, fields: &[SceneFieldData], index: usize) -> String {
	let field = &fields[index];
	let mut line = format!("    {} @ {}", ctx.names.scene_field(field.name), field.field_type);
	if field.array_size != 0 {
		line.push_str(&format!("[{}]", field.array_size));
	}
	if !field.flags.is_empty() {
		line.push_str(&format!(", {}", format_flags(&field.flags)));
	}
	line.push_str(&format!(", {}", counted(field.size() as u64, "entry", "entries")));
	if fields[..index].iter().any(|earlier| earlier.same_format(field)) {
		line.push(' ');
		line.push_str(&ctx.style.duplicate("[duplicate]"));
	}
	line
}

/// Builtin fields in canonical order, then custom fields in storage order.
fn canonical_order(fields: &[SceneFieldData]) -> Vec<usize> {
	let mut order: Vec<usize> = (0..fields.len()).collect();
	order.sort_by_key(|index| fields[*index].name.builtin_rank().unwrap_or(usize::MAX));
	order
}

/// Per-object field usage gathered across all retrieved scenes, keyed by object id.
#[derive(Debug, Default)]
pub(crate) struct ObjectTable {
	count: u64,
	fields: BTreeMap<u64, Vec<(SceneField, u64)>>,
	scenes: usize,
}

impl ObjectTable {
	pub fn new(count: u64) -> Self {
		Self {
			count,
			..Self::default()
		}
	}

	/// Record which fields each in-range object has in a scene.
	pub fn add_scene(&mut self, scene: &SceneData) {
		self.scenes += 1;
		for field in &scene.fields {
			for &object in &field.mapping {
				if object >= self.count {
					continue;
				}
				let entries = self.fields.entry(object).or_default();
				match entries.iter_mut().find(|(name, _)| *name == field.name) {
					Some((_, count)) => *count += 1,
					None => entries.push((field.name, 1)),
				}
			}
		}
	}

	/// Append the listing of every qualifying object in id order.
	///
	/// Objects are listed when they have fields. With no retrieved scene at all,
	/// named objects are listed instead.
	pub fn report<S: RecordSource + ?Sized>(&self, ctx: &Context<'_>, source: &mut S, lines: &mut Vec<String>) {
		if self.scenes == 0 {
			let mut from = 0;
			while let Some(id) = source.next_named_id(Category::Object, from)
				&& id < self.count
			{
				if let Some(name) = record_name(source, Category::Object, id) {
					lines.push(ctx.header(Category::Object, id, Some(name.as_str())));
				}
				let Some(next) = id.checked_add(1) else {
					break;
				};
				from = next;
			}
			return;
		}

		for (&id, entries) in &self.fields {
			let name = record_name(source, Category::Object, id);
			lines.push(ctx.header(Category::Object, id, name.as_deref()));

			let mut sorted: Vec<_> = entries.iter().collect();
			sorted.sort_by_key(|(name, _)| name.builtin_rank().unwrap_or(usize::MAX));
			let fields: Vec<_> = sorted
				.into_iter()
				.map(|(name, count)| {
					let label = ctx.names.scene_field(*name);
					if *count > 1 { format!("{label} ({count}x)") } else { label }
				})
				.collect();
			lines.push(format!("  Fields: {}", fields.join(", ")));
		}
	}
}
