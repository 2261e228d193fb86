use crate::report::bounds::{BoundsCalculator, ComponentRange};
use crate::report::data::{Category, MeshData};
use crate::report::format::{counted, flags_suffix, format_int_vector, format_vector};
use crate::report::reporters::Context;

pub(super) fn report(ctx: &Context<'_>, id: u32, name: Option<&str>, levels: &[(u32, &MeshData)], lines: &mut Vec<String>) {
	lines.push(ctx.header(Category::Mesh, u64::from(id), name));
	for (level, mesh) in levels {
		report_level(ctx, *level, mesh, lines);
	}
}

fn report_level(ctx: &Context<'_>, level: u32, mesh: &MeshData, lines: &mut Vec<String>) {
	let bounds = ctx.compute_bounds.then(|| BoundsCalculator.compute(mesh));
	lines.push(format!(
		"  Level {level}: {}, {}{}",
		mesh.primitive,
		counted(u64::from(mesh.vertex_count), "vertex", "vertices"),
		flags_suffix(&mesh.vertex_data_flags)
	));

	if let Some(index) = &mesh.index {
		lines.push(format!(
			"    {} @ {}{}",
			counted(index.count() as u64, "index", "indices"),
			index.index_type,
			flags_suffix(&index.data_flags)
		));
		if let Some((min, max)) = bounds.as_ref().and_then(|bounds| bounds.index) {
			lines.push(format!("      Bounds: {min} - {max}"));
		}
	}

	for (position, attribute) in mesh.attributes.iter().enumerate() {
		let mut line = format!("    {} @ {}", ctx.names.mesh_attribute(attribute.name), attribute.format);
		if attribute.array_size != 0 {
			line.push_str(&format!("[{}]", attribute.array_size));
		}
		line.push_str(&format!(", offset {}, stride {}", attribute.offset, attribute.stride));
		if mesh.attributes[..position].iter().any(|earlier| earlier.same_format(attribute)) {
			line.push(' ');
			line.push_str(&ctx.style.duplicate("[duplicate]"));
		}
		lines.push(line);

		match bounds.as_ref().and_then(|bounds| bounds.attribute(position)) {
			Some(ComponentRange::Float { min, max }) => lines.push(format!("      Bounds: {} - {}", format_vector(min), format_vector(max))),
			Some(ComponentRange::Integer { min, max }) => lines.push(format!("      Bounds: {} - {}", format_int_vector(min), format_int_vector(max))),
			None => {}
		}
	}
}
