use crate::report::data::{Category, LAYER_NAME, MaterialData, MaterialValue};
use crate::report::format::{counted, format_flags, format_float, format_vector};
use crate::report::reporters::Context;

pub(super) fn report(ctx: &Context<'_>, id: u32, name: Option<&str>, material: &MaterialData, lines: &mut Vec<String>) {
	lines.push(ctx.header(Category::Material, u64::from(id), name));
	if !material.types.is_empty() {
		lines.push(format!("  Type: {}", format_flags(&material.types)));
	}

	for (index, layer) in material.layers.iter().enumerate() {
		let attributes: Vec<_> = layer.attributes.iter().filter(|attribute| attribute.name != LAYER_NAME).collect();
		if index == 0 {
			if attributes.is_empty() {
				continue;
			}
			lines.push("  Base layer:".to_owned());
		} else {
			match layer.name() {
				Some(layer_name) => lines.push(format!("  Layer {index}: {layer_name}")),
				None => lines.push(format!("  Layer {index}")),
			}
		}

		for (position, attribute) in attributes.iter().enumerate() {
			let mut line = format!("    {} @ {}: {}", attribute.name, attribute.value.type_name(), value_text(&attribute.value));
			if let Some(texture) = attribute.texture_id()
				&& !ctx.refs.in_range(Category::Texture, i64::from(texture))
			{
				line.push(' ');
				line.push_str(&ctx.style.out_of_range("(out of range)"));
			}
			if attributes[..position].iter().any(|earlier| earlier.same_format(attribute)) {
				line.push(' ');
				line.push_str(&ctx.style.duplicate("[duplicate]"));
			}
			lines.push(line);
		}
	}
}

fn value_text(value: &MaterialValue) -> String {
	match value {
		MaterialValue::Bool(value) => value.to_string(),
		MaterialValue::Float(value) | MaterialValue::Deg(value) | MaterialValue::Rad(value) => format_float(f64::from(*value)),
		MaterialValue::UnsignedInt(value) => value.to_string(),
		MaterialValue::Int(value) => value.to_string(),
		MaterialValue::UnsignedLong(value) => value.to_string(),
		MaterialValue::Long(value) => value.to_string(),
		MaterialValue::Vector2(value) => format_vector(&value.map(f64::from)),
		MaterialValue::Vector3(value) => format_vector(&value.map(f64::from)),
		MaterialValue::Vector4(value) => format_vector(&value.map(f64::from)),
		MaterialValue::Matrix3x3(value) => format_vector(&value.map(f64::from)),
		MaterialValue::TextureSwizzle(swizzle) => swizzle.to_string(),
		MaterialValue::String(text) => text.clone(),
		MaterialValue::Pointer(address) | MaterialValue::MutablePointer(address) => format!("{address:#x}"),
		MaterialValue::Buffer(bytes) => counted(bytes.len() as u64, "byte", "bytes"),
	}
}
