use crate::report::data::{Category, LightData, LightType};
use crate::report::format::{format_float, format_vector};
use crate::report::reporters::Context;

pub(super) fn report(ctx: &Context<'_>, id: u32, name: Option<&str>, light: &LightData, lines: &mut Vec<String>) {
	lines.push(ctx.header(Category::Light, u64::from(id), name));

	if light.light_type == LightType::Spot {
		lines.push(format!(
			"  Type: Spot, {}° - {}°",
			format_float(f64::from(light.inner_cone_angle)),
			format_float(f64::from(light.outer_cone_angle))
		));
	} else {
		lines.push(format!("  Type: {}", light.light_type));
	}
	lines.push(format!("  Color: {} * {}", hex_color(light.color), format_float(f64::from(light.intensity))));

	if matches!(light.light_type, LightType::Point | LightType::Spot) {
		lines.push(format!("  Attenuation: {}", format_vector(&light.attenuation.map(f64::from))));
		lines.push(format!("  Range: {}", format_float(f64::from(light.range.unwrap_or(f32::INFINITY)))));
	}
}

/// `#rrggbb` with channels clamped to `[0, 1]`.
fn hex_color(color: [f32; 3]) -> String {
	let [red, green, blue] = color.map(|channel| (channel.clamp(0.0, 1.0) * 255.0).round() as u8);
	format!("#{red:02x}{green:02x}{blue:02x}")
}
