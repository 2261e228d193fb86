use crate::report::data::{Category, TextureData};
use crate::report::reporters::Context;

pub(super) fn report(ctx: &Context<'_>, id: u32, name: Option<&str>, texture: &TextureData, lines: &mut Vec<String>) {
	lines.push(ctx.header(Category::Texture, u64::from(id), name));

	let mut line = format!("  Type: {}, image {}", texture.texture_type, texture.image);
	if !ctx.refs.in_range(texture.texture_type.image_category(), i64::from(texture.image)) {
		line.push(' ');
		line.push_str(&ctx.style.out_of_range("(out of range)"));
	}
	lines.push(line);
	lines.push(format!("  Minification: {}, mipmap {}", texture.minification, texture.mipmap));
	lines.push(format!("  Magnification: {}", texture.magnification));
	let [s, t, r] = texture.wrapping;
	lines.push(format!("  Wrapping: {{{s}, {t}, {r}}}"));
}
