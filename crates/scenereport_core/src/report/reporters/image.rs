use crate::report::data::{Category, ImageData};
use crate::report::format::{counted, flags_suffix, format_flags};
use crate::report::reporters::Context;

pub(super) fn report(ctx: &Context<'_>, category: Category, id: u32, name: Option<&str>, levels: &[(u32, &ImageData)], lines: &mut Vec<String>) {
	lines.push(ctx.header(category, u64::from(id), name));
	for (level, image) in levels {
		let size = if image.size.len() == 1 {
			image.size[0].to_string()
		} else {
			format!("{{{}}}", image.size.iter().map(u32::to_string).collect::<Vec<_>>().join(", "))
		};
		let mut line = format!("  Level {level}: {size} @ {}, {}", image.format, counted(image.data_size as u64, "byte", "bytes"));
		if !image.flags.is_empty() {
			line.push_str(&format!(", {}", format_flags(&image.flags)));
		}
		line.push_str(&flags_suffix(&image.data_flags));
		lines.push(line);
	}
}
