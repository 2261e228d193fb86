use crate::report::data::{Category, SkinData};
use crate::report::format::{flags_suffix, plural};
use crate::report::reporters::Context;

pub(super) fn report(ctx: &Context<'_>, category: Category, id: u32, name: Option<&str>, skin: &SkinData, lines: &mut Vec<String>) {
	lines.push(ctx.header(category, u64::from(id), name));
	lines.push(format!("  {}{}", plural(skin.joints.len() as u64, "joint"), flags_suffix(&skin.joint_data_flags)));
	if !skin.inverse_bind_matrix_data_flags.is_empty() {
		lines.push(format!("  Inverse bind matrices{}", flags_suffix(&skin.inverse_bind_matrix_data_flags)));
	}
}
