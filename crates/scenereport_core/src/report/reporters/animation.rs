use crate::report::data::{AnimationData, Category};
use crate::report::format::{flags_suffix, format_vector, plural};
use crate::report::reporters::Context;

pub(super) fn report(ctx: &Context<'_>, id: u32, name: Option<&str>, animation: &AnimationData, lines: &mut Vec<String>) {
	lines.push(ctx.header(Category::Animation, u64::from(id), name));

	let duration = animation.effective_duration();
	if let Some((begin, end)) = duration {
		lines.push(format!(
			"  Duration: {}{}",
			format_vector(&[f64::from(begin), f64::from(end)]),
			flags_suffix(&animation.data_flags)
		));
	}

	for (index, track) in animation.tracks.iter().enumerate() {
		let mut line = format!("  Track {index}: {} @ {}", ctx.names.animation_target(track.target_name), track.value_type);
		if track.result_type != track.value_type {
			line.push_str(&format!(" -> {}", track.result_type));
		}
		line.push_str(&format!(", {}", plural(track.keys.len() as u64, "keyframe")));
		if let Some((begin, end)) = track.duration()
			&& Some((begin, end)) != duration
		{
			line.push_str(&format!(", duration {}", format_vector(&[f64::from(begin), f64::from(end)])));
		}
		lines.push(line);
		lines.push(format!("    Target: object {}", track.target));
		lines.push(format!("    Interpolation: {}, extrapolation {} / {}", track.interpolation, track.before, track.after));
	}
}
