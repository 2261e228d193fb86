use crate::cmd::test_support::{expected, fixture_arg, run_scenereport, stderr, stdout};

fn assert_transcript(fixture: &str, flags: &[&str], transcript: &str) {
	let path = fixture_arg(fixture);
	let mut args = vec!["info", path.as_str(), "--color", "never"];
	args.extend_from_slice(flags);
	let output = run_scenereport(&args);

	assert!(output.status.success(), "scenereport failed with status={}: {}", output.status, stderr(&output));
	assert_eq!(stdout(&output), expected(transcript));
}

#[test]
fn empty_asset_prints_nothing() {
	assert_transcript("empty.json", &[], "empty.txt");
}

#[test]
fn scenes_and_objects_transcript() {
	assert_transcript("scenes-objects.json", &["--info-scenes", "--info-objects"], "scenes-objects.txt");
}

#[test]
fn full_report_annotates_references() {
	assert_transcript("references.json", &[], "references.txt");
}

#[test]
fn bounds_transcript() {
	assert_transcript("bounds.json", &["--info-meshes", "--bounds"], "bounds.txt");
}

#[test]
fn repeated_runs_print_identical_reports() {
	let path = fixture_arg("references.json");
	let first = run_scenereport(&["info", &path, "--color", "never"]);
	let second = run_scenereport(&["info", &path, "--color", "never"]);
	assert_eq!(first.stdout, second.stdout);
}

#[test]
fn retrieval_failures_go_to_stderr_and_fail_the_run() {
	let path = fixture_arg("error.json");
	let output = run_scenereport(&["info", &path, "--color", "never"]);

	assert_eq!(output.status.code(), Some(1));
	assert_eq!(stdout(&output), "Object 0: A name\n");
	let diagnostics = stderr(&output);
	let lines: Vec<_> = diagnostics.lines().collect();
	assert_eq!(lines.len(), 18, "{diagnostics}");
	assert_eq!(lines.first(), Some(&"Scene 0 error!"));
	assert_eq!(lines.last(), Some(&"Image 1 error!"));
}

#[test]
fn invalid_snapshot_is_reported_as_error() {
	let path = fixture_arg("invalid.json");
	let output = run_scenereport(&["info", &path]);

	assert_eq!(output.status.code(), Some(1));
	assert!(stdout(&output).is_empty());
	assert_eq!(stderr(&output), "error: invalid snapshot: Scene 0 must have exactly one of record, error or levels\n");
}

#[test]
fn missing_file_is_reported_as_io_error() {
	let output = run_scenereport(&["info", "does-not-exist.json"]);

	assert_eq!(output.status.code(), Some(1));
	assert!(stderr(&output).starts_with("error: io: "), "{}", stderr(&output));
}

#[test]
fn forced_color_emphasizes_findings() {
	let path = fixture_arg("references.json");
	let output = run_scenereport(&["info", &path, "--info-textures", "--color", "always"]);

	assert!(output.status.success());
	let text = stdout(&output);
	assert!(text.contains('\u{1b}'), "{text}");
	assert!(!text.contains("Scene 0"));
}

#[test]
fn profile_reports_elapsed_time() {
	let path = fixture_arg("empty.json");
	let output = run_scenereport(&["info", &path, "--profile"]);

	assert!(output.status.success());
	assert!(stderr(&output).starts_with("report took "), "{}", stderr(&output));
}

mod options {
	use super::super::{Args, ColorArg};

	fn args(color: ColorArg) -> Args {
		Args {
			path: "asset.json".into(),
			info_scenes: false,
			info_objects: true,
			info_animations: false,
			info_skins: false,
			info_lights: false,
			info_materials: false,
			info_meshes: true,
			info_textures: false,
			info_images: false,
			bounds: true,
			color,
			profile: false,
		}
	}

	#[test]
	fn flags_map_onto_report_options() {
		let options = args(ColorArg::Auto).options(false);
		assert!(options.selection.objects);
		assert!(options.selection.meshes);
		assert!(!options.selection.scenes);
		assert!(options.compute_bounds);
		assert!(!options.color);
	}

	#[test]
	fn color_follows_the_terminal_only_in_auto_mode() {
		assert!(args(ColorArg::Auto).options(true).color);
		assert!(args(ColorArg::Always).options(false).color);
		assert!(!args(ColorArg::Never).options(true).color);
	}
}
