use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use scenereport_testkit::{fixture_path as shared_fixture_path, read_fixture as shared_read_fixture, target_dir as workspace_target_dir};

static SCENEREPORT_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_arg(name: &str) -> String {
	shared_fixture_path(name).to_string_lossy().into_owned()
}

pub(crate) fn expected(name: &str) -> String {
	shared_read_fixture(name)
}

pub(crate) fn run_scenereport(args: &[&str]) -> Output {
	Command::new(scenereport_bin()).args(args).output().expect("scenereport command executes")
}

pub(crate) fn stdout(output: &Output) -> String {
	String::from_utf8(output.stdout.clone()).expect("stdout should be utf-8")
}

pub(crate) fn stderr(output: &Output) -> String {
	String::from_utf8_lossy(&output.stderr).into_owned()
}

fn scenereport_bin() -> &'static PathBuf {
	SCENEREPORT_BIN.get_or_init(resolve_scenereport_bin)
}

fn resolve_scenereport_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_scenereport") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "scenereport.exe" } else { "scenereport" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "scenereport"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build scenereport binary at {}", bin.display());

	bin
}
