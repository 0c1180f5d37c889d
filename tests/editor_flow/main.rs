//! End-to-end tests for loading fighter files and driving the editor

mod loading;
mod navigation;
mod playback;
mod settings;

use std::path::PathBuf;

use fightanim_rs::prelude::*;

/// The single-animation document used throughout the docs.
pub(crate) const IDLE: &str = r#"{"Idle": {"loop_and_end": [1, 3], "f0": {"img_main": [1,"body",0,0,0,0,1,1,1,"normal"]}, "f1": {"hurtboxes":[[0,0,10,10,"vulnerable"]]}}}"#;

pub(crate) fn fixture(name: &str) -> PathBuf {
	let cargo_root = std::env::var("CARGO_MANIFEST_DIR").unwrap();
	PathBuf::from(cargo_root).join("tests").join("fixtures").join(name)
}

pub(crate) fn sample_content() -> String {
	std::fs::read_to_string(fixture("sample.fighter")).unwrap()
}

pub(crate) fn loaded_editor() -> Editor {
	let mut editor = Editor::new(EditorSettings::default());
	editor.load_fighter_file(&sample_content()).unwrap();
	editor
}
