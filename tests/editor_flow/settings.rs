//! Settings feeding the editor

use fightanim_rs::prelude::*;

use crate::IDLE;

#[test]
fn placeholder_timeline_uses_settings() {
	let settings = EditorSettings::from_toml_str(
		r#"
		[playback]
		placeholder_frame_count = 16
		seed_hold_min = 2
		seed_hold_max = 3
		"#,
	)
	.unwrap();
	let editor = Editor::new(settings);

	assert!(!editor.is_loaded());
	assert_eq!(editor.total_frames(), 16);
	assert!(editor.frame_timing().iter().all(|ticks| (2..=3).contains(ticks)));
}

#[test]
fn strict_load_config_rejects_unknown_fields() {
	let settings = EditorSettings::from_toml_str("[load]\nreject_unknown_fields = true\n").unwrap();
	let mut editor = Editor::new(settings);

	let err = editor
		.load_fighter_file(r#"{"Idle": {"loop_and_end": [0, 0], "f0": {"img_mian": []}}}"#)
		.unwrap_err();
	assert!(matches!(err, ParseError::UnknownField { .. }));

	editor.load_fighter_file(IDLE).unwrap();
	assert!(editor.is_loaded());
}

#[test]
fn lenient_empty_document_falls_back_to_placeholder_count() {
	let settings = EditorSettings {
		load: LoadConfig::lenient(),
		..EditorSettings::default()
	};
	let mut editor = Editor::new(settings);
	editor.load_fighter_file("{}").unwrap();

	assert!(editor.is_loaded());
	assert!(editor.animations().is_empty());
	assert_eq!(editor.frame_timing(), &[1; 10]);
}

#[test]
fn empty_document_is_rejected_by_default() {
	let mut editor = Editor::new(EditorSettings::default());
	assert!(matches!(editor.load_fighter_file("{}"), Err(ParseError::EmptyDocument)));
}

#[test]
fn loop_by_default_and_layers_come_from_settings() {
	let settings = EditorSettings::from_toml_str(
		r#"
		layers = ["Shadow", "Body", "Effects"]

		[playback]
		loop_by_default = true

		[viewer]
		zoom_default = 150
		"#,
	)
	.unwrap();
	let mut editor = Editor::new(settings);
	assert!(editor.player().is_looping());
	assert_eq!(editor.zoom().percent(), 150.0);

	editor.layers_mut().move_to(2, 0).unwrap();
	assert_eq!(editor.layers().layers(), ["Effects", "Shadow", "Body"]);

	editor.zoom_mut().apply_wheel(-200.0);
	assert_eq!(editor.zoom().percent(), 160.0);
}

#[test]
fn invalid_settings_are_reported() {
	let err = EditorSettings::from_toml_str("[viewer]\nzoom_min = 300\n").unwrap_err();
	assert!(matches!(err, SettingsError::Invalid(_)));
}
