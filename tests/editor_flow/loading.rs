//! Loader behaviour through the public facade

use fightanim_rs::prelude::*;

use crate::{IDLE, fixture, loaded_editor, sample_content};

#[test_log::test]
fn idle_scenario() {
	let mut editor = Editor::new(EditorSettings::default());
	editor.load_fighter_file(IDLE).unwrap();

	let [idle] = editor.animations() else {
		panic!("expected exactly one animation");
	};
	assert_eq!(idle.name, "Idle");
	assert_eq!(idle.loop_start_frame, 1);
	assert_eq!(idle.end_frame, 3);
	assert_eq!(idle.frame_count(), 2);

	let f0 = &idle.frames[0];
	assert_eq!(f0.img_main.as_ref().map(|img| img.sprite_name.as_str()), Some("body"));
	assert!(f0.hurtboxes.is_none());

	let f1 = &idle.frames[1];
	assert!(f1.img_main.is_none());
	assert_eq!(
		f1.hurtboxes.as_deref(),
		Some(
			&[Hurtbox {
				left: 0.0,
				top: 0.0,
				right: 10.0,
				bottom: 10.0,
				state: "vulnerable".to_string(),
			}][..]
		)
	);

	assert_eq!(editor.total_frames(), 4);
	assert_eq!(editor.frame_timing(), &[1, 1, 1, 1]);
}

#[test]
fn document_order_is_preserved() {
	let editor = loaded_editor();
	let names: Vec<_> = editor.animations().iter().map(|anim| anim.name.as_str()).collect();
	assert_eq!(names, ["Idle", "Hadouken", "Taunt"]);

	let idle = editor.animation("Idle").unwrap();
	let indices: Vec<_> =
		idle.frames.iter().map(|frame| frame.img_main.as_ref().unwrap().image_index).collect();
	assert_eq!(indices, [0, 1, 2]);
}

#[test]
fn every_channel_decodes() {
	let editor = loaded_editor();

	let release = &editor.animation("Hadouken").unwrap().frames[1];
	let channels: Vec<_> = release.images().map(|(channel, _)| channel).collect();
	assert_eq!(
		channels,
		[ImageChannel::Main, ImageChannel::Other, ImageChannel::VfxA, ImageChannel::VfxIndA]
	);
	let fireball = release.image(ImageChannel::VfxA).unwrap();
	assert_eq!(fireball.blend_mode, "additive");
	assert_eq!(fireball.xscale, 1.25);
	assert_eq!(fireball.alpha, 0.9);
	assert!(release.placeholder(PlaceholderChannel::ParticleA).is_none());
	assert_eq!(release.placeholder(PlaceholderChannel::ParticleB).unwrap().rotation, 12.5);
	assert_eq!(release.placeholder_item.as_ref().unwrap().id, 3);

	let taunt = &editor.animation("Taunt").unwrap().frames[0];
	assert!(taunt.img_main.is_none());
	assert_eq!(taunt.img_other_b.as_ref().unwrap().rotation, 15.0);
	assert_eq!(taunt.vfx_b.as_ref().unwrap().sprite_name, "sparkle");
	assert_eq!(taunt.vfxind_b.as_ref().unwrap().blend_mode, "screen");
}

#[test]
fn loaded_animations_carry_default_annotations() {
	let editor = loaded_editor();
	for animation in editor.animations() {
		assert_eq!(animation.status, AnimationStatus::NotStarted);
		assert_eq!(animation.kind, AnimationKind::Default);
	}
	assert_eq!(editor.total_frames(), 8);
	assert_eq!(editor.frame_timing(), &[1; 8]);
}

#[test]
fn failed_load_is_atomic() {
	let mut editor = loaded_editor();
	editor.set_status("Taunt", AnimationStatus::InProgress).unwrap();
	editor.set_frame_timing_at(5, 4).unwrap();
	editor.go_to_frame(6).unwrap();
	let before: Vec<Animation> = editor.animations().to_vec();

	let err = editor
		.load_fighter_file(r#"{"Idle": {"loop_and_end": [0, 1]}, "Walk": {"f0": {}}}"#)
		.unwrap_err();
	assert!(matches!(err, ParseError::MissingLoopAndEnd { ref animation } if animation == "Walk"));

	assert_eq!(editor.animations(), &before[..]);
	assert_eq!(editor.frame_timing()[5], 4);
	assert_eq!(editor.current_frame(), 6);
}

#[test_log::test]
fn oversized_end_frame_is_rejected() {
	let mut editor = loaded_editor();
	editor.set_frame_timing_at(2, 3).unwrap();
	editor.go_to_frame(4).unwrap();

	let err = editor
		.load_fighter_file(r#"{"Idle": {"loop_and_end": [0, 4000000000000000000]}}"#)
		.unwrap_err();
	assert!(matches!(err, ParseError::TooManyFrames { .. }));
	assert_eq!(err.animation(), Some("Idle"));

	assert_eq!(editor.animations().len(), 3);
	assert_eq!(editor.total_frames(), 8);
	assert_eq!(editor.frame_timing()[2], 3);
	assert_eq!(editor.current_frame(), 4);
}

#[test]
fn slot_errors_name_their_location() {
	let mut editor = loaded_editor();
	let content = r#"{"Jab": {"loop_and_end": [0, 1], "j0": {"hurtboxes": [[0, 0, 5, 5, "vulnerable"], [0, 0, "wide", 5, "vulnerable"]]}}}"#;

	let err = editor.load_fighter_file(content).unwrap_err();
	assert_eq!(err.animation(), Some("Jab"));
	let message = err.to_string();
	assert!(message.contains("frame 'j0'"), "{message}");
	assert!(message.contains("hurtboxes"), "{message}");
	assert_eq!(editor.animations().len(), 3);
}

#[test]
fn reload_resets_edits() {
	let mut editor = loaded_editor();
	editor.set_status("Idle", AnimationStatus::Finished).unwrap();
	editor.set_bounds("Idle", 0, 2).unwrap();
	editor.set_frame_timing_at(0, 9).unwrap();

	editor.load_fighter_file(&sample_content()).unwrap();
	let idle = editor.animation("Idle").unwrap();
	assert_eq!(idle.status, AnimationStatus::NotStarted);
	assert_eq!(idle.bounds(), LoopBounds::new(1, 3).unwrap());
	assert_eq!(editor.frame_timing(), &[1; 8]);
}

#[test]
fn open_from_disk() {
	let mut editor = Editor::new(EditorSettings::default());
	editor.open_fighter_file(fixture("sample.fighter")).unwrap();
	assert_eq!(editor.animations().len(), 3);

	let fighter = FighterFile::open(fixture("sample.fighter")).unwrap();
	assert_eq!(fighter.animations(), editor.animations());
	assert_eq!(fighter.max_end_frame(), Some(7));

	let missing = editor.open_fighter_file(fixture("missing.fighter"));
	assert!(matches!(missing, Err(ParseError::IOError(_))));
	assert_eq!(editor.animations().len(), 3);
}

#[test]
fn stale_loads_never_apply() {
	let mut editor = Editor::new(EditorSettings::default());
	let slow = editor.begin_load();
	let fast = editor.begin_load();

	assert_eq!(editor.finish_load(fast, IDLE).unwrap(), LoadOutcome::Applied);
	assert_eq!(editor.finish_load(slow, &sample_content()).unwrap(), LoadOutcome::Stale);
	assert_eq!(editor.animations().len(), 1);
	assert_eq!(editor.total_frames(), 4);
}

#[test]
fn failed_ticketed_load_keeps_ticket_current() {
	let mut editor = Editor::new(EditorSettings::default());
	let ticket = editor.begin_load();
	assert!(editor.finish_load(ticket, "not json").is_err());
	assert!(!editor.is_loaded());

	assert_eq!(editor.finish_load(ticket, IDLE).unwrap(), LoadOutcome::Applied);
}

#[test]
fn json_dump_uses_editor_field_names() {
	let editor = loaded_editor();
	let json = serde_json::to_value(editor.animation("Idle").unwrap()).unwrap();
	assert_eq!(json["status"], "not-started");
	assert_eq!(json["type"], "default");
	assert_eq!(json["loopStartFrame"], 1);
	assert_eq!(json["frames"][0]["imgMain"]["spriteName"], "ryu_idle");
	assert!(json["frames"][2].get("hurtboxes").is_none());
}
