//! Tick-driven playback

use fightanim_rs::prelude::*;

use crate::loaded_editor;

fn run(editor: &mut Editor, ticks: usize) -> Vec<usize> {
	(0..ticks)
		.map(|_| {
			editor.tick();
			editor.current_frame()
		})
		.collect()
}

#[test]
fn holds_each_frame_for_its_timing() {
	let mut editor = loaded_editor();
	editor.select_animation("Idle").unwrap();
	editor.first_frame();
	editor.set_frame_timing_at(1, 3).unwrap();
	editor.set_frame_timing_at(2, 2).unwrap();
	editor.play();

	assert_eq!(run(&mut editor, 7), [1, 1, 2, 2, 3, 3, 3]);
}

#[test]
fn stays_at_end_without_looping() {
	let mut editor = loaded_editor();
	editor.select_animation("Idle").unwrap();
	editor.last_frame();
	editor.play();

	assert_eq!(run(&mut editor, 4), [3, 3, 3, 3]);
	assert!(editor.player().is_playing());
}

#[test]
fn wraps_to_loop_start_when_looping() {
	let mut editor = loaded_editor();
	editor.select_animation("Idle").unwrap();
	editor.set_looping(true);
	editor.last_frame();
	editor.play();

	assert_eq!(run(&mut editor, 4), [1, 2, 3, 1]);
}

#[test]
fn paused_editor_ignores_ticks() {
	let mut editor = loaded_editor();
	assert!(editor.toggle_play());
	assert!(!editor.toggle_play());
	assert_eq!(run(&mut editor, 3), [0, 0, 0]);
}

#[test]
fn manual_navigation_restarts_hold() {
	let mut editor = loaded_editor();
	editor.set_frame_timing_at(0, 2).unwrap();
	editor.set_frame_timing_at(1, 2).unwrap();
	editor.play();

	assert_eq!(editor.tick(), None);
	editor.go_to_frame(1).unwrap();
	assert_eq!(editor.tick(), None);
	assert_eq!(editor.tick(), Some(2));
}

#[test]
fn timing_editor_clamps() {
	let mut editor = loaded_editor();
	editor.go_to_frame(2).unwrap();
	assert_eq!(editor.set_frame_timing(25), 10);
	assert_eq!(editor.set_frame_timing(-1), 1);
	assert_eq!(editor.set_frame_timing(4), 4);
	assert_eq!(editor.frame_timing()[2], 4);
	assert_eq!(editor.playback().total_ticks(), 11);
}
