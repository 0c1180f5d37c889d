//! Manual frame navigation

use fightanim_rs::prelude::*;

use crate::loaded_editor;

#[test]
fn next_wraps_to_loop_start() {
	let mut editor = loaded_editor();
	editor.select_animation("Hadouken").unwrap();
	editor.last_frame();
	assert_eq!(editor.current_frame(), 7);

	assert_eq!(editor.next_frame(), 2);
	assert_eq!(editor.next_frame(), 3);
}

#[test]
fn previous_wraps_to_end_regardless_of_loop_flag() {
	let mut editor = loaded_editor();
	editor.select_animation("Idle").unwrap();

	for looping in [false, true] {
		editor.set_looping(looping);
		editor.first_frame();
		assert_eq!(editor.previous_frame(), 3);
	}
}

#[test]
fn unselected_navigation_spans_timeline() {
	let mut editor = loaded_editor();
	assert_eq!(editor.active_bounds(), LoopBounds::new(0, 7));

	assert_eq!(editor.previous_frame(), 7);
	assert_eq!(editor.next_frame(), 0);
	assert_eq!(editor.last_frame(), 7);
	assert_eq!(editor.first_frame(), 0);
}

#[test]
fn navigate_command_matches_shortcuts() {
	let mut editor = loaded_editor();
	editor.select_animation("Idle").unwrap();
	assert_eq!(editor.navigate(Navigation::Last), 3);
	assert_eq!(editor.navigate(Navigation::Next), 1);
	assert_eq!(editor.navigate(Navigation::Previous), 3);
	assert_eq!(editor.navigate(Navigation::First), 1);
}

#[test]
fn go_to_frame_is_range_checked() {
	let mut editor = loaded_editor();
	editor.go_to_frame(7).unwrap();
	assert_eq!(
		editor.go_to_frame(8),
		Err(EditorError::FrameOutOfRange {
			frame: 8,
			total: 8,
		})
	);
	assert_eq!(editor.current_frame(), 7);
}

#[test]
fn bounds_edits_move_navigation() {
	let mut editor = loaded_editor();
	editor.select_animation("Taunt").unwrap();
	editor.set_bounds("Taunt", 4, 6).unwrap();
	assert_eq!(editor.first_frame(), 4);
	assert_eq!(editor.last_frame(), 6);
	assert_eq!(editor.next_frame(), 4);

	assert!(editor.set_bounds("Taunt", 6, 4).is_err());
	assert_eq!(editor.selected_animation().unwrap().bounds(), LoopBounds::new(4, 6).unwrap());
}

#[test]
fn timeline_follows_head_and_selection() {
	let mut editor = loaded_editor();
	editor.select_animation("Idle").unwrap();
	editor.go_to_frame(5).unwrap();

	let cells = editor.timeline();
	assert_eq!(cells.len(), 8);
	assert_eq!(cells[1].marker, FrameMarker::LoopStart);
	assert_eq!(cells[3].marker, FrameMarker::End);
	assert_eq!(cells[5].marker, FrameMarker::Current);
	assert_eq!(cells.iter().filter(|cell| cell.marker == FrameMarker::Plain).count(), 5);
}
