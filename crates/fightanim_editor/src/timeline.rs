//! Timeline view model.
//!
//! One cell per global frame. Each cell carries its hold value and a single
//! marker, picked by precedence:
//!
//! | Marker      | Condition                         |
//! |-------------|-----------------------------------|
//! | `Current`   | cell is the playback head         |
//! | `LoopStart` | cell is the active `loop_start`   |
//! | `End`       | cell is the active `end`          |
//! | `Plain`     | anything else                     |

use fightanim_types::fighter::LoopBounds;
use serde::Serialize;

use crate::playback::PlaybackState;

/// Highlight of a timeline cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameMarker {
	/// The playback head
	Current,
	/// First frame of the loop range
	LoopStart,
	/// Last frame of the loop range
	End,
	/// No highlight
	Plain,
}

impl FrameMarker {
	/// Marker of `index` given the head position and the active bounds.
	pub fn of(index: usize, current: usize, bounds: Option<LoopBounds>) -> Self {
		if index == current {
			return Self::Current;
		}
		match bounds {
			Some(bounds) if index == bounds.loop_start => Self::LoopStart,
			Some(bounds) if index == bounds.end => Self::End,
			_ => Self::Plain,
		}
	}
}

/// One frame of the timeline view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineCell {
	/// Global frame index
	pub index: usize,
	/// Hold ticks of the frame
	pub hold_ticks: u32,
	/// Highlight
	pub marker: FrameMarker,
}

/// Builds the cells for every frame of `playback`.
///
/// `bounds` are the selected animation's bounds; with no selection only the
/// head is highlighted.
pub fn cells(playback: &PlaybackState, current: usize, bounds: Option<LoopBounds>) -> Vec<TimelineCell> {
	playback
		.frame_timing()
		.iter()
		.enumerate()
		.map(|(index, &hold_ticks)| TimelineCell {
			index,
			hold_ticks,
			marker: FrameMarker::of(index, current, bounds),
		})
		.collect()
}
