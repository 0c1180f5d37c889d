//! Derived playback state.
//!
//! The playback state is the global frame timeline shared by every animation:
//! how many frames exist and how many scheduler ticks each one is held.

use fightanim_types::fighter::Animation;
use rand::Rng;

/// Frame count and per-frame hold table.
///
/// # Examples
///
/// ```
/// use fightanim_editor::PlaybackState;
/// use fightanim_types::fighter::Animation;
///
/// let animations = vec![Animation::new("Idle", 1, 3), Animation::new("Walk", 0, 5)];
/// let playback = PlaybackState::derive(&animations).unwrap();
/// assert_eq!(playback.total_frames(), 6);
/// assert!(playback.frame_timing().iter().all(|&ticks| ticks == 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackState {
	frame_timing: Vec<u32>,
}

impl PlaybackState {
	/// Derives the playback state from a loaded animation set.
	///
	/// `total_frames = 1 + max(end_frame)` and every hold value is reset to `1`,
	/// discarding any previous timing edits. Returns `None` for an empty set
	/// or when the frame count does not fit in `usize`.
	pub fn derive(animations: &[Animation]) -> Option<Self> {
		let max_end = animations.iter().map(|anim| anim.end_frame).max()?;
		max_end.checked_add(1).map(Self::uniform)
	}

	/// A timeline of `total_frames` frames each held for one tick.
	pub fn uniform(total_frames: usize) -> Self {
		Self {
			frame_timing: vec![1; total_frames],
		}
	}

	/// A placeholder timeline with random hold values in `min..=max`.
	///
	/// Used before any fighter file is loaded. The bounds may be given in
	/// either order.
	pub fn seeded<R: Rng>(total_frames: usize, min: u32, max: u32, rng: &mut R) -> Self {
		let (min, max) = (min.min(max), min.max(max));
		Self {
			frame_timing: (0..total_frames).map(|_| rng.random_range(min..=max)).collect(),
		}
	}

	/// Number of frames on the timeline.
	pub fn total_frames(&self) -> usize {
		self.frame_timing.len()
	}

	/// Hold ticks for every frame.
	pub fn frame_timing(&self) -> &[u32] {
		&self.frame_timing
	}

	/// Hold ticks for `frame`, if it exists.
	pub fn hold_ticks(&self, frame: usize) -> Option<u32> {
		self.frame_timing.get(frame).copied()
	}

	/// Replaces the hold value of `frame`. Returns `false` if the frame does not exist.
	pub fn set_hold_ticks(&mut self, frame: usize, ticks: u32) -> bool {
		match self.frame_timing.get_mut(frame) {
			Some(slot) => {
				*slot = ticks;
				true
			}
			None => false,
		}
	}

	/// Sum of all hold values: ticks needed to play the whole timeline once.
	pub fn total_ticks(&self) -> u64 {
		self.frame_timing.iter().map(|&ticks| u64::from(ticks)).sum()
	}
}
