//! Tick-driven playback head.
//!
//! The display refresh clock calls [`Player::tick`] once per refresh. The
//! player counts elapsed ticks on the current frame and advances once the
//! frame's hold value has elapsed.

use fightanim_types::fighter::LoopBounds;
use log::trace;

use crate::navigation;

/// Playback flags and the elapsed-tick counter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
	playing: bool,
	looping: bool,
	elapsed: u32,
}

impl Player {
	/// Creates a paused player.
	pub fn new(looping: bool) -> Self {
		Self {
			playing: false,
			looping,
			elapsed: 0,
		}
	}

	/// Returns `true` while playing.
	pub fn is_playing(&self) -> bool {
		self.playing
	}

	/// Starts playback from a fresh hold count.
	pub fn play(&mut self) {
		self.playing = true;
		self.elapsed = 0;
	}

	/// Stops playback.
	pub fn pause(&mut self) {
		self.playing = false;
		self.elapsed = 0;
	}

	/// Toggles between playing and paused. Returns the new state.
	pub fn toggle_play(&mut self) -> bool {
		if self.playing {
			self.pause();
		} else {
			self.play();
		}
		self.playing
	}

	/// Returns `true` when playback wraps from `end` to `loop_start`.
	pub fn is_looping(&self) -> bool {
		self.looping
	}

	/// Enables or disables looping.
	pub fn set_looping(&mut self, looping: bool) {
		self.looping = looping;
	}

	/// Toggles looping. Returns the new state.
	pub fn toggle_looping(&mut self) -> bool {
		self.looping = !self.looping;
		self.looping
	}

	/// Ticks spent on the current frame so far.
	pub fn elapsed_ticks(&self) -> u32 {
		self.elapsed
	}

	/// Restarts the hold count, e.g. after the head was moved by hand.
	pub fn reset_hold(&mut self) {
		self.elapsed = 0;
	}

	/// Consumes one scheduler tick.
	///
	/// Returns the new frame when the head moved. A hold value of `0` is
	/// treated as `1`. With looping disabled the head stays at `bounds.end`.
	pub fn tick(&mut self, current: usize, bounds: LoopBounds, hold_ticks: u32) -> Option<usize> {
		if !self.playing {
			return None;
		}

		self.elapsed += 1;
		if self.elapsed < hold_ticks.max(1) {
			return None;
		}

		self.elapsed = 0;
		let next = navigation::advance(current, bounds, self.looping);
		trace!("Playback tick: frame {} -> {} within {}", current, next, bounds);
		(next != current).then_some(next)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn bounds(loop_start: usize, end: usize) -> LoopBounds {
		LoopBounds::new(loop_start, end).unwrap()
	}

	#[test]
	fn test_paused_player_ignores_ticks() {
		let mut player = Player::new(true);
		assert_eq!(player.tick(0, bounds(0, 3), 1), None);
		assert_eq!(player.elapsed_ticks(), 0);
	}

	#[test]
	fn test_hold_ticks_elapse_before_advancing() {
		let mut player = Player::new(false);
		player.play();

		let b = bounds(0, 3);
		assert_eq!(player.tick(0, b, 3), None);
		assert_eq!(player.tick(0, b, 3), None);
		assert_eq!(player.tick(0, b, 3), Some(1));
		assert_eq!(player.elapsed_ticks(), 0);
	}

	#[test]
	fn test_zero_hold_behaves_like_one() {
		let mut player = Player::new(false);
		player.play();
		assert_eq!(player.tick(0, bounds(0, 3), 0), Some(1));
	}

	#[test]
	fn test_stops_at_end_without_loop() {
		let mut player = Player::new(false);
		player.play();

		let b = bounds(1, 2);
		assert_eq!(player.tick(2, b, 1), None);
		assert_eq!(player.tick(2, b, 1), None);
		assert!(player.is_playing());
	}

	#[test]
	fn test_wraps_at_end_with_loop() {
		let mut player = Player::new(false);
		assert!(player.toggle_looping());
		assert!(player.toggle_play());

		assert_eq!(player.tick(2, bounds(1, 2), 1), Some(1));
	}

	#[test]
	fn test_pause_resets_hold_count() {
		let mut player = Player::new(false);
		player.play();
		assert_eq!(player.tick(0, bounds(0, 3), 5), None);
		assert_eq!(player.elapsed_ticks(), 1);

		assert!(!player.toggle_play());
		assert_eq!(player.elapsed_ticks(), 0);
	}
}
