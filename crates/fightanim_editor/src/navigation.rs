//! Frame navigation policy.
//!
//! All four transitions work on inclusive [`LoopBounds`]: the selected
//! animation's `[loop_start, end]`, or `[0, total_frames - 1]` when nothing is
//! selected. Stepping past either end wraps to the other.

use fightanim_types::fighter::LoopBounds;

/// A manual navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Navigation {
	/// Step forward, wrapping from `end` to `loop_start`
	Next,
	/// Step backward, wrapping from `loop_start` to `end`
	Previous,
	/// Jump to `loop_start`
	First,
	/// Jump to `end`
	Last,
}

impl Navigation {
	/// Applies the transition to `current` within `bounds`.
	///
	/// # Examples
	///
	/// ```
	/// use fightanim_editor::Navigation;
	/// use fightanim_types::fighter::LoopBounds;
	///
	/// let bounds = LoopBounds::new(1, 3).unwrap();
	/// assert_eq!(Navigation::Next.apply(2, bounds), 3);
	/// assert_eq!(Navigation::Next.apply(3, bounds), 1);
	/// assert_eq!(Navigation::Previous.apply(1, bounds), 3);
	/// ```
	pub fn apply(self, current: usize, bounds: LoopBounds) -> usize {
		match self {
			Self::Next => next(current, bounds),
			Self::Previous => previous(current, bounds),
			Self::First => bounds.loop_start,
			Self::Last => bounds.end,
		}
	}
}

/// `current + 1` while below `end`, otherwise `loop_start`.
pub fn next(current: usize, bounds: LoopBounds) -> usize {
	if current < bounds.end {
		current + 1
	} else {
		bounds.loop_start
	}
}

/// `current - 1` while above `loop_start`, otherwise `end`.
pub fn previous(current: usize, bounds: LoopBounds) -> usize {
	if current > bounds.loop_start {
		current - 1
	} else {
		bounds.end
	}
}

/// One auto-advance step: like [`next`], but holds at `end` when not looping.
pub fn advance(current: usize, bounds: LoopBounds, looping: bool) -> usize {
	if current >= bounds.end && !looping {
		current
	} else {
		next(current, bounds)
	}
}
