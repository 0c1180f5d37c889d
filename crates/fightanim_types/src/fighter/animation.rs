//! Animation types.
//!
//! An [`Animation`] is one named entry of a fighter file. Its `status` and
//! `kind` are editor-local annotations: the file format carries neither, so
//! every freshly loaded animation starts as [`AnimationStatus::NotStarted`]
//! and [`AnimationKind::Default`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{error::UnknownTagError, frame::AnimationFrame};

/// Authoring progress of an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationStatus {
	/// Work has not begun
	#[default]
	NotStarted,
	/// Work is underway
	InProgress,
	/// Work is complete
	Finished,
}

impl AnimationStatus {
	/// All statuses in workflow order.
	pub const ALL: [Self; 3] = [Self::NotStarted, Self::InProgress, Self::Finished];

	/// Tag used in serialized form.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::NotStarted => "not-started",
			Self::InProgress => "in-progress",
			Self::Finished => "finished",
		}
	}
}

impl fmt::Display for AnimationStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for AnimationStatus {
	type Err = UnknownTagError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL.into_iter().find(|status| status.as_str() == s).ok_or_else(|| UnknownTagError {
			kind: "animation status",
			value: s.to_string(),
		})
	}
}

/// Category of an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
	/// Standard move set animation
	#[default]
	Default,
	/// Optional or bonus animation
	Extra,
}

impl AnimationKind {
	/// All kinds.
	pub const ALL: [Self; 2] = [Self::Default, Self::Extra];

	/// Tag used in serialized form.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Default => "default",
			Self::Extra => "extra",
		}
	}
}

impl fmt::Display for AnimationKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for AnimationKind {
	type Err = UnknownTagError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL.into_iter().find(|kind| kind.as_str() == s).ok_or_else(|| UnknownTagError {
			kind: "animation type",
			value: s.to_string(),
		})
	}
}

/// Inclusive frame range `[loop_start, end]` that playback cycles within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoopBounds {
	/// First frame of the loop
	pub loop_start: usize,
	/// Last frame of the animation
	pub end: usize,
}

impl LoopBounds {
	/// Creates bounds, returning `None` when `loop_start > end`.
	pub fn new(loop_start: usize, end: usize) -> Option<Self> {
		(loop_start <= end).then_some(Self {
			loop_start,
			end,
		})
	}

	/// Bounds covering `[0, total_frames - 1]`, or `None` for zero frames.
	pub fn full(total_frames: usize) -> Option<Self> {
		total_frames.checked_sub(1).map(|end| Self {
			loop_start: 0,
			end,
		})
	}

	/// Returns `true` when `frame` lies inside the bounds.
	pub fn contains(&self, frame: usize) -> bool {
		(self.loop_start..=self.end).contains(&frame)
	}

	/// Number of frames inside the bounds.
	pub fn len(&self) -> usize {
		self.end - self.loop_start + 1
	}

	/// Always `false`; bounds hold at least one frame.
	pub fn is_empty(&self) -> bool {
		false
	}
}

impl fmt::Display for LoopBounds {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}..={}", self.loop_start, self.end)
	}
}

/// A named animation with its frames and loop bounds.
///
/// Invariant: `loop_start_frame <= end_frame`.
///
/// # Examples
///
/// ```
/// use fightanim_types::fighter::{Animation, AnimationKind, AnimationStatus};
///
/// let anim = Animation::new("Idle", 1, 3);
/// assert_eq!(anim.status, AnimationStatus::NotStarted);
/// assert_eq!(anim.kind, AnimationKind::Default);
/// assert_eq!(anim.bounds().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
	/// Unique animation name
	pub name: String,
	/// Authoring status
	pub status: AnimationStatus,
	/// Animation category
	#[serde(rename = "type")]
	pub kind: AnimationKind,
	/// First frame of the loop range
	pub loop_start_frame: usize,
	/// Last frame of the animation
	pub end_frame: usize,
	/// Frames in authored order
	pub frames: Vec<AnimationFrame>,
}

impl Animation {
	/// Creates an animation with no frames and default annotations.
	pub fn new(name: &str, loop_start_frame: usize, end_frame: usize) -> Self {
		Self {
			name: name.to_string(),
			status: AnimationStatus::default(),
			kind: AnimationKind::default(),
			loop_start_frame,
			end_frame,
			frames: Vec::new(),
		}
	}

	/// Loop bounds of this animation.
	pub fn bounds(&self) -> LoopBounds {
		LoopBounds {
			loop_start: self.loop_start_frame,
			end: self.end_frame,
		}
	}

	/// Returns the frame at `index`, if any.
	pub fn frame(&self, index: usize) -> Option<&AnimationFrame> {
		self.frames.get(index)
	}

	/// Number of authored frames.
	pub fn frame_count(&self) -> usize {
		self.frames.len()
	}

	/// Total hurtboxes across all frames.
	pub fn hurtbox_count(&self) -> usize {
		self.frames.iter().filter_map(AnimationFrame::hurtboxes).map(<[_]>::len).sum()
	}
}

impl fmt::Display for Animation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Animation({}, {} frames, loop {}, {}, {})",
			self.name,
			self.frames.len(),
			self.bounds(),
			self.status,
			self.kind
		)
	}
}
