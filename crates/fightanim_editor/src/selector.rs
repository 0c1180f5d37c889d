//! Animation list filtering.

use std::{fmt, str::FromStr};

use fightanim_types::fighter::{Animation, AnimationKind, UnknownTagError};

/// Type filter of the animation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KindFilter {
	/// Every animation
	#[default]
	All,
	/// Only animations of one kind
	Only(AnimationKind),
}

impl KindFilter {
	/// Returns `true` when `kind` passes the filter.
	pub fn matches(self, kind: AnimationKind) -> bool {
		match self {
			Self::All => true,
			Self::Only(only) => only == kind,
		}
	}
}

impl fmt::Display for KindFilter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::All => f.write_str("all"),
			Self::Only(kind) => f.write_str(kind.as_str()),
		}
	}
}

impl FromStr for KindFilter {
	type Err = UnknownTagError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s == "all" {
			return Ok(Self::All);
		}
		s.parse().map(Self::Only)
	}
}

/// Search term plus type filter.
///
/// # Examples
///
/// ```
/// use fightanim_editor::AnimationFilter;
/// use fightanim_types::fighter::Animation;
///
/// let animations = vec![Animation::new("Idle", 0, 0), Animation::new("WalkForward", 0, 0)];
/// let filter = AnimationFilter::with_search("walk");
/// let names: Vec<_> = filter.apply(&animations).map(|a| a.name.as_str()).collect();
/// assert_eq!(names, ["WalkForward"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimationFilter {
	/// Case-insensitive substring matched against animation names
	pub search: String,
	/// Type filter
	pub kind: KindFilter,
}

impl AnimationFilter {
	/// Filter with only a search term.
	pub fn with_search(search: &str) -> Self {
		Self {
			search: search.to_string(),
			kind: KindFilter::All,
		}
	}

	/// Returns `true` when `animation` passes both the search and the type filter.
	pub fn matches(&self, animation: &Animation) -> bool {
		self.kind.matches(animation.kind)
			&& animation.name.to_lowercase().contains(&self.search.to_lowercase())
	}

	/// Iterates over the matching animations, keeping their order.
	pub fn apply<'a>(&'a self, animations: &'a [Animation]) -> impl Iterator<Item = &'a Animation> {
		animations.iter().filter(move |animation| self.matches(animation))
	}
}
