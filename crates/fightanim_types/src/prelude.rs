//! Prelude module for `fightanim_types`.
//!
//! This module provides a convenient way to import commonly used types.
//!
//! # Examples
//!
//! ```
//! use fightanim_types::prelude::*;
//!
//! let anim = Animation::new("Idle", 0, 3);
//! assert_eq!(anim.bounds(), LoopBounds::new(0, 3).unwrap());
//! ```

#[doc(inline)]
pub use crate::fighter::{
	// Model types
	Animation,
	AnimationFrame,
	AnimationKind,
	AnimationStatus,
	Hurtbox,
	ImageChannel,
	ImagePlacement,
	LoopBounds,
	Placeholder,
	PlaceholderChannel,
	PlaceholderItem,
	// Loader
	File as FighterFile,
	LoadConfig,
	// Errors
	ParseError,
};

// Re-export the fighter module for advanced usage
#[doc(inline)]
pub use crate::fighter;
