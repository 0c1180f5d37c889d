//! Prelude module for `fightanim_internal`.
//!
//! This module provides a convenient way to import commonly used types.
//!
//! # Examples
//!
//! ```rust
//! use fightanim_internal::prelude::*;
//!
//! let mut editor = Editor::new(EditorSettings::default());
//! let fighter: FighterFile = r#"{"Jump": {"loop_and_end": [0, 4]}}"#.parse().unwrap();
//! assert_eq!(fighter.len(), 1);
//!
//! editor.load_fighter_file(r#"{"Jump": {"loop_and_end": [0, 4]}}"#).unwrap();
//! assert_eq!(editor.animations()[0].status, AnimationStatus::NotStarted);
//! ```

// Re-export everything from the member preludes
#[doc(inline)]
pub use fightanim_editor::prelude::*;
#[doc(inline)]
pub use fightanim_types::prelude::*;

// Re-export the member crates for advanced usage
#[doc(inline)]
pub use fightanim_editor;
#[doc(inline)]
pub use fightanim_types;
