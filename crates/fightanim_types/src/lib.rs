//! This crate provides the data model and loader for fighter animation files.
//!
//! # Contents
//!
//! - **Fighter files**: JSON documents describing a character's animation set,
//!   with positional records for images, hurtboxes and placeholders
//! - **Animations**: named frame sequences with loop bounds and editor-local
//!   status and type annotations
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use fightanim_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let fighter = FighterFile::open("ryu.fighter")?;
//! for animation in &fighter {
//!     println!("{}: {} frames", animation.name, animation.frame_count());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```
//! use fightanim_types::fighter::{self, AnimationStatus};
//!
//! let animations = fighter::load(r#"{"Idle": {"loop_and_end": [0, 0]}}"#).unwrap();
//! assert_eq!(animations[0].status, AnimationStatus::NotStarted);
//! ```

pub mod fighter;

/// `use fightanim_types::prelude::*;` to import commonly used items.
pub mod prelude;
