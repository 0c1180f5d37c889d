//! This module is separated into its own crate so the `fightanim` facade stays a thin re-export, and should not be used directly.

/// `use fightanim_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export the member crates for convenience
pub use fightanim_editor;
pub use fightanim_types;

// Re-export commonly used types at crate root
pub use fightanim_editor::{Editor, EditorError, EditorSettings, LoadOutcome, LoadTicket};
pub use fightanim_types::fighter::{Animation, File as FighterFile, LoadConfig, ParseError};
