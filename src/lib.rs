#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `fightanim-rs` is the core of a 2D fighting-game character animation editor.
//!
//! It loads fighter files, derives the playback timeline and holds the editor
//! state a view layer reads and drives.
//!
pub use fightanim_internal::*;
