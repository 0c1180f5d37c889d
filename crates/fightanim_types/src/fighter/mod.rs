//! Fighter file format support for `fightanim-rs`.
//!
//! A fighter file describes the animation set of one character. It is a JSON
//! document whose records are stored as fixed-position arrays rather than
//! named fields. This module decodes it into [`Animation`]s with sparse
//! [`AnimationFrame`]s.
//!
//! # Document Structure
//!
//! ```text
//! {
//!   "<animation name>": {
//!     "loop_and_end": [loopStartFrame, endFrame],   required
//!     "<frame key>": { <frame fields> },            zero or more, in order
//!     ...
//!   },
//!   ...
//! }
//! ```
//!
//! Animation order and frame order follow the document. Frame keys are never
//! interpreted; only their position matters.
//!
//! ## Frame Fields
//!
//! ```text
//! Field                     Layout
//! ------------------------  ------------------------------------------------
//! img_main                  [id, spriteName, imageIndex, xoff, yoff,
//! img_other                  rotation, xscale, yscale, alpha, blendMode]
//! img_other_b
//! vfx_a, vfx_b
//! vfxind_a, vfxind_b
//! hurtboxes                 [[left, top, right, bottom, state], ...]
//! placeholder_body          [xoff, yoff, rotation]
//! placeholder_particle_a
//! placeholder_particle_b
//! placeholder_item          [id, xoff, yoff, rotation]
//! ```
//!
//! Every field is optional. A field that is missing (or `null`) stays `None`
//! in the decoded frame. The per-slot tables live in [`constants`].
//!
//! # Usage Examples
//!
//! ## Loading a fighter document
//!
//! ```
//! use fightanim_types::fighter;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let content = r#"{
//!     "Idle": {
//!         "loop_and_end": [1, 3],
//!         "f0": {"img_main": [1, "body", 0, 0, 0, 0, 1, 1, 1, "normal"]},
//!         "f1": {"hurtboxes": [[0, 0, 10, 10, "vulnerable"]]}
//!     }
//! }"#;
//!
//! let animations = fighter::load(content)?;
//! assert_eq!(animations[0].frames.len(), 2);
//! assert!(animations[0].frames[0].hurtboxes.is_none());
//! # Ok(())
//! # }
//! ```
//!
//! ## Strict validation
//!
//! ```
//! use fightanim_types::fighter::{File, LoadConfig};
//!
//! let content = r#"{"Idle": {"loop_and_end": [0, 0], "f0": {"sfx": 3}}}"#;
//! assert!(File::from_str_with_config(content, &LoadConfig::default()).is_ok());
//! assert!(File::from_str_with_config(content, &LoadConfig::strict()).is_err());
//! ```

mod decode;
mod error;

pub mod animation;
pub mod constants;
pub mod file;
pub mod frame;
pub mod load_config;
pub mod records;

pub use self::animation::{Animation, AnimationKind, AnimationStatus, LoopBounds};
pub use self::error::{FieldContext, ParseError, UnknownTagError};
pub use self::file::{File, load, load_with_config};
pub use self::frame::{AnimationFrame, ImageChannel, PlaceholderChannel};
pub use self::load_config::{DEFAULT_MAX_FRAMES, LoadConfig};
pub use self::records::{Hurtbox, ImagePlacement, Placeholder, PlaceholderItem};
