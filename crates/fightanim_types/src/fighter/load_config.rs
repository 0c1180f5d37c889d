//! Load configuration for fighter files.
//!
//! This module provides the options that control how tolerant the loader is
//! towards documents that deviate from the canonical layout, and the limits
//! that keep a malformed document from exhausting memory.

use serde::{Deserialize, Serialize};

/// Default upper bound (exclusive) on `loop_and_end` frame indices.
pub const DEFAULT_MAX_FRAMES: usize = 65_536;

/// Configuration for loading fighter documents.
///
/// # Presets
///
/// Three presets are available for common use cases:
/// - `default()`: rejects empty documents, ignores unknown frame fields,
///   tolerates trailing slots
/// - `strict()`: rejects empty documents, unknown frame fields and trailing slots
/// - `lenient()`: accepts everything `default()` does plus empty documents
///
/// Every preset caps frame indices at [`DEFAULT_MAX_FRAMES`].
///
/// # Examples
///
/// ```
/// use fightanim_types::fighter::LoadConfig;
///
/// let config = LoadConfig::default();
/// assert!(!config.allow_empty);
///
/// let strict = LoadConfig::strict();
/// assert!(strict.reject_unknown_fields);
/// assert_eq!(strict.max_frames, 65_536);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
	/// Accept a document with no animations
	pub allow_empty: bool,
	/// Fail when a frame record carries a key outside the known field set
	pub reject_unknown_fields: bool,
	/// Accept positional records with more slots than their layout declares
	pub allow_extra_slots: bool,
	/// Exclusive upper bound on end frames; the playback timeline spans `end + 1` frames
	pub max_frames: usize,
}

impl Default for LoadConfig {
	fn default() -> Self {
		Self {
			allow_empty: false,
			reject_unknown_fields: false,
			allow_extra_slots: true,
			max_frames: DEFAULT_MAX_FRAMES,
		}
	}
}

impl LoadConfig {
	/// Create a configuration with explicit options.
	pub fn new(
		allow_empty: bool,
		reject_unknown_fields: bool,
		allow_extra_slots: bool,
		max_frames: usize,
	) -> Self {
		Self {
			allow_empty,
			reject_unknown_fields,
			allow_extra_slots,
			max_frames,
		}
	}

	/// Create a strict configuration.
	///
	/// Suitable for validating files before they are shipped.
	pub fn strict() -> Self {
		Self {
			allow_empty: false,
			reject_unknown_fields: true,
			allow_extra_slots: false,
			max_frames: DEFAULT_MAX_FRAMES,
		}
	}

	/// Create a lenient configuration that also accepts empty documents.
	pub fn lenient() -> Self {
		Self {
			allow_empty: true,
			reject_unknown_fields: false,
			allow_extra_slots: true,
			max_frames: DEFAULT_MAX_FRAMES,
		}
	}
}
