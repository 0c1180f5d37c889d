//! Error types for editor state operations.

use thiserror::Error;

/// Errors returned by editor mutators.
///
/// A failed mutation leaves the editor state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
	/// No animation with the given name is loaded
	#[error("Unknown animation '{0}'")]
	UnknownAnimation(String),

	/// Loop start lies after the end frame
	#[error("Invalid loop bounds: loop start {loop_start} is after end frame {end}")]
	InvalidBounds {
		/// Requested loop start
		loop_start: usize,
		/// Requested end frame
		end: usize,
	},

	/// Frame index outside the timeline
	#[error("Frame {frame} out of range (total frames: {total})")]
	FrameOutOfRange {
		/// Requested frame
		frame: usize,
		/// Current total frame count
		total: usize,
	},

	/// Layer index outside the layer list
	#[error("Layer index {index} out of range (layers: {len})")]
	LayerOutOfRange {
		/// Requested layer index
		index: usize,
		/// Number of layers
		len: usize,
	},
}

/// Errors that can occur when loading editor settings.
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The configuration sources could not be read or deserialised
	#[error(transparent)]
	Config(#[from] config::ConfigError),

	/// The settings were read but are inconsistent
	#[error("Invalid settings: {0}")]
	Invalid(String),
}
