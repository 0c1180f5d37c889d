//! Error types for fighter file loading.

use std::fmt;

use thiserror::Error;

/// Location of a positional record inside a fighter document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldContext {
	/// Animation name (top-level key)
	pub animation: String,
	/// Frame record key, `None` for animation-level fields such as `loop_and_end`
	pub frame: Option<String>,
	/// Field key inside the record
	pub field: &'static str,
	/// Entry index for list fields such as `hurtboxes`
	pub entry: Option<usize>,
}

impl FieldContext {
	/// Context for an animation-level field.
	pub fn animation_field(animation: &str, field: &'static str) -> Self {
		Self {
			animation: animation.to_string(),
			frame: None,
			field,
			entry: None,
		}
	}

	/// Context for a field inside a frame record.
	pub fn frame_field(animation: &str, frame: &str, field: &'static str) -> Self {
		Self {
			animation: animation.to_string(),
			frame: Some(frame.to_string()),
			field,
			entry: None,
		}
	}

	/// Returns a copy of this context pointing at a list entry.
	pub fn with_entry(&self, entry: usize) -> Self {
		Self {
			entry: Some(entry),
			..self.clone()
		}
	}
}

impl fmt::Display for FieldContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "animation '{}'", self.animation)?;
		if let Some(frame) = &self.frame {
			write!(f, ", frame '{}'", frame)?;
		}
		write!(f, ", field `{}`", self.field)?;
		if let Some(entry) = self.entry {
			write!(f, "[{}]", entry)?;
		}
		Ok(())
	}
}

/// Errors that can occur when loading a fighter file.
///
/// A failed load never yields a partial animation set.
#[derive(Debug, Error)]
pub enum ParseError {
	/// The content is not a well-formed JSON document
	#[error("Malformed fighter document: {0}")]
	Json(#[from] serde_json::Error),

	/// The file could not be read
	#[error(transparent)]
	IOError(#[from] std::io::Error),

	/// The document root is not an object
	#[error("Fighter document root must be an object, found {found}")]
	RootNotObject {
		/// JSON type found instead
		found: &'static str,
	},

	/// The document contains no animations
	#[error("Fighter document contains no animations")]
	EmptyDocument,

	/// An animation record is not an object
	#[error("Animation '{animation}' must be an object, found {found}")]
	AnimationNotObject {
		/// Animation name
		animation: String,
		/// JSON type found instead
		found: &'static str,
	},

	/// An animation record lacks `loop_and_end`
	#[error("Animation '{animation}' is missing required field `loop_and_end`")]
	MissingLoopAndEnd {
		/// Animation name
		animation: String,
	},

	/// A frame record is not an object
	#[error("Animation '{animation}': frame '{frame}' must be an object, found {found}")]
	FrameNotObject {
		/// Animation name
		animation: String,
		/// Frame record key
		frame: String,
		/// JSON type found instead
		found: &'static str,
	},

	/// A positional record is not an array
	#[error("{context}: expected an array, found {found}")]
	NotAnArray {
		/// Record location
		context: FieldContext,
		/// JSON type found instead
		found: &'static str,
	},

	/// A positional record has the wrong number of slots
	#[error("{context}: expected {expected} slots, found {actual}")]
	SlotCount {
		/// Record location
		context: FieldContext,
		/// Slots required by the record layout
		expected: usize,
		/// Slots present in the document
		actual: usize,
	},

	/// A slot holds a value of the wrong type
	#[error("{context}: slot {slot} ({name}) must be {expected}, found {found}")]
	SlotType {
		/// Record location
		context: FieldContext,
		/// Slot index
		slot: usize,
		/// Slot field name
		name: &'static str,
		/// Expected value description
		expected: &'static str,
		/// JSON type found instead
		found: &'static str,
	},

	/// A frame record carries a field outside the known set (strict loading only)
	#[error("Animation '{animation}': frame '{frame}' has unknown field `{field}`")]
	UnknownField {
		/// Animation name
		animation: String,
		/// Frame record key
		frame: String,
		/// Unrecognised key
		field: String,
	},

	/// `loop_and_end` violates `loopStartFrame <= endFrame`
	#[error("Animation '{animation}': loop start {loop_start} is after end frame {end}")]
	InvalidBounds {
		/// Animation name
		animation: String,
		/// Decoded loop start
		loop_start: usize,
		/// Decoded end frame
		end: usize,
	},

	/// The end frame reaches the configured frame limit
	#[error("Animation '{animation}': end frame {end} exceeds the limit of {max_frames} frames")]
	TooManyFrames {
		/// Animation name
		animation: String,
		/// Decoded end frame
		end: usize,
		/// Limit from the load configuration
		max_frames: usize,
	},
}

impl ParseError {
	/// Name of the animation the error points at, when it points at one.
	pub fn animation(&self) -> Option<&str> {
		match self {
			Self::AnimationNotObject {
				animation,
				..
			}
			| Self::MissingLoopAndEnd {
				animation,
			}
			| Self::FrameNotObject {
				animation,
				..
			}
			| Self::UnknownField {
				animation,
				..
			}
			| Self::InvalidBounds {
				animation,
				..
			}
			| Self::TooManyFrames {
				animation,
				..
			} => Some(animation),
			Self::NotAnArray {
				context,
				..
			}
			| Self::SlotCount {
				context,
				..
			}
			| Self::SlotType {
				context,
				..
			} => Some(&context.animation),
			Self::Json(_) | Self::IOError(_) | Self::RootNotObject {
				..
			} | Self::EmptyDocument => None,
		}
	}
}

/// Error returned when parsing an editor tag (status or type) from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} '{value}'")]
pub struct UnknownTagError {
	/// Tag family, e.g. `"animation status"`
	pub kind: &'static str,
	/// Rejected input
	pub value: String,
}
