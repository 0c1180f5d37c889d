//! Fighter file format constants.
//!
//! This module holds the document keys and the positional slot tables used to
//! decode fighter records. Every positional record in the format is a JSON
//! array; the [`Slot`] constants below name each index so the decode routines
//! never rely on bare numbers.

/// A named position inside a positional record array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
	/// Zero-based index of the value inside the record array
	pub index: usize,
	/// Field name reported in diagnostics
	pub name: &'static str,
}

impl Slot {
	/// Creates a slot descriptor.
	pub const fn new(index: usize, name: &'static str) -> Self {
		Self {
			index,
			name,
		}
	}
}

/// Required key carrying `[loopStartFrame, endFrame]` in every animation record
pub const LOOP_AND_END_KEY: &str = "loop_and_end";

/// Key of the main body image channel
pub const IMG_MAIN_KEY: &str = "img_main";
/// Key of the secondary image channel
pub const IMG_OTHER_KEY: &str = "img_other";
/// Key of the tertiary image channel
pub const IMG_OTHER_B_KEY: &str = "img_other_b";
/// Key of the first effect image channel
pub const VFX_A_KEY: &str = "vfx_a";
/// Key of the second effect image channel
pub const VFX_B_KEY: &str = "vfx_b";
/// Key of the first independent effect image channel
pub const VFXIND_A_KEY: &str = "vfxind_a";
/// Key of the second independent effect image channel
pub const VFXIND_B_KEY: &str = "vfxind_b";

/// Key of the hurtbox list
pub const HURTBOXES_KEY: &str = "hurtboxes";

/// Key of the body placeholder
pub const PLACEHOLDER_BODY_KEY: &str = "placeholder_body";
/// Key of the first particle placeholder
pub const PLACEHOLDER_PARTICLE_A_KEY: &str = "placeholder_particle_a";
/// Key of the second particle placeholder
pub const PLACEHOLDER_PARTICLE_B_KEY: &str = "placeholder_particle_b";
/// Key of the item placeholder
pub const PLACEHOLDER_ITEM_KEY: &str = "placeholder_item";

/// Every field a frame record may carry.
pub const FRAME_FIELD_KEYS: [&str; 12] = [
	IMG_MAIN_KEY,
	IMG_OTHER_KEY,
	IMG_OTHER_B_KEY,
	VFX_A_KEY,
	VFX_B_KEY,
	VFXIND_A_KEY,
	VFXIND_B_KEY,
	HURTBOXES_KEY,
	PLACEHOLDER_BODY_KEY,
	PLACEHOLDER_PARTICLE_A_KEY,
	PLACEHOLDER_PARTICLE_B_KEY,
	PLACEHOLDER_ITEM_KEY,
];

/// Slot layout of `loop_and_end`.
///
/// ```text
/// Slot  Field            Type
/// ----  ---------------  ---------------------
/// 0     loopStartFrame   non-negative integer
/// 1     endFrame         non-negative integer
/// ```
pub mod loop_and_end {
	use super::Slot;

	/// First frame of the loop range
	pub const LOOP_START: Slot = Slot::new(0, "loopStartFrame");
	/// Last frame of the animation
	pub const END: Slot = Slot::new(1, "endFrame");
	/// Number of slots in the record
	pub const SLOT_COUNT: usize = 2;
}

/// Slot layout shared by all seven image channels.
///
/// ```text
/// Slot  Field        Type
/// ----  -----------  -------
/// 0     id           integer
/// 1     spriteName   string
/// 2     imageIndex   integer
/// 3     xoff         number
/// 4     yoff         number
/// 5     rotation     number
/// 6     xscale       number
/// 7     yscale       number
/// 8     alpha        number
/// 9     blendMode    string
/// ```
pub mod image {
	use super::Slot;

	/// Placement identifier
	pub const ID: Slot = Slot::new(0, "id");
	/// Name of the sprite sheet
	pub const SPRITE_NAME: Slot = Slot::new(1, "spriteName");
	/// Sub-image index inside the sprite
	pub const IMAGE_INDEX: Slot = Slot::new(2, "imageIndex");
	/// Horizontal offset
	pub const XOFF: Slot = Slot::new(3, "xoff");
	/// Vertical offset
	pub const YOFF: Slot = Slot::new(4, "yoff");
	/// Rotation
	pub const ROTATION: Slot = Slot::new(5, "rotation");
	/// Horizontal scale
	pub const XSCALE: Slot = Slot::new(6, "xscale");
	/// Vertical scale
	pub const YSCALE: Slot = Slot::new(7, "yscale");
	/// Opacity
	pub const ALPHA: Slot = Slot::new(8, "alpha");
	/// Blend mode tag, opaque to this crate
	pub const BLEND_MODE: Slot = Slot::new(9, "blendMode");
	/// Number of slots in the record
	pub const SLOT_COUNT: usize = 10;
}

/// Slot layout of a single hurtbox entry.
///
/// ```text
/// Slot  Field   Type
/// ----  ------  ------
/// 0     left    number
/// 1     top     number
/// 2     right   number
/// 3     bottom  number
/// 4     state   string
/// ```
pub mod hurtbox {
	use super::Slot;

	/// Left edge
	pub const LEFT: Slot = Slot::new(0, "left");
	/// Top edge
	pub const TOP: Slot = Slot::new(1, "top");
	/// Right edge
	pub const RIGHT: Slot = Slot::new(2, "right");
	/// Bottom edge
	pub const BOTTOM: Slot = Slot::new(3, "bottom");
	/// State tag
	pub const STATE: Slot = Slot::new(4, "state");
	/// Number of slots in the record
	pub const SLOT_COUNT: usize = 5;
}

/// Slot layout of the body and particle placeholders.
///
/// ```text
/// Slot  Field     Type
/// ----  --------  ------
/// 0     xoff      number
/// 1     yoff      number
/// 2     rotation  number
/// ```
pub mod placeholder {
	use super::Slot;

	/// Horizontal offset
	pub const XOFF: Slot = Slot::new(0, "xoff");
	/// Vertical offset
	pub const YOFF: Slot = Slot::new(1, "yoff");
	/// Rotation
	pub const ROTATION: Slot = Slot::new(2, "rotation");
	/// Number of slots in the record
	pub const SLOT_COUNT: usize = 3;
}

/// Slot layout of the item placeholder.
///
/// ```text
/// Slot  Field     Type
/// ----  --------  -------
/// 0     id        integer
/// 1     xoff      number
/// 2     yoff      number
/// 3     rotation  number
/// ```
pub mod placeholder_item {
	use super::Slot;

	/// Item identity, stable across frames
	pub const ID: Slot = Slot::new(0, "id");
	/// Horizontal offset
	pub const XOFF: Slot = Slot::new(1, "xoff");
	/// Vertical offset
	pub const YOFF: Slot = Slot::new(2, "yoff");
	/// Rotation
	pub const ROTATION: Slot = Slot::new(3, "rotation");
	/// Number of slots in the record
	pub const SLOT_COUNT: usize = 4;
}
