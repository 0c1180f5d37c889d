//! Positional record decoding.
//!
//! The fighter format stores every record as a fixed-position JSON array. This
//! module turns the loosely typed [`serde_json::Value`] tree into the strongly
//! shaped model, one slot at a time, using the tables in [`super::constants`].

use log::{debug, trace};
use serde_json::{Map, Value};

use super::{
	animation::Animation,
	constants::{self, Slot},
	error::{FieldContext, ParseError},
	frame::{AnimationFrame, ImageChannel, PlaceholderChannel},
	load_config::LoadConfig,
	records::{Hurtbox, ImagePlacement, Placeholder, PlaceholderItem},
};

/// Short JSON type name used in diagnostics.
pub(crate) fn kind_of(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

/// Checked view over one positional record.
pub(crate) struct Slots<'a> {
	values: &'a [Value],
	context: &'a FieldContext,
}

impl<'a> Slots<'a> {
	/// Validates that `value` is an array with at least `expected` slots.
	///
	/// Trailing slots are accepted only when the configuration allows them.
	pub(crate) fn new(
		value: &'a Value,
		context: &'a FieldContext,
		expected: usize,
		config: &LoadConfig,
	) -> Result<Self, ParseError> {
		let Value::Array(values) = value else {
			return Err(ParseError::NotAnArray {
				context: context.clone(),
				found: kind_of(value),
			});
		};

		if values.len() < expected || (values.len() > expected && !config.allow_extra_slots) {
			return Err(ParseError::SlotCount {
				context: context.clone(),
				expected,
				actual: values.len(),
			});
		}

		Ok(Self {
			values,
			context,
		})
	}

	fn type_error(&self, slot: Slot, expected: &'static str) -> ParseError {
		ParseError::SlotType {
			context: self.context.clone(),
			slot: slot.index,
			name: slot.name,
			expected,
			found: kind_of(&self.values[slot.index]),
		}
	}

	/// Reads an integer slot. Integral floats such as `3.0` are accepted.
	pub(crate) fn int(&self, slot: Slot) -> Result<i64, ParseError> {
		let value = &self.values[slot.index];
		if let Some(int) = value.as_i64() {
			return Ok(int);
		}
		match value.as_f64() {
			Some(float) if float.fract() == 0.0 && float.abs() <= i64::MAX as f64 => {
				Ok(float as i64)
			}
			_ => Err(self.type_error(slot, "an integer")),
		}
	}

	/// Reads a non-negative integer slot as a frame index.
	pub(crate) fn frame_index(&self, slot: Slot) -> Result<usize, ParseError> {
		self.int(slot)
			.ok()
			.and_then(|int| usize::try_from(int).ok())
			.ok_or_else(|| self.type_error(slot, "a non-negative integer"))
	}

	/// Reads a numeric slot.
	pub(crate) fn float(&self, slot: Slot) -> Result<f64, ParseError> {
		self.values[slot.index].as_f64().ok_or_else(|| self.type_error(slot, "a number"))
	}

	/// Reads a string tag slot.
	pub(crate) fn tag(&self, slot: Slot) -> Result<String, ParseError> {
		self.values[slot.index]
			.as_str()
			.map(str::to_string)
			.ok_or_else(|| self.type_error(slot, "a string"))
	}
}

/// Decodes a whole fighter document.
///
/// One animation is produced per top-level key, in document order.
pub(crate) fn decode_document(
	document: &Value,
	config: &LoadConfig,
) -> Result<Vec<Animation>, ParseError> {
	let Value::Object(root) = document else {
		return Err(ParseError::RootNotObject {
			found: kind_of(document),
		});
	};

	if root.is_empty() && !config.allow_empty {
		return Err(ParseError::EmptyDocument);
	}

	root.iter().map(|(name, record)| decode_animation(name, record, config)).collect()
}

/// Decodes one animation record.
pub(crate) fn decode_animation(
	name: &str,
	record: &Value,
	config: &LoadConfig,
) -> Result<Animation, ParseError> {
	let Value::Object(fields) = record else {
		return Err(ParseError::AnimationNotObject {
			animation: name.to_string(),
			found: kind_of(record),
		});
	};

	let Some(loop_and_end) = fields.get(constants::LOOP_AND_END_KEY) else {
		return Err(ParseError::MissingLoopAndEnd {
			animation: name.to_string(),
		});
	};

	let context = FieldContext::animation_field(name, constants::LOOP_AND_END_KEY);
	let slots =
		Slots::new(loop_and_end, &context, constants::loop_and_end::SLOT_COUNT, config)?;
	let loop_start = slots.frame_index(constants::loop_and_end::LOOP_START)?;
	let end = slots.frame_index(constants::loop_and_end::END)?;
	if loop_start > end {
		return Err(ParseError::InvalidBounds {
			animation: name.to_string(),
			loop_start,
			end,
		});
	}
	if end >= config.max_frames {
		return Err(ParseError::TooManyFrames {
			animation: name.to_string(),
			end,
			max_frames: config.max_frames,
		});
	}

	let frames = fields
		.iter()
		.filter(|(key, _)| key.as_str() != constants::LOOP_AND_END_KEY)
		.map(|(key, frame)| decode_frame(name, key, frame, config))
		.collect::<Result<Vec<_>, _>>()?;

	debug!(
		"Decoded animation '{}': {} frames, loop {}..={}",
		name,
		frames.len(),
		loop_start,
		end
	);

	let mut animation = Animation::new(name, loop_start, end);
	animation.frames = frames;
	Ok(animation)
}

/// Decodes one frame record. Absent and `null` fields stay `None`.
pub(crate) fn decode_frame(
	animation: &str,
	key: &str,
	record: &Value,
	config: &LoadConfig,
) -> Result<AnimationFrame, ParseError> {
	let Value::Object(fields) = record else {
		return Err(ParseError::FrameNotObject {
			animation: animation.to_string(),
			frame: key.to_string(),
			found: kind_of(record),
		});
	};

	check_unknown_fields(animation, key, fields, config)?;

	let mut frame = AnimationFrame::default();

	for channel in ImageChannel::ALL {
		if let Some(value) = present(fields, channel.key()) {
			let context = FieldContext::frame_field(animation, key, channel.key());
			let slots = Slots::new(value, &context, constants::image::SLOT_COUNT, config)?;
			*frame.image_slot_mut(channel) = Some(ImagePlacement::decode(&slots)?);
		}
	}

	if let Some(value) = present(fields, constants::HURTBOXES_KEY) {
		let context = FieldContext::frame_field(animation, key, constants::HURTBOXES_KEY);
		frame.hurtboxes = Some(decode_hurtboxes(value, &context, config)?);
	}

	for channel in PlaceholderChannel::ALL {
		if let Some(value) = present(fields, channel.key()) {
			let context = FieldContext::frame_field(animation, key, channel.key());
			let slots = Slots::new(value, &context, constants::placeholder::SLOT_COUNT, config)?;
			*frame.placeholder_slot_mut(channel) = Some(Placeholder::decode(&slots)?);
		}
	}

	if let Some(value) = present(fields, constants::PLACEHOLDER_ITEM_KEY) {
		let context = FieldContext::frame_field(animation, key, constants::PLACEHOLDER_ITEM_KEY);
		let slots =
			Slots::new(value, &context, constants::placeholder_item::SLOT_COUNT, config)?;
		frame.placeholder_item = Some(PlaceholderItem::decode(&slots)?);
	}

	trace!("Decoded frame '{}' of '{}'", key, animation);
	Ok(frame)
}

fn decode_hurtboxes(
	value: &Value,
	context: &FieldContext,
	config: &LoadConfig,
) -> Result<Vec<Hurtbox>, ParseError> {
	let Value::Array(entries) = value else {
		return Err(ParseError::NotAnArray {
			context: context.clone(),
			found: kind_of(value),
		});
	};

	entries
		.iter()
		.enumerate()
		.map(|(index, entry)| {
			let entry_context = context.with_entry(index);
			let slots = Slots::new(entry, &entry_context, constants::hurtbox::SLOT_COUNT, config)?;
			Hurtbox::decode(&slots)
		})
		.collect()
}

fn present<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
	fields.get(key).filter(|value| !value.is_null())
}

fn check_unknown_fields(
	animation: &str,
	key: &str,
	fields: &Map<String, Value>,
	config: &LoadConfig,
) -> Result<(), ParseError> {
	for field in fields.keys() {
		if constants::FRAME_FIELD_KEYS.contains(&field.as_str()) {
			continue;
		}
		if config.reject_unknown_fields {
			return Err(ParseError::UnknownField {
				animation: animation.to_string(),
				frame: key.to_string(),
				field: field.clone(),
			});
		}
		debug!("Ignoring unknown field `{}` in frame '{}' of '{}'", field, key, animation);
	}
	Ok(())
}
