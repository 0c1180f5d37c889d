//! Visual layer ordering.

use crate::error::EditorError;

/// Ordered list of layer names, back to front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerOrder {
	layers: Vec<String>,
}

impl LayerOrder {
	/// Creates a layer order from names.
	pub fn new(layers: Vec<String>) -> Self {
		Self {
			layers,
		}
	}

	/// Layer names in order.
	pub fn layers(&self) -> &[String] {
		&self.layers
	}

	/// Number of layers.
	pub fn len(&self) -> usize {
		self.layers.len()
	}

	/// Returns `true` when there are no layers.
	pub fn is_empty(&self) -> bool {
		self.layers.is_empty()
	}

	/// Position of the layer called `name`.
	pub fn position(&self, name: &str) -> Option<usize> {
		self.layers.iter().position(|layer| layer == name)
	}

	/// Swaps the layer at `index` with the one before it. No-op for the first layer.
	///
	/// # Errors
	///
	/// Returns [`EditorError::LayerOutOfRange`] if `index` does not exist.
	pub fn move_up(&mut self, index: usize) -> Result<(), EditorError> {
		self.check(index)?;
		if index > 0 {
			self.layers.swap(index, index - 1);
		}
		Ok(())
	}

	/// Swaps the layer at `index` with the one after it. No-op for the last layer.
	///
	/// # Errors
	///
	/// Returns [`EditorError::LayerOutOfRange`] if `index` does not exist.
	pub fn move_down(&mut self, index: usize) -> Result<(), EditorError> {
		self.check(index)?;
		if index + 1 < self.layers.len() {
			self.layers.swap(index, index + 1);
		}
		Ok(())
	}

	/// Drag-and-drop reorder: removes the layer at `source` and inserts it at `target`.
	///
	/// # Errors
	///
	/// Returns [`EditorError::LayerOutOfRange`] if either index does not exist.
	pub fn move_to(&mut self, source: usize, target: usize) -> Result<(), EditorError> {
		self.check(source)?;
		self.check(target)?;
		let layer = self.layers.remove(source);
		self.layers.insert(target, layer);
		Ok(())
	}

	fn check(&self, index: usize) -> Result<(), EditorError> {
		if index < self.layers.len() {
			Ok(())
		} else {
			Err(EditorError::LayerOutOfRange {
				index,
				len: self.layers.len(),
			})
		}
	}
}
