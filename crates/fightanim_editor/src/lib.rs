//! This crate provides the editor state for the `fightanim-rs` project.
//!
//! # Contents
//!
//! - **Editor**: the owned application state with loading, selection, status
//!   and bound editing, navigation and tick-driven playback
//! - **Playback**: the derived frame count and per-frame hold table
//! - **Settings**: TOML and environment configuration through `config`
//! - **View models**: timeline cells, animation filtering, layer order, zoom
//!
//! # Examples
//!
//! ```
//! use fightanim_editor::{Editor, EditorSettings};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut editor = Editor::new(EditorSettings::default());
//! editor.load_fighter_file(r#"{"Idle": {"loop_and_end": [1, 3]}}"#)?;
//! editor.select_animation("Idle")?;
//!
//! assert_eq!(editor.total_frames(), 4);
//! assert_eq!(editor.next_frame(), 1);
//! assert_eq!(editor.previous_frame(), 3);
//! # Ok(())
//! # }
//! ```

pub mod editor;
pub mod error;
pub mod layers;
pub mod navigation;
pub mod playback;
pub mod player;
pub mod selector;
pub mod settings;
pub mod timeline;
pub mod zoom;

pub use editor::{Editor, LoadOutcome, LoadTicket};
pub use error::{EditorError, SettingsError};
pub use layers::LayerOrder;
pub use navigation::Navigation;
pub use playback::PlaybackState;
pub use player::Player;
pub use selector::{AnimationFilter, KindFilter};
pub use settings::{EditorSettings, PlaybackSettings, ViewerSettings};
pub use timeline::{FrameMarker, TimelineCell};
pub use zoom::Zoom;

/// `use fightanim_editor::prelude::*;` to import commonly used items.
pub mod prelude {
	#[doc(inline)]
	pub use crate::{
		AnimationFilter, Editor, EditorError, EditorSettings, FrameMarker, KindFilter, LayerOrder,
		LoadOutcome, LoadTicket, Navigation, PlaybackState, SettingsError, TimelineCell, Zoom,
	};
}
