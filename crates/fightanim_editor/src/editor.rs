//! The editor state object.
//!
//! [`Editor`] owns everything the view layer reads: the loaded animations,
//! the derived playback state, the playback head, the selection and the
//! viewer options. All changes go through its methods.
//!
//! # Loading
//!
//! ```text
//! begin_load() ──► ticket #n ──► (fetch content) ──► finish_load(ticket, content)
//!                                                      │
//!                      ticket is the latest? ──no──► LoadOutcome::Stale
//!                                 │yes
//!                       decode ──err──► ParseError, state untouched
//!                                 │ok
//!         replace animations, derive playback, head = 0 ──► LoadOutcome::Applied
//! ```

use std::path::Path;

use fightanim_types::fighter::{self, Animation, AnimationStatus, LoopBounds, ParseError};
use log::{debug, info, warn};
use rand::Rng;

use crate::{
	error::EditorError,
	layers::LayerOrder,
	navigation::Navigation,
	playback::PlaybackState,
	player::Player,
	selector::{AnimationFilter, KindFilter},
	settings::EditorSettings,
	timeline::{self, TimelineCell},
	zoom::Zoom,
};

/// Handle for one asynchronous load, issued by [`Editor::begin_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket {
	generation: u64,
}

impl LoadTicket {
	/// Sequence number of the load.
	pub fn generation(&self) -> u64 {
		self.generation
	}
}

/// Result of [`Editor::finish_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadOutcome {
	/// The content was decoded and replaced the animation set
	Applied,
	/// A newer load was started after this ticket; nothing changed
	Stale,
}

/// Editor application state.
#[derive(Debug, Clone)]
pub struct Editor {
	settings: EditorSettings,
	animations: Vec<Animation>,
	loaded: bool,
	selected: Option<String>,
	current_frame: usize,
	playback: PlaybackState,
	player: Player,
	layers: LayerOrder,
	zoom: Zoom,
	filter: AnimationFilter,
	load_generation: u64,
}

impl Editor {
	/// Creates an empty editor with a randomly seeded placeholder timeline.
	pub fn new(settings: EditorSettings) -> Self {
		Self::with_rng(settings, &mut rand::rng())
	}

	/// Creates an empty editor, seeding the placeholder timeline from `rng`.
	pub fn with_rng<R: Rng>(settings: EditorSettings, rng: &mut R) -> Self {
		let playback = PlaybackState::seeded(
			settings.playback.placeholder_frame_count,
			settings.playback.seed_hold_min,
			settings.playback.seed_hold_max,
			rng,
		);
		Self {
			animations: Vec::new(),
			loaded: false,
			selected: None,
			current_frame: 0,
			playback,
			player: Player::new(settings.playback.loop_by_default),
			layers: LayerOrder::new(settings.layers.clone()),
			zoom: Zoom::new(&settings.viewer),
			filter: AnimationFilter::default(),
			load_generation: 0,
			settings,
		}
	}

	/// Settings the editor was created with.
	pub fn settings(&self) -> &EditorSettings {
		&self.settings
	}

	/// Loaded animations in document order.
	pub fn animations(&self) -> &[Animation] {
		&self.animations
	}

	/// Looks up a loaded animation by name.
	pub fn animation(&self, name: &str) -> Option<&Animation> {
		self.animations.iter().find(|anim| anim.name == name)
	}

	/// Returns `true` once a fighter file has been applied.
	pub fn is_loaded(&self) -> bool {
		self.loaded
	}

	/// Derived playback state.
	pub fn playback(&self) -> &PlaybackState {
		&self.playback
	}

	/// Number of frames on the global timeline.
	pub fn total_frames(&self) -> usize {
		self.playback.total_frames()
	}

	/// Hold ticks per frame.
	pub fn frame_timing(&self) -> &[u32] {
		self.playback.frame_timing()
	}

	/// Position of the playback head.
	pub fn current_frame(&self) -> usize {
		self.current_frame
	}

	/// Playback flags.
	pub fn player(&self) -> &Player {
		&self.player
	}

	/// Layer order.
	pub fn layers(&self) -> &LayerOrder {
		&self.layers
	}

	/// Mutable layer order.
	pub fn layers_mut(&mut self) -> &mut LayerOrder {
		&mut self.layers
	}

	/// Viewer zoom.
	pub fn zoom(&self) -> &Zoom {
		&self.zoom
	}

	/// Mutable viewer zoom.
	pub fn zoom_mut(&mut self) -> &mut Zoom {
		&mut self.zoom
	}

	/// Decodes `content` and replaces the animation set.
	///
	/// On success every animation starts as `not-started`/`default`, the
	/// playback state is derived afresh and the head returns to frame 0. Any
	/// load still pending through a [`LoadTicket`] becomes stale.
	///
	/// # Errors
	///
	/// Returns the decode error; the editor state is left untouched.
	pub fn load_fighter_file(&mut self, content: &str) -> Result<(), ParseError> {
		self.load_generation += 1;
		self.decode_and_apply(content)
	}

	/// Reads a fighter file from disk and applies it like [`load_fighter_file`](Self::load_fighter_file).
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or does not decode.
	pub fn open_fighter_file(&mut self, path: impl AsRef<Path>) -> Result<(), ParseError> {
		let path = path.as_ref();
		self.load_generation += 1;
		let file = fighter::File::open_with_config(path, &self.settings.load).inspect_err(|err| {
			warn!("Failed to open fighter file {}: {}", path.display(), err);
		})?;
		self.apply(file.into_animations());
		Ok(())
	}

	/// Starts an asynchronous load. Earlier tickets become stale.
	pub fn begin_load(&mut self) -> LoadTicket {
		self.load_generation += 1;
		debug!("Begin load #{}", self.load_generation);
		LoadTicket {
			generation: self.load_generation,
		}
	}

	/// Completes the load identified by `ticket`.
	///
	/// Content for a superseded ticket is ignored and reported as
	/// [`LoadOutcome::Stale`].
	///
	/// # Errors
	///
	/// Returns the decode error for a current ticket; the state is left untouched.
	pub fn finish_load(&mut self, ticket: LoadTicket, content: &str) -> Result<LoadOutcome, ParseError> {
		if ticket.generation != self.load_generation {
			warn!(
				"Discarding stale load #{} (latest is #{})",
				ticket.generation, self.load_generation
			);
			return Ok(LoadOutcome::Stale);
		}
		self.decode_and_apply(content)?;
		Ok(LoadOutcome::Applied)
	}

	fn decode_and_apply(&mut self, content: &str) -> Result<(), ParseError> {
		let animations =
			fighter::load_with_config(content, &self.settings.load).inspect_err(|err| {
				warn!("Failed to load fighter file: {}", err);
			})?;
		self.apply(animations);
		Ok(())
	}

	fn apply(&mut self, animations: Vec<Animation>) {
		self.playback = PlaybackState::derive(&animations)
			.unwrap_or_else(|| PlaybackState::uniform(self.settings.playback.placeholder_frame_count));
		self.current_frame = 0;
		self.player.reset_hold();

		if let Some(name) = &self.selected
			&& !animations.iter().any(|anim| &anim.name == name)
		{
			debug!("Selected animation '{}' not in new file, clearing selection", name);
			self.selected = None;
		}

		self.animations = animations;
		self.loaded = true;
		info!(
			"Applied fighter file: {} animations, {} frames",
			self.animations.len(),
			self.playback.total_frames()
		);
	}

	/// Selects the animation called `name`.
	///
	/// # Errors
	///
	/// Returns [`EditorError::UnknownAnimation`] if no such animation is loaded.
	pub fn select_animation(&mut self, name: &str) -> Result<(), EditorError> {
		self.index_of(name)?;
		self.selected = Some(name.to_string());
		self.player.reset_hold();
		Ok(())
	}

	/// Clears the selection; navigation then spans the whole timeline.
	pub fn clear_selection(&mut self) {
		self.selected = None;
		self.player.reset_hold();
	}

	/// Name of the selected animation.
	pub fn selected_name(&self) -> Option<&str> {
		self.selected.as_deref()
	}

	/// The selected animation.
	pub fn selected_animation(&self) -> Option<&Animation> {
		self.selected.as_deref().and_then(|name| self.animation(name))
	}

	/// Sets the status annotation of one animation.
	///
	/// # Errors
	///
	/// Returns [`EditorError::UnknownAnimation`] if no such animation is loaded.
	pub fn set_status(&mut self, name: &str, status: AnimationStatus) -> Result<(), EditorError> {
		let index = self.index_of(name)?;
		self.animations[index].status = status;
		Ok(())
	}

	/// Sets the loop bounds of one animation.
	///
	/// # Errors
	///
	/// - [`EditorError::UnknownAnimation`] if no such animation is loaded
	/// - [`EditorError::InvalidBounds`] if `loop_start > end`
	/// - [`EditorError::FrameOutOfRange`] if `end` lies past the timeline
	pub fn set_bounds(&mut self, name: &str, loop_start: usize, end: usize) -> Result<(), EditorError> {
		let index = self.index_of(name)?;
		let bounds = LoopBounds::new(loop_start, end).ok_or(EditorError::InvalidBounds {
			loop_start,
			end,
		})?;
		self.check_frame(bounds.end)?;

		let animation = &mut self.animations[index];
		animation.loop_start_frame = bounds.loop_start;
		animation.end_frame = bounds.end;
		Ok(())
	}

	/// Sets the hold value of the current frame, clamped to `1..=max_hold_ticks`.
	///
	/// Returns the value stored.
	pub fn set_frame_timing(&mut self, ticks: i64) -> u32 {
		let ticks = self.clamp_hold(ticks);
		self.playback.set_hold_ticks(self.current_frame, ticks);
		ticks
	}

	/// Sets the hold value of `frame`, clamped to `1..=max_hold_ticks`.
	///
	/// # Errors
	///
	/// Returns [`EditorError::FrameOutOfRange`] if `frame` is not on the timeline.
	pub fn set_frame_timing_at(&mut self, frame: usize, ticks: i64) -> Result<u32, EditorError> {
		self.check_frame(frame)?;
		let ticks = self.clamp_hold(ticks);
		self.playback.set_hold_ticks(frame, ticks);
		Ok(ticks)
	}

	fn clamp_hold(&self, ticks: i64) -> u32 {
		let max = self.settings.playback.max_hold_ticks.max(1);
		u32::try_from(ticks.clamp(1, i64::from(max))).unwrap_or(max)
	}

	fn index_of(&self, name: &str) -> Result<usize, EditorError> {
		self.animations
			.iter()
			.position(|anim| anim.name == name)
			.ok_or_else(|| EditorError::UnknownAnimation(name.to_string()))
	}

	fn check_frame(&self, frame: usize) -> Result<(), EditorError> {
		let total = self.total_frames();
		if frame < total {
			Ok(())
		} else {
			Err(EditorError::FrameOutOfRange {
				frame,
				total,
			})
		}
	}

	/// Bounds navigation works within: the selected animation's loop range,
	/// or the whole timeline. `None` only for an empty timeline.
	pub fn active_bounds(&self) -> Option<LoopBounds> {
		match self.selected_animation() {
			Some(animation) => Some(animation.bounds()),
			None => LoopBounds::full(self.total_frames()),
		}
	}

	/// Applies a manual navigation command and restarts the hold count.
	///
	/// Returns the new head position.
	pub fn navigate(&mut self, navigation: Navigation) -> usize {
		if let Some(bounds) = self.active_bounds() {
			self.current_frame = navigation.apply(self.current_frame, bounds);
			self.player.reset_hold();
		}
		self.current_frame
	}

	/// Steps forward, wrapping from `end` to `loop_start`.
	pub fn next_frame(&mut self) -> usize {
		self.navigate(Navigation::Next)
	}

	/// Steps backward, wrapping from `loop_start` to `end`.
	pub fn previous_frame(&mut self) -> usize {
		self.navigate(Navigation::Previous)
	}

	/// Jumps to `loop_start`.
	pub fn first_frame(&mut self) -> usize {
		self.navigate(Navigation::First)
	}

	/// Jumps to `end`.
	pub fn last_frame(&mut self) -> usize {
		self.navigate(Navigation::Last)
	}

	/// Moves the head to `frame`, as a timeline cell click does.
	///
	/// # Errors
	///
	/// Returns [`EditorError::FrameOutOfRange`] if `frame` is not on the timeline.
	pub fn go_to_frame(&mut self, frame: usize) -> Result<(), EditorError> {
		self.check_frame(frame)?;
		self.current_frame = frame;
		self.player.reset_hold();
		Ok(())
	}

	/// Starts playback.
	pub fn play(&mut self) {
		self.player.play();
	}

	/// Stops playback.
	pub fn pause(&mut self) {
		self.player.pause();
	}

	/// Toggles playback. Returns `true` if now playing.
	pub fn toggle_play(&mut self) -> bool {
		self.player.toggle_play()
	}

	/// Enables or disables looping.
	pub fn set_looping(&mut self, looping: bool) {
		self.player.set_looping(looping);
	}

	/// Toggles looping. Returns the new state.
	pub fn toggle_looping(&mut self) -> bool {
		self.player.toggle_looping()
	}

	/// Advances the playback clock by one scheduler tick.
	///
	/// Returns the new head position when the head moved.
	pub fn tick(&mut self) -> Option<usize> {
		let bounds = self.active_bounds()?;
		let hold = self.playback.hold_ticks(self.current_frame).unwrap_or(1);
		let next = self.player.tick(self.current_frame, bounds, hold)?;
		self.current_frame = next;
		Some(next)
	}

	/// Timeline cells for every frame.
	pub fn timeline(&self) -> Vec<TimelineCell> {
		let bounds = self.selected_animation().map(Animation::bounds);
		timeline::cells(&self.playback, self.current_frame, bounds)
	}

	/// Active animation list filter.
	pub fn filter(&self) -> &AnimationFilter {
		&self.filter
	}

	/// Sets the search term of the animation list.
	pub fn set_search(&mut self, search: &str) {
		self.filter.search = search.to_string();
	}

	/// Sets the type filter of the animation list.
	pub fn set_kind_filter(&mut self, kind: KindFilter) {
		self.filter.kind = kind;
	}

	/// Animations passing the current filter, in document order.
	pub fn filtered_animations(&self) -> impl Iterator<Item = &Animation> {
		self.filter.apply(&self.animations)
	}
}

impl Default for Editor {
	fn default() -> Self {
		Self::new(EditorSettings::default())
	}
}
