// Chunk: docs/chunks/overlay_lifecycle - Crate interface

//! inline-input: a transient text input overlay anchored at the caret.
//!
//! The hosting editor binds a key to [`InlineInputController::trigger`].
//! The controller captures the caret, opens a small input zone beneath
//! it, and routes keys to the field until Return or Escape settles it:
//! Return inserts the trimmed text back at the captured position, Escape
//! discards it. Either way the overlay tears itself down before the host
//! sees another event.
//!
//! The crate is host-agnostic: documents and compositors stay behind
//! [`EditorHost`] and [`AnchorHost`], colors behind [`ThemeProvider`],
//! so the overlay itself is plain testable state.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use inline_input::{
//!     AnchorHost, EditRange, EditorHost, InlineInputController, Key, KeyEvent, Modifiers,
//!     Position, ThemeProvider, ThemeStore, TriggerOutcome,
//! };
//!
//! struct Doc(Vec<(Position, String)>);
//!
//! impl EditorHost for Doc {
//!     fn has_document(&self) -> bool {
//!         true
//!     }
//!     fn caret(&self) -> Option<Position> {
//!         Some(Position::new(4, 7))
//!     }
//!     fn apply_edit(&mut self, range: EditRange, text: &str, _source: &str) {
//!         self.0.push((range.start, text.to_string()));
//!     }
//! }
//!
//! struct Zone;
//!
//! impl AnchorHost for Zone {
//!     fn show_at(&mut self, _anchor: Position, _height_in_lines: usize) {}
//!     fn hide(&mut self) {}
//!     fn request_focus(&mut self) {}
//! }
//!
//! let theme: Rc<dyn ThemeProvider> = Rc::new(ThemeStore::default());
//! let mut controller = InlineInputController::new(theme);
//! let mut doc = Doc(Vec::new());
//!
//! assert_eq!(controller.trigger(&doc, Box::new(Zone)), TriggerOutcome::Opened);
//! for c in "hi".chars() {
//!     controller.handle_key(&KeyEvent::char(c), &mut doc);
//! }
//! controller.handle_key(&KeyEvent::new(Key::Return, Modifiers::default()), &mut doc);
//!
//! assert_eq!(doc.0, vec![(Position::new(4, 7), "hi".to_string())]);
//! ```

mod config;
mod controller;
mod geometry;
mod host;
mod signal;
mod theme;
mod widget;

pub use config::{load_options, save_options, OverlayOptions};
pub use controller::{InlineInputController, TriggerOutcome, EDIT_SOURCE};
pub use geometry::{anchor_cell_offset, calculate_zone_geometry, FontMetrics, ZoneGeometry};
pub use host::{AnchorHost, EditRange, EditorHost, Position};
pub use signal::{Signal, Subscription};
pub use theme::{FieldStyle, Rgba, ThemeColors, ThemeProvider, ThemeStore, TRANSPARENT};
pub use widget::{Handled, InlineInputWidget, DEFAULT_PLACEHOLDER};

// Hosts drive the overlay with these; re-exported so a host only needs
// one dependency edge for the common path.
pub use inline_input_field::FieldBuffer;
pub use inline_input_keys::{Key, KeyEvent, Modifiers};
