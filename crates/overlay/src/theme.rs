// Chunk: docs/chunks/overlay_theming - Overlay color resolution and change propagation

//! Colors for the overlay's input field.
//!
//! # Design
//!
//! The hosting editor owns the theme. The overlay asks a [`ThemeProvider`]
//! for the four colors it draws with and listens for change notifications.
//! A slot the active theme leaves undefined resolves to transparent, so
//! the field inherits whatever the host paints beneath it instead of
//! falling back to hardcoded colors.

use std::cell::RefCell;

use crate::signal::Signal;

/// RGBA color with components in 0.0..=1.0.
pub type Rgba = [f32; 4];

/// Fallback for color slots the active theme leaves undefined.
pub const TRANSPARENT: Rgba = [0.0, 0.0, 0.0, 0.0];

/// The color slots an overlay theme may define.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThemeColors {
    pub input_background: Option<Rgba>,
    pub input_foreground: Option<Rgba>,
    pub input_border: Option<Rgba>,
    pub focus_border: Option<Rgba>,
}

impl ThemeColors {
    /// A theme defining no colors; every slot resolves to transparent.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Catppuccin Mocha, the stock dark palette.
    pub fn catppuccin_mocha() -> Self {
        Self {
            // Base: #1e1e2e
            input_background: Some([0.118, 0.118, 0.180, 1.0]),
            // Text: #cdd6f4
            input_foreground: Some([0.804, 0.839, 0.957, 1.0]),
            // Surface1: #45475a
            input_border: Some([0.282, 0.290, 0.392, 1.0]),
            // Mauve accent for the focused frame
            focus_border: Some([0.54, 0.36, 0.72, 1.0]),
        }
    }
}

/// Resolved colors the field renderer draws with. Unlike [`ThemeColors`],
/// every slot holds a concrete color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStyle {
    pub background: Rgba,
    pub foreground: Rgba,
    pub border: Rgba,
    pub focus_border: Rgba,
}

impl FieldStyle {
    /// Resolves theme slots to drawable colors, substituting transparent
    /// for any slot the theme leaves undefined.
    pub fn resolve(colors: &ThemeColors) -> Self {
        Self {
            background: colors.input_background.unwrap_or(TRANSPARENT),
            foreground: colors.input_foreground.unwrap_or(TRANSPARENT),
            border: colors.input_border.unwrap_or(TRANSPARENT),
            focus_border: colors.focus_border.unwrap_or(TRANSPARENT),
        }
    }
}

/// Source of overlay colors, owned by the hosting editor.
pub trait ThemeProvider {
    /// The current palette.
    fn colors(&self) -> ThemeColors;

    /// Fires after the palette changes.
    fn changed(&self) -> &Signal<()>;
}

/// In-memory [`ThemeProvider`] for hosts without their own theme plumbing.
pub struct ThemeStore {
    colors: RefCell<ThemeColors>,
    changed: Signal<()>,
}

impl ThemeStore {
    pub fn new(colors: ThemeColors) -> Self {
        Self {
            colors: RefCell::new(colors),
            changed: Signal::new(),
        }
    }

    /// Replaces the palette and notifies subscribers.
    pub fn set_colors(&self, colors: ThemeColors) {
        *self.colors.borrow_mut() = colors;
        self.changed.emit(&());
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(ThemeColors::catppuccin_mocha())
    }
}

impl ThemeProvider for ThemeStore {
    fn colors(&self) -> ThemeColors {
        *self.colors.borrow()
    }

    fn changed(&self) -> &Signal<()> {
        &self.changed
    }
}
