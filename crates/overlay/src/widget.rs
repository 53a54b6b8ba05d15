// Chunk: docs/chunks/overlay_lifecycle - Overlay widget state machine

//! The transient input widget anchored beneath a document position.
//!
//! # Design
//!
//! The widget is pure state: it owns the field buffer, the lifecycle
//! phase, and the anchor, and tells its [`AnchorHost`] when to open and
//! close the zone. It never draws; the host renders from [`FieldStyle`],
//! the field buffer, and the zone geometry.
//!
//! The lifecycle is one-way. A widget is created, activated, and then
//! settled by exactly one outcome (submit or cancel) before disposal.
//! Return submits the trimmed field text, Escape cancels, and the phase
//! guard makes every later outcome attempt a no-op, so observers never
//! hear two outcomes from one widget.

use std::cell::RefCell;
use std::rc::Rc;

use inline_input_field::FieldBuffer;
use inline_input_keys::{Key, KeyEvent};

use crate::host::{AnchorHost, Position};
use crate::signal::{Signal, Subscription};
use crate::theme::{FieldStyle, ThemeProvider};

/// Hint shown when no activation-specific placeholder is given.
pub const DEFAULT_PLACEHOLDER: &str = "Enter text...";

/// Whether a key event was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Created,
    Activated,
    Submitted,
    Cancelled,
    Disposed,
}

/// Transient single-use input widget. See the module docs for the
/// lifecycle contract.
pub struct InlineInputWidget {
    field: FieldBuffer,
    phase: Phase,
    anchor: Option<Position>,
    placeholder: String,
    height_in_lines: usize,
    anchor_host: Box<dyn AnchorHost>,
    style: Rc<RefCell<FieldStyle>>,
    theme_sub: Option<Subscription>,
    submitted: Signal<String>,
    cancelled: Signal<()>,
}

impl InlineInputWidget {
    pub fn new(
        theme: Rc<dyn ThemeProvider>,
        anchor_host: Box<dyn AnchorHost>,
        height_in_lines: usize,
    ) -> Self {
        let style = Rc::new(RefCell::new(FieldStyle::resolve(&theme.colors())));

        // The change handler captures the provider weakly and writes into
        // the shared style slot. Capturing the provider strongly would
        // cycle: provider -> signal -> handler -> provider.
        let theme_sub = {
            let style = Rc::clone(&style);
            let provider = Rc::downgrade(&theme);
            theme.changed().subscribe(move |_| {
                if let Some(provider) = provider.upgrade() {
                    *style.borrow_mut() = FieldStyle::resolve(&provider.colors());
                }
            })
        };

        Self {
            field: FieldBuffer::new(),
            phase: Phase::Created,
            anchor: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            height_in_lines,
            anchor_host,
            style,
            theme_sub: Some(theme_sub),
            submitted: Signal::new(),
            cancelled: Signal::new(),
        }
    }

    // ============================================================
    // Lifecycle
    // ============================================================

    /// Opens the zone at `anchor` and routes focus to the field. An
    /// activation-specific `placeholder` overrides the default hint.
    /// Re-activating while open moves the zone and re-selects the field;
    /// after an outcome or disposal this is a no-op.
    pub fn activate(&mut self, anchor: Position, placeholder: Option<&str>) {
        if !matches!(self.phase, Phase::Created | Phase::Activated) {
            return;
        }
        if let Some(hint) = placeholder {
            self.placeholder = hint.to_string();
        }
        self.anchor = Some(anchor);
        self.phase = Phase::Activated;
        self.anchor_host.show_at(anchor, self.height_in_lines);
        self.anchor_host.request_focus();
        // Select any prefilled value so typing replaces it
        self.field.select_all();
    }

    /// Feeds one key event to the overlay. While open, every key is
    /// consumed: Return settles with the trimmed field text, Escape
    /// settles with a cancel, and everything else edits the field.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Handled {
        if self.phase != Phase::Activated {
            return Handled::No;
        }
        match event.key {
            Key::Return => {
                let text = self.field.content().trim().to_string();
                self.phase = Phase::Submitted;
                self.hide();
                self.submitted.emit(&text);
                Handled::Yes
            }
            Key::Escape => {
                self.cancel();
                Handled::Yes
            }
            _ => {
                self.field.handle_key(event);
                Handled::Yes
            }
        }
    }

    /// Cancels the overlay, exactly as if Escape were pressed. No-op
    /// unless the overlay is open.
    pub fn cancel(&mut self) {
        if self.phase != Phase::Activated {
            return;
        }
        self.phase = Phase::Cancelled;
        self.hide();
        self.cancelled.emit(&());
    }

    /// Releases everything the widget holds: detaches outcome and theme
    /// subscriptions, closes the zone, clears the field. Idempotent.
    /// A disposed widget ignores keys and reports an empty value.
    pub fn dispose(&mut self) {
        if self.phase == Phase::Disposed {
            return;
        }
        self.phase = Phase::Disposed;
        self.submitted.clear();
        self.cancelled.clear();
        self.theme_sub = None;
        self.hide();
    }

    fn hide(&mut self) {
        self.anchor_host.hide();
        self.field.clear();
    }

    // ============================================================
    // Outcome subscriptions
    // ============================================================

    /// Attaches `handler` to the submit outcome. An outcome fires at most
    /// once per widget, so the subscription detaches after delivery.
    pub fn subscribe_submit(&self, handler: impl FnMut(&String) + 'static) -> Subscription {
        self.submitted.subscribe_once(handler)
    }

    /// Attaches `handler` to the cancel outcome. An outcome fires at most
    /// once per widget, so the subscription detaches after delivery.
    pub fn subscribe_cancel(&self, handler: impl FnMut(&()) + 'static) -> Subscription {
        self.cancelled.subscribe_once(handler)
    }

    // ============================================================
    // Field access
    // ============================================================

    /// Current field text. Empty once the overlay has closed.
    pub fn value(&self) -> String {
        match self.phase {
            Phase::Created | Phase::Activated => self.field.content(),
            _ => String::new(),
        }
    }

    /// Replaces the field text, leaving the cursor at the end. Useful for
    /// prefilling before activation; ignored once the overlay has closed.
    pub fn set_value(&mut self, text: &str) {
        if !matches!(self.phase, Phase::Created | Phase::Activated) {
            return;
        }
        self.field.set_content(text);
    }

    /// The field buffer, for cursor and selection rendering.
    pub fn field(&self) -> &FieldBuffer {
        &self.field
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Colors resolved from the current theme.
    pub fn style(&self) -> FieldStyle {
        *self.style.borrow()
    }

    pub fn anchor(&self) -> Option<Position> {
        self.anchor
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Activated
    }

    pub fn is_disposed(&self) -> bool {
        self.phase == Phase::Disposed
    }
}
