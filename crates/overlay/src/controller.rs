// Chunk: docs/chunks/anchor_capture - Trigger-to-edit controller

//! Connects the trigger command to the widget and the document edit.
//!
//! # Design
//!
//! The controller owns at most one live activation. `trigger` checks its
//! preconditions (no live overlay, an open document, a caret), captures
//! the caret as the anchor, and opens a fresh widget. The insertion
//! always lands at that captured anchor, even if the host moves its
//! caret while the overlay is open.
//!
//! Outcome handlers only deposit into a slot shared with the controller.
//! Once the widget call returns, `handle_key` settles the slot: a submit
//! becomes a zero-width edit at the anchor, a cancel becomes nothing,
//! and either way the widget is disposed before the host sees another
//! event. Splitting deposit from settle keeps the handlers free of any
//! reference to the widget that fired them.

use std::cell::RefCell;
use std::rc::Rc;

use inline_input_keys::KeyEvent;

use crate::config::OverlayOptions;
use crate::host::{AnchorHost, EditRange, EditorHost, Position};
use crate::signal::Subscription;
use crate::theme::ThemeProvider;
use crate::widget::{Handled, InlineInputWidget};

/// Tag attached to edits this overlay applies, for undo grouping and
/// change attribution in the host.
pub const EDIT_SOURCE: &str = "inline-input";

/// What `trigger` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The overlay opened at the caret.
    Opened,
    /// An overlay is already live; the trigger was ignored.
    AlreadyActive,
    /// No document to insert into.
    NoDocument,
    /// The host could not produce a caret position.
    NoCaret,
}

enum Outcome {
    Submitted(String),
    Cancelled,
}

struct Activation {
    widget: InlineInputWidget,
    anchor: Position,
    outcome: Rc<RefCell<Option<Outcome>>>,
    _submit_sub: Subscription,
    _cancel_sub: Subscription,
}

/// Orchestrates one overlay at a time against the hosting editor.
pub struct InlineInputController {
    theme: Rc<dyn ThemeProvider>,
    options: OverlayOptions,
    active: Option<Activation>,
}

impl InlineInputController {
    /// Controller with the stock options.
    pub fn new(theme: Rc<dyn ThemeProvider>) -> Self {
        Self::with_options(theme, OverlayOptions::default())
    }

    pub fn with_options(theme: Rc<dyn ThemeProvider>, options: OverlayOptions) -> Self {
        Self {
            theme,
            options,
            active: None,
        }
    }

    /// Opens the overlay at the caret, capturing it as the anchor for the
    /// eventual insertion. Reports which precondition failed otherwise.
    pub fn trigger(
        &mut self,
        editor: &dyn EditorHost,
        anchor_host: Box<dyn AnchorHost>,
    ) -> TriggerOutcome {
        if self.active.is_some() {
            return TriggerOutcome::AlreadyActive;
        }
        if !editor.has_document() {
            return TriggerOutcome::NoDocument;
        }
        let Some(anchor) = editor.caret() else {
            return TriggerOutcome::NoCaret;
        };

        let mut widget = InlineInputWidget::new(
            Rc::clone(&self.theme),
            anchor_host,
            self.options.height_in_lines,
        );
        let outcome = Rc::new(RefCell::new(None));

        let submit_sub = {
            let slot = Rc::clone(&outcome);
            widget.subscribe_submit(move |text| {
                *slot.borrow_mut() = Some(Outcome::Submitted(text.clone()));
            })
        };
        let cancel_sub = {
            let slot = Rc::clone(&outcome);
            widget.subscribe_cancel(move |_| {
                *slot.borrow_mut() = Some(Outcome::Cancelled);
            })
        };

        widget.activate(anchor, Some(&self.options.placeholder));

        self.active = Some(Activation {
            widget,
            anchor,
            outcome,
            _submit_sub: submit_sub,
            _cancel_sub: cancel_sub,
        });
        TriggerOutcome::Opened
    }

    /// Routes one key event to the live overlay, then settles any outcome
    /// it produced. Returns `Handled::No` when no overlay is live so the
    /// host falls through to its normal key dispatch.
    pub fn handle_key(&mut self, event: &KeyEvent, editor: &mut dyn EditorHost) -> Handled {
        let Some(activation) = self.active.as_mut() else {
            return Handled::No;
        };
        let handled = activation.widget.handle_key(event);
        self.settle(editor);
        handled
    }

    /// Cancels the live overlay without touching the document. Hosts call
    /// this on focus loss or when the anchored view goes away.
    pub fn force_cancel(&mut self, editor: &mut dyn EditorHost) {
        if let Some(activation) = self.active.as_mut() {
            activation.widget.cancel();
        }
        self.settle(editor);
        // Release the activation even if no outcome fired
        if let Some(mut stale) = self.active.take() {
            stale.widget.dispose();
        }
    }

    /// Consumes a deposited outcome: a submit becomes an insertion at the
    /// anchor captured at trigger time, a cancel (or a submit trimmed down
    /// to nothing) leaves the document untouched. The widget is disposed
    /// either way.
    fn settle(&mut self, editor: &mut dyn EditorHost) {
        let settled = self
            .active
            .as_ref()
            .map_or(false, |activation| activation.outcome.borrow().is_some());
        if !settled {
            return;
        }
        if let Some(mut activation) = self.active.take() {
            let outcome = activation.outcome.borrow_mut().take();
            if let Some(Outcome::Submitted(text)) = outcome {
                if !text.is_empty() {
                    editor.apply_edit(EditRange::caret(activation.anchor), &text, EDIT_SOURCE);
                }
            }
            activation.widget.dispose();
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Field text of the live overlay, if one is open.
    pub fn value(&self) -> Option<String> {
        self.active
            .as_ref()
            .map(|activation| activation.widget.value())
    }

    /// Prefills the live overlay's field.
    pub fn set_value(&mut self, text: &str) {
        if let Some(activation) = self.active.as_mut() {
            activation.widget.set_value(text);
        }
    }

    /// The live overlay's widget, for rendering.
    pub fn widget(&self) -> Option<&InlineInputWidget> {
        self.active.as_ref().map(|activation| &activation.widget)
    }
}
