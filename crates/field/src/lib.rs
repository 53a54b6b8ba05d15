// Chunk: docs/chunks/field_buffer_model - FieldBuffer single-line editing model
//!
//! FieldBuffer: a reusable single-line editing model.
//!
//! `FieldBuffer` provides the affordance set users expect from a native
//! input field (word-jump, kill-line, shift-selection, select-all,
//! Emacs-style Ctrl bindings) while enforcing a single-line invariant.
//! It is the editing core the inline input overlay builds on.
//!
//! # Design
//!
//! The model is three fields: the content as a `Vec<char>`, a cursor char
//! offset, and an optional selection anchor. Key handling is split in two:
//!
//! 1. `resolve_command` is a pure function from a [`KeyEvent`] to a
//!    `FieldCommand`, so the binding table is testable without a buffer.
//! 2. [`FieldBuffer::handle_key`] executes the resolved command against
//!    the model state.
//!
//! The single-line invariant is enforced at the edges: `Return`, `Up`, and
//! `Down` resolve to no command, and every insertion path filters `\n` and
//! `\r`. Cursor movement and deletion operate on grapheme cluster
//! boundaries (see the `grapheme` module), so multi-char clusters like
//! ZWJ emoji behave as single characters.

mod grapheme;

use inline_input_keys::{Key, KeyEvent};

/// A single-line text field with cursor and selection state.
///
/// All offsets are char offsets into the content. The selection, when
/// present, spans from `selection_anchor` to `cursor` in either direction;
/// an anchor equal to the cursor is an empty selection and reported as none.
///
/// # Example
///
/// ```
/// use inline_input_field::FieldBuffer;
/// use inline_input_keys::KeyEvent;
///
/// let mut field = FieldBuffer::new();
/// field.handle_key(&KeyEvent::char('h'));
/// field.handle_key(&KeyEvent::char('i'));
/// assert_eq!(field.content(), "hi");
/// ```
#[derive(Debug, Default)]
pub struct FieldBuffer {
    /// Field content as Unicode scalar values
    chars: Vec<char>,
    /// Cursor position as a char offset, 0..=chars.len()
    cursor: usize,
    /// Selection anchor as a char offset; selection spans anchor..cursor
    selection_anchor: Option<usize>,
}

/// Editing commands a key event can resolve to.
///
/// Kept private: hosts interact through [`FieldBuffer::handle_key`] or the
/// named operations, never through raw commands.
#[derive(Debug, Clone, Copy, PartialEq)]
enum FieldCommand {
    Insert(char),
    DeleteBackward,
    DeleteForward,
    DeleteWordBackward,
    DeleteToStart,
    DeleteToEnd,
    MoveLeft { extend: bool },
    MoveRight { extend: bool },
    MoveWordLeft { extend: bool },
    MoveWordRight { extend: bool },
    MoveToStart { extend: bool },
    MoveToEnd { extend: bool },
    SelectAll,
}

/// Resolves a key event to an editing command.
///
/// Pure function: the binding table in one place, independent of buffer
/// state. Returns `None` for events the field does not handle, which the
/// caller is free to route elsewhere.
///
/// Bindings follow macOS text field conventions: Cmd+Left/Right for line
/// start/end, Option+Left/Right for word jumps, Option+Backspace for word
/// deletion, Cmd+Backspace for delete-to-start, Cmd+A for select-all, and
/// the Emacs-style Ctrl+A / Ctrl+E / Ctrl+K trio. Shift extends the
/// selection on every movement.
fn resolve_command(event: &KeyEvent) -> Option<FieldCommand> {
    let mods = event.modifiers;
    match &event.key {
        Key::Char(ch) => {
            if mods.command {
                match ch {
                    'a' | 'A' => Some(FieldCommand::SelectAll),
                    _ => None,
                }
            } else if mods.control {
                match ch {
                    'a' => Some(FieldCommand::MoveToStart { extend: mods.shift }),
                    'e' => Some(FieldCommand::MoveToEnd { extend: mods.shift }),
                    'k' => Some(FieldCommand::DeleteToEnd),
                    _ => None,
                }
            } else {
                // Shift and Option are already folded into the char by the
                // host's keyboard layer.
                Some(FieldCommand::Insert(*ch))
            }
        }
        Key::Backspace => {
            if mods.command {
                Some(FieldCommand::DeleteToStart)
            } else if mods.option {
                Some(FieldCommand::DeleteWordBackward)
            } else {
                Some(FieldCommand::DeleteBackward)
            }
        }
        Key::Delete => Some(FieldCommand::DeleteForward),
        Key::Left => {
            if mods.command {
                Some(FieldCommand::MoveToStart { extend: mods.shift })
            } else if mods.option {
                Some(FieldCommand::MoveWordLeft { extend: mods.shift })
            } else {
                Some(FieldCommand::MoveLeft { extend: mods.shift })
            }
        }
        Key::Right => {
            if mods.command {
                Some(FieldCommand::MoveToEnd { extend: mods.shift })
            } else if mods.option {
                Some(FieldCommand::MoveWordRight { extend: mods.shift })
            } else {
                Some(FieldCommand::MoveRight { extend: mods.shift })
            }
        }
        Key::Home => Some(FieldCommand::MoveToStart { extend: mods.shift }),
        Key::End => Some(FieldCommand::MoveToEnd { extend: mods.shift }),
        // Return and Escape belong to the widget hosting the field; a
        // single line has no vertical movement and no tab stops.
        Key::Return | Key::Escape | Key::Tab | Key::Up | Key::Down => None,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl FieldBuffer {
    /// Creates a new empty field.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Accessors ====================

    /// Returns the field content as a string.
    ///
    /// The content never contains `\n` or `\r`; every insertion path
    /// filters them.
    pub fn content(&self) -> String {
        self.chars.iter().collect()
    }

    /// Returns true if the field is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the cursor's char offset within the line.
    pub fn cursor_col(&self) -> usize {
        self.cursor
    }

    /// Returns the active selection as an ordered `(start, end)` char
    /// range, or `None` when there is no selection (including the case of
    /// an anchor collapsed onto the cursor).
    pub fn selection_range(&self) -> Option<(usize, usize)> {
        let anchor = self.selection_anchor?;
        if anchor == self.cursor {
            return None;
        }
        Some((anchor.min(self.cursor), anchor.max(self.cursor)))
    }

    /// Returns true if there is an active selection.
    pub fn has_selection(&self) -> bool {
        self.selection_range().is_some()
    }

    // ==================== Key handling ====================

    /// Handles a key event.
    ///
    /// Returns true if the event resolved to an editing command and was
    /// executed, false if the field has no binding for it (`Return`,
    /// `Escape`, vertical movement, unknown chords). Callers that own the
    /// field decide what unhandled events mean.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        let Some(command) = resolve_command(event) else {
            return false;
        };
        match command {
            FieldCommand::Insert(ch) => self.insert_char(ch),
            FieldCommand::DeleteBackward => self.delete_backward(),
            FieldCommand::DeleteForward => self.delete_forward(),
            FieldCommand::DeleteWordBackward => self.delete_word_backward(),
            FieldCommand::DeleteToStart => self.delete_to_start(),
            FieldCommand::DeleteToEnd => self.delete_to_end(),
            FieldCommand::MoveLeft { extend } => self.move_left(extend),
            FieldCommand::MoveRight { extend } => self.move_right(extend),
            FieldCommand::MoveWordLeft { extend } => self.move_word_left(extend),
            FieldCommand::MoveWordRight { extend } => self.move_word_right(extend),
            FieldCommand::MoveToStart { extend } => self.move_to_start(extend),
            FieldCommand::MoveToEnd { extend } => self.move_to_end(extend),
            FieldCommand::SelectAll => self.select_all(),
        }
        true
    }

    // ==================== Insertion ====================

    /// Inserts a character at the cursor, replacing any selection.
    ///
    /// `\n` and `\r` are filtered out (single-line invariant).
    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' || ch == '\r' {
            return;
        }
        self.delete_selection();
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
    }

    /// Inserts a string at the cursor, replacing any selection.
    ///
    /// `\n` and `\r` are filtered out of the inserted text. An empty
    /// string is a no-op and leaves any selection intact.
    pub fn insert_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.delete_selection();
        for ch in text.chars() {
            if ch == '\n' || ch == '\r' {
                continue;
            }
            self.chars.insert(self.cursor, ch);
            self.cursor += 1;
        }
    }

    /// Replaces the entire content, leaving the cursor at the end with no
    /// selection. Newlines in `text` are filtered out.
    pub fn set_content(&mut self, text: &str) {
        self.chars = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        self.cursor = self.chars.len();
        self.selection_anchor = None;
    }

    /// Clears the field back to its initial state.
    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
        self.selection_anchor = None;
    }

    // ==================== Deletion ====================

    /// Deletes the grapheme cluster before the cursor, or the selection if
    /// one is active. No-op at the start of the field.
    pub fn delete_backward(&mut self) {
        if self.delete_selection() {
            return;
        }
        let n = grapheme::len_before(&self.chars, self.cursor);
        if n == 0 {
            return;
        }
        self.chars.drain(self.cursor - n..self.cursor);
        self.cursor -= n;
    }

    /// Deletes the grapheme cluster at the cursor, or the selection if one
    /// is active. No-op at the end of the field.
    pub fn delete_forward(&mut self) {
        if self.delete_selection() {
            return;
        }
        let n = grapheme::len_at(&self.chars, self.cursor);
        if n == 0 {
            return;
        }
        self.chars.drain(self.cursor..self.cursor + n);
    }

    /// Deletes from the start of the previous word to the cursor, or the
    /// selection if one is active.
    pub fn delete_word_backward(&mut self) {
        if self.delete_selection() {
            return;
        }
        let target = self.word_boundary_left();
        self.chars.drain(target..self.cursor);
        self.cursor = target;
    }

    /// Deletes from the start of the field to the cursor, or the selection
    /// if one is active.
    pub fn delete_to_start(&mut self) {
        if self.delete_selection() {
            return;
        }
        self.chars.drain(0..self.cursor);
        self.cursor = 0;
    }

    /// Deletes from the cursor to the end of the field, or the selection
    /// if one is active.
    pub fn delete_to_end(&mut self) {
        if self.delete_selection() {
            return;
        }
        self.chars.truncate(self.cursor);
    }

    /// Removes the selected range if there is one. Returns true if a
    /// selection was deleted. Always drops the anchor.
    fn delete_selection(&mut self) -> bool {
        let range = self.selection_range();
        self.selection_anchor = None;
        if let Some((start, end)) = range {
            self.chars.drain(start..end);
            self.cursor = start;
            true
        } else {
            false
        }
    }

    // ==================== Movement ====================

    /// Moves the cursor one grapheme cluster left.
    ///
    /// Without `extend`, an active selection collapses to its start
    /// instead of moving the cursor. With `extend`, the selection grows
    /// (or shrinks) to the new cursor position.
    pub fn move_left(&mut self, extend: bool) {
        if extend {
            self.ensure_anchor();
            self.cursor = grapheme::boundary_left(&self.chars, self.cursor);
        } else if let Some((start, _)) = self.selection_range() {
            self.cursor = start;
            self.selection_anchor = None;
        } else {
            self.selection_anchor = None;
            self.cursor = grapheme::boundary_left(&self.chars, self.cursor);
        }
    }

    /// Moves the cursor one grapheme cluster right.
    ///
    /// Without `extend`, an active selection collapses to its end instead
    /// of moving the cursor.
    pub fn move_right(&mut self, extend: bool) {
        if extend {
            self.ensure_anchor();
            self.cursor = grapheme::boundary_right(&self.chars, self.cursor);
        } else if let Some((_, end)) = self.selection_range() {
            self.cursor = end;
            self.selection_anchor = None;
        } else {
            self.selection_anchor = None;
            self.cursor = grapheme::boundary_right(&self.chars, self.cursor);
        }
    }

    /// Moves the cursor to the start of the previous word.
    pub fn move_word_left(&mut self, extend: bool) {
        self.prepare_move(extend);
        self.cursor = self.word_boundary_left();
    }

    /// Moves the cursor to the end of the next word.
    pub fn move_word_right(&mut self, extend: bool) {
        self.prepare_move(extend);
        self.cursor = self.word_boundary_right();
    }

    /// Moves the cursor to the start of the field.
    pub fn move_to_start(&mut self, extend: bool) {
        self.prepare_move(extend);
        self.cursor = 0;
    }

    /// Moves the cursor to the end of the field.
    pub fn move_to_end(&mut self, extend: bool) {
        self.prepare_move(extend);
        self.cursor = self.chars.len();
    }

    /// Selects the entire content. Selecting an empty field leaves no
    /// selection.
    pub fn select_all(&mut self) {
        if self.chars.is_empty() {
            self.selection_anchor = None;
            return;
        }
        self.selection_anchor = Some(0);
        self.cursor = self.chars.len();
    }

    fn ensure_anchor(&mut self) {
        if self.selection_anchor.is_none() {
            self.selection_anchor = Some(self.cursor);
        }
    }

    fn prepare_move(&mut self, extend: bool) {
        if extend {
            self.ensure_anchor();
        } else {
            self.selection_anchor = None;
        }
    }

    fn word_boundary_left(&self) -> usize {
        let mut pos = self.cursor.min(self.chars.len());
        while pos > 0 && !is_word_char(self.chars[pos - 1]) {
            pos -= 1;
        }
        while pos > 0 && is_word_char(self.chars[pos - 1]) {
            pos -= 1;
        }
        pos
    }

    fn word_boundary_right(&self) -> usize {
        let len = self.chars.len();
        let mut pos = self.cursor.min(len);
        while pos < len && !is_word_char(self.chars[pos]) {
            pos += 1;
        }
        while pos < len && is_word_char(self.chars[pos]) {
            pos += 1;
        }
        pos
    }
}
