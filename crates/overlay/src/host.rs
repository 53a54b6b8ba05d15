// Chunk: docs/chunks/editor_host_seam - Editor and zone host seams

//! Host-side seams the overlay drives.
//!
//! # Design
//!
//! The overlay never owns a document or a compositor. The controller reads
//! the caret and applies edits through [`EditorHost`]; the widget opens and
//! closes its anchored zone through [`AnchorHost`]. A hosting editor
//! implements both against its own document and view plumbing, and tests
//! substitute recording fakes.

/// Position in the host document as (line, column), both 0-indexed.
/// Columns count characters in the line, not display cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Compare by line first, then by column
        match self.line.cmp(&other.line) {
            std::cmp::Ordering::Equal => self.col.cmp(&other.col),
            ord => ord,
        }
    }
}

/// Half-open character range in the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditRange {
    pub start: Position,
    pub end: Position,
}

impl EditRange {
    /// Creates a range covering `start..end`, swapping the endpoints if
    /// they arrive reversed.
    pub fn new(start: Position, end: Position) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self { start: end, end: start }
        }
    }

    /// Zero-width range used for pure insertion at `position`.
    pub fn caret(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Document-side operations the overlay controller needs from its host.
pub trait EditorHost {
    /// Whether a document is open to edit.
    fn has_document(&self) -> bool;

    /// Current caret position, if the host can produce one.
    fn caret(&self) -> Option<Position>;

    /// Replaces `range` with `text`. A zero-width `range` is a pure
    /// insertion. `source` tags the edit so the host can attribute it in
    /// undo grouping and change notifications.
    fn apply_edit(&mut self, range: EditRange, text: &str, source: &str);
}

/// View-side operations the overlay widget needs from its host.
pub trait AnchorHost {
    /// Opens the zone directly below `anchor`, `height_in_lines` rows tall.
    /// Calling this while the zone is open moves it to the new anchor.
    fn show_at(&mut self, anchor: Position, height_in_lines: usize);

    /// Closes the zone. Must tolerate being called when already closed.
    fn hide(&mut self);

    /// Routes keyboard focus to the overlay's input field.
    fn request_focus(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Position ordering ====================

    #[test]
    fn position_orders_by_line_then_col() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(3, 2) < Position::new(3, 5));
        assert!(Position::new(3, 5) == Position::new(3, 5));
    }

    // ==================== EditRange ====================

    #[test]
    fn new_normalizes_reversed_endpoints() {
        let range = EditRange::new(Position::new(5, 3), Position::new(2, 8));
        assert_eq!(range.start, Position::new(2, 8));
        assert_eq!(range.end, Position::new(5, 3));
    }

    #[test]
    fn caret_range_is_empty() {
        let range = EditRange::caret(Position::new(4, 7));
        assert!(range.is_empty());
        assert_eq!(range.start, range.end);
    }

    #[test]
    fn nonempty_range_reports_not_empty() {
        let range = EditRange::new(Position::new(0, 0), Position::new(0, 1));
        assert!(!range.is_empty());
    }
}
