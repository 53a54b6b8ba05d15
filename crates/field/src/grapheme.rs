// Chunk: docs/chunks/grapheme_cluster_awareness - Grapheme cluster boundary helpers

//! Grapheme cluster boundary detection for the field model.
//!
//! The field stores Rust `char` (Unicode scalar values), but cursor movement
//! and deletion operate on grapheme clusters, the units a user perceives as
//! single characters:
//!
//! - ZWJ emoji sequences (a family emoji is 7 chars)
//! - Combining character sequences (e + combining acute = 2 chars)
//! - Regional indicator pairs (a flag is 2 chars)
//!
//! All offsets below are char offsets into the field content.

use unicode_segmentation::UnicodeSegmentation;

/// Returns the char offset of the grapheme cluster boundary immediately
/// left of `offset`.
///
/// An `offset` inside a cluster snaps to the start of that cluster; an
/// `offset` at a cluster start moves to the start of the previous cluster.
/// Offsets past the end are clamped. Returns 0 at the start.
pub fn boundary_left(chars: &[char], offset: usize) -> usize {
    if offset == 0 || chars.is_empty() {
        return 0;
    }

    let offset = offset.min(chars.len());

    // Fast path: ASCII chars are always single-char graphemes.
    if chars[offset - 1].is_ascii() {
        return offset - 1;
    }

    let s: String = chars.iter().collect();
    let mut boundary = 0;
    let mut idx = 0;
    for cluster in s.graphemes(true) {
        if idx >= offset {
            break;
        }
        boundary = idx;
        idx += cluster.chars().count();
    }
    boundary
}

/// Returns the char offset of the grapheme cluster boundary immediately
/// right of `offset`.
///
/// An `offset` inside a cluster snaps to the end of that cluster. Offsets
/// at or past the end return `chars.len()`.
pub fn boundary_right(chars: &[char], offset: usize) -> usize {
    if chars.is_empty() || offset >= chars.len() {
        return chars.len();
    }

    // Fast path: an ASCII char followed by another ASCII char (or nothing)
    // is a single-char grapheme. A non-ASCII successor could be a combining
    // mark, so fall through to full segmentation in that case.
    if chars[offset].is_ascii() && chars.get(offset + 1).map_or(true, |c| c.is_ascii()) {
        return offset + 1;
    }

    let s: String = chars.iter().collect();
    let mut idx = 0;
    for cluster in s.graphemes(true) {
        let end = idx + cluster.chars().count();
        if offset < end {
            return end;
        }
        idx = end;
    }
    chars.len()
}

/// Returns the char length of the grapheme cluster ending at `offset`.
///
/// This is how many chars a backward deletion at `offset` removes.
/// Returns 0 at the start of the field.
pub fn len_before(chars: &[char], offset: usize) -> usize {
    let offset = offset.min(chars.len());
    offset - boundary_left(chars, offset)
}

/// Returns the char length of the grapheme cluster starting at `offset`.
///
/// This is how many chars a forward deletion at `offset` removes.
/// Returns 0 at or past the end of the field.
pub fn len_at(chars: &[char], offset: usize) -> usize {
    if offset >= chars.len() {
        return 0;
    }
    boundary_right(chars, offset) - offset
}

#[cfg(test)]
mod tests {
    use super::*;

    // Family emoji: man + ZWJ + woman + ZWJ + girl + ZWJ + boy = 7 chars.
    const FAMILY: &str = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
    // Flag: two regional indicator symbols = 2 chars.
    const FLAG: &str = "\u{1F1FA}\u{1F1F8}";

    fn chars_of(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    // ==================== ASCII ====================

    #[test]
    fn test_ascii_boundaries() {
        let chars = chars_of("hello");
        assert_eq!(boundary_left(&chars, 0), 0);
        assert_eq!(boundary_left(&chars, 1), 0);
        assert_eq!(boundary_left(&chars, 3), 2);
        assert_eq!(boundary_right(&chars, 0), 1);
        assert_eq!(boundary_right(&chars, 4), 5);
        assert_eq!(boundary_right(&chars, 5), 5);
    }

    #[test]
    fn test_ascii_lengths() {
        let chars = chars_of("hello");
        assert_eq!(len_before(&chars, 0), 0);
        assert_eq!(len_before(&chars, 3), 1);
        assert_eq!(len_at(&chars, 0), 1);
        assert_eq!(len_at(&chars, 5), 0);
    }

    // ==================== ZWJ emoji ====================

    #[test]
    fn test_zwj_emoji_boundaries() {
        let chars = chars_of(&format!("a{FAMILY}b"));
        assert_eq!(chars.len(), 9);

        // Start of the emoji is char 1, end is char 8.
        assert_eq!(boundary_left(&chars, 8), 1);
        assert_eq!(boundary_left(&chars, 9), 8);
        assert_eq!(boundary_right(&chars, 1), 8);
        assert_eq!(boundary_right(&chars, 8), 9);
    }

    #[test]
    fn test_zwj_emoji_mid_cluster_snaps() {
        let chars = chars_of(&format!("a{FAMILY}b"));
        // Offsets inside the cluster snap to its edges.
        assert_eq!(boundary_left(&chars, 4), 1);
        assert_eq!(boundary_right(&chars, 4), 8);
    }

    #[test]
    fn test_zwj_emoji_lengths() {
        let chars = chars_of(&format!("a{FAMILY}b"));
        assert_eq!(len_before(&chars, 8), 7);
        assert_eq!(len_at(&chars, 1), 7);
        assert_eq!(len_at(&chars, 8), 1);
    }

    // ==================== Combining characters ====================

    #[test]
    fn test_combining_char_boundaries() {
        // "e" + combining acute, flanked by ASCII.
        let chars = chars_of("ae\u{0301}b");
        assert_eq!(chars.len(), 4);

        assert_eq!(boundary_left(&chars, 3), 1);
        assert_eq!(boundary_right(&chars, 1), 3);
        assert_eq!(len_before(&chars, 3), 2);
        assert_eq!(len_at(&chars, 1), 2);
    }

    // ==================== Regional indicators ====================

    #[test]
    fn test_regional_indicator_boundaries() {
        let chars = chars_of(&format!("a{FLAG}b"));
        assert_eq!(chars.len(), 4);

        assert_eq!(boundary_left(&chars, 3), 1);
        assert_eq!(boundary_right(&chars, 1), 3);
        assert_eq!(len_before(&chars, 3), 2);
        assert_eq!(len_at(&chars, 1), 2);
    }

    // ==================== Edge cases ====================

    #[test]
    fn test_empty_slice() {
        let chars: Vec<char> = Vec::new();
        assert_eq!(boundary_left(&chars, 0), 0);
        assert_eq!(boundary_left(&chars, 5), 0);
        assert_eq!(boundary_right(&chars, 0), 0);
        assert_eq!(len_before(&chars, 0), 0);
        assert_eq!(len_at(&chars, 0), 0);
    }

    #[test]
    fn test_offset_beyond_length_clamps() {
        let chars = chars_of("abc");
        assert_eq!(boundary_left(&chars, 10), 2);
        assert_eq!(boundary_right(&chars, 10), 3);
        assert_eq!(len_before(&chars, 10), 1);
        assert_eq!(len_at(&chars, 10), 0);
    }
}
