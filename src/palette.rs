//! Escape-count to character mapping.

/// One glyph per escape count, from "escaped immediately" down to
/// "survived every round".
pub const GLYPHS: &[u8; 16] = b"FEDCBA9876543210";

/// Glyph for an escape count in `0..=16`.
///
/// The in-set count of 16 falls outside the palette and clamps to the
/// deepest glyph `'0'`, which is also what counts of 15 render as.
pub fn glyph(escape_count: u32) -> char {
    let index = escape_count.min(GLYPHS.len() as u32 - 1) as usize;
    GLYPHS[index] as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immediate_escape_is_brightest() {
        assert_eq!(glyph(0), 'F');
    }

    #[test]
    fn in_set_clamps_to_deepest_glyph() {
        assert_eq!(glyph(15), '0');
        assert_eq!(glyph(16), '0');
    }

    #[test]
    fn every_count_has_a_distinct_glyph() {
        let glyphs: Vec<char> = (0..16).map(glyph).collect();
        for (index, value) in glyphs.iter().enumerate() {
            assert_eq!(glyphs.iter().position(|g| g == value), Some(index));
        }
    }
}
