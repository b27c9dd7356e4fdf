//! Script membership and character classes.
//!
//! All checks work on single UTF-16 code units, so only the Basic
//! Multilingual Plane part of each script is covered.

pub(crate) const SPACE: u16 = 0x0020;
pub(crate) const LINE_FEED: u16 = 0x000A;
pub(crate) const CARRIAGE_RETURN: u16 = 0x000D;
pub(crate) const ZERO_WIDTH_NON_JOINER: u16 = 0x200C;
pub(crate) const ZERO_WIDTH_JOINER: u16 = 0x200D;
pub(crate) const COMBINING_GRAPHEME_JOINER: u16 = 0x034F;

const WHITESPACE: &[u16] = &[
    0x0009, // CHARACTER TABULATION
    0x000A, // LINE FEED
    0x000C, // FORM FEED
    0x000D, // CARRIAGE RETURN
    0x0020, // SPACE
    0x0085, // NEXT LINE
    0x00A0, // NO-BREAK SPACE
    0x0F0C, // TIBETAN MARK DELIMITER TSHEG BSTAR
    0x200B, // ZERO WIDTH SPACE
    0x202F, // NARROW NO-BREAK SPACE
    0x2060, // WORD JOINER
    0x3000, // IDEOGRAPHIC SPACE
    0xFEFF, // ZERO WIDTH NO-BREAK SPACE
];

const ARABIC: &[(u16, u16)] = &[
    (0x0600, 0x06FF), // Arabic
    (0x0750, 0x077F), // Arabic Supplement
    (0x0870, 0x089F), // Arabic Extended-B
    (0x08A0, 0x08FF), // Arabic Extended-A
    (0xFB50, 0xFDFF), // Arabic Presentation Forms-A
    (0xFE70, 0xFEFF), // Arabic Presentation Forms-B
];

// Sorted, so `in_ranges` can binary search.
const CJK: &[(u16, u16)] = &[
    (0x2E80, 0x2EFF), // CJK Radicals Supplement
    (0x2F00, 0x2FDF), // Kangxi Radicals
    (0x2FF0, 0x2FFF), // Ideographic Description Characters
    (0x3000, 0x303F), // CJK Symbols and Punctuation
    (0x31C0, 0x31EF), // CJK Strokes
    (0x3200, 0x32FF), // Enclosed CJK Letters and Months
    (0x3300, 0x33FF), // CJK Compatibility
    (0x3400, 0x4DBF), // CJK Unified Ideographs Extension A
    (0x4E00, 0x9FFF), // CJK Unified Ideographs
    (0xF900, 0xFAFF), // CJK Compatibility Ideographs
    (0xFE10, 0xFE1F), // Vertical Forms
    (0xFE30, 0xFE4F), // CJK Compatibility Forms
    (0xFE50, 0xFE6F), // Small Form Variants
    (0xFF00, 0xFFEF), // Halfwidth and Fullwidth Forms
];

const MYANMAR: &[(u16, u16)] = &[
    (0x1000, 0x109F), // Myanmar
    (0xA9E0, 0xA9FF), // Myanmar Extended-B
    (0xAA60, 0xAA7F), // Myanmar Extended-A
];

const KHMER: &[(u16, u16)] = &[
    (0x1780, 0x17FF), // Khmer
    (0x19E0, 0x19FF), // Khmer Symbols
];

/// Checks that a sorted, non-overlapping range table contains `c`.
pub(crate) fn in_ranges(ranges: &[(u16, u16)], c: u16) -> bool {
    ranges
        .binary_search_by(|&(start, end)| {
            if end < c {
                core::cmp::Ordering::Less
            } else if start > c {
                core::cmp::Ordering::Greater
            } else {
                core::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Checks that the code unit belongs to one of the Arabic blocks.
pub fn is_arabic(c: u16) -> bool {
    in_ranges(ARABIC, c)
}

/// Checks that the code unit is a Chinese, Japanese or Korean character.
pub fn is_cjk(c: u16) -> bool {
    in_ranges(CJK, c)
}

/// Checks that the code unit is Thai.
pub fn is_thai(c: u16) -> bool {
    (0x0E00..=0x0E7F).contains(&c)
}

/// Checks that the code unit is Buginese.
pub fn is_buginese(c: u16) -> bool {
    (0x1A00..=0x1A1F).contains(&c)
}

/// Checks that the code unit is Javanese.
pub fn is_javanese(c: u16) -> bool {
    (0xA980..=0xA9DF).contains(&c)
}

/// Checks that the code unit is Khmer.
pub fn is_khmer(c: u16) -> bool {
    in_ranges(KHMER, c)
}

/// Checks that the code unit is Myanmar.
pub fn is_myanmar(c: u16) -> bool {
    in_ranges(MYANMAR, c)
}

/// Checks that the code unit is Tibetan.
pub fn is_tibetan(c: u16) -> bool {
    (0x0F00..=0x0FFF).contains(&c)
}

/// Checks that the code unit is Tamil.
pub fn is_tamil(c: u16) -> bool {
    (0x0B80..=0x0BFF).contains(&c)
}

/// Checks that the code unit separates syllable clusters.
///
/// Covers the usual spaces and breaks plus the zero-width and no-break
/// variants, and the Tibetan tsheg bstar.
pub fn is_whitespace(c: u16) -> bool {
    WHITESPACE.binary_search(&c).is_ok()
}

/// Checks that the code unit glues itself to the preceding cluster definition.
#[inline]
pub(crate) fn is_joiner(c: u16) -> bool {
    c == ZERO_WIDTH_JOINER || c == COMBINING_GRAPHEME_JOINER
}
