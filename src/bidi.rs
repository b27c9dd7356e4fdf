//! A simplified bidirectional reordering pass.
//!
//! This is not UAX #9: there are no embedding levels, isolates or bracket
//! pairs. Each line is cut into runs of one bidi class, neutral runs are
//! resolved from their neighbours, and right-to-left runs are reversed and
//! mirrored.

use core::ops::Range;

use smallvec::SmallVec;

use crate::bidi_table::{MIRRORS, NEUTRAL, RTL, WEAK};
use crate::unicode::{in_ranges, CARRIAGE_RETURN, LINE_FEED};

/// A simplified bidi class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BidiType {
    /// Strong right-to-left.
    Rtl,
    /// Digits, number separators and nonspacing marks.
    Weak,
    /// Whitespace and most punctuation.
    Neutral,
    /// Strong left-to-right. Everything not covered by the other classes.
    Ltr,
}

impl BidiType {
    /// Returns the bidi class of a code unit.
    ///
    /// Strong right-to-left wins over neutral, neutral over weak.
    pub fn of(c: u16) -> Self {
        if is_rtl(c) {
            BidiType::Rtl
        } else if is_neutral(c) {
            BidiType::Neutral
        } else if is_weak(c) {
            BidiType::Weak
        } else {
            BidiType::Ltr
        }
    }

    #[inline]
    fn is_strong(self) -> bool {
        matches!(self, BidiType::Rtl | BidiType::Ltr)
    }
}

/// Checks that the code unit is strong right-to-left.
pub fn is_rtl(c: u16) -> bool {
    in_ranges(RTL, c)
}

/// Checks that the code unit has a neutral direction.
pub fn is_neutral(c: u16) -> bool {
    in_ranges(NEUTRAL, c)
}

/// Checks that the code unit has a weak direction.
pub fn is_weak(c: u16) -> bool {
    in_ranges(WEAK, c)
}

/// Returns the first strong direction in the text, or `Ltr` when there is none.
pub fn dominant_type(text: &[u16]) -> BidiType {
    text.iter()
        .map(|c| BidiType::of(*c))
        .find(|t| t.is_strong())
        .unwrap_or(BidiType::Ltr)
}

/// Returns the mirror image of a paired character, or the character itself.
pub fn mirror(c: u16) -> u16 {
    match MIRRORS.binary_search_by_key(&c, |&(from, _)| from) {
        Ok(idx) => MIRRORS[idx].1,
        Err(_) => c,
    }
}

/// A run of one resolved direction.
///
/// Holds several source ranges once runs have been moved around and merged.
struct Chunk {
    ranges: SmallVec<[Range<usize>; 2]>,
    kind: BidiType,
}

impl Chunk {
    fn new(range: Range<usize>, kind: BidiType) -> Self {
        let mut ranges = SmallVec::new();
        ranges.push(range);
        Chunk { ranges, kind }
    }

    fn emit(&self, line: &[u16], out: &mut Vec<u16>) {
        let start = out.len();
        for range in &self.ranges {
            out.extend_from_slice(&line[range.clone()]);
        }

        if self.kind == BidiType::Rtl {
            let run = &mut out[start..];
            run.reverse();
            for c in run {
                *c = mirror(*c);
            }
        }
    }
}

/// Reorders text for display.
///
/// Lines are split at CR and LF, empty lines are dropped, and the lines are
/// joined back with LF.
pub fn process_bidi_text(input: &[u16]) -> Vec<u16> {
    let mut result = Vec::with_capacity(input.len());
    let lines = input
        .split(|c| *c == LINE_FEED || *c == CARRIAGE_RETURN)
        .filter(|line| !line.is_empty());

    for (idx, line) in lines.enumerate() {
        if idx != 0 {
            result.push(LINE_FEED);
        }

        reorder_line(line, &mut result);
    }

    result
}

fn reorder_line(line: &[u16], out: &mut Vec<u16>) {
    debug_assert!(!line.is_empty());

    let first = BidiType::of(line[0]);
    let dominant_rtl = if first.is_strong() {
        first == BidiType::Rtl
    } else {
        dominant_type(line) == BidiType::Rtl
    };

    let mut chunks = split_chunks(line, first, dominant_rtl);
    resolve_chunks(&mut chunks, dominant_rtl);
    merge_chunks(&mut chunks);

    if dominant_rtl {
        chunks.reverse();
    }

    log::trace!("bidi line of {} units: {} runs, rtl: {}", line.len(), chunks.len(), dominant_rtl);

    for chunk in &chunks {
        chunk.emit(line, out);
    }
}

// The first chunk is seeded with the resolved first type,
// so it can be empty when the line starts with a weak or neutral unit.
fn split_chunks(line: &[u16], first: BidiType, dominant_rtl: bool) -> Vec<Chunk> {
    let mut kind = if first.is_strong() {
        first
    } else if dominant_rtl {
        BidiType::Rtl
    } else {
        BidiType::Ltr
    };

    let mut chunks = Vec::new();
    let mut start = 0;
    for (idx, c) in line.iter().enumerate() {
        let t = BidiType::of(*c);
        if t != kind {
            chunks.push(Chunk::new(start..idx, kind));
            start = idx;
            kind = t;
        }
    }

    if start != line.len() {
        chunks.push(Chunk::new(start..line.len(), kind));
    }

    chunks
}

fn resolve_chunks(chunks: &mut [Chunk], dominant_rtl: bool) {
    let len = chunks.len();
    for idx in 0..len {
        match chunks[idx].kind {
            BidiType::Neutral => {
                if idx == 0 {
                    if len > 1 {
                        chunks[0].kind = chunks[1].kind;
                    }
                } else if idx == len - 1 {
                    // The trailing run keeps its class and is emitted as is.
                } else if chunks[idx - 1].kind == chunks[idx + 1].kind {
                    chunks[idx].kind = chunks[idx - 1].kind;
                } else {
                    chunks[idx].kind = if dominant_rtl { BidiType::Rtl } else { BidiType::Ltr };
                }
            }
            BidiType::Weak => {
                // Only left-to-right lines pull numbers in front of a preceding RTL run.
                if idx != 0 && chunks[idx - 1].kind == BidiType::Rtl && !dominant_rtl {
                    chunks.swap(idx, idx - 1);
                }
            }
            _ => {}
        }
    }
}

fn merge_chunks(chunks: &mut Vec<Chunk>) {
    let mut idx = 0;
    while idx + 1 < chunks.len() {
        if chunks[idx].kind == chunks[idx + 1].kind {
            let next = chunks.remove(idx + 1);
            chunks[idx].ranges.extend(next.ranges);
        } else {
            idx += 1;
        }
    }
}
