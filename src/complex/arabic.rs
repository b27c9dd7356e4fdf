//! Text-based Arabic shaping.
//!
//! Letters in U+0600..=U+06FF are replaced with their contextual forms from
//! Arabic Presentation Forms-A and -B, the way legacy displays without
//! glyph substitution expect them.

use crate::buffer::CodePointBuffer;
use crate::common::{Letters, LengthPolicy, ShapeOptions, TashkeelPolicy, TextDirection};
use crate::unicode::SPACE;
use super::arabic_table::*;

const LAM_CHAR: u16 = 0x0644;
const TATWEEL_CHAR: u16 = 0x0640;
const SHADDA_CHAR: u16 = 0x0651;
const SHADDA_ISOLATED_CHAR: u16 = 0xFE7C;
const SHADDA_TATWEEL_CHAR: u16 = 0xFE7D;
const NEW_TAIL_CHAR: u16 = 0xFE73;

// Placeholders for the cells freed by a Lam-Alef ligature and by a dropped
// Tashkeel mark. Both are noncharacters, so they can't appear in real text.
const LAMALEF_SPACE_SUB: u16 = 0xFFFF;
const TASHKEEL_SPACE_SUB: u16 = 0xFFFE;

/// How the shaping scan treats Tashkeel marks.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum TashkeelMode {
    /// Every mark takes its isolated form.
    Isolated,
    /// Marks between two joined letters take their medial form.
    Contextual,
    /// Marks are dropped, except Shadda, which takes its medial form.
    Drop,
}

#[inline]
fn is_tashkeel(c: u16) -> bool {
    (0x064B..=0x0652).contains(&c)
}

#[inline]
fn is_tashkeel_fe(c: u16) -> bool {
    (0xFE70..=0xFE7F).contains(&c)
}

#[inline]
fn is_alef(c: u16) -> bool {
    matches!(c, 0x0622 | 0x0623 | 0x0625 | 0x0627)
}

#[inline]
fn is_lam_alef(c: u16) -> bool {
    (0xFEF5..=0xFEFC).contains(&c)
}

/// Returns the internal Lam-Alef form for an Alef variant.
fn lam_alef_form(c: u16) -> Option<u16> {
    match c {
        0x0622 => Some(0x065C),
        0x0623 => Some(0x065D),
        0x0625 => Some(0x065E),
        0x0627 => Some(0x065F),
        _ => None,
    }
}

/// Returns the link descriptor of a code unit.
pub(crate) fn link(c: u16) -> u16 {
    match c {
        0x0622..=0x06D3 => ARABIC_LINKS[usize::from(c - 0x0622)],
        0x200D => D,
        0x206D..=0x206F => T,
        0xFB50..=0xFC62 => u16::from(PRESENTATION_A_LINKS[usize::from(c - 0xFB50)]),
        0xFE70..=0xFEFC => u16::from(PRESENTATION_B_LINKS[usize::from(c - 0xFE70)]),
        _ => 0,
    }
}

// 1: the mark sits on a joined position and becomes a Tatweel.
// 2: Shadda forms that become Shadda on Tatweel.
fn tashkeel_on_tatweel(c: u16) -> u8 {
    if is_tashkeel_fe(c) && c != NEW_TAIL_CHAR && c != 0xFE75 && c != SHADDA_TATWEEL_CHAR {
        TASHKEEL_MEDIAL[usize::from(c - 0xFE70)]
    } else if (0xFCF2..=0xFCF4).contains(&c) || c == SHADDA_TATWEEL_CHAR {
        2
    } else {
        0
    }
}

fn is_isolated_tashkeel(c: u16) -> bool {
    if is_tashkeel_fe(c) && c != NEW_TAIL_CHAR && c != 0xFE75 {
        TASHKEEL_MEDIAL[usize::from(c - 0xFE70)] == 0
    } else {
        (0xFC5E..=0xFC63).contains(&c)
    }
}

fn replace_tashkeel_with_tatweel(buffer: &mut [u16]) {
    for c in buffer {
        match tashkeel_on_tatweel(*c) {
            1 => *c = TATWEEL_CHAR,
            2 => *c = SHADDA_TATWEEL_CHAR,
            _ => {
                if is_isolated_tashkeel(*c) && *c != SHADDA_ISOLATED_CHAR {
                    *c = SPACE;
                }
            }
        }
    }
}

/// Merges Shadda + mark pairs into the ligatures U+FC5E..=U+FC62.
///
/// Pairs are matched in reading order, so visual text is scanned from its
/// end. A merged pair never takes part in another merge.
fn aggregate_tashkeel(input: &[u16], direction: TextDirection) -> CodePointBuffer {
    let visual = direction == TextDirection::VisualLtr;
    let mut units = input.to_vec();
    if visual {
        units.reverse();
    }

    let mut out: Vec<u16> = Vec::with_capacity(units.len());
    let mut prev = 0;
    let mut curr_link = 0;
    let mut possible = true;
    for c in units {
        let prev_link = curr_link;
        curr_link = link(c);
        if possible && (prev_link | curr_link) & COMBINE == COMBINE {
            possible = false;
            let combined = prev.min(c) - 0x064C + 0xFC5E;
            if let Some(last) = out.last_mut() {
                *last = combined;
            }
            curr_link = link(combined);
        } else {
            possible = true;
            out.push(c);
            prev = c;
        }
    }

    if visual {
        out.reverse();
    }

    CodePointBuffer::from(out)
}

/// Predicts the output length for the resizing policies.
///
/// This is only a capacity hint: the sentinel compaction decides the real length.
fn predict_size(source: &[u16], options: ShapeOptions) -> usize {
    let mut size = source.len();
    let letters = options.letters();
    let shaping = matches!(letters, Letters::Shape | Letters::ShapeTashkeelIsolated);
    let lam_alef_resize = shaping && options.length() == LengthPolicy::Resize;
    let tashkeel_resize = letters == Letters::Shape && options.tashkeel() == TashkeelPolicy::Resize;

    if lam_alef_resize || tashkeel_resize {
        let visual = options.text_direction() == TextDirection::VisualLtr;
        for (i, &c) in source.iter().enumerate() {
            let next = source.get(i + 1).copied();
            let pair = if visual {
                is_alef(c) && next == Some(LAM_CHAR)
            } else {
                c == LAM_CHAR && next.map_or(false, is_alef)
            };

            if (pair || is_tashkeel_fe(c)) && size > 0 {
                size -= 1;
            }
        }
    }

    if letters == Letters::Unshape && options.length() == LengthPolicy::Resize {
        size += source.iter().filter(|c| is_lam_alef(**c)).count();
    }

    size
}

/// Shapes text in visual right-to-left order.
///
/// Walks from the end of the buffer (the logical start) with a lookahead
/// that skips transparent marks.
fn shape_visual(buf: &mut [u16], mode: TashkeelMode) {
    if buf.is_empty() {
        return;
    }

    let mut i = buf.len() - 1;
    let mut last_pos = i;
    let mut prev_link = 0;
    let mut last_link = 0;
    let mut next_link = 0;
    // Index of the next non-transparent unit, once looked up.
    let mut next_pos: Option<Option<usize>> = None;
    let mut curr_link = link(buf[i]);

    loop {
        if curr_link & 0xFF00 != 0 || link(buf[i]) & T != 0 {
            if next_pos.is_none() {
                let mut nw = i;
                next_link = 0;
                next_pos = Some(None);
                while nw > 0 {
                    nw -= 1;
                    let l = link(buf[nw]);
                    if l & T == 0 {
                        next_link = l;
                        next_pos = Some(Some(nw));
                        break;
                    }
                }
            }

            if curr_link & ALEF != 0 && last_link & LAM != 0 {
                let lam_alef = lam_alef_form(buf[i]);
                if let Some(form) = lam_alef {
                    log::debug!("lam-alef ligature at {}", last_pos);
                    buf[i] = LAMALEF_SPACE_SUB;
                    buf[last_pos] = form;
                    i = last_pos;
                }

                last_link = prev_link;
                curr_link = lam_alef.map_or(0, link);
            }

            let c = buf[i];
            let (next, last, curr) = (next_link & D, last_link & D, curr_link & D);
            let mut shape =
                u16::from(SHAPE_TABLE[usize::from(next)][usize::from(last)][usize::from(curr)]);

            if curr_link & D == R {
                shape &= 1;
            } else if is_tashkeel(c) {
                shape = match mode {
                    TashkeelMode::Contextual
                        if last_link & L != 0 && next_link & R != 0 && c != 0x064C && c != 0x064D =>
                    {
                        if next_link & ALEF == ALEF && last_link & LAM == LAM {
                            0
                        } else {
                            1
                        }
                    }
                    TashkeelMode::Drop if c == SHADDA_CHAR => 1,
                    _ => 0,
                };
            }

            if c & 0xFF00 == 0x0600 {
                if is_tashkeel(c) {
                    if mode == TashkeelMode::Drop && c != SHADDA_CHAR {
                        buf[i] = TASHKEEL_SPACE_SUB;
                    } else {
                        buf[i] = 0xFE70 + TASHKEEL_OFFSETS[usize::from(c - 0x064B)] + shape;
                    }
                } else if curr_link & PF_A != 0 {
                    buf[i] = 0xFB50 + (curr_link >> 8) + shape;
                } else if curr_link >> 8 != 0 && curr_link & T == 0 {
                    buf[i] = 0xFE70 + (curr_link >> 8) + shape;
                }
            }
        }

        if curr_link & T == 0 {
            prev_link = last_link;
            last_link = curr_link;
            last_pos = i;
        }

        if i == 0 {
            break;
        }

        i -= 1;
        if next_pos == Some(Some(i)) {
            curr_link = next_link;
            next_pos = None;
        } else {
            curr_link = link(buf[i]);
        }
    }
}

/// Replaces presentation forms with the letters they stand for.
///
/// With the resize policy a Lam-Alef ligature expands back into Lam and Alef,
/// otherwise it is kept.
fn unshape(source: &[u16], options: ShapeOptions, capacity: usize) -> CodePointBuffer {
    let expand = options.length() == LengthPolicy::Resize;
    let visual = options.text_direction() == TextDirection::VisualLtr;

    let mut out = CodePointBuffer::with_capacity(capacity);
    for &c in source {
        if is_lam_alef(c) {
            if expand {
                let alef = LAM_ALEF_TO_ALEF[usize::from(c - 0xFEF5)];
                if visual {
                    out.extend_from_slice(&[alef, LAM_CHAR]);
                } else {
                    out.extend_from_slice(&[LAM_CHAR, alef]);
                }
            } else {
                out.extend_from_slice(&[c]);
            }
            continue;
        }

        let plain = match c {
            0xFB50..=0xFBFF => match FB_TO_06[usize::from(c - 0xFB50)] {
                0 => c,
                mapped => mapped,
            },
            0xFE70..=0xFEFC => FE_TO_06[usize::from(c - 0xFE70)],
            _ => c,
        };
        out.extend_from_slice(&[plain]);
    }

    out
}

/// Shapes or unshapes Arabic letters.
///
/// Text outside the Arabic blocks is returned unchanged. The result can be
/// shorter than the input: the cells freed by Lam-Alef ligatures and by
/// dropped Tashkeel are removed.
pub fn shape_arabic(input: &[u16], options: ShapeOptions) -> Vec<u16> {
    if input.is_empty() {
        return Vec::new();
    }

    let source = if options.aggregate_tashkeel()
        && options.letters() == Letters::ShapeTashkeelIsolated
    {
        aggregate_tashkeel(input, options.text_direction())
    } else {
        CodePointBuffer::from(input)
    };

    let size = predict_size(source.as_slice(), options);
    log::debug!("arabic shaping of {} units, predicted {}", source.len(), size);

    let letters = options.letters();
    if letters == Letters::Unshape {
        return unshape(source.as_slice(), options, size).into_vec();
    }

    let mut buf = source;
    let logical = options.text_direction() == TextDirection::Logical;
    if logical {
        buf.reverse_between_spaces();
    }

    match letters {
        Letters::Shape => {
            let tashkeel = options.tashkeel();
            if tashkeel != TashkeelPolicy::Keep && tashkeel != TashkeelPolicy::ReplaceByTatweel {
                shape_visual(buf.as_mut_slice(), TashkeelMode::Drop);
            } else {
                shape_visual(buf.as_mut_slice(), TashkeelMode::Contextual);
                if tashkeel == TashkeelPolicy::ReplaceByTatweel {
                    replace_tashkeel_with_tatweel(buf.as_mut_slice());
                }
            }
        }
        Letters::ShapeTashkeelIsolated => {
            shape_visual(buf.as_mut_slice(), TashkeelMode::Isolated);
        }
        Letters::Noop | Letters::Unshape => {}
    }

    if logical {
        buf.reverse_between_spaces();
    }

    buf.remove_all(&[LAMALEF_SPACE_SUB, TASHKEEL_SPACE_SUB]);
    buf.into_vec()
}
