use unicode_shaper::{mirror, process_bidi_text, shape_unicode, ShapeOptions};

use crate::{shape, shape_unicodes};

#[test]
fn hebrew_word_is_reversed() {
    assert_eq!(shape("ישראל", ""), "לארשי");
}

#[test]
fn mark_after_letter() {
    // Dagesh followed by Bet.
    assert_eq!(shape_unicodes("U+05BC,U+05D1", ""), "U+05D1,U+05BC");
}

#[test]
fn digits_after_shaped_arabic() {
    assert_eq!(
        shape_unicodes("U+FEB3,U+FEFC,U+FEE1,U+06F3,U+06F9", ""),
        "U+06F3,U+06F9,U+FEE1,U+FEFC,U+FEB3"
    );
}

#[test]
fn lines_are_reordered_separately() {
    let mut input = vec![0xFEA1, 0xFEED, 0xFEAE, 0xFEC4, 0xFEE3, 0x000A];
    input.extend("Matrouh Governorate".encode_utf16());
    let output = shape_unicode(&input, ShapeOptions::DEFAULT);
    assert_eq!(String::from_utf16(&output).unwrap(), "ﻣﻄﺮﻭﺡ\nMatrouh Governorate");
}

#[test]
fn empty_lines_are_dropped() {
    let input: Vec<u16> = "ab\r\n\ncd".encode_utf16().collect();
    assert_eq!(process_bidi_text(&input), "ab\ncd".encode_utf16().collect::<Vec<_>>());
}

#[test]
fn carriage_return_ends_a_line() {
    let input: Vec<u16> = "אב\rcd".encode_utf16().collect();
    assert_eq!(process_bidi_text(&input), "בא\ncd".encode_utf16().collect::<Vec<_>>());
}

#[test]
fn empty() {
    assert_eq!(shape("", ""), "");
    assert!(process_bidi_text(&[]).is_empty());
}

#[test]
fn mirror_table_agrees_with_ucd() {
    for c in 0..=u16::MAX {
        let mirrored = mirror(c);
        if mirrored == c {
            continue;
        }

        let ch = char::from_u32(u32::from(c)).unwrap();
        let expected = unicode_bidi_mirroring::get_mirrored(ch);
        assert_eq!(expected, char::from_u32(u32::from(mirrored)), "U+{:04X}", c);
    }
}
