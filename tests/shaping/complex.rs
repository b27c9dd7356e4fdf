use crate::{shape, shape_unicodes};

#[test]
fn myanmar_medial_ra() {
    assert_eq!(shape("မြန်မာ", ""), "\u{103C}\u{1019}\u{1014}\u{103A}\u{1019}\u{102C}");
}

#[test]
fn myanmar_kinzi_and_pre_base_vowels() {
    assert_eq!(
        shape_unicodes(
            "U+1004,U+103A,U+1039,U+1000,U+1039,U+1000,U+103B,U+103C,U+103D,U+1031,U+1031,\
             U+102D,U+102F,U+1036,U+102C,U+1036",
            "--no-bidi"
        ),
        "U+1031,U+1031,U+103C,U+1000,U+1004,U+103A,U+1039,U+1039,U+1000,U+103B,U+103D,\
         U+102D,U+1036,U+102F,U+102C,U+1036"
    );
}

#[test]
fn buginese_is_left_alone() {
    assert_eq!(shape("ᨑᨗ ᨍᨍᨗᨕᨂᨗ", ""), "ᨑᨗ ᨍᨍᨗᨕᨂᨗ");
}

#[test]
fn buginese_pre_base_vowel() {
    assert_eq!(
        shape_unicodes("U+1A00,U+1A19,U+1A17", "--no-bidi"),
        "U+1A19,U+1A00,U+1A17"
    );
}

#[test]
fn javanese_pre_base_vowel() {
    let expected: Vec<u16> =
        vec![43450, 43431, 43442, 43407, 43456, 43424, 43448, 43433, 43455, 43429, 43456, 43442];
    assert_eq!(shape("ꦧꦺꦲꦏ꧀ꦠꦸꦩꦿꦥ꧀ꦲ", ""), String::from_utf16(&expected).unwrap());
}

#[test]
fn tibetan_vowel_signs() {
    let expected: Vec<u16> = vec![
        3964, 3926, 3921, 3851, 3938, 3908, 3851, 3964, 3942, 3984, 4017, 3908, 3851, 3964, 3939,
        3991, 3908, 3942, 3853,
    ];
    assert_eq!(shape("བོད་རང་སྐྱོང་ལྗོངས།", ""), String::from_utf16(&expected).unwrap());
}

#[test]
fn tibetan_vowel_after_several_head_letters() {
    assert_eq!(
        shape_unicodes("U+0F51,U+0F42,U+0F7A", "--no-bidi"),
        "U+0F51,U+0F7A,U+0F42"
    );
}

#[test]
fn khmer_pre_base_vowel() {
    assert_eq!(
        shape_unicodes("U+1780,U+17D2,U+1781,U+17C1", "--no-bidi"),
        "U+17C1,U+1780,U+17D2,U+1781"
    );
}

#[test]
fn tamil_pre_base_vowel() {
    assert_eq!(shape_unicodes("U+0B95,U+0BC6", "--no-bidi"), "U+0BC6,U+0B95");
}

#[test]
fn reordering_needs_letters() {
    assert_eq!(
        shape_unicodes("U+0B95,U+0BC6", "--letters=noop --no-bidi"),
        "U+0B95,U+0BC6"
    );
}
