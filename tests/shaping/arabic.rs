use crate::{shape, shape_unicodes};

#[test]
fn word_with_digits() {
    assert_eq!(shape("سلام۳۹", ""), "۳۹ﻡﻼﺳ");
}

#[test]
fn shaped_text_is_a_fixed_point() {
    assert_eq!(shape("۳۹ﻡﻼﺳ", "--no-bidi"), "۳۹ﻡﻼﺳ");
}

#[test]
fn logical_order_without_bidi() {
    assert_eq!(
        shape_unicodes("U+0633,U+0644,U+0627,U+0645", "--no-bidi"),
        "U+FEB3,U+FEFC,U+FEE1"
    );
}

#[test]
fn visual_ltr_input() {
    assert_eq!(
        shape_unicodes("U+0645,U+0627,U+0644,U+0633", "--direction=visual-ltr --no-bidi"),
        "U+FEE1,U+FEFC,U+FEB3"
    );
}

#[test]
fn lam_alef_variants() {
    // Lam + Alef with hamza above, isolated.
    assert_eq!(shape_unicodes("U+0644,U+0623", "--no-bidi"), "U+FEF7");
    // Lam + Alef with madda, joined to a preceding Beh.
    assert_eq!(shape_unicodes("U+0628,U+0644,U+0622", "--no-bidi"), "U+FE91,U+FEF6");
}

#[test]
fn unshape_restores_letters() {
    assert_eq!(
        shape_unicodes("U+FEB3,U+FEFC,U+FEE1", "--letters=unshape --no-bidi"),
        "U+0633,U+0644,U+0627,U+0645"
    );
    // Without resizing the ligature is kept.
    assert_eq!(
        shape_unicodes("U+FEB3,U+FEFC,U+FEE1", "--letters=unshape --length=near --no-bidi"),
        "U+0633,U+FEFC,U+0645"
    );
}

#[test]
fn tashkeel_policies() {
    assert_eq!(shape_unicodes("U+0628,U+064E,U+0628", "--no-bidi"), "U+FE91,U+FE77,U+FE90");
    assert_eq!(
        shape_unicodes("U+0628,U+064E,U+0628", "--tashkeel=resize --no-bidi"),
        "U+FE91,U+FE90"
    );
    assert_eq!(
        shape_unicodes("U+0628,U+064E,U+0628", "--tashkeel=tatweel --no-bidi"),
        "U+FE91,U+0640,U+FE90"
    );
    assert_eq!(
        shape_unicodes("U+0628,U+064E,U+0628", "--letters=shape-tashkeel-isolated --no-bidi"),
        "U+FE91,U+FE76,U+FE90"
    );
}

#[test]
fn aggregated_shadda() {
    assert_eq!(
        shape_unicodes(
            "U+0628,U+0651,U+064E",
            "--letters=shape-tashkeel-isolated --aggregate --no-bidi"
        ),
        "U+FE8F,U+FC60"
    );
}

#[test]
fn aggregated_shadda_visual() {
    // The Shadda pairs with the mark after it in reading order.
    assert_eq!(
        shape_unicodes(
            "U+0628,U+064E,U+0651,U+064F",
            "--letters=shape-tashkeel-isolated --direction=visual-ltr --aggregate --no-bidi"
        ),
        "U+FE8F,U+FE76,U+FC61"
    );
}

#[test]
fn other_scripts_untouched() {
    assert_eq!(shape("Hello World", ""), "Hello World");
    assert_eq!(shape("辽宁省", ""), "辽宁省");
    assert_eq!(shape("ไทย", ""), "ไทย");
}
