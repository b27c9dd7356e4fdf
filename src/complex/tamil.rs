//! Tamil needs no cluster analysis: each pre-base vowel sign simply trades
//! places with the unit before it.

#[inline]
fn is_pre_base_vowel(c: u16) -> bool {
    // e, ee, ai
    (0x0BC6..=0x0BC8).contains(&c)
}

/// Moves Tamil pre-base vowel signs in front of their consonant.
pub fn shape_tamil(text: &mut [u16]) {
    for i in 1..text.len() {
        if is_pre_base_vowel(text[i]) {
            text.swap(i - 1, i);
        }
    }
}
