use super::{ComplexShaper, Definition};
use crate::buffer::move_item;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Category {
    /// Head letter.
    Lh,
    /// Above-base vowel sign.
    Va,
    /// Below-base vowel sign.
    Vb,
    /// Compound vowel sign.
    Vc,
    Other,
}

pub(crate) struct Tibetan;

impl ComplexShaper for Tibetan {
    type MarkType = Category;
    const SPLITS_ON_NON_JOINER: bool = false;
    // Every unit is its own definition, so a vowel can land between head letters.
    const GROUPS_RUNS: bool = false;

    fn mark_type(c: u16) -> Category {
        match c {
            0x0F40..=0x0F6C | 0x0F88..=0x0F8C => Category::Lh,
            0x0F72 | 0x0F7A..=0x0F7D | 0x0F80 => Category::Va,
            0x0F71 | 0x0F74 => Category::Vb,
            0x0F73 | 0x0F75..=0x0F79 | 0x0F81 => Category::Vc,
            _ => Category::Other,
        }
    }

    fn is_pre_base(_: Category) -> bool {
        false
    }

    // A vowel sign lands right before the closest head letter on its left,
    // or at the cluster start when there is none.
    fn apply_rules(definitions: &mut [Definition<Category>], idx: usize) -> usize {
        if matches!(definitions[idx].kind, Category::Va | Category::Vb | Category::Vc) {
            let mut head = idx;
            while head > 0 && definitions[head].kind != Category::Lh {
                head -= 1;
            }

            move_item(definitions, idx, head);
        }

        idx
    }
}

#[cfg(test)]
mod tests {
    use crate::complex::shape_tibetan;

    fn shape(s: &str) -> Vec<u16> {
        let mut result: Vec<u16> = s.encode_utf16().collect();
        shape_tibetan(&mut result);
        result
    }

    #[test]
    fn above_base() {
        let expected: [u16; 19] = [
            3964, 3926, 3921, 3851, 3938, 3908, 3851, 3964, 3942, 3984, 4017, 3908, 3851, 3964,
            3939, 3991, 3908, 3942, 3853,
        ];
        assert_eq!(shape("བོད་རང་སྐྱོང་ལྗོངས།"), expected);
    }

    #[test]
    fn below_base() {
        assert_eq!(shape("གུསར"), [3956, 3906, 3942, 3938]);
    }

    #[test]
    fn separate_vowel_signs() {
        // ga + aa + i: both signs move, each in front of the head letter.
        assert_eq!(shape("\u{F42}\u{F71}\u{F72}\u{F66}"), [0x0F71, 0x0F72, 0x0F42, 0x0F66]);
    }

    #[test]
    fn nearest_head_letter() {
        assert_eq!(shape("\u{F40}\u{F51}\u{F72}"), [0x0F40, 0x0F72, 0x0F51]);
        assert_eq!(shape("\u{F51}\u{F42}\u{F7A}"), [0x0F51, 0x0F7A, 0x0F42]);
    }

    #[test]
    fn joiner_does_not_glue_head_letters() {
        assert_eq!(shape("\u{F40}\u{200D}\u{F51}\u{F72}"), [0x0F40, 0x200D, 0x0F72, 0x0F51]);
    }

    #[test]
    fn no_head_letter() {
        assert_eq!(shape("\u{F0B}\u{F72}"), [0x0F72, 0x0F0B]);
    }
}
