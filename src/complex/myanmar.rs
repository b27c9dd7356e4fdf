use super::{ComplexShaper, Definition};
use crate::buffer::move_item;

const ASAT: u16 = 0x103A;
const VIRAMA: u16 = 0x1039;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Category {
    /// Consonant.
    C,
    /// Anusvara and the ai vowel sign, U+1032 and U+1036.
    A,
    /// Medial Ra.
    MR,
    VBlw,
    VPre,
    /// Nga, Ra or Mon Nga followed by asat and virama.
    Kinzi,
    Other,
}

impl Category {
    fn of(c: u16) -> Self {
        match c {
            0x1000..=0x1020
            | 0x103F
            | 0x104E
            | 0x1050
            | 0x1051
            | 0x105A..=0x105D
            | 0x1061
            | 0x1065
            | 0x1066
            | 0x106E..=0x1070
            | 0x1075..=0x1081
            | 0x108E
            | 0xAA60..=0xAA6F
            | 0xAA71..=0xAA76
            | 0xAA7A => Category::C,
            0x1032 | 0x1036 => Category::A,
            0x103C => Category::MR,
            0x102F | 0x1030 | 0x1058 | 0x1059 => Category::VBlw,
            0x1031 | 0x1084 => Category::VPre,
            _ => Category::Other,
        }
    }
}

pub(crate) struct Myanmar;

impl ComplexShaper for Myanmar {
    type MarkType = Category;
    const SPLITS_ON_NON_JOINER: bool = false;

    fn mark_type(c: u16) -> Category {
        Category::of(c)
    }

    fn is_pre_base(mark: Category) -> bool {
        mark == Category::VPre
    }

    fn fused_definition(text: &[u16]) -> Option<(Category, usize)> {
        match text {
            [0x1004 | 0x101B | 0x105A, ASAT, VIRAMA, ..] => Some((Category::Kinzi, 3)),
            _ => None,
        }
    }

    fn apply_rules(definitions: &mut [Definition<Category>], idx: usize) -> usize {
        match definitions[idx].kind {
            // Kinzi goes after the base that follows it.
            Category::Kinzi => {
                if idx + 1 < definitions.len() {
                    definitions.swap(idx, idx + 1);
                    return idx + 1;
                }
            }
            Category::MR => {
                let mut base = 0;
                while base + 1 < definitions.len() && definitions[base].kind != Category::C {
                    base += 1;
                }

                if base != idx {
                    move_item(definitions, idx, base);
                }
            }
            Category::A => {
                let mut pos = idx;
                while pos > 1 && definitions[pos - 1].kind == Category::VBlw {
                    pos -= 1;
                }

                if pos != idx {
                    definitions.swap(pos, idx);
                }
            }
            _ => {}
        }

        idx
    }
}
