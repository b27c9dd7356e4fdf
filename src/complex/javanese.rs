use super::ComplexShaper;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Category {
    /// Consonant.
    C,
    /// Generic base, like the dotted circle.
    GB,
    /// Pangkon, the virama.
    H,
    /// Independent vowel.
    IV,
    /// Modifier.
    M,
    /// Medial Ra.
    MR,
    /// Medial Ya.
    MY,
    /// Cecak telu, the nukta.
    N,
    /// Punctuation.
    P,
    /// Reserved.
    R,
    /// Symbol.
    S,
    VAbv,
    VBlw,
    VPre,
    VPst,
    /// Variation selector.
    VS,
    /// Word joiner.
    WJ,
    Other,
}

pub(crate) struct Javanese;

impl ComplexShaper for Javanese {
    type MarkType = Category;
    const SPLITS_ON_NON_JOINER: bool = true;

    fn mark_type(c: u16) -> Category {
        match c {
            0xA984 | 0xA989..=0xA98B | 0xA98F..=0xA9B2 => Category::C,
            0x00A0 | 0x00D7 | 0x2012..=0x2015 | 0x2022 | 0x25CC | 0x25FB..=0x25FE => Category::GB,
            0xA9C0 => Category::H,
            0xA985..=0xA988 | 0xA98C..=0xA98E => Category::IV,
            0xA980..=0xA983 => Category::M,
            0xA9BF => Category::MR,
            0xA9BE => Category::MY,
            0xA9B3 => Category::N,
            0xA9C1..=0xA9CD => Category::P,
            0xA9CE | 0xA9DA..=0xA9DD => Category::R,
            0xA9CF | 0xA9DE | 0xA9DF => Category::S,
            0xA9B6 | 0xA9B7 | 0xA9BC => Category::VAbv,
            0xA9B8 | 0xA9B9 => Category::VBlw,
            0xA9BA | 0xA9BB => Category::VPre,
            0xA9B4 | 0xA9B5 | 0xA9BD => Category::VPst,
            0xFE00..=0xFE0F => Category::VS,
            0x2060 => Category::WJ,
            _ => Category::Other,
        }
    }

    fn is_pre_base(mark: Category) -> bool {
        mark == Category::VPre
    }
}

#[cfg(test)]
mod tests {
    use crate::complex::shape_javanese;

    fn shape(input: &[u16]) -> Vec<u16> {
        let mut result = input.to_vec();
        shape_javanese(&mut result);
        result
    }

    #[test]
    fn pre_base_run_moves_as_block() {
        assert_eq!(
            shape(&[0xA98F, 0xA9C0, 0xA98F, 0xA9BF, 0xA9BE, 0xA9BA, 0xA9BA, 0xA9B7]),
            [0xA9BA, 0xA9BA, 0xA98F, 0xA9C0, 0xA98F, 0xA9BF, 0xA9BE, 0xA9B7]
        );
    }

    #[test]
    fn word() {
        let input: Vec<u16> = "ꦧꦺꦲꦏ꧀ꦠꦸꦩꦿꦥ꧀ꦲ".encode_utf16().collect();
        let expected: [u16; 12] =
            [43450, 43431, 43442, 43407, 43456, 43424, 43448, 43433, 43455, 43429, 43456, 43442];
        assert_eq!(shape(&input), expected);
    }
}
