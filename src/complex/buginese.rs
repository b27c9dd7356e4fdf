use super::ComplexShaper;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Category {
    /// Consonant.
    C,
    /// Generic base, like the dotted circle.
    GB,
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

pub(crate) struct Buginese;

impl ComplexShaper for Buginese {
    type MarkType = Category;
    const SPLITS_ON_NON_JOINER: bool = true;

    fn mark_type(c: u16) -> Category {
        match c {
            0x1A00..=0x1A16 => Category::C,
            0x00A0 | 0x00D7 | 0x2012..=0x2015 | 0x2022 | 0x25CC | 0x25FB..=0x25FE => Category::GB,
            0x1A1C | 0x1A1D => Category::R,
            0x1A1E | 0x1A1F | 0xA9CF => Category::S,
            0x1A17 | 0x1A1B => Category::VAbv,
            0x1A18 => Category::VBlw,
            0x1A19 => Category::VPre,
            0x1A1A => Category::VPst,
            0xFE00..=0xFE0F => Category::VS,
            0x2060 => Category::WJ,
            _ => Category::Other,
        }
    }

    fn is_pre_base(mark: Category) -> bool {
        mark == Category::VPre
    }
}
