use super::ComplexShaper;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Category {
    /// Consonant taking a type 1 subscript.
    Cs1,
    /// Consonant taking a type 2 subscript.
    Cs2,
    /// Independent vowel.
    V,
    /// Independent vowel taking a type 1 subscript.
    Vs1,
    VAbv,
    VBlw,
    VPre,
    VPst,
    Coeng,
    /// Register shifter.
    RS,
    Robat,
    SAbv,
    SPst,
    /// Above-base sign for numbers.
    SAbvN,
    /// Punctuation.
    P,
    /// Currency.
    C,
    /// Number.
    N,
    /// Reserved.
    R,
    /// Variation selector.
    VS,
    /// Word joiner.
    WJ,
    Other,
}

pub(crate) struct Khmer;

impl ComplexShaper for Khmer {
    type MarkType = Category;
    const SPLITS_ON_NON_JOINER: bool = true;

    fn mark_type(c: u16) -> Category {
        match c {
            0x1780..=0x1782
            | 0x1784..=0x1787
            | 0x1789..=0x178C
            | 0x178E..=0x1793
            | 0x1795..=0x1798
            | 0x179B..=0x179D
            | 0x17A0
            | 0x17A2 => Category::Cs1,
            0x1783 | 0x1788 | 0x178D | 0x1794 | 0x1799 | 0x179A | 0x179E | 0x179F | 0x17A1 => {
                Category::Cs2
            }
            0x17B4 | 0x17B5 => Category::V,
            0x17A3..=0x17B3 => Category::Vs1,
            0x17B7..=0x17BA | 0x17BE => Category::VAbv,
            0x17BB..=0x17BD => Category::VBlw,
            0x17C1..=0x17C3 => Category::VPre,
            0x17B6 | 0x17BF | 0x17C0 | 0x17C4 | 0x17C5 => Category::VPst,
            0x17D2 => Category::Coeng,
            0x17C9 | 0x17CA => Category::RS,
            0x17CC => Category::Robat,
            0x17C6 | 0x17CB | 0x17CD..=0x17D1 | 0x17DD => Category::SAbv,
            0x17C7 | 0x17C8 => Category::SPst,
            0x17D3 => Category::SAbvN,
            0x17D4..=0x17DA | 0x17DC | 0x19E0..=0x19FF => Category::P,
            0x17DB => Category::C,
            0x17E0..=0x17E9 | 0x17F0..=0x17F9 => Category::N,
            0x17DE | 0x17DF | 0x17EA..=0x17EF | 0x17FA..=0x17FF => Category::R,
            0xFE00..=0xFE0F => Category::VS,
            0x2060 => Category::WJ,
            _ => Category::Other,
        }
    }

    fn is_pre_base(mark: Category) -> bool {
        mark == Category::VPre
    }
}
