bitflags::bitflags! {
    /// Shaping options.
    ///
    /// The layout is bit-compatible with ICU's `U_SHAPE_*` option word.
    /// Several fields are multi-bit, so prefer the typed accessors
    /// (`letters`, `length`, `tashkeel`, ...) over testing single flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ShapeOptions: u32 {
        /// Lam-Alef: keep the freed cell next to the ligature.
        const LAMALEF_NEAR                      = 0x0000_0001;
        /// Lam-Alef: move the freed cells to the end of the text.
        const LAMALEF_END                       = 0x0000_0002;
        /// Lam-Alef: move the freed cells to the start of the text.
        const LAMALEF_BEGIN                     = 0x0000_0003;
        /// Lam-Alef: let the shaper choose.
        const LAMALEF_AUTO                      = 0x0001_0000;
        /// The input is in visual left-to-right order.
        const TEXT_DIRECTION_VISUAL_LTR         = 0x0000_0004;
        /// Replace letters with their contextual presentation forms.
        const LETTERS_SHAPE                     = 0x0000_0008;
        /// Replace presentation forms with abstract letters.
        const LETTERS_UNSHAPE                   = 0x0000_0010;
        /// Shape letters, keeping Tashkeel in its isolated form.
        const LETTERS_SHAPE_TASHKEEL_ISOLATED   = 0x0000_0018;
        /// Reserved.
        const DIGITS_EN2AN                      = 0x0000_0020;
        /// Reserved.
        const DIGITS_AN2EN                      = 0x0000_0040;
        /// Reserved.
        const DIGITS_ALEN2AN_INIT_LR            = 0x0000_0060;
        /// Reserved.
        const DIGITS_ALEN2AN_INIT_AL            = 0x0000_0080;
        /// Reserved.
        const DIGIT_TYPE_AN_EXTENDED            = 0x0000_0100;
        /// Merge Shadda and a following mark into one ligature.
        const AGGREGATE_TASHKEEL                = 0x0000_4000;
        /// Decoded, but has no effect.
        const PRESERVE_PRESENTATION             = 0x0000_8000;
        /// Drop Tashkeel.
        const TASHKEEL_BEGIN                    = 0x0004_0000;
        /// Drop Tashkeel.
        const TASHKEEL_END                      = 0x0006_0000;
        /// Drop Tashkeel and shrink the text.
        const TASHKEEL_RESIZE                   = 0x0008_0000;
        /// Replace Tashkeel with Tatweel or a space.
        const TASHKEEL_REPLACE_BY_TATWEEL       = 0x000C_0000;
        /// Reorder the result for display.
        const OUTPUT_BIDI                       = 0x0010_0000;
        /// Reserved.
        const SEEN_TWOCELL_NEAR                 = 0x0020_0000;
        /// Reserved.
        const YEHHAMZA_TWOCELL_NEAR             = 0x0100_0000;
        /// Reserved.
        const SPACES_RELATIVE_TO_TEXT_BEGIN_END = 0x0400_0000;
        /// Reserved.
        const TAIL_NEW_UNICODE                  = 0x0800_0000;
    }
}

impl ShapeOptions {
    pub(crate) const LENGTH_MASK: u32 = 0x0001_0003;
    pub(crate) const TEXT_DIRECTION_MASK: u32 = 0x0000_0004;
    pub(crate) const LETTERS_MASK: u32 = 0x0000_0018;
    pub(crate) const DIGITS_MASK: u32 = 0x0000_00E0;
    pub(crate) const DIGIT_TYPE_MASK: u32 = 0x0000_0300;
    pub(crate) const TASHKEEL_MASK: u32 = 0x000E_0000;

    /// Shape letters, logical input order, reorder for display.
    pub const DEFAULT: Self = Self::LETTERS_SHAPE.union(Self::OUTPUT_BIDI);

    /// Shape letters in logical input order and leave the result unordered.
    pub const DEFAULT_WITHOUT_BIDI: Self = Self::LETTERS_SHAPE;

    /// Returns the letters field.
    #[inline]
    pub fn letters(self) -> Letters {
        match self.bits() & Self::LETTERS_MASK {
            0x08 => Letters::Shape,
            0x10 => Letters::Unshape,
            0x18 => Letters::ShapeTashkeelIsolated,
            _ => Letters::Noop,
        }
    }

    /// Returns the text direction field.
    #[inline]
    pub fn text_direction(self) -> TextDirection {
        if self.bits() & Self::TEXT_DIRECTION_MASK == Self::TEXT_DIRECTION_VISUAL_LTR.bits() {
            TextDirection::VisualLtr
        } else {
            TextDirection::Logical
        }
    }

    /// Returns the Lam-Alef / length field.
    #[inline]
    pub fn length(self) -> LengthPolicy {
        match self.bits() & Self::LENGTH_MASK {
            0x0_0001 => LengthPolicy::Near,
            0x0_0002 => LengthPolicy::End,
            0x0_0003 => LengthPolicy::Begin,
            0x1_0000 => LengthPolicy::Auto,
            _ => LengthPolicy::Resize,
        }
    }

    /// Returns the Tashkeel field.
    #[inline]
    pub fn tashkeel(self) -> TashkeelPolicy {
        match self.bits() & Self::TASHKEEL_MASK {
            0x4_0000 => TashkeelPolicy::Begin,
            0x6_0000 => TashkeelPolicy::End,
            0x8_0000 => TashkeelPolicy::Resize,
            0xC_0000 => TashkeelPolicy::ReplaceByTatweel,
            _ => TashkeelPolicy::Keep,
        }
    }

    /// Returns the digits field.
    ///
    /// Digit shaping is reserved: the field is decoded but no pass acts on it.
    #[inline]
    pub fn digits(self) -> Digits {
        match self.bits() & Self::DIGITS_MASK {
            0x20 => Digits::En2An,
            0x40 => Digits::An2En,
            0x60 => Digits::AlEn2AnInitLr,
            0x80 => Digits::AlEn2AnInitAl,
            _ => Digits::Noop,
        }
    }

    /// Returns the digit type field.
    #[inline]
    pub fn digit_type(self) -> DigitType {
        if self.bits() & Self::DIGIT_TYPE_MASK == Self::DIGIT_TYPE_AN_EXTENDED.bits() {
            DigitType::AnExtended
        } else {
            DigitType::An
        }
    }

    /// Checks that Shadda + mark pairs should be merged into one ligature.
    #[inline]
    pub fn aggregate_tashkeel(self) -> bool {
        self.contains(Self::AGGREGATE_TASHKEEL)
    }

    /// Checks that the result should be reordered for display.
    #[inline]
    pub fn output_bidi(self) -> bool {
        self.contains(Self::OUTPUT_BIDI)
    }

    /// Returns a copy with the letters field replaced.
    pub fn with_letters(self, letters: Letters) -> Self {
        self.with_field(Self::LETTERS_MASK, letters.bits())
    }

    /// Returns a copy with the text direction field replaced.
    pub fn with_text_direction(self, dir: TextDirection) -> Self {
        self.with_field(Self::TEXT_DIRECTION_MASK, dir.bits())
    }

    /// Returns a copy with the Lam-Alef / length field replaced.
    pub fn with_length(self, length: LengthPolicy) -> Self {
        self.with_field(Self::LENGTH_MASK, length.bits())
    }

    /// Returns a copy with the Tashkeel field replaced.
    pub fn with_tashkeel(self, tashkeel: TashkeelPolicy) -> Self {
        self.with_field(Self::TASHKEEL_MASK, tashkeel.bits())
    }

    fn with_field(self, mask: u32, value: u32) -> Self {
        Self::from_bits_retain((self.bits() & !mask) | value)
    }
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::str::FromStr for ShapeOptions {
    type Err = &'static str;

    /// Parses a comma-separated list of option words.
    ///
    /// Starts from an empty option word, so `"shape,bidi"` is equal to `DEFAULT`.
    ///
    /// Words: `noop`, `shape`, `unshape`, `shape-tashkeel-isolated`, `logical`,
    /// `visual-ltr`, `resize`, `near`, `end`, `begin`, `auto`, `tashkeel-begin`,
    /// `tashkeel-end`, `tashkeel-resize`, `tashkeel-tatweel`, `aggregate`,
    /// `preserve-presentation` and `bidi`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut options = ShapeOptions::empty();
        for word in s.split(',').map(str::trim).filter(|w| !w.is_empty()) {
            options = match word {
                "aggregate" => options | ShapeOptions::AGGREGATE_TASHKEEL,
                "preserve-presentation" => options | ShapeOptions::PRESERVE_PRESENTATION,
                "bidi" => options | ShapeOptions::OUTPUT_BIDI,
                _ => {
                    if let Some(policy) = word.strip_prefix("tashkeel-") {
                        options.with_tashkeel(policy.parse()?)
                    } else if let Ok(letters) = word.parse() {
                        options.with_letters(letters)
                    } else if let Ok(dir) = word.parse() {
                        options.with_text_direction(dir)
                    } else {
                        options.with_length(word.parse()?)
                    }
                }
            };
        }

        Ok(options)
    }
}

/// What to do with Arabic letters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Letters {
    /// Leave letters alone. Complex-script reordering is skipped too.
    Noop,
    /// Replace abstract letters with their contextual presentation forms.
    Shape,
    /// Replace presentation forms with abstract letters.
    Unshape,
    /// Like `Shape`, but Tashkeel always takes its isolated form.
    ShapeTashkeelIsolated,
}

impl Letters {
    fn bits(self) -> u32 {
        match self {
            Letters::Noop => 0,
            Letters::Shape => ShapeOptions::LETTERS_SHAPE.bits(),
            Letters::Unshape => ShapeOptions::LETTERS_UNSHAPE.bits(),
            Letters::ShapeTashkeelIsolated => ShapeOptions::LETTERS_SHAPE_TASHKEEL_ISOLATED.bits(),
        }
    }
}

impl std::str::FromStr for Letters {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "noop" => Ok(Letters::Noop),
            "shape" => Ok(Letters::Shape),
            "unshape" => Ok(Letters::Unshape),
            "shape-tashkeel-isolated" => Ok(Letters::ShapeTashkeelIsolated),
            _ => Err("invalid letters mode"),
        }
    }
}

/// Order of the input text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Logical order. Shares its encoding with visual right-to-left.
    Logical,
    /// Visual left-to-right order.
    VisualLtr,
}

impl TextDirection {
    fn bits(self) -> u32 {
        match self {
            TextDirection::Logical => 0,
            TextDirection::VisualLtr => ShapeOptions::TEXT_DIRECTION_VISUAL_LTR.bits(),
        }
    }
}

impl std::str::FromStr for TextDirection {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "logical" | "visual-rtl" => Ok(TextDirection::Logical),
            "visual-ltr" => Ok(TextDirection::VisualLtr),
            _ => Err("invalid text direction"),
        }
    }
}

/// How the space freed by a Lam-Alef ligature is handled.
///
/// The shaper always compacts its output, so only `Resize` changes the
/// result: it lets unshaping expand a ligature back into two letters.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LengthPolicy {
    Resize,
    Near,
    End,
    Begin,
    Auto,
}

impl LengthPolicy {
    fn bits(self) -> u32 {
        match self {
            LengthPolicy::Resize => 0,
            LengthPolicy::Near => ShapeOptions::LAMALEF_NEAR.bits(),
            LengthPolicy::End => ShapeOptions::LAMALEF_END.bits(),
            LengthPolicy::Begin => ShapeOptions::LAMALEF_BEGIN.bits(),
            LengthPolicy::Auto => ShapeOptions::LAMALEF_AUTO.bits(),
        }
    }
}

impl std::str::FromStr for LengthPolicy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resize" => Ok(LengthPolicy::Resize),
            "near" => Ok(LengthPolicy::Near),
            "end" => Ok(LengthPolicy::End),
            "begin" => Ok(LengthPolicy::Begin),
            "auto" => Ok(LengthPolicy::Auto),
            _ => Err("invalid length policy"),
        }
    }
}

/// How Tashkeel marks are handled while shaping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TashkeelPolicy {
    /// Keep marks, shaping them in place.
    Keep,
    /// Drop marks. The freed cells are not re-emitted.
    Begin,
    /// Drop marks. The freed cells are not re-emitted.
    End,
    /// Drop marks and shrink the text.
    Resize,
    /// Replace marks sitting on a joined position by Tatweel, others by a space.
    ReplaceByTatweel,
}

impl TashkeelPolicy {
    fn bits(self) -> u32 {
        match self {
            TashkeelPolicy::Keep => 0,
            TashkeelPolicy::Begin => ShapeOptions::TASHKEEL_BEGIN.bits(),
            TashkeelPolicy::End => ShapeOptions::TASHKEEL_END.bits(),
            TashkeelPolicy::Resize => ShapeOptions::TASHKEEL_RESIZE.bits(),
            TashkeelPolicy::ReplaceByTatweel => ShapeOptions::TASHKEEL_REPLACE_BY_TATWEEL.bits(),
        }
    }
}

impl std::str::FromStr for TashkeelPolicy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keep" => Ok(TashkeelPolicy::Keep),
            "begin" => Ok(TashkeelPolicy::Begin),
            "end" => Ok(TashkeelPolicy::End),
            "resize" => Ok(TashkeelPolicy::Resize),
            "tatweel" => Ok(TashkeelPolicy::ReplaceByTatweel),
            _ => Err("invalid tashkeel policy"),
        }
    }
}

/// Digit shaping mode. Reserved.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Digits {
    Noop,
    En2An,
    An2En,
    AlEn2AnInitLr,
    AlEn2AnInitAl,
}

/// Arabic-Indic digit set. Reserved.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DigitType {
    An,
    AnExtended,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bits() {
        assert_eq!(ShapeOptions::DEFAULT.bits(), 8 | 1 << 20);
        assert_eq!(ShapeOptions::DEFAULT_WITHOUT_BIDI.bits(), 8);
        assert_eq!(ShapeOptions::default(), ShapeOptions::DEFAULT);
    }

    #[test]
    fn decode_fields() {
        let opts = ShapeOptions::from_bits_retain(0x18 | 0x4 | 0x3 | 0xC_0000 | 0x4000 | 0x40);
        assert_eq!(opts.letters(), Letters::ShapeTashkeelIsolated);
        assert_eq!(opts.text_direction(), TextDirection::VisualLtr);
        assert_eq!(opts.length(), LengthPolicy::Begin);
        assert_eq!(opts.tashkeel(), TashkeelPolicy::ReplaceByTatweel);
        assert_eq!(opts.digits(), Digits::An2En);
        assert_eq!(opts.digit_type(), DigitType::An);
        assert!(opts.aggregate_tashkeel());
        assert!(!opts.output_bidi());
    }

    #[test]
    fn unknown_combinations_decode_to_noop() {
        // 0x10001 is neither a pure length value nor AUTO.
        let opts = ShapeOptions::from_bits_retain(0x1_0001 | 0xA_0000 | 0xA0);
        assert_eq!(opts.length(), LengthPolicy::Resize);
        assert_eq!(opts.tashkeel(), TashkeelPolicy::Keep);
        assert_eq!(opts.digits(), Digits::Noop);
    }

    #[test]
    fn with_field_replaces_only_its_bits() {
        let opts = ShapeOptions::DEFAULT
            .with_letters(Letters::Unshape)
            .with_length(LengthPolicy::Auto)
            .with_tashkeel(TashkeelPolicy::Resize);
        assert_eq!(opts.bits(), 0x10 | 1 << 20 | 0x1_0000 | 0x8_0000);
        assert_eq!(opts.with_letters(Letters::Noop).letters(), Letters::Noop);
        assert!(opts.with_letters(Letters::Noop).output_bidi());
    }

    #[test]
    fn parse_options() {
        assert_eq!("shape,bidi".parse::<ShapeOptions>(), Ok(ShapeOptions::DEFAULT));
        assert_eq!("shape".parse::<ShapeOptions>(), Ok(ShapeOptions::DEFAULT_WITHOUT_BIDI));

        let opts: ShapeOptions =
            "unshape, visual-ltr, near, tashkeel-tatweel, aggregate".parse().unwrap();
        assert_eq!(opts.letters(), Letters::Unshape);
        assert_eq!(opts.text_direction(), TextDirection::VisualLtr);
        assert_eq!(opts.length(), LengthPolicy::Near);
        assert_eq!(opts.tashkeel(), TashkeelPolicy::ReplaceByTatweel);
        assert!(opts.aggregate_tashkeel());

        assert_eq!("".parse::<ShapeOptions>(), Ok(ShapeOptions::empty()));
        assert_eq!("shape,sideways".parse::<ShapeOptions>(), Err("invalid length policy"));
        assert_eq!("tashkeel-none".parse::<ShapeOptions>(), Err("invalid tashkeel policy"));
    }
}
