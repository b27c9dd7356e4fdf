/*!
`unicode-shaper` prepares UTF-16 text for renderers that draw code points one
by one, without OpenType glyph substitution.

It replaces Arabic letters with their contextual presentation forms, moves
the dependent vowels of Buginese, Javanese, Khmer, Myanmar, Tamil and Tibetan
into display order and, optionally, reorders mixed-direction text for display.

```
use unicode_shaper::{shape_string, ShapeOptions};

assert_eq!(shape_string("سلام۳۹", ShapeOptions::DEFAULT), "۳۹ﻡﻼﺳ");
```
*/

#![warn(missing_docs)]

mod bidi;
mod bidi_table;
mod buffer;
mod common;
mod complex;
mod unicode;

pub use crate::bidi::{
    dominant_type, is_neutral, is_rtl, is_weak, mirror, process_bidi_text, BidiType,
};
pub use crate::buffer::CodePointBuffer;
pub use crate::common::{
    DigitType, Digits, LengthPolicy, Letters, ShapeOptions, TashkeelPolicy, TextDirection,
};
pub use crate::complex::arabic::shape_arabic;
pub use crate::complex::{
    shape_buginese, shape_javanese, shape_khmer, shape_myanmar, shape_tamil, shape_tibetan,
};
pub use crate::unicode::{
    is_arabic, is_buginese, is_cjk, is_javanese, is_khmer, is_myanmar, is_tamil, is_thai,
    is_tibetan, is_whitespace,
};

/// Shape letters and reorder the result for display.
pub const DEFAULT_OPTIONS: ShapeOptions = ShapeOptions::DEFAULT;

/// Shape letters, keeping the logical order.
pub const DEFAULT_OPTIONS_WITHOUT_BIDI_SHAPING: ShapeOptions = ShapeOptions::DEFAULT_WITHOUT_BIDI;

/// Shapes UTF-16 code units.
///
/// When the letters field is set, runs Arabic shaping followed by the
/// Buginese, Javanese, Myanmar, Tamil, Tibetan and Khmer reordering passes.
/// With `OUTPUT_BIDI` the result is then reordered for display.
///
/// Only Arabic shaping and bidi can change the length.
pub fn shape_unicode(input: &[u16], options: ShapeOptions) -> Vec<u16> {
    let mut output = input.to_vec();

    if options.letters() != Letters::Noop {
        output = shape_arabic(&output, options);
        log::trace!("arabic: {} -> {} units", input.len(), output.len());

        let passes: [(&str, fn(&mut [u16])); 6] = [
            ("buginese", shape_buginese),
            ("javanese", shape_javanese),
            ("myanmar", shape_myanmar),
            ("tamil", shape_tamil),
            ("tibetan", shape_tibetan),
            ("khmer", shape_khmer),
        ];

        for (name, pass) in passes {
            pass(&mut output);
            log::trace!("{}: {} units", name, output.len());
        }
    }

    if options.output_bidi() {
        output = process_bidi_text(&output);
        log::trace!("bidi: {} units", output.len());
    }

    output
}

/// Shapes a string.
///
/// Unpaired surrogates in the result are replaced with U+FFFD.
pub fn shape_string(text: &str, options: ShapeOptions) -> String {
    let units: Vec<u16> = text.encode_utf16().collect();
    String::from_utf16_lossy(&shape_unicode(&units, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ShapeOptions>();
        assert_send_sync::<CodePointBuffer>();
        assert_send_sync::<BidiType>();
    }

    #[test]
    fn default_options() {
        assert_eq!(DEFAULT_OPTIONS.bits(), 8 | 1 << 20);
        assert_eq!(DEFAULT_OPTIONS_WITHOUT_BIDI_SHAPING.bits(), 8);
    }

    #[test]
    fn arabic_with_digits() {
        assert_eq!(shape_string("سلام۳۹", DEFAULT_OPTIONS), "۳۹ﻡﻼﺳ");
        assert_eq!(
            shape_string("۳۹ﻡﻼﺳ", DEFAULT_OPTIONS_WITHOUT_BIDI_SHAPING),
            "۳۹ﻡﻼﺳ"
        );
    }

    #[test]
    fn noop_letters_skip_reordering() {
        let input = [0x1000, 0x103C];
        assert_eq!(shape_unicode(&input, ShapeOptions::empty()), input);
        assert_eq!(shape_unicode(&input, DEFAULT_OPTIONS), [0x103C, 0x1000]);
    }

    #[test]
    fn empty() {
        assert!(shape_unicode(&[], DEFAULT_OPTIONS).is_empty());
        assert_eq!(shape_string("", DEFAULT_OPTIONS), "");
    }
}
