mod arabic;
mod bidi;
mod complex;
mod properties;

use unicode_shaper::{LengthPolicy, Letters, ShapeOptions, TashkeelPolicy, TextDirection};

struct Args {
    letters: Option<Letters>,
    direction: Option<TextDirection>,
    length: Option<LengthPolicy>,
    tashkeel: Option<TashkeelPolicy>,
    aggregate: bool,
    no_bidi: bool,
}

fn parse_args(args: Vec<std::ffi::OsString>) -> Result<Args, pico_args::Error> {
    let mut parser = pico_args::Arguments::from_vec(args);
    let args = Args {
        letters: parser.opt_value_from_str("--letters")?,
        direction: parser.opt_value_from_str("--direction")?,
        length: parser.opt_value_from_str("--length")?,
        tashkeel: parser.opt_value_from_str("--tashkeel")?,
        aggregate: parser.contains("--aggregate"),
        no_bidi: parser.contains("--no-bidi"),
    };

    Ok(args)
}

fn parse_unicodes(s: &str) -> Result<Vec<u16>, String> {
    s.split(',')
        .map(|s| {
            let s = s.strip_prefix("U+").unwrap_or(s);
            u16::from_str_radix(s, 16).map_err(|e| format!("{e}"))
        })
        .collect()
}

fn format_unicodes(units: &[u16]) -> String {
    units
        .iter()
        .map(|c| format!("U+{:04X}", c))
        .collect::<Vec<_>>()
        .join(",")
}

/// Builds the option word from command-line style flags, starting at the default.
pub fn options(flags: &str) -> ShapeOptions {
    let args = flags
        .split(' ')
        .filter(|s| !s.is_empty())
        .map(std::ffi::OsString::from)
        .collect();
    let args = parse_args(args).unwrap();

    let mut options = unicode_shaper::DEFAULT_OPTIONS;
    if let Some(letters) = args.letters {
        options = options.with_letters(letters);
    }

    if let Some(direction) = args.direction {
        options = options.with_text_direction(direction);
    }

    if let Some(length) = args.length {
        options = options.with_length(length);
    }

    if let Some(tashkeel) = args.tashkeel {
        options = options.with_tashkeel(tashkeel);
    }

    options.set(ShapeOptions::AGGREGATE_TASHKEEL, args.aggregate);
    options.set(ShapeOptions::OUTPUT_BIDI, !args.no_bidi);
    options
}

pub fn shape(text: &str, flags: &str) -> String {
    unicode_shaper::shape_string(text, options(flags))
}

/// Like `shape`, but takes and returns comma-separated `U+XXXX` code units.
pub fn shape_unicodes(unicodes: &str, flags: &str) -> String {
    let input = parse_unicodes(unicodes).unwrap();
    format_unicodes(&unicode_shaper::shape_unicode(&input, options(flags)))
}

#[test]
fn flags() {
    assert_eq!(options(""), ShapeOptions::DEFAULT);
    assert_eq!(options("--no-bidi"), ShapeOptions::DEFAULT_WITHOUT_BIDI);
    assert_eq!(
        options("--letters=unshape --length=near --no-bidi"),
        ShapeOptions::LETTERS_UNSHAPE | ShapeOptions::LAMALEF_NEAR
    );
    assert!(parse_args(vec!["--letters=bogus".into()]).is_err());
}
