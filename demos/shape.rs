use unicode_shaper::ShapeOptions;

const HELP: &str = "\
USAGE:
    shape [OPTIONS] [TEXT]

OPTIONS:
    -h, --help                          Show help options
        --version                       Show version number
        --text TEXT                     Set input text
        --text-file PATH                Set input text file
    -u, --unicodes LIST                 Set comma-separated list of input UTF-16 code units
                                        Examples: 'U+0633,U+0644'
        --options LIST                  Set comma-separated list of shaping options
                                        [default: shape,bidi]
                                        Examples: 'shape,visual-ltr', 'unshape,resize',
                                        'shape-tashkeel-isolated,aggregate,bidi'
        --bits NUMBER                   Set the raw option word, overrides --options
        --output-unicodes               Output code units instead of text

ARGS:
    [TEXT]                              An optional text
";

struct Args {
    help: bool,
    version: bool,
    text: Option<String>,
    text_file: Option<std::path::PathBuf>,
    unicodes: Option<Vec<u16>>,
    options: ShapeOptions,
    bits: Option<u32>,
    output_unicodes: bool,
    free: Option<String>,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    let args = Args {
        help: args.contains(["-h", "--help"]),
        version: args.contains("--version"),
        text: args.opt_value_from_str("--text")?,
        text_file: args.opt_value_from_str("--text-file")?,
        unicodes: args.opt_value_from_fn(["-u", "--unicodes"], parse_unicodes)?,
        options: args.opt_value_from_str("--options")?.unwrap_or_default(),
        bits: args.opt_value_from_fn("--bits", parse_bits)?,
        output_unicodes: args.contains("--output-unicodes"),
        free: args.opt_free_from_str()?,
    };

    Ok(args)
}

fn parse_unicodes(s: &str) -> Result<Vec<u16>, String> {
    s.split(',')
        .map(|s| {
            let s = s.trim();
            let s = s.strip_prefix("U+").unwrap_or(s);
            u16::from_str_radix(s, 16).map_err(|e| format!("'{}': {}", s, e))
        })
        .collect()
}

fn parse_bits(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x") {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };

    parsed.map_err(|e| format!("'{}': {}", s, e))
}

fn main() {
    let args = match parse_args() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}.", e);
            std::process::exit(1);
        }
    };

    if args.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if args.help {
        print!("{}", HELP);
        return;
    }

    let input: Vec<u16> = if let Some(units) = args.unicodes {
        units
    } else if let Some(path) = args.text_file {
        match std::fs::read_to_string(&path) {
            Ok(text) => text.encode_utf16().collect(),
            Err(e) => {
                eprintln!("Error: failed to read '{}': {}.", path.display(), e);
                std::process::exit(1);
            }
        }
    } else if let Some(text) = args.text.or(args.free) {
        text.encode_utf16().collect()
    } else {
        eprintln!("Error: text is not set.");
        std::process::exit(1);
    };

    let options = match args.bits {
        Some(bits) => ShapeOptions::from_bits_retain(bits),
        None => args.options,
    };

    let output = unicode_shaper::shape_unicode(&input, options);
    if args.output_unicodes {
        let list: Vec<String> = output.iter().map(|c| format!("U+{:04X}", c)).collect();
        println!("{}", list.join(","));
    } else {
        println!("{}", String::from_utf16_lossy(&output));
    }
}
