use unicode_script::{Script, UnicodeScript};
use unicode_shaper::*;

// Deterministic xorshift, so failures are reproducible.
struct Rng(u32);

impl Rng {
    fn next(&mut self) -> u32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        self.0
    }

    fn pick(&mut self, pool: &[u16]) -> u16 {
        pool[self.next() as usize % pool.len()]
    }
}

fn pool(ranges: &[(u16, u16)]) -> Vec<u16> {
    let mut pool: Vec<u16> = ranges.iter().flat_map(|&(a, b)| a..=b).collect();
    // Boundaries and joiners.
    pool.extend_from_slice(&[0x0020, 0x00A0, 0x200C, 0x200D, 0x034F, 0x0F0C, 0x0041]);
    pool
}

fn check_permutation(name: &str, pass: fn(&mut [u16]), pool: &[u16]) {
    let mut rng = Rng(0x9E37_79B9);
    for len in 0..40 {
        let input: Vec<u16> = (0..len).map(|_| rng.pick(pool)).collect();
        let mut output = input.clone();
        pass(&mut output);

        let mut a = input.clone();
        let mut b = output.clone();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b, "{}: {:04X?} -> {:04X?}", name, input, output);
    }
}

#[test]
fn reordering_is_a_permutation() {
    check_permutation("buginese", shape_buginese, &pool(&[(0x1A00, 0x1A1F)]));
    check_permutation("javanese", shape_javanese, &pool(&[(0xA980, 0xA9DF)]));
    check_permutation("khmer", shape_khmer, &pool(&[(0x1780, 0x17FF)]));
    check_permutation("myanmar", shape_myanmar, &pool(&[(0x1000, 0x109F), (0xAA60, 0xAA7F)]));
    check_permutation("tamil", shape_tamil, &pool(&[(0x0B80, 0x0BFF)]));
    check_permutation("tibetan", shape_tibetan, &pool(&[(0x0F00, 0x0FFF)]));
}

#[test]
fn myanmar_kinzi_is_a_permutation() {
    let mut rng = Rng(7);
    let pool: Vec<u16> = vec![0x1004, 0x103A, 0x1039, 0x1000, 0x103C, 0x1031, 0x102F, 0x1036, 0x20];
    for _ in 0..200 {
        let input: Vec<u16> = (0..12).map(|_| rng.pick(&pool)).collect();
        let mut output = input.clone();
        shape_myanmar(&mut output);
        assert_eq!(output.len(), input.len());

        let mut a = input.clone();
        a.sort_unstable();
        output.sort_unstable();
        assert_eq!(a, output);
    }
}

#[test]
fn uninvolved_scripts_are_unchanged() {
    for text in ["Hello, World!", "Привет мир", "Γειά σου", "辽宁省沈阳市", "สวัสดี", "12:30 (ok)"] {
        assert_eq!(shape_string(text, DEFAULT_OPTIONS), text);
        assert_eq!(shape_string(text, DEFAULT_OPTIONS_WITHOUT_BIDI_SHAPING), text);
    }
}

#[test]
fn classification_literals() {
    assert!(is_rtl(0x05C3));
    assert!(!is_rtl(0x01));
    assert!(is_cjk(0x4E00));
    assert!(!is_cjk(0x01));
}

#[test]
fn script_predicates_agree_with_ucd() {
    let predicates: [(Script, fn(u16) -> bool); 8] = [
        (Script::Arabic, is_arabic),
        (Script::Buginese, is_buginese),
        (Script::Javanese, is_javanese),
        (Script::Khmer, is_khmer),
        (Script::Myanmar, is_myanmar),
        (Script::Tamil, is_tamil),
        (Script::Thai, is_thai),
        (Script::Tibetan, is_tibetan),
    ];

    for c in 0..=u16::MAX {
        let ch = match char::from_u32(u32::from(c)) {
            Some(ch) => ch,
            None => continue,
        };

        for (script, predicate) in &predicates {
            if ch.script() == *script {
                assert!(predicate(c), "U+{:04X} is {:?}", c, script);
            }
        }
    }
}
