//! Script-specific shaping passes.
//!
//! Arabic has its own joining engine. The Indic-style scripts share one
//! cluster reordering engine and only provide a classification and a few
//! movement rules.

pub mod arabic;
mod arabic_table;
mod buginese;
mod javanese;
mod khmer;
mod myanmar;
mod tamil;
mod tibetan;

use smallvec::SmallVec;

use crate::buffer::move_item;
use crate::unicode::{is_joiner, is_whitespace, ZERO_WIDTH_NON_JOINER};

pub use self::tamil::shape_tamil;

/// A script served by the cluster reordering engine.
pub(crate) trait ComplexShaper {
    /// The script's syllable category.
    type MarkType: Copy + PartialEq + core::fmt::Debug;

    /// Whether U+200C ZWNJ ends a cluster, like whitespace does.
    const SPLITS_ON_NON_JOINER: bool;

    /// Whether consecutive units of the same category form one definition.
    const GROUPS_RUNS: bool = true;

    fn mark_type(c: u16) -> Self::MarkType;

    /// Checks that the category is a pre-base dependent vowel.
    fn is_pre_base(mark: Self::MarkType) -> bool;

    /// Returns a multi-unit sequence starting at `text[0]` that has to be
    /// kept as one definition, with its category and length.
    fn fused_definition(_text: &[u16]) -> Option<(Self::MarkType, usize)> {
        None
    }

    /// Applies the script's own movement rules to the definition at `idx`.
    ///
    /// Returns the index the pass continues from. The engine steps past it.
    fn apply_rules(_definitions: &mut [Definition<Self::MarkType>], idx: usize) -> usize {
        idx
    }
}

/// A run of code units that move together.
///
/// Either units of the same category glued with joiners, or a fused sequence.
#[derive(Clone, Debug)]
pub(crate) struct Definition<T> {
    pub kind: T,
    pub units: SmallVec<[u16; 4]>,
}

/// Definitions up to a whitespace or non-joiner boundary.
#[derive(Debug)]
struct Cluster<T> {
    definitions: Vec<Definition<T>>,
    boundary: Option<u16>,
}

impl<T: Copy + PartialEq> Cluster<T> {
    fn parse<S: ComplexShaper<MarkType = T>>(text: &[u16]) -> Self {
        let mut definitions = Vec::new();
        let mut pos = 0;
        while pos < text.len() {
            let c = text[pos];
            if is_boundary::<S>(c) {
                return Cluster { definitions, boundary: Some(c) };
            }

            let (kind, end) = match S::fused_definition(&text[pos..]) {
                Some((kind, len)) => (kind, pos + len),
                None => {
                    let kind = S::mark_type(c);
                    let mut end = pos + 1;
                    while end < text.len() && continues_definition::<S>(kind, &text[end..]) {
                        end += 1;
                    }

                    (kind, end)
                }
            };

            definitions.push(Definition { kind, units: SmallVec::from_slice(&text[pos..end]) });
            pos = end;
        }

        Cluster { definitions, boundary: None }
    }

    fn len(&self) -> usize {
        let units: usize = self.definitions.iter().map(|d| d.units.len()).sum();
        units + usize::from(self.boundary.is_some())
    }

    // One left-to-right pass. Pre-base vowels go to the front, after the
    // ones already moved there.
    fn reorder<S: ComplexShaper<MarkType = T>>(&mut self) {
        let definitions = &mut self.definitions[..];
        let mut front = 0;
        let mut idx = 0;
        while idx < definitions.len() {
            if S::is_pre_base(definitions[idx].kind) {
                move_item(definitions, idx, front);
                front += 1;
            } else {
                idx = S::apply_rules(definitions, idx);
            }

            idx += 1;
        }
    }

    fn write(&self, out: &mut [u16]) {
        debug_assert_eq!(out.len(), self.len());

        let units = self
            .definitions
            .iter()
            .flat_map(|d| d.units.iter().copied())
            .chain(self.boundary);

        for (slot, c) in out.iter_mut().zip(units) {
            *slot = c;
        }
    }
}

#[inline]
fn is_boundary<S: ComplexShaper>(c: u16) -> bool {
    is_whitespace(c) || (S::SPLITS_ON_NON_JOINER && c == ZERO_WIDTH_NON_JOINER)
}

fn continues_definition<S: ComplexShaper>(kind: S::MarkType, rest: &[u16]) -> bool {
    if !S::GROUPS_RUNS {
        return false;
    }

    let c = rest[0];
    if is_joiner(c) {
        return true;
    }

    !is_boundary::<S>(c) && S::fused_definition(rest).is_none() && S::mark_type(c) == kind
}

/// Reorders every cluster of `text` in place.
///
/// The result is always a permutation of the input.
pub(crate) fn reorder<S: ComplexShaper>(text: &mut [u16]) {
    let mut start = 0;
    while start < text.len() {
        let mut cluster = Cluster::parse::<S>(&text[start..]);
        let len = cluster.len();
        cluster.reorder::<S>();
        cluster.write(&mut text[start..start + len]);
        start += len;
    }
}

/// Moves Buginese pre-base vowels to the front of their cluster.
pub fn shape_buginese(text: &mut [u16]) {
    reorder::<buginese::Buginese>(text);
}

/// Moves Javanese pre-base vowels to the front of their cluster.
pub fn shape_javanese(text: &mut [u16]) {
    reorder::<javanese::Javanese>(text);
}

/// Moves Khmer pre-base vowels to the front of their cluster.
pub fn shape_khmer(text: &mut [u16]) {
    reorder::<khmer::Khmer>(text);
}

/// Reorders Myanmar clusters: pre-base vowels, Kinzi, medial Ra and anusvara.
pub fn shape_myanmar(text: &mut [u16]) {
    reorder::<myanmar::Myanmar>(text);
}

/// Moves Tibetan vowel signs in front of the nearest preceding head letter.
pub fn shape_tibetan(text: &mut [u16]) {
    reorder::<tibetan::Tibetan>(text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum Toy {
        Base,
        Pre,
        Other,
    }

    struct ToyShaper;

    // 'p' is a pre-base vowel, 'b' a base, "xyz" a fused sequence.
    impl ComplexShaper for ToyShaper {
        type MarkType = Toy;
        const SPLITS_ON_NON_JOINER: bool = true;

        fn mark_type(c: u16) -> Toy {
            match c {
                0x62 => Toy::Base,
                0x70 => Toy::Pre,
                _ => Toy::Other,
            }
        }

        fn is_pre_base(mark: Toy) -> bool {
            mark == Toy::Pre
        }

        fn fused_definition(text: &[u16]) -> Option<(Toy, usize)> {
            if text.starts_with(&[0x78, 0x79, 0x7A]) {
                Some((Toy::Base, 3))
            } else {
                None
            }
        }
    }

    fn run(s: &str) -> String {
        let mut units: Vec<u16> = s.encode_utf16().collect();
        reorder::<ToyShaper>(&mut units);
        String::from_utf16(&units).unwrap()
    }

    #[test]
    fn definitions_group_same_kind_and_joiners() {
        let text: Vec<u16> = "bb\u{200D}pa".encode_utf16().collect();
        let cluster = Cluster::parse::<ToyShaper>(&text);
        let kinds: Vec<_> = cluster.definitions.iter().map(|d| d.kind).collect();
        assert_eq!(kinds, [Toy::Base, Toy::Pre, Toy::Other]);
        assert_eq!(cluster.definitions[0].units.as_slice(), &[0x62, 0x62, 0x200D]);
        assert_eq!(cluster.boundary, None);
    }

    #[test]
    fn fused_sequence_is_one_definition() {
        let text: Vec<u16> = "bxyzb".encode_utf16().collect();
        let cluster = Cluster::parse::<ToyShaper>(&text);
        assert_eq!(cluster.definitions.len(), 3);
        assert_eq!(cluster.definitions[1].units.len(), 3);
    }

    #[test]
    fn pre_base_moves_to_front() {
        assert_eq!(run("bp"), "pb");
        assert_eq!(run("bap"), "pba");
    }

    #[test]
    fn pre_base_runs_keep_their_order() {
        // Two separate pre-base definitions, the first one glued with a joiner.
        let mut units = vec![0x62, 0x70, 0x200D, 0x61, 0x70];
        reorder::<ToyShaper>(&mut units);
        assert_eq!(units, [0x70, 0x200D, 0x70, 0x62, 0x61]);
    }

    #[test]
    fn boundaries_split_clusters() {
        assert_eq!(run("bp bp"), "pb pb");
        assert_eq!(run("b\u{200C}p"), "b\u{200C}p");
        assert_eq!(run(" p"), " p");
        assert_eq!(run("bp "), "pb ");
    }

    #[test]
    fn empty_input() {
        assert_eq!(run(""), "");
    }
}
