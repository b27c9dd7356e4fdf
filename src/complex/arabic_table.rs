//! Arabic joining and presentation form tables.

/// Joins to the right (to the following letter in logical order).
pub const R: u16 = 0x01;
/// Joins to the left.
pub const L: u16 = 0x02;
/// Dual joining.
pub const D: u16 = R | L;
/// Transparent: skipped when looking for the neighbours of a letter.
pub const T: u16 = 0x04;
/// The shape offset points into Arabic Presentation Forms-A.
pub const PF_A: u16 = 0x08;
pub const LAM: u16 = 0x10;
pub const ALEF: u16 = 0x20;
pub const SHADDA: u16 = 0x40;
/// A mark that can combine with Shadda into one ligature.
pub const C_SHADDA: u16 = 0x80;
pub const COMBINE: u16 = SHADDA | C_SHADDA;

const fn link(offset: u16, flags: u16) -> u16 {
    offset << 8 | flags
}

/// Link descriptors for U+0622..=U+06D3.
///
/// The high byte is the offset of the isolated form inside the
/// presentation block, the low byte holds the joining flags.
pub static ARABIC_LINKS: [u16; 178] = [
    link(0x11, R | ALEF), // 0622
    link(0x13, R | ALEF), // 0623
    link(0x15, R), // 0624
    link(0x17, R | ALEF), // 0625
    link(0x19, D), // 0626
    link(0x1D, R | ALEF), // 0627
    link(0x1F, D), // 0628
    link(0x23, R), // 0629
    link(0x25, D), // 062A
    link(0x29, D), // 062B
    link(0x2D, D), // 062C
    link(0x31, D), // 062D
    link(0x35, D), // 062E
    link(0x39, R), // 062F
    link(0x3B, R), // 0630
    link(0x3D, R), // 0631
    link(0x3F, R), // 0632
    link(0x41, D), // 0633
    link(0x45, D), // 0634
    link(0x49, D), // 0635
    link(0x4D, D), // 0636
    link(0x51, D), // 0637
    link(0x55, D), // 0638
    link(0x59, D), // 0639
    link(0x5D, D), // 063A
    link(0x00, 0), // 063B
    link(0x00, 0), // 063C
    link(0x00, 0), // 063D
    link(0x00, 0), // 063E
    link(0x00, 0), // 063F
    link(0x00, D), // 0640
    link(0x61, D), // 0641
    link(0x65, D), // 0642
    link(0x69, D), // 0643
    link(0x6D, D | LAM), // 0644
    link(0x71, D), // 0645
    link(0x75, D), // 0646
    link(0x79, D), // 0647
    link(0x7D, R), // 0648
    link(0x7F, R), // 0649
    link(0x81, D), // 064A
    link(0x01, T), // 064B
    link(0x01, T | C_SHADDA), // 064C
    link(0x01, T | C_SHADDA), // 064D
    link(0x01, T | C_SHADDA), // 064E
    link(0x01, T | C_SHADDA), // 064F
    link(0x01, T | C_SHADDA), // 0650
    link(0x03, T | SHADDA), // 0651
    link(0x01, T), // 0652
    link(0x07, T), // 0653
    link(0x08, T), // 0654
    link(0x08, T), // 0655
    link(0x01, T), // 0656
    link(0x00, 0), // 0657
    link(0x00, 0), // 0658
    link(0x00, 0), // 0659
    link(0x00, 0), // 065A
    link(0x00, 0), // 065B
    link(0x85, R), // 065C
    link(0x87, R), // 065D
    link(0x89, R), // 065E
    link(0x8B, R), // 065F
    link(0x00, 0), // 0660
    link(0x00, 0), // 0661
    link(0x00, 0), // 0662
    link(0x00, 0), // 0663
    link(0x00, 0), // 0664
    link(0x00, 0), // 0665
    link(0x00, 0), // 0666
    link(0x00, 0), // 0667
    link(0x00, 0), // 0668
    link(0x00, 0), // 0669
    link(0x00, 0), // 066A
    link(0x00, 0), // 066B
    link(0x00, 0), // 066C
    link(0x00, 0), // 066D
    link(0x00, 0), // 066E
    link(0x00, 0), // 066F
    link(0x06, T), // 0670
    link(0x00, R | PF_A), // 0671
    link(0x00, R | ALEF), // 0672
    link(0x00, R | ALEF), // 0673
    link(0x00, 0), // 0674
    link(0x00, R | ALEF), // 0675
    link(0x00, R), // 0676
    link(0x00, R), // 0677
    link(0x00, D), // 0678
    link(0x16, D | PF_A), // 0679
    link(0x0E, D | PF_A), // 067A
    link(0x02, D | PF_A), // 067B
    link(0x00, D), // 067C
    link(0x00, D), // 067D
    link(0x06, D | PF_A), // 067E
    link(0x00, D), // 067F
    link(0x00, D), // 0680
    link(0x00, D), // 0681
    link(0x00, D), // 0682
    link(0x00, D), // 0683
    link(0x00, D), // 0684
    link(0x00, D), // 0685
    link(0x2A, D | PF_A), // 0686
    link(0x00, D), // 0687
    link(0x38, R | PF_A), // 0688
    link(0x00, R), // 0689
    link(0x00, R), // 068A
    link(0x00, R), // 068B
    link(0x34, R | PF_A), // 068C
    link(0x32, R | PF_A), // 068D
    link(0x36, R | PF_A), // 068E
    link(0x00, R), // 068F
    link(0x00, R), // 0690
    link(0x3C, R | PF_A), // 0691
    link(0x00, R), // 0692
    link(0x00, R), // 0693
    link(0x00, R), // 0694
    link(0x00, R), // 0695
    link(0x00, R), // 0696
    link(0x00, R), // 0697
    link(0x3A, R | PF_A), // 0698
    link(0x00, R), // 0699
    link(0x00, D), // 069A
    link(0x00, D), // 069B
    link(0x00, D), // 069C
    link(0x00, D), // 069D
    link(0x00, D), // 069E
    link(0x00, D), // 069F
    link(0x00, D), // 06A0
    link(0x00, D), // 06A1
    link(0x00, D), // 06A2
    link(0x00, D), // 06A3
    link(0x00, D), // 06A4
    link(0x00, D), // 06A5
    link(0x00, D), // 06A6
    link(0x00, D), // 06A7
    link(0x00, D), // 06A8
    link(0x3E, D | PF_A), // 06A9
    link(0x00, D), // 06AA
    link(0x00, D), // 06AB
    link(0x00, D), // 06AC
    link(0x00, D), // 06AD
    link(0x00, D), // 06AE
    link(0x42, D | PF_A), // 06AF
    link(0x00, D), // 06B0
    link(0x00, D), // 06B1
    link(0x00, D), // 06B2
    link(0x00, D), // 06B3
    link(0x00, D), // 06B4
    link(0x00, D), // 06B5
    link(0x00, D), // 06B6
    link(0x00, D), // 06B7
    link(0x00, D), // 06B8
    link(0x00, D), // 06B9
    link(0x4E, R | PF_A), // 06BA
    link(0x50, D | PF_A), // 06BB
    link(0x00, D), // 06BC
    link(0x00, D), // 06BD
    link(0x5A, D | PF_A), // 06BE
    link(0x00, D), // 06BF
    link(0x54, R | PF_A), // 06C0
    link(0x56, D | PF_A), // 06C1
    link(0x00, R), // 06C2
    link(0x00, R), // 06C3
    link(0x00, R), // 06C4
    link(0x90, R | PF_A), // 06C5
    link(0x89, R | PF_A), // 06C6
    link(0x87, R | PF_A), // 06C7
    link(0x8B, R | PF_A), // 06C8
    link(0x92, R | PF_A), // 06C9
    link(0x00, R), // 06CA
    link(0x8E, R | PF_A), // 06CB
    link(0xAC, D | PF_A), // 06CC
    link(0x00, R), // 06CD
    link(0x00, D), // 06CE
    link(0x00, D), // 06CF
    link(0x94, D | PF_A), // 06D0
    link(0x00, D), // 06D1
    link(0x5E, R | PF_A), // 06D2
    link(0x60, R | PF_A), // 06D3
];

/// Joining flags for U+FB50..=U+FC62.
pub static PRESENTATION_A_LINKS: [u8; 275] = [
    0, 1, 0, 0, 0, 0, 0, 1, 2, 3, 0, 0, 0, 0, 0, 0, // FB50
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // FB60
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 3, 0, 0, // FB70
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, // FB80
    2, 3, 0, 1, 2, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // FB90
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // FBA0
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // FBB0
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // FBC0
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // FBD0
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // FBE0
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 3, // FBF0
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // FC00
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // FC10
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // FC20
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // FC30
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // FC40
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4, 4, // FC50
    4, 4, 4, // FC60
];

/// Joining flags for U+FE70..=U+FEFF.
pub static PRESENTATION_B_LINKS: [u8; 144] = [
    3, 3, 3, 0, 3, 0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, // FE70
    0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 2, 3, 0, 1, 0, // FE80
    1, 2, 3, 0, 1, 0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, // FE90
    3, 0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 0, 1, 0, 1, 0, // FEA0
    1, 0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, // FEB0
    3, 0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, // FEC0
    3, 0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, // FED0
    3, 0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 0, // FEE0
    1, 0, 1, 2, 3, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, // FEF0
];

/// Maps U+FB50..=U+FBFF back to the Arabic block. Zero means no mapping.
pub static FB_TO_06: [u16; 176] = [
    0x0671, 0x0671, 0x067B, 0x067B, 0x067B, 0x067B, 0x067E, 0x067E, // FB50
    0x067E, 0x067E, 0x0000, 0x0000, 0x0000, 0x0000, 0x067A, 0x067A, // FB58
    0x067A, 0x067A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0679, 0x0679, // FB60
    0x0679, 0x0679, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // FB68
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // FB70
    0x0000, 0x0000, 0x0686, 0x0686, 0x0686, 0x0686, 0x0000, 0x0000, // FB78
    0x0000, 0x0000, 0x068D, 0x068D, 0x068C, 0x068C, 0x068E, 0x068E, // FB80
    0x0688, 0x0688, 0x0698, 0x0698, 0x0691, 0x0691, 0x06A9, 0x06A9, // FB88
    0x06A9, 0x06A9, 0x06AF, 0x06AF, 0x06AF, 0x06AF, 0x0000, 0x0000, // FB90
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x06BA, 0x06BA, // FB98
    0x06BB, 0x06BB, 0x06BB, 0x06BB, 0x06C0, 0x06C0, 0x06C1, 0x06C1, // FBA0
    0x06C1, 0x06C1, 0x06BE, 0x06BE, 0x06BE, 0x06BE, 0x06D2, 0x06D2, // FBA8
    0x06D3, 0x06D3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // FBB0
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // FBB8
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // FBC0
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // FBC8
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x06C7, // FBD0
    0x06C7, 0x06C6, 0x06C6, 0x06C8, 0x06C8, 0x0000, 0x06CB, 0x06CB, // FBD8
    0x06C5, 0x06C5, 0x06C9, 0x06C9, 0x06D0, 0x06D0, 0x06D0, 0x06D0, // FBE0
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // FBE8
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // FBF0
    0x0000, 0x0000, 0x0000, 0x0000, 0x06CC, 0x06CC, 0x06CC, 0x06CC, // FBF8
];

/// Maps U+FE70..=U+FEFC back to the Arabic block.
///
/// Lam-Alef ligatures map to the internal U+065C..=U+065F forms.
pub static FE_TO_06: [u16; 141] = [
    0x064B, 0x064B, 0x064C, 0x064C, 0x064D, 0x064D, 0x064E, 0x064E, // FE70
    0x064F, 0x064F, 0x0650, 0x0650, 0x0651, 0x0651, 0x0652, 0x0652, // FE78
    0x0621, 0x0622, 0x0622, 0x0623, 0x0623, 0x0624, 0x0624, 0x0625, // FE80
    0x0625, 0x0626, 0x0626, 0x0626, 0x0626, 0x0627, 0x0627, 0x0628, // FE88
    0x0628, 0x0628, 0x0628, 0x0629, 0x0629, 0x062A, 0x062A, 0x062A, // FE90
    0x062A, 0x062B, 0x062B, 0x062B, 0x062B, 0x062C, 0x062C, 0x062C, // FE98
    0x062C, 0x062D, 0x062D, 0x062D, 0x062D, 0x062E, 0x062E, 0x062E, // FEA0
    0x062E, 0x062F, 0x062F, 0x0630, 0x0630, 0x0631, 0x0631, 0x0632, // FEA8
    0x0632, 0x0633, 0x0633, 0x0633, 0x0633, 0x0634, 0x0634, 0x0634, // FEB0
    0x0634, 0x0635, 0x0635, 0x0635, 0x0635, 0x0636, 0x0636, 0x0636, // FEB8
    0x0636, 0x0637, 0x0637, 0x0637, 0x0637, 0x0638, 0x0638, 0x0638, // FEC0
    0x0638, 0x0639, 0x0639, 0x0639, 0x0639, 0x063A, 0x063A, 0x063A, // FEC8
    0x063A, 0x0641, 0x0641, 0x0641, 0x0641, 0x0642, 0x0642, 0x0642, // FED0
    0x0642, 0x0643, 0x0643, 0x0643, 0x0643, 0x0644, 0x0644, 0x0644, // FED8
    0x0644, 0x0645, 0x0645, 0x0645, 0x0645, 0x0646, 0x0646, 0x0646, // FEE0
    0x0646, 0x0647, 0x0647, 0x0647, 0x0647, 0x0648, 0x0648, 0x0649, // FEE8
    0x0649, 0x064A, 0x064A, 0x064A, 0x064A, 0x065C, 0x065C, 0x065D, // FEF0
    0x065D, 0x065E, 0x065E, 0x065F, 0x065F, // FEF8
];

/// Tashkeel forms in U+FE70..=U+FE7F that sit on a joined position.
pub static TASHKEEL_MEDIAL: [u8; 16] = [
    0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, // FE70
];

/// Alef variants behind the Lam-Alef ligatures U+FEF5..=U+FEFC.
pub static LAM_ALEF_TO_ALEF: [u16; 8] = [
    0x0622, 0x0622, 0x0623, 0x0623, 0x0625, 0x0625, 0x0627, 0x0627,
];

/// Offsets of the isolated Tashkeel forms U+064B..=U+0652 from U+FE70.
pub static TASHKEEL_OFFSETS: [u16; 8] = [0x0, 0x2, 0x4, 0x6, 0x8, 0xA, 0xC, 0xE];

/// Indexed by the joining bits of the next letter, the last letter and the
/// current letter. 0 is isolated, 1 final, 2 initial and 3 medial.
pub static SHAPE_TABLE: [[[u8; 4]; 4]; 4] = [
    [[0, 0, 0, 0], [0, 0, 0, 0], [0, 1, 0, 3], [0, 1, 0, 1]],
    [[0, 0, 2, 2], [0, 0, 1, 2], [0, 1, 1, 2], [0, 1, 1, 3]],
    [[0, 0, 0, 0], [0, 0, 0, 0], [0, 1, 0, 3], [0, 1, 0, 3]],
    [[0, 0, 1, 2], [0, 0, 1, 2], [0, 1, 1, 2], [0, 1, 1, 3]],
];
