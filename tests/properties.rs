//! Laws that hold for every input, checked with quickcheck.

use quickcheck::{QuickCheck, TestResult};
use quickcheck_macros::quickcheck;
use sms_split::{
    Encoding, EncodingMode, LogicalCharacter, Segment, alphabet, decode, decode_utf16,
    segment, segment_utf16, select_encoding,
};

fn reconstruct(segments: &[Segment]) -> Vec<LogicalCharacter> {
    segments.iter().flat_map(|s| s.text.iter().copied()).collect()
}

fn mode_from(n: u8) -> EncodingMode {
    match n % 3 {
        0 => EncodingMode::Auto,
        1 => EncodingMode::Gsm7,
        _ => EncodingMode::Ucs2,
    }
}

#[quickcheck]
fn segments_reconstruct_input(text: String, mode: u8) -> bool {
    let segments = segment(&text, mode_from(mode));
    reconstruct(&segments) == decode(&text)
}

#[quickcheck]
fn segments_reconstruct_raw_units(units: Vec<u16>, mode: u8) -> bool {
    let segments = segment_utf16(&units, mode_from(mode));
    let units_back: Vec<u16> = reconstruct(&segments)
        .iter()
        .flat_map(|c| c.code_units())
        .collect();
    units_back == units && reconstruct(&segments) == decode_utf16(&units)
}

#[quickcheck]
fn segments_respect_budgets(text: String, mode: u8) -> bool {
    let mode = mode_from(mode);
    let chars = decode(&text);
    let encoding = mode.resolve(&chars);
    let limits = encoding.limits();
    let segments = segment(&text, mode);

    let total: usize = segments.iter().map(|s| s.byte_len).sum();
    if total <= limits.single {
        segments.len() == usize::from(!chars.is_empty())
    } else {
        segments
            .iter()
            .all(|s| !s.text.is_empty() && s.byte_len <= limits.multi)
    }
}

#[quickcheck]
fn segment_byte_len_matches_bytes(text: String) -> bool {
    segment(&text, EncodingMode::Auto)
        .iter()
        .all(|s| s.byte_len == s.bytes.iter().map(|b| b.len()).sum::<usize>())
}

#[quickcheck]
fn one_foreign_character_forces_ucs2(text: String, position: usize) -> TestResult {
    let gsm_only: String = text
        .chars()
        .filter(|&c| alphabet::contains(c as u32))
        .collect();
    if select_encoding(&gsm_only) != Encoding::Gsm7 {
        return TestResult::failed();
    }

    let mut chars: Vec<char> = gsm_only.chars().collect();
    let at = if chars.is_empty() { 0 } else { position % (chars.len() + 1) };
    chars.insert(at, '😀');
    let with_emoji: String = chars.into_iter().collect();

    TestResult::from_bool(select_encoding(&with_emoji) == Encoding::Ucs2)
}

#[test]
fn gsm_segments_never_split_escape_sequences() {
    fn prop(text: String) -> TestResult {
        let gsm_only: String = text
            .chars()
            .filter(|&c| alphabet::contains(c as u32))
            .collect();
        if gsm_only.is_empty() {
            return TestResult::discard();
        }
        let message = gsm_only.repeat(20);
        let segments = segment(&message, EncodingMode::Gsm7);
        let expected: usize = message
            .chars()
            .filter_map(|c| alphabet::lookup(c as u32))
            .map(|septet| septet.byte_len())
            .sum();
        let payload: usize = segments.iter().map(|s| s.payload().len()).sum();
        let within = segments.len() == 1 || segments.iter().all(|s| s.byte_len <= 153);
        TestResult::from_bool(payload == expected && within)
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(String) -> TestResult);
}
