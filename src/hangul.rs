//! Hangul syllable arithmetic.
//!
//! A precomposed syllable U+AC00..U+D7A3 encodes
//! `(onset * 21 + vowel) * 28 + coda`, where coda 0 means none.

const SYLLABLE_BASE: u32 = 0xAC00;
const SYLLABLE_LAST: u32 = 0xD7A3;
const NUM_VOWELS: u32 = 21;
const NUM_CODAS: u32 = 28;

/// Onset index -> compatibility jamo.
const ONSET_JAMO: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Coda index (1..=27) -> compatibility jamo.
const CODA_JAMO: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ',
    'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Decomposed syllable indices.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) struct Syllable {
    pub onset: u32,
    pub vowel: u32,
    /// 0 when the syllable is open.
    pub coda: u32,
}

#[inline(always)]
pub(crate) const fn is_syllable(c: char) -> bool {
    let u = c as u32;
    SYLLABLE_BASE <= u && u <= SYLLABLE_LAST
}

/// Compatibility jamo block (bare consonants and vowels such as ㅋ, ㅠ).
#[inline(always)]
pub(crate) const fn is_compat_jamo(c: char) -> bool {
    let u = c as u32;
    0x3131 <= u && u <= 0x3163
}

pub(crate) fn decompose(c: char) -> Option<Syllable> {
    if !is_syllable(c) {
        return None;
    }
    let u = c as u32 - SYLLABLE_BASE;
    Some(Syllable {
        onset: u / (NUM_VOWELS * NUM_CODAS),
        vowel: (u / NUM_CODAS) % NUM_VOWELS,
        coda: u % NUM_CODAS,
    })
}

pub(crate) fn compose(s: Syllable) -> Option<char> {
    if s.onset >= 19 || s.vowel >= NUM_VOWELS || s.coda >= NUM_CODAS {
        return None;
    }
    char::from_u32(SYLLABLE_BASE + (s.onset * NUM_VOWELS + s.vowel) * NUM_CODAS + s.coda)
}

/// Compatibility jamo corresponding to a coda index.
pub(crate) fn coda_to_jamo(coda: u32) -> Option<char> {
    if coda == 0 || coda > 27 {
        return None;
    }
    Some(CODA_JAMO[(coda - 1) as usize])
}

/// Coda index corresponding to a single-consonant compatibility jamo.
pub(crate) fn jamo_to_coda(jamo: char) -> Option<u32> {
    CODA_JAMO
        .iter()
        .position(|&j| j == jamo)
        .map(|i| i as u32 + 1)
}

/// Compatibility jamo corresponding to an onset index.
pub(crate) fn onset_to_jamo(onset: u32) -> Option<char> {
    ONSET_JAMO.get(onset as usize).copied()
}

/// Compatibility jamo corresponding to a vowel index. The compat vowel
/// block U+314F..U+3163 is laid out in vowel-index order.
pub(crate) fn vowel_to_jamo(vowel: u32) -> Option<char> {
    if vowel >= NUM_VOWELS {
        return None;
    }
    char::from_u32(0x314F + vowel)
}

/// Removes the coda of a syllable, returning the open syllable and the
/// compatibility jamo of the removed coda.
pub(crate) fn strip_coda(c: char) -> Option<(char, char)> {
    let s = decompose(c)?;
    if s.coda == 0 {
        return None;
    }
    let open = compose(Syllable { coda: 0, ..s })?;
    Some((open, coda_to_jamo(s.coda)?))
}

/// Attaches a single-consonant compatibility jamo as the coda of an open
/// syllable.
pub(crate) fn attach_coda(c: char, jamo: char) -> Option<char> {
    let s = decompose(c)?;
    if s.coda != 0 {
        return None;
    }
    compose(Syllable {
        coda: jamo_to_coda(jamo)?,
        ..s
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose() {
        // 한 = ㅎ + ㅏ + ㄴ
        let s = decompose('한').unwrap();
        assert_eq!(s.onset, 18);
        assert_eq!(s.vowel, 0);
        assert_eq!(s.coda, 4);
        assert_eq!(decompose('k'), None);
        assert_eq!(decompose('ㅋ'), None);
    }

    #[test]
    fn test_compose_roundtrip() {
        for c in ['가', '힣', '받', '욬', '운'] {
            let s = decompose(c).unwrap();
            assert_eq!(compose(s), Some(c));
        }
    }

    #[test]
    fn test_strip_coda() {
        assert_eq!(strip_coda('한'), Some(('하', 'ㄴ')));
        assert_eq!(strip_coda('욬'), Some(('요', 'ㅋ')));
        assert_eq!(strip_coda('하'), None);
    }

    #[test]
    fn test_attach_coda() {
        assert_eq!(attach_coda('하', 'ㄴ'), Some('한'));
        assert_eq!(attach_coda('다', 'ㅂ'), Some('답'));
        assert_eq!(attach_coda('한', 'ㄴ'), None);
    }

    #[test]
    fn test_jamo_tables() {
        assert_eq!(coda_to_jamo(0), None);
        assert_eq!(jamo_to_coda('ㅋ'), Some(24));
        assert_eq!(onset_to_jamo(11), Some('ㅇ'));
        assert_eq!(vowel_to_jamo(0), Some('ㅏ'));
        assert_eq!(vowel_to_jamo(20), Some('ㅣ'));
        assert_eq!(vowel_to_jamo(21), None);
        assert!(is_compat_jamo('ㅠ'));
        assert!(!is_compat_jamo('요'));
    }
}
