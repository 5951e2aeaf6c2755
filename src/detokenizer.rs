//! Reassembly of morphemes into naturally spaced text.
//!
//! The entry point receives bare strings, so each morpheme is classified
//! with a dictionary lookup rather than the full lattice: dependent
//! morphemes (particles, endings, suffixes, bare verb/adjective stems)
//! attach to the preceding segment, everything else opens a new one.

use crate::dictionary::KoreanDictionary;
use crate::pos::KoreanPos;

/// Categories whose members always attach without a space.
const ATTACHING: [KoreanPos; 4] = [
    KoreanPos::Josa,
    KoreanPos::Eomi,
    KoreanPos::PreEomi,
    KoreanPos::Suffix,
];

fn attaches(dict: &KoreanDictionary, morpheme: &str) -> bool {
    if morpheme.chars().all(|c| c.is_ascii_punctuation()) {
        return true;
    }
    if ATTACHING.iter().any(|&pos| dict.contains(pos, morpheme)) {
        return true;
    }
    // A bare stem continues the previous word: 누워 + 있 + 는 → 누워있는.
    let dict_form = format!("{morpheme}다");
    dict.contains(KoreanPos::Verb, &dict_form) || dict.contains(KoreanPos::Adjective, &dict_form)
}

/// Joins morphemes with exactly one space between independent segments and
/// none before attached dependents. No characters beyond the separators
/// are added or removed.
pub(crate) fn detokenize<I, S>(dict: &KoreanDictionary, morphemes: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for morpheme in morphemes {
        let morpheme = morpheme.as_ref();
        if morpheme.is_empty() {
            continue;
        }
        if !out.is_empty() && !attaches(dict, morpheme) {
            out.push(' ');
        }
        out.push_str(morpheme);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> KoreanDictionary {
        KoreanDictionary::new().unwrap()
    }

    #[test]
    fn test_particles_attach() {
        let d = dict();
        assert_eq!(detokenize(&d, ["강아지", "가", "작다"]), "강아지가 작다");
        assert_eq!(
            detokenize(&d, ["착한", "강아지", "상", "을"]),
            "착한 강아지상을"
        );
    }

    #[test]
    fn test_bare_stem_attaches() {
        let d = dict();
        assert_eq!(
            detokenize(&d, ["늘", "평온", "하게", "누워", "있", "는", "루루"]),
            "늘 평온하게 누워있는 루루"
        );
    }

    #[test]
    fn test_punctuation_attaches() {
        let d = dict();
        assert_eq!(detokenize(&d, ["끝", "이", "다", "!"]), "끝이다!");
    }

    #[test]
    fn test_empty() {
        let d = dict();
        assert_eq!(detokenize(&d, Vec::<&str>::new()), "");
        assert_eq!(detokenize(&d, ["", "루루", ""]), "루루");
    }
}
