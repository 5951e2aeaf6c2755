//! Conjugation rule table and expander.
//!
//! Matching recovers dictionary stems from inflected surface spans; the
//! forward direction enumerates surface forms for a known stem. Irregular
//! stems (vowel contraction, ㅂ/ㄷ-irregulars, 하/해) are table-cased here,
//! never derived mechanically.

use hashbrown::HashSet;
use lazy_static::lazy_static;

use crate::dictionary::KoreanDictionary;
use crate::hangul::{self, Syllable};
use crate::pos::KoreanPos;

/// Inflectional ending strings that attach after a stem.
const ENDINGS: &[&str] = &[
    "다", "은", "는", "을", "게", "지", "고", "서", "며", "면", "면서", "자", "아", "어", "야",
    "여", "요", "죠", "네", "니", "까", "니다", "세요", "어요", "아요", "어서", "아서", "어도",
    "아도", "어야", "아야", "었", "았", "겠", "었다", "았다", "겠다", "었어", "았어", "는다",
    "는데", "은데", "었는데", "았는데", "습니다", "습니까", "겠습니다", "었습니다", "았습니다",
    "던", "든", "도록", "려고", "러", "기", "음", "으면", "으니", "으니까", "으며",
];

/// Codas that fuse an ending into a vowel-final stem syllable
/// (착하 + ㄴ = 착한), or absorb a past/politeness marker (했).
const FUSED_CODAS: [char; 5] = ['ㄴ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅆ'];

lazy_static! {
    static ref ENDING_SET: HashSet<&'static str> = ENDINGS.iter().copied().collect();
}

/// A stem recovered from an inflected surface span.
#[derive(Clone, Eq, PartialEq, Debug)]
pub(crate) struct ConjugationMatch {
    /// Dictionary form of the stem (ending in 다).
    pub stem: String,
    /// Verb or Adjective, per the partition that contained the stem.
    pub pos: KoreanPos,
}

/// Matches a whole surface span against known verb/adjective stems.
/// Ambiguous recoveries are all emitted; the path selector disambiguates.
pub(crate) fn matches(dict: &KoreanDictionary, chars: &[char]) -> Vec<ConjugationMatch> {
    let mut out = vec![];
    if chars.is_empty() {
        return out;
    }
    let mut seen = HashSet::new();
    for k in 1..=chars.len() {
        let fused = k == chars.len();
        if !fused {
            let ending: String = chars[k..].iter().collect();
            if !ENDING_SET.contains(ending.as_str()) {
                continue;
            }
        }
        let surface: String = chars[..k].iter().collect();
        for stem in stem_variants(&chars[..k]) {
            if fused && stem == surface {
                // A surface form must carry an ending.
                continue;
            }
            let dict_form = format!("{stem}다");
            for pos in [KoreanPos::Verb, KoreanPos::Adjective] {
                if dict.contains(pos, &dict_form) && seen.insert((dict_form.clone(), pos)) {
                    out.push(ConjugationMatch {
                        stem: dict_form.clone(),
                        pos,
                    });
                }
            }
        }
    }
    out
}

/// Closure of stem-recovery transforms over the surface prefix.
fn stem_variants(prefix: &[char]) -> Vec<String> {
    let mut out = vec![prefix.iter().collect::<String>()];
    let mut i = 0;
    while i < out.len() && out.len() < 16 {
        let cur: Vec<char> = out[i].chars().collect();
        for v in transform_last(&cur) {
            if !out.contains(&v) {
                out.push(v);
            }
        }
        i += 1;
    }
    out
}

/// Single-step transforms of the last syllable toward the stem form.
fn transform_last(chars: &[char]) -> Vec<String> {
    let mut out = vec![];
    let Some((&last, head)) = chars.split_last() else {
        return out;
    };
    let Some(s) = hangul::decompose(last) else {
        return out;
    };
    let prefix: String = head.iter().collect();

    if s.coda != 0 {
        if let Some(jamo) = hangul::coda_to_jamo(s.coda) {
            // Fused ending coda: 착한 -> 착하, 했 -> 해, 갑 -> 가.
            if FUSED_CODAS.contains(&jamo) {
                if let Some(open) = hangul::compose(Syllable { coda: 0, ..s }) {
                    out.push(format!("{prefix}{open}"));
                }
            }
            // ㄷ-irregular: coda ㄹ may come from a ㄷ stem (들어 -> 듣다).
            if jamo == 'ㄹ' {
                if let Some(coda) = hangul::jamo_to_coda('ㄷ') {
                    if let Some(c) = hangul::compose(Syllable { coda, ..s }) {
                        out.push(format!("{prefix}{c}"));
                    }
                }
            }
        }
    } else {
        // Vowel contractions: 워 <- 우+어, 와 <- 오+아, 해 <- 하+여.
        match s.vowel {
            14 => {
                if let Some(c) = hangul::compose(Syllable { vowel: 13, ..s }) {
                    out.push(format!("{prefix}{c}"));
                }
            }
            9 => {
                if let Some(c) = hangul::compose(Syllable { vowel: 8, ..s }) {
                    out.push(format!("{prefix}{c}"));
                }
            }
            1 if s.onset == 18 => out.push(format!("{prefix}하")),
            _ => {}
        }
        // ㅂ-irregular: 아름다우 -> 아름답, 누우 -> 눕.
        if last == '우' {
            if let Some((&prev, short)) = head.split_last() {
                if let Some(with_b) = hangul::attach_coda(prev, 'ㅂ') {
                    let short: String = short.iter().collect();
                    out.push(format!("{short}{with_b}"));
                }
            }
        }
    }
    out
}

/// Surface forms a dictionary-form stem can take: plain endings plus the
/// fused-coda forms of a vowel-final stem.
pub(crate) fn surface_forms(dict_form: &str) -> Vec<String> {
    let Some(stem) = dict_form.strip_suffix('다') else {
        return vec![];
    };
    let mut out: Vec<String> = ENDINGS.iter().map(|e| format!("{stem}{e}")).collect();
    if let Some(last) = stem.chars().last() {
        for jamo in ['ㄴ', 'ㄹ', 'ㅁ', 'ㅂ'] {
            if let Some(fused) = hangul::attach_coda(last, jamo) {
                let head: String = stem.chars().take(stem.chars().count() - 1).collect();
                out.push(format!("{head}{fused}"));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> KoreanDictionary {
        KoreanDictionary::new().unwrap()
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_plain_ending() {
        let d = dict();
        let m = matches(&d, &chars("받은"));
        assert!(m.contains(&ConjugationMatch {
            stem: "받다".into(),
            pos: KoreanPos::Verb
        }));
    }

    #[test]
    fn test_fused_coda() {
        let d = dict();
        let m = matches(&d, &chars("착한"));
        assert_eq!(
            m,
            vec![ConjugationMatch {
                stem: "착하다".into(),
                pos: KoreanPos::Adjective
            }]
        );
    }

    #[test]
    fn test_bieup_irregular() {
        let d = dict();
        let m = matches(&d, &chars("아름다운"));
        assert!(m.contains(&ConjugationMatch {
            stem: "아름답다".into(),
            pos: KoreanPos::Adjective
        }));
    }

    #[test]
    fn test_vowel_contraction() {
        let d = dict();
        let m = matches(&d, &chars("누워"));
        assert!(m.contains(&ConjugationMatch {
            stem: "눕다".into(),
            pos: KoreanPos::Verb
        }));
    }

    #[test]
    fn test_ambiguous_stems_all_emitted() {
        let d = dict();
        // 들어 can come from both 들다 and 듣다.
        let m = matches(&d, &chars("들어"));
        let stems: Vec<_> = m.iter().map(|c| c.stem.as_str()).collect();
        assert!(stems.contains(&"들다"));
        assert!(stems.contains(&"듣다"));
    }

    #[test]
    fn test_bare_stem_is_not_a_match() {
        let d = dict();
        assert!(matches(&d, &chars("받")).is_empty());
        assert!(matches(&d, &chars("다")).is_empty());
    }

    #[test]
    fn test_no_match() {
        let d = dict();
        assert!(matches(&d, &chars("루루")).is_empty());
        assert!(matches(&d, &chars("춍춍")).is_empty());
    }

    #[test]
    fn test_surface_forms() {
        let forms = surface_forms("착하다");
        assert!(forms.contains(&"착한".to_string()));
        assert!(forms.contains(&"착하게".to_string()));
        assert!(forms.contains(&"착하지".to_string()));
        let forms = surface_forms("힘들다");
        assert!(forms.contains(&"힘들겠습니다".to_string()));
    }
}
