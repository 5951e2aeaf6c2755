//! Noun phrase extraction.

use std::fmt;

use hashbrown::HashSet;

use crate::dictionary::KoreanDictionary;
use crate::pos::KoreanPos;
use crate::token::KoreanToken;

/// A noun-phrase or hashtag span extracted from a token sequence.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct KoreanPhrase {
    /// Surface text, interior spaces included for compound phrases.
    pub text: String,
    /// Noun for (compound) noun phrases, Hashtag for hashtags.
    pub pos: KoreanPos,
    /// Start position in chars of the original input.
    pub offset: usize,
    /// Span length in chars.
    pub length: usize,
}

impl fmt::Display for KoreanPhrase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}({}: {}, {})",
            self.text, self.pos, self.offset, self.length
        )
    }
}

/// Whether a token may open a phrase run.
fn opens(pos: KoreanPos) -> bool {
    matches!(
        pos,
        KoreanPos::Noun
            | KoreanPos::Adjective
            | KoreanPos::Modifier
            | KoreanPos::Determiner
            | KoreanPos::NounPrefix
    )
}

/// Whether a token may continue an open run. Space is interior only; the
/// run is trimmed back to its last Noun before emission.
fn continues(pos: KoreanPos) -> bool {
    opens(pos) || pos == KoreanPos::Space
}

/// Extracts noun phrases from a token sequence: every maximal compound run
/// first, then each span-distinct member noun, then hashtags. Results are
/// deduplicated by (offset, length), first seen wins.
pub(crate) fn extract(
    dict: &KoreanDictionary,
    tokens: &[KoreanToken],
    filter_spam: bool,
    include_hashtags: bool,
) -> Vec<KoreanPhrase> {
    let mut runs: Vec<Vec<&KoreanToken>> = vec![];
    let mut run: Vec<&KoreanToken> = vec![];
    for token in tokens {
        let extends = if run.is_empty() {
            opens(token.pos)
        } else {
            continues(token.pos)
        };
        if extends {
            run.push(token);
        } else if !run.is_empty() {
            runs.push(std::mem::take(&mut run));
        }
    }
    if !run.is_empty() {
        runs.push(run);
    }

    let mut phrases = vec![];
    let mut seen = HashSet::new();
    let mut members = vec![];
    for run in &runs {
        let Some(last_noun) = run.iter().rposition(|t| t.pos == KoreanPos::Noun) else {
            continue;
        };
        let run = &run[..=last_noun];
        let compound = join(run);
        for token in run.iter().filter(|t| t.pos == KoreanPos::Noun) {
            if token.offset != compound.offset || token.length != compound.length {
                members.push(*token);
            }
        }
        if filter_spam && is_spam(dict, run, &compound.text) {
            continue;
        }
        push_unique(&mut phrases, &mut seen, compound);
    }
    for token in members {
        if filter_spam && dict.is_spam(&token.text) {
            continue;
        }
        push_unique(&mut phrases, &mut seen, single(token, KoreanPos::Noun));
    }
    if include_hashtags {
        for token in tokens.iter().filter(|t| t.pos == KoreanPos::Hashtag) {
            push_unique(&mut phrases, &mut seen, single(token, KoreanPos::Hashtag));
        }
    }
    phrases
}

fn join(run: &[&KoreanToken]) -> KoreanPhrase {
    let first = run[0];
    let last = run[run.len() - 1];
    KoreanPhrase {
        text: run.iter().map(|t| t.text.as_str()).collect(),
        pos: KoreanPos::Noun,
        offset: first.offset,
        length: last.offset + last.length - first.offset,
    }
}

fn single(token: &KoreanToken, pos: KoreanPos) -> KoreanPhrase {
    KoreanPhrase {
        text: token.text.clone(),
        pos,
        offset: token.offset,
        length: token.length,
    }
}

fn is_spam(dict: &KoreanDictionary, run: &[&KoreanToken], whole: &str) -> bool {
    dict.is_spam(whole) || run.iter().any(|t| dict.is_spam(&t.text))
}

fn push_unique(
    phrases: &mut Vec<KoreanPhrase>,
    seen: &mut HashSet<(usize, usize)>,
    phrase: KoreanPhrase,
) {
    if seen.insert((phrase.offset, phrase.length)) {
        phrases.push(phrase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn dict() -> KoreanDictionary {
        KoreanDictionary::new().unwrap()
    }

    fn texts(phrases: &[KoreanPhrase]) -> Vec<&str> {
        phrases.iter().map(|p| p.text.as_str()).collect()
    }

    #[test]
    fn test_single_noun() {
        let d = dict();
        let tokens = tokenize(&d, "강아지를 봤다");
        let phrases = extract(&d, &tokens, true, true);
        assert_eq!(texts(&phrases), vec!["강아지"]);
        assert_eq!(phrases[0].pos, KoreanPos::Noun);
        assert_eq!((phrases[0].offset, phrases[0].length), (0, 3));
    }

    #[test]
    fn test_compound_and_members() {
        let d = dict();
        let tokens = tokenize(&d, "평창 동계 올림픽");
        let phrases = extract(&d, &tokens, true, false);
        // The full compound first, then its span-distinct member nouns.
        assert_eq!(texts(&phrases), vec!["평창 동계 올림픽", "평창", "동계", "올림픽"]);
        assert_eq!(phrases[0].length, 9);
    }

    #[test]
    fn test_modifier_opens_run() {
        let d = dict();
        let tokens = tokenize(&d, "아름다운 트위터를 쓰다");
        let phrases = extract(&d, &tokens, true, false);
        assert_eq!(texts(&phrases), vec!["아름다운 트위터", "트위터"]);
    }

    #[test]
    fn test_run_trimmed_to_last_noun() {
        let d = dict();
        // A trailing adjective does not extend the phrase.
        let tokens = tokenize(&d, "강아지 착한");
        let phrases = extract(&d, &tokens, true, false);
        assert_eq!(texts(&phrases), vec!["강아지"]);
    }

    #[test]
    fn test_spam_filter() {
        let d = dict();
        let tokens = tokenize(&d, "시발 트위터");
        let filtered = extract(&d, &tokens, true, false);
        assert_eq!(texts(&filtered), vec!["트위터"]);
        let unfiltered = extract(&d, &tokens, false, false);
        assert_eq!(texts(&unfiltered), vec!["시발 트위터", "시발", "트위터"]);
    }

    #[test]
    fn test_hashtags() {
        let d = dict();
        let tokens = tokenize(&d, "#맛집 강아지");
        let with = extract(&d, &tokens, true, true);
        assert_eq!(texts(&with), vec!["강아지", "#맛집"]);
        assert_eq!(with[1].pos, KoreanPos::Hashtag);
        let without = extract(&d, &tokens, true, false);
        assert_eq!(texts(&without), vec!["강아지"]);
    }

    #[test]
    fn test_no_phrases() {
        let d = dict();
        let tokens = tokenize(&d, "받은");
        assert!(extract(&d, &tokens, true, true).is_empty());
        assert!(extract(&d, &[], true, true).is_empty());
    }
}
