//! Lattice-based tokenizer.
pub(crate) mod lattice;

use lazy_static::lazy_static;
use regex::Regex;

use crate::conjugation;
use crate::dictionary::KoreanDictionary;
use crate::input::{InputText, ScriptClass};
use crate::pos::{KoreanPos, LEXICAL_POS};
use crate::token::KoreanToken;
use lattice::{Candidate, Lattice};

/// Per-token cost of a dictionary or conjugation match.
const WORD_COST: i32 = 100;
/// Cost of a whitespace run.
const SPACE_COST: i32 = 10;
/// Cost of a pattern recognizer match (URL, email, mention, hashtag).
const PATTERN_COST: i32 = 60;
/// Cost of a script-run recognizer match.
const RUN_COST: i32 = 80;
/// Unknown fallback: base plus per-char component. The base keeps an
/// all-unknown chunk together; the per-char part lets a known word or a
/// trailing particle split off.
const UNKNOWN_BASE_COST: i32 = 800;
const UNKNOWN_CHAR_COST: i32 = 200;
/// Unknown prefixes offered to the path selector, besides the full run.
const MAX_UNKNOWN_PREFIX: usize = 16;

lazy_static! {
    static ref URL_RE: Regex = Regex::new(r"^(?:https?://|www\.)\S+").unwrap();
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+").unwrap();
    static ref SCREEN_NAME_RE: Regex = Regex::new(r"^@[A-Za-z0-9_가-힣]+").unwrap();
    static ref HASHTAG_RE: Regex = Regex::new(r"^#[\p{L}\p{N}_-]+").unwrap();
    static ref NUMBER_RE: Regex = Regex::new(r"^[0-9]+(?:[.,][0-9]+)*").unwrap();
}

/// Segments text into morpheme-level tokens covering the whole input.
pub(crate) fn tokenize(dict: &KoreanDictionary, text: &str) -> Vec<KoreanToken> {
    let input = InputText::new(text);
    let n = input.len_char();
    if n == 0 {
        return vec![];
    }

    let mut lattice = Lattice::new(n);
    for start in 0..n {
        if !lattice.has_previous_node(start) {
            continue;
        }
        add_edges(dict, &input, &mut lattice, start);
    }
    lattice.insert_eos();

    lattice
        .top_nodes()
        .into_iter()
        .map(|(end, node)| {
            let mut token = KoreanToken::new(
                input.surface(node.start, end),
                node.pos,
                node.start,
                end - node.start,
            );
            if let Some(stem) = node.stem {
                token = token.with_stem(stem);
            }
            if node.unknown {
                token = token.mark_unknown();
            }
            token
        })
        .collect()
}

fn add_edges(dict: &KoreanDictionary, input: &InputText, lattice: &mut Lattice, start: usize) {
    let mut has_matched = false;
    let rest = &input.raw()[input.byte_position(start)..];

    // Pattern recognizers, in declaration order.
    let patterns: [(&Regex, KoreanPos); 4] = [
        (&URL_RE, KoreanPos::Url),
        (&EMAIL_RE, KoreanPos::Email),
        (&SCREEN_NAME_RE, KoreanPos::ScreenName),
        (&HASHTAG_RE, KoreanPos::Hashtag),
    ];
    for (re, pos) in patterns {
        if let Some(m) = re.find(rest) {
            let end = start + m.as_str().chars().count();
            lattice.insert_node(start, end, Candidate::new(pos, PATTERN_COST));
            has_matched = true;
        }
    }

    // Maximal-munch script runs.
    match input.class(start) {
        ScriptClass::Space => {
            let end = start + input.run_len(start);
            lattice.insert_node(start, end, Candidate::new(KoreanPos::Space, SPACE_COST));
            has_matched = true;
        }
        ScriptClass::Digit => {
            // The regex extends the digit run over decimal/thousand marks.
            let m = NUMBER_RE.find(rest).expect("digit run starts with a digit");
            let end = start + m.as_str().chars().count();
            lattice.insert_node(start, end, Candidate::new(KoreanPos::Number, RUN_COST));
            has_matched = true;
        }
        ScriptClass::Latin => {
            let end = start + input.run_len(start);
            lattice.insert_node(start, end, Candidate::new(KoreanPos::Foreign, RUN_COST));
            has_matched = true;
        }
        ScriptClass::Jamo => {
            let end = start + input.run_len(start);
            lattice.insert_node(
                start,
                end,
                Candidate::new(KoreanPos::KoreanParticle, RUN_COST),
            );
            has_matched = true;
        }
        ScriptClass::Punct => {
            let end = start + input.run_len(start);
            lattice.insert_node(start, end, Candidate::new(KoreanPos::Punctuation, RUN_COST));
            has_matched = true;
        }
        ScriptClass::Other => {
            let end = start + input.run_len(start);
            lattice.insert_node(
                start,
                end,
                Candidate::new(KoreanPos::Others, RUN_COST).unknown(),
            );
            has_matched = true;
        }
        ScriptClass::Hangul => {
            let run = input.run_len(start);
            let max_len = run.min(dict.max_word_chars().max(1));
            for len in 1..=max_len {
                let end = start + len;
                let word = input.surface(start, end);
                for pos in LEXICAL_POS {
                    if dict.contains(pos, word) {
                        lattice.insert_node(start, end, Candidate::new(pos, WORD_COST));
                        has_matched = true;
                    }
                }
                for m in conjugation::matches(dict, &input.chars()[start..end]) {
                    lattice.insert_node(
                        start,
                        end,
                        Candidate::new(m.pos, WORD_COST).with_stem(m.stem),
                    );
                    has_matched = true;
                }
            }
            if !has_matched {
                // Unknown fallback: the prefixes of the unmatched run, and
                // always the full run itself.
                for len in (1..=run.min(MAX_UNKNOWN_PREFIX)).chain(
                    (run > MAX_UNKNOWN_PREFIX).then_some(run),
                ) {
                    let cost = UNKNOWN_BASE_COST + UNKNOWN_CHAR_COST * len as i32;
                    lattice.insert_node(
                        start,
                        start + len,
                        Candidate::new(KoreanPos::Noun, cost).unknown(),
                    );
                }
                has_matched = true;
            }
        }
    }

    debug_assert!(has_matched);
}
