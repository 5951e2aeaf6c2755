//! Informal-text normalizer.
//!
//! An ordered pipeline of pure text-to-text passes run to a fixed point, so
//! normalizing an already-normalized string returns it unchanged.

use crate::conjugation;
use crate::dictionary::KoreanDictionary;
use crate::hangul;
use crate::input::{script_class, ScriptClass};
use crate::pos::{KoreanPos, LEXICAL_POS};

/// Longest surviving run of a repeated emphasis char.
const MAX_REPEAT: usize = 3;
/// Every pass is idempotent once its rewrites are exhausted; two rounds
/// settle in practice, the rest are slack.
const MAX_ROUNDS: usize = 4;
/// Codas that shed into a following laughter/crying run (그래욬ㅋㅋ).
const EMOTION_CODAS: [char; 2] = ['ㅋ', 'ㅎ'];

/// Rewrites informal spellings into canonical forms.
pub(crate) fn normalize(dict: &KoreanDictionary, text: &str) -> String {
    let mut cur = text.to_string();
    for _ in 0..MAX_ROUNDS {
        let next = extract_emotion_codas(&cur);
        let next = collapse_repeats(&next);
        let next = apply_typos(dict, &next);
        let next = correct_endings(dict, &next);
        if next == cur {
            break;
        }
        cur = next;
    }
    cur
}

/// A syllable whose coda matches the immediately following compatibility
/// jamo sheds the coda into the run: 그래욬ㅋㅋ becomes 그래요ㅋㅋㅋ. Never
/// applies at the end of a chunk, so real ㅋ/ㅎ-coda words (부엌) are left
/// alone.
fn extract_emotion_codas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        match hangul::strip_coda(c) {
            Some((open, jamo))
                if EMOTION_CODAS.contains(&jamo) && chars.get(i + 1) == Some(&jamo) =>
            {
                out.push(open);
                out.push(jamo);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Whether a repeated run of this char is emphasis rather than content.
fn collapsible(c: char) -> bool {
    matches!(script_class(c), ScriptClass::Hangul | ScriptClass::Jamo)
        || matches!(c, '!' | '?' | '.' | '~' | ',')
}

/// Collapses runs of a repeated emphasis char longer than [`MAX_REPEAT`]
/// down to [`MAX_REPEAT`], keeping the expressive intent.
fn collapse_repeats(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev = None;
    let mut run = 0;
    for c in text.chars() {
        if prev == Some(c) {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }
        if run <= MAX_REPEAT || !collapsible(c) {
            out.push(c);
        }
    }
    out
}

/// Data-driven typo replacements, longest key first. The table is checked
/// at load time to never reintroduce one of its own keys, so a single
/// sweep is exhaustive.
fn apply_typos(dict: &KoreanDictionary, text: &str) -> String {
    let mut out = text.to_string();
    for (from, to) in dict.typos() {
        if out.contains(from.as_str()) {
            out = out.replace(from.as_str(), to);
        }
    }
    out
}

/// Dictionary-assisted ending correction over whole Hangul chunks.
fn correct_endings(dict: &KoreanDictionary, text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if script_class(chars[i]) == ScriptClass::Hangul {
            let run = chars[i..]
                .iter()
                .take_while(|&&c| script_class(c) == ScriptClass::Hangul)
                .count();
            out.push_str(&correct_chunk(dict, &chars[i..i + run]));
            i += run;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

/// If the chunk is neither a dictionary word nor a valid inflected form,
/// but splits as known-stem + near-miss of a valid ending (one char edit
/// away), rewrites it to the canonical inflected form.
fn correct_chunk(dict: &KoreanDictionary, chunk: &[char]) -> String {
    let surface: String = chunk.iter().collect();
    if chunk.len() < 2 {
        return surface;
    }
    for pos in LEXICAL_POS {
        if dict.contains(pos, &surface) {
            return surface;
        }
    }
    if !conjugation::matches(dict, chunk).is_empty() {
        return surface;
    }
    // Longer stems first, so the most specific correction wins. A
    // same-length substitution (받앗 → 받았) beats an insertion or
    // deletion (받앗 → 받아).
    let target_len = jamo_seq(&surface).len();
    let mut fallback = None;
    for k in (1..chunk.len()).rev() {
        let stem: String = chunk[..k].iter().collect();
        let dict_form = format!("{stem}다");
        if !dict.contains(KoreanPos::Verb, &dict_form)
            && !dict.contains(KoreanPos::Adjective, &dict_form)
        {
            continue;
        }
        for form in conjugation::surface_forms(&dict_form) {
            if form == surface || !within_one_jamo_edit(&surface, &form) {
                continue;
            }
            if jamo_seq(&form).len() == target_len {
                return form;
            }
            fallback.get_or_insert(form);
        }
    }
    fallback.unwrap_or(surface)
}

/// Decomposes syllables into their compatibility jamo; other chars pass
/// through. The edit budget is measured on this sequence, so 받앗/받았
/// differ by one jamo while 하루/하은 are far apart.
fn jamo_seq(s: &str) -> Vec<char> {
    let mut out = vec![];
    for c in s.chars() {
        match hangul::decompose(c) {
            Some(syl) => {
                out.extend(hangul::onset_to_jamo(syl.onset));
                out.extend(hangul::vowel_to_jamo(syl.vowel));
                out.extend(hangul::coda_to_jamo(syl.coda));
            }
            None => out.push(c),
        }
    }
    out
}

/// Levenshtein distance over jamo, exactly one edit.
fn within_one_jamo_edit(a: &str, b: &str) -> bool {
    let a = jamo_seq(a);
    let b = jamo_seq(b);
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    match long.len() - short.len() {
        0 => {
            let diffs = a.iter().zip(&b).filter(|(x, y)| x != y).count();
            diffs == 1
        }
        1 => {
            let mut i = 0;
            while i < short.len() && short[i] == long[i] {
                i += 1;
            }
            short[i..] == long[i + 1..]
        }
        _ => false,
    }
}
