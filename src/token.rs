//! Resultant tokens.

use std::fmt;

use crate::pos::KoreanPos;

/// A morpheme-level token produced by the tokenizer.
///
/// Offsets and lengths are in chars of the original input. Tokens produced
/// for one input are contiguous, gap-free (Space tokens included) and never
/// overlap.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct KoreanToken {
    /// Surface substring of the input.
    pub text: String,
    /// Part-of-speech category.
    pub pos: KoreanPos,
    /// Start position in chars.
    pub offset: usize,
    /// Span length in chars.
    pub length: usize,
    /// Dictionary base form, present for inflected Verb/Adjective tokens.
    pub stem: Option<String>,
    /// Whether this is an unmatched fallback span.
    pub unknown: bool,
}

impl KoreanToken {
    pub(crate) fn new(
        text: impl Into<String>,
        pos: KoreanPos,
        offset: usize,
        length: usize,
    ) -> Self {
        Self {
            text: text.into(),
            pos,
            offset,
            length,
            stem: None,
            unknown: false,
        }
    }

    pub(crate) fn with_stem(mut self, stem: String) -> Self {
        self.stem = Some(stem);
        self
    }

    pub(crate) fn mark_unknown(mut self) -> Self {
        self.unknown = true;
        self
    }
}

impl fmt::Display for KoreanToken {
    /// Renders `text(Pos: offset, length)`, with the stem in parentheses
    /// for inflected tokens, e.g. `착한(Adjective(착하다): 0, 2)`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.stem {
            Some(stem) => write!(
                f,
                "{}({}({}): {}, {})",
                self.text, self.pos, stem, self.offset, self.length
            ),
            None => write!(
                f,
                "{}({}: {}, {})",
                self.text, self.pos, self.offset, self.length
            ),
        }
    }
}

/// Projects tokens onto their surface strings, optionally dropping Space
/// tokens.
pub fn texts(tokens: &[KoreanToken], keep_space: bool) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| keep_space || t.pos != KoreanPos::Space)
        .map(|t| t.text.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let t = KoreanToken::new("강아지", KoreanPos::Noun, 2, 3);
        assert_eq!(t.to_string(), "강아지(Noun: 2, 3)");
        let t = KoreanToken::new("착한", KoreanPos::Adjective, 0, 2).with_stem("착하다".into());
        assert_eq!(t.to_string(), "착한(Adjective(착하다): 0, 2)");
    }

    #[test]
    fn test_texts() {
        let tokens = vec![
            KoreanToken::new("루루", KoreanPos::Noun, 0, 2),
            KoreanToken::new(" ", KoreanPos::Space, 2, 1),
            KoreanToken::new("야", KoreanPos::Josa, 3, 1),
        ];
        assert_eq!(texts(&tokens, true), vec!["루루", " ", "야"]);
        assert_eq!(texts(&tokens, false), vec!["루루", "야"]);
    }
}
