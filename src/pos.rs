//! Part-of-speech categories.

use std::fmt;

/// Part-of-speech category of a Korean token.
///
/// The first group of variants are lexical categories backed by editable
/// dictionary partitions; the rest are produced by recognizers or the
/// unknown-word fallback and cannot be edited.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum KoreanPos {
    /// Noun (명사).
    Noun,
    /// Verb (동사), stored as the dictionary form ending in 다.
    Verb,
    /// Adjective (형용사), stored as the dictionary form ending in 다.
    Adjective,
    /// Adverb (부사).
    Adverb,
    /// Determiner (관형사).
    Determiner,
    /// Exclamation (감탄사).
    Exclamation,
    /// Postposition particle (조사).
    Josa,
    /// Verb/adjective ending (어미).
    Eomi,
    /// Pre-final ending (선어말어미).
    PreEomi,
    /// Conjunction (접속사).
    Conjunction,
    /// Modifier (수식언), e.g. numeral modifiers such as 백여.
    Modifier,
    /// Verb prefix (동사 접두사).
    VerbPrefix,
    /// Noun prefix (명사 접두사).
    NounPrefix,
    /// Suffix (접미사).
    Suffix,
    /// Whitespace run.
    Space,
    /// Punctuation run.
    Punctuation,
    /// Hashtag (#...).
    Hashtag,
    /// Screen name (@...).
    ScreenName,
    /// Email address.
    Email,
    /// URL.
    Url,
    /// Bare-jamo emotion run such as ㅋㅋㅋ or ㅠㅠ.
    KoreanParticle,
    /// Digit run.
    Number,
    /// Non-Korean letter run.
    Foreign,
    /// Unmatched span.
    Unknown,
    /// Anything else.
    Others,
}

/// Lexical categories in partition order.
pub(crate) const LEXICAL_POS: [KoreanPos; 14] = [
    KoreanPos::Noun,
    KoreanPos::Verb,
    KoreanPos::Adjective,
    KoreanPos::Adverb,
    KoreanPos::Determiner,
    KoreanPos::Exclamation,
    KoreanPos::Josa,
    KoreanPos::Eomi,
    KoreanPos::PreEomi,
    KoreanPos::Conjunction,
    KoreanPos::Modifier,
    KoreanPos::VerbPrefix,
    KoreanPos::NounPrefix,
    KoreanPos::Suffix,
];

impl KoreanPos {
    /// Index of the dictionary partition backing this category, or `None`
    /// for recognizer/fallback categories.
    #[inline(always)]
    pub(crate) const fn partition(self) -> Option<usize> {
        let id = self as usize;
        if id < LEXICAL_POS.len() {
            Some(id)
        } else {
            None
        }
    }

    /// Whether this category can appear in a dictionary partition.
    #[inline(always)]
    pub const fn is_lexical(self) -> bool {
        (self as usize) < LEXICAL_POS.len()
    }
}

impl fmt::Display for KoreanPos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
