//! The analysis engine facade.

use crate::detokenizer;
use crate::dictionary::KoreanDictionary;
use crate::errors::Result;
use crate::normalizer;
use crate::phrase::{self, KoreanPhrase};
use crate::pos::KoreanPos;
use crate::splitter::{self, Sentence};
use crate::token::KoreanToken;
use crate::tokenizer;

/// The morphological analysis engine.
///
/// A processor owns the mutable dictionary store; every operation takes
/// `&self` and may be called concurrently from multiple threads. Dictionary
/// edits are visible to all calls issued after the edit returns.
///
/// # Examples
///
/// ```
/// use moran::{KoreanPos, KoreanProcessor};
///
/// let engine = KoreanProcessor::new().unwrap();
/// let tokens = engine.tokenize("루루에게");
/// assert_eq!(tokens[0].text, "루루");
/// assert_eq!(tokens[1].pos, KoreanPos::Josa);
/// ```
pub struct KoreanProcessor {
    dict: KoreanDictionary,
}

impl KoreanProcessor {
    /// Creates an engine initialized from the embedded base dictionary.
    ///
    /// # Errors
    ///
    /// [`crate::errors::MoranError`] is returned when an embedded data
    /// line is malformed.
    pub fn new() -> Result<Self> {
        Ok(Self {
            dict: KoreanDictionary::new()?,
        })
    }

    /// Rewrites informal spellings into canonical forms. Idempotent:
    /// normalizing an already-normalized string returns it unchanged.
    pub fn normalize(&self, text: &str) -> String {
        normalizer::normalize(&self.dict, text)
    }

    /// Segments text into morpheme-level tokens. The tokens are contiguous,
    /// gap-free (Space tokens included) and cover the whole input; empty
    /// input yields an empty sequence.
    pub fn tokenize(&self, text: &str) -> Vec<KoreanToken> {
        tokenizer::tokenize(&self.dict, text)
    }

    /// Exact-match membership test against a dictionary partition.
    ///
    /// # Errors
    ///
    /// [`crate::errors::MoranError`] is returned when `pos` is not a
    /// lexical category.
    pub fn lookup(&self, pos: KoreanPos, word: &str) -> Result<bool> {
        self.dict.lookup(pos, word)
    }

    /// Inserts words into a dictionary partition. Idempotent.
    ///
    /// # Errors
    ///
    /// [`crate::errors::MoranError`] is returned when `pos` is not a
    /// lexical category.
    pub fn add_words<I, S>(&self, pos: KoreanPos, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dict.add_words(pos, words)
    }

    /// Removes words from a dictionary partition if present. Removing a
    /// compound never removes its constituent words.
    ///
    /// # Errors
    ///
    /// [`crate::errors::MoranError`] is returned when `pos` is not a
    /// lexical category.
    pub fn remove_words<I, S>(&self, pos: KoreanPos, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.dict.remove_words(pos, words)
    }

    /// Convenience for [`Self::add_words`] with the Noun category.
    pub fn add_nouns<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        // Noun is always a lexical category.
        self.dict
            .add_words(KoreanPos::Noun, words)
            .expect("Noun is an editable category");
    }

    /// Splits text into sentences on terminal punctuation, respecting
    /// quotation and bracket balancing.
    pub fn split_sentences(&self, text: &str) -> Vec<Sentence> {
        splitter::split(text)
    }

    /// Extracts noun phrases (single nouns, compounds, hashtags) from a
    /// token sequence produced by [`Self::tokenize`].
    pub fn extract_phrases(
        &self,
        tokens: &[KoreanToken],
        filter_spam: bool,
        include_hashtags: bool,
    ) -> Vec<KoreanPhrase> {
        phrase::extract(&self.dict, tokens, filter_spam, include_hashtags)
    }

    /// Reassembles morphemes into a single naturally spaced string.
    pub fn detokenize<I, S>(&self, morphemes: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        detokenizer::detokenize(&self.dict, morphemes)
    }
}
