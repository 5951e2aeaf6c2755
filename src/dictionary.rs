//! Mutable dictionary store partitioned by part-of-speech.

use std::sync::atomic::{AtomicUsize, Ordering};

use hashbrown::HashSet;
use parking_lot::RwLock;

use crate::errors::{MoranError, Result};
use crate::pos::{KoreanPos, LEXICAL_POS};

/// Embedded base word lists, one per lexical partition, in partition order.
const BASE_WORDS: [&str; LEXICAL_POS.len()] = [
    include_str!("../data/noun.txt"),
    include_str!("../data/verb.txt"),
    include_str!("../data/adjective.txt"),
    include_str!("../data/adverb.txt"),
    include_str!("../data/determiner.txt"),
    include_str!("../data/exclamation.txt"),
    include_str!("../data/josa.txt"),
    include_str!("../data/eomi.txt"),
    include_str!("../data/pre_eomi.txt"),
    include_str!("../data/conjunction.txt"),
    include_str!("../data/modifier.txt"),
    include_str!("../data/verb_prefix.txt"),
    include_str!("../data/noun_prefix.txt"),
    include_str!("../data/suffix.txt"),
];

const TYPOS: &str = include_str!("../data/typos.txt");
const SPAM: &str = include_str!("../data/spam.txt");

/// Word-set store with one partition per lexical category.
///
/// Lookups take a short-lived read lock on a single partition, so
/// tokenization from many threads proceeds concurrently with occasional
/// add/remove calls from others. A lookup racing an edit sees the pre- or
/// post-edit state per word, never a torn set.
pub struct KoreanDictionary {
    partitions: Vec<RwLock<HashSet<String>>>,
    /// Longest word over all partitions, in chars. Never decreases.
    max_word_chars: AtomicUsize,
    typos: Vec<(String, String)>,
    spam: HashSet<String>,
}

impl KoreanDictionary {
    /// Creates a store initialized from the embedded base dictionary.
    ///
    /// # Errors
    ///
    /// [`MoranError`] is returned when an embedded data line is malformed.
    pub fn new() -> Result<Self> {
        let mut partitions = Vec::with_capacity(LEXICAL_POS.len());
        let mut max_word_chars = 0;
        for text in BASE_WORDS {
            let words = parse_word_list(text)?;
            for w in &words {
                max_word_chars = max_word_chars.max(w.chars().count());
            }
            partitions.push(RwLock::new(words));
        }
        Ok(Self {
            partitions,
            max_word_chars: AtomicUsize::new(max_word_chars),
            typos: parse_typos(TYPOS)?,
            spam: parse_word_list(SPAM)?,
        })
    }

    fn partition(&self, pos: KoreanPos) -> Result<&RwLock<HashSet<String>>> {
        pos.partition()
            .map(|id| &self.partitions[id])
            .ok_or_else(|| {
                MoranError::invalid_argument(
                    "pos",
                    format!("{pos} is not an editable dictionary category"),
                )
            })
    }

    /// Exact-match membership test.
    ///
    /// # Errors
    ///
    /// [`MoranError`] is returned when `pos` is not a lexical category.
    pub fn lookup(&self, pos: KoreanPos, word: &str) -> Result<bool> {
        Ok(self.partition(pos)?.read().contains(word))
    }

    /// Inserts words into a category partition. Idempotent; visible to all
    /// tokenization calls issued after this returns.
    ///
    /// # Errors
    ///
    /// [`MoranError`] is returned when `pos` is not a lexical category.
    pub fn add_words<I, S>(&self, pos: KoreanPos, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let partition = self.partition(pos)?;
        let mut set = partition.write();
        for word in words {
            let word = word.into();
            let len = word.chars().count();
            self.max_word_chars.fetch_max(len, Ordering::Relaxed);
            set.insert(word);
        }
        Ok(())
    }

    /// Removes words from a category partition if present. Removing a
    /// compound never removes its constituent words.
    ///
    /// # Errors
    ///
    /// [`MoranError`] is returned when `pos` is not a lexical category.
    pub fn remove_words<I, S>(&self, pos: KoreanPos, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let partition = self.partition(pos)?;
        let mut set = partition.write();
        for word in words {
            set.remove(word.as_ref());
        }
        Ok(())
    }

    /// Membership test without the category check, for the hot path.
    #[inline(always)]
    pub(crate) fn contains(&self, pos: KoreanPos, word: &str) -> bool {
        pos.partition()
            .map(|id| self.partitions[id].read().contains(word))
            .unwrap_or(false)
    }

    /// Upper bound of word lengths in chars over all partitions.
    #[inline(always)]
    pub(crate) fn max_word_chars(&self) -> usize {
        self.max_word_chars.load(Ordering::Relaxed)
    }

    /// Typo-correction pairs, longest key first.
    #[inline(always)]
    pub(crate) fn typos(&self) -> &[(String, String)] {
        &self.typos
    }

    /// Whether a word is in the spam/low-value marker set.
    #[inline(always)]
    pub(crate) fn is_spam(&self, word: &str) -> bool {
        self.spam.contains(word)
    }
}

fn parse_word_list(text: &str) -> Result<HashSet<String>> {
    let mut words = HashSet::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.split_whitespace().count() != 1 {
            let msg = format!("A word list line must be a single word, {line}");
            return Err(MoranError::invalid_format("word list", msg));
        }
        words.insert(line.to_string());
    }
    Ok(words)
}

fn parse_typos(text: &str) -> Result<Vec<(String, String)>> {
    let mut pairs = vec![];
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let cols: Vec<_> = line.split_whitespace().collect();
        if cols.len() != 2 {
            let msg = format!("A typo line must have two columns, {line}");
            return Err(MoranError::invalid_format("typos", msg));
        }
        pairs.push((cols[0].to_string(), cols[1].to_string()));
    }
    // Longest key first so that more specific corrections win.
    pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_base_lookup() {
        let dict = KoreanDictionary::new().unwrap();
        assert!(dict.lookup(KoreanPos::Noun, "강아지").unwrap());
        assert!(dict.lookup(KoreanPos::Josa, "에").unwrap());
        assert!(dict.lookup(KoreanPos::Verb, "받다").unwrap());
        assert!(!dict.lookup(KoreanPos::Noun, "평창올림픽").unwrap());
    }

    #[test]
    fn test_add_remove_idempotent() {
        let dict = KoreanDictionary::new().unwrap();
        dict.add_words(KoreanPos::Noun, ["평창올림픽"]).unwrap();
        dict.add_words(KoreanPos::Noun, ["평창올림픽"]).unwrap();
        assert!(dict.lookup(KoreanPos::Noun, "평창올림픽").unwrap());
        dict.remove_words(KoreanPos::Noun, ["평창올림픽"]).unwrap();
        dict.remove_words(KoreanPos::Noun, ["평창올림픽"]).unwrap();
        assert!(!dict.lookup(KoreanPos::Noun, "평창올림픽").unwrap());
        // Constituents are untouched.
        assert!(dict.lookup(KoreanPos::Noun, "평창").unwrap());
        assert!(dict.lookup(KoreanPos::Noun, "올림픽").unwrap());
    }

    #[test]
    fn test_invalid_category() {
        let dict = KoreanDictionary::new().unwrap();
        assert!(dict.lookup(KoreanPos::Space, "x").is_err());
        assert!(dict.add_words(KoreanPos::Hashtag, ["#x"]).is_err());
        assert!(dict.remove_words(KoreanPos::Unknown, ["x"]).is_err());
    }

    #[test]
    fn test_max_word_chars_grows() {
        let dict = KoreanDictionary::new().unwrap();
        let before = dict.max_word_chars();
        dict.add_words(KoreanPos::Noun, ["가나다라마바사아자차카타파하가나"])
            .unwrap();
        assert!(dict.max_word_chars() >= 16);
        assert!(dict.max_word_chars() >= before);
    }

    #[test]
    fn test_typos_sorted_longest_first() {
        let dict = KoreanDictionary::new().unwrap();
        let typos = dict.typos();
        assert!(!typos.is_empty());
        for w in typos.windows(2) {
            assert!(w[0].0.len() >= w[1].0.len());
        }
        // No replacement may reintroduce a key.
        for (_, to) in typos {
            for (from, _) in typos {
                assert!(!to.contains(from.as_str()), "{to} contains key {from}");
            }
        }
    }

    #[test]
    fn test_concurrent_reads_and_writes() {
        let dict = Arc::new(KoreanDictionary::new().unwrap());
        let mut handles = vec![];
        for i in 0..4 {
            let dict = Arc::clone(&dict);
            handles.push(std::thread::spawn(move || {
                for j in 0..100 {
                    if i == 0 {
                        dict.add_words(KoreanPos::Noun, [format!("단어{j}")]).unwrap();
                    } else {
                        let _ = dict.contains(KoreanPos::Noun, "강아지");
                        let _ = dict.contains(KoreanPos::Noun, "단어50");
                    }
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        assert!(dict.lookup(KoreanPos::Noun, "단어99").unwrap());
    }
}
