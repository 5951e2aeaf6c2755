//! Dictionary-based morphological analysis of Korean text.
//!
//! The engine segments raw input into morpheme-level tokens tagged with
//! part-of-speech categories, normalizes informal spellings, splits text
//! into sentences, extracts noun phrases, and reassembles morphemes back
//! into naturally spaced text. The dictionary is mutable at runtime and
//! safe to edit while other threads tokenize.
//!
//! # Examples
//!
//! ```
//! use moran::KoreanProcessor;
//!
//! let engine = KoreanProcessor::new().unwrap();
//!
//! let tokens = engine.tokenize("착한강아지상을 받은 루루");
//! assert_eq!(tokens[0].to_string(), "착한(Adjective(착하다): 0, 2)");
//! assert_eq!(tokens[1].to_string(), "강아지(Noun: 2, 3)");
//!
//! assert_eq!(engine.normalize("그래욬ㅋㅋ"), "그래요ㅋㅋㅋ");
//! ```
#![deny(missing_docs)]

mod conjugation;
mod detokenizer;
pub mod dictionary;
pub mod errors;
mod hangul;
mod input;
mod normalizer;
pub mod phrase;
pub mod pos;
pub mod processor;
pub mod splitter;
pub mod token;
mod tokenizer;


pub use dictionary::KoreanDictionary;
pub use errors::{MoranError, Result};
pub use phrase::KoreanPhrase;
pub use pos::KoreanPos;
pub use processor::KoreanProcessor;
pub use splitter::Sentence;
pub use token::{texts, KoreanToken};
