//! Sentence boundary detection.

use std::fmt;

/// A sentence span of the input, in chars of the original text.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Sentence {
    /// Surface substring of the input.
    pub text: String,
    /// Start position in chars.
    pub offset: usize,
    /// Span length in chars.
    pub length: usize,
}

impl fmt::Display for Sentence {
    /// Renders `text(start,end)`, e.g. `안녕하세요.(0,6)`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({},{})", self.text, self.offset, self.offset + self.length)
    }
}

const TERMINALS: [char; 4] = ['.', '!', '?', '…'];

fn is_opening(c: char) -> bool {
    matches!(c, '(' | '[' | '{' | '「' | '『' | '［')
}

fn is_closing(c: char) -> bool {
    matches!(c, ')' | ']' | '}' | '」' | '』' | '］')
}

/// Splits text into sentences on terminal punctuation runs that are not
/// inside an unbalanced bracket or quotation. Trailing content without
/// terminal punctuation forms a final sentence; inter-sentence whitespace
/// belongs to no sentence.
pub(crate) fn split(text: &str) -> Vec<Sentence> {
    let chars: Vec<char> = text.chars().collect();
    let n = chars.len();
    let mut sentences = vec![];
    let mut i = 0;
    while i < n {
        while i < n && chars[i].is_whitespace() {
            i += 1;
        }
        if i == n {
            break;
        }
        let start = i;
        let mut depth = 0u32;
        let mut in_quote = false;
        let mut end = n;
        let mut j = start;
        while j < n {
            let c = chars[j];
            if is_opening(c) {
                depth += 1;
            } else if is_closing(c) {
                depth = depth.saturating_sub(1);
            } else {
                match c {
                    '"' => in_quote = !in_quote,
                    '“' => in_quote = true,
                    '”' => in_quote = false,
                    _ => {}
                }
            }
            if depth == 0 && !in_quote && TERMINALS.contains(&c) {
                // The sentence closes at the end of the punctuation run.
                let mut k = j + 1;
                while k < n && TERMINALS.contains(&chars[k]) {
                    k += 1;
                }
                end = k;
                break;
            }
            j += 1;
        }
        sentences.push(Sentence {
            text: chars[start..end].iter().collect(),
            offset: start,
            length: end - start,
        });
        i = end;
    }
    sentences
}
