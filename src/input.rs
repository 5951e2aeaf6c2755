//! Char-indexed view of the input text.

use crate::hangul;

/// Script class of a single char, used by the closed-class recognizers and
/// the unknown-word fallback.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) enum ScriptClass {
    /// Whitespace.
    Space,
    /// Precomposed Hangul syllable.
    Hangul,
    /// Bare compatibility jamo (ㅋ, ㅠ, ...).
    Jamo,
    /// Latin letter.
    Latin,
    /// ASCII digit.
    Digit,
    /// Punctuation or common symbol.
    Punct,
    /// Everything else.
    Other,
}

pub(crate) fn script_class(c: char) -> ScriptClass {
    if c.is_whitespace() {
        ScriptClass::Space
    } else if hangul::is_syllable(c) {
        ScriptClass::Hangul
    } else if hangul::is_compat_jamo(c) {
        ScriptClass::Jamo
    } else if c.is_ascii_alphabetic() {
        ScriptClass::Latin
    } else if c.is_ascii_digit() {
        ScriptClass::Digit
    } else if c.is_ascii_punctuation() || matches!(c, '…' | '·' | '「' | '」' | '『' | '』' | '。' | '、') {
        ScriptClass::Punct
    } else {
        ScriptClass::Other
    }
}

/// Input text with precomputed char positions and script classes.
#[derive(Default, Clone, Debug)]
pub(crate) struct InputText {
    input: String,
    chars: Vec<char>,
    c2b: Vec<usize>,
    classes: Vec<ScriptClass>,
}

impl InputText {
    pub fn new<S>(input: S) -> Self
    where
        S: AsRef<str>,
    {
        let input = input.as_ref().to_string();
        let mut chars = vec![];
        let mut c2b = vec![];
        let mut classes = vec![];
        for (bi, ch) in input.char_indices() {
            chars.push(ch);
            c2b.push(bi);
            classes.push(script_class(ch));
        }
        c2b.push(input.len());
        Self {
            input,
            chars,
            c2b,
            classes,
        }
    }

    #[inline(always)]
    pub fn raw(&self) -> &str {
        &self.input
    }

    #[inline(always)]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    #[inline(always)]
    pub fn len_char(&self) -> usize {
        self.chars.len()
    }

    #[inline(always)]
    pub fn byte_position(&self, pos_char: usize) -> usize {
        self.c2b[pos_char]
    }

    #[inline(always)]
    pub fn class(&self, pos_char: usize) -> ScriptClass {
        self.classes[pos_char]
    }

    /// Surface substring for a char range.
    #[inline(always)]
    pub fn surface(&self, start_char: usize, end_char: usize) -> &str {
        &self.input[self.byte_position(start_char)..self.byte_position(end_char)]
    }

    /// Length of the maximal run of chars sharing the class at `pos_char`.
    pub fn run_len(&self, pos_char: usize) -> usize {
        let class = self.classes[pos_char];
        self.classes[pos_char..]
            .iter()
            .take_while(|&&c| c == class)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes() {
        assert_eq!(script_class('가'), ScriptClass::Hangul);
        assert_eq!(script_class('ㅋ'), ScriptClass::Jamo);
        assert_eq!(script_class(' '), ScriptClass::Space);
        assert_eq!(script_class('a'), ScriptClass::Latin);
        assert_eq!(script_class('7'), ScriptClass::Digit);
        assert_eq!(script_class('!'), ScriptClass::Punct);
        assert_eq!(script_class('…'), ScriptClass::Punct);
        assert_eq!(script_class('😀'), ScriptClass::Other);
    }

    #[test]
    fn test_positions() {
        let t = InputText::new("한a ㅋ");
        assert_eq!(t.len_char(), 4);
        assert_eq!(t.byte_position(0), 0);
        assert_eq!(t.byte_position(1), 3);
        assert_eq!(t.byte_position(2), 4);
        assert_eq!(t.byte_position(4), t.raw().len());
        assert_eq!(t.surface(0, 2), "한a");
    }

    #[test]
    fn test_run_len() {
        let t = InputText::new("ㅋㅋㅋ가가!");
        assert_eq!(t.run_len(0), 3);
        assert_eq!(t.run_len(3), 2);
        assert_eq!(t.run_len(5), 1);
    }

    #[test]
    fn test_empty() {
        let t = InputText::new("");
        assert_eq!(t.len_char(), 0);
        assert_eq!(t.byte_position(0), 0);
    }
}
