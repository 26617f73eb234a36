//! Sentence segmentation
//!
//! Splits text on the Devanagari danda. A configurable ASCII placeholder is
//! folded into the danda first, since inputs frequently use `?` where a
//! danda was meant.

use crate::types::{Sentence, DANDA, DEFAULT_PLACEHOLDER};

/// Danda-based sentence segmenter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segmenter {
    delimiter: char,
    placeholder: char,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(DANDA, DEFAULT_PLACEHOLDER)
    }
}

impl Segmenter {
    /// Create a segmenter for the given delimiter and placeholder
    pub fn new(delimiter: char, placeholder: char) -> Self {
        Self {
            delimiter,
            placeholder,
        }
    }

    /// The canonical delimiter
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Replace line breaks with spaces and the placeholder with the delimiter
    pub fn normalize(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    out.push(' ');
                }
                '\n' => out.push(' '),
                c if c == self.placeholder => out.push(self.delimiter),
                c => out.push(c),
            }
        }
        out
    }

    /// Split already-normalized text into sentences
    pub fn split_normalized(&self, normalized: &str) -> Vec<Sentence> {
        normalized
            .split(self.delimiter)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .enumerate()
            .map(|(index, text)| Sentence::new(text, index))
            .collect()
    }

    /// Normalize and split text into sentences
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        self.split_normalized(&self.normalize(text))
    }

    /// Join sentence texts with the delimiter
    pub fn join<'a>(&self, parts: impl IntoIterator<Item = &'a str>) -> String {
        join_with(self.delimiter, parts)
    }
}

/// Join sentence texts with `delimiter`
pub fn join_with<'a>(delimiter: char, parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut buf = [0u8; 4];
    let sep: &str = delimiter.encode_utf8(&mut buf);
    parts.into_iter().collect::<Vec<_>>().join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_basic_split() {
        let sentences = Segmenter::default().segment("राम घर गया। सीता बाज़ार गई।");
        assert_eq!(texts(&sentences), vec!["राम घर गया", "सीता बाज़ार गई"]);
        assert_eq!(sentences[0].index, 0);
        assert_eq!(sentences[1].index, 1);
    }

    #[test]
    fn test_placeholder_equivalent_to_danda() {
        let seg = Segmenter::default();
        assert_eq!(seg.segment("अ? ब। स? द"), seg.segment("अ। ब। स। द"));
    }

    #[test]
    fn test_line_breaks_become_spaces() {
        let seg = Segmenter::default();
        assert_eq!(seg.normalize("एक\nदो\r\nतीन\rचार"), "एक दो तीन चार");
        let sentences = seg.segment("पहली\nपंक्ति। दूसरी");
        assert_eq!(texts(&sentences), vec!["पहली पंक्ति", "दूसरी"]);
    }

    #[test]
    fn test_empty_fragments_dropped() {
        let sentences = Segmenter::default().segment("।।  । एक ।   ।");
        assert_eq!(texts(&sentences), vec!["एक"]);
        assert_eq!(sentences[0].index, 0);
    }

    #[test]
    fn test_empty_input() {
        assert!(Segmenter::default().segment("").is_empty());
        assert!(Segmenter::default().segment("   \n ").is_empty());
    }

    #[test]
    fn test_custom_delimiter() {
        let seg = Segmenter::new('.', '!');
        let sentences = seg.segment("one. two! three");
        assert_eq!(texts(&sentences), vec!["one", "two", "three"]);
        assert_eq!(seg.join(["a", "b"]), "a.b");
    }

    #[test]
    fn test_join_uses_danda() {
        assert_eq!(Segmenter::default().join(["अ", "ब"]), "अ।ब");
    }
}
