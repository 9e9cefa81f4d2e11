//! Line classification pre-pass
//!
//! Every line of an import block is sorted into metadata, blank, or card
//! candidate exactly once. Metadata extraction and card formatting both read
//! from the same classification.

use crate::core::MetaKey;
use crate::loader::meta::meta_value;

/// Which import block a text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// Main deck; may carry metadata lines anywhere
    Main,
    /// Sideboard; card lines only
    Sideboard,
}

impl Block {
    pub fn allows_meta(&self) -> bool {
        matches!(self, Block::Main)
    }
}

/// Classification of a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    /// A metadata line and its trimmed value
    Meta(MetaKey, &'a str),
    /// Anything else; the card formatter decides if it is well formed
    Candidate(&'a str),
}

/// Classify a single line as it would appear in `block`
pub fn classify_line(line: &str, block: Block) -> LineKind<'_> {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }

    if block.allows_meta() {
        if let Some(key) = MetaKey::for_line(line) {
            if let Some(value) = meta_value(line, key) {
                return LineKind::Meta(key, value);
            }
        }
    }

    LineKind::Candidate(line)
}

/// A block of text split into classified lines
#[derive(Debug, Clone)]
pub struct ClassifiedBlock<'a> {
    pub block: Block,
    pub lines: Vec<LineKind<'a>>,
}

impl<'a> ClassifiedBlock<'a> {
    pub fn new(text: &'a str, block: Block) -> Self {
        ClassifiedBlock {
            block,
            lines: text.lines().map(|line| classify_line(line, block)).collect(),
        }
    }

    /// Value of the first metadata line for `key`
    pub fn meta(&self, key: MetaKey) -> Option<&'a str> {
        self.lines.iter().find_map(|line| match line {
            LineKind::Meta(k, value) if *k == key => Some(*value),
            _ => None,
        })
    }

    /// Lines left for the card formatter, in order
    pub fn card_candidates(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.lines.iter().filter_map(|line| match line {
            LineKind::Candidate(text) => Some(*text),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_main_block() {
        let text = "name: my deck\n\n1 card name\npath:\n  \nbladiblah";
        let block = ClassifiedBlock::new(text, Block::Main);

        assert_eq!(
            block.lines,
            vec![
                LineKind::Meta(MetaKey::Name, "my deck"),
                LineKind::Blank,
                LineKind::Candidate("1 card name"),
                LineKind::Meta(MetaKey::Path, ""),
                LineKind::Blank,
                LineKind::Candidate("bladiblah"),
            ]
        );
        assert_eq!(block.meta(MetaKey::Name), Some("my deck"));
        assert_eq!(block.meta(MetaKey::Path), Some(""));
        assert_eq!(block.meta(MetaKey::Power), None);
        assert_eq!(
            block.card_candidates().collect::<Vec<_>>(),
            vec!["1 card name", "bladiblah"]
        );
    }

    #[test]
    fn test_sideboard_has_no_meta() {
        let block = ClassifiedBlock::new("name: my deck\n1 card", Block::Sideboard);
        assert_eq!(block.meta(MetaKey::Name), None);
        assert_eq!(
            block.card_candidates().collect::<Vec<_>>(),
            vec!["name: my deck", "1 card"]
        );
    }

    #[test]
    fn test_crlf_lines() {
        let block = ClassifiedBlock::new("name: crlf\r\n1 card\r\n", Block::Main);
        assert_eq!(block.meta(MetaKey::Name), Some("crlf"));
        assert_eq!(block.card_candidates().collect::<Vec<_>>(), vec!["1 card"]);
    }
}
