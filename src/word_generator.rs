use crate::row::{Row, WordToken};

/// Source of the word batch for a test. The production implementation is
/// [`crate::language::Language`]; tests substitute deterministic sources.
pub trait WordSource {
    fn words(&self, count: usize) -> Vec<String>;
}

/// Configuration for row generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordGenConfig {
    pub number_of_words: usize,
    pub row_width: usize,
}

impl Default for WordGenConfig {
    fn default() -> Self {
        Self {
            number_of_words: 350,
            row_width: 60,
        }
    }
}

/// Pulls a word batch from a source and packs it into display rows.
#[derive(Debug, Clone)]
pub struct WordGenerator {
    config: WordGenConfig,
}

impl WordGenerator {
    pub fn new(config: WordGenConfig) -> Self {
        Self { config }
    }

    pub fn generate_rows(&self, source: &dyn WordSource) -> Vec<Row> {
        pack_rows(
            &source.words(self.config.number_of_words),
            self.config.row_width,
        )
    }
}

/// Greedy row packing: words accumulate into the current row while the
/// running character sum stays below `row_width`; the word that would reach
/// the budget starts the next row. Always yields at least one row, even for
/// an empty batch.
pub fn pack_rows(words: &[String], row_width: usize) -> Vec<Row> {
    let mut rows: Vec<Row> = Vec::new();
    let mut current = Row::default();
    let mut char_count = 0usize;

    for word in words {
        char_count += word.chars().count();
        if char_count >= row_width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            char_count = word.chars().count();
        }
        current.words.push(WordToken::new(word.clone()));
    }
    rows.push(current);
    rows
}
