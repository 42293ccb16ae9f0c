use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use serde::Deserialize;

use crate::word_generator::WordSource;

static WORD_LISTS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/src/word_lists");

/// A named word list embedded into the binary.
#[derive(Debug, Clone, Deserialize)]
pub struct Language {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl Language {
    /// Loads an embedded word list by name. `None` when the list is missing
    /// or malformed; callers treat that as fatal to starting a test.
    pub fn new(name: &str) -> Option<Self> {
        let file = WORD_LISTS.get_file(format!("{}.json", name))?;
        serde_json::from_str(file.contents_utf8()?).ok()
    }

    /// Samples `count` words uniformly, with replacement, so a batch can be
    /// larger than the list itself.
    pub fn get_random(&self, count: usize) -> Vec<String> {
        let mut rng = rand::thread_rng();
        (0..count)
            .filter_map(|_| self.words.choose(&mut rng).cloned())
            .collect()
    }
}

impl WordSource for Language {
    fn words(&self, count: usize) -> Vec<String> {
        self.get_random(count)
    }
}
